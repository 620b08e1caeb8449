//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - consumer settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the model state at t = 0 (`System` of bodies or `Chain` of links)
//!
//! Every input is validated here, so a built `Scenario` never holds a
//! non-positive mass or length, a zero cadence period, or two bodies at
//! the same point.

use crate::configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig, SystemConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::cadence::Cadence;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Parameters;
use crate::simulation::pendulum::chain_integrator;
use crate::simulation::states::{Body, Chain, NPoint2, NVec2, System};

/// The state being simulated
pub enum Model {
    Gravity {
        system: System,
        forces: ForceSet,
    },
    Pendulum(Chain),
}

/// Runtime bundle constructed from a [`ScenarioConfig`]: engine settings,
/// parameters and the current model state
pub struct Scenario {
    pub name: String,
    pub engine: Engine,
    pub parameters: Parameters,
    pub model: Model,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let name = cfg.name.unwrap_or_else(|| "unnamed".to_string());
        let engine = build_engine(&cfg.engine)?;
        let parameters = build_parameters(&cfg.parameters)?;

        let model = match cfg.system {
            SystemConfig::Gravity { bodies } => {
                if bodies.is_empty() {
                    return Err(SimError::config("gravity scenario has no bodies"));
                }
                // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
                let bodies = bodies.iter().map(build_body).collect::<SimResult<Vec<Body>>>()?;
                let system = System::new(bodies);
                system.check_coincident()?;

                let forces = ForceSet::new().with(NewtonianGravity {
                    g: parameters.gravity,
                });
                Model::Gravity { system, forces }
            }
            SystemConfig::Pendulum { anchor, links } => {
                if links.is_empty() {
                    return Err(SimError::config("pendulum scenario has no links"));
                }
                let specs: Vec<(f64, f64, f64)> = links
                    .iter()
                    .map(|l| (l.length, l.mass, l.angle_deg.to_radians()))
                    .collect();
                let chain = Chain::from_specs(NPoint2::new(anchor[0], anchor[1]), &specs)?;
                Model::Pendulum(chain)
            }
        };

        log::info!(
            "built scenario '{}': {} {}, dt = {}, gravity = {}",
            name,
            model.len(),
            match model {
                Model::Gravity { .. } => "bodies",
                Model::Pendulum(_) => "links",
            },
            parameters.dt,
            parameters.gravity
        );

        Ok(Self {
            name,
            engine,
            parameters,
            model,
        })
    }

    /// Advance the model by one fixed step
    pub fn step(&mut self) -> SimResult<()> {
        match &mut self.model {
            Model::Gravity { system, forces } => symplectic_euler(system, forces, &self.parameters),
            Model::Pendulum(chain) => {
                chain_integrator(chain, &self.parameters);
                Ok(())
            }
        }
    }

    /// Current simulation time
    pub fn time(&self) -> f64 {
        match &self.model {
            Model::Gravity { system, .. } => system.t,
            Model::Pendulum(chain) => chain.t,
        }
    }

    /// Points a renderer draws: body centres, or the chain's anchor and joints
    pub fn joints(&self) -> Vec<NPoint2> {
        match &self.model {
            Model::Gravity { system, .. } => system.bodies.iter().map(|b| b.x).collect(),
            Model::Pendulum(chain) => chain.joints(),
        }
    }

    /// Points that leave a trace: every body, or the chain tip
    pub fn trace_points(&self) -> Vec<NPoint2> {
        match &self.model {
            Model::Gravity { system, .. } => system.bodies.iter().map(|b| b.x).collect(),
            Model::Pendulum(chain) => chain.tip().into_iter().collect(),
        }
    }
}

impl Model {
    /// Number of bodies or links
    pub fn len(&self) -> usize {
        match self {
            Model::Gravity { system, .. } => system.bodies.len(),
            Model::Pendulum(chain) => chain.links.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn build_body(bc: &BodyConfig) -> SimResult<Body> {
    let body = Body::new(
        NPoint2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.m,
        bc.radius,
    )?;
    Ok(if bc.stationary { body.pinned() } else { body })
}

fn build_parameters(p_cfg: &ParametersConfig) -> SimResult<Parameters> {
    if !(p_cfg.dt.is_finite() && p_cfg.dt > 0.0) {
        return Err(SimError::config(format!("dt must be finite and > 0, got {}", p_cfg.dt)));
    }
    if !p_cfg.gravity.is_finite() {
        return Err(SimError::config(format!("gravity must be finite, got {}", p_cfg.gravity)));
    }
    Ok(Parameters {
        dt: p_cfg.dt,
        steps: p_cfg.steps,
        gravity: p_cfg.gravity,
    })
}

fn build_engine(e_cfg: &EngineConfig) -> SimResult<Engine> {
    // Reject zero periods here rather than when the runner starts
    for period in [e_cfg.view_refresh, e_cfg.bounds_refit, e_cfg.trace_sample] {
        Cadence::new(period)?;
    }
    if !(e_cfg.zoom.is_finite() && e_cfg.zoom > 0.0) {
        return Err(SimError::config(format!("zoom must be finite and > 0, got {}", e_cfg.zoom)));
    }
    Ok(Engine {
        view_refresh: e_cfg.view_refresh,
        bounds_refit: e_cfg.bounds_refit,
        trace_sample: e_cfg.trace_sample,
        trace_length: e_cfg.trace_length,
        auto_fit: e_cfg.auto_fit,
        zoom: e_cfg.zoom,
    })
}
