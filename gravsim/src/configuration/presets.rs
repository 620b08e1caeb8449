//! Named built-in scenarios
//!
//! Each [`Preset`] maps to a complete [`ScenarioConfig`], so the binary can
//! run without a YAML file and tests can share known setups.

use clap::ValueEnum;

use super::config::{BodyConfig, EngineConfig, LinkConfig, ParametersConfig, ScenarioConfig, SystemConfig};

/// Gravitational constant for the n-body presets; not the physical one, the masses are not real either
pub const GRAVITATIONAL_CONSTANT: f64 = 100000.0;

/// Gravitational acceleration for the pendulum presets
pub const SURFACE_GRAVITY: f64 = 9.81;

/// Fixed step shared by every preset
pub const TIME_STEP: f64 = 0.05;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Light planet circling a pinned sun
    NormalOrbit,
    /// Faster launch, strongly elliptic orbit
    Elongated,
    /// Two free bodies pulling each other around
    Chasing,
    /// Free sun with two small planets
    AroundTheSun,
    /// Three equal masses released at rest
    ThreeBody,
    /// Three-link pendulum chain
    TriplePendulum,
}

fn body(x: [f64; 2], v: [f64; 2], m: f64, radius: f64) -> BodyConfig {
    BodyConfig { x, v, m, radius, stationary: false }
}

fn gravity_engine(trace_length: usize, auto_fit: bool) -> EngineConfig {
    // Redraw, refit and trace all happen on the same every-4th-tick beat
    EngineConfig {
        view_refresh: 4,
        bounds_refit: 4,
        trace_sample: 4,
        trace_length,
        auto_fit,
        zoom: 1.0,
    }
}

fn gravity_parameters() -> ParametersConfig {
    ParametersConfig {
        dt: TIME_STEP,
        steps: 2000,
        gravity: GRAVITATIONAL_CONSTANT,
    }
}

impl Preset {
    pub fn config(self) -> ScenarioConfig {
        match self {
            Preset::NormalOrbit => ScenarioConfig {
                name: Some("normal orbit".into()),
                engine: gravity_engine(2000, false),
                parameters: gravity_parameters(),
                system: SystemConfig::Gravity {
                    bodies: vec![
                        BodyConfig { stationary: true, ..body([0.0, 0.0], [0.0, 0.0], 1.0, 100.0) },
                        body([250.0, 250.0], [10.0, -10.0], 0.5, 60.0),
                    ],
                },
            },
            Preset::Elongated => ScenarioConfig {
                name: Some("elongated".into()),
                engine: gravity_engine(20000, true),
                parameters: gravity_parameters(),
                system: SystemConfig::Gravity {
                    bodies: vec![
                        BodyConfig { stationary: true, ..body([0.0, 0.0], [0.0, 0.0], 1.0, 100.0) },
                        body([250.0, 250.0], [15.0, -15.0], 0.5, 60.0),
                    ],
                },
            },
            Preset::Chasing => ScenarioConfig {
                name: Some("chasing".into()),
                engine: gravity_engine(2000, true),
                parameters: gravity_parameters(),
                system: SystemConfig::Gravity {
                    bodies: vec![
                        body([0.0, 0.0], [0.0, 0.0], 1.0, 100.0),
                        body([250.0, 250.0], [10.0, -30.0], 2.0, 60.0),
                    ],
                },
            },
            Preset::AroundTheSun => ScenarioConfig {
                name: Some("around the sun".into()),
                engine: gravity_engine(10000, false),
                parameters: gravity_parameters(),
                system: SystemConfig::Gravity {
                    bodies: vec![
                        body([0.0, 0.0], [0.0, 0.0], 1.0, 100.0),
                        body([250.0, 250.0], [10.0, -10.0], 1.0 / 50.0, 60.0),
                        body([-250.0, -250.0], [-10.0, 10.0], 1.0 / 100.0, 30.0),
                    ],
                },
            },
            Preset::ThreeBody => {
                let tilt = (-30.0f64).to_radians();
                ScenarioConfig {
                    name: Some("three body".into()),
                    engine: gravity_engine(200000, false),
                    parameters: gravity_parameters(),
                    system: SystemConfig::Gravity {
                        bodies: vec![
                            body([0.0, -600.0], [0.0, 0.0], 1.0, 100.0),
                            body([-700.0 * tilt.cos(), -700.0 * tilt.sin()], [0.0, 0.0], 1.0, 100.0),
                            body([400.0 * tilt.cos(), -400.0 * tilt.sin()], [0.0, 0.0], 1.0, 100.0),
                        ],
                    },
                }
            }
            Preset::TriplePendulum => ScenarioConfig {
                name: Some("triple pendulum".into()),
                engine: EngineConfig {
                    view_refresh: 4,
                    bounds_refit: 64,
                    trace_sample: 8,
                    trace_length: 2000,
                    auto_fit: false,
                    zoom: 2.0,
                },
                parameters: ParametersConfig {
                    dt: TIME_STEP,
                    steps: 2000,
                    gravity: SURFACE_GRAVITY,
                },
                system: SystemConfig::Pendulum {
                    anchor: [0.0, 0.0],
                    links: vec![
                        LinkConfig { length: 100.0, mass: 50.0, angle_deg: -30.0 },
                        LinkConfig { length: 50.0, mass: 50.0, angle_deg: 90.0 },
                        LinkConfig { length: 50.0, mass: 50.0, angle_deg: 90.0 },
                    ],
                },
            },
        }
    }
}
