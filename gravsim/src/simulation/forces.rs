//! Force contributors for the gravity stepper
//!
//! A [`ForceSet`] sums the contributions of its terms into one net force
//! per body. Terms only ever read the body slice, so every pair is
//! evaluated against the same pre-step snapshot of positions.

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Body, NVec2};
use crate::simulation::vector;

/// Collection of force terms
/// Their contributions are summed into a single net force per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute net forces for all bodies
    /// - `out[i]` is overwritten with the sum of every term's contribution to body `i`
    pub fn accumulate_forces(&self, bodies: &[Body], out: &mut [NVec2]) -> SimResult<()> {
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(bodies, out)?;
        }
        Ok(())
    }
}

/// Force source operating on a body slice
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, bodies: &[Body], out: &mut [NVec2]) -> SimResult<()>;
}

/// Attraction exerted on `a` by `b`: magnitude `G*m_a*m_b/d^2`, pointing from `a` to `b`
///
/// Coincident positions are a configuration error and surface as
/// [`SimError::DivisionByZero`] rather than an infinite force.
pub fn pair_force(a: &Body, b: &Body, g: f64) -> SimResult<NVec2> {
    let r = vector::from_two_points(a.x, b.x);
    let d2 = vector::dot(r, r);
    if d2 == 0.0 {
        return Err(SimError::division_by_zero(format!(
            "coincident bodies at ({}, {})",
            a.x.x, a.x.y
        )));
    }
    let magnitude = g * a.m * b.m / d2;
    Ok(vector::from_angle_and_length(vector::angle(r), magnitude))
}

/// Unsoftened Newtonian gravity between every pair of bodies
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant (arbitrary units)
}

impl Force for NewtonianGravity {
    fn force(&self, bodies: &[Body], out: &mut [NVec2]) -> SimResult<()> {
        let n = bodies.len();

        // Each unordered pair once: i feels +f, j feels -f
        for i in 0..n {
            let bi = &bodies[i];
            for j in (i + 1)..n {
                let bj = &bodies[j];
                let f = pair_force(bi, bj, self.g)?;

                // Stationary bodies still pull, they just never collect a net force
                if !bi.stationary {
                    out[i] = vector::add(out[i], f);
                }
                if !bj.stationary {
                    out[j] = vector::add(out[j], vector::reverse(f));
                }
            }
        }
        Ok(())
    }
}
