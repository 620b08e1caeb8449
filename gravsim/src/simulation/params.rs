//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - fixed step size `dt` and the number of steps to run headless,
//! - `gravity`: the gravitational constant G for N-body systems, or the
//!   gravitational acceleration g for pendulum chains

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size
    pub steps: u64, // ticks to run
    pub gravity: f64, // G (n-body) or g (pendulum)
}
