pub mod vector;
pub mod cadence;
pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod pendulum;
pub mod scenario;
