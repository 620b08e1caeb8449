pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, System, PendulumLink, Chain, NVec2, NPoint2};
pub use simulation::cadence::Cadence;
pub use simulation::forces::{Force, ForceSet, NewtonianGravity, pair_force};
pub use simulation::integrator::{gravity_step, symplectic_euler};
pub use simulation::pendulum::{chain_integrator, chain_step, link_torque};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::scenario::{Model, Scenario};

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, LinkConfig, SystemConfig, ScenarioConfig};
pub use configuration::presets::Preset;

pub use visualization::observer::{Observer, LogObserver, NullObserver};
pub use visualization::runner::Runner;
pub use visualization::trace::Trace;
pub use visualization::viewport::Bounds;

pub use benchmark::benchmark::{bench_gravity, bench_chain};
