pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2, Phase, Rgb};
pub use simulation::error::SimError;
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::{net_force, update_against, sequential_pass, snapshot_pass};
pub use simulation::params::Parameters;
pub use simulation::projection::{Projection, BodyView};
pub use simulation::catalog::solar_system;
pub use simulation::scenario::Scenario;

pub use configuration::config::{UpdateOrder, EngineConfig, ParametersConfig, DisplayConfig, BodyConfig, ScenarioConfig};

pub use visualization::{vis2d::run_2d, headless::run_headless};

pub use benchmark::benchmark::bench_step_frame;
