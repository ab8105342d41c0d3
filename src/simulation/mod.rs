pub mod states;
pub mod params;
pub mod engine;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod projection;
pub mod catalog;
pub mod scenario;
