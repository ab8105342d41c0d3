//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - physical constants (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//!
//! The scenario is inserted into Bevy as a `Resource` and driven by the
//! viewer or the headless runner

use bevy::log::info;
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Bevy resource representing a fully-initialized scenario
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let parameters: Parameters = cfg.parameters.into();
        parameters.validate()?;

        // Bodies: configured list in AU, or the canonical solar system
        let system = match &cfg.bodies {
            Some(list) => {
                let bodies = list.iter().map(|bc| body_from_config(bc, parameters.au)).collect();
                System::new(&parameters, bodies)?
            }
            None => System::solar(&parameters),
        };
        let system = system
            .with_anchor_lock(cfg.engine.anchor_lock)
            .with_update_order(cfg.engine.update_order);

        info!(
            "scenario: {} bodies, anchor lock {}, {:?} updates",
            system.bodies().len(),
            system.anchor_lock(),
            system.update_order()
        );

        let engine = Engine {
            toolbar: cfg.engine.toolbar,
            display: cfg.display,
        };

        Ok(Self {
            engine,
            parameters,
            system,
        })
    }

    /// The canonical solar system with default settings
    pub fn solar() -> Self {
        let parameters = Parameters::default();
        Self {
            engine: Engine {
                toolbar: true,
                display: Default::default(),
            },
            system: System::solar(&parameters),
            parameters,
        }
    }

    pub fn toggle_anchor_lock(&mut self) {
        let enabled = !self.system.anchor_lock();
        self.system.set_anchor_lock(enabled);
        info!("anchor lock {}", if enabled { "on" } else { "off" });
    }
}

/// Map a `BodyConfig` to a runtime `Body`, positions from AU to meters
fn body_from_config(bc: &BodyConfig, au: f64) -> Body {
    let mut body = Body::new(
        bc.name.clone(),
        NVec2::new(bc.x[0] * au, bc.x[1] * au),
        bc.m,
        bc.radius,
        bc.color,
    )
    .with_velocity(NVec2::new(bc.v[0], bc.v[1]));
    body.ring = bc.ring;
    body.anchor = bc.anchor;
    body
}
