//! Windowless runner: drives the same physics system for a fixed number of
//! frames and hands the scenario back

use bevy::log::{info, LogPlugin};
use bevy::prelude::*;

use super::physics_step_system;
use crate::simulation::scenario::Scenario;

pub fn run_headless(scenario: Scenario, frames: u64) -> Option<Scenario> {
    let mut app = App::new();
    app.add_plugins(LogPlugin::default())
        .insert_resource(scenario)
        .add_systems(Update, physics_step_system);

    info!("run_headless: stepping {frames} frames");
    for _ in 0..frames {
        app.update();
    }

    app.world_mut().remove_resource::<Scenario>()
}
