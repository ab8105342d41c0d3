pub mod vis2d;
pub mod headless;

use bevy::log::warn;
use bevy::prelude::ResMut;

use crate::simulation::scenario::Scenario;

/// One simulation step per Bevy frame
///
/// A failed frame leaves the system untouched, so the viewer keeps showing
/// the last good state.
pub(crate) fn physics_step_system(mut scenario: ResMut<Scenario>) {
    if let Err(err) = scenario.system.step_frame() {
        warn!("frame {} aborted: {err}", scenario.system.frames() + 1);
    }
}
