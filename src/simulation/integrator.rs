//! Fixed-step integration for the solar system
//!
//! Each body gets a semi-implicit Euler step: velocity is kicked by the net
//! force first, then position drifts with the new velocity. `System::step_frame`
//! runs one such step for every body, either in place in collection order
//! (`UpdateOrder::Sequential`) or against a frozen copy of the frame's
//! starting state (`UpdateOrder::Snapshot`).

use super::error::SimError;
use super::forces::NewtonianGravity;
use super::states::{Body, NVec2, Phase, System};
use crate::configuration::config::UpdateOrder;

impl Body {
    /// v += F / m * dt
    pub fn kick(&mut self, f: NVec2, dt: f64) {
        self.v += f / self.m * dt;
    }

    /// x += v * dt
    pub fn drift(&mut self, dt: f64) {
        self.x += self.v * dt;
    }

    /// Apply the net force for one step: kick, then drift
    pub fn integrate(&mut self, f: NVec2, dt: f64) {
        self.kick(f, dt);
        self.drift(dt);
    }
}

/// Borrow body `i` mutably and body `j` immutably, `i != j`
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &head[j])
    }
}

/// Net force on body `i` from every other body in `bodies`
///
/// Bodies are excluded by index, never by value.
pub fn net_force(bodies: &mut [Body], i: usize, gravity: &NewtonianGravity) -> Result<NVec2, SimError> {
    let mut total = NVec2::zeros();
    for j in 0..bodies.len() {
        if j == i {
            continue;
        }
        let (body, other) = pair_mut(bodies, i, j);
        total += body.pairwise_force(other, gravity)?;
    }
    Ok(total)
}

/// Sum the forces on body `i` and integrate it
///
/// A `pinned` body only has its velocity updated; its position is held.
pub fn update_against(
    bodies: &mut [Body],
    i: usize,
    gravity: &NewtonianGravity,
    dt: f64,
    pinned: bool,
) -> Result<(), SimError> {
    let f = net_force(bodies, i, gravity)?;
    let body = &mut bodies[i];
    if pinned {
        body.kick(f, dt);
    } else {
        body.integrate(f, dt);
    }
    Ok(())
}

/// Update bodies one after another, in place
///
/// Later bodies see the already-moved positions of earlier ones.
pub fn sequential_pass(
    bodies: &mut [Body],
    gravity: &NewtonianGravity,
    dt: f64,
    pinned: Option<usize>,
) -> Result<(), SimError> {
    for i in 0..bodies.len() {
        update_against(bodies, i, gravity, dt, pinned == Some(i))?;
    }
    Ok(())
}

/// Update every body against the state at the start of the frame
pub fn snapshot_pass(
    bodies: &mut [Body],
    gravity: &NewtonianGravity,
    dt: f64,
    pinned: Option<usize>,
) -> Result<(), SimError> {
    let snapshot = bodies.to_vec();
    for (i, body) in bodies.iter_mut().enumerate() {
        let mut total = NVec2::zeros();
        for (j, other) in snapshot.iter().enumerate() {
            if j == i {
                continue;
            }
            total += body.pairwise_force(other, gravity)?;
        }
        if pinned == Some(i) {
            body.kick(total, dt);
        } else {
            body.integrate(total, dt);
        }
    }
    Ok(())
}

impl System {
    /// Advance the system by one timestep
    ///
    /// A pending reset is applied first. With the anchor lock on, the anchor
    /// is put at the origin and held there for the whole frame while its
    /// velocity keeps integrating. The frame is computed on a copy of the
    /// bodies; on error nothing is committed and the previous state stays.
    pub fn step_frame(&mut self) -> Result<(), SimError> {
        if self.phase == Phase::ResetPending {
            self.reset();
        }

        let gravity = NewtonianGravity { G: self.params.G };
        let dt = self.params.timestep;

        let mut next = self.bodies.clone();
        let pinned = if self.anchor_lock {
            self.anchor_index()
        } else {
            None
        };
        if let Some(a) = pinned {
            next[a].x = NVec2::zeros();
        }

        match self.order {
            UpdateOrder::Sequential => sequential_pass(&mut next, &gravity, dt, pinned)?,
            UpdateOrder::Snapshot => snapshot_pass(&mut next, &gravity, dt, pinned)?,
        }

        if let Some(bad) = next.iter().find(|b| !b.is_finite()) {
            return Err(SimError::NonFiniteState {
                name: bad.name.clone(),
            });
        }

        self.bodies = next;
        self.t += dt;
        self.frames += 1;
        Ok(())
    }
}
