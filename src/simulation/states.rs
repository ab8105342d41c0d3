//! Core state types for the solar system simulation
//!
//! - `Body` holds the physical state of one body plus the display data the
//!   renderer passes through untouched (radius, color, ring)
//! - `System` owns the ordered body collection, the shared `Parameters`,
//!   the anchor lock and the {Running, ResetPending} phase
//!
//! Positions are meters, velocities m/s, masses kg. The plane is 2D.

use bevy::log::debug;
use nalgebra::Vector2;

use crate::configuration::config::UpdateOrder;
use crate::simulation::catalog::solar_system;
use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;

pub type NVec2 = Vector2<f64>;

/// Opaque color token, only the renderer interprets it
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // display radius in px
    pub color: Rgb,
    pub ring: bool, // draw an outline ring
    pub anchor: bool, // the body everything orbits, pinned by the anchor lock
    pub dist_to_anchor: f64, // refreshed by `pairwise_force` against the anchor
}

impl Body {
    /// A body at rest at `x`
    pub fn new(name: impl Into<String>, x: NVec2, m: f64, radius: f64, color: Rgb) -> Self {
        Self {
            name: name.into(),
            x,
            v: NVec2::zeros(),
            m,
            radius,
            color,
            ring: false,
            anchor: false,
            dist_to_anchor: 0.0,
        }
    }

    pub fn with_velocity(mut self, v: NVec2) -> Self {
        self.v = v;
        self
    }

    pub fn with_ring(mut self) -> Self {
        self.ring = true;
        self
    }

    pub fn as_anchor(mut self) -> Self {
        self.anchor = true;
        self
    }

    /// Check the preconditions the force law relies on
    pub fn validate(&self) -> Result<(), SimError> {
        let invalid = |reason: &str| SimError::InvalidBody {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.m <= 0.0 || !self.m.is_finite() {
            return Err(invalid("mass must be positive and finite"));
        }
        if !self.is_finite() {
            return Err(invalid("position and velocity must be finite"));
        }
        Ok(())
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }

    /// `position * scale + offset`, `scale` in px per meter
    pub fn screen_position(&self, scale: f64, offset: NVec2) -> NVec2 {
        self.x * scale + offset
    }
}

/// Lifecycle of a `System`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    ResetPending, // next `step_frame` rebuilds the initial bodies first
}

#[derive(Debug, Clone)]
pub struct System {
    pub(crate) bodies: Vec<Body>, // ordered, order is the z-order
    pub(crate) initial: Vec<Body>, // what `reset` rebuilds
    pub(crate) params: Parameters,
    pub(crate) anchor_lock: bool,
    pub(crate) order: UpdateOrder,
    pub(crate) phase: Phase,
    pub(crate) t: f64, // simulated time in seconds
    pub(crate) frames: u64,
}

impl System {
    /// Build a system from an arbitrary body set
    ///
    /// `params` must pass [`Parameters::validate`], every body must pass
    /// [`Body::validate`] and exactly one must be the anchor. The anchor lock
    /// starts disabled.
    pub fn new(params: &Parameters, bodies: Vec<Body>) -> Result<Self, SimError> {
        params.validate()?;
        for b in &bodies {
            b.validate()?;
        }
        let anchors = bodies.iter().filter(|b| b.anchor).count();
        if anchors != 1 {
            return Err(SimError::AnchorCount(anchors));
        }
        Ok(Self::from_parts(params, bodies, false))
    }

    /// The canonical nine-body solar system with the sun locked at the origin
    pub fn solar(params: &Parameters) -> Self {
        Self::from_parts(params, solar_system(params.au), true)
    }

    fn from_parts(params: &Parameters, bodies: Vec<Body>, anchor_lock: bool) -> Self {
        Self {
            initial: bodies.clone(),
            bodies,
            params: *params,
            anchor_lock,
            order: UpdateOrder::Sequential,
            phase: Phase::Running,
            t: 0.0,
            frames: 0,
        }
    }

    pub fn with_anchor_lock(mut self, enabled: bool) -> Self {
        self.anchor_lock = enabled;
        self
    }

    pub fn with_update_order(mut self, order: UpdateOrder) -> Self {
        self.order = order;
        self
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, i: usize) -> Option<&Body> {
        self.bodies.get(i)
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Index of the anchor body
    pub fn anchor_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.anchor)
    }

    pub fn anchor_lock(&self) -> bool {
        self.anchor_lock
    }

    pub fn set_anchor_lock(&mut self, enabled: bool) {
        self.anchor_lock = enabled;
    }

    pub fn update_order(&self) -> UpdateOrder {
        self.order
    }

    pub fn set_update_order(&mut self, order: UpdateOrder) {
        self.order = order;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Simulated seconds since construction or the last reset
    pub fn elapsed(&self) -> f64 {
        self.t
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Discard every body and rebuild the construction-time set
    ///
    /// Simulated time and the frame counter start over. The anchor lock and
    /// update order are settings and survive a reset.
    pub fn reset(&mut self) {
        self.bodies = self.initial.clone();
        self.t = 0.0;
        self.frames = 0;
        self.phase = Phase::Running;
        debug!("system reset to {} bodies", self.bodies.len());
    }

    /// Defer a reset to the start of the next `step_frame`
    pub fn request_reset(&mut self) {
        self.phase = Phase::ResetPending;
    }

    /// Distance of body `i` to the anchor in AU, rounded to 3 decimals
    pub fn distance_to_anchor_au(&self, i: usize) -> Option<f64> {
        self.bodies
            .get(i)
            .map(|b| (b.dist_to_anchor / self.params.au * 1000.0).round() / 1000.0)
    }
}
