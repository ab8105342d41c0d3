//! Pairwise Newtonian gravity for the solar system
//!
//! Plain inverse-square law with no softening term. Two bodies at the same
//! position are reported as a `DegenerateConfiguration` instead of producing
//! Inf/NaN forces.

use crate::simulation::error::SimError;
use crate::simulation::states::{Body, NVec2};

/// 2D Newtonian gravity `F = G * m1 * m2 / r^2`
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Force exerted by `other` on `body`, together with their separation
    pub fn force_on(&self, body: &Body, other: &Body) -> Result<(NVec2, f64), SimError> {
        // d points from body toward other
        let d = other.x - body.x;
        let r = d.x.hypot(d.y);
        if r == 0.0 {
            return Err(SimError::DegenerateConfiguration {
                a: body.name.clone(),
                b: other.name.clone(),
            });
        }

        let magnitude = self.G * body.m * other.m / (r * r);

        // Split the magnitude along the direction toward `other`
        let theta = d.y.atan2(d.x);
        let f = NVec2::new(theta.cos() * magnitude, theta.sin() * magnitude);

        Ok((f, r))
    }
}

impl Body {
    /// Gravitational force exerted by `other` on `self`
    ///
    /// When `other` is the anchor, `self.dist_to_anchor` is refreshed with
    /// the separation used here. This is the only place that distance is
    /// tracked.
    pub fn pairwise_force(&mut self, other: &Body, gravity: &NewtonianGravity) -> Result<NVec2, SimError> {
        let (f, r) = gravity.force_on(self, other)?;
        if other.anchor {
            self.dist_to_anchor = r;
        }
        Ok(f)
    }
}
