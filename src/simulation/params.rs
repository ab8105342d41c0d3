//! Physical constants and view scales shared by the whole simulation
//!
//! `Parameters` is the immutable constant set handed to a `System` at
//! construction:
//! - gravitational constant and astronomical unit (`G`, `au`),
//! - the fixed integration step (one simulated day),
//! - pixels-per-AU for the full view and the overview,
//! - the viewport sizes the two projections are centered in

use crate::simulation::error::SimError;

pub const G: f64 = 6.67428e-11; // m^3 kg^-1 s^-2
pub const AU: f64 = 149.6e6 * 1000.0; // meters
pub const TIMESTEP: f64 = 3600.0 * 24.0; // one day in seconds
pub const SCALE: f64 = 12.0; // px per AU, full view
pub const MINI_SCALE: f64 = 100.0; // px per AU, overview

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub au: f64, // astronomical unit in meters
    pub timestep: f64, // step size in seconds
    pub scale: f64, // full view px/AU
    pub mini_scale: f64, // overview px/AU
    pub view_size: [f64; 2], // full view viewport in px
    pub mini_view_size: [f64; 2], // overview viewport in px
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G,
            au: AU,
            timestep: TIMESTEP,
            scale: SCALE,
            mini_scale: MINI_SCALE,
            view_size: [900.0, 900.0],
            mini_view_size: [417.0, 417.0],
        }
    }
}

impl Parameters {
    /// Size in full-view pixels of the area the overview covers
    pub fn overview_footprint(&self) -> [f64; 2] {
        let k = self.scale / self.mini_scale;
        [self.mini_view_size[0] * k, self.mini_view_size[1] * k]
    }

    /// Constants and scales must be positive and finite, viewports non-empty
    pub fn validate(&self) -> Result<(), SimError> {
        let scalars = [
            ("G", self.G),
            ("au", self.au),
            ("timestep", self.timestep),
            ("scale", self.scale),
            ("mini_scale", self.mini_scale),
        ];
        for (field, value) in scalars {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidParameters {
                    field,
                    reason: format!("must be positive and finite, got {value}"),
                });
            }
        }

        let viewports = [("view_size", self.view_size), ("mini_view_size", self.mini_view_size)];
        for (field, [w, h]) in viewports {
            if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
                return Err(SimError::InvalidParameters {
                    field,
                    reason: format!("must be a positive size, got [{w}, {h}]"),
                });
            }
        }
        Ok(())
    }
}
