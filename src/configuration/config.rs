//! Configuration types for loading solar system scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. Every section and every field is optional, the defaults
//! reproduce the canonical solar system:
//!
//! - [`EngineConfig`]     – anchor lock, update order, tool bar variant
//! - [`ParametersConfig`] – physical constants and view scales
//! - [`DisplayConfig`]    – window title and size
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A two-body scenario matching these types:
//!
//! ```yaml
//! engine:
//!   anchor_lock: false
//!   update_order: "snapshot"  # or "sequential"
//!   toolbar: true
//!
//! parameters:
//!   G: 6.67428e-11            # gravitational constant
//!   au: 1.496e11              # meters per AU
//!   timestep: 86400.0         # seconds per frame
//!   scale: 12.0               # px per AU, full view
//!   mini_scale: 100.0         # px per AU, overview
//!
//! bodies:
//!   - name: sun
//!     x: [0.0, 0.0]           # AU
//!     v: [0.0, 0.0]           # m/s
//!     m: 1.98892e30           # kg
//!     radius: 20.0            # px
//!     color: [255, 255, 0]
//!     anchor: true
//!   - name: earth
//!     x: [-1.0, 0.0]
//!     v: [0.0, 29783.0]
//!     m: 5.9742e24
//!     radius: 10.0
//!     color: [0, 0, 255]
//! ```
//!
//! Omitting `bodies` selects the canonical nine-body solar system.

use serde::Deserialize;

use crate::simulation::params::{self, Parameters};

/// How a frame walks the bodies
/// `update_order: "sequential"` or `update_order: "snapshot"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOrder {
    #[default]
    #[serde(rename = "sequential")] // in place, later bodies see earlier bodies' new positions
    Sequential,

    #[serde(rename = "snapshot")] // every body sees the state at the start of the frame
    Snapshot,
}

/// Runtime switches
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub anchor_lock: bool, // pin the anchor to the origin
    pub update_order: UpdateOrder,
    pub toolbar: bool, // `true` - tool bar with buttons, `false` - plain panels
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            anchor_lock: true,
            update_order: UpdateOrder::Sequential,
            toolbar: true,
        }
    }
}

/// Physical constants and view scales
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,
    pub au: f64,
    pub timestep: f64,
    pub scale: f64,
    pub mini_scale: f64,
    pub view_size: [f64; 2],
    pub mini_view_size: [f64; 2],
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            G: params::G,
            au: params::AU,
            timestep: params::TIMESTEP,
            scale: params::SCALE,
            mini_scale: params::MINI_SCALE,
            view_size: p.view_size,
            mini_view_size: p.mini_view_size,
        }
    }
}

impl From<ParametersConfig> for Parameters {
    fn from(p: ParametersConfig) -> Self {
        Parameters {
            G: p.G,
            au: p.au,
            timestep: p.timestep,
            scale: p.scale,
            mini_scale: p.mini_scale,
            view_size: p.view_size,
            mini_view_size: p.mini_view_size,
        }
    }
}

/// Window settings for the viewer
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "solar sim".to_string(),
            width: 1600.0,
            height: 900.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: [f64; 2], // position in AU
    #[serde(default)]
    pub v: [f64; 2], // velocity in m/s
    pub m: f64, // mass in kg
    pub radius: f64, // display radius in px
    pub color: [u8; 3],
    #[serde(default)]
    pub ring: bool,
    #[serde(default)]
    pub anchor: bool,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub display: DisplayConfig,
    pub bodies: Option<Vec<BodyConfig>>, // None - canonical solar system
}
