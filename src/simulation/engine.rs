//! High-level runtime settings
//!
//! Holds the presentation variant and window settings the viewer needs.
//! Anchor lock and update order live on the `System` because the core
//! consults them every frame.

use crate::configuration::config::DisplayConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub toolbar: bool, // false = plain panels, true = tool bar with buttons
    pub display: DisplayConfig, // window title and size
}
