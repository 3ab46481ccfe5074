//! Panel definitions and per-panel state
//!
//! - [`PanelConfig`] / [`PanelRegistry`]: the static catalog
//! - [`PanelState`]: live state, one per catalog entry
//! - [`PanelPatch`]: partial state used for merge-patches and preset snapshots

mod config;
mod patch;
mod registry;
mod state;

pub use config::PanelConfig;
pub use patch::PanelPatch;
pub use registry::PanelRegistry;
pub use state::{DockPosition, PanelState};

/// Z-index every panel starts from, and the value `maxZIndex` resets to
pub const BASE_Z_INDEX: i64 = 1000;
