//! Store behavior settings

use serde::{Deserialize, Serialize};

/// Behavior toggles consulted by snapping, the shortcut dispatcher and the
/// renderer.
///
/// These are not part of the persisted layout; hosts keep them in their own
/// preferences and pass them in at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSettings {
    /// Snap panels to viewport edges after a drag
    pub snap_to_edges: bool,
    /// Also snap to the edges of other visible panels
    pub magnetic_boundaries: bool,
    /// Distance in pixels within which edge and grid snapping engage
    pub snap_threshold: f32,
    pub keyboard_shortcuts_enabled: bool,
    /// Renderer hint only
    pub panel_animations: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            snap_to_edges: true,
            magnetic_boundaries: true,
            snap_threshold: 10.0,
            keyboard_shortcuts_enabled: true,
            panel_animations: true,
        }
    }
}
