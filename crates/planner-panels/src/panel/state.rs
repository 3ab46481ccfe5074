//! Live per-panel state

use super::PanelConfig;
use crate::math::{Rect, Size, Vec2};
use crate::types::GroupId;
use serde::{Deserialize, Serialize};

/// Viewport edge a panel can be docked against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockPosition {
    Left,
    Right,
    Top,
    Bottom,
}

impl DockPosition {
    /// All edges, in the order the renderer lists them
    pub fn all() -> &'static [DockPosition] {
        &[
            DockPosition::Left,
            DockPosition::Right,
            DockPosition::Top,
            DockPosition::Bottom,
        ]
    }

    /// Parse from string ID (e.g., "left")
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|edge| edge.id().eq_ignore_ascii_case(id))
    }

    /// Get the string ID for this edge
    pub fn id(&self) -> &'static str {
        match self {
            DockPosition::Left => "left",
            DockPosition::Right => "right",
            DockPosition::Top => "top",
            DockPosition::Bottom => "bottom",
        }
    }
}

/// Mutable state of one panel.
///
/// Field names serialize in camelCase to match the layout export format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    /// Top-left corner in viewport pixels
    pub position: Vec2,
    pub size: Size,
    pub is_visible: bool,
    /// Minimized panels keep `size`; the renderer collapses them
    pub is_minimized: bool,
    pub z_index: i64,
    pub is_docked: bool,
    pub dock_position: Option<DockPosition>,
    /// Back-reference to the owning group
    pub group_id: Option<GroupId>,
    /// Set by a grid snap, cleared by the scheduled clear shortly after
    #[serde(default)]
    pub is_snapped: bool,
}

impl PanelState {
    /// Default state for a panel, as seeded at startup and on layout reset
    pub fn from_config(config: &PanelConfig, z_index: i64) -> Self {
        Self {
            position: config.default_position,
            size: config.default_size,
            is_visible: config.default_visible,
            is_minimized: false,
            z_index,
            is_docked: false,
            dock_position: None,
            group_id: None,
            is_snapped: false,
        }
    }

    /// Bounding rectangle at the recorded position and size
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Visible and not minimized
    pub fn is_open(&self) -> bool {
        self.is_visible && !self.is_minimized
    }
}
