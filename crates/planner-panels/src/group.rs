//! Panel groups
//!
//! A group is a named, ordered set of panel ids that moves as a unit. The
//! store keeps `PanelState::group_id` in sync with `panel_ids`; this type
//! only maintains its own list.

use crate::panel::DockPosition;
use crate::types::{GroupId, PanelId, TimestampMs};
use serde::{Deserialize, Serialize};

/// A named collection of panels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelGroup {
    pub id: GroupId,
    pub name: String,
    /// Members in insertion order, no duplicates
    pub panel_ids: Vec<PanelId>,
    #[serde(default)]
    pub docked: bool,
    /// Edge the group is docked against, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<DockPosition>,
    #[serde(default)]
    pub created_at: TimestampMs,
}

impl PanelGroup {
    /// Create an empty, undocked group
    pub fn new(id: GroupId, name: impl Into<String>, created_at: TimestampMs) -> Self {
        Self {
            id,
            name: name.into(),
            panel_ids: Vec::new(),
            docked: false,
            position: None,
            created_at,
        }
    }

    /// Check if the group lists a panel
    pub fn contains(&self, panel_id: &str) -> bool {
        self.panel_ids.iter().any(|p| p == panel_id)
    }

    /// Append a panel; returns false if it was already a member
    pub fn add(&mut self, panel_id: &str) -> bool {
        if self.contains(panel_id) {
            return false;
        }
        self.panel_ids.push(panel_id.to_string());
        true
    }

    /// Remove a panel; returns false if it was not a member
    pub fn remove(&mut self, panel_id: &str) -> bool {
        let before = self.panel_ids.len();
        self.panel_ids.retain(|p| p != panel_id);
        self.panel_ids.len() != before
    }

    /// First member, which anchors group moves
    pub fn anchor(&self) -> Option<&PanelId> {
        self.panel_ids.first()
    }

    /// Check if the group has no members
    pub fn is_empty(&self) -> bool {
        self.panel_ids.is_empty()
    }
}
