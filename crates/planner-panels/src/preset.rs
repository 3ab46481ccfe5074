//! Workspace presets

use std::collections::BTreeMap;

use crate::panel::PanelPatch;
use crate::types::{PanelId, PresetId, TimestampMs};
use serde::{Deserialize, Serialize};

/// A named snapshot of panel geometry and visibility.
///
/// `panel_states` holds copies taken when the preset was created; applying
/// the preset merge-patches them back and leaves unlisted panels alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacePreset {
    pub id: PresetId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub panel_states: BTreeMap<PanelId, PanelPatch>,
    #[serde(default)]
    pub created_at: TimestampMs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl WorkspacePreset {
    /// Check if this preset is flagged as the default workspace
    pub fn is_default(&self) -> bool {
        self.is_default.unwrap_or(false)
    }

    /// Check if applying this preset also restores group membership
    pub fn captures_groups(&self) -> bool {
        self.panel_states.values().any(|p| p.group_id.is_some())
    }
}
