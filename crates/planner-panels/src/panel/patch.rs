//! Partial panel state

use super::{DockPosition, PanelState};
use crate::math::{Size, Vec2};
use crate::types::GroupId;
use serde::{Deserialize, Serialize};

/// A subset of [`PanelState`] fields.
///
/// Used for `update_panel_state` merge-patches, for workspace preset
/// snapshots and for imported/persisted panel entries. `None` means "leave
/// the field alone". The nullable fields use a double option so a patch can
/// explicitly clear them: `Some(None)` undocks / ungroups.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_minimized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_docked: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::double_option"
    )]
    pub dock_position: Option<Option<DockPosition>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::double_option"
    )]
    pub group_id: Option<Option<GroupId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_snapped: Option<bool>,
}

impl PanelPatch {
    /// Patch that only moves the panel
    pub fn position(position: Vec2) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    /// Preset snapshot: geometry, visibility and dock state
    pub fn snapshot(state: &PanelState) -> Self {
        Self {
            position: Some(state.position),
            size: Some(state.size),
            is_visible: Some(state.is_visible),
            is_minimized: Some(state.is_minimized),
            is_docked: Some(state.is_docked),
            dock_position: Some(state.dock_position),
            ..Default::default()
        }
    }

    /// Workspace layout snapshot: a preset snapshot plus group membership
    pub fn snapshot_with_group(state: &PanelState) -> Self {
        Self {
            group_id: Some(state.group_id.clone()),
            ..Self::snapshot(state)
        }
    }

    /// Full patch carrying every field of `state`
    pub fn from_state(state: &PanelState) -> Self {
        Self {
            z_index: Some(state.z_index),
            is_snapped: Some(state.is_snapped),
            ..Self::snapshot_with_group(state)
        }
    }

    /// Copy of this patch without the group field
    pub fn without_group(&self) -> Self {
        Self {
            group_id: None,
            ..self.clone()
        }
    }

    /// Write every field except `group_id` into `state`.
    ///
    /// Group membership has a cross-panel invariant, so the store applies
    /// that field itself through its group operations.
    pub(crate) fn apply_local(&self, state: &mut PanelState) {
        if let Some(position) = self.position {
            state.position = position;
        }
        if let Some(size) = self.size {
            state.size = size;
        }
        if let Some(visible) = self.is_visible {
            state.is_visible = visible;
        }
        if let Some(minimized) = self.is_minimized {
            state.is_minimized = minimized;
        }
        if let Some(z_index) = self.z_index {
            state.z_index = z_index;
        }
        if let Some(docked) = self.is_docked {
            state.is_docked = docked;
        }
        if let Some(dock_position) = self.dock_position {
            state.dock_position = dock_position;
        }
        if let Some(snapped) = self.is_snapped {
            state.is_snapped = snapped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::PanelConfig;

    fn state() -> PanelState {
        let config = PanelConfig::new(
            "materials",
            "Materials",
            "palette",
            Vec2::new(40.0, 60.0),
            Size::new(300.0, 420.0),
        );
        PanelState::from_config(&config, 1000)
    }

    #[test]
    fn test_apply_local_only_touches_set_fields() {
        let mut s = state();
        let patch = PanelPatch {
            position: Some(Vec2::new(5.0, 6.0)),
            is_docked: Some(true),
            dock_position: Some(Some(DockPosition::Top)),
            group_id: Some(Some("group-1".to_string())),
            ..Default::default()
        };
        patch.apply_local(&mut s);

        assert_eq!(s.position, Vec2::new(5.0, 6.0));
        assert_eq!(s.size, Size::new(300.0, 420.0));
        assert!(s.is_docked);
        assert_eq!(s.dock_position, Some(DockPosition::Top));
        // group is applied by the store, not here
        assert_eq!(s.group_id, None);
    }

    #[test]
    fn test_snapshot_fields() {
        let s = state();
        let snap = PanelPatch::snapshot(&s);
        assert_eq!(snap.position, Some(s.position));
        assert_eq!(snap.dock_position, Some(None));
        assert_eq!(snap.z_index, None);
        assert_eq!(snap.group_id, None);

        let with_group = PanelPatch::snapshot_with_group(&s);
        assert_eq!(with_group.group_id, Some(None));
    }

    #[test]
    fn test_patch_json_null_clears() {
        let patch: PanelPatch =
            serde_json::from_str(r#"{"dockPosition": null, "isDocked": false}"#).unwrap();
        assert_eq!(patch.dock_position, Some(None));
        assert_eq!(patch.group_id, None);

        let mut s = state();
        s.is_docked = true;
        s.dock_position = Some(DockPosition::Left);
        patch.apply_local(&mut s);
        assert!(!s.is_docked);
        assert_eq!(s.dock_position, None);
    }

    #[test]
    fn test_full_state_parses_as_patch() {
        let s = state();
        let json = serde_json::to_string(&s).unwrap();
        let patch: PanelPatch = serde_json::from_str(&json).unwrap();
        assert_eq!(patch, PanelPatch::from_state(&s));
    }
}
