//! Workspace presets and layouts

use tracing::debug;

use super::PanelStore;
use crate::panel::{PanelPatch, PanelState};
use crate::preset::WorkspacePreset;
use crate::types::{GroupId, PanelId, PresetId};

impl PanelStore {
    /// Snapshot geometry, visibility and dock state of every panel
    pub fn create_preset(&mut self, name: &str, description: Option<&str>) -> PresetId {
        self.capture("preset", name, description, PanelPatch::snapshot)
    }

    /// Like [`create_preset`](Self::create_preset), but the snapshot also
    /// records group membership
    pub fn create_workspace_layout(&mut self, name: &str, description: Option<&str>) -> PresetId {
        self.capture("workspace", name, description, PanelPatch::snapshot_with_group)
    }

    /// Merge-patch a preset's snapshots over the live panels.
    ///
    /// Panels missing from the snapshot are left alone, as are snapshot
    /// entries for panels no longer in the catalog. Recorded group
    /// membership is applied for all panels at once, so a group only
    /// disappears if it is still empty after every panel has moved.
    pub fn apply_preset(&mut self, preset_id: &str) {
        let Some(preset) = self.presets.get(preset_id) else {
            debug!(preset = %preset_id, "apply_preset: unknown preset");
            return;
        };
        let patches: Vec<_> = preset
            .panel_states
            .iter()
            .map(|(id, patch)| (id.clone(), patch.clone()))
            .collect();

        let mut moves: Vec<(PanelId, Option<GroupId>)> = Vec::new();
        for (id, patch) in &patches {
            let Some(state) = self.panels.get_mut(id) else {
                continue;
            };
            patch.apply_local(state);
            if let Some(z) = patch.z_index {
                self.max_z_index = self.max_z_index.max(z);
            }
            if let Some(target) = &patch.group_id {
                moves.push((id.clone(), target.clone()));
            }
        }
        self.regroup(&moves);
        self.active_preset_id = Some(preset_id.to_string());
        debug!(preset = %preset_id, panels = patches.len(), "preset applied");
        self.touch();
    }

    /// Apply a workspace layout, restoring group membership where the
    /// recorded group still exists
    pub fn switch_workspace(&mut self, preset_id: &str) {
        self.apply_preset(preset_id);
    }

    /// Delete a preset; the active preset is cleared if it was this one
    pub fn delete_preset(&mut self, preset_id: &str) {
        if self.presets.remove(preset_id).is_none() {
            return;
        }
        if self.active_preset_id.as_deref() == Some(preset_id) {
            self.active_preset_id = None;
        }
        debug!(preset = %preset_id, "preset deleted");
        self.touch();
    }

    /// Flag one preset as the default workspace, clearing the flag elsewhere
    pub fn mark_default_preset(&mut self, preset_id: &str) {
        if !self.presets.contains_key(preset_id) {
            return;
        }
        for (id, preset) in self.presets.iter_mut() {
            preset.is_default = (id == preset_id).then_some(true);
        }
        self.touch();
    }

    /// The preset flagged as default, if any
    pub fn default_preset(&self) -> Option<&WorkspacePreset> {
        self.presets.values().find(|p| p.is_default())
    }

    /// Move each panel into its target group (`None` ungroups) in one pass.
    ///
    /// Targets naming a group that does not exist leave the panel where it
    /// is. Groups emptied by the moves are deleted only at the end.
    fn regroup(&mut self, moves: &[(PanelId, Option<GroupId>)]) {
        for (panel_id, target) in moves {
            let target = match target {
                Some(g) if !self.groups.contains_key(g) => continue,
                other => other,
            };
            let Some(state) = self.panels.get_mut(panel_id) else {
                continue;
            };
            if state.group_id == *target {
                continue;
            }
            if let Some(old) = state.group_id.take() {
                if let Some(group) = self.groups.get_mut(&old) {
                    group.remove(panel_id);
                }
            }
            if let Some(new) = target {
                if let Some(group) = self.groups.get_mut(new) {
                    group.add(panel_id);
                }
            }
            state.group_id = target.clone();
        }

        let before = self.groups.len();
        self.groups.retain(|_, g| !g.is_empty());
        if self.groups.len() != before {
            debug!(removed = before - self.groups.len(), "emptied groups removed");
        }
    }

    fn capture(
        &mut self,
        prefix: &str,
        name: &str,
        description: Option<&str>,
        snapshot: fn(&PanelState) -> PanelPatch,
    ) -> PresetId {
        let id = self.next_id(prefix);
        let preset = WorkspacePreset {
            id: id.clone(),
            name: name.to_string(),
            description: description.map(str::to_string),
            panel_states: self
                .panels
                .iter()
                .map(|(pid, state)| (pid.clone(), snapshot(state)))
                .collect(),
            created_at: self.now(),
            is_default: None,
        };
        debug!(preset = %id, name, "preset created");
        self.presets.insert(id.clone(), preset);
        self.touch();
        id
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::store;
    use crate::math::{Size, Vec2};
    use crate::panel::DockPosition;

    #[test]
    fn test_preset_round_trip() {
        let (mut store, _) = store();
        store.update_panel_position("a", Vec2::new(300.0, 200.0));
        store.update_panel_size("a", Size::new(220.0, 180.0));
        store.minimize_panel("b");
        store.dock_panel("c", DockPosition::Bottom);
        let before = store.panels().clone();

        let pid = store.create_preset("Drafting", Some("plans only"));
        assert_eq!(pid, "preset-1");

        store.update_panel_position("a", Vec2::new(0.0, 0.0));
        store.update_panel_size("a", Size::new(50.0, 50.0));
        store.maximize_panel("b");
        store.undock_panel("c");
        store.hide_panel("a");

        store.apply_preset(&pid);
        for (id, state) in store.panels() {
            let old = &before[id];
            assert_eq!(state.position, old.position, "{}", id);
            assert_eq!(state.size, old.size, "{}", id);
            assert_eq!(state.is_visible, old.is_visible, "{}", id);
            assert_eq!(state.is_minimized, old.is_minimized, "{}", id);
            assert_eq!(state.is_docked, old.is_docked, "{}", id);
            assert_eq!(state.dock_position, old.dock_position, "{}", id);
        }
        assert_eq!(store.active_preset_id(), Some(&pid));

        let preset = store.preset(&pid).unwrap();
        assert_eq!(preset.description.as_deref(), Some("plans only"));
        assert!(!preset.captures_groups());
    }

    #[test]
    fn test_apply_preset_keeps_z_and_groups() {
        let (mut store, _) = store();
        let pid = store.create_preset("Plain", None);
        store.bring_to_front("a");
        let z = store.panel("a").unwrap().z_index;
        let gid = store.create_group("G", &["a", "b"]).unwrap();

        store.apply_preset(&pid);
        assert_eq!(store.panel("a").unwrap().z_index, z);
        assert_eq!(store.panel("a").unwrap().group_id.as_ref(), Some(&gid));
    }

    #[test]
    fn test_apply_unknown_preset() {
        let (mut store, _) = store();
        let version = store.version();
        store.apply_preset("preset-404");
        assert_eq!(store.active_preset_id(), None);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn test_delete_preset_clears_active() {
        let (mut store, _) = store();
        let first = store.create_preset("One", None);
        let second = store.create_preset("Two", None);
        store.apply_preset(&first);

        store.delete_preset(&second);
        assert_eq!(store.active_preset_id(), Some(&first));
        store.delete_preset(&first);
        assert_eq!(store.active_preset_id(), None);
        assert!(store.presets().is_empty());
    }

    #[test]
    fn test_workspace_layout_restores_groups() {
        let (mut store, _) = store();
        let gid = store.create_group("Pair", &["a", "b"]).unwrap();
        let wid = store.create_workspace_layout("Review", None);
        assert!(wid.starts_with("workspace-"));
        assert!(store.preset(&wid).unwrap().captures_groups());

        store.remove_panel_from_group("b");
        store.add_panel_to_group("c", &gid);
        store.switch_workspace(&wid);

        assert_eq!(store.group(&gid).unwrap().panel_ids, vec!["a", "b"]);
        assert_eq!(store.panel("c").unwrap().group_id, None);
        assert_eq!(store.active_preset_id(), Some(&wid));
    }

    #[test]
    fn test_workspace_layout_refills_group_emptied_since() {
        let (mut store, _) = store();
        let gid = store.create_group("Pair", &["b", "c"]).unwrap();
        let wid = store.create_workspace_layout("Review", None);

        store.add_panel_to_group("a", &gid);
        store.remove_panel_from_group("b");
        store.remove_panel_from_group("c");
        assert_eq!(store.group(&gid).unwrap().panel_ids, vec!["a"]);

        // "a" leaves first, which would empty the group before "b" rejoins
        store.switch_workspace(&wid);
        assert_eq!(store.group(&gid).unwrap().panel_ids, vec!["b", "c"]);
        assert_eq!(store.panel("a").unwrap().group_id, None);
        assert_eq!(store.panel("b").unwrap().group_id.as_ref(), Some(&gid));
        assert_eq!(store.panel("c").unwrap().group_id.as_ref(), Some(&gid));
    }

    #[test]
    fn test_workspace_layout_drops_group_left_empty() {
        let (mut store, _) = store();
        let wid = store.create_workspace_layout("Loose", None);
        let gid = store.create_group("Pair", &["a", "b"]).unwrap();

        store.switch_workspace(&wid);
        assert!(store.group(&gid).is_none());
        assert_eq!(store.panel("a").unwrap().group_id, None);
        assert_eq!(store.panel("b").unwrap().group_id, None);
    }

    #[test]
    fn test_workspace_layout_skips_deleted_group() {
        let (mut store, _) = store();
        let gid = store.create_group("Pair", &["a", "b"]).unwrap();
        let wid = store.create_workspace_layout("Review", None);
        store.remove_group(&gid);

        store.switch_workspace(&wid);
        assert!(store.groups().is_empty());
        assert_eq!(store.panel("a").unwrap().group_id, None);
    }

    #[test]
    fn test_default_preset() {
        let (mut store, _) = store();
        let first = store.create_preset("One", None);
        let second = store.create_preset("Two", None);
        assert!(store.default_preset().is_none());

        store.mark_default_preset(&first);
        assert_eq!(store.default_preset().unwrap().id, first);
        store.mark_default_preset(&second);
        assert_eq!(store.default_preset().unwrap().id, second);
        assert_eq!(store.preset(&first).unwrap().is_default, None);

        store.mark_default_preset("preset-404");
        assert_eq!(store.default_preset().unwrap().id, second);
    }
}
