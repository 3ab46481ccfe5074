//! Panel groups
//!
//! Invariant: `panels[p].group_id == Some(g)` exactly when `p` is listed in
//! group `g`, a panel is listed in at most one group, and no group is empty.
//! Every operation here preserves it.

use std::collections::BTreeMap;

use tracing::debug;

use super::PanelStore;
use crate::group::PanelGroup;
use crate::math::Vec2;
use crate::panel::DockPosition;
use crate::placement::dock_origin;
use crate::types::{GroupId, PanelId};

impl PanelStore {
    /// Create a group from the known ids in `panel_ids`.
    ///
    /// Unknown and repeated ids are skipped. A panel already in another group
    /// is moved out of it first. Returns `None` (and creates nothing) when no
    /// listed id is a known panel.
    pub fn create_group(&mut self, name: &str, panel_ids: &[&str]) -> Option<GroupId> {
        let mut members: Vec<PanelId> = Vec::new();
        for id in panel_ids {
            if self.panels.contains_key(*id) && !members.iter().any(|m| m == id) {
                members.push((*id).to_string());
            }
        }
        if members.is_empty() {
            debug!(name, "group not created: no known panels");
            return None;
        }

        for id in &members {
            self.remove_panel_from_group(id);
        }

        let group_id = self.next_id("group");
        let mut group = PanelGroup::new(group_id.clone(), name, self.now());
        for id in &members {
            group.add(id);
            if let Some(state) = self.panels.get_mut(id) {
                state.group_id = Some(group_id.clone());
            }
        }
        debug!(group = %group_id, members = members.len(), "group created");
        self.groups.insert(group_id.clone(), group);
        self.touch();
        Some(group_id)
    }

    /// Delete a group and clear the back-reference on its members
    pub fn remove_group(&mut self, group_id: &str) {
        let Some(group) = self.groups.remove(group_id) else {
            return;
        };
        for id in &group.panel_ids {
            if let Some(state) = self.panels.get_mut(id) {
                if state.group_id.as_deref() == Some(group_id) {
                    state.group_id = None;
                }
            }
        }
        debug!(group = %group_id, "group removed");
        self.touch();
    }

    /// Append a panel to a group, leaving any previous group first
    pub fn add_panel_to_group(&mut self, panel_id: &str, group_id: &str) {
        let Some(current) = self.panels.get(panel_id).map(|s| s.group_id.clone()) else {
            return;
        };
        if !self.groups.contains_key(group_id) || current.as_deref() == Some(group_id) {
            return;
        }
        if current.is_some() {
            self.remove_panel_from_group(panel_id);
        }
        if let Some(group) = self.groups.get_mut(group_id) {
            group.add(panel_id);
        }
        if let Some(state) = self.panels.get_mut(panel_id) {
            state.group_id = Some(group_id.to_string());
        }
        self.touch();
    }

    /// Take a panel out of its group, deleting the group if it becomes empty
    pub fn remove_panel_from_group(&mut self, panel_id: &str) {
        let Some(group_id) = self.panels.get_mut(panel_id).and_then(|s| s.group_id.take()) else {
            return;
        };
        let now_empty = match self.groups.get_mut(&group_id) {
            Some(group) => {
                group.remove(panel_id);
                group.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.groups.remove(&group_id);
            debug!(group = %group_id, "last panel left, group removed");
        }
        self.touch();
    }

    /// Move every member so the first member lands on `target`.
    ///
    /// Relative offsets between members are preserved.
    pub fn move_group(&mut self, group_id: &str, target: Vec2) {
        let Some(group) = self.groups.get(group_id) else {
            return;
        };
        let Some(anchor) = group.anchor().and_then(|id| self.panels.get(id)) else {
            return;
        };
        let delta = target - anchor.position;
        for id in &group.panel_ids {
            if let Some(state) = self.panels.get_mut(id) {
                state.position = state.position + delta;
            }
        }
        self.touch();
    }

    /// Dock every member of a group against `edge`
    pub fn dock_group(&mut self, group_id: &str, edge: DockPosition) {
        let viewport = self.viewport;
        let Some(group) = self.groups.get_mut(group_id) else {
            return;
        };
        group.docked = true;
        group.position = Some(edge);
        for id in &group.panel_ids {
            if let Some(state) = self.panels.get_mut(id) {
                state.position = dock_origin(edge, state.rect(), viewport);
                state.is_docked = true;
                state.dock_position = Some(edge);
            }
        }
        self.touch();
    }

    /// Undock a group and all of its members
    pub fn undock_group(&mut self, group_id: &str) {
        let Some(group) = self.groups.get_mut(group_id) else {
            return;
        };
        group.docked = false;
        group.position = None;
        for id in &group.panel_ids {
            if let Some(state) = self.panels.get_mut(id) {
                state.is_docked = false;
                state.dock_position = None;
            }
        }
        self.touch();
    }

    /// Rename a group
    pub fn rename_group(&mut self, group_id: &str, name: &str) {
        if let Some(group) = self.groups.get_mut(group_id) {
            group.name = name.to_string();
            self.touch();
        }
    }

    /// Restore the group invariant after groups were bulk-loaded.
    ///
    /// Group lists are authoritative: unknown and duplicate members are
    /// dropped, a panel listed by several groups stays in the first one (by
    /// id order), empty groups are deleted, and every panel's `group_id` is
    /// rewritten from the lists. A group's `id` is reset to its map key.
    pub(crate) fn reconcile_groups(&mut self) {
        let mut owner: BTreeMap<PanelId, GroupId> = BTreeMap::new();
        for (group_id, group) in self.groups.iter_mut() {
            group.id.clone_from(group_id);
            let mut kept = Vec::with_capacity(group.panel_ids.len());
            for id in group.panel_ids.drain(..) {
                if self.panels.contains_key(&id) && !owner.contains_key(&id) {
                    owner.insert(id.clone(), group_id.clone());
                    kept.push(id);
                }
            }
            group.panel_ids = kept;
        }
        self.groups.retain(|_, g| !g.is_empty());

        for (id, state) in self.panels.iter_mut() {
            state.group_id = owner.get(id).cloned();
        }
    }
}
