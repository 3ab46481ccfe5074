//! Position, size and merge-patch updates

use super::PanelStore;
use crate::math::{Size, Vec2};
use crate::panel::PanelPatch;

impl PanelStore {
    /// Record a panel's position. No clamping: the renderer validated it.
    pub fn update_panel_position(&mut self, id: &str, position: Vec2) {
        if let Some(state) = self.panels.get_mut(id) {
            state.position = position;
            self.touch();
        }
    }

    /// Record a panel's size. No clamping against the config.
    pub fn update_panel_size(&mut self, id: &str, size: Size) {
        if let Some(state) = self.panels.get_mut(id) {
            state.size = size;
            self.touch();
        }
    }

    /// Merge-patch any subset of a panel's fields in one step.
    ///
    /// A `group_id` in the patch is routed through the group operations, so
    /// the group lists stay consistent: `Some(None)` removes the panel from
    /// its group, `Some(Some(g))` moves it into `g` (ignored if `g` does not
    /// exist). A patched `z_index` above the pool raises the pool.
    pub fn update_panel_state(&mut self, id: &str, patch: &PanelPatch) {
        let Some(state) = self.panels.get_mut(id) else {
            return;
        };
        patch.apply_local(state);
        if let Some(z) = patch.z_index {
            self.max_z_index = self.max_z_index.max(z);
        }
        match &patch.group_id {
            Some(Some(group_id)) => self.add_panel_to_group(id, group_id),
            Some(None) => self.remove_panel_from_group(id),
            None => {}
        }
        self.touch();
    }
}
