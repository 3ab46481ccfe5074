//! Visibility, z-order, focus and queries

use super::PanelStore;
use crate::types::PanelId;

impl PanelStore {
    /// Show a panel and raise it above all others.
    ///
    /// Re-fronts the panel even if it was already visible.
    pub fn show_panel(&mut self, id: &str) {
        if !self.panels.contains_key(id) {
            return;
        }
        let z = self.next_z_index();
        if let Some(state) = self.panels.get_mut(id) {
            state.is_visible = true;
            state.z_index = z;
        }
        self.touch();
    }

    /// Hide a panel, keeping its geometry and z-index for the next show
    pub fn hide_panel(&mut self, id: &str) {
        if let Some(state) = self.panels.get_mut(id) {
            state.is_visible = false;
            self.touch();
        }
    }

    /// Hide if visible, otherwise show
    pub fn toggle_panel(&mut self, id: &str) {
        match self.panels.get(id) {
            Some(state) if state.is_visible => self.hide_panel(id),
            Some(_) => self.show_panel(id),
            None => {}
        }
    }

    /// Collapse a panel; its size is kept for restore
    pub fn minimize_panel(&mut self, id: &str) {
        self.set_minimized(id, true);
    }

    /// Restore a minimized panel
    pub fn maximize_panel(&mut self, id: &str) {
        self.set_minimized(id, false);
    }

    pub fn toggle_minimize(&mut self, id: &str) {
        if let Some(minimized) = self.panels.get(id).map(|s| s.is_minimized) {
            self.set_minimized(id, !minimized);
        }
    }

    /// Raise a panel above all others without changing its visibility
    pub fn bring_to_front(&mut self, id: &str) {
        if !self.panels.contains_key(id) {
            return;
        }
        let z = self.next_z_index();
        if let Some(state) = self.panels.get_mut(id) {
            state.z_index = z;
        }
        self.touch();
    }

    /// Make a panel the user's focus: front-most, visible, not minimized.
    ///
    /// This is what keyboard shortcuts and "jump to panel" actions call.
    pub fn focus_panel(&mut self, id: &str) {
        if !self.panels.contains_key(id) {
            return;
        }
        let z = self.next_z_index();
        if let Some(state) = self.panels.get_mut(id) {
            state.z_index = z;
            state.is_visible = true;
            state.is_minimized = false;
        }
        self.touch();
    }

    /// Minimize every visible panel that is not already minimized
    pub fn minimize_all_panels(&mut self) {
        let targets: Vec<PanelId> = self
            .panels
            .iter()
            .filter(|(_, s)| s.is_open())
            .map(|(id, _)| id.clone())
            .collect();
        for id in targets {
            self.minimize_panel(&id);
        }
    }

    /// Restore every minimized panel
    pub fn restore_all_panels(&mut self) {
        let targets: Vec<PanelId> = self
            .panels
            .iter()
            .filter(|(_, s)| s.is_minimized)
            .map(|(id, _)| id.clone())
            .collect();
        for id in targets {
            self.maximize_panel(&id);
        }
    }

    fn set_minimized(&mut self, id: &str, minimized: bool) {
        if let Some(state) = self.panels.get_mut(id) {
            state.is_minimized = minimized;
            self.touch();
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Ids of visible panels, in catalog declaration order
    pub fn get_visible_panels(&self) -> Vec<PanelId> {
        self.registry
            .iter()
            .filter(|config| self.is_panel_visible(&config.id))
            .map(|config| config.id.clone())
            .collect()
    }

    /// Visible, non-minimized panels in paint order (back to front)
    pub fn visible_panels_by_z(&self) -> Vec<PanelId> {
        let mut open: Vec<(&PanelId, i64)> = self
            .panels
            .iter()
            .filter(|(_, s)| s.is_open())
            .map(|(id, s)| (id, s.z_index))
            .collect();
        open.sort_by_key(|&(_, z)| z);
        open.into_iter().map(|(id, _)| id.clone()).collect()
    }

    /// Front-most visible, non-minimized panel
    pub fn top_panel(&self) -> Option<PanelId> {
        self.panels
            .iter()
            .filter(|(_, s)| s.is_open())
            .max_by_key(|(_, s)| s.z_index)
            .map(|(id, _)| id.clone())
    }

    /// False for unknown ids
    pub fn is_panel_visible(&self, id: &str) -> bool {
        self.panels.get(id).is_some_and(|s| s.is_visible)
    }

    /// False for unknown ids
    pub fn is_panel_minimized(&self, id: &str) -> bool {
        self.panels.get(id).is_some_and(|s| s.is_minimized)
    }
}
