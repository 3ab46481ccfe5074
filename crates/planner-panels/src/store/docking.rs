//! Docking panels against viewport edges

use super::PanelStore;
use crate::panel::DockPosition;
use crate::placement::{dock_origin, nearest_edge};

impl PanelStore {
    /// Move a panel flush against `edge` and mark it docked.
    ///
    /// Only the axis facing the edge changes; the other coordinate is kept.
    pub fn dock_panel(&mut self, id: &str, edge: DockPosition) {
        let viewport = self.viewport;
        if let Some(state) = self.panels.get_mut(id) {
            state.position = dock_origin(edge, state.rect(), viewport);
            state.is_docked = true;
            state.dock_position = Some(edge);
            self.touch();
        }
    }

    /// Clear the docked flag; the panel stays where it is
    pub fn undock_panel(&mut self, id: &str) {
        if let Some(state) = self.panels.get_mut(id) {
            state.is_docked = false;
            state.dock_position = None;
            self.touch();
        }
    }

    /// Undock a docked panel, or dock an undocked one to its nearest edge
    pub fn toggle_dock(&mut self, id: &str) {
        let Some(state) = self.panels.get(id) else {
            return;
        };
        if state.is_docked {
            self.undock_panel(id);
        } else {
            let edge = nearest_edge(state.rect(), self.viewport);
            self.dock_panel(id, edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::store;
    use super::*;
    use crate::math::{Size, Vec2};

    #[test]
    fn test_dock_right() {
        let (mut store, _) = store();
        store.resize(1200.0, 800.0);
        store.update_panel_position("a", Vec2::new(500.0, 200.0));
        store.update_panel_size("a", Size::new(300.0, 200.0));

        store.dock_panel("a", DockPosition::Right);

        let a = store.panel("a").unwrap();
        assert_eq!(a.position, Vec2::new(900.0, 200.0));
        assert!(a.is_docked);
        assert_eq!(a.dock_position, Some(DockPosition::Right));
    }

    #[test]
    fn test_undock_keeps_position() {
        let (mut store, _) = store();
        store.dock_panel("b", DockPosition::Bottom);
        let docked_at = store.panel("b").unwrap().position;
        assert_eq!(docked_at.y, 800.0 - 80.0);

        store.undock_panel("b");
        let b = store.panel("b").unwrap();
        assert!(!b.is_docked);
        assert_eq!(b.dock_position, None);
        assert_eq!(b.position, docked_at);
    }

    #[test]
    fn test_toggle_dock_picks_nearest_edge() {
        let (mut store, _) = store();
        // panel "a" sits at (10,10), 100x80: center in the left quarter
        store.toggle_dock("a");
        assert_eq!(store.panel("a").unwrap().dock_position, Some(DockPosition::Left));
        assert_eq!(store.panel("a").unwrap().position.x, 0.0);

        store.toggle_dock("a");
        assert!(!store.panel("a").unwrap().is_docked);

        store.update_panel_position("c", Vec2::new(850.0, 300.0));
        store.toggle_dock("c");
        let c = store.panel("c").unwrap();
        assert_eq!(c.dock_position, Some(DockPosition::Right));
        assert_eq!(c.position, Vec2::new(900.0, 300.0));
    }

    #[test]
    fn test_unknown_id_noop() {
        let (mut store, _) = store();
        let before = store.panels().clone();
        store.dock_panel("ghost", DockPosition::Left);
        store.undock_panel("ghost");
        store.toggle_dock("ghost");
        assert_eq!(store.panels(), &before);
    }
}
