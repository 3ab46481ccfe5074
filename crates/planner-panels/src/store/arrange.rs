//! Multi-panel arrangement: grid snapping, distribution, cascade, edge
//! snapping and layout reset

use tracing::debug;

use super::PanelStore;
use crate::math::Rect;
use crate::panel::BASE_Z_INDEX;
use crate::placement::{cascade_position, distribute, edge_snap, grid_snap_within};
use crate::timer::ScheduledClear;
use crate::types::PanelId;

impl PanelStore {
    /// Round every visible panel's position to the nearest grid point.
    ///
    /// All panels are flagged `is_snapped` so the renderer can flash a
    /// hint; a clear is scheduled to drop the flag again (see [`tick`]).
    ///
    /// [`tick`]: PanelStore::tick
    pub fn snap_panels_to_grid(&mut self, grid: f32) {
        if grid <= 0.0 {
            return;
        }
        for state in self.panels.values_mut() {
            if state.is_visible {
                state.position = state.position.snapped(grid);
            }
            state.is_snapped = true;
        }
        let ids: Vec<PanelId> = self.panels.keys().cloned().collect();
        let clear = ScheduledClear::after_snap(self.now(), ids);
        self.pending_clears.push(clear);
        self.touch();
    }

    /// Spread the visible panels among `ids` evenly across the viewport width
    pub fn distribute_horizontally(&mut self, ids: &[&str]) {
        let targets = self.visible_subset(ids);
        if targets.len() < 2 {
            return;
        }
        let widths: Vec<f32> = targets.iter().map(|(_, r)| r.width).collect();
        let offsets = distribute(&widths, self.viewport.width);
        for ((id, _), x) in targets.iter().zip(offsets) {
            if let Some(state) = self.panels.get_mut(id) {
                state.position.x = x;
            }
        }
        self.touch();
    }

    /// Spread the visible panels among `ids` evenly down the viewport height
    pub fn distribute_vertically(&mut self, ids: &[&str]) {
        let targets = self.visible_subset(ids);
        if targets.len() < 2 {
            return;
        }
        let heights: Vec<f32> = targets.iter().map(|(_, r)| r.height).collect();
        let offsets = distribute(&heights, self.viewport.height);
        for ((id, _), y) in targets.iter().zip(offsets) {
            if let Some(state) = self.panels.get_mut(id) {
                state.position.y = y;
            }
        }
        self.touch();
    }

    /// Stack the visible panels among `ids` diagonally, later ids on top
    pub fn cascade_panels(&mut self, ids: &[&str]) {
        let targets = self.visible_subset(ids);
        if targets.len() < 2 {
            return;
        }
        for (i, (id, _)) in targets.iter().enumerate() {
            let z = self.next_z_index();
            if let Some(state) = self.panels.get_mut(id) {
                state.position = cascade_position(i);
                state.z_index = z;
            }
        }
        self.touch();
    }

    /// Pull a panel onto nearby viewport edges.
    ///
    /// With magnetic boundaries on, edges of other open panels attract too.
    /// Does nothing while edge snapping is switched off.
    pub fn snap_panel_to_edges(&mut self, id: &str) {
        if !self.settings.snap_to_edges {
            return;
        }
        let Some(rect) = self.panels.get(id).map(|s| s.rect()) else {
            return;
        };
        let neighbours = if self.settings.magnetic_boundaries {
            self.open_rects_except(id)
        } else {
            Vec::new()
        };
        let snapped = edge_snap(rect, self.viewport, &neighbours, self.settings.snap_threshold);
        if snapped != rect.position() {
            if let Some(state) = self.panels.get_mut(id) {
                state.position = snapped;
            }
            self.touch();
        }
    }

    /// Nudge visible panels that sit close to a grid line onto it, then
    /// apply edge snapping.
    ///
    /// Unlike [`snap_panels_to_grid`](Self::snap_panels_to_grid), panels
    /// farther than the snap threshold from a grid line keep that axis.
    pub fn align_panels_to_grid(&mut self, grid: f32) {
        if grid <= 0.0 {
            return;
        }
        let threshold = self.settings.snap_threshold;
        let ids: Vec<PanelId> = self
            .panels
            .iter()
            .filter(|(_, s)| s.is_visible)
            .map(|(id, _)| id.clone())
            .collect();

        let mut moved = false;
        for id in &ids {
            let Some(state) = self.panels.get(id) else {
                continue;
            };
            let mut position = grid_snap_within(state.position, grid, threshold);
            if self.settings.snap_to_edges {
                let rect = Rect::from_pos_size(position, state.size);
                position = edge_snap(rect, self.viewport, &[], threshold);
            }
            if let Some(state) = self.panels.get_mut(id) {
                if state.position != position {
                    state.position = position;
                    moved = true;
                }
            }
        }
        if moved {
            self.touch();
        }
    }

    /// Throw away every layout change and go back to the catalog defaults.
    ///
    /// Groups and the active preset are dropped with the old layout. Saved
    /// presets survive.
    pub fn reset_panel_layout(&mut self) {
        self.panels = self.registry.default_states();
        self.groups.clear();
        self.active_preset_id = None;
        self.max_z_index = BASE_Z_INDEX;
        debug!(panels = self.panels.len(), "panel layout reset");
        self.touch();
    }

    /// Known, visible panels among `ids`, in input order, without repeats
    fn visible_subset(&self, ids: &[&str]) -> Vec<(PanelId, Rect)> {
        let mut out: Vec<(PanelId, Rect)> = Vec::with_capacity(ids.len());
        for id in ids {
            if out.iter().any(|(seen, _)| seen == id) {
                continue;
            }
            if let Some(state) = self.panels.get(*id).filter(|s| s.is_visible) {
                out.push(((*id).to_string(), state.rect()));
            }
        }
        out
    }

    fn open_rects_except(&self, id: &str) -> Vec<Rect> {
        self.panels
            .iter()
            .filter(|(other, s)| other.as_str() != id && s.is_open())
            .map(|(_, s)| s.rect())
            .collect()
    }
}
