//! Browser bindings
//!
//! [`PanelEngine`] wraps a [`PanelStore`] for JavaScript hosts. Compound
//! values cross the boundary as JSON strings; ids, coordinates and flags are
//! passed directly. The engine reads time from `Date.now()` and persists to
//! `localStorage` under [`STORAGE_KEY`].

use wasm_bindgen::prelude::*;

use crate::clock::Clock;
use crate::error::{PanelError, PanelResult};
use crate::math::{Size, Vec2};
use crate::panel::{DockPosition, PanelPatch, PanelRegistry};
use crate::persistence::{load_from, save_to, LayoutStorage, STORAGE_KEY};
use crate::placement::DEFAULT_GRID_SIZE;
use crate::settings::StoreSettings;
use crate::shortcuts::{ShortcutDispatcher, ShortcutOutcome};
use crate::store::PanelStore;
use crate::types::TimestampMs;

/// Clock reading `Date.now()`
#[derive(Clone, Copy, Debug, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> TimestampMs {
        js_sys::Date::now()
    }
}

/// `window.localStorage` backend
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// The page's local storage, if the browser exposes it
    pub fn open() -> PanelResult<Self> {
        let window = web_sys::window().ok_or_else(|| PanelError::Storage("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| PanelError::Storage("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl LayoutStorage for LocalStorage {
    fn read(&self, key: &str) -> PanelResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn write(&mut self, key: &str, value: &str) -> PanelResult<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> PanelResult<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> PanelError {
    PanelError::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

fn to_js(err: PanelError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn as_strs(ids: &[String]) -> Vec<&str> {
    ids.iter().map(String::as_str).collect()
}

/// Panel engine handle exported to JavaScript
#[wasm_bindgen]
pub struct PanelEngine {
    store: PanelStore,
    shortcuts: ShortcutDispatcher,
}

#[wasm_bindgen]
impl PanelEngine {
    /// Engine over the built-in floor planner catalog
    #[wasm_bindgen(constructor)]
    pub fn new() -> PanelEngine {
        Self::with_registry(PanelRegistry::floor_planner())
    }

    /// Engine over a catalog supplied as JSON
    #[wasm_bindgen]
    pub fn from_registry_json(json: &str) -> Result<PanelEngine, JsValue> {
        let registry = PanelRegistry::from_json(json).map_err(to_js)?;
        Ok(Self::with_registry(registry))
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.store.resize(width, height);
    }

    /// Fire due snap-flag clears; returns true if state changed
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.store.tick()
    }

    /// Mutation counter (as f64 so JS gets a plain number)
    #[wasm_bindgen]
    pub fn version(&self) -> f64 {
        self.store.version() as f64
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All panel states as a JSON object keyed by id
    #[wasm_bindgen]
    pub fn panels_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.store.panels()).map_err(|e| to_js(e.into()))
    }

    /// One panel's state as JSON
    #[wasm_bindgen]
    pub fn panel_json(&self, id: &str) -> Result<String, JsValue> {
        let state = self.store.try_panel(id).map_err(to_js)?;
        serde_json::to_string(state).map_err(|e| to_js(e.into()))
    }

    /// All groups as JSON
    #[wasm_bindgen]
    pub fn groups_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.store.groups()).map_err(|e| to_js(e.into()))
    }

    /// All presets as JSON
    #[wasm_bindgen]
    pub fn presets_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.store.presets()).map_err(|e| to_js(e.into()))
    }

    #[wasm_bindgen]
    pub fn visible_panels(&self) -> Vec<String> {
        self.store.get_visible_panels()
    }

    /// Visible, non-minimized ids back to front
    #[wasm_bindgen]
    pub fn render_order(&self) -> Vec<String> {
        self.store.visible_panels_by_z()
    }

    #[wasm_bindgen]
    pub fn is_panel_visible(&self, id: &str) -> bool {
        self.store.is_panel_visible(id)
    }

    #[wasm_bindgen]
    pub fn is_panel_minimized(&self, id: &str) -> bool {
        self.store.is_panel_minimized(id)
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    #[wasm_bindgen]
    pub fn show_panel(&mut self, id: &str) {
        self.store.show_panel(id);
    }

    #[wasm_bindgen]
    pub fn hide_panel(&mut self, id: &str) {
        self.store.hide_panel(id);
    }

    #[wasm_bindgen]
    pub fn toggle_panel(&mut self, id: &str) {
        self.store.toggle_panel(id);
    }

    #[wasm_bindgen]
    pub fn minimize_panel(&mut self, id: &str) {
        self.store.minimize_panel(id);
    }

    #[wasm_bindgen]
    pub fn maximize_panel(&mut self, id: &str) {
        self.store.maximize_panel(id);
    }

    #[wasm_bindgen]
    pub fn toggle_minimize(&mut self, id: &str) {
        self.store.toggle_minimize(id);
    }

    #[wasm_bindgen]
    pub fn bring_to_front(&mut self, id: &str) {
        self.store.bring_to_front(id);
    }

    #[wasm_bindgen]
    pub fn focus_panel(&mut self, id: &str) {
        self.store.focus_panel(id);
    }

    #[wasm_bindgen]
    pub fn minimize_all_panels(&mut self) {
        self.store.minimize_all_panels();
    }

    #[wasm_bindgen]
    pub fn restore_all_panels(&mut self) {
        self.store.restore_all_panels();
    }

    // =========================================================================
    // Geometry & docking
    // =========================================================================

    #[wasm_bindgen]
    pub fn update_panel_position(&mut self, id: &str, x: f32, y: f32) {
        self.store.update_panel_position(id, Vec2::new(x, y));
    }

    #[wasm_bindgen]
    pub fn update_panel_size(&mut self, id: &str, width: f32, height: f32) {
        self.store.update_panel_size(id, Size::new(width, height));
    }

    /// Merge-patch a panel from a JSON partial state
    #[wasm_bindgen]
    pub fn update_panel_state(&mut self, id: &str, patch_json: &str) -> Result<(), JsValue> {
        let patch: PanelPatch = serde_json::from_str(patch_json).map_err(|e| to_js(e.into()))?;
        self.store.update_panel_state(id, &patch);
        Ok(())
    }

    /// Dock to "left", "right", "top" or "bottom"
    #[wasm_bindgen]
    pub fn dock_panel(&mut self, id: &str, edge: &str) -> bool {
        match DockPosition::from_id(edge) {
            Some(edge) => {
                self.store.dock_panel(id, edge);
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen]
    pub fn undock_panel(&mut self, id: &str) {
        self.store.undock_panel(id);
    }

    #[wasm_bindgen]
    pub fn toggle_dock(&mut self, id: &str) {
        self.store.toggle_dock(id);
    }

    // =========================================================================
    // Groups
    // =========================================================================

    /// Create a group; `undefined` if none of the ids is a known panel
    #[wasm_bindgen]
    pub fn create_group(&mut self, name: &str, panel_ids: Vec<String>) -> Option<String> {
        self.store.create_group(name, &as_strs(&panel_ids))
    }

    #[wasm_bindgen]
    pub fn remove_group(&mut self, group_id: &str) {
        self.store.remove_group(group_id);
    }

    #[wasm_bindgen]
    pub fn add_panel_to_group(&mut self, panel_id: &str, group_id: &str) {
        self.store.add_panel_to_group(panel_id, group_id);
    }

    #[wasm_bindgen]
    pub fn remove_panel_from_group(&mut self, panel_id: &str) {
        self.store.remove_panel_from_group(panel_id);
    }

    #[wasm_bindgen]
    pub fn move_group(&mut self, group_id: &str, x: f32, y: f32) -> Result<(), JsValue> {
        self.store.try_group(group_id).map_err(to_js)?;
        self.store.move_group(group_id, Vec2::new(x, y));
        Ok(())
    }

    // =========================================================================
    // Presets & layout
    // =========================================================================

    #[wasm_bindgen]
    pub fn create_preset(&mut self, name: &str, description: Option<String>) -> String {
        self.store.create_preset(name, description.as_deref())
    }

    #[wasm_bindgen]
    pub fn create_workspace_layout(&mut self, name: &str, description: Option<String>) -> String {
        self.store.create_workspace_layout(name, description.as_deref())
    }

    #[wasm_bindgen]
    pub fn apply_preset(&mut self, preset_id: &str) -> Result<(), JsValue> {
        self.store.try_preset(preset_id).map_err(to_js)?;
        self.store.apply_preset(preset_id);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn switch_workspace(&mut self, preset_id: &str) -> Result<(), JsValue> {
        self.store.try_preset(preset_id).map_err(to_js)?;
        self.store.switch_workspace(preset_id);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn delete_preset(&mut self, preset_id: &str) {
        self.store.delete_preset(preset_id);
    }

    #[wasm_bindgen]
    pub fn export_panel_layout(&self) -> Result<String, JsValue> {
        self.store.try_export_panel_layout().map_err(to_js)
    }

    /// Import a payload; the error carries the rejection reason
    #[wasm_bindgen]
    pub fn import_panel_layout(&mut self, data: &str) -> Result<(), JsValue> {
        self.store.try_import_panel_layout(data).map_err(to_js)
    }

    // =========================================================================
    // Arrangement
    // =========================================================================

    /// Snap to a grid; a missing size means the default 20 px
    #[wasm_bindgen]
    pub fn snap_panels_to_grid(&mut self, grid: Option<f32>) {
        self.store.snap_panels_to_grid(grid.unwrap_or(DEFAULT_GRID_SIZE));
    }

    #[wasm_bindgen]
    pub fn distribute_horizontally(&mut self, panel_ids: Vec<String>) {
        self.store.distribute_horizontally(&as_strs(&panel_ids));
    }

    #[wasm_bindgen]
    pub fn distribute_vertically(&mut self, panel_ids: Vec<String>) {
        self.store.distribute_vertically(&as_strs(&panel_ids));
    }

    #[wasm_bindgen]
    pub fn cascade_panels(&mut self, panel_ids: Vec<String>) {
        self.store.cascade_panels(&as_strs(&panel_ids));
    }

    #[wasm_bindgen]
    pub fn snap_panel_to_edges(&mut self, id: &str) {
        self.store.snap_panel_to_edges(id);
    }

    #[wasm_bindgen]
    pub fn align_panels_to_grid(&mut self, grid: Option<f32>) {
        self.store.align_panels_to_grid(grid.unwrap_or(DEFAULT_GRID_SIZE));
    }

    #[wasm_bindgen]
    pub fn reset_panel_layout(&mut self) {
        self.store.reset_panel_layout();
    }

    // =========================================================================
    // Settings
    // =========================================================================

    #[wasm_bindgen]
    pub fn settings_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.store.settings()).map_err(|e| to_js(e.into()))
    }

    /// Replace all settings from JSON; missing keys take their defaults
    #[wasm_bindgen]
    pub fn set_settings_json(&mut self, json: &str) -> Result<(), JsValue> {
        let settings: StoreSettings = serde_json::from_str(json).map_err(|e| to_js(e.into()))?;
        self.store.set_settings(settings);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_snap_to_edges(&mut self, enabled: bool) {
        self.store.set_snap_to_edges(enabled);
    }

    #[wasm_bindgen]
    pub fn set_magnetic_boundaries(&mut self, enabled: bool) {
        self.store.set_magnetic_boundaries(enabled);
    }

    #[wasm_bindgen]
    pub fn set_snap_threshold(&mut self, threshold: f32) {
        self.store.set_snap_threshold(threshold);
    }

    #[wasm_bindgen]
    pub fn set_keyboard_shortcuts_enabled(&mut self, enabled: bool) {
        self.store.set_keyboard_shortcuts_enabled(enabled);
    }

    #[wasm_bindgen]
    pub fn set_panel_animations(&mut self, enabled: bool) {
        self.store.set_panel_animations(enabled);
    }

    // =========================================================================
    // Keyboard & persistence
    // =========================================================================

    /// Route a `KeyboardEvent.key`; returns true if a panel changed
    #[wasm_bindgen]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.shortcuts.dispatch(&mut self.store, key) != ShortcutOutcome::Ignored
    }

    /// Write the layout to `localStorage`
    #[wasm_bindgen]
    pub fn save(&self) -> bool {
        match LocalStorage::open() {
            Ok(mut storage) => save_to(&mut storage, &self.store),
            Err(e) => {
                tracing::warn!(error = %e, key = STORAGE_KEY, "cannot save panel layout");
                false
            }
        }
    }

    /// Restore the layout from `localStorage`, if present
    #[wasm_bindgen]
    pub fn load(&mut self) -> bool {
        match LocalStorage::open() {
            Ok(storage) => load_from(&storage, &mut self.store),
            Err(e) => {
                tracing::warn!(error = %e, key = STORAGE_KEY, "cannot load panel layout");
                false
            }
        }
    }
}

impl PanelEngine {
    fn with_registry(registry: PanelRegistry) -> PanelEngine {
        let shortcuts = ShortcutDispatcher::from_registry(&registry);
        PanelEngine {
            store: PanelStore::with_clock(registry, Box::new(JsClock)),
            shortcuts,
        }
    }

    /// The wrapped store, for Rust-side callers
    pub fn store(&self) -> &PanelStore {
        &self.store
    }
}

impl Default for PanelEngine {
    fn default() -> Self {
        Self::new()
    }
}
