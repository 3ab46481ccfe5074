//! Durable layout storage
//!
//! The persisted record keeps panels, groups, presets and the active preset
//! under a single key. Behavior settings and the z-index pool are not
//! persisted; the pool is re-derived from the restored panels.
//!
//! [`persist`] and [`rehydrate`] are pure; where the bytes live is up to a
//! [`LayoutStorage`] implementation chosen by the host.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PanelResult;
use crate::group::PanelGroup;
use crate::panel::PanelPatch;
use crate::preset::WorkspacePreset;
use crate::store::PanelStore;
use crate::types::{GroupId, PanelId, PresetId};

/// Key the persisted record is stored under
pub const STORAGE_KEY: &str = "planner-panel-store";

/// The persisted subset of store state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedLayout {
    #[serde(default)]
    pub panels: BTreeMap<PanelId, PanelPatch>,
    #[serde(default)]
    pub panel_groups: BTreeMap<GroupId, PanelGroup>,
    #[serde(default)]
    pub workspace_presets: BTreeMap<PresetId, WorkspacePreset>,
    #[serde(default)]
    pub active_preset_id: Option<PresetId>,
}

impl PersistedLayout {
    /// Capture the persisted subset of a store
    pub fn capture(store: &PanelStore) -> Self {
        Self {
            panels: store
                .panels()
                .iter()
                .map(|(id, state)| (id.clone(), PanelPatch::from_state(state)))
                .collect(),
            panel_groups: store.groups().clone(),
            workspace_presets: store.presets().clone(),
            active_preset_id: store.active_preset_id().cloned(),
        }
    }
}

/// Serialize the persisted subset of `store`
pub fn persist(store: &PanelStore) -> PanelResult<String> {
    Ok(serde_json::to_string(&PersistedLayout::capture(store))?)
}

/// Parse a persisted record
pub fn rehydrate(data: &str) -> PanelResult<PersistedLayout> {
    Ok(serde_json::from_str(data)?)
}

impl PanelStore {
    /// Replace the layout with a persisted record merged over the catalog
    /// defaults.
    ///
    /// Panels the catalog no longer knows are dropped, new catalog panels get
    /// their defaults, and group membership is reconciled.
    pub fn restore(&mut self, layout: PersistedLayout) {
        let PersistedLayout {
            panels,
            panel_groups,
            workspace_presets,
            active_preset_id,
        } = layout;
        debug!(
            panels = panels.len(),
            groups = panel_groups.len(),
            presets = workspace_presets.len(),
            "restoring persisted layout"
        );
        self.replace_layout(panels, panel_groups, workspace_presets, active_preset_id);
    }
}

/// Key-value backend for the persisted record
pub trait LayoutStorage {
    /// Read the value under `key`, `None` if nothing is stored
    fn read(&self, key: &str) -> PanelResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> PanelResult<()>;

    /// Delete the value under `key`
    fn remove(&mut self, key: &str) -> PanelResult<()>;
}

/// In-memory storage for tests and native hosts
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStorage for MemoryStorage {
    fn read(&self, key: &str) -> PanelResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> PanelResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PanelResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Persist `store` under [`STORAGE_KEY`].
///
/// Failures are logged and reported as `false`; the in-memory state is
/// authoritative either way.
pub fn save_to(storage: &mut dyn LayoutStorage, store: &PanelStore) -> bool {
    let result = persist(store).and_then(|data| storage.write(STORAGE_KEY, &data));
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "failed to persist panel layout");
            false
        }
    }
}

/// Restore `store` from [`STORAGE_KEY`], if a readable record exists.
///
/// An unreadable record is logged and left in place; the store keeps its
/// current layout. Returns true if a record was restored.
pub fn load_from(storage: &dyn LayoutStorage, store: &mut PanelStore) -> bool {
    let data = match storage.read(STORAGE_KEY) {
        Ok(Some(data)) => data,
        Ok(None) => return false,
        Err(e) => {
            warn!(error = %e, "failed to read persisted panel layout");
            return false;
        }
    };
    match rehydrate(&data) {
        Ok(layout) => {
            store.restore(layout);
            true
        }
        Err(e) => {
            warn!(error = %e, "ignoring unreadable persisted panel layout");
            false
        }
    }
}
