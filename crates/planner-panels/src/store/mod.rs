//! Panel State Store
//!
//! [`PanelStore`] owns every panel's live state plus the groups and
//! workspace presets that reference them. Operations are grouped by concern:
//!
//! - `visibility`: show/hide/minimize, z-order, focus, bulk visibility, queries
//! - `geometry`: position/size setters and generic merge-patch
//! - `docking`: flush panels against viewport edges
//! - `grouping`: panel groups and their membership invariant
//! - `presets`: workspace presets and layouts
//! - `arrange`: multi-panel operations (grid snap, distribute, cascade, reset)
//!
//! ## Error policy
//!
//! Operations never fail. An unknown panel, group or preset id is a silent
//! no-op, because UI events routinely arrive for panels a previous gesture
//! already changed.
//!
//! ## Change tracking
//!
//! [`version`](PanelStore::version) increases on every effective mutation;
//! renderers and autosave compare it to decide whether to redraw or persist.

mod arrange;
mod docking;
mod geometry;
mod grouping;
mod presets;
mod visibility;

use std::collections::BTreeMap;

use crate::clock::{Clock, SystemClock};
use crate::error::{PanelError, PanelResult};
use crate::group::PanelGroup;
use crate::math::Size;
use crate::panel::{PanelConfig, PanelPatch, PanelRegistry, PanelState, BASE_Z_INDEX};
use crate::preset::WorkspacePreset;
use crate::settings::StoreSettings;
use crate::timer::ScheduledClear;
use crate::types::{GroupId, PanelId, PresetId, TimestampMs};

/// Viewport size assumed until the host calls [`PanelStore::resize`]
pub const DEFAULT_VIEWPORT: Size = Size::new(1920.0, 1080.0);

/// Authoritative state for all floating panels
pub struct PanelStore {
    registry: PanelRegistry,
    /// One entry per registry id, always
    panels: BTreeMap<PanelId, PanelState>,
    groups: BTreeMap<GroupId, PanelGroup>,
    presets: BTreeMap<PresetId, WorkspacePreset>,
    active_preset_id: Option<PresetId>,
    /// Every panel's z-index is at most this
    max_z_index: i64,
    settings: StoreSettings,
    viewport: Size,
    pending_clears: Vec<ScheduledClear>,
    clock: Box<dyn Clock>,
    next_seq: u64,
    version: u64,
}

impl std::fmt::Debug for PanelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelStore")
            .field("panels", &self.panels.len())
            .field("groups", &self.groups.len())
            .field("presets", &self.presets.len())
            .field("active_preset_id", &self.active_preset_id)
            .field("max_z_index", &self.max_z_index)
            .field("viewport", &self.viewport)
            .field("version", &self.version)
            .finish()
    }
}

impl PanelStore {
    /// Create a store seeded with the registry's default layout.
    ///
    /// Time comes from [`SystemClock`], which is unavailable on
    /// `wasm32-unknown-unknown`; browser hosts use
    /// [`with_clock`](Self::with_clock) (the `wasm` feature's engine passes a
    /// `Date.now()` clock).
    pub fn new(registry: PanelRegistry) -> Self {
        Self::with_clock(registry, Box::new(SystemClock))
    }

    /// Create a store with a custom time source
    pub fn with_clock(registry: PanelRegistry, clock: Box<dyn Clock>) -> Self {
        let panels = registry.default_states();
        Self {
            registry,
            panels,
            groups: BTreeMap::new(),
            presets: BTreeMap::new(),
            active_preset_id: None,
            max_z_index: BASE_Z_INDEX,
            settings: StoreSettings::default(),
            viewport: DEFAULT_VIEWPORT,
            pending_clears: Vec::new(),
            clock,
            next_seq: 1,
            version: 0,
        }
    }

    /// Replace the behavior settings wholesale
    #[must_use]
    pub fn with_settings(mut self, settings: StoreSettings) -> Self {
        self.settings = settings;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The panel catalog this store was seeded from
    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    /// Config for a panel id
    pub fn config(&self, id: &str) -> Option<&PanelConfig> {
        self.registry.get(id)
    }

    /// State of one panel
    pub fn panel(&self, id: &str) -> Option<&PanelState> {
        self.panels.get(id)
    }

    /// All panel states, keyed by id
    pub fn panels(&self) -> &BTreeMap<PanelId, PanelState> {
        &self.panels
    }

    /// A group by id
    pub fn group(&self, id: &str) -> Option<&PanelGroup> {
        self.groups.get(id)
    }

    /// All groups, keyed by id
    pub fn groups(&self) -> &BTreeMap<GroupId, PanelGroup> {
        &self.groups
    }

    /// A preset by id
    pub fn preset(&self, id: &str) -> Option<&WorkspacePreset> {
        self.presets.get(id)
    }

    /// All presets, keyed by id
    pub fn presets(&self) -> &BTreeMap<PresetId, WorkspacePreset> {
        &self.presets
    }

    /// State of one panel, or `PanelNotFound`
    pub fn try_panel(&self, id: &str) -> PanelResult<&PanelState> {
        self.panels
            .get(id)
            .ok_or_else(|| PanelError::PanelNotFound(id.to_string()))
    }

    /// A group by id, or `GroupNotFound`
    pub fn try_group(&self, id: &str) -> PanelResult<&PanelGroup> {
        self.groups
            .get(id)
            .ok_or_else(|| PanelError::GroupNotFound(id.to_string()))
    }

    /// A preset by id, or `PresetNotFound`
    pub fn try_preset(&self, id: &str) -> PanelResult<&WorkspacePreset> {
        self.presets
            .get(id)
            .ok_or_else(|| PanelError::PresetNotFound(id.to_string()))
    }

    /// Preset most recently applied, if it still exists
    pub fn active_preset_id(&self) -> Option<&PresetId> {
        self.active_preset_id.as_ref()
    }

    /// Top of the z-index pool
    pub fn max_z_index(&self) -> i64 {
        self.max_z_index
    }

    /// Current behavior settings
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Current viewport size
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Mutation counter
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Scheduled snap-flag clears that have not fired yet
    pub fn pending_clears(&self) -> &[ScheduledClear] {
        &self.pending_clears
    }

    // =========================================================================
    // Viewport & settings
    // =========================================================================

    /// Record the viewport size used by docking, distribution and snapping.
    ///
    /// Panels are not moved; the renderer re-clamps them if it wants to.
    pub fn resize(&mut self, width: f32, height: f32) {
        let size = Size::new(width, height);
        if self.viewport != size {
            self.viewport = size;
            self.touch();
        }
    }

    pub fn set_settings(&mut self, settings: StoreSettings) {
        self.settings = settings;
        self.touch();
    }

    pub fn set_snap_to_edges(&mut self, enabled: bool) {
        self.settings.snap_to_edges = enabled;
        self.touch();
    }

    pub fn set_magnetic_boundaries(&mut self, enabled: bool) {
        self.settings.magnetic_boundaries = enabled;
        self.touch();
    }

    pub fn set_snap_threshold(&mut self, threshold: f32) {
        self.settings.snap_threshold = threshold.max(0.0);
        self.touch();
    }

    pub fn set_keyboard_shortcuts_enabled(&mut self, enabled: bool) {
        self.settings.keyboard_shortcuts_enabled = enabled;
        self.touch();
    }

    pub fn set_panel_animations(&mut self, enabled: bool) {
        self.settings.panel_animations = enabled;
        self.touch();
    }

    // =========================================================================
    // Scheduled work
    // =========================================================================

    /// Fire every scheduled clear that is due.
    ///
    /// Call once per frame (or from a host timer). Returns true if any clear
    /// fired.
    pub fn tick(&mut self) -> bool {
        let now = self.now();
        let (due, pending): (Vec<_>, Vec<_>) = self
            .pending_clears
            .drain(..)
            .partition(|clear| clear.is_due(now));
        self.pending_clears = pending;

        if due.is_empty() {
            return false;
        }
        for clear in &due {
            for id in &clear.panel_ids {
                if let Some(state) = self.panels.get_mut(id) {
                    state.is_snapped = false;
                }
            }
        }
        self.touch();
        true
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    pub(crate) fn now(&self) -> TimestampMs {
        self.clock.now_ms()
    }

    pub(crate) fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Take the next z-index from the pool
    pub(crate) fn next_z_index(&mut self) -> i64 {
        self.max_z_index += 1;
        self.max_z_index
    }

    /// Generate an id with `prefix` not used by any group or preset
    pub(crate) fn next_id(&mut self, prefix: &str) -> String {
        loop {
            let id = format!("{}-{}", prefix, self.next_seq);
            self.next_seq += 1;
            if !self.groups.contains_key(&id) && !self.presets.contains_key(&id) {
                return id;
            }
        }
    }

    /// Raise the pool so it covers every recorded z-index
    pub(crate) fn sync_max_z_index(&mut self) {
        let highest = self.panels.values().map(|p| p.z_index).max();
        if let Some(highest) = highest {
            self.max_z_index = self.max_z_index.max(highest);
        }
    }

    /// Merge a loaded layout over the current state.
    ///
    /// Panel patches apply to catalog ids only and never carry group
    /// membership; the group lists decide that after reconciliation.
    /// Groups and presets with clashing ids are replaced.
    pub(crate) fn merge_layout(
        &mut self,
        panels: BTreeMap<PanelId, PanelPatch>,
        groups: BTreeMap<GroupId, PanelGroup>,
        presets: BTreeMap<PresetId, WorkspacePreset>,
    ) {
        for (id, patch) in &panels {
            if let Some(state) = self.panels.get_mut(id) {
                patch.without_group().apply_local(state);
            }
        }
        self.groups.extend(groups);
        self.presets.extend(presets);
        if let Some(active) = &self.active_preset_id {
            if !self.presets.contains_key(active) {
                self.active_preset_id = None;
            }
        }
        self.reconcile_groups();
        self.sync_max_z_index();
        self.touch();
    }

    /// Replace the layout with the catalog defaults, then merge `panels`,
    /// `groups` and `presets` over them
    pub(crate) fn replace_layout(
        &mut self,
        panels: BTreeMap<PanelId, PanelPatch>,
        groups: BTreeMap<GroupId, PanelGroup>,
        presets: BTreeMap<PresetId, WorkspacePreset>,
        active_preset_id: Option<PresetId>,
    ) {
        self.panels = self.registry.default_states();
        self.groups.clear();
        self.presets.clear();
        self.max_z_index = BASE_Z_INDEX;
        self.active_preset_id = active_preset_id;
        self.merge_layout(panels, groups, presets);
    }
}
