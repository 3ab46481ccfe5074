//! Floating Panel Engine for the Floor-Plan Designer
//!
//! This crate owns the state of every floating tool panel in the designer:
//! - Visibility, minimization and z-order (show, hide, focus, bring to front)
//! - Geometry updates and docking against viewport edges
//! - Panel groups that move and dock as a unit
//! - Workspace presets, layout export/import and persistence
//! - Multi-panel arrangement (grid snap, distribute, cascade, edge snap)
//!
//! ## Architecture
//!
//! - [`panel`]: Panel catalog (`PanelConfig`, `PanelRegistry`) and live state
//! - [`store`]: [`PanelStore`], the single authoritative state container
//! - [`placement`]: Pure docking/distribution/snapping math
//! - [`layout`]: Export payload and validated import
//! - [`persistence`]: Persisted record, `persist`/`rehydrate`, storage backends
//! - [`shortcuts`]: Keyboard shortcut dispatch
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//!
//! ## Example
//!
//! ```rust
//! use planner_panels::{DockPosition, PanelRegistry, PanelStore};
//!
//! let mut store = PanelStore::new(PanelRegistry::floor_planner());
//! store.resize(1920.0, 1080.0);
//!
//! store.show_panel("layers");
//! store.dock_panel("layers", DockPosition::Right);
//! assert!(store.is_panel_visible("layers"));
//!
//! let preset = store.create_preset("Drafting", None);
//! store.apply_preset(&preset);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: The store has no browser dependencies and is testable natively
//! 2. **Time Abstraction**: Timestamps and the deferred snap-flag clear use an injected [`Clock`]
//! 3. **Infallible Operations**: Unknown ids are no-ops; only boundaries return [`PanelResult`]
//! 4. **Renderer Validates**: The store records geometry as given and never clamps

pub mod clock;
pub mod error;
pub mod group;
pub mod layout;
pub mod math;
pub mod panel;
pub mod persistence;
pub mod placement;
pub mod preset;
pub mod settings;
pub mod shortcuts;
pub mod store;
pub mod timer;
pub mod types;

mod serde_helpers;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{PanelError, PanelResult};
pub use group::PanelGroup;
pub use layout::{LayoutDocument, LAYOUT_VERSION};
pub use math::{Rect, Size, Vec2};
pub use panel::{DockPosition, PanelConfig, PanelPatch, PanelRegistry, PanelState, BASE_Z_INDEX};
pub use persistence::{
    load_from, persist, rehydrate, save_to, LayoutStorage, MemoryStorage, PersistedLayout,
    STORAGE_KEY,
};
pub use preset::WorkspacePreset;
pub use settings::StoreSettings;
pub use shortcuts::{ShortcutDispatcher, ShortcutOutcome};
pub use store::{PanelStore, DEFAULT_VIEWPORT};
pub use types::{GroupId, PanelId, PresetId, TimestampMs};

/// Grid size used when the caller does not pick one
pub use placement::DEFAULT_GRID_SIZE;

/// Delay before the `is_snapped` hint is cleared, in milliseconds
pub use timer::SNAP_FLAG_CLEAR_MS;
