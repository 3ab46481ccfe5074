//! Keyboard shortcuts for panels
//!
//! Each catalog entry may declare a single-key shortcut. Pressing it brings
//! a closed or minimized panel up; pressing it again while that panel is in
//! front hides it. `Escape` minimizes whatever is in front.

use std::collections::HashMap;

use tracing::debug;

use crate::panel::PanelRegistry;
use crate::store::PanelStore;
use crate::types::PanelId;

/// Key that minimizes the front-most panel
pub const ESCAPE_KEY: &str = "Escape";

/// Result of handling a key press
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// No binding matched, or shortcuts are disabled
    Ignored,
    /// Panel was shown, restored and raised
    Focused(PanelId),
    /// Front-most panel was hidden
    Hidden(PanelId),
    /// Front-most panel was minimized
    Minimized(PanelId),
}

/// Lookup from key to panel, built from a registry
#[derive(Clone, Debug, Default)]
pub struct ShortcutDispatcher {
    /// Lowercased key to panel id
    bindings: HashMap<String, PanelId>,
}

impl ShortcutDispatcher {
    /// Bind every shortcut declared in `registry`.
    ///
    /// If two panels claim the same key, the first one in catalog order
    /// keeps it.
    pub fn from_registry(registry: &PanelRegistry) -> Self {
        let mut bindings = HashMap::new();
        for config in registry.iter() {
            if let Some(key) = &config.keyboard_shortcut {
                bindings
                    .entry(key.to_lowercase())
                    .or_insert_with(|| config.id.clone());
            }
        }
        Self { bindings }
    }

    /// Panel bound to `key`, ignoring case
    pub fn lookup(&self, key: &str) -> Option<&PanelId> {
        self.bindings.get(&key.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Handle a key press against `store`
    pub fn dispatch(&self, store: &mut PanelStore, key: &str) -> ShortcutOutcome {
        if !store.settings().keyboard_shortcuts_enabled {
            return ShortcutOutcome::Ignored;
        }

        if key == ESCAPE_KEY {
            return match store.top_panel() {
                Some(id) => {
                    store.minimize_panel(&id);
                    ShortcutOutcome::Minimized(id)
                }
                None => ShortcutOutcome::Ignored,
            };
        }

        let Some(id) = self.lookup(key).cloned() else {
            return ShortcutOutcome::Ignored;
        };
        debug!(key, panel = %id, "shortcut");
        if store.top_panel().as_ref() == Some(&id) {
            store.hide_panel(&id);
            ShortcutOutcome::Hidden(id)
        } else {
            store.focus_panel(&id);
            ShortcutOutcome::Focused(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PanelStore, ShortcutDispatcher) {
        let registry = PanelRegistry::floor_planner();
        let dispatcher = ShortcutDispatcher::from_registry(&registry);
        (PanelStore::new(registry), dispatcher)
    }

    #[test]
    fn test_bindings_from_catalog() {
        let (_, dispatcher) = setup();
        assert_eq!(dispatcher.len(), 10);
        assert_eq!(dispatcher.lookup("L").map(String::as_str), Some("layers"));
        assert_eq!(dispatcher.lookup("3").map(String::as_str), Some("view-3d"));
        assert_eq!(dispatcher.lookup("q"), None);
    }

    #[test]
    fn test_shortcut_focuses_then_hides() {
        let (mut store, dispatcher) = setup();
        assert!(!store.is_panel_visible("layers"));

        let outcome = dispatcher.dispatch(&mut store, "l");
        assert_eq!(outcome, ShortcutOutcome::Focused("layers".to_string()));
        assert!(store.is_panel_visible("layers"));
        assert_eq!(store.top_panel().as_deref(), Some("layers"));

        let outcome = dispatcher.dispatch(&mut store, "L");
        assert_eq!(outcome, ShortcutOutcome::Hidden("layers".to_string()));
        assert!(!store.is_panel_visible("layers"));
    }

    #[test]
    fn test_shortcut_raises_visible_background_panel() {
        let (mut store, dispatcher) = setup();
        store.show_panel("layers");
        store.show_panel("materials");

        let outcome = dispatcher.dispatch(&mut store, "l");
        assert_eq!(outcome, ShortcutOutcome::Focused("layers".to_string()));
        assert!(store.is_panel_visible("materials"));
        assert_eq!(store.top_panel().as_deref(), Some("layers"));
    }

    #[test]
    fn test_shortcut_restores_minimized_panel() {
        let (mut store, dispatcher) = setup();
        store.focus_panel("layers");
        store.minimize_panel("layers");

        dispatcher.dispatch(&mut store, "l");
        assert!(!store.is_panel_minimized("layers"));
        assert!(store.is_panel_visible("layers"));
    }

    #[test]
    fn test_escape_minimizes_front_panel() {
        let (mut store, dispatcher) = setup();
        store.focus_panel("history");

        let outcome = dispatcher.dispatch(&mut store, ESCAPE_KEY);
        assert_eq!(outcome, ShortcutOutcome::Minimized("history".to_string()));
        assert!(store.is_panel_minimized("history"));
    }

    #[test]
    fn test_disabled_shortcuts_are_ignored() {
        let (mut store, dispatcher) = setup();
        store.set_keyboard_shortcuts_enabled(false);
        let version = store.version();

        assert_eq!(dispatcher.dispatch(&mut store, "l"), ShortcutOutcome::Ignored);
        assert_eq!(dispatcher.dispatch(&mut store, ESCAPE_KEY), ShortcutOutcome::Ignored);
        assert_eq!(store.version(), version);
        assert!(!store.is_panel_visible("layers"));
    }

    #[test]
    fn test_unbound_key() {
        let (mut store, dispatcher) = setup();
        assert_eq!(dispatcher.dispatch(&mut store, "F13"), ShortcutOutcome::Ignored);
    }
}
