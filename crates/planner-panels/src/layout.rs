//! Layout export and import
//!
//! The export payload is a self-contained JSON document:
//!
//! ```json
//! { "panels": {...}, "panelGroups": {...}, "workspacePresets": {...},
//!   "exportedAt": "2025-01-01T12:00:00.000Z", "version": "1.0" }
//! ```
//!
//! Import parses and validates the whole document before touching the
//! store, so a rejected document never leaves a half-applied layout.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PanelError, PanelResult};
use crate::group::PanelGroup;
use crate::panel::{PanelPatch, PanelState};
use crate::preset::WorkspacePreset;
use crate::store::PanelStore;
use crate::types::{GroupId, PanelId, PresetId, TimestampMs};

/// Format version written by export and required by import
pub const LAYOUT_VERSION: &str = "1.0";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedLayout<'a> {
    panels: &'a BTreeMap<PanelId, PanelState>,
    panel_groups: &'a BTreeMap<GroupId, PanelGroup>,
    workspace_presets: &'a BTreeMap<PresetId, WorkspacePreset>,
    exported_at: String,
    version: &'static str,
}

/// A parsed import document.
///
/// Panels are read as partial states so hand-edited or older exports that
/// omit fields still merge cleanly.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    #[serde(default)]
    pub panels: BTreeMap<PanelId, PanelPatch>,
    #[serde(default)]
    pub panel_groups: BTreeMap<GroupId, PanelGroup>,
    #[serde(default)]
    pub workspace_presets: BTreeMap<PresetId, WorkspacePreset>,
    #[serde(default)]
    pub exported_at: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl LayoutDocument {
    /// Parse and version-check an export payload
    pub fn parse(data: &str) -> PanelResult<Self> {
        let doc: LayoutDocument = serde_json::from_str(data)?;
        match doc.version.as_deref() {
            Some(LAYOUT_VERSION) => Ok(doc),
            Some(other) => Err(PanelError::UnsupportedVersion(other.to_string())),
            None => Err(PanelError::UnsupportedVersion("missing".to_string())),
        }
    }
}

/// ISO-8601 UTC timestamp with millisecond precision
pub fn iso_timestamp(ms: TimestampMs) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms as i64)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl PanelStore {
    /// Serialize panels, groups and presets into an export payload
    pub fn try_export_panel_layout(&self) -> PanelResult<String> {
        let layout = ExportedLayout {
            panels: self.panels(),
            panel_groups: self.groups(),
            workspace_presets: self.presets(),
            exported_at: iso_timestamp(self.now()),
            version: LAYOUT_VERSION,
        };
        Ok(serde_json::to_string_pretty(&layout)?)
    }

    /// Export payload as a string; empty if serialization failed
    pub fn export_panel_layout(&self) -> String {
        self.try_export_panel_layout().unwrap_or_else(|e| {
            warn!(error = %e, "layout export failed");
            String::new()
        })
    }

    /// Merge an export payload into the store.
    ///
    /// Panel entries apply to catalog ids only. Groups and presets are
    /// merged by id, then group membership is reconciled.
    pub fn try_import_panel_layout(&mut self, data: &str) -> PanelResult<()> {
        let doc = LayoutDocument::parse(data)?;
        let counts = (doc.panels.len(), doc.panel_groups.len(), doc.workspace_presets.len());
        self.merge_layout(doc.panels, doc.panel_groups, doc.workspace_presets);
        debug!(
            panels = counts.0,
            groups = counts.1,
            presets = counts.2,
            "layout imported"
        );
        Ok(())
    }

    /// Import a payload, logging and ignoring anything malformed.
    ///
    /// Returns true if the layout was applied.
    pub fn import_panel_layout(&mut self, data: &str) -> bool {
        match self.try_import_panel_layout(data) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "layout import rejected");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::store::test_support::store;

    #[test]
    fn test_iso_timestamp() {
        assert_eq!(iso_timestamp(0.0), "1970-01-01T00:00:00.000Z");
        assert_eq!(iso_timestamp(1_000_000.0), "1970-01-01T00:16:40.000Z");
    }

    #[test]
    fn test_export_shape() {
        let (mut store, _) = store();
        store.create_group("G", &["a"]);
        store.create_preset("P", None);

        let json = store.export_panel_layout();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], "1.0");
        assert_eq!(value["exportedAt"], "1970-01-01T00:16:40.000Z");
        assert_eq!(value["panels"]["a"]["position"]["x"], 10.0);
        assert_eq!(value["panels"]["a"]["groupId"], "group-1");
        assert_eq!(value["panelGroups"]["group-1"]["panelIds"][0], "a");
        assert!(value["workspacePresets"]["preset-2"].is_object());
    }

    #[test]
    fn test_parse_rejects_bad_versions() {
        let missing = r#"{"panels": {}}"#;
        assert!(matches!(
            LayoutDocument::parse(missing),
            Err(PanelError::UnsupportedVersion(_))
        ));
        let wrong = r#"{"panels": {}, "version": "2.0"}"#;
        assert_eq!(
            LayoutDocument::parse(wrong).unwrap_err(),
            PanelError::UnsupportedVersion("2.0".to_string())
        );
        assert!(matches!(
            LayoutDocument::parse("not json"),
            Err(PanelError::Serialization(_))
        ));
    }

    #[test]
    fn test_import_merges_known_panels() {
        let (mut store, _) = store();
        let data = r#"{
            "version": "1.0",
            "panels": {
                "a": { "position": { "x": 400, "y": 300 }, "zIndex": 2000 },
                "ghost": { "position": { "x": 1, "y": 1 } }
            }
        }"#;
        assert!(store.import_panel_layout(data));
        let a = store.panel("a").unwrap();
        assert_eq!(a.position, Vec2::new(400.0, 300.0));
        assert_eq!(a.z_index, 2000);
        assert_eq!(store.max_z_index(), 2000);
        assert!(store.panel("ghost").is_none());
        assert_eq!(store.panels().len(), 3);
        // untouched fields keep their values
        assert_eq!(store.panel("b").unwrap().position, Vec2::new(110.0, 10.0));
    }

    #[test]
    fn test_import_reconciles_groups() {
        let (mut store, _) = store();
        let data = r#"{
            "version": "1.0",
            "panels": { "c": { "groupId": "g-stale" } },
            "panelGroups": {
                "g1": { "id": "g1", "name": "One", "panelIds": ["a", "ghost"] },
                "g2": { "id": "g2", "name": "Ghosts", "panelIds": ["ghost"] }
            }
        }"#;
        assert!(store.import_panel_layout(data));
        assert_eq!(store.group("g1").unwrap().panel_ids, vec!["a"]);
        assert!(store.group("g2").is_none());
        assert_eq!(store.panel("a").unwrap().group_id.as_deref(), Some("g1"));
        assert_eq!(store.panel("c").unwrap().group_id, None);
    }

    #[test]
    fn test_import_group_id_follows_map_key() {
        let (mut store, _) = store();
        let data = r#"{
            "version": "1.0",
            "panels": {},
            "panelGroups": {
                "g1": { "id": "renamed", "name": "One", "panelIds": ["a", "b"] }
            }
        }"#;
        assert!(store.import_panel_layout(data));
        let group = store.group("g1").unwrap();
        assert_eq!(group.id, "g1");
        assert_eq!(store.panel("b").unwrap().group_id.as_deref(), Some("g1"));
    }

    #[test]
    fn test_rejected_import_leaves_state_unchanged() {
        let (mut store, _) = store();
        let before = store.panels().clone();
        let version = store.version();

        assert!(!store.import_panel_layout("{ nope"));
        assert!(!store.import_panel_layout(
            r#"{"version": "0.9", "panels": {"a": {"position": {"x": 1, "y": 1}}}}"#
        ));
        // a type error deep in the document rejects everything
        assert!(!store.import_panel_layout(
            r#"{"version": "1.0", "panels": {"a": {"position": {"x": 1, "y": 1}}, "b": {"zIndex": "high"}}}"#
        ));

        assert_eq!(store.panels(), &before);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn test_export_import_round_trip() {
        let (mut source, _) = store();
        source.update_panel_position("b", Vec2::new(640.0, 320.0));
        source.minimize_panel("c");
        source.create_group("Pair", &["a", "b"]);
        source.create_workspace_layout("Review", Some("two up"));
        let json = source.export_panel_layout();

        let (mut target, _) = store();
        assert!(target.import_panel_layout(&json));
        assert_eq!(target.panels(), source.panels());
        assert_eq!(target.groups(), source.groups());
        assert_eq!(target.presets(), source.presets());
    }
}
