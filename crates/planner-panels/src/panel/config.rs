//! Static panel configuration

use crate::math::{Size, Vec2};
use crate::types::PanelId;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Immutable description of one panel type.
///
/// Geometry values are viewport pixels. The store records whatever the
/// renderer reports; [`clamp_size`](Self::clamp_size) is the helper the
/// renderer uses to enforce `min_size` / `max_size` while the user drags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    pub id: PanelId,
    pub title: String,
    /// Opaque icon identifier, resolved by the renderer
    pub icon: String,
    pub default_position: Vec2,
    pub default_size: Size,
    pub min_size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<Size>,
    #[serde(default = "default_true")]
    pub resizable: bool,
    #[serde(default = "default_true")]
    pub minimizable: bool,
    #[serde(default = "default_true")]
    pub closable: bool,
    /// Single-key binding handled by the shortcut dispatcher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_shortcut: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub dockable: bool,
    #[serde(default = "default_true")]
    pub groupable: bool,
    /// Shown in the default layout
    #[serde(default)]
    pub default_visible: bool,
}

impl PanelConfig {
    /// Create a config with the given geometry and permissive defaults.
    ///
    /// `min_size` starts at the default size; use [`with_min_size`](Self::with_min_size)
    /// to allow shrinking.
    pub fn new(
        id: impl Into<PanelId>,
        title: impl Into<String>,
        icon: impl Into<String>,
        default_position: Vec2,
        default_size: Size,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            default_position,
            default_size,
            min_size: default_size,
            max_size: None,
            resizable: true,
            minimizable: true,
            closable: true,
            keyboard_shortcut: None,
            category: None,
            dockable: true,
            groupable: true,
            default_visible: false,
        }
    }

    #[must_use]
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    #[must_use]
    pub fn with_max_size(mut self, max_size: Size) -> Self {
        self.max_size = Some(max_size);
        self
    }

    #[must_use]
    pub fn with_shortcut(mut self, key: impl Into<String>) -> Self {
        self.keyboard_shortcut = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn visible_by_default(mut self) -> Self {
        self.default_visible = true;
        self
    }

    #[must_use]
    pub fn fixed_size(mut self) -> Self {
        self.resizable = false;
        self
    }

    #[must_use]
    pub fn not_closable(mut self) -> Self {
        self.closable = false;
        self
    }

    /// Apply this panel's size constraints to a proposed size.
    ///
    /// Non-resizable panels always report their default size.
    pub fn clamp_size(&self, proposed: Size) -> Size {
        if !self.resizable {
            return self.default_size;
        }
        proposed.clamp(self.min_size, self.max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers() -> PanelConfig {
        PanelConfig::new(
            "layers",
            "Layers",
            "layers",
            Vec2::new(20.0, 80.0),
            Size::new(280.0, 400.0),
        )
        .with_min_size(Size::new(200.0, 240.0))
        .with_max_size(Size::new(480.0, 800.0))
    }

    #[test]
    fn test_clamp_size() {
        let config = layers();
        assert_eq!(config.clamp_size(Size::new(100.0, 900.0)), Size::new(200.0, 800.0));
        assert_eq!(config.clamp_size(Size::new(300.0, 300.0)), Size::new(300.0, 300.0));
    }

    #[test]
    fn test_clamp_size_fixed() {
        let config = layers().fixed_size();
        assert_eq!(config.clamp_size(Size::new(300.0, 300.0)), config.default_size);
    }

    #[test]
    fn test_config_json_defaults() {
        let json = r#"{
            "id": "export",
            "title": "Export",
            "icon": "download",
            "defaultPosition": {"x": 100, "y": 100},
            "defaultSize": {"width": 360, "height": 300},
            "minSize": {"width": 300, "height": 240}
        }"#;
        let config: PanelConfig = serde_json::from_str(json).unwrap();
        assert!(config.resizable);
        assert!(config.closable);
        assert!(config.dockable);
        assert!(!config.default_visible);
        assert_eq!(config.max_size, None);
        assert_eq!(config.keyboard_shortcut, None);
    }
}
