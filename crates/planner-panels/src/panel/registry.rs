//! Panel catalog

use std::collections::{BTreeMap, HashSet};

use super::{PanelConfig, PanelState, BASE_Z_INDEX};
use crate::error::{PanelError, PanelResult};
use crate::math::{Size, Vec2};
use crate::types::PanelId;

/// Read-only catalog of every panel the application knows about.
///
/// The catalog is fixed once the store is built; there is no runtime
/// registration. Entries keep their declaration order.
#[derive(Clone, Debug, Default)]
pub struct PanelRegistry {
    configs: Vec<PanelConfig>,
}

impl PanelRegistry {
    /// Build a registry from a list of configs, validating each entry
    pub fn from_configs(configs: Vec<PanelConfig>) -> PanelResult<Self> {
        let mut seen = HashSet::new();
        for config in &configs {
            validate(config)?;
            if !seen.insert(config.id.as_str()) {
                return Err(PanelError::InvalidRegistry {
                    panel: config.id.clone(),
                    reason: "duplicate panel id",
                });
            }
        }
        Ok(Self { configs })
    }

    /// Load a registry from a JSON array of [`PanelConfig`]
    pub fn from_json(json: &str) -> PanelResult<Self> {
        let configs: Vec<PanelConfig> = serde_json::from_str(json)?;
        Self::from_configs(configs)
    }

    /// The floor-plan designer's built-in catalog
    pub fn floor_planner() -> Self {
        let configs = vec![
            PanelConfig::new(
                "drawing-tools",
                "Drawing Tools",
                "pencil-ruler",
                Vec2::new(20.0, 80.0),
                Size::new(260.0, 420.0),
            )
            .with_min_size(Size::new(220.0, 300.0))
            .with_shortcut("t")
            .with_category("design")
            .visible_by_default()
            .not_closable(),
            PanelConfig::new(
                "furniture-library",
                "Furniture Library",
                "sofa",
                Vec2::new(20.0, 520.0),
                Size::new(320.0, 480.0),
            )
            .with_min_size(Size::new(260.0, 320.0))
            .with_max_size(Size::new(640.0, 900.0))
            .with_shortcut("f")
            .with_category("design")
            .visible_by_default(),
            PanelConfig::new(
                "materials",
                "Materials",
                "palette",
                Vec2::new(360.0, 80.0),
                Size::new(300.0, 420.0),
            )
            .with_min_size(Size::new(240.0, 300.0))
            .with_shortcut("m")
            .with_category("design"),
            PanelConfig::new(
                "layers",
                "Layers",
                "layers",
                Vec2::new(1580.0, 520.0),
                Size::new(300.0, 360.0),
            )
            .with_min_size(Size::new(220.0, 200.0))
            .with_shortcut("l")
            .with_category("organize"),
            PanelConfig::new(
                "properties",
                "Properties",
                "sliders",
                Vec2::new(1580.0, 80.0),
                Size::new(300.0, 420.0),
            )
            .with_min_size(Size::new(240.0, 260.0))
            .with_shortcut("p")
            .with_category("organize")
            .visible_by_default(),
            PanelConfig::new(
                "measurements",
                "Measurements",
                "ruler",
                Vec2::new(700.0, 80.0),
                Size::new(280.0, 240.0),
            )
            .with_min_size(Size::new(220.0, 180.0))
            .with_shortcut("r")
            .with_category("analyze"),
            PanelConfig::new(
                "view-3d",
                "3D View",
                "cube",
                Vec2::new(640.0, 420.0),
                Size::new(640.0, 480.0),
            )
            .with_min_size(Size::new(320.0, 240.0))
            .with_shortcut("3")
            .with_category("analyze"),
            PanelConfig::new(
                "collaboration",
                "Collaboration",
                "users",
                Vec2::new(1240.0, 80.0),
                Size::new(320.0, 400.0),
            )
            .with_min_size(Size::new(260.0, 280.0))
            .with_shortcut("c")
            .with_category("share"),
            PanelConfig::new(
                "history",
                "History",
                "clock",
                Vec2::new(1240.0, 520.0),
                Size::new(280.0, 320.0),
            )
            .with_min_size(Size::new(220.0, 200.0))
            .with_shortcut("h")
            .with_category("organize"),
            PanelConfig::new(
                "export",
                "Export",
                "download",
                Vec2::new(780.0, 300.0),
                Size::new(360.0, 300.0),
            )
            .with_shortcut("e")
            .with_category("share")
            .fixed_size(),
        ];
        Self { configs }
    }

    /// Look up a config by panel id
    pub fn get(&self, id: &str) -> Option<&PanelConfig> {
        self.configs.iter().find(|c| c.id == id)
    }

    /// Check if the catalog contains a panel id
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterate configs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &PanelConfig> {
        self.configs.iter()
    }

    /// Number of panels in the catalog
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Find the panel bound to a keyboard shortcut (case-insensitive)
    pub fn find_by_shortcut(&self, key: &str) -> Option<&PanelConfig> {
        self.configs.iter().find(|c| {
            c.keyboard_shortcut
                .as_deref()
                .is_some_and(|k| k.eq_ignore_ascii_case(key))
        })
    }

    /// Fresh default state for every panel in the catalog
    pub fn default_states(&self) -> BTreeMap<PanelId, PanelState> {
        self.configs
            .iter()
            .map(|c| (c.id.clone(), PanelState::from_config(c, BASE_Z_INDEX)))
            .collect()
    }
}

fn validate(config: &PanelConfig) -> PanelResult<()> {
    let invalid = |reason| {
        Err(PanelError::InvalidRegistry {
            panel: config.id.clone(),
            reason,
        })
    };

    if config.id.trim().is_empty() {
        return invalid("empty panel id");
    }
    if !config.min_size.fits_within(config.default_size) {
        return invalid("min size exceeds default size");
    }
    if let Some(max) = config.max_size {
        if !config.min_size.fits_within(max) {
            return invalid("max size is smaller than min size");
        }
    }
    Ok(())
}
