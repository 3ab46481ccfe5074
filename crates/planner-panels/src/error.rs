//! Error types for the panel engine
//!
//! Public store operations never surface these: an unknown id is a no-op and a
//! bad import is logged. The `try_*` boundary functions (import, persistence,
//! storage, registry loading) return them for callers that want detail.

/// Errors that can occur at the panel engine's fallible boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// Panel with the given ID is not in the registry
    PanelNotFound(String),

    /// Group with the given ID does not exist
    GroupNotFound(String),

    /// Preset with the given ID does not exist
    PresetNotFound(String),

    /// Layout payload carries a version this engine does not read
    UnsupportedVersion(String),

    /// JSON serialization or deserialization failed
    Serialization(String),

    /// Durable storage could not be read or written
    Storage(String),

    /// Panel registry failed validation
    InvalidRegistry {
        /// Offending panel id (may be empty)
        panel: String,
        /// What is wrong with it
        reason: &'static str,
    },
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PanelNotFound(id) => write!(f, "panel not found: {}", id),
            Self::GroupNotFound(id) => write!(f, "group not found: {}", id),
            Self::PresetNotFound(id) => write!(f, "preset not found: {}", id),
            Self::UnsupportedVersion(v) => write!(f, "unsupported layout version: {}", v),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
            Self::Storage(msg) => write!(f, "storage error: {}", msg),
            Self::InvalidRegistry { panel, reason } => {
                write!(f, "invalid registry entry '{}': {}", panel, reason)
            }
        }
    }
}

impl std::error::Error for PanelError {}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for panel engine boundaries
pub type PanelResult<T> = Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PanelError::PanelNotFound("layers".to_string());
        assert_eq!(err.to_string(), "panel not found: layers");

        let err = PanelError::UnsupportedVersion("2.0".to_string());
        assert_eq!(err.to_string(), "unsupported layout version: 2.0");

        let err = PanelError::InvalidRegistry {
            panel: "export".to_string(),
            reason: "min size exceeds default size",
        };
        assert_eq!(
            err.to_string(),
            "invalid registry entry 'export': min size exceeds default size"
        );
    }

    #[test]
    fn test_error_from_json() {
        let err: PanelError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, PanelError::Serialization(_)));
    }
}
