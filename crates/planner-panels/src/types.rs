//! Core type definitions for the panel engine
//!
//! Identifiers are plain strings so they round-trip unchanged through
//! exported layouts and browser storage.

/// Panel identifier, a key of the panel registry (e.g. `"furniture-library"`)
pub type PanelId = String;

/// Panel group identifier
///
/// Generated by the store as `group-<n>`; imported layouts may carry any string.
pub type GroupId = String;

/// Workspace preset identifier
///
/// Generated by the store as `preset-<n>` or `workspace-<n>`.
pub type PresetId = String;

/// Wall-clock time in milliseconds since the Unix epoch, as `Date.now()`
/// reports it
pub type TimestampMs = f64;
