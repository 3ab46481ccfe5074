//! Deferred flag clears
//!
//! A grid snap marks panels `is_snapped` and schedules a clear one second
//! later. Pending clears are fire-and-forget: nothing cancels them, and when
//! one fires it patches by id, skipping ids that are gone.

use crate::types::{PanelId, TimestampMs};

/// Delay between a grid snap and clearing the `is_snapped` hint
pub const SNAP_FLAG_CLEAR_MS: f64 = 1000.0;

/// A pending `is_snapped = false` patch
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledClear {
    /// When the clear becomes due
    pub due_at: TimestampMs,
    /// Panels the clear applies to
    pub panel_ids: Vec<PanelId>,
}

impl ScheduledClear {
    /// Schedule a clear `SNAP_FLAG_CLEAR_MS` after `now`
    pub fn after_snap(now: TimestampMs, panel_ids: Vec<PanelId>) -> Self {
        Self {
            due_at: now + SNAP_FLAG_CLEAR_MS,
            panel_ids,
        }
    }

    /// Check if the clear should fire at `now`
    pub fn is_due(&self, now: TimestampMs) -> bool {
        now >= self.due_at
    }
}
