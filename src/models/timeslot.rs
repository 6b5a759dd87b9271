//! Time slot model.
//!
//! A time slot is a reusable start/end template tagged with a duration
//! category. Multiple slots may share a category; a course of duration `d`
//! may be placed in any slot of category `d`, on any allowed day.
//!
//! # Time Model
//! Start and end are minutes since midnight. Intervals are half-open:
//! a slot occupies `[start_min, end_min)`.

use serde::{Deserialize, Serialize};

/// A time-of-day interval template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Duration category this slot belongs to.
    pub duration: u32,
    /// Slot start (minutes since midnight, inclusive).
    pub start_min: u32,
    /// Slot end (minutes since midnight, exclusive).
    pub end_min: u32,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(duration: u32, start_min: u32, end_min: u32) -> Self {
        Self {
            duration,
            start_min,
            end_min,
        }
    }

    /// Length of this slot in minutes.
    #[inline]
    pub fn span_min(&self) -> u32 {
        self.end_min - self.start_min
    }
}
