//! Session model and the overlap predicate.
//!
//! A session is one course's assigned (day, start, end, room) — the
//! decision unit of the search. Two sessions conflict iff they share a day
//! and their time intervals intersect; the room plays no part in the
//! conflict test.
//!
//! # Time Model
//! Intervals are half-open `[start_min, end_min)`: sessions that exactly
//! abut (one ends when the other starts) do not overlap.

use serde::{Deserialize, Serialize};

use super::day::Day;

/// An assigned (day, time interval, room) for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Assigned teaching day.
    pub day: Day,
    /// Start time (minutes since midnight, inclusive).
    pub start_min: u32,
    /// End time (minutes since midnight, exclusive).
    pub end_min: u32,
    /// Assigned room identifier.
    pub room: String,
}

impl Session {
    /// Creates a new session.
    pub fn new(day: Day, start_min: u32, end_min: u32, room: impl Into<String>) -> Self {
        Self {
            day,
            start_min,
            end_min,
            room: room.into(),
        }
    }

    /// Whether two sessions conflict.
    ///
    /// True iff both fall on the same day and their half-open time
    /// intervals intersect. Symmetric; no side effects.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start_min < other.end_min && other.start_min < self.end_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_same_day_intersecting() {
        let a = Session::new(Day::Monday, 480, 600, "R101");
        let b = Session::new(Day::Monday, 540, 660, "R102");
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Session::new(Day::Monday, 480, 600, "R101");
        let b = Session::new(Day::Monday, 540, 660, "R102");
        assert_eq!(a.overlaps(&b), b.overlaps(&a));

        let c = Session::new(Day::Tuesday, 480, 600, "R101");
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
    }

    #[test]
    fn test_overlap_self() {
        let a = Session::new(Day::Monday, 480, 600, "R101");
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_no_overlap_different_days() {
        let a = Session::new(Day::Monday, 480, 600, "R101");
        let b = Session::new(Day::Tuesday, 480, 600, "R101");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_no_overlap_abutting() {
        // One ends exactly when the other starts
        let a = Session::new(Day::Monday, 480, 600, "R101");
        let b = Session::new(Day::Monday, 600, 720, "R101");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_containment() {
        let outer = Session::new(Day::Friday, 480, 720, "R101");
        let inner = Session::new(Day::Friday, 540, 600, "R102");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
