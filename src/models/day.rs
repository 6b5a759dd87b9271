//! Teaching days and allowed day groups.
//!
//! The scheduling week is the ordered five-day set Monday..Friday. Courses
//! are not free to use the whole week: each course kind draws its day from
//! one of three fixed two-day groups (see [`crate::models::Course`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching day, Monday through Friday.
///
/// Ordering follows the week: `Day::Monday < Day::Friday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// Allowed days for theory courses.
pub const THEORY_DAYS: [Day; 2] = [Day::Monday, Day::Tuesday];

/// Allowed days for the first half of a practical pair.
pub const FIRST_HALF_DAYS: [Day; 2] = [Day::Tuesday, Day::Wednesday];

/// Allowed days for the second half of a practical pair.
pub const SECOND_HALF_DAYS: [Day; 2] = [Day::Thursday, Day::Friday];

impl Day {
    /// All teaching days in week order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Position within the week (Monday = 0, Friday = 4).
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// English day name.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
