//! Room model.
//!
//! Rooms are classified by the kind of course they host; the search only
//! ever places a course in a room of the matching kind.

use serde::{Deserialize, Serialize};

use super::course::CourseKind;

/// A room that can host course sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Kind of course this room hosts.
    pub kind: CourseKind,
}

impl Room {
    /// Creates a new room.
    pub fn new(id: impl Into<String>, kind: CourseKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Creates a theory room.
    pub fn theory(id: impl Into<String>) -> Self {
        Self::new(id, CourseKind::Theory)
    }

    /// Creates a practical room.
    pub fn practical(id: impl Into<String>) -> Self {
        Self::new(id, CourseKind::Practical)
    }
}
