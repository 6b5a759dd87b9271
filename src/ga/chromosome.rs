//! Timetable chromosome encoding.
//!
//! # Encoding
//!
//! A candidate timetable is a fixed-size vector of [`Session`]s indexed by
//! course handle — the course's position in the input catalog. The handle
//! order is stable for the whole run, which keeps crossover's midpoint
//! split deterministic and avoids string keys in the inner loop. The
//! one-session-per-course invariant holds structurally: the vector always
//! has exactly one slot per course.

use crate::models::{Course, Session};

use super::runner::Individual;

/// A complete candidate timetable with a cached fitness.
///
/// Fitness is the negated conflict count: 0 means conflict-free, more
/// negative means more overlapping session pairs. Higher is better.
#[derive(Debug, Clone)]
pub struct TimetableChromosome {
    /// One session per course, indexed by course handle.
    pub sessions: Vec<Session>,
    /// Cached fitness (negated conflict count; `i32::MIN` = unevaluated).
    pub fitness: i32,
}

impl Individual for TimetableChromosome {
    type Fitness = i32;

    fn fitness(&self) -> i32 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: i32) {
        self.fitness = fitness;
    }
}

impl TimetableChromosome {
    /// Creates an unevaluated chromosome from a full session assignment.
    pub fn new(sessions: Vec<Session>) -> Self {
        Self {
            sessions,
            fitness: i32::MIN,
        }
    }

    /// Whether this chromosome covers the catalog: exactly one session per
    /// course, each with a non-empty time interval.
    pub fn is_valid(&self, courses: &[Course]) -> bool {
        self.sessions.len() == courses.len()
            && self.sessions.iter().all(|s| s.start_min < s.end_min)
    }

    /// The session assigned to a course handle.
    #[inline]
    pub fn session(&self, handle: usize) -> &Session {
        &self.sessions[handle]
    }
}

/// Single-point crossover at the midpoint of the handle order.
///
/// The split index is `floor(count / 2)` — fixed, not randomly drawn.
/// Child 1 takes the first half of `p1` and the second half of `p2`;
/// child 2 swaps the roles. Both children cover the full catalog.
///
/// # Panics
/// Panics if the parents cover different course sets (length mismatch);
/// that is an internal invariant violation, not a recoverable error.
pub fn midpoint_crossover(
    p1: &TimetableChromosome,
    p2: &TimetableChromosome,
) -> (TimetableChromosome, TimetableChromosome) {
    assert_eq!(
        p1.sessions.len(),
        p2.sessions.len(),
        "crossover parents must cover the same course set"
    );
    let mid = p1.sessions.len() / 2;

    let mut c1 = p1.sessions[..mid].to_vec();
    c1.extend_from_slice(&p2.sessions[mid..]);
    let mut c2 = p2.sessions[..mid].to_vec();
    c2.extend_from_slice(&p1.sessions[mid..]);

    (TimetableChromosome::new(c1), TimetableChromosome::new(c2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseKind, Day};

    fn sample_courses(n: usize) -> Vec<Course> {
        (0..n)
            .map(|i| Course::new(format!("C{}", i), CourseKind::Theory, 2))
            .collect()
    }

    fn chromosome_with_rooms(rooms: &[&str]) -> TimetableChromosome {
        let sessions = rooms
            .iter()
            .enumerate()
            .map(|(i, room)| Session::new(Day::Monday, (i as u32) * 120, (i as u32) * 120 + 120, *room))
            .collect();
        TimetableChromosome::new(sessions)
    }

    #[test]
    fn test_new_chromosome_is_unevaluated() {
        let ch = chromosome_with_rooms(&["A", "B"]);
        assert_eq!(ch.fitness, i32::MIN);
        assert!(ch.is_valid(&sample_courses(2)));
    }

    #[test]
    fn test_is_valid_rejects_wrong_length() {
        let ch = chromosome_with_rooms(&["A", "B"]);
        assert!(!ch.is_valid(&sample_courses(3)));
    }

    #[test]
    fn test_midpoint_crossover_splits_at_floor_half() {
        let p1 = chromosome_with_rooms(&["A", "A", "A", "A", "A"]);
        let p2 = chromosome_with_rooms(&["B", "B", "B", "B", "B"]);

        let (c1, c2) = midpoint_crossover(&p1, &p2);
        // mid = floor(5 / 2) = 2
        let c1_rooms: Vec<&str> = c1.sessions.iter().map(|s| s.room.as_str()).collect();
        let c2_rooms: Vec<&str> = c2.sessions.iter().map(|s| s.room.as_str()).collect();
        assert_eq!(c1_rooms, vec!["A", "A", "B", "B", "B"]);
        assert_eq!(c2_rooms, vec!["B", "B", "A", "A", "A"]);
    }

    #[test]
    fn test_crossover_closure() {
        let courses = sample_courses(4);
        let p1 = chromosome_with_rooms(&["A", "A", "A", "A"]);
        let p2 = chromosome_with_rooms(&["B", "B", "B", "B"]);

        let (c1, c2) = midpoint_crossover(&p1, &p2);
        assert!(c1.is_valid(&courses));
        assert!(c2.is_valid(&courses));
        assert_eq!(c1.fitness, i32::MIN);
        assert_eq!(c2.fitness, i32::MIN);
    }

    #[test]
    fn test_crossover_is_deterministic() {
        let p1 = chromosome_with_rooms(&["A", "B", "C", "D"]);
        let p2 = chromosome_with_rooms(&["E", "F", "G", "H"]);

        let (c1a, c2a) = midpoint_crossover(&p1, &p2);
        let (c1b, c2b) = midpoint_crossover(&p1, &p2);
        assert_eq!(c1a.sessions, c1b.sessions);
        assert_eq!(c2a.sessions, c2b.sessions);
    }

    #[test]
    #[should_panic(expected = "same course set")]
    fn test_crossover_rejects_mismatched_parents() {
        let p1 = chromosome_with_rooms(&["A", "A"]);
        let p2 = chromosome_with_rooms(&["B", "B", "B"]);
        midpoint_crossover(&p1, &p2);
    }
}
