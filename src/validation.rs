//! Input validation for timetabling runs.
//!
//! Checks the preconditions the search depends on, before any population is
//! built. Detects:
//! - Empty course catalog
//! - Duplicate course codes
//! - Population sizes the pairing scheme cannot handle
//! - Courses with no matching time slot or room pool
//!
//! A failed check is fatal: the run is rejected, never retried. Conflicts
//! between sessions are *not* validated here — they are scored by the
//! fitness function during the search.

use std::collections::HashSet;

use crate::ga::GaConfig;
use crate::models::{Course, Room, TimeSlot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The course catalog is empty.
    EmptyCourses,
    /// Two courses share the same code.
    DuplicateCourseCode,
    /// Population size is below 4 or not a multiple of 4.
    PopulationSize,
    /// No time slot exists for a course's duration category.
    MissingTimeSlot,
    /// No room exists for a course's kind.
    MissingRoom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input tables and configuration for a timetabling run.
///
/// Checks:
/// 1. The course catalog is non-empty
/// 2. Course codes are unique
/// 3. `population_size` is at least 4 and a multiple of 4 (truncation
///    selection keeps N/2 survivors, which must pair off evenly)
/// 4. Every course duration has at least one matching time slot
/// 5. Every course kind has at least one matching room
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    courses: &[Course],
    rooms: &[Room],
    timeslots: &[TimeSlot],
    config: &GaConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    if courses.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCourses,
            "Course catalog is empty",
        ));
    }

    if config.population_size < 4 || config.population_size % 4 != 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::PopulationSize,
            format!(
                "Population size {} is not a positive multiple of 4",
                config.population_size
            ),
        ));
    }

    let mut codes = HashSet::new();
    for course in courses {
        if !codes.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourseCode,
                format!("Duplicate course code: {}", course.code),
            ));
        }
    }

    let slot_durations: HashSet<u32> = timeslots.iter().map(|s| s.duration).collect();
    let room_kinds: HashSet<_> = rooms.iter().map(|r| r.kind).collect();

    for course in courses {
        if !slot_durations.contains(&course.duration) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingTimeSlot,
                format!(
                    "Course '{}' has duration {} but no time slot matches it",
                    course.code, course.duration
                ),
            ));
        }
        if !room_kinds.contains(&course.kind) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingRoom,
                format!(
                    "Course '{}' has kind {:?} but no room matches it",
                    course.code, course.kind
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
