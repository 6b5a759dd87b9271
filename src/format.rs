//! Schedule formatting and conflict reporting.
//!
//! Thin, read-only projections of a finished timetable. `format_schedule`
//! produces the display rows a caller renders (ordered by day, then start
//! time); `conflict_report` names the overlapping course pairs behind a
//! negative fitness score.

use serde::{Deserialize, Serialize};

use crate::ga::TimetableChromosome;
use crate::models::{Course, CourseKind};

/// A display record for one scheduled course.
///
/// Carries every descriptive course attribute through unchanged, plus the
/// assigned "Day HH:MM-HH:MM" string and room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Course code.
    pub code: String,
    /// Course classification.
    pub kind: CourseKind,
    /// Duration category.
    pub duration: u32,
    /// Primary instructor.
    pub instructor_1: String,
    /// Secondary instructor.
    pub instructor_2: String,
    /// Teaching assistant.
    pub assistant: String,
    /// Class section label.
    pub class_section: String,
    /// Semester label.
    pub semester: String,
    /// Assigned day and time, e.g. `"Monday 07:30-09:30"`.
    pub time: String,
    /// Assigned room identifier.
    pub room: String,
}

/// The overlapping course pairs of a timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Overlapping course-code pairs, in handle order.
    pub pairs: Vec<(String, String)>,
}

impl ConflictReport {
    /// Number of overlapping pairs (the negated fitness).
    pub fn total(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the timetable is conflict-free.
    pub fn is_conflict_free(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Projects a finished timetable into display rows.
///
/// Rows are ordered by day index (Monday first), then by session start
/// time. Pure; the timetable and catalog are left untouched.
///
/// # Panics
/// Panics if the timetable does not cover the catalog — an internal
/// invariant violation, not a recoverable error.
pub fn format_schedule(best: &TimetableChromosome, courses: &[Course]) -> Vec<ScheduleRow> {
    assert_eq!(
        best.sessions.len(),
        courses.len(),
        "timetable must cover the course catalog"
    );

    let mut order: Vec<usize> = (0..courses.len()).collect();
    order.sort_by_key(|&h| (best.sessions[h].day.index(), best.sessions[h].start_min));

    order
        .into_iter()
        .map(|h| {
            let course = &courses[h];
            let session = &best.sessions[h];
            ScheduleRow {
                code: course.code.clone(),
                kind: course.kind,
                duration: course.duration,
                instructor_1: course.instructor_1.clone(),
                instructor_2: course.instructor_2.clone(),
                assistant: course.assistant.clone(),
                class_section: course.class_section.clone(),
                semester: course.semester.clone(),
                time: format!(
                    "{} {}-{}",
                    session.day,
                    hhmm(session.start_min),
                    hhmm(session.end_min)
                ),
                room: session.room.clone(),
            }
        })
        .collect()
}

/// Lists the overlapping course pairs of a timetable.
pub fn conflict_report(best: &TimetableChromosome, courses: &[Course]) -> ConflictReport {
    assert_eq!(
        best.sessions.len(),
        courses.len(),
        "timetable must cover the course catalog"
    );

    let mut pairs = Vec::new();
    for i in 0..best.sessions.len() {
        for j in (i + 1)..best.sessions.len() {
            if best.sessions[i].overlaps(&best.sessions[j]) {
                pairs.push((courses[i].code.clone(), courses[j].code.clone()));
            }
        }
    }
    ConflictReport { pairs }
}

fn hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
