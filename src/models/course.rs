//! Course (section) model.
//!
//! A course is one schedulable section of the catalog. The search decides
//! its day, time slot, and room; every other attribute (instructors,
//! assistant, class section, semester) is carried through to the output
//! untouched.
//!
//! # Practical pairs
//!
//! Practical courses come in linked halves distinguished by a `_P1` / `_P2`
//! suffix tag in the code. The first half is scheduled on Tuesday/Wednesday,
//! the second on Thursday/Friday; a practical without a `_P1` tag is treated
//! as a second half.

use serde::{Deserialize, Serialize};

use super::day::{Day, FIRST_HALF_DAYS, SECOND_HALF_DAYS, THEORY_DAYS};

/// Course classification. Rooms carry the same classification and may only
/// host courses of their kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseKind {
    /// Lecture section, scheduled on Monday/Tuesday.
    Theory,
    /// Laboratory section, one half of a linked pair.
    Practical,
}

/// Which half of a practical pair a course is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PracticalHalf {
    /// Code carries the `_P1` tag; scheduled on Tuesday/Wednesday.
    First,
    /// Any other practical; scheduled on Thursday/Friday.
    Second,
}

/// A course section to be placed in the timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (e.g. `"IF2110"`, `"IF2230_P1"`).
    pub code: String,
    /// Course classification.
    pub kind: CourseKind,
    /// Duration category; the course may only occupy time slots of the
    /// same category.
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
}

impl Course {
    /// Creates a new course with the given code, kind, and duration.
    pub fn new(code: impl Into<String>, kind: CourseKind, duration: u32) -> Self {
        Self {
            code: code.into(),
            kind,
            duration,
            instructor_1: String::new(),
            instructor_2: String::new(),
            assistant: String::new(),
            class_section: String::new(),
            semester: String::new(),
        }
    }

    /// Sets the instructors.
    pub fn with_instructors(
        mut self,
        instructor_1: impl Into<String>,
        instructor_2: impl Into<String>,
    ) -> Self {
        self.instructor_1 = instructor_1.into();
        self.instructor_2 = instructor_2.into();
        self
    }

    /// Sets the teaching assistant.
    pub fn with_assistant(mut self, assistant: impl Into<String>) -> Self {
        self.assistant = assistant.into();
        self
    }

    /// Sets the class section label.
    pub fn with_class_section(mut self, class_section: impl Into<String>) -> Self {
        self.class_section = class_section.into();
        self
    }

    /// Sets the semester label.
    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    /// Which half of a practical pair this course is.
    ///
    /// Returns `None` for theory courses. A practical whose code contains
    /// the `_P1` tag is the first half; any other practical is the second.
    pub fn practical_half(&self) -> Option<PracticalHalf> {
        match self.kind {
            CourseKind::Theory => None,
            CourseKind::Practical => {
                if self.code.contains("_P1") {
                    Some(PracticalHalf::First)
                } else {
                    Some(PracticalHalf::Second)
                }
            }
        }
    }

    /// Code of the second-half counterpart of a first-half practical.
    ///
    /// Returns `None` unless this course is a first-half practical.
    pub fn paired_code(&self) -> Option<String> {
        match self.practical_half() {
            Some(PracticalHalf::First) => Some(self.code.replace("_P1", "_P2")),
            _ => None,
        }
    }

    /// The two days this course may be initialized on.
    pub fn allowed_days(&self) -> [Day; 2] {
        match self.practical_half() {
            None => THEORY_DAYS,
            Some(PracticalHalf::First) => FIRST_HALF_DAYS,
            Some(PracticalHalf::Second) => SECOND_HALF_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("IF2110", CourseKind::Theory, 2)
            .with_instructors("A. Rahman", "B. Putri")
            .with_assistant("C. Wijaya")
            .with_class_section("K1")
            .with_semester("3");

        assert_eq!(c.code, "IF2110");
        assert_eq!(c.kind, CourseKind::Theory);
        assert_eq!(c.duration, 2);
        assert_eq!(c.instructor_1, "A. Rahman");
        assert_eq!(c.instructor_2, "B. Putri");
        assert_eq!(c.assistant, "C. Wijaya");
        assert_eq!(c.class_section, "K1");
        assert_eq!(c.semester, "3");
    }

    #[test]
    fn test_practical_half_from_code() {
        let theory = Course::new("IF2110", CourseKind::Theory, 2);
        assert_eq!(theory.practical_half(), None);

        let p1 = Course::new("IF2230_P1", CourseKind::Practical, 3);
        assert_eq!(p1.practical_half(), Some(PracticalHalf::First));

        let p2 = Course::new("IF2230_P2", CourseKind::Practical, 3);
        assert_eq!(p2.practical_half(), Some(PracticalHalf::Second));

        // Untagged practical is treated as a second half
        let untagged = Course::new("IF2230", CourseKind::Practical, 3);
        assert_eq!(untagged.practical_half(), Some(PracticalHalf::Second));
    }

    #[test]
    fn test_paired_code() {
        let p1 = Course::new("IF2230_P1", CourseKind::Practical, 3);
        assert_eq!(p1.paired_code(), Some("IF2230_P2".to_string()));

        let p2 = Course::new("IF2230_P2", CourseKind::Practical, 3);
        assert_eq!(p2.paired_code(), None);

        let theory = Course::new("IF2110", CourseKind::Theory, 2);
        assert_eq!(theory.paired_code(), None);
    }

    #[test]
    fn test_allowed_days() {
        let theory = Course::new("IF2110", CourseKind::Theory, 2);
        assert_eq!(theory.allowed_days(), THEORY_DAYS);

        let p1 = Course::new("IF2230_P1", CourseKind::Practical, 3);
        assert_eq!(p1.allowed_days(), FIRST_HALF_DAYS);

        let p2 = Course::new("IF2230_P2", CourseKind::Practical, 3);
        assert_eq!(p2.allowed_days(), SECOND_HALF_DAYS);
    }
}
