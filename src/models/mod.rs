//! Timetabling domain models.
//!
//! Core data types for representing a course catalog and its candidate
//! timetables. The tables (`Course`, `Room`, `TimeSlot`) are immutable
//! inputs supplied by the caller; `Session` is the assignable unit the
//! search decides.
//!
//! # Domain Mappings
//!
//! | timetable-ga | Generic scheduling |
//! |--------------|--------------------|
//! | Course | Task / Job |
//! | Room | Resource |
//! | TimeSlot | Time window template |
//! | Session | Assignment |

mod course;
mod day;
mod room;
mod session;
mod timeslot;

pub use course::{Course, CourseKind, PracticalHalf};
pub use day::{Day, FIRST_HALF_DAYS, SECOND_HALF_DAYS, THEORY_DAYS};
pub use room::Room;
pub use session::Session;
pub use timeslot::TimeSlot;
