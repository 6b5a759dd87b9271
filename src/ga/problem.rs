//! Timetabling GA problem definition.
//!
//! Binds the domain tables to the generic runner: random session draws
//! under the kind-specific day groups, conflict-counting fitness, midpoint
//! crossover, and the session re-roll mutation that keeps practical pairs
//! coupled.
//!
//! The room and time-slot tables are indexed once at construction (by kind
//! and by duration category) so the inner draw loop never re-scans them.

use std::collections::HashMap;

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{
    Course, CourseKind, PracticalHalf, Room, Session, TimeSlot, FIRST_HALF_DAYS, SECOND_HALF_DAYS,
};

use super::chromosome::{midpoint_crossover, TimetableChromosome};
use super::runner::GaProblem;

/// GA problem definition for course timetabling.
///
/// Owns copies of the input tables plus the lookup indexes the draw path
/// needs. Construction assumes the tables passed validation (see
/// [`crate::validation`]): a course whose duration or kind has no matching
/// pool panics when first drawn.
pub struct TimetableProblem {
    courses: Vec<Course>,
    rooms: Vec<Room>,
    timeslots: Vec<TimeSlot>,
    /// Duration category → time-slot table indexes.
    slots_by_duration: HashMap<u32, Vec<usize>>,
    /// Course kind → room table indexes.
    rooms_by_kind: HashMap<CourseKind, Vec<usize>>,
    /// Course handle → handle of its `_P2` counterpart (first halves only).
    pair_partner: Vec<Option<usize>>,
}

impl TimetableProblem {
    /// Creates a problem from the domain tables.
    pub fn new(courses: &[Course], rooms: &[Room], timeslots: &[TimeSlot]) -> Self {
        let mut slots_by_duration: HashMap<u32, Vec<usize>> = HashMap::new();
        for (idx, slot) in timeslots.iter().enumerate() {
            slots_by_duration.entry(slot.duration).or_default().push(idx);
        }

        let mut rooms_by_kind: HashMap<CourseKind, Vec<usize>> = HashMap::new();
        for (idx, room) in rooms.iter().enumerate() {
            rooms_by_kind.entry(room.kind).or_default().push(idx);
        }

        let handle_by_code: HashMap<&str, usize> = courses
            .iter()
            .enumerate()
            .map(|(handle, course)| (course.code.as_str(), handle))
            .collect();
        let pair_partner = courses
            .iter()
            .map(|course| {
                course
                    .paired_code()
                    .and_then(|code| handle_by_code.get(code.as_str()).copied())
            })
            .collect();

        Self {
            courses: courses.to_vec(),
            rooms: rooms.to_vec(),
            timeslots: timeslots.to_vec(),
            slots_by_duration,
            rooms_by_kind,
            pair_partner,
        }
    }

    /// The course catalog, in handle order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    fn random_slot<R: Rng>(&self, duration: u32, rng: &mut R) -> &TimeSlot {
        let pool = self
            .slots_by_duration
            .get(&duration)
            .unwrap_or_else(|| panic!("no time slot matches duration category {duration}"));
        &self.timeslots[*pool.choose(rng).unwrap()]
    }

    fn random_room<R: Rng>(&self, kind: CourseKind, rng: &mut R) -> &Room {
        let pool = self
            .rooms_by_kind
            .get(&kind)
            .unwrap_or_else(|| panic!("no room matches course kind {kind:?}"));
        &self.rooms[*pool.choose(rng).unwrap()]
    }

    /// Draws a fresh session for a course: day from its allowed group,
    /// slot from its duration pool, room from its kind pool.
    fn random_session<R: Rng>(&self, handle: usize, rng: &mut R) -> Session {
        let course = &self.courses[handle];
        let day = *course.allowed_days().choose(rng).unwrap();
        let slot = self.random_slot(course.duration, rng);
        let room = self.random_room(course.kind, rng);
        Session::new(day, slot.start_min, slot.end_min, room.id.as_str())
    }
}

impl GaProblem for TimetableProblem {
    type Individual = TimetableChromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> TimetableChromosome {
        let sessions = (0..self.courses.len())
            .map(|handle| self.random_session(handle, rng))
            .collect();
        TimetableChromosome::new(sessions)
    }

    /// Negated count of overlapping unordered session pairs.
    ///
    /// 0 is the maximum and means conflict-free. O(n²) over the catalog,
    /// which stays small relative to the generation count.
    fn evaluate(&self, individual: &TimetableChromosome) -> i32 {
        let sessions = &individual.sessions;
        let mut conflicts = 0;
        for i in 0..sessions.len() {
            for j in (i + 1)..sessions.len() {
                if sessions[i].overlaps(&sessions[j]) {
                    conflicts += 1;
                }
            }
        }
        -conflicts
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &TimetableChromosome,
        parent2: &TimetableChromosome,
        _rng: &mut R,
    ) -> Vec<TimetableChromosome> {
        let (c1, c2) = midpoint_crossover(parent1, parent2);
        vec![c1, c2]
    }

    /// Re-rolls one uniformly chosen course's session.
    ///
    /// The day pool is the first-half practical group {Tuesday, Wednesday}
    /// for every course kind — a mutated theory course may leave its
    /// Monday/Tuesday group here. Second-half practicals are immediately
    /// re-rolled into {Thursday, Friday}, and a mutated first half drags
    /// its `_P2` partner onto a fresh {Thursday, Friday} day (partner time
    /// and room stay put), so practical halves never cross day groups.
    fn mutate<R: Rng>(&self, individual: &mut TimetableChromosome, rng: &mut R) {
        let handle = rng.random_range(0..self.courses.len());
        let course = &self.courses[handle];

        let mut day = *FIRST_HALF_DAYS.choose(rng).unwrap();
        if course.practical_half() == Some(PracticalHalf::Second) {
            day = *SECOND_HALF_DAYS.choose(rng).unwrap();
        }
        let slot = self.random_slot(course.duration, rng);
        let room = self.random_room(course.kind, rng);
        individual.sessions[handle] = Session::new(day, slot.start_min, slot.end_min, room.id.as_str());

        if let Some(partner) = self.pair_partner[handle] {
            individual.sessions[partner].day = *SECOND_HALF_DAYS.choose(rng).unwrap();
        }
    }
}
