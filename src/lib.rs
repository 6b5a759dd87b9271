//! Genetic-algorithm course timetabling.
//!
//! Assigns each course section in a catalog to a (day, time-slot, room)
//! triple so that no two sections sharing a day overlap in time. The search
//! is a genetic algorithm over complete candidate timetables: random
//! initialization under kind-specific day constraints, conflict-counting
//! fitness, truncation selection with elitism, midpoint crossover, and a
//! session re-roll mutation that keeps paired practical halves coupled.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Room`, `TimeSlot`, `Session`,
//!   `Day`
//! - **`validation`**: Precondition checks (empty catalog, duplicate codes,
//!   population sizing, missing slot/room pools)
//! - **`ga`**: The optimization engine — chromosome encoding, problem
//!   definition, generic runner
//! - **`solver`**: Validated entry point tying tables, config, and runner
//!   together
//! - **`format`**: Display projection of the winning timetable and a
//!   conflict report
//!
//! # Scope
//!
//! This crate consumes three in-memory tables (courses, rooms, time-slots)
//! and returns the best timetable found. File parsing, upload handling, and
//! rendering belong to the caller. The search is heuristic: a conflict-free
//! timetable is not guaranteed to exist or to be found.
//!
//! # References
//!
//! - Eiben & Smith (2015), "Introduction to Evolutionary Computing"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

pub mod format;
pub mod ga;
pub mod models;
pub mod solver;
pub mod validation;
