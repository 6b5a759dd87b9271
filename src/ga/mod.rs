//! GA-based timetable optimization.
//!
//! The engine is split the same way the rest of the crate is: a generic
//! runner that knows nothing about timetables, and a problem definition
//! that binds the domain tables to it.
//!
//! # Submodules
//!
//! - `chromosome`: [`TimetableChromosome`] — the candidate encoding — and
//!   the midpoint crossover operator
//! - `problem`: [`TimetableProblem`] — pre-indexed tables, random session
//!   draws, conflict-counting fitness, mutation
//! - `runner`: [`GaRunner`] and the [`Individual`]/[`GaProblem`] traits —
//!   truncation selection with elitism and the convergence stopping rule

mod chromosome;
mod problem;
mod runner;

pub use chromosome::{midpoint_crossover, TimetableChromosome};
pub use problem::TimetableProblem;
pub use runner::{select_best, GaConfig, GaProblem, GaResult, GaRunner, Individual, Termination};
