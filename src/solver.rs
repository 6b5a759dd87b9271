//! Validated timetabling entry point.
//!
//! Ties the pieces together: input tables are checked against the
//! preconditions in [`crate::validation`], then handed to the GA runner.
//! A run either fails fast with every detected configuration error before
//! any population is built, or returns the best timetable found — possibly
//! with residual conflicts (negative fitness). There is no partial success.

use crate::ga::{GaConfig, GaResult, GaRunner, TimetableChromosome, TimetableProblem};
use crate::models::{Course, Room, TimeSlot};
use crate::validation::{validate_input, ValidationError};

/// Runs the GA search over the given tables.
///
/// # Arguments
/// * `courses` - Course catalog; order defines the stable handle order.
/// * `rooms` - Available rooms.
/// * `timeslots` - Time-slot templates.
/// * `config` - Population size, generation limit, convergence threshold,
///   mutation rate, seed.
///
/// # Returns
/// The run outcome (best timetable, fitness history, termination state),
/// or all detected configuration errors.
///
/// # Example
/// ```
/// use timetable_ga::ga::GaConfig;
/// use timetable_ga::models::{Course, CourseKind, Room, TimeSlot};
/// use timetable_ga::solver::solve;
///
/// let courses = vec![Course::new("IF2110", CourseKind::Theory, 2)];
/// let rooms = vec![Room::theory("R101")];
/// let timeslots = vec![TimeSlot::new(2, 450, 570)];
/// let config = GaConfig::default().with_population_size(4).with_seed(1);
///
/// let result = solve(&courses, &rooms, &timeslots, &config).unwrap();
/// assert_eq!(result.best_fitness(), 0);
/// ```
pub fn solve(
    courses: &[Course],
    rooms: &[Room],
    timeslots: &[TimeSlot],
    config: &GaConfig,
) -> Result<GaResult<TimetableChromosome>, Vec<ValidationError>> {
    validate_input(courses, rooms, timeslots, config)?;
    let problem = TimetableProblem::new(courses, rooms, timeslots);
    Ok(GaRunner::run(&problem, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Termination;
    use crate::models::{CourseKind, FIRST_HALF_DAYS, SECOND_HALF_DAYS, THEORY_DAYS};
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_four_theory_courses_reach_zero_conflicts() {
        // 2 allowed days x 4 disjoint slots = 8 placements for 4 courses;
        // a conflict-free timetable exists and the search must find it
        let courses = vec![
            Course::new("IF2110", CourseKind::Theory, 2),
            Course::new("IF2120", CourseKind::Theory, 2),
            Course::new("IF2130", CourseKind::Theory, 2),
            Course::new("IF2140", CourseKind::Theory, 2),
        ];
        let rooms = vec![Room::theory("R101"), Room::theory("R102")];
        let timeslots = vec![
            TimeSlot::new(2, 450, 570),
            TimeSlot::new(2, 570, 690),
            TimeSlot::new(2, 750, 870),
            TimeSlot::new(2, 870, 990),
        ];
        let config = GaConfig::default()
            .with_population_size(8)
            .with_max_generations(80)
            .with_convergence_threshold(0)
            .with_seed(42);

        let result = solve(&courses, &rooms, &timeslots, &config).unwrap();
        assert_eq!(result.best_fitness(), 0);
        assert!(result.best.is_valid(&courses));
    }

    #[test]
    fn test_practical_pair_stays_in_day_groups() {
        let courses = vec![
            Course::new("IF2230_P1", CourseKind::Practical, 3),
            Course::new("IF2230_P2", CourseKind::Practical, 3),
        ];
        let rooms = vec![Room::practical("LAB1")];
        let timeslots = vec![TimeSlot::new(3, 780, 960)];
        let config = GaConfig::default()
            .with_population_size(8)
            .with_max_generations(30)
            .with_seed(42);

        let result = solve(&courses, &rooms, &timeslots, &config).unwrap();
        assert!(FIRST_HALF_DAYS.contains(&result.best.sessions[0].day));
        assert!(SECOND_HALF_DAYS.contains(&result.best.sessions[1].day));
        // Distinct day groups can never overlap
        assert_eq!(result.best_fitness(), 0);
    }

    #[test]
    fn test_overloaded_tables_terminate_with_negative_fitness() {
        // One slot for four courses: at most three distinct days are
        // reachable (Monday/Tuesday from initialization, Wednesday from
        // mutation), so some pair always collides
        let courses = vec![
            Course::new("IF2110", CourseKind::Theory, 2),
            Course::new("IF2120", CourseKind::Theory, 2),
            Course::new("IF2130", CourseKind::Theory, 2),
            Course::new("IF2140", CourseKind::Theory, 2),
        ];
        let rooms = vec![Room::theory("R101")];
        let timeslots = vec![TimeSlot::new(2, 450, 570)];
        let config = GaConfig::default()
            .with_population_size(4)
            .with_max_generations(15)
            .with_seed(42);

        let result = solve(&courses, &rooms, &timeslots, &config).unwrap();
        assert!(result.best_fitness() < 0);
        assert!(result.generations <= 15);
    }

    #[test]
    fn test_single_course_converges_at_threshold() {
        let courses = vec![Course::new("IF2110", CourseKind::Theory, 2)];
        let rooms = vec![Room::theory("R101")];
        let timeslots = vec![TimeSlot::new(2, 450, 570)];
        let config = GaConfig::default()
            .with_population_size(4)
            .with_max_generations(50)
            .with_convergence_threshold(5)
            .with_seed(42);

        let result = solve(&courses, &rooms, &timeslots, &config).unwrap();
        assert_eq!(result.termination, Termination::Converged);
        assert_eq!(result.generations, 5);
        assert_eq!(result.best_fitness(), 0);
        assert_eq!(result.history, vec![0; 5]);
    }

    #[test]
    fn test_initializer_day_groups_survive_evolution() {
        // Theory courses never mutate back to Monday, but they always stay
        // within Monday..Wednesday; practicals stay in their own groups
        let courses = vec![
            Course::new("IF2110", CourseKind::Theory, 2),
            Course::new("IF2230_P1", CourseKind::Practical, 3),
            Course::new("IF2230_P2", CourseKind::Practical, 3),
            Course::new("IF2120", CourseKind::Theory, 2),
        ];
        let rooms = vec![Room::theory("R101"), Room::practical("LAB1")];
        let timeslots = vec![
            TimeSlot::new(2, 450, 570),
            TimeSlot::new(2, 600, 720),
            TimeSlot::new(3, 780, 960),
        ];
        let config = GaConfig::default()
            .with_population_size(8)
            .with_max_generations(40)
            .with_seed(9);

        let result = solve(&courses, &rooms, &timeslots, &config).unwrap();
        for (course, session) in courses.iter().zip(&result.best.sessions) {
            match course.practical_half() {
                Some(crate::models::PracticalHalf::First) => {
                    assert!(FIRST_HALF_DAYS.contains(&session.day));
                }
                Some(crate::models::PracticalHalf::Second) => {
                    assert!(SECOND_HALF_DAYS.contains(&session.day));
                }
                None => {
                    // Theory: initializer group plus the mutation day pool
                    assert!(
                        THEORY_DAYS.contains(&session.day)
                            || FIRST_HALF_DAYS.contains(&session.day)
                    );
                }
            }
        }
    }

    #[test]
    fn test_invalid_input_is_rejected_before_search() {
        let config = GaConfig::default();
        let errors = solve(&[], &[], &[], &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCourses));
    }
}
