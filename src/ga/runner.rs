//! Generic genetic-algorithm runner.
//!
//! Evolves a population through truncation selection with elitism: each
//! generation the top half survives unchanged, survivor pairs produce two
//! crossover children each, and offspring mutate with a fixed probability.
//! The run stops when the recorded best fitness has been constant for a
//! configured number of consecutive generations, or at the generation
//! limit.
//!
//! Randomness comes from a single injected, seedable source; runs with the
//! same seed and inputs are reproducible. Fitness evaluation of distinct
//! individuals shares no state and can optionally fan out across threads.

use std::fmt;
use std::thread;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A candidate solution with a cached fitness value.
///
/// Higher fitness is better (maximization convention).
pub trait Individual: Clone {
    /// Fitness value type.
    type Fitness: Ord + Copy + fmt::Debug;

    /// Cached fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Stores an evaluated fitness.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// A problem definition the runner can evolve.
pub trait GaProblem {
    /// Candidate type.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes the fitness of an individual. Pure.
    fn evaluate(&self, individual: &Self::Individual)
        -> <Self::Individual as Individual>::Fitness;

    /// Produces the children of a parent pair.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Vec<Self::Individual>;

    /// Mutates an individual in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R);
}

/// GA run configuration.
///
/// Defaults match the production deployment of this system: population 100,
/// 50 generations, convergence threshold 5, mutation rate 0.2.
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Population size. Must be a positive multiple of 4 so that the
    /// surviving half pairs off evenly.
    pub population_size: usize,
    /// Maximum number of generations.
    pub max_generations: usize,
    /// Number of consecutive equal best-fitness values that ends the run.
    /// 0 disables the convergence check.
    pub convergence_threshold: usize,
    /// Per-offspring mutation probability.
    pub mutation_rate: f64,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Evaluate fitness across worker threads.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 50,
            convergence_threshold: 5,
            mutation_rate: 0.2,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the generation limit.
    pub fn with_max_generations(mut self, max_generations: usize) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Sets the convergence threshold (0 disables the check).
    pub fn with_convergence_threshold(mut self, convergence_threshold: usize) -> Self {
        self.convergence_threshold = convergence_threshold;
        self
    }

    /// Sets the per-offspring mutation probability (clamped to 0.0..=1.0).
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Best fitness was constant for the configured number of generations.
    Converged,
    /// The generation limit was reached without convergence.
    GenerationLimit,
}

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Best individual of the final population.
    pub best: I,
    /// Number of generations executed.
    pub generations: usize,
    /// How the run ended.
    pub termination: Termination,
    /// Best fitness recorded after each generation.
    pub history: Vec<I::Fitness>,
}

impl<I: Individual> GaResult<I> {
    /// Fitness of the best individual.
    pub fn best_fitness(&self) -> I::Fitness {
        self.best.fitness()
    }
}

/// Returns the `k` fittest individuals, fitness descending.
///
/// The sort is stable: ties keep their input order, so re-selecting an
/// already-selected prefix returns it unchanged.
pub fn select_best<I: Individual>(population: &[I], k: usize) -> Vec<I> {
    let mut sorted = population.to_vec();
    sorted.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
    sorted.truncate(k);
    sorted
}

/// Truncation-selection GA driver.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to termination and returns the best individual found.
    ///
    /// # Panics
    /// Panics if `config.population_size` is not a positive multiple of 4;
    /// callers are expected to reject such configurations up front (see
    /// [`crate::validation`]).
    pub fn run<P>(problem: &P, config: &GaConfig) -> GaResult<P::Individual>
    where
        P: GaProblem + Sync,
        P::Individual: Send,
    {
        assert!(
            config.population_size >= 4 && config.population_size % 4 == 0,
            "population size must be a positive multiple of 4, got {}",
            config.population_size
        );

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        tracing::info!(
            population_size = config.population_size,
            "generating initial population"
        );
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_all(problem, &mut population, config.parallel);

        let mut history: Vec<<P::Individual as Individual>::Fitness> = Vec::new();
        let mut generations = 0;
        let mut termination = Termination::GenerationLimit;

        for generation in 1..=config.max_generations {
            // Elitism: the top half survives unchanged
            let survivors = select_best(&population, config.population_size / 2);

            let mut offspring = Vec::with_capacity(survivors.len());
            for pair in survivors.chunks_exact(2) {
                offspring.extend(problem.crossover(&pair[0], &pair[1], &mut rng));
            }
            for child in offspring.iter_mut() {
                if rng.random_bool(config.mutation_rate) {
                    problem.mutate(child, &mut rng);
                }
            }
            evaluate_all(problem, &mut offspring, config.parallel);

            population = survivors;
            population.extend(offspring);
            generations = generation;

            let best = select_best(&population, 1)[0].fitness();
            history.push(best);
            tracing::debug!(generation, best_fitness = ?best, "generation complete");

            let threshold = config.convergence_threshold;
            if threshold > 0
                && history.len() >= threshold
                && history[history.len() - threshold..]
                    .iter()
                    .all(|f| *f == best)
            {
                termination = Termination::Converged;
                break;
            }
        }

        let best = select_best(&population, 1).remove(0);
        tracing::info!(
            generations,
            termination = ?termination,
            best_fitness = ?best.fitness(),
            "search finished"
        );

        GaResult {
            best,
            generations,
            termination,
            history,
        }
    }
}

/// Evaluates every individual and stores its fitness.
///
/// With `parallel` set, individuals are split into disjoint chunks and
/// evaluated under scoped threads; each fitness is written back in place,
/// so results are assembled deterministically by identity.
fn evaluate_all<P>(problem: &P, individuals: &mut [P::Individual], parallel: bool)
where
    P: GaProblem + Sync,
    P::Individual: Send,
{
    if !parallel || individuals.len() < 2 {
        for individual in individuals.iter_mut() {
            let fitness = problem.evaluate(individual);
            individual.set_fitness(fitness);
        }
        return;
    }

    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(individuals.len());
    let chunk_size = individuals.len().div_ceil(workers);

    thread::scope(|scope| {
        for chunk in individuals.chunks_mut(chunk_size) {
            scope.spawn(move || {
                for individual in chunk.iter_mut() {
                    let fitness = problem.evaluate(individual);
                    individual.set_fitness(fitness);
                }
            });
        }
    });
}
