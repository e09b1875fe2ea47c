//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational process:
//! initialization → evaluation → ranking → selection → crossover → mutation
//! → replacement → repeat.

use super::config::GaConfig;
use super::types::{GaProblem, Individual};
use crate::error::Result;
use log::{info, trace};
use std::time::{SystemTime, UNIX_EPOCH};
use u_numflow::random::create_rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual of the final population.
    pub best: I,

    /// Fitness of `best` (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Seed the run's random generator was created from.
    pub seed: u64,

    /// Best fitness of each ranked population: one entry per generation,
    /// followed by the final population's best.
    pub fitness_history: Vec<I::Fitness>,
}

/// Executes the GA evolutionary loop.
///
/// Each generation is replaced wholesale by offspring: there is no elitism,
/// so the best fitness is not guaranteed to be monotone across generations.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// Returns the error from [`GaConfig::validate`] if the configuration is
    /// invalid. No individual is created in that case.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(clock_seed);
        let mut rng = create_rng(seed);
        info!(
            "starting GA: population={}, generations={}, selection={:?}, seed={}",
            config.population_size, config.max_generations, config.selection, seed
        );

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            evaluate_population(problem, &mut population);
            sort_population(&mut population);

            // Generation best is only reported, never carried over
            let gen_best = population[0].fitness();
            fitness_history.push(gen_best);
            trace!("generation {}: best fitness {:?}", gen + 1, gen_best);
            problem.on_generation(gen + 1, gen_best);

            let mut next_gen: Vec<P::Individual> = Vec::with_capacity(config.population_size);
            while next_gen.len() < config.population_size {
                let p1_idx = config.selection.select(&population, &mut rng);
                let p2_idx = config.selection.select(&population, &mut rng);

                let mut child =
                    problem.crossover(&population[p1_idx], &population[p2_idx], &mut rng);
                problem.mutate(&mut child, &mut rng);

                next_gen.push(child);
            }

            population = next_gen;
        }

        // 3. Rank the final population and return its head
        evaluate_population(problem, &mut population);
        sort_population(&mut population);
        let best = population.swap_remove(0);
        fitness_history.push(best.fitness());

        info!(
            "GA finished after {} generations: best fitness {:?}",
            config.max_generations,
            best.fitness()
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            seed,
            fitness_history,
        })
    }
}

/// Evaluate all individuals in the population.
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Stable sort by fitness, best (lowest) first.
fn sort_population<I: Individual>(population: &mut [I]) {
    population.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Seed derived from the wall clock, for runs without an explicit seed.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_else(|_| rand::random())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ga::{Fitness, Selection};
    use rand::Rng;
    use std::cell::Cell;

    // ---- OneMax problem: minimize the number of false bits ----

    #[derive(Clone, Debug, PartialEq)]
    struct BitString {
        bits: Vec<bool>,
        fitness: usize,
    }

    impl Individual for BitString {
        type Fitness = usize;
        fn fitness(&self) -> usize {
            self.fitness
        }
        fn set_fitness(&mut self, f: usize) {
            self.fitness = f;
        }
    }

    struct OneMaxProblem {
        n: usize,
        generations_seen: Cell<usize>,
    }

    impl OneMaxProblem {
        fn new(n: usize) -> Self {
            Self {
                n,
                generations_seen: Cell::new(0),
            }
        }
    }

    impl GaProblem for OneMaxProblem {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            let bits: Vec<bool> = (0..self.n).map(|_| rng.random_bool(0.5)).collect();
            BitString {
                bits,
                fitness: usize::worst(),
            }
        }

        fn evaluate(&self, ind: &BitString) -> usize {
            ind.bits.iter().filter(|&&b| !b).count()
        }

        fn crossover<R: Rng>(&self, p1: &BitString, p2: &BitString, rng: &mut R) -> BitString {
            let point = rng.random_range(0..self.n);
            let mut child = p1.clone();
            child.bits[point..].copy_from_slice(&p2.bits[point..]);
            child.fitness = usize::worst();
            child
        }

        fn mutate<R: Rng>(&self, ind: &mut BitString, rng: &mut R) {
            let idx = rng.random_range(0..self.n);
            ind.bits[idx] = !ind.bits[idx];
        }

        fn on_generation(&self, generation: usize, _best: usize) {
            self.generations_seen.set(generation);
        }
    }

    #[test]
    fn test_tournament_onemax_improves() {
        let problem = OneMaxProblem::new(20);
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_generations(200)
            .with_tournament_size(3)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert!(
            result.best_fitness <= 5,
            "expected at most 5 false bits for 20-bit OneMax, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_fitness_history_length() {
        let problem = OneMaxProblem::new(10);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(30)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.generations, 30);
        assert_eq!(result.fitness_history.len(), 31);
        assert_eq!(*result.fitness_history.last().unwrap(), result.best_fitness);
    }

    #[test]
    fn test_on_generation_called_each_generation() {
        let problem = OneMaxProblem::new(8);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(17)
            .with_seed(1);

        GaRunner::run(&problem, &config).unwrap();
        assert_eq!(problem.generations_seen.get(), 17);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = GaConfig::default()
            .with_population_size(15)
            .with_max_generations(25)
            .with_seed(99);

        let a = GaRunner::run(&OneMaxProblem::new(12), &config).unwrap();
        let b = GaRunner::run(&OneMaxProblem::new(12), &config).unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
        assert_eq!(a.seed, 99);
    }

    #[test]
    fn test_zero_generations_returns_initial_member() {
        let problem = OneMaxProblem::new(16);
        let config = GaConfig::default()
            .with_population_size(8)
            .with_max_generations(0)
            .with_seed(5);

        let result = GaRunner::run(&problem, &config).unwrap();

        // Rebuild the initial population from the same seed
        let mut rng = create_rng(5);
        let initial: Vec<BitString> = (0..8).map(|_| problem.create_individual(&mut rng)).collect();

        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
        assert!(initial.iter().any(|ind| ind.bits == result.best.bits));
        let best_initial = initial.iter().map(|ind| problem.evaluate(ind)).min().unwrap();
        assert_eq!(result.best_fitness, best_initial);
    }

    #[test]
    fn test_empty_population_rejected() {
        let problem = OneMaxProblem::new(4);
        let config = GaConfig::default().with_population_size(0);

        let err = GaRunner::run(&problem, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_single_individual_population() {
        let problem = OneMaxProblem::new(6);
        let config = GaConfig::default()
            .with_population_size(1)
            .with_max_generations(10)
            .with_selection(Selection::Uniform)
            .with_seed(3);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.best.bits.len(), 6);
    }

    // ---- Default crossover/mutate (no-op) ----

    #[derive(Clone, Debug)]
    struct Scalar {
        value: f64,
        fitness: f64,
    }

    impl Individual for Scalar {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fitness
        }
        fn set_fitness(&mut self, f: f64) {
            self.fitness = f;
        }
    }

    struct NoOpProblem;

    impl GaProblem for NoOpProblem {
        type Individual = Scalar;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Scalar {
            Scalar {
                value: rng.random_range(-10.0..10.0),
                fitness: f64::worst(),
            }
        }

        fn evaluate(&self, ind: &Scalar) -> f64 {
            ind.value.abs()
        }
        // Uses default crossover (clone) and mutate (no-op)
    }

    #[test]
    fn test_default_operators_keep_values() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(10)
            .with_seed(42);

        let result = GaRunner::run(&NoOpProblem, &config).unwrap();

        // Cloning parents can never beat the initial best
        assert_eq!(result.fitness_history.len(), 11);
        assert!(result.best_fitness >= result.fitness_history[0]);
    }
}
