//! Core trait definitions for the GA engine.
//!
//! The two central traits — [`Individual`] and [`GaProblem`] — define the
//! contract between the generic GA engine and a concrete problem such as
//! [`ColoringProblem`](crate::coloring::ColoringProblem).

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Lower fitness is considered better (minimization).
///
/// Built-in implementations exist for `usize` (integer costs such as color
/// or conflict counts) and `f64`.
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for freshly created, not yet evaluated individuals.
    fn worst() -> Self;
}

impl Fitness for usize {
    fn worst() -> Self {
        usize::MAX
    }
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The runner calls
/// [`GaProblem::evaluate`] to compute it, then stores it via
/// [`set_fitness`](Individual::set_fitness) so that sorting and selection
/// never re-evaluate.
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the cached fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Caches the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// Implementors plug their domain logic into the generic runner:
///
/// 1. **Initialization**: How to create random individuals
/// 2. **Evaluation**: How to compute fitness
/// 3. **Crossover**: How to recombine two parents into one child
/// 4. **Mutation**: How to perturb a child
///
/// All randomness comes from the `rng` the runner passes in, so a seeded run
/// is fully reproducible.
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Lower fitness values are considered better (minimization).
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one offspring by recombining two parents.
    ///
    /// The default implementation clones `parent1` (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called once per generation with the best fitness of the population
    /// that was just ranked.
    ///
    /// The default implementation is a no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
