//! [`GaProblem`] implementation for graph coloring.

use super::candidate::{check_color_count, Candidate};
use super::cost::CostFunction;
use crate::error::{Error, Result};
use crate::ga::{GaProblem, Individual};
use crate::graph::Graph;
use log::debug;
use rand::Rng;

/// Graph-coloring problem over a borrowed [`Graph`].
///
/// Individuals are [`Candidate`]s with `color_count` labels; crossover is
/// single-point and every child gets exactly one recolored vertex.
#[derive(Debug, Clone)]
pub struct ColoringProblem<'a> {
    graph: &'a Graph,
    color_count: usize,
    cost_function: CostFunction,
}

impl<'a> ColoringProblem<'a> {
    /// Creates the problem.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if the graph has no vertices or
    /// `color_count < 2`.
    pub fn new(graph: &'a Graph, color_count: usize, cost_function: CostFunction) -> Result<Self> {
        if graph.is_empty() {
            return Err(Error::InvalidConfiguration(
                "graph must have at least one vertex".into(),
            ));
        }
        check_color_count(color_count)?;
        Ok(Self {
            graph,
            color_count,
            cost_function,
        })
    }

    /// The graph being colored.
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Number of available colors.
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    /// Cost function in use.
    pub fn cost_function(&self) -> CostFunction {
        self.cost_function
    }
}

impl GaProblem for ColoringProblem<'_> {
    type Individual = Candidate;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Candidate {
        Candidate::sample(self.graph.vertex_count(), self.color_count, rng)
    }

    fn evaluate(&self, individual: &Candidate) -> <Candidate as Individual>::Fitness {
        individual.evaluate(self.graph, self.cost_function)
    }

    fn crossover<R: Rng>(&self, parent1: &Candidate, parent2: &Candidate, rng: &mut R) -> Candidate {
        parent1.crossover(parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Candidate, rng: &mut R) {
        individual.mutate(rng);
    }

    fn on_generation(&self, generation: usize, best_fitness: usize) {
        debug!(
            "generation {generation}: best {:?} cost {best_fitness}",
            self.cost_function
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_numflow::random::create_rng;

    #[test]
    fn test_rejects_empty_graph() {
        let graph = Graph::new(0);
        let err = ColoringProblem::new(&graph, 3, CostFunction::GreedyDegree).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_single_color() {
        let graph = Graph::new(3);
        assert!(ColoringProblem::new(&graph, 1, CostFunction::Conflicts).is_err());
        assert!(ColoringProblem::new(&graph, 0, CostFunction::Conflicts).is_err());
    }

    #[test]
    fn test_accessors() {
        let graph = Graph::complete(5);
        let problem = ColoringProblem::new(&graph, 3, CostFunction::Conflicts).unwrap();
        assert_eq!(problem.graph().vertex_count(), 5);
        assert_eq!(problem.graph().edge_count(), 10);
        assert_eq!(problem.color_count(), 3);
        assert_eq!(problem.cost_function(), CostFunction::Conflicts);
    }

    #[test]
    fn test_individuals_match_graph() {
        let graph = Graph::complete(6);
        let problem = ColoringProblem::new(&graph, 3, CostFunction::Conflicts).unwrap();
        let mut rng = create_rng(42);

        let a = problem.create_individual(&mut rng);
        let b = problem.create_individual(&mut rng);
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.color_count(), 3);

        let mut child = problem.crossover(&a, &b, &mut rng);
        let before = child.colors().to_vec();
        problem.mutate(&mut child, &mut rng);
        let diff = before
            .iter()
            .zip(child.colors())
            .filter(|(x, y)| x != y)
            .count();
        assert_eq!(diff, 1);
    }

    #[test]
    fn test_evaluate_follows_cost_function() {
        let graph = Graph::complete(4);
        let candidate = Candidate::new(vec![0, 0, 1, 1], 2).unwrap();

        let greedy = ColoringProblem::new(&graph, 2, CostFunction::GreedyDegree).unwrap();
        let conflicts = ColoringProblem::new(&graph, 2, CostFunction::Conflicts).unwrap();

        assert_eq!(greedy.evaluate(&candidate), 4);
        assert_eq!(conflicts.evaluate(&candidate), 2);
    }
}
