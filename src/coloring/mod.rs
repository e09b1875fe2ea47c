//! Graph coloring by genetic search.
//!
//! - [`Candidate`] — one color per vertex; crossover and mutation operators
//! - [`CostFunction`] — greedy largest-degree-first count or conflict count
//! - [`ColoringProblem`] — [`GaProblem`](crate::ga::GaProblem) implementation
//! - [`color_graph`] — runs the search and reports the best final candidate
//!
//! # Cost functions
//!
//! The default, [`CostFunction::GreedyDegree`], scores every candidate with
//! the color count of a greedy coloring of the graph. It does not read the
//! candidate, so all individuals tie and the reported cost is fixed by the
//! graph. [`CostFunction::Conflicts`] scores the candidate's own colors and
//! is the one to pair with [`Selection::Tournament`](crate::ga::Selection)
//! when a proper coloring is the goal.

mod candidate;
mod config;
pub mod cost;
mod problem;

pub use candidate::Candidate;
pub use config::ColoringConfig;
pub use cost::CostFunction;
pub use problem::ColoringProblem;

use crate::error::Result;
use crate::ga::GaRunner;
use crate::graph::Graph;
use log::info;

/// Outcome of [`color_graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringResult {
    /// Best candidate of the final population.
    pub best: Candidate,

    /// Cost of `best` under the configured cost function.
    pub cost: usize,

    /// Conflicting edges under `best`'s colors, whatever the cost function.
    pub conflicts: usize,

    /// Generations executed.
    pub generations: usize,

    /// Seed the run was created from.
    pub seed: u64,

    /// Best cost of each generation, then of the final population.
    pub cost_history: Vec<usize>,
}

impl ColoringResult {
    /// Returns `true` if no edge joins two vertices of the same color.
    pub fn is_proper(&self) -> bool {
        self.conflicts == 0
    }
}

/// Colors `graph` with a generational GA.
///
/// # Errors
/// Returns [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
/// if the graph has no vertices, the resolved color count is below 2, or the
/// GA parameters are invalid.
///
/// # Examples
///
/// ```
/// use u_coloring::coloring::{color_graph, ColoringConfig, CostFunction};
/// use u_coloring::ga::Selection;
/// use u_coloring::graph::Graph;
///
/// let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let config = ColoringConfig::default()
///     .with_color_count(2)
///     .with_cost_function(CostFunction::Conflicts)
///     .with_selection(Selection::Tournament(3))
///     .with_seed(42);
///
/// let result = color_graph(&graph, &config).unwrap();
/// assert_eq!(result.best.vertex_count(), 4);
/// assert_eq!(result.cost, result.conflicts);
/// ```
pub fn color_graph(graph: &Graph, config: &ColoringConfig) -> Result<ColoringResult> {
    let color_count = config.resolve_color_count(graph);
    let problem = ColoringProblem::new(graph, color_count, config.cost_function)?;

    info!(
        "coloring graph: {} vertices, {} edges, {} colors, cost {:?}",
        problem.graph().vertex_count(),
        problem.graph().edge_count(),
        problem.color_count(),
        problem.cost_function()
    );

    let result = GaRunner::run(&problem, &config.ga)?;
    let conflicts = result.best.conflicts(graph);

    info!(
        "best coloring: cost {}, {} conflicts, {} colors used",
        result.best_fitness,
        conflicts,
        result.best.colors_used()
    );

    Ok(ColoringResult {
        cost: result.best_fitness,
        conflicts,
        generations: result.generations,
        seed: result.seed,
        cost_history: result.fitness_history,
        best: result.best,
    })
}
