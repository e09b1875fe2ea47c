//! Run parameters for [`color_graph`](super::color_graph).

use super::cost::CostFunction;
use crate::ga::{GaConfig, Selection};
use crate::graph::Graph;

/// Configuration of a coloring run.
///
/// Wraps the GA parameters with the coloring-specific ones. Every field has
/// a `with_*` builder.
///
/// # Defaults
///
/// ```
/// use u_coloring::coloring::{ColoringConfig, CostFunction};
///
/// let config = ColoringConfig::default();
/// assert_eq!(config.color_count, None);
/// assert_eq!(config.cost_function, CostFunction::GreedyDegree);
/// assert_eq!(config.ga.population_size, 25);
/// assert_eq!(config.ga.max_generations, 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColoringConfig {
    /// Number of color labels available to candidates.
    ///
    /// `None` uses one color per vertex (at least 2), which always admits a
    /// proper coloring.
    pub color_count: Option<usize>,

    /// Cost minimized by the search.
    pub cost_function: CostFunction,

    /// Evolutionary loop parameters.
    pub ga: GaConfig,
}

impl ColoringConfig {
    /// Sets the number of available colors.
    pub fn with_color_count(mut self, k: usize) -> Self {
        self.color_count = Some(k);
        self
    }

    /// Sets the cost function.
    pub fn with_cost_function(mut self, cost_function: CostFunction) -> Self {
        self.cost_function = cost_function;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.ga = self.ga.with_population_size(n);
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.ga = self.ga.with_max_generations(n);
        self
    }

    /// Sets the parent selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.ga = self.ga.with_selection(selection);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.ga = self.ga.with_seed(seed);
        self
    }

    /// Color count to use for `graph`: the configured value, or the vertex
    /// count (at least 2) when unset.
    pub fn resolve_color_count(&self, graph: &Graph) -> usize {
        self.color_count.unwrap_or_else(|| graph.vertex_count().max(2))
    }
}
