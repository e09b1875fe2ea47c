//! Cost functions for candidate colorings.
//!
//! # Greedy largest-degree-first
//!
//! Welsh & Powell (1967): visit vertices in descending degree order (ties by
//! vertex index) and give each the smallest color not used by an
//! already-colored neighbor. The number of colors it needs is a property of
//! the graph alone.
//!
//! # Conflicts
//!
//! Number of edges whose endpoints share a color under a given assignment.
//! Zero means the assignment is a proper coloring.

use crate::graph::Graph;
use std::cmp::Reverse;

/// Which cost a [`ColoringProblem`](super::ColoringProblem) minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostFunction {
    /// Colors used by the greedy largest-degree-first coloring of the graph.
    ///
    /// The candidate's own colors are not consulted, so every candidate of a
    /// graph scores the same and the search exerts no selection pressure.
    #[default]
    GreedyDegree,

    /// Conflicting edges under the candidate's own colors.
    Conflicts,
}

impl CostFunction {
    /// Evaluates `colors` against `graph`.
    pub fn evaluate(self, graph: &Graph, colors: &[usize]) -> usize {
        match self {
            CostFunction::GreedyDegree => greedy_color_count(graph),
            CostFunction::Conflicts => count_conflicts(graph, colors),
        }
    }
}

/// Computes the greedy largest-degree-first coloring of `graph`.
///
/// Returns one color per vertex. The result is always a proper coloring
/// (self-loops aside).
///
/// # Complexity
/// O(V²) on the dense adjacency matrix.
pub fn greedy_coloring(graph: &Graph) -> Vec<usize> {
    let n = graph.vertex_count();
    let degrees = graph.degrees();

    // Stable: equal degrees keep index order
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&v| Reverse(degrees[v]));

    let mut colors: Vec<Option<usize>> = vec![None; n];
    // A vertex has at most n - 1 other neighbors, so color n is never needed
    let mut used = vec![false; n + 1];

    for &vertex in &order {
        used.iter_mut().for_each(|u| *u = false);
        for neighbor in graph.neighbors_unchecked(vertex) {
            if let Some(c) = colors[neighbor] {
                used[c] = true;
            }
        }
        let color = used.iter().position(|&u| !u).unwrap_or(n);
        colors[vertex] = Some(color);
    }

    colors.into_iter().map(|c| c.unwrap_or(0)).collect()
}

/// Number of colors used by [`greedy_coloring`]: `max(color) + 1`, or 0 for a
/// graph without vertices.
pub fn greedy_color_count(graph: &Graph) -> usize {
    greedy_coloring(graph)
        .into_iter()
        .max()
        .map_or(0, |c| c + 1)
}

/// Counts edges `(u, v)`, `u <= v`, with `colors[u] == colors[v]`.
///
/// # Panics
/// Panics if `colors` is shorter than the vertex count.
pub fn count_conflicts(graph: &Graph, colors: &[usize]) -> usize {
    graph
        .edges()
        .filter(|&(u, v)| colors[u] == colors[v])
        .count()
}
