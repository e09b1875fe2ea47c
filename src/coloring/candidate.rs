//! Candidate coloring: the individual evolved by the GA.

use super::cost::{count_conflicts, greedy_color_count, CostFunction};
use crate::error::{Error, Result};
use crate::ga::{Fitness, Individual};
use crate::graph::Graph;
use rand::Rng;

/// One color per vertex, drawn from `0..color_count`.
///
/// `color_count` is at least 2 for every candidate, which keeps
/// [`mutate`](Candidate::mutate) well-defined. Colors are always in range.
///
/// The cached fitness is whatever the GA runner last stored; it is reset to
/// the worst value whenever the colors change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CandidateRepr"))]
pub struct Candidate {
    colors: Vec<usize>,
    color_count: usize,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    fitness: usize,
}

impl Candidate {
    /// Creates a candidate from explicit colors.
    ///
    /// # Errors
    /// - [`Error::InvalidConfiguration`] if `color_count < 2`
    /// - [`Error::OutOfRange`] if any color is `>= color_count`
    pub fn new(colors: Vec<usize>, color_count: usize) -> Result<Self> {
        check_color_count(color_count)?;
        if let Some(&c) = colors.iter().find(|&&c| c >= color_count) {
            return Err(Error::color(c, color_count));
        }
        Ok(Self {
            colors,
            color_count,
            fitness: usize::worst(),
        })
    }

    /// Creates a candidate whose colors are drawn independently and
    /// uniformly from `0..color_count`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `color_count < 2`.
    pub fn random<R: Rng>(vertex_count: usize, color_count: usize, rng: &mut R) -> Result<Self> {
        check_color_count(color_count)?;
        Ok(Self::sample(vertex_count, color_count, rng))
    }

    /// Uniform draw without the `color_count` check; callers validate first.
    pub(crate) fn sample<R: Rng>(vertex_count: usize, color_count: usize, rng: &mut R) -> Self {
        debug_assert!(color_count >= 2);
        let colors = (0..vertex_count)
            .map(|_| rng.random_range(0..color_count))
            .collect();
        Self {
            colors,
            color_count,
            fitness: usize::worst(),
        }
    }

    /// Color of each vertex.
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// Number of vertices colored.
    pub fn vertex_count(&self) -> usize {
        self.colors.len()
    }

    /// Number of available color labels.
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    /// Distinct colors actually used by this candidate.
    pub fn colors_used(&self) -> usize {
        let mut seen = vec![false; self.color_count];
        for &c in &self.colors {
            seen[c] = true;
        }
        seen.into_iter().filter(|&s| s).count()
    }

    /// Greedy largest-degree-first color count of `graph`.
    ///
    /// Does not look at this candidate's colors; see
    /// [`CostFunction::GreedyDegree`].
    pub fn cost(&self, graph: &Graph) -> usize {
        greedy_color_count(graph)
    }

    /// Number of edges of `graph` whose endpoints share a color here.
    ///
    /// # Panics
    /// Panics if the candidate has fewer entries than `graph` has vertices.
    pub fn conflicts(&self, graph: &Graph) -> usize {
        count_conflicts(graph, &self.colors)
    }

    /// Cost of this candidate under `cost_function`.
    pub fn evaluate(&self, graph: &Graph, cost_function: CostFunction) -> usize {
        cost_function.evaluate(graph, &self.colors)
    }

    /// Single-point crossover at a random cut `k` in `0..vertex_count`.
    ///
    /// See [`crossover_at`](Candidate::crossover_at).
    ///
    /// # Panics
    /// Panics if the parents differ in vertex or color count.
    pub fn crossover<R: Rng>(&self, other: &Candidate, rng: &mut R) -> Candidate {
        let n = self.vertex_count();
        let cut = if n == 0 { 0 } else { rng.random_range(0..n) };
        self.crossover_at(other, cut)
    }

    /// Single-point crossover: the child takes `self`'s colors before `cut`
    /// and `other`'s colors from `cut` on.
    ///
    /// `cut` is clamped to `vertex_count`; `cut = 0` copies `other`,
    /// `cut = vertex_count` copies `self`.
    ///
    /// # Panics
    /// Panics if the parents differ in vertex or color count.
    pub fn crossover_at(&self, other: &Candidate, cut: usize) -> Candidate {
        assert_eq!(
            self.vertex_count(),
            other.vertex_count(),
            "parents must have equal length"
        );
        assert_eq!(
            self.color_count, other.color_count,
            "parents must share a color count"
        );

        let cut = cut.min(self.vertex_count());
        let mut colors = Vec::with_capacity(self.vertex_count());
        colors.extend_from_slice(&self.colors[..cut]);
        colors.extend_from_slice(&other.colors[cut..]);

        Candidate {
            colors,
            color_count: self.color_count,
            fitness: usize::worst(),
        }
    }

    /// Recolors one uniformly chosen vertex with a different color, drawn
    /// uniformly from the remaining `color_count - 1` labels.
    ///
    /// Returns the recolored vertex, or `None` for a candidate without
    /// vertices.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.colors.is_empty() {
            return None;
        }
        let vertex = rng.random_range(0..self.colors.len());
        let current = self.colors[vertex];

        // Draw from the labels other than `current`
        let mut color = rng.random_range(0..self.color_count - 1);
        if color >= current {
            color += 1;
        }
        self.colors[vertex] = color;
        self.fitness = usize::worst();
        Some(vertex)
    }
}

impl Individual for Candidate {
    type Fitness = usize;

    fn fitness(&self) -> usize {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: usize) {
        self.fitness = fitness;
    }
}

/// Wire form of [`Candidate`]; goes through [`Candidate::new`] so the
/// color-range invariant holds after deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CandidateRepr {
    colors: Vec<usize>,
    color_count: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<CandidateRepr> for Candidate {
    type Error = Error;

    fn try_from(repr: CandidateRepr) -> Result<Self> {
        Candidate::new(repr.colors, repr.color_count)
    }
}

pub(crate) fn check_color_count(color_count: usize) -> Result<()> {
    if color_count < 2 {
        return Err(Error::InvalidConfiguration(format!(
            "color_count must be at least 2, got {color_count}"
        )));
    }
    Ok(())
}
