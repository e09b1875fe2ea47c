//! Undirected graph stored as a dense adjacency matrix.
//!
//! [`Graph`] is built once (via [`Graph::new`] + [`Graph::add_edge`] or
//! [`Graph::from_edges`]) and then shared read-only with the evolutionary
//! loop. Every public accessor that takes a vertex index checks it against
//! the vertex count and reports [`Error::OutOfRange`] instead of panicking.

use crate::error::{Error, Result};

/// Undirected graph over vertices `0..vertex_count`.
///
/// The adjacency relation is kept symmetric: adding `(u, v)` also adds
/// `(v, u)`. Self-loops are stored as given and count once toward the
/// vertex's degree.
///
/// # Examples
///
/// ```
/// use u_coloring::graph::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1).unwrap();
/// assert!(graph.is_adjacent(1, 0).unwrap());
/// assert!(!graph.is_adjacent(1, 2).unwrap());
/// assert!(graph.add_edge(0, 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GraphRepr"))]
pub struct Graph {
    vertex_count: usize,
    /// Row-major `vertex_count × vertex_count` matrix.
    adjacency: Vec<bool>,
}

/// Largest vertex count accepted by [`Graph::try_new`].
///
/// The matrix holds `vertex_count²` cells, so this caps it at 256 MiB.
pub const MAX_VERTICES: usize = 1 << 14;

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Panics
    /// Panics if `vertex_count²` overflows `usize` or cannot be allocated.
    /// Use [`Graph::try_new`] for untrusted sizes.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: vec![false; vertex_count * vertex_count],
        }
    }

    /// Creates a graph with `vertex_count` vertices and no edges, rejecting
    /// sizes whose matrix would be unreasonably large.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `vertex_count` exceeds
    /// [`MAX_VERTICES`] or the matrix cannot be allocated.
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        let cells = matrix_len(vertex_count)?;
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(cells).map_err(|e| {
            Error::InvalidInput(format!("cannot allocate graph of {vertex_count} vertices: {e}"))
        })?;
        adjacency.resize(cells, false);
        Ok(Self {
            vertex_count,
            adjacency,
        })
    }

    /// Creates a graph from a list of 0-indexed edges.
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if `vertex_count` exceeds [`MAX_VERTICES`]
    /// - [`Error::OutOfRange`] for the first endpoint outside `0..vertex_count`
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::try_new(vertex_count)?;
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Creates the complete graph `K_n`.
    pub fn complete(vertex_count: usize) -> Self {
        let mut graph = Self::new(vertex_count);
        for u in 0..vertex_count {
            for v in (u + 1)..vertex_count {
                graph.set(u, v);
            }
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Adds the undirected edge `{u, v}`. Adding an existing edge is a no-op.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if either endpoint is not a vertex.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check(u)?;
        self.check(v)?;
        self.set(u, v);
        Ok(())
    }

    /// Returns whether `u` and `v` are adjacent.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if either endpoint is not a vertex.
    pub fn is_adjacent(&self, u: usize, v: usize) -> Result<bool> {
        self.check(u)?;
        self.check(v)?;
        Ok(self.adjacent(u, v))
    }

    /// Number of neighbors of `v`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `v` is not a vertex.
    pub fn degree(&self, v: usize) -> Result<usize> {
        self.check(v)?;
        Ok(self.row(v).iter().filter(|&&a| a).count())
    }

    /// Degrees of all vertices, indexed by vertex.
    pub fn degrees(&self) -> Vec<usize> {
        (0..self.vertex_count)
            .map(|v| self.row(v).iter().filter(|&&a| a).count())
            .collect()
    }

    /// Iterates over the neighbors of `v` in ascending order.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `v` is not a vertex.
    pub fn neighbors(&self, v: usize) -> Result<impl Iterator<Item = usize> + '_> {
        self.check(v)?;
        Ok(self.neighbors_unchecked(v))
    }

    /// Iterates over every undirected edge once, as `(u, v)` with `u <= v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertex_count).flat_map(move |u| {
            (u..self.vertex_count)
                .filter(move |&v| self.adjacent(u, v))
                .map(move |v| (u, v))
        })
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub(crate) fn adjacent(&self, u: usize, v: usize) -> bool {
        self.adjacency[u * self.vertex_count + v]
    }

    pub(crate) fn neighbors_unchecked(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(v)
            .iter()
            .enumerate()
            .filter_map(|(u, &a)| a.then_some(u))
    }

    fn row(&self, v: usize) -> &[bool] {
        let start = v * self.vertex_count;
        &self.adjacency[start..start + self.vertex_count]
    }

    fn set(&mut self, u: usize, v: usize) {
        let n = self.vertex_count;
        self.adjacency[u * n + v] = true;
        self.adjacency[v * n + u] = true;
    }

    fn check(&self, v: usize) -> Result<()> {
        if v < self.vertex_count {
            Ok(())
        } else {
            Err(Error::vertex(v, self.vertex_count))
        }
    }
}

fn matrix_len(vertex_count: usize) -> Result<usize> {
    if vertex_count > MAX_VERTICES {
        return Err(Error::InvalidInput(format!(
            "vertex count {vertex_count} exceeds the limit of {MAX_VERTICES}"
        )));
    }
    vertex_count
        .checked_mul(vertex_count)
        .ok_or_else(|| Error::InvalidInput(format!("vertex count {vertex_count} is too large")))
}

/// Wire form of [`Graph`]; checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GraphRepr {
    vertex_count: usize,
    adjacency: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<GraphRepr> for Graph {
    type Error = Error;

    fn try_from(repr: GraphRepr) -> Result<Self> {
        let n = repr.vertex_count;
        let cells = matrix_len(n)?;
        if repr.adjacency.len() != cells {
            return Err(Error::InvalidInput(format!(
                "adjacency has {} cells, expected {cells} for {n} vertices",
                repr.adjacency.len()
            )));
        }
        for u in 0..n {
            for v in (u + 1)..n {
                if repr.adjacency[u * n + v] != repr.adjacency[v * n + u] {
                    return Err(Error::InvalidInput(format!(
                        "adjacency is not symmetric at ({u}, {v})"
                    )));
                }
            }
        }
        Ok(Self {
            vertex_count: n,
            adjacency: repr.adjacency,
        })
    }
}
