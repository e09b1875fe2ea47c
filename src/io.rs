//! Edge-list input and plain-text output.
//!
//! # Input format
//!
//! Whitespace-delimited tokens: the vertex count `n`, then pairs of
//! 1-indexed vertex ids `a b`, one edge per pair, until end of input.
//!
//! ```text
//! 5
//! 1 2  1 3
//! 2 3
//! 3 4
//! 4 5
//! ```

use crate::coloring::Candidate;
use crate::error::{Error, Result};
use crate::graph::Graph;
use log::{debug, trace};
use std::fmt::Write as _;
use std::path::Path;

/// Parses an edge list into a [`Graph`] with 0-indexed vertices.
///
/// # Errors
/// - [`Error::InvalidInput`] if the vertex count is missing or above
///   [`MAX_VERTICES`](crate::graph::MAX_VERTICES), a token is not a
///   non-negative integer, or the last endpoint has no partner
/// - [`Error::OutOfRange`] if an endpoint is outside `1..=n`
///
/// # Examples
///
/// ```
/// use u_coloring::io::parse_edge_list;
///
/// let graph = parse_edge_list("3\n1 2\n2 3\n").unwrap();
/// assert_eq!(graph.vertex_count(), 3);
/// assert!(graph.is_adjacent(0, 1).unwrap());
/// ```
pub fn parse_edge_list(input: &str) -> Result<Graph> {
    let mut tokens = input.split_whitespace().enumerate();

    let (_, first) = tokens
        .next()
        .ok_or_else(|| Error::InvalidInput("missing vertex count".into()))?;
    let vertex_count = parse_token(first, 0)?;
    let mut graph = Graph::try_new(vertex_count)?;

    while let Some((pos, a)) = tokens.next() {
        let a = parse_token(a, pos)?;
        let (pos_b, b) = tokens.next().ok_or_else(|| {
            Error::InvalidInput(format!("edge starting at token {pos} has no second endpoint"))
        })?;
        let b = parse_token(b, pos_b)?;

        let u = to_index(a, vertex_count)?;
        let v = to_index(b, vertex_count)?;
        trace!("edge {a}-{b}");
        graph.add_edge(u, v)?;
    }

    debug!(
        "parsed graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads and parses an edge-list file.
///
/// # Errors
/// [`Error::InvalidInput`] if the file cannot be read, plus everything
/// [`parse_edge_list`] reports.
pub fn read_edge_list(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::InvalidInput(format!("cannot read {}: {e}", path.display())))?;
    parse_edge_list(&text)
}

/// Renders a coloring as one `vertex i: color c` line per vertex followed
/// by a `cost: C` line.
pub fn format_coloring(candidate: &Candidate, cost: usize) -> String {
    let mut out = String::new();
    for (vertex, color) in candidate.colors().iter().enumerate() {
        let _ = writeln!(out, "vertex {vertex}: color {color}");
    }
    let _ = writeln!(out, "cost: {cost}");
    out
}

fn parse_token(token: &str, pos: usize) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|_| Error::InvalidInput(format!("token {pos} ({token:?}) is not a vertex number")))
}

/// 1-indexed id → 0-indexed vertex.
fn to_index(id: usize, vertex_count: usize) -> Result<usize> {
    if id == 0 || id > vertex_count {
        return Err(Error::vertex_id(id, vertex_count));
    }
    Ok(id - 1)
}
