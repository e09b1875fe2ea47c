//! Error types shared by every module of the crate.

use thiserror::Error;

/// Errors raised while building a graph, reading input, or configuring a run.
///
/// All of them are fatal for the run that produced them: a failed run yields
/// no coloring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input source is missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An index (vertex or color) lies outside its valid range.
    ///
    /// `valid` is the accepted range in Rust notation, e.g. `0..5` or `1..=4`.
    #[error("{what} {value} out of range {valid}")]
    OutOfRange {
        what: &'static str,
        value: usize,
        valid: String,
    },

    /// Run parameters that would make the search undefined or non-terminating.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    /// Out-of-range 0-indexed vertex; valid vertices are `0..bound`.
    pub fn vertex(value: usize, bound: usize) -> Self {
        Error::OutOfRange {
            what: "vertex",
            value,
            valid: format!("0..{bound}"),
        }
    }

    /// Out-of-range 1-indexed vertex id from an edge list; valid ids are
    /// `1..=vertex_count`.
    pub fn vertex_id(value: usize, vertex_count: usize) -> Self {
        Error::OutOfRange {
            what: "vertex id",
            value,
            valid: format!("1..={vertex_count}"),
        }
    }

    /// Out-of-range color; valid colors are `0..bound`.
    pub fn color(value: usize, bound: usize) -> Self {
        Error::OutOfRange {
            what: "color",
            value,
            valid: format!("0..{bound}"),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
