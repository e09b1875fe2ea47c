//! Approximate graph coloring with a genetic algorithm.
//!
//! The crate is split into three layers:
//!
//! - [`graph`]: Dense, symmetric adjacency matrix with range-checked access.
//! - [`ga`]: A small generational GA engine built on trait-based abstractions
//!   ([`ga::GaProblem`], [`ga::Individual`]) and driven by [`ga::GaRunner`].
//! - [`coloring`]: The graph-coloring problem itself: the [`coloring::Candidate`]
//!   individual, its cost functions, and the [`coloring::color_graph`] entry point.
//!
//! [`io`] reads the whitespace-delimited edge-list format and renders results
//! for the command-line binary.
//!
//! # Example
//!
//! ```
//! use u_coloring::coloring::{color_graph, ColoringConfig};
//! use u_coloring::graph::Graph;
//!
//! let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
//! let config = ColoringConfig::default()
//!     .with_color_count(3)
//!     .with_population_size(5)
//!     .with_max_generations(10)
//!     .with_seed(42);
//!
//! let result = color_graph(&graph, &config).unwrap();
//! assert_eq!(result.cost, 2);
//! ```

pub mod coloring;
mod error;
pub mod ga;
pub mod graph;
pub mod io;

pub use error::{Error, Result};
