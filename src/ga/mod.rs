//! Genetic Algorithm engine.
//!
//! A small, domain-agnostic generational GA built on trait-based
//! abstractions. Problems plug in by implementing [`GaProblem`], which
//! specifies how to create, evaluate, crossover, and mutate individuals.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with a cached fitness
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, generation count, selection, seed
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best individual of the final population plus history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{Fitness, GaProblem, Individual};
