//! Genetic Algorithm engine for the multi-dimensional knapsack problem.
//!
//! The engine runs a generational loop with elitism over a
//! [`Population`](crate::population::Population) of feasible solutions.
//! All four strategies (selection, crossover, mutation, repair) are closed
//! enumerations resolved once in [`GaConfig`] and held fixed for the run.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters and strategy choices
//! - [`Selection`]: Parent-pair selection strategies
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final best solution with the per-generation trace
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::{Selection, DEFAULT_TOURNAMENT_SIZE};
