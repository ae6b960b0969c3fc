//! Genetic algorithm engine and strategy benchmark for the
//! multi-dimensional knapsack problem (MKP).
//!
//! Searches for high-utility feasible item selections under several
//! simultaneous budget constraints, and benchmarks every combination of
//! selection, crossover, mutation, and repair strategy across many
//! independent runs.
//!
//! - **Catalog**: Immutable items and budgets shared by a whole batch.
//! - **Solution**: Binary selection vector with greedy feasibility repair
//!   and mutation/crossover operators. Every public operation returns a
//!   feasible solution.
//! - **Population**: Fixed-size collection of solutions over one instance.
//! - **GA**: Generational loop with elitism and pluggable parent selection.
//! - **Experiment**: Cross-product benchmark with per-generation mean and
//!   standard deviation of the best utility.
//!
//! # Architecture
//!
//! All randomness flows through explicitly passed RNGs (see [`random`]);
//! there is no global state. Chart rendering and console formatting are
//! left to consumers of [`experiment::ExperimentResult`].

pub mod catalog;
pub mod error;
pub mod experiment;
pub mod ga;
pub mod population;
pub mod random;
pub mod solution;

pub use error::{KnapsackError, Result};
