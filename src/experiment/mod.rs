//! Strategy benchmark driver.
//!
//! Runs the GA for every combination of mutation × selection × repair ×
//! crossover, repeats each combination many times on one shared instance,
//! and aggregates the per-generation best utility into mean and standard
//! deviation series.
//!
//! # Key Types
//!
//! - [`ExperimentConfig`]: Instance size, repetitions, strategy axes
//! - [`ExperimentRunner`]: Executes the cross-product
//! - [`ExperimentResult`]: `[tuple][generation]` statistics for reporting
//!
//! # Logging
//!
//! Progress is emitted through `tracing` at `info` level: the instance
//! budgets, a header per tuple, mean/std every `report_interval`
//! generations, and the mean compute time per tuple.

mod config;
mod runner;
pub mod stats;
mod types;

pub use config::ExperimentConfig;
pub use runner::ExperimentRunner;
pub use types::{ExperimentResult, StrategyTuple, TupleReport};
