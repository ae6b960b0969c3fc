//! Error types for the knapsack GA.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;

/// Errors raised by instance construction, configuration, and operators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KnapsackError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Items and budgets do not describe a valid instance.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// A strategy name did not match any known variant.
    #[error("unknown {kind} strategy: {name:?}")]
    UnknownStrategy {
        /// Which strategy axis was being parsed (selection, crossover, ...).
        kind: &'static str,
        /// The name that failed to parse.
        name: String,
    },

    /// Parent selection needs at least two individuals.
    #[error("population of size {size} cannot provide two distinct parents")]
    PopulationTooSmall {
        /// Size of the population that was offered.
        size: usize,
    },

    /// Swap mutation found no pair of genes with differing bits.
    #[error("swap mutation needs at least one selected and one unselected item")]
    NoSwapPair,
}
