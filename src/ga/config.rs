//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control one evolutionary run,
//! including the four strategy choices, which stay fixed for the run.

use super::selection::Selection;
use crate::error::{KnapsackError, Result};
use crate::solution::{Crossover, Mutation, Repair};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 500);
/// assert_eq!(config.elite_count(), 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::{GaConfig, Selection};
/// use u_knapsack::solution::{Crossover, Mutation, Repair};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_selection(Selection::Roulette)
///     .with_crossover(Crossover::Shuffle)
///     .with_mutation(Mutation::Swap)
///     .with_repair(Repair::Weighted)
///     .with_elite_ratio(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of solutions in the population. Must be at least 2.
    pub population_size: usize,

    /// Number of generations; a run always executes exactly this many.
    pub generations: usize,

    /// Fraction of the population copied unchanged to the next generation.
    ///
    /// The elite count is `floor(population_size × elite_ratio)`. With an
    /// elite count of at least one, the best utility never decreases.
    pub elite_ratio: f64,

    /// Probability of applying the mutation operator to a child (0.0–1.0).
    pub mutation_rate: f64,

    /// Per-gene flip probability used by [`Mutation::Flip`] (0.0–1.0).
    pub gene_flip_rate: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Crossover operator.
    pub crossover: Crossover,

    /// Mutation operator.
    pub mutation: Mutation,

    /// Repair heuristic carried by every solution of the run.
    pub repair: Repair,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 500,
            elite_ratio: 0.1,
            mutation_rate: 0.05,
            gene_flip_rate: 0.05,
            selection: Selection::default(),
            crossover: Crossover::default(),
            mutation: Mutation::default(),
            repair: Repair::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene flip rate of [`Mutation::Flip`].
    pub fn with_gene_flip_rate(mut self, rate: f64) -> Self {
        self.gene_flip_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for tournament selection of size `k`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation operator.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets the repair heuristic.
    pub fn with_repair(mut self, repair: Repair) -> Self {
        self.repair = repair;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites kept each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.generations == 0 {
            return Err(invalid("generations must be at least 1"));
        }
        for (name, rate) in [
            ("elite_ratio", self.elite_ratio),
            ("mutation_rate", self.mutation_rate),
            ("gene_flip_rate", self.gene_flip_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(KnapsackError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {rate}"
                )));
            }
        }
        if self.elite_count() >= self.population_size {
            return Err(invalid("elite_ratio too high: elites fill entire population"));
        }
        if self.selection == Selection::Tournament(0) {
            return Err(invalid("tournament size must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> KnapsackError {
    KnapsackError::InvalidConfig(msg.to_string())
}
