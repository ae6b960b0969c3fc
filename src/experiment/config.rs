//! Experiment configuration.

use super::types::StrategyTuple;
use crate::error::{KnapsackError, Result};
use crate::ga::{GaConfig, Selection, DEFAULT_TOURNAMENT_SIZE};
use crate::solution::{Crossover, Mutation, Repair};

/// Configuration of a strategy benchmark.
///
/// Every combination of the four strategy lists is run `repetitions` times
/// on one shared instance. Run parameters other than the strategies come
/// from [`ga`](Self::ga).
///
/// # Examples
///
/// ```
/// use u_knapsack::experiment::ExperimentConfig;
/// use u_knapsack::solution::Repair;
///
/// let config = ExperimentConfig::default()
///     .with_repetitions(5)
///     .with_repairs(vec![Repair::Greedy])
///     .with_seed(1);
/// assert_eq!(config.tuples().len(), 3 * 3 * 1 * 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Number of items in the generated instance.
    pub item_count: usize,

    /// Number of constraint dimensions in the generated instance.
    pub constraint_count: usize,

    /// Independent runs per strategy tuple.
    pub repetitions: usize,

    /// Log mean/std every this many generations (0 disables).
    pub report_interval: usize,

    pub mutations: Vec<Mutation>,
    pub crossovers: Vec<Crossover>,
    pub repairs: Vec<Repair>,
    pub selections: Vec<Selection>,

    /// Base run parameters; its strategy fields are overridden per tuple
    /// and its seed is ignored.
    pub ga: GaConfig,

    /// Master seed for the instance and every repetition.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Run repetitions on the rayon pool (requires the `parallel` feature;
    /// ignored otherwise). Results do not depend on this flag.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            item_count: 30,
            constraint_count: 10,
            repetitions: 100,
            report_interval: 50,
            mutations: Mutation::ALL.to_vec(),
            crossovers: Crossover::ALL.to_vec(),
            repairs: Repair::ALL.to_vec(),
            selections: Selection::all(DEFAULT_TOURNAMENT_SIZE).to_vec(),
            ga: GaConfig::default(),
            seed: None,
            parallel: true,
        }
    }
}

impl ExperimentConfig {
    pub fn with_item_count(mut self, n: usize) -> Self {
        self.item_count = n;
        self
    }

    pub fn with_constraint_count(mut self, n: usize) -> Self {
        self.constraint_count = n;
        self
    }

    pub fn with_repetitions(mut self, n: usize) -> Self {
        self.repetitions = n;
        self
    }

    pub fn with_report_interval(mut self, n: usize) -> Self {
        self.report_interval = n;
        self
    }

    pub fn with_mutations(mut self, mutations: Vec<Mutation>) -> Self {
        self.mutations = mutations;
        self
    }

    pub fn with_crossovers(mut self, crossovers: Vec<Crossover>) -> Self {
        self.crossovers = crossovers;
        self
    }

    pub fn with_repairs(mut self, repairs: Vec<Repair>) -> Self {
        self.repairs = repairs;
        self
    }

    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }

    /// Sets the base GA parameters.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// All strategy tuples, iterated mutation → selection → repair →
    /// crossover (outermost to innermost).
    pub fn tuples(&self) -> Vec<StrategyTuple> {
        let mut tuples = Vec::with_capacity(
            self.mutations.len() * self.selections.len() * self.repairs.len() * self.crossovers.len(),
        );
        for &mutation in &self.mutations {
            for &selection in &self.selections {
                for &repair in &self.repairs {
                    for &crossover in &self.crossovers {
                        tuples.push(StrategyTuple {
                            mutation,
                            crossover,
                            repair,
                            selection,
                        });
                    }
                }
            }
        }
        tuples
    }

    /// Validates the configuration, including every per-tuple GA config.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidConfig`] describing the first problem.
    pub fn validate(&self) -> Result<()> {
        if self.item_count == 0 {
            return Err(KnapsackError::InvalidConfig("item_count must be at least 1".into()));
        }
        if self.constraint_count == 0 {
            return Err(KnapsackError::InvalidConfig(
                "constraint_count must be at least 1".into(),
            ));
        }
        if self.repetitions == 0 {
            return Err(KnapsackError::InvalidConfig("repetitions must be at least 1".into()));
        }
        for (axis, len) in [
            ("mutations", self.mutations.len()),
            ("crossovers", self.crossovers.len()),
            ("repairs", self.repairs.len()),
            ("selections", self.selections.len()),
        ] {
            if len == 0 {
                return Err(KnapsackError::InvalidConfig(format!("{axis} must not be empty")));
            }
        }
        self.ga.validate()?;
        for sel in &self.selections {
            if *sel == Selection::Tournament(0) {
                return Err(KnapsackError::InvalidConfig(
                    "tournament size must be at least 1".into(),
                ));
            }
        }
        Ok(())
    }
}
