//! Batch execution of all strategy tuples.

use super::config::ExperimentConfig;
use super::stats::{column_stats, mean};
use super::types::{ExperimentResult, StrategyTuple, TupleReport};
use crate::catalog::Instance;
use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use crate::random::{create_rng, derive_seed};
use std::time::Instant;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Stream id reserved for instance generation; tuples use their index.
const INSTANCE_STREAM: u64 = u64::MAX;

/// Outcome of one repetition.
#[derive(Debug, Clone)]
struct Repetition {
    history: Vec<f64>,
    best_utility: f64,
    time_ms: f64,
}

/// Runs every strategy tuple of an [`ExperimentConfig`].
///
/// Each repetition owns a private RNG seeded from the master seed, the tuple
/// index, and the repetition index, so results are reproducible and do not
/// depend on whether repetitions run in parallel.
///
/// # Usage
///
/// ```
/// use u_knapsack::experiment::{ExperimentConfig, ExperimentRunner};
/// use u_knapsack::ga::GaConfig;
/// use u_knapsack::solution::{Crossover, Mutation, Repair};
///
/// let config = ExperimentConfig::default()
///     .with_repetitions(3)
///     .with_mutations(vec![Mutation::BitFlip])
///     .with_crossovers(vec![Crossover::Uniform])
///     .with_repairs(vec![Repair::Greedy])
///     .with_ga(GaConfig::default().with_generations(10))
///     .with_seed(42);
/// let result = ExperimentRunner::run(&config).unwrap();
/// assert_eq!(result.tuple_count(), 4);
/// assert_eq!(result.mean_matrix()[0].len(), 10);
/// ```
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Generates an instance from the master seed and benchmarks it.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidConfig`](crate::error::KnapsackError::InvalidConfig)
    /// if the configuration is invalid. No partial result is returned.
    pub fn run(config: &ExperimentConfig) -> Result<ExperimentResult> {
        config.validate()?;
        let master = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(derive_seed(master, INSTANCE_STREAM, 0));
        let instance = Instance::random(config.item_count, config.constraint_count, &mut rng)?;
        Self::run_with_master(&instance, config, master)
    }

    /// Benchmarks all tuples on a caller-supplied instance.
    ///
    /// `config.item_count` and `config.constraint_count` are ignored.
    pub fn run_on(instance: &Instance, config: &ExperimentConfig) -> Result<ExperimentResult> {
        config.validate()?;
        let master = config.seed.unwrap_or_else(rand::random);
        Self::run_with_master(instance, config, master)
    }

    fn run_with_master(instance: &Instance, config: &ExperimentConfig, master: u64) -> Result<ExperimentResult> {
        info!(budgets = ?instance.budgets(), items = instance.item_count(), "benchmark instance");

        let tuples = config.tuples();
        let mut reports = Vec::with_capacity(tuples.len());
        for (index, tuple) in tuples.iter().enumerate() {
            reports.push(Self::run_tuple(instance, config, tuple, index as u64, master)?);
        }

        Ok(ExperimentResult {
            budgets: instance.budgets().to_vec(),
            generations: config.ga.generations,
            repetitions: config.repetitions,
            reports,
        })
    }

    fn run_tuple(
        instance: &Instance,
        config: &ExperimentConfig,
        tuple: &StrategyTuple,
        index: u64,
        master: u64,
    ) -> Result<TupleReport> {
        info!(tuple = index, "{tuple}");
        let ga = tuple.apply_to(&config.ga);
        let seeds: Vec<u64> = (0..config.repetitions as u64)
            .map(|rep| derive_seed(master, index, rep))
            .collect();

        let repetitions = run_repetitions(instance, &ga, &seeds, config.parallel)?;

        let histories: Vec<Vec<f64>> = repetitions.iter().map(|r| r.history.clone()).collect();
        let (mean_utility, std_utility) = column_stats(&histories);
        if config.report_interval > 0 {
            for gen in (0..mean_utility.len()).step_by(config.report_interval) {
                info!(
                    generation = gen,
                    mean = mean_utility[gen],
                    std = std_utility[gen],
                    "progress"
                );
            }
        }

        let run_times_ms: Vec<f64> = repetitions.iter().map(|r| r.time_ms).collect();
        let mean_time_ms = mean(&run_times_ms);
        let best_utility = repetitions
            .iter()
            .map(|r| r.best_utility)
            .fold(f64::NEG_INFINITY, f64::max);
        info!(mean_time_ms, "tuple finished");

        Ok(TupleReport {
            tuple: *tuple,
            mean_utility,
            std_utility,
            run_times_ms,
            mean_time_ms,
            best_utility,
        })
    }
}

fn run_repetition(instance: &Instance, ga: &GaConfig, seed: u64) -> Result<Repetition> {
    let start = Instant::now();
    let mut rng = create_rng(seed);
    let result = GaRunner::run_with_rng(instance, ga, &mut rng)?;
    let time_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(seed, best = result.best_utility, time_ms, "repetition finished");
    Ok(Repetition {
        history: result.utility_history,
        best_utility: result.best_utility,
        time_ms,
    })
}

#[cfg(feature = "parallel")]
fn run_repetitions(instance: &Instance, ga: &GaConfig, seeds: &[u64], parallel: bool) -> Result<Vec<Repetition>> {
    if parallel {
        seeds
            .par_iter()
            .map(|&seed| run_repetition(instance, ga, seed))
            .collect()
    } else {
        seeds
            .iter()
            .map(|&seed| run_repetition(instance, ga, seed))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_repetitions(instance: &Instance, ga: &GaConfig, seeds: &[u64], _parallel: bool) -> Result<Vec<Repetition>> {
    seeds
        .iter()
        .map(|&seed| run_repetition(instance, ga, seed))
        .collect()
}
