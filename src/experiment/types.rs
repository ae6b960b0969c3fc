//! Strategy tuples and experiment results.

use crate::ga::{GaConfig, Selection};
use crate::solution::{Crossover, Mutation, Repair};
use std::fmt;

/// One combination of strategies under benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyTuple {
    pub mutation: Mutation,
    pub crossover: Crossover,
    pub repair: Repair,
    pub selection: Selection,
}

impl StrategyTuple {
    /// Returns `base` with this tuple's four strategies substituted.
    pub fn apply_to(&self, base: &GaConfig) -> GaConfig {
        GaConfig {
            mutation: self.mutation,
            crossover: self.crossover,
            repair: self.repair,
            selection: self.selection,
            ..base.clone()
        }
    }
}

impl fmt::Display for StrategyTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mutation={} crossover={} repair={} selection={}",
            self.mutation, self.crossover, self.repair, self.selection
        )
    }
}

/// Aggregated statistics for one strategy tuple.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TupleReport {
    pub tuple: StrategyTuple,

    /// Mean best utility per generation across repetitions.
    pub mean_utility: Vec<f64>,

    /// Population standard deviation of best utility per generation.
    pub std_utility: Vec<f64>,

    /// Wall-clock time of each repetition, in milliseconds.
    pub run_times_ms: Vec<f64>,

    /// Mean of `run_times_ms`.
    pub mean_time_ms: f64,

    /// Highest final utility reached by any repetition.
    pub best_utility: f64,
}

impl TupleReport {
    /// Mean best utility at the last generation.
    pub fn final_mean(&self) -> f64 {
        self.mean_utility.last().copied().unwrap_or(0.0)
    }
}

/// Result of a full benchmark over all strategy tuples.
///
/// Consumed by reporting and plotting code: one curve per tuple, indexed
/// `[tuple][generation]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentResult {
    /// Budget vector of the benchmarked instance.
    pub budgets: Vec<f64>,

    pub generations: usize,

    pub repetitions: usize,

    /// One report per tuple, in iteration order.
    pub reports: Vec<TupleReport>,
}

impl ExperimentResult {
    pub fn tuple_count(&self) -> usize {
        self.reports.len()
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    /// `[tuple][generation]` matrix of mean best utility.
    pub fn mean_matrix(&self) -> Vec<Vec<f64>> {
        self.reports.iter().map(|r| r.mean_utility.clone()).collect()
    }

    /// `[tuple][generation]` matrix of best-utility standard deviation.
    pub fn std_matrix(&self) -> Vec<Vec<f64>> {
        self.reports.iter().map(|r| r.std_utility.clone()).collect()
    }

    /// Report with the highest final mean utility. Ties go to the earlier tuple.
    pub fn best_report(&self) -> Option<&TupleReport> {
        let mut best: Option<&TupleReport> = None;
        for report in &self.reports {
            match best {
                Some(b) if report.final_mean() <= b.final_mean() => {}
                _ => best = Some(report),
            }
        }
        best
    }
}
