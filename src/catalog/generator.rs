//! Random instance generation.

use super::types::{Instance, Item};
use crate::error::{KnapsackError, Result};
use rand::Rng;

/// Draws a budget vector for `item_count` items.
///
/// Each budget is uniform in `[n/2, n/2 + 2n)` where `n = item_count`.
pub fn random_budgets<R: Rng>(item_count: usize, constraint_count: usize, rng: &mut R) -> Vec<f64> {
    let n = item_count as f64;
    (0..constraint_count)
        .map(|_| rng.random::<f64>() * n * 2.0 + n / 2.0)
        .collect()
}

/// Generates `n` items against the given budgets.
///
/// - utility is uniform in `[0, n·10)`
/// - cost in dimension `j` is uniform in `[0, (budgets[j] - 1) / 4)`,
///   or 0 when that range is empty
pub fn generate_items<R: Rng>(n: usize, budgets: &[f64], rng: &mut R) -> Vec<Item> {
    let utility_scale = n as f64 * 10.0;
    (0..n)
        .map(|_| {
            let utility = rng.random::<f64>() * utility_scale;
            let costs = budgets
                .iter()
                .map(|&b| {
                    let upper = (b - 1.0) / 4.0;
                    if upper > 0.0 {
                        rng.random::<f64>() * upper
                    } else {
                        0.0
                    }
                })
                .collect();
            Item::new(utility, costs)
        })
        .collect()
}

impl Instance {
    /// Generates `n` random items for the given budgets.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidInstance`] if `n == 0` or the budgets
    /// are empty, negative, or non-finite.
    pub fn generate<R: Rng>(n: usize, budgets: Vec<f64>, rng: &mut R) -> Result<Self> {
        let items = generate_items(n, &budgets, rng);
        Self::new(items, budgets)
    }

    /// Draws budgets with [`random_budgets`] and then generates items.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidInstance`] if either count is zero.
    pub fn random<R: Rng>(item_count: usize, constraint_count: usize, rng: &mut R) -> Result<Self> {
        if constraint_count == 0 {
            return Err(KnapsackError::InvalidInstance(
                "at least one constraint dimension is required".into(),
            ));
        }
        let budgets = random_budgets(item_count, constraint_count, rng);
        Self::generate(item_count, budgets, rng)
    }
}
