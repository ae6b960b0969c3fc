//! Greedy feasibility repair.
//!
//! Both strategies share a two-phase structure:
//!
//! 1. **Drop**: while the solution is over budget, deselect items in
//!    ascending order of their ranking key, stopping as soon as every
//!    dimension fits.
//! 2. **Fill**: scan unselected items in descending key order and take any
//!    item that still fits (first-fit, single pass).
//!
//! A solution that is already feasible on entry is left untouched.

use super::types::Solution;
use crate::catalog::{Instance, Item};
use crate::error::KnapsackError;
use std::fmt;
use std::str::FromStr;

/// Repair heuristic used to restore feasibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Repair {
    /// Rank items by raw utility.
    #[default]
    Greedy,

    /// Rank items by `utility / sum(costs)`.
    ///
    /// Tends to pack more items when several constraints bind at once.
    /// Items with zero total cost rank first (ratio `+inf`).
    Weighted,
}

impl Repair {
    /// Every repair strategy, in benchmark order.
    pub const ALL: [Repair; 2] = [Repair::Greedy, Repair::Weighted];

    /// Ranking key of an item under this strategy. Higher is better.
    pub fn key(self, item: &Item) -> f64 {
        match self {
            Repair::Greedy => item.utility(),
            Repair::Weighted => {
                let cost = item.total_cost();
                if cost > 0.0 {
                    item.utility() / cost
                } else {
                    f64::INFINITY
                }
            }
        }
    }

    /// Item indices sorted by ascending key; ties keep index order.
    fn drop_order(self, instance: &Instance) -> Vec<usize> {
        let keys: Vec<f64> = instance.items().iter().map(|it| self.key(it)).collect();
        let mut order: Vec<usize> = (0..keys.len()).collect();
        order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
        order
    }

    /// Item indices sorted by descending key; ties keep index order.
    fn fill_order(self, instance: &Instance) -> Vec<usize> {
        let keys: Vec<f64> = instance.items().iter().map(|it| self.key(it)).collect();
        let mut order: Vec<usize> = (0..keys.len()).collect();
        order.sort_by(|&a, &b| keys[b].total_cmp(&keys[a]));
        order
    }
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repair::Greedy => write!(f, "greedy"),
            Repair::Weighted => write!(f, "weighted"),
        }
    }
}

impl FromStr for Repair {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" | "repair" | "greedy-utility" => Ok(Repair::Greedy),
            "weighted" | "repairweightedutility" | "weighted-utility" => Ok(Repair::Weighted),
            _ => Err(KnapsackError::UnknownStrategy {
                kind: "repair",
                name: s.to_string(),
            }),
        }
    }
}

impl Solution<'_> {
    /// Restores feasibility with this solution's repair strategy, then
    /// refreshes the cached utility and costs.
    ///
    /// Idempotent: a feasible solution is only re-evaluated, never changed.
    pub fn repair(&mut self) {
        self.refresh();
        if self.is_feasible() {
            return;
        }

        let instance = self.instance();
        let drop_order = self.repair_strategy().drop_order(instance);
        let fill_order = self.repair_strategy().fill_order(instance);

        self.drop_until_feasible(&drop_order);
        self.fill_while_feasible(&fill_order);
        self.refresh();

        // Incremental cost updates can drift from the recomputed sums.
        while !self.is_feasible() {
            self.drop_until_feasible(&drop_order);
            self.refresh();
        }
    }

    fn drop_until_feasible(&mut self, order: &[usize]) {
        let instance = self.instance();
        for &i in order {
            if !self.selection[i] {
                continue;
            }
            self.selection[i] = false;
            for (total, &c) in self.costs.iter_mut().zip(instance.item(i).costs()) {
                *total -= c;
            }
            if self.is_feasible() {
                return;
            }
        }
    }

    fn fill_while_feasible(&mut self, order: &[usize]) {
        let instance = self.instance();
        for &i in order {
            let item = instance.item(i);
            if self.selection[i] || !self.check_feasible(item.costs()) {
                continue;
            }
            self.selection[i] = true;
            for (total, &c) in self.costs.iter_mut().zip(item.costs()) {
                *total += c;
            }
        }
    }
}
