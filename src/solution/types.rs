//! The [`Solution`] representation.

use super::repair::Repair;
use crate::catalog::Instance;
use crate::error::{KnapsackError, Result};
use rand::Rng;

/// A feasible selection of items from a shared [`Instance`].
///
/// The solution borrows its instance; cloning copies only the selection
/// vector and the cached values. The repair strategy is carried per
/// solution and reused by every operator that needs to restore feasibility.
///
/// # Examples
///
/// ```
/// use u_knapsack::catalog::{Instance, Item};
/// use u_knapsack::solution::{Repair, Solution};
///
/// let items = vec![
///     Item::new(10.0, vec![3.0]),
///     Item::new(20.0, vec![2.0]),
///     Item::new(15.0, vec![4.0]),
/// ];
/// let instance = Instance::new(items, vec![5.0]).unwrap();
///
/// let sol = Solution::from_selection(&instance, Repair::Greedy, vec![true, true, true]).unwrap();
/// assert!(sol.is_feasible());
/// assert!(sol.costs()[0] <= 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Solution<'a> {
    instance: &'a Instance,
    repair: Repair,
    pub(super) selection: Vec<bool>,
    utility: f64,
    pub(super) costs: Vec<f64>,
}

impl<'a> Solution<'a> {
    /// Creates a solution that selects nothing. Always feasible.
    pub fn empty(instance: &'a Instance, repair: Repair) -> Self {
        Self {
            instance,
            repair,
            selection: vec![false; instance.item_count()],
            utility: 0.0,
            costs: vec![0.0; instance.constraint_count()],
        }
    }

    /// Creates a solution from an explicit selection vector and repairs it.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidInstance`] if the vector length does
    /// not match the item count.
    pub fn from_selection(instance: &'a Instance, repair: Repair, selection: Vec<bool>) -> Result<Self> {
        if selection.len() != instance.item_count() {
            return Err(KnapsackError::InvalidInstance(format!(
                "selection has {} genes, expected {}",
                selection.len(),
                instance.item_count()
            )));
        }
        Ok(Self::from_genes(instance, repair, selection))
    }

    /// Creates a solution where each item is selected with probability 0.5,
    /// then repairs it.
    pub fn random<R: Rng>(instance: &'a Instance, repair: Repair, rng: &mut R) -> Self {
        let selection = (0..instance.item_count())
            .map(|_| rng.random_bool(0.5))
            .collect();
        Self::from_genes(instance, repair, selection)
    }

    /// Builds and repairs a solution from a selection vector of the right length.
    pub(super) fn from_genes(instance: &'a Instance, repair: Repair, selection: Vec<bool>) -> Self {
        debug_assert_eq!(selection.len(), instance.item_count());
        let mut sol = Self {
            instance,
            repair,
            selection,
            utility: 0.0,
            costs: vec![0.0; instance.constraint_count()],
        };
        sol.repair();
        sol
    }

    /// Recomputes the cached utility from the selection vector.
    ///
    /// # Complexity
    /// O(n)
    pub fn calculate_utility(&mut self) -> f64 {
        self.utility = self
            .selection
            .iter()
            .zip(self.instance.items())
            .filter(|(&selected, _)| selected)
            .map(|(_, item)| item.utility())
            .sum();
        self.utility
    }

    /// Recomputes the cached per-dimension costs from the selection vector.
    ///
    /// # Complexity
    /// O(n·C)
    pub fn calculate_costs(&mut self) {
        self.costs.iter_mut().for_each(|c| *c = 0.0);
        for (&selected, item) in self.selection.iter().zip(self.instance.items()) {
            if selected {
                for (total, &c) in self.costs.iter_mut().zip(item.costs()) {
                    *total += c;
                }
            }
        }
    }

    pub(super) fn refresh(&mut self) {
        self.calculate_utility();
        self.calculate_costs();
    }

    /// Returns `true` if adding `delta` to the current costs stays within
    /// every budget.
    pub fn check_feasible(&self, delta: &[f64]) -> bool {
        self.costs
            .iter()
            .zip(delta)
            .zip(self.instance.budgets())
            .all(|((&c, &d), &b)| c + d <= b)
    }

    /// Returns `true` if the cached costs are within every budget.
    pub fn is_feasible(&self) -> bool {
        self.costs
            .iter()
            .zip(self.instance.budgets())
            .all(|(&c, &b)| c <= b)
    }

    /// Cached total utility of the selected items.
    pub fn utility(&self) -> f64 {
        self.utility
    }

    /// Cached total cost per constraint dimension.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Selection vector: `true` where the item is taken.
    pub fn selection(&self) -> &[bool] {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.iter().filter(|&&b| b).count()
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Repair strategy used by this solution's operators.
    pub fn repair_strategy(&self) -> Repair {
        self.repair
    }

    pub(super) fn flip(&mut self, index: usize) {
        self.selection[index] = !self.selection[index];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::random::create_rng;

    fn scenario_a() -> Instance {
        let items = vec![
            Item::new(10.0, vec![3.0]),
            Item::new(20.0, vec![2.0]),
            Item::new(15.0, vec![4.0]),
            Item::new(5.0, vec![1.0]),
        ];
        Instance::new(items, vec![5.0]).unwrap()
    }

    #[test]
    fn test_empty_is_feasible() {
        let instance = scenario_a();
        let sol = Solution::empty(&instance, Repair::Greedy);
        assert!(sol.is_feasible());
        assert_eq!(sol.utility(), 0.0);
        assert_eq!(sol.selected_count(), 0);
    }

    #[test]
    fn test_calculate_utility_matches_selection() {
        let instance = scenario_a();
        let sol = Solution::from_selection(&instance, Repair::Greedy, vec![true, true, false, false]).unwrap();
        let mut copy = sol.clone();
        let expected: f64 = sol
            .selection()
            .iter()
            .zip(instance.items())
            .filter(|(&s, _)| s)
            .map(|(_, item)| item.utility())
            .sum();
        assert!((copy.calculate_utility() - expected).abs() < 1e-12);
        assert!((sol.utility() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_check_feasible_boundary() {
        let instance = scenario_a();
        let sol = Solution::from_selection(&instance, Repair::Greedy, vec![false, true, false, false]).unwrap();
        // cost 2 + 3 = 5 equals the budget
        assert!(sol.check_feasible(&[3.0]));
        assert!(!sol.check_feasible(&[3.5]));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let instance = scenario_a();
        let err = Solution::from_selection(&instance, Repair::Greedy, vec![true]).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidInstance(_)));
    }

    #[test]
    fn test_random_solutions_are_feasible() {
        let mut rng = create_rng(42);
        let instance = Instance::random(30, 10, &mut rng).unwrap();
        for repair in Repair::ALL {
            for _ in 0..50 {
                let sol = Solution::random(&instance, repair, &mut rng);
                assert!(sol.is_feasible());
                assert_eq!(sol.repair_strategy(), repair);
            }
        }
    }
}
