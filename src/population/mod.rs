//! Fixed-size populations of knapsack solutions.
//!
//! A [`Population`] owns its [`Solution`]s and shares one instance and one
//! repair strategy with all of them. The engine replaces a population
//! wholesale each generation.

use crate::catalog::Instance;
use crate::error::{KnapsackError, Result};
use crate::solution::{Repair, Solution};
use rand::Rng;

/// An ordered, non-empty collection of solutions over one instance.
#[derive(Debug, Clone)]
pub struct Population<'a> {
    solutions: Vec<Solution<'a>>,
    instance: &'a Instance,
    repair: Repair,
}

impl<'a> Population<'a> {
    /// Builds `size` independently randomized, repaired solutions.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidConfig`] if `size == 0`.
    pub fn random<R: Rng>(instance: &'a Instance, size: usize, repair: Repair, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(KnapsackError::InvalidConfig(
                "population size must be at least 1".into(),
            ));
        }
        let solutions = (0..size)
            .map(|_| Solution::random(instance, repair, rng))
            .collect();
        Ok(Self {
            solutions,
            instance,
            repair,
        })
    }

    /// Wraps existing solutions.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidConfig`] if `solutions` is empty, or if
    /// any solution belongs to another instance or uses another repair strategy.
    pub fn from_solutions(instance: &'a Instance, repair: Repair, solutions: Vec<Solution<'a>>) -> Result<Self> {
        if solutions.is_empty() {
            return Err(KnapsackError::InvalidConfig(
                "population size must be at least 1".into(),
            ));
        }
        if solutions
            .iter()
            .any(|s| !std::ptr::eq(s.instance(), instance) || s.repair_strategy() != repair)
        {
            return Err(KnapsackError::InvalidConfig(
                "all solutions must share the population's instance and repair strategy".into(),
            ));
        }
        Ok(Self {
            solutions,
            instance,
            repair,
        })
    }

    /// Builds the next generation over the same instance and repair strategy.
    pub(crate) fn succeed(&self, solutions: Vec<Solution<'a>>) -> Self {
        debug_assert!(!solutions.is_empty());
        Self {
            solutions,
            instance: self.instance,
            repair: self.repair,
        }
    }

    pub fn solutions(&self) -> &[Solution<'a>] {
        &self.solutions
    }

    pub fn get(&self, index: usize) -> Option<&Solution<'a>> {
        self.solutions.get(index)
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    pub fn repair_strategy(&self) -> Repair {
        self.repair
    }

    /// Index of the highest-utility solution. Ties go to the lowest index.
    pub fn best_index(&self) -> usize {
        let mut best = 0;
        for (i, s) in self.solutions.iter().enumerate().skip(1) {
            if s.utility() > self.solutions[best].utility() {
                best = i;
            }
        }
        best
    }

    /// Index of the lowest-utility solution. Ties go to the lowest index.
    pub fn worst_index(&self) -> usize {
        let mut worst = 0;
        for (i, s) in self.solutions.iter().enumerate().skip(1) {
            if s.utility() < self.solutions[worst].utility() {
                worst = i;
            }
        }
        worst
    }

    pub fn best(&self) -> &Solution<'a> {
        &self.solutions[self.best_index()]
    }

    pub fn worst(&self) -> &Solution<'a> {
        &self.solutions[self.worst_index()]
    }

    /// Indices ordered by descending utility; equal utilities keep index order.
    pub fn ranked_indices(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.solutions.len()).collect();
        order.sort_by(|&a, &b| {
            self.solutions[b]
                .utility()
                .total_cmp(&self.solutions[a].utility())
        });
        order
    }

    /// Mean utility across the population.
    pub fn mean_utility(&self) -> f64 {
        self.solutions.iter().map(|s| s.utility()).sum::<f64>() / self.solutions.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::random::create_rng;

    fn unit_instance() -> Instance {
        let items = vec![
            Item::new(5.0, vec![1.0]),
            Item::new(9.0, vec![1.0]),
            Item::new(9.0, vec![1.0]),
            Item::new(1.0, vec![1.0]),
        ];
        Instance::new(items, vec![10.0]).unwrap()
    }

    fn single(instance: &Instance, index: usize) -> Solution<'_> {
        let mut bits = vec![false; instance.item_count()];
        bits[index] = true;
        Solution::from_selection(instance, Repair::Greedy, bits).unwrap()
    }

    #[test]
    fn test_random_population_is_feasible() {
        let mut rng = create_rng(42);
        let instance = Instance::random(30, 10, &mut rng).unwrap();
        let pop = Population::random(&instance, 20, Repair::Greedy, &mut rng).unwrap();
        assert_eq!(pop.len(), 20);
        assert!(pop.solutions().iter().all(|s| s.is_feasible()));
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut rng = create_rng(42);
        let instance = unit_instance();
        assert!(Population::random(&instance, 0, Repair::Greedy, &mut rng).is_err());
        assert!(Population::from_solutions(&instance, Repair::Greedy, vec![]).is_err());
    }

    #[test]
    fn test_best_and_worst_first_encountered() {
        let instance = unit_instance();
        let sols = (0..4).map(|i| single(&instance, i)).collect();
        let pop = Population::from_solutions(&instance, Repair::Greedy, sols).unwrap();
        assert_eq!(pop.best_index(), 1);
        assert_eq!(pop.worst_index(), 3);
        assert!((pop.best().utility() - 9.0).abs() < 1e-12);
        assert!((pop.worst().utility() - 1.0).abs() < 1e-12);
        assert_eq!(pop.ranked_indices(), vec![1, 2, 0, 3]);
        assert!((pop.mean_utility() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_foreign_solution_rejected() {
        let instance = unit_instance();
        let other = unit_instance();
        let sols = vec![single(&instance, 0), single(&other, 1)];
        assert!(Population::from_solutions(&instance, Repair::Greedy, sols).is_err());

        let weighted = Solution::empty(&instance, Repair::Weighted);
        assert!(Population::from_solutions(&instance, Repair::Greedy, vec![weighted]).is_err());
    }
}
