//! Mutation operators on knapsack solutions.
//!
//! Every operator perturbs the selection vector and then repairs, so the
//! solution is feasible again when the call returns.

use super::types::Solution;
use crate::error::{KnapsackError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Mutation operator applied to offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Flip exactly one uniformly chosen gene.
    #[default]
    BitFlip,

    /// Flip each gene independently with the configured gene flip rate.
    Flip,

    /// Flip one selected and one unselected gene.
    Swap,
}

impl Mutation {
    /// Every mutation operator, in benchmark order.
    pub const ALL: [Mutation; 3] = [Mutation::BitFlip, Mutation::Flip, Mutation::Swap];

    /// Applies this operator to `solution`.
    ///
    /// `gene_flip_rate` is only used by [`Mutation::Flip`].
    ///
    /// # Errors
    /// [`Mutation::Swap`] returns [`KnapsackError::NoSwapPair`] when every
    /// gene has the same value; the solution is left unchanged.
    pub fn apply<R: Rng>(self, solution: &mut Solution<'_>, gene_flip_rate: f64, rng: &mut R) -> Result<()> {
        match self {
            Mutation::BitFlip => solution.bit_flip_mutation(rng),
            Mutation::Flip => solution.flip_mutation(gene_flip_rate, rng),
            Mutation::Swap => return solution.swap_mutation(rng),
        }
        Ok(())
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::BitFlip => write!(f, "bitFlip"),
            Mutation::Flip => write!(f, "flipMutation"),
            Mutation::Swap => write!(f, "swapMutation"),
        }
    }
}

impl FromStr for Mutation {
    type Err = KnapsackError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bitflip" | "mutation" => Ok(Mutation::BitFlip),
            "flip" | "flipmutation" => Ok(Mutation::Flip),
            "swap" | "swapmutation" => Ok(Mutation::Swap),
            _ => Err(KnapsackError::UnknownStrategy {
                kind: "mutation",
                name: s.to_string(),
            }),
        }
    }
}

impl Solution<'_> {
    /// Flips one uniformly chosen gene, then repairs.
    pub fn bit_flip_mutation<R: Rng>(&mut self, rng: &mut R) {
        let index = rng.random_range(0..self.selection.len());
        self.flip(index);
        self.repair();
    }

    /// Flips every gene independently with probability `rate`, then repairs.
    pub fn flip_mutation<R: Rng>(&mut self, rate: f64, rng: &mut R) {
        for i in 0..self.selection.len() {
            if rng.random_range(0.0..1.0) < rate {
                self.flip(i);
            }
        }
        self.repair();
    }

    /// Picks a uniform first gene and a uniform second gene among those with
    /// the opposite bit, flips both, then repairs.
    ///
    /// # Errors
    /// Returns [`KnapsackError::NoSwapPair`] if all genes are equal
    /// (all-zero or all-one selection). The solution is not modified.
    pub fn swap_mutation<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let n = self.selection.len();
        let ones = self.selected_count();
        if ones == 0 || ones == n {
            return Err(KnapsackError::NoSwapPair);
        }

        let first = rng.random_range(0..n);
        let opposite = !self.selection[first];
        let candidates = if opposite { ones } else { n - ones };
        let pick = rng.random_range(0..candidates);
        let second = self
            .selection
            .iter()
            .enumerate()
            .filter(|(_, &bit)| bit == opposite)
            .nth(pick)
            .map(|(i, _)| i)
            .ok_or(KnapsackError::NoSwapPair)?;

        self.flip(first);
        self.flip(second);
        self.repair();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Instance, Item};
    use crate::random::create_rng;
    use crate::solution::Repair;

    /// Budget large enough that no selection ever needs repair.
    fn roomy(n: usize) -> Instance {
        let items = (0..n).map(|i| Item::new(i as f64 + 1.0, vec![1.0])).collect();
        Instance::new(items, vec![n as f64 * 2.0]).unwrap()
    }

    #[test]
    fn test_bit_flip_changes_one_gene() {
        let instance = roomy(10);
        let mut rng = create_rng(42);
        let original = Solution::from_selection(&instance, Repair::Greedy, vec![false; 10]).unwrap();
        let mut sol = original.clone();
        sol.bit_flip_mutation(&mut rng);
        let diff = sol
            .selection()
            .iter()
            .zip(original.selection())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(diff, 1);
        assert!((sol.utility() - sol.clone().calculate_utility()).abs() < 1e-12);
    }

    #[test]
    fn test_flip_rate_extremes() {
        let instance = roomy(8);
        let mut rng = create_rng(1);
        let mut sol = Solution::from_selection(&instance, Repair::Greedy, vec![false; 8]).unwrap();
        sol.flip_mutation(0.0, &mut rng);
        assert_eq!(sol.selected_count(), 0);
        sol.flip_mutation(1.0, &mut rng);
        assert_eq!(sol.selected_count(), 8);
    }

    #[test]
    fn test_swap_preserves_count_without_repair() {
        let instance = roomy(10);
        let mut rng = create_rng(3);
        let mut bits = vec![false; 10];
        bits[2] = true;
        bits[7] = true;
        let mut sol = Solution::from_selection(&instance, Repair::Greedy, bits.clone()).unwrap();
        for _ in 0..50 {
            let before = sol.selection().to_vec();
            sol.swap_mutation(&mut rng).unwrap();
            assert_eq!(sol.selected_count(), 2);
            let diff = sol.selection().iter().zip(&before).filter(|(a, b)| a != b).count();
            assert_eq!(diff, 2);
        }
    }

    #[test]
    fn test_swap_on_uniform_vector_fails() {
        let instance = roomy(5);
        let mut rng = create_rng(3);

        let mut zeros = Solution::empty(&instance, Repair::Greedy);
        assert_eq!(zeros.swap_mutation(&mut rng), Err(KnapsackError::NoSwapPair));
        assert_eq!(zeros.selected_count(), 0);

        let mut ones = Solution::from_selection(&instance, Repair::Greedy, vec![true; 5]).unwrap();
        assert_eq!(ones.swap_mutation(&mut rng), Err(KnapsackError::NoSwapPair));
        assert_eq!(ones.selected_count(), 5);

        assert_eq!(
            Mutation::Swap.apply(&mut ones, 0.1, &mut rng),
            Err(KnapsackError::NoSwapPair)
        );
    }

    #[test]
    fn test_mutations_keep_feasibility() {
        let mut rng = create_rng(9);
        let instance = Instance::random(30, 10, &mut rng).unwrap();
        for repair in Repair::ALL {
            let mut sol = Solution::random(&instance, repair, &mut rng);
            for step in 0..300 {
                let op = Mutation::ALL[step % 3];
                let _ = op.apply(&mut sol, 0.2, &mut rng);
                assert!(sol.is_feasible(), "{op} broke feasibility");
            }
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("mutation".parse::<Mutation>().unwrap(), Mutation::BitFlip);
        assert_eq!("flipMutation".parse::<Mutation>().unwrap(), Mutation::Flip);
        assert_eq!("swapMutation".parse::<Mutation>().unwrap(), Mutation::Swap);
        for m in Mutation::ALL {
            assert_eq!(m.to_string().parse::<Mutation>().unwrap(), m);
        }
        assert!("scramble".parse::<Mutation>().is_err());
    }
}
