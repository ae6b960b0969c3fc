//! Crossover operators producing one child from two parents.
//!
//! Parents are borrowed immutably; the child is a fresh, repaired
//! [`Solution`] that inherits the father's repair strategy.

use super::types::Solution;
use crate::error::KnapsackError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Crossover operator used during reproduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Each gene comes from either parent with probability 0.5.
    #[default]
    Uniform,

    /// One random cut point; a coin flip decides which parent gives the head.
    OnePoint,

    /// Genes are visited in a random permutation; even positions take the
    /// father's bit and odd positions the mother's.
    Shuffle,
}

impl Crossover {
    /// Every crossover operator, in benchmark order.
    pub const ALL: [Crossover; 3] = [Crossover::Uniform, Crossover::OnePoint, Crossover::Shuffle];

    /// Produces one repaired child from `father` and `mother`.
    pub fn apply<'a, R: Rng>(self, father: &Solution<'a>, mother: &Solution<'a>, rng: &mut R) -> Solution<'a> {
        match self {
            Crossover::Uniform => uniform_crossover(father, mother, rng),
            Crossover::OnePoint => one_point_crossover(father, mother, rng),
            Crossover::Shuffle => shuffle_crossover(father, mother, rng),
        }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crossover::Uniform => write!(f, "uniform"),
            Crossover::OnePoint => write!(f, "onePoint"),
            Crossover::Shuffle => write!(f, "shuffle"),
        }
    }
}

impl FromStr for Crossover {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "crossover" => Ok(Crossover::Uniform),
            "onepoint" | "one-point" | "dividecrossover" => Ok(Crossover::OnePoint),
            "shuffle" | "shufflecrossover" => Ok(Crossover::Shuffle),
            _ => Err(KnapsackError::UnknownStrategy {
                kind: "crossover",
                name: s.to_string(),
            }),
        }
    }
}

/// Uniform crossover: each gene is taken from the father with probability 0.5.
///
/// # Complexity
/// O(n) plus repair
pub fn uniform_crossover<'a, R: Rng>(father: &Solution<'a>, mother: &Solution<'a>, rng: &mut R) -> Solution<'a> {
    let genes = father
        .selection()
        .iter()
        .zip(mother.selection())
        .map(|(&f, &m)| if rng.random_bool(0.5) { f } else { m })
        .collect();
    child(father, genes)
}

/// One-point crossover with a cut drawn uniformly from `[0, n)`.
///
/// With probability 0.5 the father supplies genes `[0, cut)` and the mother
/// `[cut, n)`; otherwise the roles are swapped.
pub fn one_point_crossover<'a, R: Rng>(father: &Solution<'a>, mother: &Solution<'a>, rng: &mut R) -> Solution<'a> {
    let n = father.selection().len();
    let cut = rng.random_range(0..n);
    let (head, tail) = if rng.random_bool(0.5) {
        (father, mother)
    } else {
        (mother, father)
    };
    let mut genes = Vec::with_capacity(n);
    genes.extend_from_slice(&head.selection()[..cut]);
    genes.extend_from_slice(&tail.selection()[cut..]);
    child(father, genes)
}

/// Shuffle crossover: a random permutation of gene indices decides the donor
/// by parity of position.
///
/// Exactly `ceil(n / 2)` genes come from the father.
pub fn shuffle_crossover<'a, R: Rng>(father: &Solution<'a>, mother: &Solution<'a>, rng: &mut R) -> Solution<'a> {
    let n = father.selection().len();
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);

    let mut genes = vec![false; n];
    for (pos, &gene) in perm.iter().enumerate() {
        genes[gene] = if pos % 2 == 0 {
            father.selection()[gene]
        } else {
            mother.selection()[gene]
        };
    }
    child(father, genes)
}

fn child<'a>(father: &Solution<'a>, genes: Vec<bool>) -> Solution<'a> {
    Solution::from_genes(father.instance(), father.repair_strategy(), genes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Instance, Item};
    use crate::random::create_rng;
    use crate::solution::Repair;

    fn roomy(n: usize) -> Instance {
        let items = (0..n).map(|i| Item::new(i as f64 + 1.0, vec![1.0])).collect();
        Instance::new(items, vec![n as f64 * 2.0]).unwrap()
    }

    fn parents(instance: &Instance) -> (Solution<'_>, Solution<'_>) {
        let n = instance.item_count();
        let father = Solution::from_selection(instance, Repair::Greedy, vec![true; n]).unwrap();
        let mother = Solution::from_selection(instance, Repair::Greedy, vec![false; n]).unwrap();
        (father, mother)
    }

    #[test]
    fn test_uniform_mixes_both_parents() {
        let instance = roomy(64);
        let (father, mother) = parents(&instance);
        let mut rng = create_rng(42);
        let child = uniform_crossover(&father, &mother, &mut rng);
        let ones = child.selected_count();
        assert!(ones > 10 && ones < 54, "expected a mix, got {ones} ones");
    }

    #[test]
    fn test_one_point_is_contiguous() {
        let instance = roomy(20);
        let (father, mother) = parents(&instance);
        let mut rng = create_rng(7);
        for _ in 0..100 {
            let child = one_point_crossover(&father, &mother, &mut rng);
            let bits = child.selection();
            let changes = bits.windows(2).filter(|w| w[0] != w[1]).count();
            assert!(changes <= 1, "one-point child has {changes} segment changes: {bits:?}");
        }
    }

    #[test]
    fn test_shuffle_takes_half_from_each() {
        for n in [1usize, 2, 7, 20] {
            let instance = roomy(n);
            let (father, mother) = parents(&instance);
            let mut rng = create_rng(n as u64);
            let child = shuffle_crossover(&father, &mother, &mut rng);
            assert_eq!(child.selected_count(), n.div_ceil(2));
        }
    }

    #[test]
    fn test_parents_unchanged() {
        let mut rng = create_rng(5);
        let instance = Instance::random(30, 10, &mut rng).unwrap();
        let father = Solution::random(&instance, Repair::Weighted, &mut rng);
        let mother = Solution::random(&instance, Repair::Weighted, &mut rng);
        let (f_bits, m_bits) = (father.selection().to_vec(), mother.selection().to_vec());

        for op in Crossover::ALL {
            for _ in 0..20 {
                let child = op.apply(&father, &mother, &mut rng);
                assert!(child.is_feasible());
                assert_eq!(child.repair_strategy(), Repair::Weighted);
            }
        }
        assert_eq!(father.selection(), f_bits.as_slice());
        assert_eq!(mother.selection(), m_bits.as_slice());
    }

    #[test]
    fn test_identical_parents_give_same_child() {
        let instance = roomy(12);
        let mut bits = vec![false; 12];
        bits[3] = true;
        bits[9] = true;
        let p = Solution::from_selection(&instance, Repair::Greedy, bits.clone()).unwrap();
        let mut rng = create_rng(0);
        for op in Crossover::ALL {
            assert_eq!(op.apply(&p, &p, &mut rng).selection(), bits.as_slice());
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("crossover".parse::<Crossover>().unwrap(), Crossover::Uniform);
        assert_eq!("divideCrossover".parse::<Crossover>().unwrap(), Crossover::OnePoint);
        assert_eq!("shuffleCrossover".parse::<Crossover>().unwrap(), Crossover::Shuffle);
        for c in Crossover::ALL {
            assert_eq!(c.to_string().parse::<Crossover>().unwrap(), c);
        }
        assert!("twoPoint".parse::<Crossover>().is_err());
    }
}
