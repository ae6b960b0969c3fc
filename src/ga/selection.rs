//! Parent selection strategies.
//!
//! Each strategy draws a **pair** of distinct population indices. The second
//! draw excludes the first index directly, so no strategy ever loops waiting
//! for a different parent.
//!
//! All strategies assume **maximization** (higher utility = better).
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::error::{KnapsackError, Result};
use crate::population::Population;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Tournament size used when a name is parsed without an explicit size.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 4;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_knapsack::ga::Selection;
///
/// let sel: Selection = "tournament:5".parse().unwrap();
/// assert_eq!(sel, Selection::Tournament(5));
/// assert_eq!("rouletteWheelSelection".parse::<Selection>().unwrap(), Selection::Roulette);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Two uniform draws.
    Random,

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Probability of selection is proportional to utility.
    ///
    /// # Complexity
    /// O(n) per draw (linear scan)
    Roulette,

    /// Rank-based selection.
    ///
    /// Solutions are sorted by ascending utility and given ranks `1..=n`;
    /// selection probability is proportional to rank, which avoids the
    /// scaling problems of roulette wheel selection.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per pair (sort), O(n) per draw
    Rank,

    /// Tournament selection: sample `k` individuals with replacement, keep
    /// the best.
    ///
    /// Higher `k` = stronger selection pressure.
    ///
    /// # Complexity
    /// O(k) per draw
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(DEFAULT_TOURNAMENT_SIZE)
    }
}

impl Selection {
    /// Every selection strategy, in benchmark order.
    pub fn all(tournament_size: usize) -> [Selection; 4] {
        [
            Selection::Random,
            Selection::Roulette,
            Selection::Rank,
            Selection::Tournament(tournament_size),
        ]
    }

    /// Draws two distinct parent indices `(father, mother)`.
    ///
    /// # Errors
    /// Returns [`KnapsackError::PopulationTooSmall`] when the population has
    /// fewer than two solutions.
    pub fn select_pair<R: Rng>(&self, population: &Population<'_>, rng: &mut R) -> Result<(usize, usize)> {
        let n = population.len();
        if n < 2 {
            return Err(KnapsackError::PopulationTooSmall { size: n });
        }

        let utilities: Vec<f64> = population.solutions().iter().map(|s| s.utility()).collect();

        let pair = match self {
            Selection::Random => {
                let first = uniform(n, None, rng);
                (first, uniform(n, Some(first), rng))
            }
            Selection::Roulette => {
                let order: Vec<usize> = (0..n).collect();
                let weights: Vec<f64> = utilities.iter().map(|&u| u.max(0.0)).collect();
                let first = wheel(&order, &weights, None, rng);
                (first, wheel(&order, &weights, Some(first), rng))
            }
            Selection::Rank => {
                let mut order: Vec<usize> = (0..n).collect();
                order.sort_by(|&a, &b| utilities[a].total_cmp(&utilities[b]));
                let weights: Vec<f64> = (1..=n).map(|r| r as f64).collect();
                let first = wheel(&order, &weights, None, rng);
                (first, wheel(&order, &weights, Some(first), rng))
            }
            Selection::Tournament(k) => {
                let first = tournament(&utilities, *k, None, rng);
                (first, tournament(&utilities, *k, Some(first), rng))
            }
        };
        Ok(pair)
    }
}

/// Uniform index in `0..n`, skipping `exclude`.
fn uniform<R: Rng>(n: usize, exclude: Option<usize>, rng: &mut R) -> usize {
    match exclude {
        Some(e) => {
            let idx = rng.random_range(0..n - 1);
            if idx >= e {
                idx + 1
            } else {
                idx
            }
        }
        None => rng.random_range(0..n),
    }
}

/// Cumulative-scan draw over `order`, where `weights[pos]` belongs to
/// `order[pos]`.
///
/// Falls back to the last eligible entry when rounding leaves the threshold
/// uncovered, and to a uniform draw when the eligible mass is not positive.
fn wheel<R: Rng>(order: &[usize], weights: &[f64], exclude: Option<usize>, rng: &mut R) -> usize {
    let eligible = |pos: &usize| Some(order[*pos]) != exclude;

    let total: f64 = (0..order.len()).filter(eligible).map(|p| weights[p]).sum();
    if !(total > 0.0 && total.is_finite()) {
        return uniform(order.len(), exclude, rng);
    }

    let threshold = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last = order[0];
    for pos in (0..order.len()).filter(eligible) {
        cumulative += weights[pos];
        last = order[pos];
        if cumulative > threshold {
            return last;
        }
    }

    last // floating-point fallback
}

/// Best of `k` uniform draws (with replacement). Ties keep the earlier draw.
fn tournament<R: Rng>(utilities: &[f64], k: usize, exclude: Option<usize>, rng: &mut R) -> usize {
    let n = utilities.len();
    let mut best = uniform(n, exclude, rng);
    for _ in 1..k.max(1) {
        let idx = uniform(n, exclude, rng);
        if utilities[idx] > utilities[best] {
            best = idx;
        }
    }
    best
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Random => write!(f, "random"),
            Selection::Roulette => write!(f, "roulette"),
            Selection::Rank => write!(f, "rank"),
            Selection::Tournament(k) => write!(f, "tournament({k})"),
        }
    }
}

impl FromStr for Selection {
    type Err = KnapsackError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let unknown = || KnapsackError::UnknownStrategy {
            kind: "selection",
            name: s.to_string(),
        };
        let lower = s.trim().to_ascii_lowercase();
        let (name, arg) = match lower.split_once(|c: char| c == ':' || c == '(') {
            Some((name, rest)) => (name.trim(), Some(rest.trim_end_matches(')').trim())),
            None => (lower.as_str(), None),
        };

        match (name, arg) {
            ("random" | "selectparents", None) => Ok(Selection::Random),
            ("roulette" | "roulettewheelselection", None) => Ok(Selection::Roulette),
            ("rank" | "rankselection", None) => Ok(Selection::Rank),
            ("tournament" | "tournamentselection", None) => {
                Ok(Selection::Tournament(DEFAULT_TOURNAMENT_SIZE))
            }
            ("tournament" | "tournamentselection", Some(k)) => match k.parse::<usize>() {
                Ok(k) if k >= 1 => Ok(Selection::Tournament(k)),
                _ => Err(unknown()),
            },
            _ => Err(unknown()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Instance, Item};
    use crate::random::create_rng;
    use crate::solution::{Repair, Solution};

    /// One solution per item, each selecting only that item.
    fn population_with(instance: &Instance) -> Population<'_> {
        let n = instance.item_count();
        let sols = (0..n)
            .map(|i| {
                let mut bits = vec![false; n];
                bits[i] = true;
                Solution::from_selection(instance, Repair::Greedy, bits).unwrap()
            })
            .collect();
        Population::from_solutions(instance, Repair::Greedy, sols).unwrap()
    }

    fn instance_with(utilities: &[f64]) -> Instance {
        let items = utilities.iter().map(|&u| Item::new(u, vec![1.0])).collect();
        Instance::new(items, vec![1.0]).unwrap()
    }

    fn all_strategies() -> Vec<Selection> {
        Selection::all(3).to_vec()
    }

    #[test]
    fn test_pair_is_distinct() {
        let instance = instance_with(&[10.0, 5.0, 1.0, 8.0, 0.0]);
        let pop = population_with(&instance);
        let mut rng = create_rng(42);
        for sel in all_strategies() {
            for _ in 0..2000 {
                let (a, b) = sel.select_pair(&pop, &mut rng).unwrap();
                assert_ne!(a, b, "{sel} returned the same parent twice");
                assert!(a < pop.len() && b < pop.len());
            }
        }
    }

    #[test]
    fn test_two_solutions_always_both_chosen() {
        let instance = instance_with(&[100.0, 0.0]);
        let pop = population_with(&instance);
        let mut rng = create_rng(1);
        for sel in all_strategies() {
            for _ in 0..200 {
                let (a, b) = sel.select_pair(&pop, &mut rng).unwrap();
                assert_eq!(a + b, 1, "{sel} must pick both indices");
            }
        }
    }

    #[test]
    fn test_single_solution_fails() {
        let instance = instance_with(&[5.0]);
        let pop = population_with(&instance);
        let mut rng = create_rng(42);
        for sel in all_strategies() {
            assert_eq!(
                sel.select_pair(&pop, &mut rng),
                Err(KnapsackError::PopulationTooSmall { size: 1 })
            );
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let instance = instance_with(&[1.0, 50.0, 100.0, 20.0]);
        let pop = population_with(&instance);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let (a, _) = Selection::Roulette.select_pair(&pop, &mut rng).unwrap();
            counts[a] += 1;
        }
        assert!(
            counts[2] > counts[0] * 10,
            "best should dominate roulette: {counts:?}"
        );
    }

    #[test]
    fn test_roulette_all_zero_falls_back_to_uniform() {
        let instance = instance_with(&[0.0, 0.0, 0.0, 0.0]);
        let pop = population_with(&instance);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..8000 {
            let (a, b) = Selection::Roulette.select_pair(&pop, &mut rng).unwrap();
            assert_ne!(a, b);
            counts[a] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_zero_utility_never_first_pick() {
        let instance = instance_with(&[0.0, 10.0, 10.0]);
        let pop = population_with(&instance);
        let mut rng = create_rng(3);
        for _ in 0..2000 {
            let (a, _) = Selection::Roulette.select_pair(&pop, &mut rng).unwrap();
            assert_ne!(a, 0);
        }
    }

    #[test]
    fn test_rank_favors_best() {
        let instance = instance_with(&[100.0, 50.0, 1.0, 80.0]);
        let pop = population_with(&instance);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let (a, _) = Selection::Rank.select_pair(&pop, &mut rng).unwrap();
            counts[a] += 1;
        }
        // ranks: idx2=1, idx1=2, idx3=3, idx0=4
        assert!(counts[0] > counts[3]);
        assert!(counts[3] > counts[1]);
        assert!(counts[1] > counts[2]);
    }

    #[test]
    fn test_tournament_favors_best() {
        let instance = instance_with(&[10.0, 5.0, 1.0, 8.0]);
        let pop = population_with(&instance);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let (a, _) = Selection::Tournament(4).select_pair(&pop, &mut rng).unwrap();
            counts[a] += 1;
        }
        assert!(
            counts[0] > 6000,
            "expected best to be selected >60% of the time, got {}/{n}",
            counts[0]
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let instance = instance_with(&[10.0, 5.0, 1.0, 8.0]);
        let pop = population_with(&instance);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let (a, _) = Selection::Tournament(1).select_pair(&pop, &mut rng).unwrap();
            counts[a] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("selectParents".parse::<Selection>().unwrap(), Selection::Random);
        assert_eq!("rankSelection".parse::<Selection>().unwrap(), Selection::Rank);
        assert_eq!(
            "tournamentSelection".parse::<Selection>().unwrap(),
            Selection::Tournament(DEFAULT_TOURNAMENT_SIZE)
        );
        assert_eq!("tournament(7)".parse::<Selection>().unwrap(), Selection::Tournament(7));
        for sel in Selection::all(6) {
            assert_eq!(sel.to_string().parse::<Selection>().unwrap(), sel);
        }
        assert!("tournament:0".parse::<Selection>().is_err());
        assert!("roulette:3".parse::<Selection>().is_err());
        let err = "boltzmann".parse::<Selection>().unwrap_err();
        assert!(matches!(err, KnapsackError::UnknownStrategy { kind: "selection", .. }));
    }
}
