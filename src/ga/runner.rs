//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates one run:
//! initialization → (elitism → selection → crossover → mutation →
//! replacement) × generations.

use super::config::GaConfig;
use crate::catalog::Instance;
use crate::error::{KnapsackError, Result};
use crate::population::Population;
use crate::random::rng_from_option;
use crate::solution::Solution;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<'a> {
    /// Best solution of the final generation.
    pub best: Solution<'a>,

    /// Best utility (same as `best.utility()`).
    pub best_utility: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best utility of the initial population.
    pub initial_utility: f64,

    /// Best utility of each generation, one entry per generation.
    pub utility_history: Vec<f64>,

    /// Number of mutations that could not be applied (swap mutation on a
    /// selection with no distinct-bit pair).
    pub skipped_mutations: usize,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_knapsack::catalog::Instance;
/// use u_knapsack::ga::{GaConfig, GaRunner};
/// use u_knapsack::random::create_rng;
///
/// let instance = Instance::random(30, 5, &mut create_rng(1)).unwrap();
/// let config = GaConfig::default().with_generations(20).with_seed(42);
/// let result = GaRunner::run(&instance, &config).unwrap();
/// assert_eq!(result.utility_history.len(), 20);
/// assert!(result.best.is_feasible());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidConfig`] if the configuration is invalid.
    pub fn run<'a>(instance: &'a Instance, config: &GaConfig) -> Result<GaResult<'a>> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`, including the initial
    /// population. `config.seed` is ignored.
    pub fn run_with_rng<'a, R: Rng>(instance: &'a Instance, config: &GaConfig, rng: &mut R) -> Result<GaResult<'a>> {
        config.validate()?;
        let population = Population::random(instance, config.population_size, config.repair, rng)?;
        Self::evolve(population, config, rng)
    }

    /// Evolves an existing population for `config.generations` generations.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidConfig`] if the configuration is
    /// invalid or the population's size or repair strategy differ from it.
    pub fn evolve<'a, R: Rng>(mut population: Population<'a>, config: &GaConfig, rng: &mut R) -> Result<GaResult<'a>> {
        config.validate()?;
        if population.len() != config.population_size {
            return Err(KnapsackError::InvalidConfig(format!(
                "population has {} solutions, config expects {}",
                population.len(),
                config.population_size
            )));
        }
        if population.repair_strategy() != config.repair {
            return Err(KnapsackError::InvalidConfig(format!(
                "population repairs with {}, config expects {}",
                population.repair_strategy(),
                config.repair
            )));
        }

        let size = config.population_size;
        let elite_count = config.elite_count();
        let initial_utility = population.best().utility();
        let mut utility_history = Vec::with_capacity(config.generations);
        let mut skipped_mutations = 0usize;

        for gen in 0..config.generations {
            // Elite preservation
            let mut next_gen: Vec<Solution<'a>> = Vec::with_capacity(size);
            next_gen.extend(
                population.ranked_indices()[..elite_count]
                    .iter()
                    .map(|&i| population.solutions()[i].clone()),
            );

            // Generate offspring
            while next_gen.len() < size {
                let (father, mother) = config.selection.select_pair(&population, rng)?;
                let mut child = config.crossover.apply(
                    &population.solutions()[father],
                    &population.solutions()[mother],
                    rng,
                );

                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    if let Err(err) = config.mutation.apply(&mut child, config.gene_flip_rate, rng) {
                        trace!(generation = gen, %err, "mutation skipped");
                        skipped_mutations += 1;
                    }
                }

                next_gen.push(child);
            }

            population = population.succeed(next_gen);
            utility_history.push(population.best().utility());
        }

        let best = population.best().clone();
        debug!(
            best_utility = best.utility(),
            initial_utility,
            generations = config.generations,
            skipped_mutations,
            "ga run finished"
        );

        Ok(GaResult {
            best_utility: best.utility(),
            best,
            generations: config.generations,
            initial_utility,
            utility_history,
            skipped_mutations,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
