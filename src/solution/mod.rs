//! Binary knapsack solutions and their genetic operators.
//!
//! A [`Solution`] is a selection vector over the items of an
//! [`Instance`](crate::catalog::Instance), together with cached utility and
//! per-dimension costs. Every public operation (construction, mutation,
//! crossover, repair) leaves the solution **feasible**: for each constraint
//! dimension `j`, `costs[j] <= budgets[j]`.
//!
//! # Operators
//!
//! - [`Repair`]: greedy feasibility repair, ranked by raw utility or by
//!   utility-to-cost ratio
//! - [`Mutation`]: single bit flip, per-gene flip, or bit swap
//! - [`Crossover`]: uniform, one-point, or shuffle crossover
//!
//! # References
//!
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional
//!   Knapsack Problem", *J. Heuristics* 4, 63–86
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Eshelman, Caruana & Schaffer (1989), "Biases in the Crossover Landscape"

mod crossover;
mod mutation;
mod repair;
mod types;

pub use crossover::{one_point_crossover, shuffle_crossover, uniform_crossover, Crossover};
pub use mutation::Mutation;
pub use repair::Repair;
pub use types::Solution;
