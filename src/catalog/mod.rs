//! Item catalog for the multi-dimensional knapsack problem.
//!
//! An [`Instance`] bundles the immutable item list with the budget vector.
//! It is built once per experiment batch and shared read-only by every
//! solution, population, and run in that batch.
//!
//! # Key Types
//!
//! - [`Item`]: utility plus one cost per constraint dimension
//! - [`Instance`]: validated items + budgets
//!
//! # Generators
//!
//! - [`random_budgets`]: budget vector drawn for a given item count
//! - [`generate_items`]: items whose costs are scaled to the budgets

mod generator;
mod types;

pub use generator::{generate_items, random_budgets};
pub use types::{Instance, Item};
