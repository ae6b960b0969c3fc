//! Item and instance definitions.

use crate::error::{KnapsackError, Result};

/// A selectable item: one utility and one cost per constraint dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    utility: f64,
    costs: Vec<f64>,
}

impl Item {
    /// Creates an item.
    pub fn new(utility: f64, costs: Vec<f64>) -> Self {
        Self { utility, costs }
    }

    /// Utility gained by selecting this item.
    pub fn utility(&self) -> f64 {
        self.utility
    }

    /// Cost in every constraint dimension.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Sum of costs across all dimensions.
    pub fn total_cost(&self) -> f64 {
        self.costs.iter().sum()
    }
}

/// A knapsack instance: the item catalog plus the budget vector.
///
/// Construction validates dimensions, so every solution built on an
/// `Instance` can index costs and budgets without further checks.
///
/// # Examples
///
/// ```
/// use u_knapsack::catalog::{Instance, Item};
///
/// let items = vec![Item::new(10.0, vec![3.0]), Item::new(20.0, vec![2.0])];
/// let instance = Instance::new(items, vec![5.0]).unwrap();
/// assert_eq!(instance.item_count(), 2);
/// assert_eq!(instance.constraint_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    items: Vec<Item>,
    budgets: Vec<f64>,
}

impl Instance {
    /// Builds an instance after validating items against budgets.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidInstance`] when there are no items or
    /// no constraint dimensions, when an item's cost vector length differs
    /// from the budget count, or when a budget, cost, or utility is not a
    /// finite number (budgets and costs must also be non-negative).
    pub fn new(items: Vec<Item>, budgets: Vec<f64>) -> Result<Self> {
        if items.is_empty() {
            return Err(KnapsackError::InvalidInstance(
                "at least one item is required".into(),
            ));
        }
        if budgets.is_empty() {
            return Err(KnapsackError::InvalidInstance(
                "at least one constraint dimension is required".into(),
            ));
        }
        if let Some(j) = budgets.iter().position(|b| !b.is_finite() || *b < 0.0) {
            return Err(KnapsackError::InvalidInstance(format!(
                "budget {j} must be finite and non-negative, got {}",
                budgets[j]
            )));
        }
        for (i, item) in items.iter().enumerate() {
            if item.costs.len() != budgets.len() {
                return Err(KnapsackError::InvalidInstance(format!(
                    "item {i} has {} costs, expected {}",
                    item.costs.len(),
                    budgets.len()
                )));
            }
            if !item.utility.is_finite() {
                return Err(KnapsackError::InvalidInstance(format!(
                    "item {i} utility must be finite"
                )));
            }
            if item.costs.iter().any(|c| !c.is_finite() || *c < 0.0) {
                return Err(KnapsackError::InvalidInstance(format!(
                    "item {i} costs must be finite and non-negative"
                )));
            }
        }
        Ok(Self { items, budgets })
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at `index`.
    ///
    /// # Panics
    /// Panics if `index >= item_count()`.
    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }

    /// Budget per constraint dimension.
    pub fn budgets(&self) -> &[f64] {
        &self.budgets
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.budgets.len()
    }
}
