//! Problem model: an ordered item set plus a capacity.
//!
//! Item order is significant: it defines the stable indices `0..n-1` that
//! [`crate::select::solve_with_selection`] reports, and the prefix lengths
//! that identify DP subproblems. Instances are immutable once constructed;
//! every solver borrows them read-only.

use crate::error::InstanceError;

/// One item: a non-negative weight and a non-negative value.
///
/// Non-negativity is carried by the unsigned types. Callers holding signed
/// data should go through [`KnapsackInstance::from_signed_parts`], which
/// rejects negatives rather than reinterpreting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub weight: u64,
    pub value: u64,
}

impl Item {
    pub fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }
}

/// A 0/1 knapsack instance: ordered items and a capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackInstance {
    items: Vec<Item>,
    capacity: u64,
}

impl KnapsackInstance {
    pub fn new(items: Vec<Item>, capacity: u64) -> Self {
        Self { items, capacity }
    }

    /// Build an instance from parallel weight and value slices.
    ///
    /// The slices must have equal length; each position describes one item.
    pub fn from_parts(
        weights: &[u64],
        values: &[u64],
        capacity: u64,
    ) -> Result<Self, InstanceError> {
        if weights.len() != values.len() {
            return Err(InstanceError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        let items = weights
            .iter()
            .zip(values)
            .map(|(&weight, &value)| Item { weight, value })
            .collect();
        Ok(Self { items, capacity })
    }

    /// Build an instance from signed inputs, rejecting any negative weight,
    /// value, or capacity before any computation begins.
    pub fn from_signed_parts(
        weights: &[i64],
        values: &[i64],
        capacity: i64,
    ) -> Result<Self, InstanceError> {
        if weights.len() != values.len() {
            return Err(InstanceError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        if capacity < 0 {
            return Err(InstanceError::NegativeCapacity(capacity));
        }
        let mut items = Vec::with_capacity(weights.len());
        for (index, (&weight, &value)) in weights.iter().zip(values).enumerate() {
            if weight < 0 {
                return Err(InstanceError::NegativeWeight {
                    index,
                    value: weight,
                });
            }
            if value < 0 {
                return Err(InstanceError::NegativeValue { index, value });
            }
            items.push(Item {
                weight: weight as u64,
                value: value as u64,
            });
        }
        Ok(Self {
            items,
            capacity: capacity as u64,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items, i.e. the largest prefix length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }
}
