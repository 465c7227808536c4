//! Exact 0/1 knapsack and subset-sum solving under interchangeable
//! dynamic-programming strategies.
//!
//! This crate defines the classic include/exclude knapsack recurrence once
//! and realizes it through several evaluation orders that must all agree on
//! results while differing by orders of magnitude in resource usage.
//!
//! ## Core idea
//! 1. Describe your instance as a [`KnapsackInstance`] (ordered items plus a
//!    capacity).
//! 2. Pick a strategy: naive recursion, memoized top-down, tabulated
//!    bottom-up, or a space-compressed iterative fill.
//! 3. Read back a value, or a full [`Selection`] of item indices when the
//!    retained table permits reconstruction.
//!
//! Every strategy evaluates the same transition from [`recurrence`];
//! strategies differ only in evaluation order and retained state, which is
//! what makes cross-strategy agreement a meaningful correctness check.
//!
//! ## Quick start
//! ```
//! use knap_dp::{solve_tabulated, solve_with_selection, Item, KnapsackInstance};
//!
//! let instance = KnapsackInstance::new(
//!     vec![
//!         Item::new(1, 15),
//!         Item::new(3, 10),
//!         Item::new(4, 30),
//!         Item::new(5, 25),
//!     ],
//!     7,
//! );
//! assert_eq!(solve_tabulated(&instance), 45);
//!
//! let selection = solve_with_selection(&instance);
//! assert_eq!(selection.value, 45);
//! assert_eq!(selection.indices, vec![0, 2]);
//! ```
//!
//! ## Built-in solvers
//! - [`solve_naive`]           : direct recursion, the correctness oracle.
//! - [`solve_memoized`]        : top-down with an explicit [`Memo`] cache.
//! - [`solve_tabulated`]       : bottom-up full-table fill.
//! - [`solve_space_optimized`] : single-array in-place fill.
//! - [`solve_two_row`]         : two-row rolling fill.
//! - [`solve_with_selection`]  : full table plus backtracked item indices.
//! - [`subset_sum_exists`], [`count_subsets`], [`equal_partition_possible`]
//!   : the subset-sum family over plain number lists.
//! - [`unbounded_knapsack`]    : the repetition-allowed variant.

pub mod builder;
pub mod error;
pub mod instance;
pub mod recurrence;
pub mod select;
pub mod strategies;
pub mod subset_sum;
pub mod table;
pub mod unbounded;

pub use crate::builder::InstanceBuilder;
pub use crate::error::InstanceError;
pub use crate::instance::{Item, KnapsackInstance};
pub use crate::select::{solve_with_selection, Selection};
pub use crate::strategies::memoized::{solve_memoized, solve_memoized_with, Memo};
pub use crate::strategies::naive::solve_naive;
pub use crate::strategies::space_optimized::{solve_space_optimized, solve_two_row};
pub use crate::strategies::tabulated::{fill_table, solve_tabulated};
pub use crate::subset_sum::{count_subsets, equal_partition_possible, subset_sum_exists};
pub use crate::table::DpTable;
pub use crate::unbounded::unbounded_knapsack;
