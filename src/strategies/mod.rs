//! Evaluation strategies for the 0/1 knapsack recurrence.
//!
//! Each module realizes the transition from [`crate::recurrence`] under a
//! different evaluation order; none of them call each other, so their
//! agreement on any instance is a real correctness check rather than a
//! tautology.
//!
//! - [`naive`]           : direct recursion, exponential, the test oracle.
//! - [`memoized`]        : top-down recursion behind an explicit cache.
//! - [`tabulated`]       : bottom-up fill of the full table.
//! - [`space_optimized`] : 1D in-place and two-row rolling fills.

pub mod memoized;
pub mod naive;
pub mod space_optimized;
pub mod tabulated;
