//! Core trait for streaming accumulators
//!
//! Both accumulator types implement the base [`Accumulator`] trait, which
//! covers the shared lifecycle: feed samples, combine partial results, reset.

use core::fmt::Debug;

/// Core trait for single-variable streaming accumulators
///
/// An accumulator ingests `f64` samples one at a time and answers summary
/// queries in O(1) time and memory. Merging folds the samples recorded by
/// another accumulator into this one, which is how per-worker accumulators
/// are combined into a single result.
pub trait Accumulator: Clone + Debug {
    /// Incorporate one sample
    fn update(&mut self, value: f64);

    /// Fold another accumulator's samples into this one
    ///
    /// Accumulators carry no configuration, so merging cannot fail.
    fn merge(&mut self, other: &Self);

    /// Reset to the empty state
    fn clear(&mut self);

    /// Number of samples recorded since the last reset
    fn count(&self) -> u64;

    /// Check if no samples have been recorded
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
