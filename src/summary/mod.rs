//! Single-variable descriptive summaries
//!
//! Accumulators over a stream of `f64` samples, single-pass and O(1) memory:
//!
//! - [`Stats`]: exact running sums with direct access to the sum, sum of
//!   squares, extrema, and last sample. Derived statistics return 0.0 while
//!   empty, and reset is lazy (fields re-seed on the next add).
//! - [`Welford`]: numerically stable running moments, preferred when sample
//!   counts are large or values carry a large common offset.
//!
//! # Example
//!
//! ```
//! use runstats::summary::Stats;
//!
//! let mut stats = Stats::new();
//!
//! for value in [0.2, 0.4, 0.6] {
//!     stats.add(value);
//! }
//!
//! println!("mean: {}", stats.mean());
//! println!("rms: {}", stats.rms());
//! println!("spread: {} .. {}", stats.min(), stats.max());
//! ```

mod stats;
mod welford;

pub use stats::Stats;
pub use welford::Welford;
