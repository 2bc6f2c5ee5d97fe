//! # Runstats
//!
//! Constant-memory streaming statistics for scalar measurements.
//!
//! Feed samples one at a time from a measurement loop and query the running
//! mean, RMS, standard deviation, minimum, maximum, last value, and sample
//! count at any point, without keeping sample history.
//!
//! ## Features
//!
//! - **Exact sums**: [`Stats`] keeps the sum and sum of squares directly,
//!   with lazy reset and access to every raw field
//! - **Stable moments**: [`Welford`] trades raw-sum access for numerical
//!   robustness on large counts and large offsets
//! - **Mergeability**: both accumulators combine per-worker partial results
//! - **No allocation**: plain `Copy` structs, `no_std`-ready
//!
//! ## Quick Start
//!
//! ```rust
//! use runstats::prelude::*;
//!
//! let mut stats = Stats::new();
//!
//! for sample in [19.8, 20.1, 22.4, 21.0] {
//!     stats.add(sample);
//! }
//!
//! println!("mean: {:.2}", stats.mean());
//! println!("stddev: {:.2}", stats.stddev());
//! println!("range: {} .. {}", stats.min(), stats.max());
//! ```
//!
//! ## Per-worker accumulation
//!
//! Accumulators are single-threaded values with no internal locking. The
//! supported concurrent pattern is one accumulator per worker, merged after
//! the workers finish:
//!
//! ```rust
//! use runstats::summary::Stats;
//!
//! let mut worker1 = Stats::new();
//! let mut worker2 = Stats::new();
//!
//! worker1.add(4.0);
//! worker2.add(8.0);
//!
//! worker1.merge(&worker2);
//! assert_eq!(worker1.count(), 2);
//! assert_eq!(worker1.mean(), 6.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library support. Disable for `no_std`
//!   builds; float math falls back to `libm`.

#![cfg_attr(not(feature = "std"), no_std)]

mod math;

pub mod summary;
pub mod traits;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::summary::{Stats, Welford};
}

pub use summary::{Stats, Welford};
