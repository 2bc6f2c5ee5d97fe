//! Exact running sums (mean, RMS, stddev, min, max, last)
//!
//! Keeps the sum and sum of squares directly, trading Welford-style
//! cancellation resistance for exact mergeability and direct access to the
//! running sums.

use crate::math;
use crate::traits::Accumulator;

/// Streaming descriptive statistics over exact running sums
///
/// Accumulates sum, sum of squares, extrema, last value, and sample count in
/// O(1) memory, one sample at a time. Derived statistics (mean, RMS,
/// standard deviation) are computed on demand and return 0.0 while no
/// samples are recorded.
///
/// Standard deviation is the population form (divisor `count`). For the
/// Bessel-corrected sample form, use [`Welford`](crate::summary::Welford).
///
/// # Example
///
/// ```
/// use runstats::summary::Stats;
///
/// let mut stats = Stats::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(value);
/// }
///
/// assert_eq!(stats.count(), 8);
/// assert!((stats.mean() - 5.0).abs() < 1e-12);
/// assert!((stats.stddev() - 2.0).abs() < 1e-12);
/// assert_eq!(stats.min(), 2.0);
/// assert_eq!(stats.max(), 9.0);
/// assert_eq!(stats.last(), 9.0);
/// ```
///
/// # Reset semantics
///
/// [`reset`](Stats::reset) only marks the accumulator empty; the stored
/// fields are re-seeded by the next [`add`](Stats::add). Until then the
/// unguarded accessors ([`min`](Stats::min), [`max`](Stats::max),
/// [`last`](Stats::last), [`sum`](Stats::sum),
/// [`sum_squares`](Stats::sum_squares)) keep reporting pre-reset values,
/// while the guarded ones return 0.0:
///
/// ```
/// use runstats::summary::Stats;
///
/// let mut stats = Stats::new();
/// stats.add(10.0);
/// stats.reset();
///
/// assert_eq!(stats.count(), 0);
/// assert_eq!(stats.mean(), 0.0);
/// // Unguarded reads stay at their pre-reset values until the next add
/// assert_eq!(stats.last(), 10.0);
///
/// stats.add(20.0);
/// assert_eq!(stats.mean(), 20.0);
/// assert_eq!(stats.min(), 20.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Stats {
    /// Sum of samples since the last seed
    sum: f64,
    /// Sum of squared samples since the last seed
    sum_squares: f64,
    /// Smallest sample since the last seed
    min: f64,
    /// Largest sample since the last seed
    max: f64,
    /// Samples recorded since the last reset
    count: u64,
    /// Most recent sample (survives reset)
    last: f64,
}

impl Stats {
    /// Create a new empty accumulator
    ///
    /// `Default` produces the same all-zero empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample
    ///
    /// The first sample after construction or [`reset`](Stats::reset) seeds
    /// the running sums and extrema before being accumulated. Values are
    /// taken as-is: non-finite samples flow into the sums per IEEE 754.
    pub fn add(&mut self, value: f64) {
        if self.count == 0 {
            self.sum = 0.0;
            self.sum_squares = 0.0;
            self.min = value;
            self.max = value;
        }

        self.last = value;
        self.count += 1;
        self.sum += value;
        self.sum_squares += value * value;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Forget all samples
    ///
    /// Only the count is cleared; the sums and extrema stay in place until
    /// the next [`add`](Stats::add) re-seeds them, and [`last`](Stats::last)
    /// keeps the final pre-reset sample.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Number of samples recorded since the last reset
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Check if no samples have been recorded since the last reset
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Arithmetic mean, or 0.0 when empty
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Root-mean-square, or 0.0 when empty
    pub fn rms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            math::sqrt(self.sum_squares / self.count as f64)
        }
    }

    /// Population variance, or 0.0 when empty
    ///
    /// Computed as `E[x²] - E[x]²`. Cancellation can push the difference
    /// slightly negative when the variance is tiny relative to the mean, so
    /// finite negative values clamp to zero; a NaN radicand from non-finite
    /// samples propagates.
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.sum / self.count as f64;
        let variance = self.sum_squares / self.count as f64 - mean * mean;
        // Clamp only finite negatives so NaN propagates
        if variance < 0.0 {
            0.0
        } else {
            variance
        }
    }

    /// Population standard deviation (divisor `count`), or 0.0 when empty
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Smallest sample since the last seed
    ///
    /// A plain field read: 0.0 before any sample has ever been added, and
    /// stale between a [`reset`](Stats::reset) and the next
    /// [`add`](Stats::add).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample since the last seed
    ///
    /// Same staleness contract as [`min`](Stats::min).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Most recent sample, or 0.0 if none was ever added
    ///
    /// Survives [`reset`](Stats::reset) until the next add.
    pub fn last(&self) -> f64 {
        self.last
    }

    /// Running sum of samples
    ///
    /// Same staleness contract as [`min`](Stats::min).
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Running sum of squared samples
    ///
    /// Same staleness contract as [`min`](Stats::min).
    pub fn sum_squares(&self) -> f64 {
        self.sum_squares
    }

    /// Fold another accumulator's samples into this one
    ///
    /// Exact for this representation: sums and counts add, extrema combine.
    /// `other`'s samples are treated as the more recent, so its last value
    /// wins. Merging an empty accumulator changes nothing; merging into an
    /// empty accumulator adopts `other` wholesale.
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        if self.count == 0 {
            *self = *other;
            return;
        }

        self.sum += other.sum;
        self.sum_squares += other.sum_squares;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.count += other.count;
        self.last = other.last;
    }
}

impl Accumulator for Stats {
    fn update(&mut self, value: f64) {
        self.add(value);
    }

    fn merge(&mut self, other: &Self) {
        Stats::merge(self, other);
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Extend<f64> for Stats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> Extend<&'a f64> for Stats {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        for &value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for Stats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

impl core::fmt::Display for Stats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entry(&"count", &self.count)
            .entry(&"mean", &self.mean())
            .entry(&"stddev", &self.stddev())
            .entry(&"min", &self.min)
            .entry(&"max", &self.max)
            .entry(&"last", &self.last)
            .finish()
    }
}
