//! Numerically stable running moments
//!
//! Welford's online algorithm for mean and variance, with merge support for
//! combining per-worker accumulators (Chan et al.'s parallel formula).

use crate::math;
use crate::traits::Accumulator;

/// Running mean and variance via Welford's algorithm
///
/// Tracks count, mean, the sum of squared deviations from the running mean,
/// and extrema in O(1) memory. Preferred over [`Stats`](crate::summary::Stats)
/// when sample counts are large or values carry a large common offset, where
/// direct sum-of-squares arithmetic loses precision to cancellation.
///
/// # Example
///
/// ```
/// use runstats::summary::Welford;
///
/// let mut moments = Welford::new();
///
/// for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
///     moments.add(value);
/// }
///
/// assert!((moments.mean() - 3.0).abs() < 1e-12);
/// assert!((moments.variance() - 2.0).abs() < 1e-12);
/// assert_eq!(moments.min(), Some(1.0));
/// assert_eq!(moments.max(), Some(5.0));
/// ```
///
/// # Per-worker accumulation
///
/// ```
/// use runstats::summary::Welford;
///
/// let mut worker1 = Welford::new();
/// let mut worker2 = Welford::new();
///
/// for v in [10.0, 20.0, 30.0] {
///     worker1.add(v);
/// }
/// for v in [40.0, 50.0, 60.0] {
///     worker2.add(v);
/// }
///
/// worker1.merge(&worker2);
///
/// assert_eq!(worker1.count(), 6);
/// assert!((worker1.mean() - 35.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Welford {
    /// Samples recorded
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared deviations from the running mean
    m2: f64,
    /// Smallest sample
    min: f64,
    /// Largest sample
    max: f64,
}

impl Default for Welford {
    fn default() -> Self {
        Self::new()
    }
}

impl Welford {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a sample
    ///
    /// Samples are folded in as-is: a NaN poisons the running moments (the
    /// count still advances), and the extrema comparisons never match it.
    /// Inputs are not validated anywhere in this crate.
    pub fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Return to the empty state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of samples recorded
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Check if no samples have been recorded
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Arithmetic mean, or 0.0 when empty
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Population variance (divisor `count`), or 0.0 when empty
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Sample variance (Bessel's correction, divisor `count - 1`)
    ///
    /// 0.0 when fewer than two samples are recorded.
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Population standard deviation
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Sample standard deviation
    pub fn sample_stddev(&self) -> f64 {
        math::sqrt(self.sample_variance())
    }

    /// Smallest sample, or `None` when empty
    pub fn min(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Largest sample, or `None` when empty
    pub fn max(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Spread between the largest and smallest sample, or `None` when empty
    pub fn range(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.max - self.min)
        }
    }

    /// Sum of all samples, derived as `mean * count`
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }

    /// Fold another accumulator's samples into this one
    ///
    /// Combines (count, mean, M2) with Chan et al.'s parallel formula, so
    /// the result matches feeding both sample streams into one accumulator
    /// up to floating-point rounding. Merging an empty accumulator changes
    /// nothing; merging into an empty accumulator adopts `other` wholesale.
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        if self.count == 0 {
            *self = *other;
            return;
        }

        let combined_count = self.count + other.count;
        let delta = other.mean - self.mean;

        let combined_mean = self.mean + delta * (other.count as f64 / combined_count as f64);
        let combined_m2 = self.m2
            + other.m2
            + delta * delta * (self.count as f64 * other.count as f64 / combined_count as f64);

        self.count = combined_count;
        self.mean = combined_mean;
        self.m2 = combined_m2;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

impl Accumulator for Welford {
    fn update(&mut self, value: f64) {
        self.add(value);
    }

    fn merge(&mut self, other: &Self) {
        Welford::merge(self, other);
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Extend<f64> for Welford {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> Extend<&'a f64> for Welford {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        for &value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for Welford {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut moments = Self::new();
        moments.extend(iter);
        moments
    }
}

impl core::fmt::Display for Welford {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entry(&"count", &self.count)
            .entry(&"mean", &self.mean())
            .entry(&"stddev", &self.stddev())
            .entry(&"min", &self.min())
            .entry(&"max", &self.max())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut moments = Welford::new();

        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            moments.add(v);
        }

        assert_eq!(moments.count(), 5);
        assert!((moments.mean() - 3.0).abs() < 1e-12);
        assert!((moments.variance() - 2.0).abs() < 1e-12);
        assert!((moments.sum() - 15.0).abs() < 1e-12);
        assert_eq!(moments.min(), Some(1.0));
        assert_eq!(moments.max(), Some(5.0));
        assert_eq!(moments.range(), Some(4.0));
    }

    #[test]
    fn test_single_value() {
        let mut moments = Welford::new();
        moments.add(42.0);

        assert_eq!(moments.count(), 1);
        assert!((moments.mean() - 42.0).abs() < 1e-12);
        assert_eq!(moments.variance(), 0.0);
        assert_eq!(moments.sample_variance(), 0.0);
        assert_eq!(moments.min(), Some(42.0));
        assert_eq!(moments.max(), Some(42.0));
    }

    #[test]
    fn test_empty() {
        let moments = Welford::new();

        assert!(moments.is_empty());
        assert_eq!(moments.mean(), 0.0);
        assert_eq!(moments.variance(), 0.0);
        assert_eq!(moments.stddev(), 0.0);
        assert_eq!(moments.min(), None);
        assert_eq!(moments.max(), None);
        assert_eq!(moments.range(), None);
    }

    #[test]
    fn test_population_vs_sample_variance() {
        let mut moments = Welford::new();

        // Mean 5, squared deviations sum to 32
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            moments.add(v);
        }

        assert!((moments.variance() - 4.0).abs() < 1e-9);
        assert!((moments.stddev() - 2.0).abs() < 1e-9);
        assert!((moments.sample_variance() - 32.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset() {
        let mut moments = Welford::new();
        for v in [1.0, 2.0, 3.0] {
            moments.add(v);
        }

        moments.reset();

        assert!(moments.is_empty());
        assert_eq!(moments.mean(), 0.0);
        assert_eq!(moments.min(), None);

        moments.add(7.0);
        assert_eq!(moments.count(), 1);
        assert_eq!(moments.min(), Some(7.0));
    }

    #[test]
    fn test_merge() {
        let mut left = Welford::new();
        let mut right = Welford::new();

        for v in [1.0, 2.0, 3.0] {
            left.add(v);
        }
        for v in [4.0, 5.0, 6.0] {
            right.add(v);
        }

        left.merge(&right);

        assert_eq!(left.count(), 6);
        assert!((left.mean() - 3.5).abs() < 1e-12);
        assert!((left.sum() - 21.0).abs() < 1e-12);
        assert_eq!(left.min(), Some(1.0));
        assert_eq!(left.max(), Some(6.0));
    }

    #[test]
    fn test_merge_empty() {
        let mut populated = Welford::new();
        populated.add(1.0);
        populated.add(2.0);
        let empty = Welford::new();

        populated.merge(&empty);

        assert_eq!(populated.count(), 2);
        assert!((populated.mean() - 1.5).abs() < 1e-12);

        let mut adopter = Welford::new();
        adopter.merge(&populated);

        assert_eq!(adopter.count(), 2);
        assert!((adopter.mean() - 1.5).abs() < 1e-12);
        assert_eq!(adopter.min(), Some(1.0));
    }

    #[test]
    fn test_large_offset_stability() {
        let mut moments = Welford::new();

        let base = 1e12;
        for i in 0..1000 {
            moments.add(base + i as f64);
        }

        let expected_mean = base + 499.5;
        assert!(
            (moments.mean() - expected_mean).abs() < 1.0,
            "mean: {} expected: {}",
            moments.mean(),
            expected_mean
        );

        // Population variance of 0..1000 is (n^2 - 1) / 12
        let expected_variance = (1_000_000.0 - 1.0) / 12.0;
        assert!(
            (moments.variance() - expected_variance).abs() < 1.0,
            "variance: {} expected: {}",
            moments.variance(),
            expected_variance
        );
    }

    #[test]
    fn test_nan_propagates() {
        let mut moments = Welford::new();

        moments.add(1.0);
        moments.add(f64::NAN);
        moments.add(2.0);

        assert_eq!(moments.count(), 3);
        assert!(moments.mean().is_nan());
        assert!(moments.variance().is_nan());
    }

    #[test]
    fn test_infinity() {
        let mut moments = Welford::new();

        moments.add(1.0);
        moments.add(f64::INFINITY);
        moments.add(2.0);

        assert_eq!(moments.count(), 3);
        assert_eq!(moments.max(), Some(f64::INFINITY));
    }

    #[test]
    fn test_extend_and_from_iterator() {
        let mut moments: Welford = (1..=4).map(f64::from).collect();
        assert_eq!(moments.count(), 4);
        assert!((moments.mean() - 2.5).abs() < 1e-12);

        moments.extend([5.0, 6.0]);
        assert_eq!(moments.count(), 6);
        assert_eq!(moments.max(), Some(6.0));
    }
}
