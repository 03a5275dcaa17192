//! Descriptive statistics with numerical stability guarantees.
//!
//! Summary statistics for replication samples: compensated summation,
//! mean, unbiased variance, and a streaming accumulator whose merge gives
//! an order-independent reduction when replications are split across
//! independent workers.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation for O(ε) error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// An improved variant of Kahan summation that also handles the case
/// where the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use renewal_mc::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the sample variance using Welford's online algorithm.
///
/// Returns the **sample** (unbiased) variance with Bessel's correction
/// (denominator `n − 1`), avoiding the catastrophic cancellation of the
/// naive `E[X²] − (E[X])²` formula.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use renewal_mc::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut acc = WelfordAccumulator::new();
    for &x in data {
        acc.update(x);
    }
    acc.sample_variance()
}

/// Computes the sample standard deviation, `sqrt(variance(data))`.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Pearson's chi-square statistic Σ (Oᵢ − Eᵢ)² / Eᵢ.
///
/// Compares observed cell counts against expected cell counts (same
/// binning, expected counts already scaled to the sample size). Under the
/// null hypothesis the statistic is asymptotically chi-square distributed
/// with `cells − 1` degrees of freedom; compare against
/// [`crate::special::chi_square_cdf`].
///
/// Reference: Pearson (1900), "On the criterion that a given system of
/// deviations ... is such that it can be reasonably supposed to have
/// arisen from random sampling", *Philosophical Magazine* 50(302).
///
/// # Returns
/// - `None` if the lengths differ, the slices are empty, or any expected
///   count is non-positive or non-finite.
///
/// # Examples
/// ```
/// use renewal_mc::stats::chi_square_statistic;
/// let observed = [48.0, 52.0];
/// let expected = [50.0, 50.0];
/// let stat = chi_square_statistic(&observed, &expected).unwrap();
/// assert!((stat - 0.16).abs() < 1e-12);
/// ```
pub fn chi_square_statistic(observed: &[f64], expected: &[f64]) -> Option<f64> {
    if observed.is_empty() || observed.len() != expected.len() {
        return None;
    }
    if !expected.iter().all(|e| e.is_finite() && *e > 0.0) {
        return None;
    }
    if !observed.iter().all(|o| o.is_finite()) {
        return None;
    }
    let mut stat = 0.0;
    for (&o, &e) in observed.iter().zip(expected) {
        let d = o - e;
        stat += d * d / e;
    }
    Some(stat)
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for mean and variance.
///
/// Computes running statistics in a single pass with O(1) memory. The
/// [`merge`](WelfordAccumulator::merge) operation combines accumulators
/// built independently, so replications distributed across tasks reduce
/// to the same result regardless of aggregation order.
///
/// References:
/// - Welford (1962), *Technometrics* 4(3), pp. 419–420.
/// - Chan, Golub & LeVeque (1979), "Updating Formulae and a Pairwise
///   Algorithm for Computing Sample Variances".
///
/// # Examples
/// ```
/// use renewal_mc::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-15);
/// assert!((acc.sample_variance().unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a new sample into the accumulator.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean_acc;
        self.mean_acc += delta / self.count as f64;
        // delta2 uses the *updated* mean: M₂ += δ·(x − mean')
        let delta2 = value - self.mean_acc;
        self.m2 += delta * delta2;
    }

    /// Returns the number of samples seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the running mean, or `None` if no samples have been added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean_acc)
        }
    }

    /// Returns the sample variance (n − 1 denominator), or `None` if fewer
    /// than 2 samples have been added.
    pub fn sample_variance(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some(self.m2 / (self.count - 1) as f64)
        }
    }

    /// Returns the population variance (n denominator), or `None` if no
    /// samples have been added.
    pub fn population_variance(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.m2 / self.count as f64)
        }
    }

    /// Returns the sample standard deviation, or `None` if fewer than 2
    /// samples have been added.
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }

    /// Merges another accumulator into this one.
    ///
    /// Uses Chan's parallel update formula; the result is independent of
    /// the order in which partial accumulators are combined (up to
    /// floating-point rounding).
    pub fn merge(&mut self, other: &WelfordAccumulator) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other.clone();
            return;
        }
        let na = self.count as f64;
        let nb = other.count as f64;
        let n = na + nb;
        let delta = other.mean_acc - self.mean_acc;

        self.mean_acc += delta * (nb / n);
        self.m2 += other.m2 + delta * delta * na * nb / n;
        self.count += other.count;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_nonfinite() {
        assert_eq!(mean(&[1.0, f64::NAN, 3.0]), None);
        assert_eq!(mean(&[1.0, f64::INFINITY, 3.0]), None);
    }

    // --- variance / std_dev ---

    #[test]
    fn test_variance_basic() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
    }

    #[test]
    fn test_variance_constant() {
        let v = [5.0; 100];
        assert!(variance(&v).unwrap().abs() < 1e-15);
    }

    #[test]
    fn test_variance_too_short() {
        assert_eq!(variance(&[1.0]), None);
        assert_eq!(variance(&[]), None);
    }

    #[test]
    fn test_std_dev() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let expected = 4.571428571428571_f64.sqrt();
        assert!((std_dev(&v).unwrap() - expected).abs() < 1e-10);
    }

    // --- kahan_sum ---

    #[test]
    fn test_kahan_sum_catastrophic_cancellation() {
        // Naive summation loses the small terms entirely
        let data = [1e16, 1.0, 1.0, 1.0, 1.0, -1e16];
        assert_eq!(kahan_sum(&data), 4.0);
    }

    #[test]
    fn test_kahan_sum_empty() {
        assert_eq!(kahan_sum(&[]), 0.0);
    }

    // --- chi_square_statistic ---

    #[test]
    fn test_chi_square_statistic_basic() {
        let observed = [48.0, 52.0];
        let expected = [50.0, 50.0];
        let stat = chi_square_statistic(&observed, &expected).unwrap();
        assert!((stat - 0.16).abs() < 1e-12);
    }

    #[test]
    fn test_chi_square_statistic_perfect_fit() {
        let cells = [10.0, 20.0, 30.0];
        assert_eq!(chi_square_statistic(&cells, &cells), Some(0.0));
    }

    #[test]
    fn test_chi_square_statistic_invalid() {
        assert_eq!(chi_square_statistic(&[], &[]), None);
        assert_eq!(chi_square_statistic(&[1.0], &[1.0, 2.0]), None);
        assert_eq!(chi_square_statistic(&[1.0], &[0.0]), None);
        assert_eq!(chi_square_statistic(&[1.0], &[-2.0]), None);
    }

    // --- WelfordAccumulator ---

    #[test]
    fn test_welford_matches_batch() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let mut acc = WelfordAccumulator::new();
        for &x in &v {
            acc.update(x);
        }
        assert_eq!(acc.count(), 8);
        assert!((acc.mean().unwrap() - mean(&v).unwrap()).abs() < 1e-12);
        assert!((acc.sample_variance().unwrap() - variance(&v).unwrap()).abs() < 1e-12);
        assert!((acc.population_variance().unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_welford_empty() {
        let acc = WelfordAccumulator::new();
        assert_eq!(acc.mean(), None);
        assert_eq!(acc.sample_variance(), None);
        assert_eq!(acc.population_variance(), None);
    }

    #[test]
    fn test_welford_single() {
        let mut acc = WelfordAccumulator::new();
        acc.update(3.5);
        assert_eq!(acc.mean(), Some(3.5));
        assert_eq!(acc.sample_variance(), None);
        assert_eq!(acc.population_variance(), Some(0.0));
    }

    #[test]
    fn test_welford_merge_matches_sequential() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let mut whole = WelfordAccumulator::new();
        for &x in &v {
            whole.update(x);
        }

        let mut left = WelfordAccumulator::new();
        let mut right = WelfordAccumulator::new();
        for &x in &v[..4] {
            left.update(x);
        }
        for &x in &v[4..] {
            right.update(x);
        }
        left.merge(&right);

        assert_eq!(left.count(), whole.count());
        assert!((left.mean().unwrap() - whole.mean().unwrap()).abs() < 1e-12);
        assert!(
            (left.sample_variance().unwrap() - whole.sample_variance().unwrap()).abs() < 1e-12
        );
    }

    #[test]
    fn test_welford_merge_with_empty() {
        let mut acc = WelfordAccumulator::new();
        acc.update(1.0);
        acc.update(2.0);
        let before = acc.clone();
        acc.merge(&WelfordAccumulator::new());
        assert_eq!(acc.count(), before.count());
        assert_eq!(acc.mean(), before.mean());
    }
}
