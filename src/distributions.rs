//! Interarrival-time distributions.
//!
//! Parameter-validated distribution types with analytical moments
//! (mean, variance), pdf/pmf and CDF evaluation, quantiles, and random
//! sampling. These are the interarrival families a renewal process can be
//! driven by, plus the Poisson distribution used as a closed-form oracle
//! for the exponential case.
//!
//! # Supported Distributions
//!
//! | Distribution | Parameters | Mean | Variance |
//! |---|---|---|---|
//! | [`Exponential`] | rate λ | 1/λ | 1/λ² |
//! | [`LogNormal`] | μ, σ | exp(μ+σ²/2) | (exp(σ²)−1)·exp(2μ+σ²) |
//! | [`Geometric`] | p | (1−p)/p | (1−p)/p² |
//! | [`Poisson`] (oracle) | λ | λ | λ |
//!
//! # Design Notes
//!
//! Parameters are validated **eagerly** in the constructors; a simulation
//! can never start from an invalid configuration. Sampling is generic over
//! [`rand::Rng`], so a caller controls determinism by seeding the source
//! (see [`crate::random::create_rng`]).

use rand::Rng;

use crate::random::{standard_normal, unit_open};
use crate::special;

/// Error type for invalid distribution parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    InvalidParameters(String),
}

impl std::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionError::InvalidParameters(msg) => {
                write!(f, "invalid distribution parameters: {msg}")
            }
        }
    }
}

impl std::error::Error for DistributionError {}

// ============================================================================
// Exponential Distribution
// ============================================================================

/// Exponential distribution with rate λ > 0.
///
/// The interarrival law of the Poisson process: when a renewal process has
/// Exponential(λ) interarrival times, its counting statistic N(T) is
/// Poisson(λT)-distributed.
///
/// # Mathematical Definition
/// - PDF: f(x) = λ e^{−λx} for x ≥ 0
/// - CDF: F(x) = 1 − e^{−λx}
/// - Mean: 1/λ
/// - Variance: 1/λ²
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Creates a new exponential distribution with the given rate.
    ///
    /// # Errors
    /// Returns `Err` if `rate ≤ 0` or not finite.
    pub fn new(rate: f64) -> Result<Self, DistributionError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Exponential requires rate λ > 0, got λ={rate}"
            )));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Mean = 1/λ.
    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    /// Variance = 1/λ².
    pub fn variance(&self) -> f64 {
        1.0 / (self.rate * self.rate)
    }

    pub fn std_dev(&self) -> f64 {
        1.0 / self.rate
    }

    /// PDF: λ e^{−λx} for x ≥ 0, 0 otherwise.
    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.rate * (-self.rate * x).exp()
        }
    }

    /// CDF: 1 − e^{−λx} for x ≥ 0, 0 otherwise.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            1.0 - (-self.rate * x).exp()
        }
    }

    /// Inverse CDF (quantile): −ln(1−p)/λ.
    ///
    /// Returns `None` if `p` is outside `[0, 1)`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..1.0).contains(&p) {
            return None;
        }
        Some(-(1.0 - p).ln() / self.rate)
    }

    /// Draws one variate by inverse transform: −ln(U)/λ with U ~ (0, 1).
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        -unit_open(rng).ln() / self.rate
    }
}

// ============================================================================
// LogNormal Distribution
// ============================================================================

/// Log-normal distribution: if X ~ LogNormal(μ, σ), then ln(X) ~ N(μ, σ²).
///
/// A strictly positive, right-skewed interarrival law; the renewal process
/// it drives has no closed-form counting distribution, which is what the
/// Monte Carlo estimator is for.
///
/// # Mathematical Definition
/// - PDF: (1/(xσ√(2π))) exp(−(ln(x)−μ)²/(2σ²)) for x > 0
/// - CDF: Φ((ln(x)−μ)/σ)
/// - Mean: exp(μ + σ²/2)
/// - Variance: (exp(σ²) − 1) · exp(2μ + σ²)
///
/// Reference: Johnson, Kotz & Balakrishnan (1994), *Continuous Univariate
/// Distributions*, Vol. 1, Chapter 14.
#[derive(Debug, Clone, PartialEq)]
pub struct LogNormal {
    mu: f64,
    sigma: f64,
}

impl LogNormal {
    /// Creates a new log-normal distribution.
    ///
    /// Parameters `mu` and `sigma` are the mean and std dev of ln(X)
    /// (location and scale, not the moments of X itself).
    ///
    /// # Errors
    /// Returns `Err` if `sigma ≤ 0` or parameters are not finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistributionError> {
        if !mu.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "LogNormal requires finite μ and σ > 0, got μ={mu}, σ={sigma}"
            )));
        }
        Ok(Self { mu, sigma })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Mean = exp(μ + σ²/2).
    pub fn mean(&self) -> f64 {
        (self.mu + self.sigma * self.sigma / 2.0).exp()
    }

    /// Variance = (exp(σ²) − 1) · exp(2μ + σ²).
    pub fn variance(&self) -> f64 {
        let s2 = self.sigma * self.sigma;
        (s2.exp() - 1.0) * (2.0 * self.mu + s2).exp()
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// PDF for x > 0, 0 otherwise.
    pub fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let z = (x.ln() - self.mu) / self.sigma;
        special::standard_normal_pdf(z) / (x * self.sigma)
    }

    /// CDF: Φ((ln(x)−μ)/σ) for x > 0, 0 otherwise.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let z = (x.ln() - self.mu) / self.sigma;
        special::standard_normal_cdf(z)
    }

    /// Inverse CDF: exp(μ + σ·Φ⁻¹(p)).
    ///
    /// Returns `None` if `p` is outside `(0, 1)`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if p <= 0.0 || p >= 1.0 {
            return None;
        }
        Some((self.mu + self.sigma * special::inverse_normal_cdf(p)).exp())
    }

    /// Draws one variate as exp(μ + σZ) with Z from the polar method.
    ///
    /// The normal deviate is exact (no quantile approximation is involved),
    /// so sampled moments converge to the analytical ones.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        (self.mu + self.sigma * standard_normal(rng)).exp()
    }
}

// ============================================================================
// Geometric Distribution
// ============================================================================

/// Geometric distribution on {0, 1, 2, ...} with success probability p.
///
/// Counts the failures before the first success in Bernoulli(p) trials.
/// As an interarrival law it makes a discrete-time renewal process; draws
/// of 0 are legal (p(0) = p), so consecutive arrivals may coincide and the
/// arrival-time sequence is non-decreasing rather than strictly increasing.
///
/// # Mathematical Definition
/// - PMF: p(k) = p(1−p)^k for k = 0, 1, 2, ...
/// - CDF: F(k) = 1 − (1−p)^{k+1}
/// - Mean: (1−p)/p
/// - Variance: (1−p)/p²
#[derive(Debug, Clone, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Creates a new geometric distribution.
    ///
    /// # Errors
    /// Returns `Err` if `p` is outside `(0, 1]` or not finite. Note that
    /// `p = 1` is valid and degenerate: every draw is 0.
    pub fn new(p: f64) -> Result<Self, DistributionError> {
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Geometric requires success probability p ∈ (0, 1], got p={p}"
            )));
        }
        Ok(Self { p })
    }

    pub fn success_probability(&self) -> f64 {
        self.p
    }

    /// Mean = (1−p)/p.
    pub fn mean(&self) -> f64 {
        (1.0 - self.p) / self.p
    }

    /// Variance = (1−p)/p².
    pub fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// PMF: p(1−p)^k.
    pub fn pmf(&self, k: u64) -> f64 {
        self.p * (1.0 - self.p).powi(k as i32)
    }

    /// CDF: 1 − (1−p)^{k+1}.
    pub fn cdf(&self, k: u64) -> f64 {
        1.0 - (1.0 - self.p).powi(k as i32 + 1)
    }

    /// Inverse CDF: the smallest k with F(k) ≥ prob.
    ///
    /// Returns `None` if `prob` is outside `[0, 1)`.
    pub fn quantile(&self, prob: f64) -> Option<u64> {
        if !(0.0..1.0).contains(&prob) {
            return None;
        }
        if self.p == 1.0 || prob == 0.0 {
            return Some(0);
        }
        // Smallest k with 1 − (1−p)^{k+1} ≥ prob
        let k = ((1.0 - prob).ln() / (1.0 - self.p).ln()).ceil() - 1.0;
        Some(k.max(0.0) as u64)
    }

    /// Draws one variate by inverse transform: ⌊ln(U)/ln(1−p)⌋.
    ///
    /// Returned as `f64` so geometric draws compose with the continuous
    /// families as interarrival durations; the value is always a
    /// non-negative integer.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.p == 1.0 {
            return 0.0;
        }
        (unit_open(rng).ln() / (1.0 - self.p).ln()).floor()
    }
}

// ============================================================================
// Poisson Distribution (validation oracle)
// ============================================================================

/// Poisson distribution with parameter λ > 0.
///
/// Not an interarrival family: this is the closed-form law of the counting
/// statistic N(T) when interarrival times are Exponential(λ₀) and
/// λ = λ₀·T. It exists purely as a validation oracle for the Monte Carlo
/// estimator; there is no sampler.
///
/// # Mathematical Definition
/// - PMF: p(k) = e^{−λ} λ^k / k!
/// - CDF: F(k) = Q(k+1, λ), the regularized upper incomplete gamma
/// - Mean: λ
/// - Variance: λ
#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a new Poisson distribution.
    ///
    /// # Errors
    /// Returns `Err` if `lambda ≤ 0` or not finite.
    pub fn new(lambda: f64) -> Result<Self, DistributionError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Poisson requires λ > 0, got λ={lambda}"
            )));
        }
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn mean(&self) -> f64 {
        self.lambda
    }

    pub fn variance(&self) -> f64 {
        self.lambda
    }

    /// PMF evaluated in log space: exp(k·ln λ − λ − ln Γ(k+1)).
    ///
    /// Stays finite for large k and λ where λ^k/k! would overflow.
    pub fn pmf(&self, k: u64) -> f64 {
        let kf = k as f64;
        (kf * self.lambda.ln() - self.lambda - special::ln_gamma(kf + 1.0)).exp()
    }

    /// CDF: P(N ≤ k) = 1 − P(k+1, λ) via the incomplete gamma identity.
    pub fn cdf(&self, k: u64) -> f64 {
        1.0 - special::regularized_lower_gamma(k as f64 + 1.0, self.lambda)
    }
}

// ============================================================================
// Interarrival Family
// ============================================================================

/// A configured interarrival-time distribution for a renewal process.
///
/// This is the parameter struct the simulation layer is driven by: a
/// family tag with its validated parameters, dispatching moments and
/// sampling to the concrete distribution.
///
/// # Examples
/// ```
/// use renewal_mc::distributions::{Exponential, Interarrival};
/// use renewal_mc::random::create_rng;
///
/// let family = Interarrival::Exponential(Exponential::new(2.0).unwrap());
/// assert!((family.mean() - 0.5).abs() < 1e-15);
///
/// let mut rng = create_rng(42);
/// let draws = family.sample_n(100, &mut rng);
/// assert_eq!(draws.len(), 100);
/// assert!(draws.iter().all(|&x| x >= 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Interarrival {
    Exponential(Exponential),
    LogNormal(LogNormal),
    Geometric(Geometric),
}

impl Interarrival {
    /// Mean of one interarrival time.
    pub fn mean(&self) -> f64 {
        match self {
            Interarrival::Exponential(d) => d.mean(),
            Interarrival::LogNormal(d) => d.mean(),
            Interarrival::Geometric(d) => d.mean(),
        }
    }

    /// Variance of one interarrival time.
    pub fn variance(&self) -> f64 {
        match self {
            Interarrival::Exponential(d) => d.variance(),
            Interarrival::LogNormal(d) => d.variance(),
            Interarrival::Geometric(d) => d.variance(),
        }
    }

    /// Standard deviation of one interarrival time.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Draws one interarrival time. Always non-negative.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match self {
            Interarrival::Exponential(d) => d.sample(rng),
            Interarrival::LogNormal(d) => d.sample(rng),
            Interarrival::Geometric(d) => d.sample(rng),
        }
    }

    /// Draws `n` i.i.d. interarrival times.
    pub fn sample_n<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::stats;

    // --- Exponential ---

    #[test]
    fn test_exponential_moments() {
        let e = Exponential::new(2.0).unwrap();
        assert!((e.mean() - 0.5).abs() < 1e-15);
        assert!((e.variance() - 0.25).abs() < 1e-15);
        assert!((e.std_dev() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_exponential_cdf() {
        let e = Exponential::new(1.0).unwrap();
        assert_eq!(e.cdf(-1.0), 0.0);
        assert_eq!(e.cdf(0.0), 0.0);
        assert!((e.cdf(1.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-15);
    }

    #[test]
    fn test_exponential_quantile_roundtrip() {
        let e = Exponential::new(3.0).unwrap();
        for &p in &[0.1, 0.5, 0.9, 0.99] {
            let x = e.quantile(p).unwrap();
            assert!((e.cdf(x) - p).abs() < 1e-12, "p={p}");
        }
        assert_eq!(e.quantile(0.0), Some(0.0));
        assert_eq!(e.quantile(1.0), None);
        assert_eq!(e.quantile(-0.1), None);
    }

    #[test]
    fn test_exponential_median() {
        // Median = ln(2)/λ
        let e = Exponential::new(2.0).unwrap();
        let median = e.quantile(0.5).unwrap();
        assert!((median - 2.0_f64.ln() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_exponential_sample_mean() {
        let e = Exponential::new(2.0).unwrap();
        let mut rng = create_rng(42);
        let draws: Vec<f64> = (0..50_000).map(|_| e.sample(&mut rng)).collect();
        assert!(draws.iter().all(|&x| x >= 0.0));
        let m = stats::mean(&draws).unwrap();
        assert!((m - 0.5).abs() < 0.02, "sample mean = {m}");
    }

    #[test]
    fn test_exponential_invalid() {
        assert!(Exponential::new(0.0).is_err());
        assert!(Exponential::new(-1.0).is_err());
        assert!(Exponential::new(f64::NAN).is_err());
        assert!(Exponential::new(f64::INFINITY).is_err());
    }

    // --- LogNormal ---

    #[test]
    fn test_lognormal_moments() {
        let ln = LogNormal::new(0.0, 1.0).unwrap();
        assert!((ln.mean() - 0.5_f64.exp()).abs() < 1e-10);
        let expected_var = (1.0_f64.exp() - 1.0) * 1.0_f64.exp();
        assert!((ln.variance() - expected_var).abs() < 1e-10);
    }

    #[test]
    fn test_lognormal_cdf_median() {
        let ln = LogNormal::new(0.0, 1.0).unwrap();
        assert_eq!(ln.cdf(0.0), 0.0);
        assert_eq!(ln.cdf(-5.0), 0.0);
        // Median of LogNormal(μ, σ) = exp(μ)
        assert!((ln.cdf(1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_lognormal_quantile() {
        let ln = LogNormal::new(0.5, 2.0).unwrap();
        let q50 = ln.quantile(0.5).unwrap();
        assert!((q50 - 0.5_f64.exp()).abs() < 1e-6);
        assert_eq!(ln.quantile(0.0), None);
        assert_eq!(ln.quantile(1.0), None);
    }

    #[test]
    fn test_lognormal_sample_positive_and_mean() {
        let ln = LogNormal::new(0.0, 0.5).unwrap();
        let mut rng = create_rng(7);
        let draws: Vec<f64> = (0..50_000).map(|_| ln.sample(&mut rng)).collect();
        assert!(draws.iter().all(|&x| x > 0.0));
        let m = stats::mean(&draws).unwrap();
        // E[X] = exp(0 + 0.125) ≈ 1.1331
        assert!((m - 0.125_f64.exp()).abs() < 0.02, "sample mean = {m}");
    }

    #[test]
    fn test_lognormal_invalid() {
        assert!(LogNormal::new(0.0, 0.0).is_err());
        assert!(LogNormal::new(0.0, -1.0).is_err());
        assert!(LogNormal::new(f64::NAN, 1.0).is_err());
    }

    // --- Geometric ---

    #[test]
    fn test_geometric_moments() {
        let g = Geometric::new(0.6).unwrap();
        assert!((g.mean() - 0.4 / 0.6).abs() < 1e-15);
        assert!((g.variance() - 0.4 / 0.36).abs() < 1e-12);
    }

    #[test]
    fn test_geometric_pmf_sums_to_cdf() {
        let g = Geometric::new(0.3).unwrap();
        let mut sum = 0.0;
        for k in 0..=20 {
            sum += g.pmf(k);
            assert!((sum - g.cdf(k)).abs() < 1e-12, "k={k}");
        }
        assert!(sum < 1.0);
        assert!(g.cdf(100) > 1.0 - 1e-12);
    }

    #[test]
    fn test_geometric_quantile() {
        let g = Geometric::new(0.3).unwrap();
        for &prob in &[0.1, 0.5, 0.9, 0.99] {
            let k = g.quantile(prob).unwrap();
            assert!(g.cdf(k) >= prob, "prob={prob}, k={k}");
            if k > 0 {
                assert!(g.cdf(k - 1) < prob, "prob={prob}, k={k} not minimal");
            }
        }
        assert_eq!(g.quantile(0.0), Some(0));
        assert_eq!(g.quantile(1.0), None);
    }

    #[test]
    fn test_geometric_degenerate() {
        let g = Geometric::new(1.0).unwrap();
        assert_eq!(g.mean(), 0.0);
        assert_eq!(g.variance(), 0.0);
        let mut rng = create_rng(0);
        for _ in 0..100 {
            assert_eq!(g.sample(&mut rng), 0.0);
        }
    }

    #[test]
    fn test_geometric_sample_support_and_mean() {
        let g = Geometric::new(0.6).unwrap();
        let mut rng = create_rng(42);
        let draws: Vec<f64> = (0..50_000).map(|_| g.sample(&mut rng)).collect();
        // Integer-valued, non-negative
        assert!(draws.iter().all(|&x| x >= 0.0 && x.fract() == 0.0));
        let m = stats::mean(&draws).unwrap();
        assert!((m - 2.0 / 3.0).abs() < 0.02, "sample mean = {m}");
    }

    #[test]
    fn test_geometric_invalid() {
        assert!(Geometric::new(0.0).is_err());
        assert!(Geometric::new(-0.5).is_err());
        assert!(Geometric::new(1.5).is_err());
        assert!(Geometric::new(f64::NAN).is_err());
    }

    // --- Poisson ---

    #[test]
    fn test_poisson_pmf_known_value() {
        // P(N = 10 | λ = 10) = e^{−10}·10¹⁰/10! ≈ 0.125110
        let p = Poisson::new(10.0).unwrap();
        assert!((p.pmf(10) - 0.1251100357211333).abs() < 1e-8);
    }

    #[test]
    fn test_poisson_pmf_normalizes() {
        let p = Poisson::new(10.0).unwrap();
        let total: f64 = (0..=60).map(|k| p.pmf(k)).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_poisson_cdf_matches_pmf_sum() {
        let p = Poisson::new(4.5).unwrap();
        let mut running = 0.0;
        for k in 0..=20 {
            running += p.pmf(k);
            assert!((p.cdf(k) - running).abs() < 1e-8, "k={k}");
        }
    }

    #[test]
    fn test_poisson_large_lambda_stable() {
        // λ^k/k! would overflow long before this
        let p = Poisson::new(500.0).unwrap();
        let pmf = p.pmf(500);
        assert!(pmf.is_finite() && pmf > 0.0);
        // Mode of Poisson(λ) is ≈ λ; pmf there ≈ 1/√(2πλ)
        let approx = 1.0 / (2.0 * std::f64::consts::PI * 500.0).sqrt();
        assert!((pmf - approx).abs() / approx < 0.01);
    }

    #[test]
    fn test_poisson_invalid() {
        assert!(Poisson::new(0.0).is_err());
        assert!(Poisson::new(-2.0).is_err());
        assert!(Poisson::new(f64::INFINITY).is_err());
    }

    // --- Interarrival ---

    #[test]
    fn test_interarrival_dispatch() {
        let exp = Interarrival::Exponential(Exponential::new(2.0).unwrap());
        assert!((exp.mean() - 0.5).abs() < 1e-15);
        assert!((exp.std_dev() - 0.5).abs() < 1e-15);

        let geo = Interarrival::Geometric(Geometric::new(0.6).unwrap());
        assert!((geo.mean() - 2.0 / 3.0).abs() < 1e-12);

        let ln = Interarrival::LogNormal(LogNormal::new(0.0, 1.0).unwrap());
        assert!((ln.mean() - 0.5_f64.exp()).abs() < 1e-10);
    }

    #[test]
    fn test_interarrival_sample_n() {
        let family = Interarrival::Exponential(Exponential::new(1.0).unwrap());
        let mut rng = create_rng(42);
        let draws = family.sample_n(1000, &mut rng);
        assert_eq!(draws.len(), 1000);
        assert!(draws.iter().all(|&x| x >= 0.0));
    }

    #[test]
    fn test_interarrival_sample_n_deterministic() {
        let family = Interarrival::LogNormal(LogNormal::new(0.0, 1.0).unwrap());
        let mut rng1 = create_rng(5);
        let mut rng2 = create_rng(5);
        assert_eq!(family.sample_n(50, &mut rng1), family.sample_n(50, &mut rng2));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        // --- Exponential ---

        #[test]
        fn exponential_cdf_in_01(rate in 0.01_f64..100.0, x in -10.0_f64..1000.0) {
            let e = Exponential::new(rate).unwrap();
            let c = e.cdf(x);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn exponential_quantile_roundtrip(rate in 0.01_f64..100.0, p in 0.0_f64..0.999) {
            let e = Exponential::new(rate).unwrap();
            let x = e.quantile(p).unwrap();
            let p_back = e.cdf(x);
            prop_assert!((p_back - p).abs() < 1e-9, "p={} -> x={} -> p_back={}", p, x, p_back);
        }

        #[test]
        fn exponential_samples_nonnegative(rate in 0.01_f64..100.0, seed in 0_u64..10_000) {
            let e = Exponential::new(rate).unwrap();
            let mut rng = create_rng(seed);
            prop_assert!(e.sample(&mut rng) >= 0.0);
        }

        // --- LogNormal ---

        #[test]
        fn lognormal_samples_positive(
            mu in -3.0_f64..3.0,
            sigma in 0.01_f64..3.0,
            seed in 0_u64..10_000,
        ) {
            let ln = LogNormal::new(mu, sigma).unwrap();
            let mut rng = create_rng(seed);
            prop_assert!(ln.sample(&mut rng) > 0.0);
        }

        #[test]
        fn lognormal_cdf_monotone(
            mu in -2.0_f64..2.0,
            sigma in 0.1_f64..2.0,
            x in 0.01_f64..50.0,
            dx in 0.01_f64..10.0,
        ) {
            let ln = LogNormal::new(mu, sigma).unwrap();
            prop_assert!(ln.cdf(x + dx) >= ln.cdf(x) - 1e-6);
        }

        // --- Geometric ---

        #[test]
        fn geometric_samples_are_counts(p in 0.01_f64..1.0, seed in 0_u64..10_000) {
            let g = Geometric::new(p).unwrap();
            let mut rng = create_rng(seed);
            let x = g.sample(&mut rng);
            prop_assert!(x >= 0.0);
            prop_assert_eq!(x.fract(), 0.0);
        }

        #[test]
        fn geometric_quantile_is_minimal(p in 0.05_f64..0.95, prob in 0.0_f64..0.999) {
            let g = Geometric::new(p).unwrap();
            let k = g.quantile(prob).unwrap();
            prop_assert!(g.cdf(k) >= prob - 1e-12);
            if k > 0 {
                prop_assert!(g.cdf(k - 1) < prob + 1e-9);
            }
        }
    }
}
