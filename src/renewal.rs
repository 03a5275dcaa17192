//! Renewal-process simulation and counting-statistic estimation.
//!
//! A renewal process places its n-th event at the n-th partial sum of
//! i.i.d. non-negative interarrival times. This module simulates one
//! realization up to a horizon T and reports the counting statistic
//! N(T), the number of arrivals in (0, T], then replicates
//! independently to estimate the distribution of N(T).
//!
//! Two details distinguish this from the naive cumulative-sum-and-search
//! approach:
//!
//! - **No silent sentinel.** [`counting_statistic`] returns `Option<u64>`:
//!   `None` means the supplied draws never carried the process past the
//!   horizon. Only [`simulate_one`] consumes that outcome, by extending
//!   the realization with more draws; callers never see a sentinel value.
//! - **Adaptive draw budget.** [`simulate_one`] streams draws against a
//!   budget that doubles on exhaustion, so an undersized initial budget
//!   yields a correct count rather than a truncated one. Growth stops at
//!   [`MAX_TOTAL_DRAWS`]; past the ceiling the realization is reported as
//!   [`RenewalError::BudgetExhausted`] (reachable, e.g., with a degenerate
//!   `Geometric(1.0)` whose draws are all zero).

use rand::Rng;

use crate::distributions::{DistributionError, Geometric, Interarrival};
use crate::stats::WelfordAccumulator;

/// Hard ceiling on the number of interarrival draws a single realization
/// may consume, adaptive growth included.
pub const MAX_TOTAL_DRAWS: usize = 1 << 22;

/// Error type for renewal simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenewalError {
    /// Horizon, replication count, or draw budget violates constraints,
    /// or the interarrival distribution itself was misconfigured.
    InvalidParameters(String),
    /// The draw ceiling was reached before the cumulative sum exceeded
    /// the horizon.
    BudgetExhausted { draws: usize, horizon: f64 },
}

impl std::fmt::Display for RenewalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenewalError::InvalidParameters(msg) => {
                write!(f, "invalid simulation parameters: {msg}")
            }
            RenewalError::BudgetExhausted { draws, horizon } => {
                write!(
                    f,
                    "draw budget exhausted: {draws} draws without passing horizon {horizon}"
                )
            }
        }
    }
}

impl std::error::Error for RenewalError {}

impl From<DistributionError> for RenewalError {
    fn from(err: DistributionError) -> Self {
        let DistributionError::InvalidParameters(msg) = err;
        RenewalError::InvalidParameters(msg)
    }
}

fn validate_horizon(horizon: f64) -> Result<(), RenewalError> {
    if !horizon.is_finite() || horizon <= 0.0 {
        return Err(RenewalError::InvalidParameters(format!(
            "horizon must be finite and > 0, got {horizon}"
        )));
    }
    Ok(())
}

// ============================================================================
// Arrival times and the counting statistic
// ============================================================================

/// Cumulative-sums interarrival times into arrival times.
///
/// For non-negative input the result is non-decreasing; it is strictly
/// increasing when every entry is positive (floating-point addition of
/// non-negative terms never decreases the running sum).
///
/// # Examples
/// ```
/// use renewal_mc::renewal::arrival_times;
/// assert_eq!(arrival_times(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
/// ```
pub fn arrival_times(interarrivals: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(interarrivals.len());
    let mut sum = 0.0;
    for &x in interarrivals {
        sum += x;
        out.push(sum);
    }
    out
}

/// Counts the arrivals at or before `horizon` in one realization.
///
/// Returns the unique N with S[N] ≤ horizon < S[N+1], where S is the
/// partial-sum sequence of `interarrivals` and S[0] = 0. An arrival
/// exactly at the horizon counts.
///
/// # Returns
/// - `None` if every partial sum is ≤ horizon, i.e. the supplied draws do
///   not carry the process past the horizon. This is the typed NotFound
///   outcome the adaptive budget in [`simulate_one`] recovers from.
///
/// # Examples
/// ```
/// use renewal_mc::renewal::counting_statistic;
/// // Arrivals at 0.5, 1.0, 1.5: two of them are ≤ 1.2
/// assert_eq!(counting_statistic(&[0.5, 0.5, 0.5], 1.2), Some(2));
/// // All three partial sums stay below 10: undecidable from these draws
/// assert_eq!(counting_statistic(&[0.5, 0.5, 0.5], 10.0), None);
/// ```
pub fn counting_statistic(interarrivals: &[f64], horizon: f64) -> Option<u64> {
    let mut sum = 0.0;
    let mut count = 0u64;
    for &x in interarrivals {
        sum += x;
        if sum > horizon {
            return Some(count);
        }
        count += 1;
    }
    None
}

// ============================================================================
// Single-realization simulation
// ============================================================================

/// Simulates one renewal-process realization and returns N(horizon).
///
/// Draws interarrival times from `family`, accumulating the arrival time
/// and count, until the cumulative sum first exceeds `horizon`.
/// `max_draws` is the initial draw budget; when it is exhausted before
/// the horizon is passed, the budget doubles and the *same* realization
/// continues with fresh draws (the partial sum is kept, so the count is
/// exact and, for a fixed seed, independent of the initial budget).
///
/// # Errors
/// - [`RenewalError::InvalidParameters`] if `horizon` is not finite and
///   positive or `max_draws` is 0. No draws are consumed in that case.
/// - [`RenewalError::BudgetExhausted`] if [`MAX_TOTAL_DRAWS`] draws did
///   not carry the process past the horizon.
///
/// # Determinism
/// The count is a pure function of `family`, `horizon`, and the state of
/// `rng`; a seeded source yields identical results on every run.
///
/// # Examples
/// ```
/// use renewal_mc::distributions::{Exponential, Interarrival};
/// use renewal_mc::random::create_rng;
/// use renewal_mc::renewal::simulate_one;
///
/// let family = Interarrival::Exponential(Exponential::new(2.0).unwrap());
/// let a = simulate_one(&family, 5.0, 64, &mut create_rng(1)).unwrap();
/// let b = simulate_one(&family, 5.0, 64, &mut create_rng(1)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn simulate_one<R: Rng>(
    family: &Interarrival,
    horizon: f64,
    max_draws: usize,
    rng: &mut R,
) -> Result<u64, RenewalError> {
    validate_horizon(horizon)?;
    if max_draws == 0 {
        return Err(RenewalError::InvalidParameters(
            "draw budget must be at least 1".into(),
        ));
    }

    let mut budget = max_draws.min(MAX_TOTAL_DRAWS);
    let mut drawn = 0usize;
    let mut sum = 0.0;
    let mut count = 0u64;
    loop {
        while drawn < budget {
            sum += family.sample(rng);
            drawn += 1;
            if sum > horizon {
                return Ok(count);
            }
            count += 1;
        }
        if budget >= MAX_TOTAL_DRAWS {
            return Err(RenewalError::BudgetExhausted {
                draws: drawn,
                horizon,
            });
        }
        budget = (budget * 2).min(MAX_TOTAL_DRAWS);
    }
}

// ============================================================================
// Replication
// ============================================================================

/// The counting statistics of independent replications, with derived
/// summary statistics.
///
/// Produced by [`replicate`]; immutable thereafter. Any presentation
/// layer consumes the accessors, never the other way around.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicationSample {
    counts: Vec<u64>,
    horizon: f64,
}

impl ReplicationSample {
    /// The counting statistic of each replication, in simulation order.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// The horizon all replications were simulated to.
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Number of replications.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sample mean of N(T), or `None` if the sample is empty.
    pub fn mean(&self) -> Option<f64> {
        self.accumulate().mean()
    }

    /// Unbiased sample variance of N(T), or `None` for fewer than two
    /// replications.
    pub fn variance(&self) -> Option<f64> {
        self.accumulate().sample_variance()
    }

    /// Sample standard deviation of N(T).
    pub fn std_dev(&self) -> Option<f64> {
        self.accumulate().sample_std_dev()
    }

    /// The law-of-large-numbers statistic mean(N(T)) / T.
    ///
    /// Converges to 1/μ (μ the interarrival mean) as T grows.
    pub fn rate_estimate(&self) -> Option<f64> {
        self.mean().map(|m| m / self.horizon)
    }

    /// Occurrence counts per value of N(T): entry `k` is the number of
    /// replications that observed exactly `k` arrivals.
    ///
    /// The vector extends to the largest observed count; values beyond it
    /// were never observed.
    pub fn histogram(&self) -> Vec<u64> {
        let Some(&max) = self.counts.iter().max() else {
            return Vec::new();
        };
        let mut hist = vec![0u64; max as usize + 1];
        for &c in &self.counts {
            hist[c as usize] += 1;
        }
        hist
    }

    /// Empirical pmf of N(T): entry `k` is the observed frequency of
    /// exactly `k` arrivals, normalized by the replication count.
    ///
    /// Sums to 1 over the returned entries.
    ///
    /// # Examples
    /// ```
    /// use renewal_mc::distributions::{Exponential, Interarrival};
    /// use renewal_mc::random::create_rng;
    /// use renewal_mc::renewal::replicate;
    ///
    /// let family = Interarrival::Exponential(Exponential::new(1.0).unwrap());
    /// let sample = replicate(&family, 3.0, 1_000, 32, &mut create_rng(7)).unwrap();
    /// let pmf = sample.empirical_pmf();
    /// let total: f64 = pmf.iter().sum();
    /// assert!((total - 1.0).abs() < 1e-12);
    /// ```
    pub fn empirical_pmf(&self) -> Vec<f64> {
        let n = self.counts.len() as f64;
        self.histogram()
            .into_iter()
            .map(|occurrences| occurrences as f64 / n)
            .collect()
    }

    fn accumulate(&self) -> WelfordAccumulator {
        let mut acc = WelfordAccumulator::new();
        for &c in &self.counts {
            acc.update(c as f64);
        }
        acc
    }
}

/// Runs `replications` independent renewal simulations and collects the
/// counting statistics.
///
/// Each replication is a fresh call to [`simulate_one`] consuming the
/// shared random source; no other state crosses replication boundaries.
/// Parameters are validated eagerly: on error, no sampling happens and
/// the random source is untouched.
///
/// # Errors
/// - [`RenewalError::InvalidParameters`] for a non-positive or non-finite
///   horizon, zero replications, or a zero draw budget.
/// - [`RenewalError::BudgetExhausted`] if any replication hits the draw
///   ceiling.
pub fn replicate<R: Rng>(
    family: &Interarrival,
    horizon: f64,
    replications: usize,
    max_draws: usize,
    rng: &mut R,
) -> Result<ReplicationSample, RenewalError> {
    validate_horizon(horizon)?;
    if replications == 0 {
        return Err(RenewalError::InvalidParameters(
            "replication count must be at least 1".into(),
        ));
    }
    if max_draws == 0 {
        return Err(RenewalError::InvalidParameters(
            "draw budget must be at least 1".into(),
        ));
    }

    let mut counts = Vec::with_capacity(replications);
    for _ in 0..replications {
        counts.push(simulate_one(family, horizon, max_draws, rng)?);
    }
    Ok(ReplicationSample { counts, horizon })
}

// ============================================================================
// Asymptotic statistics
// ============================================================================

/// The studentized counting statistic of the renewal central limit theorem.
///
/// ```text
/// Z = (N(T) − T/μ) / (σ·√(T/μ³))
/// ```
///
/// where μ and σ are the mean and standard deviation of one interarrival
/// time. As T → ∞, Z is asymptotically standard normal for any
/// finite-variance interarrival law.
///
/// `horizon` must be positive and `family` must have positive mean;
/// both hold for anything that came out of a successful simulation.
pub fn studentized_count(count: u64, horizon: f64, family: &Interarrival) -> f64 {
    let mu = family.mean();
    let sigma = family.std_dev();
    let scale = sigma * (horizon / (mu * mu * mu)).sqrt();
    (count as f64 - horizon / mu) / scale
}

/// Summary of a geometric renewal experiment: empirical counting
/// statistics next to the closed-form interarrival moments they are
/// checked against.
///
/// Supports the law-of-large-numbers check
/// (`rate_estimate` → `theoretical_rate` as T grows) and, through
/// [`studentized_count`], the central-limit-theorem check.
#[derive(Debug, Clone)]
pub struct GeometricRenewalReport {
    success_probability: f64,
    interarrival_mean: f64,
    interarrival_std_dev: f64,
    empirical_mean: f64,
    empirical_std_dev: f64,
    sample: ReplicationSample,
}

impl GeometricRenewalReport {
    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    /// Theoretical interarrival mean μ = (1−p)/p.
    pub fn interarrival_mean(&self) -> f64 {
        self.interarrival_mean
    }

    /// Theoretical interarrival standard deviation σ = √((1−p)/p²).
    pub fn interarrival_std_dev(&self) -> f64 {
        self.interarrival_std_dev
    }

    /// Sample mean of N(T) across replications.
    pub fn empirical_mean(&self) -> f64 {
        self.empirical_mean
    }

    /// Sample standard deviation of N(T) across replications.
    pub fn empirical_std_dev(&self) -> f64 {
        self.empirical_std_dev
    }

    /// mean(N(T)) / T, the empirical renewal rate.
    pub fn rate_estimate(&self) -> f64 {
        self.empirical_mean / self.sample.horizon()
    }

    /// 1/μ, the rate the law of large numbers converges to.
    pub fn theoretical_rate(&self) -> f64 {
        1.0 / self.interarrival_mean
    }

    /// The underlying replication sample.
    pub fn sample(&self) -> &ReplicationSample {
        &self.sample
    }
}

/// Runs a geometric renewal experiment and reports empirical against
/// theoretical statistics.
///
/// Identical in structure to [`replicate`] with geometric interarrival
/// draws, packaged with the closed-form interarrival moments so the
/// law-of-large-numbers and central-limit-theorem checks read directly
/// off the report.
///
/// # Errors
/// - [`RenewalError::InvalidParameters`] if `p` is outside `(0, 1]`, the
///   horizon is invalid, the draw budget is 0, or `replications < 2`
///   (the report carries a standard deviation).
/// - [`RenewalError::BudgetExhausted`] if the ceiling is hit; with
///   `p = 1` every draw is 0 and a positive horizon is never passed, so
///   the degenerate case lands here by construction.
///
/// # Examples
/// ```
/// use renewal_mc::random::create_rng;
/// use renewal_mc::renewal::geometric_renewal;
///
/// let mut rng = create_rng(42);
/// let report = geometric_renewal(0.6, 50.0, 200, 256, &mut rng).unwrap();
/// // μ = (1−p)/p = 2/3, so N(T)/T should be near 1.5
/// assert!((report.rate_estimate() - report.theoretical_rate()).abs() < 0.3);
/// ```
pub fn geometric_renewal<R: Rng>(
    p: f64,
    horizon: f64,
    replications: usize,
    max_draws: usize,
    rng: &mut R,
) -> Result<GeometricRenewalReport, RenewalError> {
    let dist = Geometric::new(p)?;
    validate_horizon(horizon)?;
    if replications < 2 {
        return Err(RenewalError::InvalidParameters(
            "geometric renewal report requires at least 2 replications".into(),
        ));
    }

    let interarrival_mean = dist.mean();
    let interarrival_std_dev = dist.std_dev();
    let family = Interarrival::Geometric(dist);
    let sample = replicate(&family, horizon, replications, max_draws, rng)?;

    // len ≥ 2, so mean and std_dev are always present
    let empirical_mean = sample.mean().unwrap_or(0.0);
    let empirical_std_dev = sample.std_dev().unwrap_or(0.0);

    Ok(GeometricRenewalReport {
        success_probability: p,
        interarrival_mean,
        interarrival_std_dev,
        empirical_mean,
        empirical_std_dev,
        sample,
    })
}

// ============================================================================
// Tests
// ============================================================================
