//! # renewal-mc
//!
//! Monte Carlo estimation for renewal processes.
//!
//! A renewal process is a sequence of event times obtained by summing
//! independent, identically distributed non-negative interarrival times.
//! This crate simulates such processes up to a horizon `T`, counts the
//! arrivals in `(0, T]` (the counting statistic `N(T)`), and replicates
//! independently to estimate the distribution of `N(T)`: its empirical
//! pmf, mean, and variance.
//!
//! ## Modules
//!
//! - [`renewal`]: the core simulation, single-realization counting with an
//!   adaptive draw budget, independent replication, and summary statistics
//! - [`distributions`]: parameter-validated interarrival families
//!   (exponential, lognormal, geometric) and the Poisson oracle
//! - [`stats`]: descriptive statistics with numerical stability guarantees
//! - [`random`]: seeded RNG construction and normal deviates
//! - [`special`]: the special functions backing quantiles and
//!   goodness-of-fit checks
//!
//! ## Design Philosophy
//!
//! - **Explicit parameters, no ambient state**: every simulation call takes
//!   its distribution, horizon, and random source as arguments; nothing
//!   survives between calls
//! - **No silent sentinels**: a realization that fails to pass the horizon
//!   within the draw budget is a typed outcome, recovered by doubling the
//!   budget up to a hard ceiling and reported as an error beyond it
//! - **Oracles over eyeballs**: the exponential case is checked against the
//!   Poisson(λT) closed form, the geometric case against the renewal law of
//!   large numbers and central limit theorem
//!
//! ## Example
//!
//! ```
//! use renewal_mc::distributions::{Exponential, Interarrival};
//! use renewal_mc::random::create_rng;
//! use renewal_mc::renewal::replicate;
//!
//! // A Poisson process with rate 2 observed up to T = 5: N(T) ~ Poisson(10).
//! let family = Interarrival::Exponential(Exponential::new(2.0).unwrap());
//! let mut rng = create_rng(42);
//! let sample = replicate(&family, 5.0, 2_000, 64, &mut rng).unwrap();
//! let mean = sample.mean().unwrap();
//! assert!((mean - 10.0).abs() < 1.0);
//! ```

pub mod distributions;
pub mod random;
pub mod renewal;
pub mod special;
pub mod stats;
