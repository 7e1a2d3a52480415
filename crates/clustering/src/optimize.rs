//! Multi-start search for low-variance clusterings.
//!
//! # Algorithm
//!
//! A single k-means seeding is sensitive to where its initial centers land.
//! The search scores many candidate seed sets and keeps the one whose
//! clusters have the lowest [`Clusters::sum_cluster_variance`].
//!
//! Each candidate is scored from exactly one assignment pass: seed `k`
//! clusters, then append every observation to its nearest seed. There is no
//! refinement loop, so the result is the best one-shot assignment found, not
//! a converged Lloyd's iteration.
//!
//! # Candidate generation
//!
//! - **Exhaustive** (`k < exhaustive_below`, default 3): every ordered
//!   k-permutation of the dataset is tried, `n!/(n-k)!` candidates of
//!   `O(n·k·degree)` each. Meant for small datasets; there is no size guard
//!   unless [`Config::with_max_exhaustive_candidates`] sets one.
//! - **Randomized** (otherwise): `trials_per_cluster * k` (default `1000 * k`)
//!   independent reservoir samples.
//!
//! Ties keep the first candidate found.
//!
//! # Observer Events
//!
//! The search emits one [`Event`] per scored candidate. Observers can return
//! [`Action::StopEarly`] to end the search after that candidate.
//!
//! [`Clusters::sum_cluster_variance`]: crate::Clusters::sum_cluster_variance

mod action;
mod candidates;
mod config;
mod event;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_EXHAUSTIVE_BELOW, DEFAULT_TRIALS_PER_CLUSTER};
pub use event::Event;
pub use solution::{Solution, Status, Strategy};

use kmeans_core::{Error, Number, Observations, Observer};
use rand::Rng;

use crate::Clusters;

use search::search;

/// Searches for the lowest-variance clustering of `dataset` into `k` clusters.
///
/// The observer receives an [`Event`] for each scored candidate.
/// See the [module docs](self) for how candidates are generated.
///
/// # Errors
///
/// Returns [`Error::KMustBeGreaterThanZero`] if `k` is zero, and
/// [`Error::EmptyObservations`] if the dataset has no axes or no observations.
pub fn optimize<'a, T, D, R, Obs>(
    k: usize,
    dataset: &'a D,
    config: &Config,
    rng: &mut R,
    observer: Obs,
) -> Result<Solution<T, D::Item<'a>>, Error>
where
    T: Number,
    D: Observations<T>,
    R: Rng,
    Obs: for<'e> Observer<Event<'e, T, D::Item<'a>>, Action>,
{
    search(k, dataset, config, rng, observer)
}

/// Searches for the lowest-variance clustering without observer support.
///
/// This is a convenience wrapper around [`optimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::KMustBeGreaterThanZero`] if `k` is zero, and
/// [`Error::EmptyObservations`] if the dataset has no axes or no observations.
pub fn optimize_unobserved<'a, T, D, R>(
    k: usize,
    dataset: &'a D,
    config: &Config,
    rng: &mut R,
) -> Result<Solution<T, D::Item<'a>>, Error>
where
    T: Number,
    D: Observations<T>,
    R: Rng,
{
    optimize(k, dataset, config, rng, ())
}

/// Returns the lowest-variance clustering found with the default [`Config`].
///
/// Uses a thread-local random number generator for the randomized search.
///
/// # Errors
///
/// Returns [`Error::KMustBeGreaterThanZero`] if `k` is zero, and
/// [`Error::EmptyObservations`] if the dataset has no axes or no observations.
pub fn optimize_clusters<T, D>(k: usize, dataset: &D) -> Result<Clusters<T, D::Item<'_>>, Error>
where
    T: Number,
    D: Observations<T>,
{
    optimize_unobserved(k, dataset, &Config::default(), &mut rand::rng())
        .map(|solution| solution.clusters)
}
