use kmeans_core::{Error, Number, Observation, Observations, Observer};
use rand::Rng;
use tracing::{debug, warn};

use crate::{Cluster, Clusters, seed};

use super::{
    Action, Config, Event, Solution, Status, Strategy,
    candidates::{Permutations, permutation_count},
    state::{Flow, State},
};

/// Core search implementation shared by the public entry points.
pub(super) fn search<'a, T, D, R, Obs>(
    k: usize,
    dataset: &'a D,
    config: &Config,
    rng: &mut R,
    mut observer: Obs,
) -> Result<Solution<T, D::Item<'a>>, Error>
where
    T: Number,
    D: Observations<T>,
    R: Rng,
    Obs: for<'e> Observer<Event<'e, T, D::Item<'a>>, Action>,
{
    seed::validate(k, dataset)?;

    let plan = choose_plan(k, dataset, config);
    debug!(
        k,
        strategy = ?plan.strategy(),
        candidates = plan.candidates(),
        "starting cluster search"
    );

    let mut state = State::new(plan.strategy());
    let mut status = Status::Complete;

    match plan {
        Plan::Exhaustive { items, k, .. } => {
            for indices in Permutations::new(items.len(), k) {
                let seeds = indices.iter().map(|&i| &items[i]);
                let candidate = assign_from_seeds(dataset, seeds);
                if state.consider(candidate, &mut observer) == Flow::Stop {
                    status = Status::StoppedByObserver;
                    break;
                }
            }
        }
        Plan::Randomized { trials } => {
            for _ in 0..trials {
                let seeds = seed::select_random(dataset, k, rng);
                let candidate = assign_from_seeds(dataset, seeds.iter());
                if state.consider(candidate, &mut observer) == Flow::Stop {
                    status = Status::StoppedByObserver;
                    break;
                }
            }
        }
    }

    let solution = state.into_solution(status)?;
    debug!(
        trials = solution.trials,
        variance = solution.variance,
        status = ?solution.status,
        "cluster search finished"
    );
    Ok(solution)
}

/// Seeds one cluster per seed, then places every observation in one pass.
fn assign_from_seeds<'a, T, D, S, I>(dataset: &'a D, seeds: I) -> Clusters<T, D::Item<'a>>
where
    T: Number,
    D: Observations<T>,
    S: Observation<T>,
    I: IntoIterator<Item = S>,
{
    let degree = dataset.degree();
    let mut clusters: Clusters<T, D::Item<'a>> = seeds
        .into_iter()
        .map(|seed| Cluster::new(&seed, degree))
        .collect();
    clusters.assign(dataset.observations());
    clusters
}

/// Decides between exhaustive and randomized candidate generation.
fn choose_plan<'a, T, D>(k: usize, dataset: &'a D, config: &Config) -> Plan<D::Item<'a>>
where
    T: Number,
    D: Observations<T>,
{
    let randomized = Plan::Randomized {
        trials: config.trials_per_cluster().saturating_mul(k),
    };
    if k >= config.exhaustive_below() {
        return randomized;
    }

    let items: Vec<D::Item<'a>> = dataset.observations().collect();
    let k = k.min(items.len());
    let count = permutation_count(items.len(), k).unwrap_or(usize::MAX);

    match config.max_exhaustive_candidates() {
        Some(limit) if count > limit => {
            warn!(
                count,
                limit,
                "exhaustive cluster search exceeds candidate limit, using random seeds"
            );
            randomized
        }
        _ => Plan::Exhaustive { items, k, count },
    }
}

/// How candidates will be generated for one search.
enum Plan<I> {
    /// Enumerate every ordered `k`-permutation of the materialized dataset.
    Exhaustive { items: Vec<I>, k: usize, count: usize },

    /// Draw `trials` reservoir samples.
    Randomized { trials: usize },
}

impl<I> Plan<I> {
    fn strategy(&self) -> Strategy {
        match self {
            Self::Exhaustive { .. } => Strategy::Exhaustive,
            Self::Randomized { .. } => Strategy::Randomized,
        }
    }

    fn candidates(&self) -> usize {
        match self {
            Self::Exhaustive { count, .. } => *count,
            Self::Randomized { trials } => *trials,
        }
    }
}
