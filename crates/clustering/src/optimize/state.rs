use kmeans_core::{Error, Number, Observation, Observer};

use crate::Clusters;

use super::{Action, Event, Solution, Status, Strategy};

/// Tracks the best candidate seen so far.
pub(super) struct State<T, O> {
    strategy: Strategy,
    best: Option<(Clusters<T, O>, f64)>,
    trials: usize,
}

/// Whether the search should keep scoring candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Stop,
}

impl<T, O> State<T, O>
where
    T: Number,
    O: Observation<T>,
{
    pub(super) fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            best: None,
            trials: 0,
        }
    }

    fn best_variance(&self) -> Option<f64> {
        self.best.as_ref().map(|(_, variance)| *variance)
    }

    /// Scores a candidate, reports it to the observer, and keeps it if best.
    ///
    /// Ties keep the earlier candidate.
    pub(super) fn consider<Obs>(&mut self, candidate: Clusters<T, O>, observer: &mut Obs) -> Flow
    where
        Obs: for<'a> Observer<Event<'a, T, O>, Action>,
    {
        let variance = candidate.sum_cluster_variance();
        let event = Event {
            trial: self.trials,
            variance,
            best: self.best_variance(),
            strategy: self.strategy,
            clusters: &candidate,
        };
        let action = observer.observe(&event);
        let improved = event.is_improvement();

        self.trials += 1;
        if improved {
            tracing::trace!(trial = self.trials - 1, variance, "new best candidate");
            self.best = Some((candidate, variance));
        }

        match action {
            Some(Action::StopEarly) => Flow::Stop,
            None => Flow::Continue,
        }
    }

    /// Converts the best candidate into a solution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyObservations`] if no candidate was scored.
    pub(super) fn into_solution(self, status: Status) -> Result<Solution<T, O>, Error> {
        let (clusters, variance) = self.best.ok_or(Error::EmptyObservations)?;
        Ok(Solution {
            status,
            strategy: self.strategy,
            clusters,
            variance,
            trials: self.trials,
        })
    }
}
