//! Capability traits for cluster search observers.
//!
//! These traits abstract over the search's event and action types, so an
//! observer can be written once and tested against lightweight stand-ins.
//!
//! # Example
//!
//! ```rust
//! use kmeans_core::Observer;
//! use kmeans_observers::traits::{CanStopEarly, HasVariance};
//!
//! struct FirstImprovementAfter {
//!     warmup: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasVariance, A: CanStopEarly> Observer<E, A> for FirstImprovementAfter {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.seen += 1;
//!         (self.seen > self.warmup && event.is_improvement()).then(A::stop_early)
//!     }
//! }
//! ```

use kmeans_clustering::optimize;

/// An event that carries a candidate's variance.
pub trait HasVariance {
    /// Returns the total variance of the candidate.
    fn variance(&self) -> f64;

    /// Returns the lowest variance seen before this candidate.
    fn best(&self) -> Option<f64>;

    /// Returns `true` if the candidate beats every earlier one.
    fn is_improvement(&self) -> bool {
        self.best().is_none_or(|best| self.variance() < best)
    }
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

impl<T, O> HasVariance for optimize::Event<'_, T, O> {
    fn variance(&self) -> f64 {
        self.variance
    }

    fn best(&self) -> Option<f64> {
        self.best
    }

    fn is_improvement(&self) -> bool {
        optimize::Event::is_improvement(self)
    }
}

impl CanStopEarly for optimize::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

/// Lightweight event and action stand-ins shared by this crate's tests.
#[cfg(test)]
pub(crate) mod fakes {
    use super::{CanStopEarly, HasVariance};

    #[derive(Debug, Clone, Copy)]
    pub(crate) struct Scored {
        pub(crate) variance: f64,
        pub(crate) best: Option<f64>,
    }

    impl HasVariance for Scored {
        fn variance(&self) -> f64 {
            self.variance
        }

        fn best(&self) -> Option<f64> {
            self.best
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    pub(crate) struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    /// Builds the events a search would emit for these variances.
    pub(crate) fn events(variances: &[f64]) -> Vec<Scored> {
        let mut best: Option<f64> = None;
        variances
            .iter()
            .map(|&variance| {
                let event = Scored { variance, best };
                best = Some(best.map_or(variance, |b| b.min(variance)));
                event
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use kmeans_clustering::{Clusters, optimize::Strategy};

    use super::{fakes::events, *};

    #[test]
    fn first_event_is_an_improvement() {
        let scored = events(&[5.0, 5.0, 4.0]);
        let flags: Vec<bool> = scored.iter().map(HasVariance::is_improvement).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn search_event_reports_its_scores() {
        let clusters: Clusters<f64, &[f64; 1]> = Clusters::from(Vec::new());
        let event = optimize::Event {
            trial: 3,
            variance: 2.5,
            best: Some(3.0),
            strategy: Strategy::Randomized,
            clusters: &clusters,
        };

        assert_eq!(HasVariance::variance(&event), 2.5);
        assert_eq!(HasVariance::best(&event), Some(3.0));
        assert!(HasVariance::is_improvement(&event));
    }

    #[test]
    fn search_action_stops_early() {
        assert_eq!(optimize::Action::stop_early(), optimize::Action::StopEarly);
    }
}
