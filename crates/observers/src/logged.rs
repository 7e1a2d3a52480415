use kmeans_core::Observer;
use tracing::{debug, trace};

use crate::traits::HasVariance;

/// Wraps an observer and reports every candidate to `tracing`.
///
/// Each scored candidate is logged at `trace`, improvements at `debug`. The
/// wrapped observer still decides whether the search continues; use
/// `Logged::new(())` to log without steering.
#[derive(Debug, Clone, Default)]
pub struct Logged<Obs> {
    inner: Obs,
    seen: usize,
}

impl<Obs> Logged<Obs> {
    /// Wraps `inner`, which still decides whether the search continues.
    #[must_use]
    pub fn new(inner: Obs) -> Self {
        Self { inner, seen: 0 }
    }

    /// Returns the number of candidates observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Returns the wrapped observer.
    #[must_use]
    pub fn inner(&self) -> &Obs {
        &self.inner
    }

    /// Unwraps the logger, returning the wrapped observer.
    pub fn into_inner(self) -> Obs {
        self.inner
    }
}

impl<E, A, Obs> Observer<E, A> for Logged<Obs>
where
    E: HasVariance,
    Obs: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let candidate = self.seen;
        self.seen += 1;

        let variance = event.variance();
        trace!(candidate, variance, best = ?event.best(), "scored candidate");
        if event.is_improvement() {
            debug!(candidate, variance, "improved clustering");
        }

        let action = self.inner.observe(event);
        if action.is_some() {
            debug!(candidate, "observer ended the search");
        }
        action
    }
}
