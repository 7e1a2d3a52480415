use kmeans_core::Observer;

use crate::traits::{CanStopEarly, HasVariance};

/// Stops the search once a candidate's variance is at or below a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetVariance {
    target: f64,
}

impl TargetVariance {
    /// Creates an observer that accepts any candidate with variance `<= target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    /// Returns the target variance.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<E: HasVariance, A: CanStopEarly> Observer<E, A> for TargetVariance {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.variance() <= self.target).then(A::stop_early)
    }
}
