use kmeans_core::{Number, Observation, math};

use crate::ObservationList;

/// A center and the observations that gravitate around it.
///
/// The center starts as a copy of a seed observation. Each [`append`] keeps it
/// at the mean of every member appended so far, using a running per-axis sum.
/// [`recenter`] recomputes it from the full member list instead.
///
/// [`append`]: Cluster::append
/// [`recenter`]: Cluster::recenter
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<T, O> {
    center: Option<Vec<T>>,
    observations: ObservationList<O>,
    sum: Vec<f64>,
}

impl<T, O> Cluster<T, O>
where
    T: Number,
    O: Observation<T>,
{
    /// Creates an empty cluster centered on a copy of `seed`.
    pub fn new<S>(seed: &S, degree: usize) -> Self
    where
        S: Observation<T> + ?Sized,
    {
        Self {
            center: Some((0..degree).map(|axis| seed.value(axis)).collect()),
            observations: ObservationList::new(degree),
            sum: vec![0.0; degree],
        }
    }

    /// Creates an empty cluster with no center.
    #[must_use]
    pub fn unseeded(degree: usize) -> Self {
        Self {
            center: None,
            observations: ObservationList::new(degree),
            sum: vec![0.0; degree],
        }
    }

    /// Returns the current center, or `None` after a [`reset`](Self::reset).
    #[must_use]
    pub fn center(&self) -> Option<&[T]> {
        self.center.as_deref()
    }

    /// Returns the assigned observations.
    #[must_use]
    pub fn observations(&self) -> &ObservationList<O> {
        &self.observations
    }

    /// Number of values in each observation.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.observations.degree()
    }

    /// Returns the number of assigned observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns `true` if nothing is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Assigns `observation` and moves the center to the mean of all members.
    pub fn append(&mut self, observation: O) {
        for (axis, total) in self.sum.iter_mut().enumerate() {
            *total += observation.value(axis).to_f64();
        }
        self.observations.push(observation);

        #[allow(clippy::cast_precision_loss)]
        let n = self.observations.len() as f64;
        self.center = Some(self.sum.iter().map(|s| T::from_f64(s / n)).collect());
    }

    /// Recomputes the center as the mean of the current members.
    ///
    /// Leaves the center untouched when the cluster is empty.
    pub fn recenter(&mut self) {
        if let Ok(center) = math::center(self.observations.iter(), self.degree()) {
            self.center = Some(center);
        }
    }

    /// Removes every member and clears the center.
    ///
    /// The degree is kept so the cluster can be reused.
    pub fn reset(&mut self) {
        self.observations.clear();
        self.center = None;
        self.sum.fill(0.0);
    }

    /// Returns the member closest to the center.
    ///
    /// Ties go to the earliest assigned member. Without a center the first
    /// member is returned; an empty cluster returns `None`.
    #[must_use]
    pub fn most_central(&self) -> Option<&O> {
        let Some(center) = self.center.as_deref() else {
            return self.observations.as_slice().first();
        };

        let degree = self.degree();
        let mut best: Option<(&O, f64)> = None;
        for o in &self.observations {
            let d = math::distance(o, center, degree);
            if best.is_none_or(|(_, closest)| d < closest) {
                best = Some((o, d));
            }
        }
        best.map(|(o, _)| o)
    }

    /// Returns the sum of squared distances from each member to the center.
    ///
    /// An empty or unseeded cluster contributes `0.0`.
    #[must_use]
    pub fn sum_of_distance(&self) -> f64 {
        let Some(center) = self.center.as_deref() else {
            return 0.0;
        };

        let degree = self.degree();
        self.observations
            .iter()
            .map(|o| math::distance(o, center, degree))
            .sum()
    }
}
