use crate::{Number, Observation, Observations};

use super::NormalizeAdapter;

/// A normalized copy of an observation that remembers where it came from.
///
/// `original` is the handle the source yielded. For a borrowed source such as
/// [`Dataset`](crate::Dataset) it is a reference, so the source must outlive
/// every normalized view built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedObservation<O> {
    values: Vec<f64>,
    original: O,
}

impl<O> NormalizedObservation<O> {
    /// Returns the normalized values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the observation this copy was normalized from.
    #[must_use]
    pub fn original(&self) -> &O {
        &self.original
    }
}

impl<O> Observation<f64> for NormalizedObservation<O> {
    #[inline]
    fn value(&self, axis: usize) -> f64 {
        self.values[axis]
    }
}

/// An eagerly normalized set of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedObservations<O> {
    items: Vec<NormalizedObservation<O>>,
    degree: usize,
}

impl<O> NormalizedObservations<O> {
    /// Returns an iterator over the normalized observations.
    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedObservation<O>> {
        self.items.iter()
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<O> Observations<f64> for NormalizedObservations<O> {
    type Item<'a>
        = &'a NormalizedObservation<O>
    where
        Self: 'a;

    fn observations(&self) -> impl Iterator<Item = &NormalizedObservation<O>> {
        self.items.iter()
    }

    fn degree(&self) -> usize {
        self.degree
    }
}

/// Normalizes every observation in `dataset` onto `[0, 1]` per axis.
///
/// Walks the dataset twice: once to capture the per-axis range, once to build
/// the normalized copies. No scale is applied.
pub fn normalize_observations<'a, T, D>(dataset: &'a D) -> NormalizedObservations<D::Item<'a>>
where
    T: Number,
    D: Observations<T>,
{
    let adapter = NormalizeAdapter::new(dataset);
    let items = dataset
        .observations()
        .map(|original| NormalizedObservation {
            values: adapter.normalize(&original),
            original,
        })
        .collect();

    NormalizedObservations {
        items,
        degree: dataset.degree(),
    }
}
