use crate::Number;

/// A single data point with one value per axis.
///
/// The length and meaning of each axis is the same for every observation in a
/// set. Callers either implement this trait on their own types or wrap them.
/// The engine reads values but never modifies them.
pub trait Observation<T: Number> {
    /// Returns the value on `axis`, where `axis < degree`.
    fn value(&self, axis: usize) -> T;
}

/// A collection of observations exposed as a restartable sequence.
///
/// Every call to [`Observations::observations`] must start again from the
/// first element. The engine walks the same collection several times (once
/// for ranges, once per search candidate), so one-shot sources are not
/// supported.
pub trait Observations<T: Number> {
    /// The handle yielded for each observation.
    ///
    /// Handles are cloned into clusters, so they should be cheap: a reference
    /// for borrowed data, or a small owned vector for computed data.
    type Item<'a>: Observation<T> + Clone
    where
        Self: 'a;

    /// Returns a fresh iterator over the collection.
    fn observations(&self) -> impl Iterator<Item = Self::Item<'_>>;

    /// Number of values in each observation.
    fn degree(&self) -> usize;
}

impl<T: Number> Observation<T> for [T] {
    #[inline]
    fn value(&self, axis: usize) -> T {
        self[axis]
    }
}

impl<T: Number, const N: usize> Observation<T> for [T; N] {
    #[inline]
    fn value(&self, axis: usize) -> T {
        self[axis]
    }
}

impl<T: Number> Observation<T> for Vec<T> {
    #[inline]
    fn value(&self, axis: usize) -> T {
        self[axis]
    }
}

impl<T, O> Observation<T> for &O
where
    T: Number,
    O: Observation<T> + ?Sized,
{
    #[inline]
    fn value(&self, axis: usize) -> T {
        (**self).value(axis)
    }
}
