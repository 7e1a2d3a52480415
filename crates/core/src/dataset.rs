use crate::{Number, Observation, Observations};

/// An owned set of observations with a fixed degree.
///
/// Iterating a `Dataset` yields references, so clusters built from it borrow
/// the original points rather than copying them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<O> {
    items: Vec<O>,
    degree: usize,
}

impl<O> Dataset<O> {
    /// Creates a dataset from observations that each have `degree` axes.
    #[must_use]
    pub fn new(items: Vec<O>, degree: usize) -> Self {
        Self { items, degree }
    }

    /// Number of values in each observation.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the observations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[O] {
        &self.items
    }

    /// Returns an iterator over the observations.
    pub fn iter(&self) -> std::slice::Iter<'_, O> {
        self.items.iter()
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the dataset has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Number> Dataset<Vec<T>> {
    /// Creates a dataset from rows of raw values.
    ///
    /// The degree is taken from the first row, or zero when there are no rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let degree = rows.first().map_or(0, Vec::len);
        Self::new(rows, degree)
    }
}

impl<T: Number, O: Observation<T>> Observations<T> for Dataset<O> {
    type Item<'a>
        = &'a O
    where
        Self: 'a;

    fn observations(&self) -> impl Iterator<Item = &O> {
        self.items.iter()
    }

    fn degree(&self) -> usize {
        self.degree
    }
}

impl<O> FromIterator<O> for Dataset<O>
where
    O: AsRef<[f64]>,
{
    /// Collects rows of `f64` values, taking the degree from the first row.
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        let items: Vec<O> = iter.into_iter().collect();
        let degree = items.first().map_or(0, |row| row.as_ref().len());
        Self::new(items, degree)
    }
}
