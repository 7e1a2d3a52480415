use kmeans_core::{Number, Observation, Observations};

/// The observations currently assigned to one [`Cluster`](crate::Cluster).
///
/// The list holds the handles the dataset yielded (references for borrowed
/// data), never copies of the underlying values. It only grows through
/// [`Cluster::append`](crate::Cluster::append) and is emptied by
/// [`Cluster::reset`](crate::Cluster::reset).
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationList<O> {
    items: Vec<O>,
    degree: usize,
}

impl<O> ObservationList<O> {
    /// Creates an empty list for observations with `degree` axes.
    #[must_use]
    pub fn new(degree: usize) -> Self {
        Self {
            items: Vec::new(),
            degree,
        }
    }

    /// Number of values in each observation.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the number of assigned observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the assigned observations in assignment order.
    #[must_use]
    pub fn as_slice(&self) -> &[O] {
        &self.items
    }

    /// Returns an iterator over the assigned observations.
    pub fn iter(&self) -> std::slice::Iter<'_, O> {
        self.items.iter()
    }

    pub(crate) fn push(&mut self, observation: O) {
        self.items.push(observation);
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a, O> IntoIterator for &'a ObservationList<O> {
    type Item = &'a O;
    type IntoIter = std::slice::Iter<'a, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A cluster's members can be walked like any other observation set, for
/// example to normalize or sub-cluster them.
impl<T, O> Observations<T> for ObservationList<O>
where
    T: Number,
    O: Observation<T>,
{
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
