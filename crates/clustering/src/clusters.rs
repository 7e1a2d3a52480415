use std::ops::{Index, IndexMut};

use kmeans_core::{Number, Observation, math};

use crate::Cluster;

/// An ordered collection of clusters.
///
/// Order comes from seeding and only matters for breaking ties, which always
/// go to the lowest index.
#[derive(Debug, Clone, PartialEq)]
pub struct Clusters<T, O> {
    clusters: Vec<Cluster<T, O>>,
}

impl<T, O> Clusters<T, O> {
    /// Returns the number of clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns `true` if there are no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Returns the cluster at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Cluster<T, O>> {
        self.clusters.get(index)
    }

    /// Returns an iterator over the clusters.
    pub fn iter(&self) -> std::slice::Iter<'_, Cluster<T, O>> {
        self.clusters.iter()
    }

    /// Returns a mutable iterator over the clusters.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cluster<T, O>> {
        self.clusters.iter_mut()
    }
}

impl<T, O> Clusters<T, O>
where
    T: Number,
    O: Observation<T>,
{
    /// Returns the index of the cluster whose center is closest to `point`.
    ///
    /// Ties go to the lowest index. Clusters without a center are skipped;
    /// `None` means no cluster has one.
    pub fn nearest<P>(&self, point: &P) -> Option<usize>
    where
        P: Observation<T> + ?Sized,
    {
        let mut nearest: Option<(usize, f64)> = None;
        for (i, cluster) in self.clusters.iter().enumerate() {
            let Some(center) = cluster.center() else {
                continue;
            };
            let d = math::distance(point, center, cluster.degree());
            if nearest.is_none_or(|(_, closest)| d < closest) {
                nearest = Some((i, d));
            }
        }
        nearest.map(|(i, _)| i)
    }

    /// Returns the next best home for `point`, excluding cluster `from`.
    ///
    /// Clusters are ranked by the average distance from `point` to their
    /// current members, and the winner is returned with that average. An
    /// empty cluster averages to `0.0`. Returns `None` when there is no
    /// cluster other than `from`.
    pub fn neighbor<P>(&self, point: &P, from: usize) -> Option<(usize, f64)>
    where
        P: Observation<T> + ?Sized,
    {
        let mut neighbor: Option<(usize, f64)> = None;
        for (i, cluster) in self.clusters.iter().enumerate() {
            if i == from {
                continue;
            }
            let d = math::average_distance(point, cluster.observations(), cluster.degree());
            if neighbor.is_none_or(|(_, closest)| d < closest) {
                neighbor = Some((i, d));
            }
        }
        neighbor
    }

    /// Appends every observation to its [`nearest`](Self::nearest) cluster.
    ///
    /// Observations are dropped only if no cluster has a center.
    pub fn assign<I>(&mut self, observations: I)
    where
        I: IntoIterator<Item = O>,
    {
        for o in observations {
            if let Some(i) = self.nearest(&o) {
                self.clusters[i].append(o);
            }
        }
    }

    /// Recenters every cluster on the mean of its members.
    pub fn recenter_all(&mut self) {
        self.clusters.iter_mut().for_each(Cluster::recenter);
    }

    /// Clears every cluster's members and center.
    pub fn reset_all(&mut self) {
        self.clusters.iter_mut().for_each(Cluster::reset);
    }

    /// Returns the total of every cluster's [`Cluster::sum_of_distance`].
    ///
    /// This is the score the search minimizes. It is only comparable between
    /// seedings of the same dataset with the same number of clusters.
    #[must_use]
    pub fn sum_cluster_variance(&self) -> f64 {
        self.clusters.iter().map(Cluster::sum_of_distance).sum()
    }

    /// Returns the index of the cluster with the most members.
    #[must_use]
    pub fn largest(&self) -> Option<usize> {
        self.pick_by_len(|candidate, current| candidate > current)
    }

    /// Returns the index of the cluster with the fewest members.
    #[must_use]
    pub fn smallest(&self) -> Option<usize> {
        self.pick_by_len(|candidate, current| candidate < current)
    }

    /// Keeps the first cluster, replacing it only when `better` holds strictly.
    fn pick_by_len(&self, better: impl Fn(usize, usize) -> bool) -> Option<usize> {
        let mut picked: Option<usize> = None;
        for (i, cluster) in self.clusters.iter().enumerate() {
            match picked {
                Some(p) if !better(cluster.len(), self.clusters[p].len()) => {}
                _ => picked = Some(i),
            }
        }
        picked
    }
}

impl<T, O> FromIterator<Cluster<T, O>> for Clusters<T, O> {
    fn from_iter<I: IntoIterator<Item = Cluster<T, O>>>(iter: I) -> Self {
        Self {
            clusters: iter.into_iter().collect(),
        }
    }
}

impl<T, O> From<Vec<Cluster<T, O>>> for Clusters<T, O> {
    fn from(clusters: Vec<Cluster<T, O>>) -> Self {
        Self { clusters }
    }
}

impl<T, O> Index<usize> for Clusters<T, O> {
    type Output = Cluster<T, O>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.clusters[index]
    }
}

impl<T, O> IndexMut<usize> for Clusters<T, O> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.clusters[index]
    }
}

impl<'a, T, O> IntoIterator for &'a Clusters<T, O> {
    type Item = &'a Cluster<T, O>;
    type IntoIter = std::slice::Iter<'a, Cluster<T, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

impl<T, O> IntoIterator for Clusters<T, O> {
    type Item = Cluster<T, O>;
    type IntoIter = std::vec::IntoIter<Cluster<T, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.into_iter()
    }
}
