//! Random seeding of cluster centers.

use kmeans_core::{Error, Number, Observations};
use rand::Rng;

use crate::{Cluster, Clusters};

/// Picks up to `k` observations uniformly at random in a single pass.
///
/// Uses reservoir sampling, so the dataset is walked once and its length need
/// not be known up front. Observations are selected without replacement; when
/// the dataset holds fewer than `k` observations, all of them are returned.
pub fn select_random<'a, T, D, R>(dataset: &'a D, k: usize, rng: &mut R) -> Vec<D::Item<'a>>
where
    T: Number,
    D: Observations<T>,
    R: Rng,
{
    let mut reservoir = Vec::with_capacity(k);
    if k == 0 {
        return reservoir;
    }

    for (seen, o) in dataset.observations().enumerate() {
        if seen < k {
            reservoir.push(o);
        } else {
            let slot = rng.random_range(0..=seen);
            if slot < k {
                reservoir[slot] = o;
            }
        }
    }
    reservoir
}

/// Seeds `k` empty clusters on randomly chosen observations.
///
/// Uses a thread-local random number generator. See [`new_with_rng`] for a
/// reproducible variant.
///
/// # Errors
///
/// Returns [`Error::KMustBeGreaterThanZero`] if `k` is zero, and
/// [`Error::EmptyObservations`] if the dataset has no axes or no observations.
pub fn new<T, D>(k: usize, dataset: &D) -> Result<Clusters<T, D::Item<'_>>, Error>
where
    T: Number,
    D: Observations<T>,
{
    new_with_rng(k, dataset, &mut rand::rng())
}

/// Seeds `k` empty clusters on observations chosen with `rng`.
///
/// Each cluster's center is a copy of its seed and its member list is empty.
/// A dataset with fewer than `k` observations yields one cluster per
/// observation.
///
/// # Errors
///
/// Returns [`Error::KMustBeGreaterThanZero`] if `k` is zero, and
/// [`Error::EmptyObservations`] if the dataset has no axes or no observations.
pub fn new_with_rng<'a, T, D, R>(
    k: usize,
    dataset: &'a D,
    rng: &mut R,
) -> Result<Clusters<T, D::Item<'a>>, Error>
where
    T: Number,
    D: Observations<T>,
    R: Rng,
{
    validate(k, dataset)?;

    let degree = dataset.degree();
    Ok(select_random(dataset, k, rng)
        .iter()
        .map(|seed| Cluster::new(seed, degree))
        .collect())
}

/// Checks the preconditions shared by seeding and searching.
///
/// A dataset without axes is reported before a zero `k`.
pub(crate) fn validate<T, D>(k: usize, dataset: &D) -> Result<(), Error>
where
    T: Number,
    D: Observations<T>,
{
    if dataset.degree() == 0 {
        return Err(Error::EmptyObservations);
    }
    if k == 0 {
        return Err(Error::KMustBeGreaterThanZero);
    }
    if dataset.observations().next().is_none() {
        return Err(Error::EmptyObservations);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use kmeans_core::Dataset;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid() -> Dataset<Vec<f64>> {
        Dataset::from_rows((0..20_i32).map(|i| vec![f64::from(i), f64::from(i * i)]).collect())
    }

    #[test]
    fn selects_k_distinct_observations() {
        let data = grid();
        let mut rng = StdRng::seed_from_u64(7);

        let picked = select_random(&data, 5, &mut rng);

        assert_eq!(picked.len(), 5);
        for (i, a) in picked.iter().enumerate() {
            for b in &picked[i + 1..] {
                assert!(!std::ptr::eq(*a, *b));
            }
        }
    }

    #[test]
    fn selects_everything_from_a_short_dataset() {
        let data = Dataset::from_rows(vec![vec![1.0], vec![2.0]]);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(select_random(&data, 5, &mut rng).len(), 2);
    }

    #[test]
    fn every_observation_can_be_selected() {
        let data = grid();
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits = vec![0_usize; data.len()];

        for _ in 0..2000 {
            for o in select_random(&data, 3, &mut rng) {
                let index = data
                    .iter()
                    .position(|candidate| std::ptr::eq(candidate, o))
                    .unwrap();
                hits[index] += 1;
            }
        }

        // 2000 draws of 3 from 20 puts 300 in each slot on average.
        assert!(hits.iter().all(|&h| h > 150 && h < 450), "{hits:?}");
    }

    #[test]
    fn new_seeds_k_empty_clusters_on_dataset_points() {
        let data = grid();
        let mut rng = StdRng::seed_from_u64(3);

        let clusters = new_with_rng(4, &data, &mut rng).unwrap();

        assert_eq!(clusters.len(), 4);
        for cluster in &clusters {
            assert!(cluster.is_empty());
            let center = cluster.center().unwrap();
            assert!(data.iter().any(|row| row.as_slice() == center));
        }
    }

    #[test]
    fn new_rejects_zero_k() {
        let data = grid();
        assert_eq!(new(0, &data).unwrap_err(), Error::KMustBeGreaterThanZero);
    }

    #[test]
    fn new_rejects_zero_degree() {
        let data = Dataset::new(vec![[0_i32; 0]; 5], 0);
        assert_eq!(new(2, &data).unwrap_err(), Error::EmptyObservations);
    }

    #[test]
    fn zero_degree_outranks_zero_k() {
        let data = Dataset::new(vec![[0_i32; 0]; 3], 0);
        assert_eq!(new(0, &data).unwrap_err(), Error::EmptyObservations);
    }

    #[test]
    fn zero_k_outranks_missing_observations() {
        let data = Dataset::new(Vec::<[f64; 2]>::new(), 2);
        assert_eq!(new(0, &data).unwrap_err(), Error::KMustBeGreaterThanZero);
    }

    #[test]
    fn new_rejects_empty_dataset() {
        let data = Dataset::new(Vec::<[f64; 2]>::new(), 2);
        assert_eq!(new(2, &data).unwrap_err(), Error::EmptyObservations);
    }
}
