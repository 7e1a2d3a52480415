use kmeans_core::Observer;

use crate::traits::{CanStopEarly, HasVariance};

/// Stops the search once `limit` consecutive candidates fail to improve.
///
/// The count resets on every improvement. A `limit` of zero stops after the
/// first candidate.
#[derive(Debug, Clone)]
pub struct Patience {
    limit: usize,
    stale: usize,
}

impl Patience {
    /// Creates an observer that tolerates `limit` non-improving candidates in a row.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, stale: 0 }
    }

    /// Returns the number of non-improving candidates since the last improvement.
    #[must_use]
    pub fn stale(&self) -> usize {
        self.stale
    }
}

impl<E: HasVariance, A: CanStopEarly> Observer<E, A> for Patience {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.is_improvement() {
            self.stale = 0;
        } else {
            self.stale += 1;
        }
        (self.stale >= self.limit).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use kmeans_clustering::optimize::{self, Config, Status};
    use kmeans_core::Dataset;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::traits::fakes::{Stop, events};

    fn run(observer: &mut Patience, variances: &[f64]) -> Option<usize> {
        events(variances)
            .iter()
            .position(|event| Observer::<_, Stop>::observe(&mut *observer, event).is_some())
    }

    #[test]
    fn stops_after_a_stale_run() {
        let mut patience = Patience::new(2);
        assert_eq!(run(&mut patience, &[5.0, 4.0, 4.5, 4.0, 3.0, 9.0]), Some(3));
        assert_eq!(patience.stale(), 2);
    }

    #[test]
    fn improvement_resets_the_count() {
        let mut patience = Patience::new(2);
        assert_eq!(run(&mut patience, &[5.0, 6.0, 4.0, 7.0, 3.0, 8.0]), None);
        assert_eq!(patience.stale(), 1);
    }

    #[test]
    fn zero_limit_stops_immediately() {
        let mut patience = Patience::new(0);
        assert_eq!(run(&mut patience, &[5.0, 4.0]), Some(0));
    }

    #[test]
    fn ends_a_randomized_search() {
        let data = Dataset::new(vec![[0.0], [1.0], [2.0], [10.0], [11.0], [12.0]], 1);
        let mut rng = StdRng::seed_from_u64(7);
        let config = Config::new(1000, 0).unwrap();

        let solution = optimize::optimize(2, &data, &config, &mut rng, Patience::new(5)).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.trials < 2000);
        assert!(solution.trials >= 6);
    }
}
