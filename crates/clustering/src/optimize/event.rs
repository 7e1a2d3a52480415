use crate::Clusters;

use super::Strategy;

/// Emitted once for every candidate the search scores.
///
/// `clusters` is the candidate's full assignment: the seeded clusters after
/// every observation was placed with its nearest seed. `best` is the lowest
/// variance seen before this candidate, so observers can tell whether the
/// search is still improving.
#[derive(Debug)]
pub struct Event<'a, T, O> {
    /// Zero-based index of the candidate.
    pub trial: usize,

    /// Total variance of this candidate.
    pub variance: f64,

    /// Lowest variance among earlier candidates, `None` for the first.
    pub best: Option<f64>,

    /// How candidates are being generated.
    pub strategy: Strategy,

    /// The candidate's clusters.
    pub clusters: &'a Clusters<T, O>,
}

impl<T, O> Event<'_, T, O> {
    /// Returns `true` if this candidate beats every earlier one.
    ///
    /// Ties keep the earlier candidate, so an equal variance is not an
    /// improvement.
    #[must_use]
    pub fn is_improvement(&self) -> bool {
        self.best.is_none_or(|best| self.variance < best)
    }
}
