use crate::Clusters;

/// How candidate seed sets were generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Every ordered k-permutation of the dataset was tried.
    Exhaustive,

    /// A fixed budget of reservoir samples was tried.
    Randomized,
}

/// Indicates how the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every candidate was scored.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a cluster search.
#[derive(Debug, Clone)]
pub struct Solution<T, O> {
    /// Final search status.
    pub status: Status,

    /// How candidates were generated.
    pub strategy: Strategy,

    /// The lowest-variance clustering found.
    pub clusters: Clusters<T, O>,

    /// Total variance of `clusters`.
    pub variance: f64,

    /// Number of candidates scored.
    pub trials: usize,
}
