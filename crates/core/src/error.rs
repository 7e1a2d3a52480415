/// Errors returned by seeding, searching, and mean computation.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A cluster count of zero was requested.
    #[error("k must be greater than 0")]
    KMustBeGreaterThanZero,

    /// The dataset has no axes, or there were no points to average.
    #[error("empty observations, there is no mean for an empty set of points")]
    EmptyObservations,
}
