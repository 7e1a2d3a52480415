/// Actions an observer can take during the cluster search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current candidate and return the best solution so far.
    ///
    /// The candidate that triggered the stop is still eligible to be best.
    StopEarly,
}
