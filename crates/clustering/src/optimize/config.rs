use thiserror::Error;

/// Candidates drawn per cluster by the randomized search.
pub const DEFAULT_TRIALS_PER_CLUSTER: usize = 1000;

/// Cluster counts below this are searched exhaustively.
pub const DEFAULT_EXHAUSTIVE_BELOW: usize = 3;

/// Configuration for the cluster search.
///
/// For `k < exhaustive_below` the search tries every ordered k-permutation of
/// the dataset, which grows as `n!/(n-k)!`. Larger `k` draws
/// `trials_per_cluster * k` random seed sets instead.
///
/// The exhaustive search has no size guard by default. Setting
/// `max_exhaustive_candidates` switches to the randomized search whenever the
/// permutation count would exceed the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ConfigFile", into = "ConfigFile")
)]
pub struct Config {
    trials_per_cluster: usize,
    exhaustive_below: usize,
    max_exhaustive_candidates: Option<usize>,
}

/// Errors that can occur when validating a search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("trials_per_cluster must be greater than 0")]
    Trials,

    #[error("max_exhaustive_candidates must be greater than 0")]
    ExhaustiveLimit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials_per_cluster: DEFAULT_TRIALS_PER_CLUSTER,
            exhaustive_below: DEFAULT_EXHAUSTIVE_BELOW,
            max_exhaustive_candidates: None,
        }
    }
}

impl Config {
    /// Creates a new config with no exhaustive limit.
    ///
    /// An `exhaustive_below` of 0 disables the exhaustive search.
    ///
    /// # Errors
    ///
    /// Returns an error if `trials_per_cluster` is zero.
    pub fn new(trials_per_cluster: usize, exhaustive_below: usize) -> Result<Self, ConfigError> {
        if trials_per_cluster == 0 {
            return Err(ConfigError::Trials);
        }

        Ok(Self {
            trials_per_cluster,
            exhaustive_below,
            max_exhaustive_candidates: None,
        })
    }

    /// Caps the number of candidates the exhaustive search may enumerate.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is zero.
    pub fn with_max_exhaustive_candidates(self, limit: usize) -> Result<Self, ConfigError> {
        if limit == 0 {
            return Err(ConfigError::ExhaustiveLimit);
        }

        Ok(Self {
            max_exhaustive_candidates: Some(limit),
            ..self
        })
    }

    /// Returns the number of random candidates drawn per cluster.
    #[must_use]
    pub fn trials_per_cluster(&self) -> usize {
        self.trials_per_cluster
    }

    /// Returns the cluster count below which the search is exhaustive.
    #[must_use]
    pub fn exhaustive_below(&self) -> usize {
        self.exhaustive_below
    }

    /// Returns the exhaustive candidate limit, if any.
    #[must_use]
    pub fn max_exhaustive_candidates(&self) -> Option<usize> {
        self.max_exhaustive_candidates
    }
}

/// The serialized form of [`Config`], validated on the way in.
#[cfg(feature = "serde-derive")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    trials_per_cluster: usize,
    exhaustive_below: usize,
    max_exhaustive_candidates: Option<usize>,
}

#[cfg(feature = "serde-derive")]
impl Default for ConfigFile {
    fn default() -> Self {
        Config::default().into()
    }
}

#[cfg(feature = "serde-derive")]
impl From<Config> for ConfigFile {
    fn from(config: Config) -> Self {
        Self {
            trials_per_cluster: config.trials_per_cluster,
            exhaustive_below: config.exhaustive_below,
            max_exhaustive_candidates: config.max_exhaustive_candidates,
        }
    }
}

#[cfg(feature = "serde-derive")]
impl TryFrom<ConfigFile> for Config {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let config = Self::new(file.trials_per_cluster, file.exhaustive_below)?;
        match file.max_exhaustive_candidates {
            Some(limit) => config.with_max_exhaustive_candidates(limit),
            None => Ok(config),
        }
    }
}
