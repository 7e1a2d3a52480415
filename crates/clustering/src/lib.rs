//! K-means cluster mechanics and multi-start search.
//!
//! Given a dataset implementing [`Observations`], this crate partitions it into
//! `k` groups around computed centers:
//!
//! - [`Cluster`] — one center plus its [`ObservationList`] of members
//! - [`Clusters`] — an ordered set of clusters with cross-cluster queries
//!   (nearest, neighbor, variance, largest, smallest)
//! - [`new`] — a single random seeding via reservoir sampling
//! - [`optimize`] — a variance-minimizing search over many seedings
//!
//! # Example
//!
//! ```
//! use kmeans_clustering::optimize_clusters;
//! use kmeans_core::Dataset;
//!
//! let data = Dataset::from_rows(vec![
//!     vec![1.0, 1.0],
//!     vec![1.5, 2.0],
//!     vec![8.0, 8.0],
//!     vec![9.0, 8.5],
//! ]);
//!
//! let clusters = optimize_clusters(2, &data).unwrap();
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters.iter().map(|c| c.len()).sum::<usize>(), 4);
//! ```
//!
//! [`Observations`]: kmeans_core::Observations

mod cluster;
mod clusters;
mod observation_list;
mod seed;

pub mod optimize;

pub use cluster::Cluster;
pub use clusters::Clusters;
pub use observation_list::ObservationList;
pub use optimize::{Config, ConfigError, optimize, optimize_clusters, optimize_unobserved};
pub use seed::{new, new_with_rng, select_random};

pub use kmeans_core::Error;
