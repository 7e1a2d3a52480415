//! Reusable observers for k-means cluster searches.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! steer or monitor [`optimize`] without changing its API.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for search events and actions
//!   ([`HasVariance`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Patience`] — stops after a run of non-improving candidates
//! - [`TargetVariance`] — stops once a candidate is good enough
//! - [`Logged`] — wraps another observer and reports each candidate to `tracing`
//!
//! [`Observer`]: kmeans_core::Observer
//! [`optimize`]: kmeans_clustering::optimize()
//! [`HasVariance`]: traits::HasVariance
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logged;
mod patience;
mod target;

pub use logged::Logged;
pub use patience::Patience;
pub use target::TargetVariance;
