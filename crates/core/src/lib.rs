//! Core traits and types for k-means clustering.
//!
//! This crate defines the shared abstractions that the clustering engine and
//! its observers build on:
//!
//! - [`Number`] — the element types an observation can hold
//! - [`Observation`] — per-axis access to a single data point
//! - [`Observations`] — a restartable sequence of observations with a shared degree
//! - [`Dataset`] — an owned [`Observations`] backed by a `Vec`
//! - [`Observer`] — receives search events and optionally returns control actions
//! - [`math`] — squared distance, range, sum, center, and average distance
//! - [`normalize`] — min-max normalization, streaming and eager

mod dataset;
mod error;
mod number;
mod observation;
mod observer;

pub mod math;
pub mod normalize;

pub use dataset::Dataset;
pub use error::Error;
pub use number::Number;
pub use observation::{Observation, Observations};
pub use observer::Observer;
