//! Min-max normalization of observations.
//!
//! Axes with very different magnitudes (a birth date in seconds next to a
//! height in inches) let the widest axis dominate the squared distance.
//! Normalizing maps each axis onto `[0, 1]` using the minimum and maximum
//! observed in the source.
//!
//! Two flavours are provided:
//!
//! - [`NormalizeAdapter`] — streaming. Captures the per-axis range once, then
//!   normalizes lazily every time the sequence is walked. Supports an optional
//!   per-axis scale and inverts it with [`NormalizeAdapter::denormalize`].
//! - [`normalize_observations`] — eager. Materializes every normalized vector
//!   up front and keeps a handle to the original observation, so clustering
//!   results can be mapped back to domain objects.
//!
//! An axis whose minimum equals its maximum divides by zero and produces
//! non-finite values. Exclude constant axes before normalizing.

mod adapter;
mod eager;

pub use adapter::NormalizeAdapter;
pub use eager::{NormalizedObservation, NormalizedObservations, normalize_observations};
