use crate::{Number, Observation, Observations, math};

/// A streaming view that normalizes another [`Observations`] on the fly.
///
/// The per-axis minimum and maximum are captured from `source` when the
/// adapter is built. Walking the adapter walks `source` again and yields a
/// freshly normalized `Vec<f64>` per observation.
///
/// When a scale is supplied, axis `i` is stretched by `1 + scale[i]`, giving
/// it more weight in the squared distance. Axes past the end of the scale are
/// left unscaled.
#[derive(Debug, Clone)]
pub struct NormalizeAdapter<'s, T, D> {
    source: &'s D,
    mins: Vec<T>,
    maxes: Vec<T>,
    scale: Option<Vec<f64>>,
}

impl<'s, T, D> NormalizeAdapter<'s, T, D>
where
    T: Number,
    D: Observations<T>,
{
    /// Creates an unscaled adapter over `source`.
    #[must_use]
    pub fn new(source: &'s D) -> Self {
        let (mins, maxes) = math::range(source.observations(), source.degree());
        Self {
            source,
            mins,
            maxes,
            scale: None,
        }
    }

    /// Creates an adapter over `source` that stretches axis `i` by `1 + scale[i]`.
    #[must_use]
    pub fn with_scale(source: &'s D, scale: Vec<f64>) -> Self {
        Self {
            scale: Some(scale),
            ..Self::new(source)
        }
    }

    /// Returns the per-axis minimum captured from the source.
    #[must_use]
    pub fn mins(&self) -> &[T] {
        &self.mins
    }

    /// Returns the per-axis maximum captured from the source.
    #[must_use]
    pub fn maxes(&self) -> &[T] {
        &self.maxes
    }

    /// Returns the per-axis scale, if one was supplied.
    #[must_use]
    pub fn scale(&self) -> Option<&[f64]> {
        self.scale.as_deref()
    }

    /// Maps a domain observation into normalized (and scaled) space.
    pub fn normalize<O>(&self, o: &O) -> Vec<f64>
    where
        O: Observation<T> + ?Sized,
    {
        (0..self.mins.len())
            .map(|axis| {
                let (min, span) = self.bounds(axis);
                self.factor(axis) * (o.value(axis).to_f64() - min) / span
            })
            .collect()
    }

    /// Maps a normalized observation back into domain values.
    ///
    /// Undoes the scale factor and then the min-max transform, so
    /// `denormalize(&normalize(o))` recovers `o` on every axis up to
    /// floating point error.
    pub fn denormalize<O>(&self, o: &O) -> Vec<f64>
    where
        O: Observation<f64> + ?Sized,
    {
        (0..self.mins.len())
            .map(|axis| {
                let (min, span) = self.bounds(axis);
                o.value(axis) / self.factor(axis) * span + min
            })
            .collect()
    }

    fn bounds(&self, axis: usize) -> (f64, f64) {
        let min = self.mins[axis].to_f64();
        (min, self.maxes[axis].to_f64() - min)
    }

    fn factor(&self, axis: usize) -> f64 {
        let scale = self
            .scale
            .as_ref()
            .and_then(|scale| scale.get(axis).copied())
            .unwrap_or(0.0);
        1.0 + scale
    }
}

impl<T, D> Observations<f64> for NormalizeAdapter<'_, T, D>
where
    T: Number,
    D: Observations<T>,
{
    type Item<'a>
        = Vec<f64>
    where
        Self: 'a;

    fn observations(&self) -> impl Iterator<Item = Vec<f64>> {
        self.source.observations().map(|o| self.normalize(&o))
    }

    fn degree(&self) -> usize {
        self.mins.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Dataset;

    fn heights_and_weights() -> Dataset<[f32; 2]> {
        Dataset::new(
            vec![[60.0, 95.0], [73.0, 255.0], [66.0, 145.0], [70.0, 121.0]],
            2,
        )
    }

    #[test]
    fn captures_range_at_construction() {
        let data = heights_and_weights();
        let adapter = NormalizeAdapter::new(&data);

        assert_eq!(adapter.mins(), &[60.0, 95.0]);
        assert_eq!(adapter.maxes(), &[73.0, 255.0]);
        assert_eq!(adapter.degree(), 2);
    }

    #[test]
    fn maps_extremes_to_unit_interval() {
        let data = heights_and_weights();
        let adapter = NormalizeAdapter::new(&data);

        let low = adapter.normalize(&[60.0_f32, 95.0]);
        let high = adapter.normalize(&[73.0_f32, 255.0]);

        assert_relative_eq!(low[0], 0.0);
        assert_relative_eq!(low[1], 0.0);
        assert_relative_eq!(high[0], 1.0);
        assert_relative_eq!(high[1], 1.0);
    }

    #[test]
    fn scale_stretches_axes() {
        let data = heights_and_weights();
        let adapter = NormalizeAdapter::with_scale(&data, vec![0.5, 1.0]);

        let high = adapter.normalize(&[73.0_f32, 255.0]);

        assert_relative_eq!(high[0], 1.5);
        assert_relative_eq!(high[1], 2.0);
    }

    #[test]
    fn short_scale_leaves_remaining_axes_unscaled() {
        let data = heights_and_weights();
        let adapter = NormalizeAdapter::with_scale(&data, vec![1.0]);

        let high = adapter.normalize(&[73.0_f32, 255.0]);

        assert_relative_eq!(high[0], 2.0);
        assert_relative_eq!(high[1], 1.0);
    }

    #[test]
    fn denormalize_inverts_normalize() {
        let data = heights_and_weights();
        let adapter = NormalizeAdapter::new(&data);

        for o in data.iter() {
            let back = adapter.denormalize(&adapter.normalize(o));
            for axis in 0..2 {
                assert_relative_eq!(back[axis], f64::from(o[axis]), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn denormalize_inverts_scaled_normalize() {
        let data = heights_and_weights();
        let adapter = NormalizeAdapter::with_scale(&data, vec![0.5, 1.0]);

        for o in data.iter() {
            let back = adapter.denormalize(&adapter.normalize(o));
            for axis in 0..2 {
                assert_relative_eq!(back[axis], f64::from(o[axis]), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn streams_every_source_observation() {
        let data = heights_and_weights();
        let adapter = NormalizeAdapter::new(&data);

        let normalized: Vec<Vec<f64>> = adapter.observations().collect();

        assert_eq!(normalized.len(), data.len());
        assert!(
            normalized
                .iter()
                .flatten()
                .all(|v| (0.0..=1.0).contains(v))
        );
    }

    #[test]
    fn constant_axis_is_not_finite() {
        let data = Dataset::new(vec![[1.0_f64, 0.0], [1.0, 2.0]], 2);
        let adapter = NormalizeAdapter::new(&data);

        let normalized = adapter.normalize(&[1.0_f64, 1.0]);

        assert!(!normalized[0].is_finite());
        assert_relative_eq!(normalized[1], 0.5);
    }
}
