//! Distance and mean primitives over observations.
//!
//! Every function takes the degree explicitly and reads axes `0..degree`.
//!
//! [`distance`] is the **squared** Euclidean distance. Every comparison and
//! aggregate in the engine is monotonic under squaring, so the root is never
//! taken; do not treat its output as a true Euclidean distance.

use crate::{Error, Number, Observation};

/// Returns the squared Euclidean distance between two observations.
pub fn distance<T, A, B>(a: &A, b: &B, degree: usize) -> f64
where
    T: Number,
    A: Observation<T> + ?Sized,
    B: Observation<T> + ?Sized,
{
    (0..degree)
        .map(|axis| {
            let d = a.value(axis).to_f64() - b.value(axis).to_f64();
            d * d
        })
        .sum()
}

/// Returns the per-axis minimum and maximum of a sequence.
///
/// The first observation seeds both vectors; later observations fold into
/// them. An empty sequence yields zero-filled vectors of length `degree`.
pub fn range<T, O, I>(observations: I, degree: usize) -> (Vec<T>, Vec<T>)
where
    T: Number,
    O: Observation<T>,
    I: IntoIterator<Item = O>,
{
    let mut mins = vec![T::default(); degree];
    let mut maxes = vec![T::default(); degree];

    let mut iter = observations.into_iter();
    if let Some(first) = iter.next() {
        for axis in 0..degree {
            let v = first.value(axis);
            mins[axis] = v;
            maxes[axis] = v;
        }
    }

    for o in iter {
        for axis in 0..degree {
            let v = o.value(axis);
            if v < mins[axis] {
                mins[axis] = v;
            }
            if v > maxes[axis] {
                maxes[axis] = v;
            }
        }
    }

    (mins, maxes)
}

/// Returns the per-axis sum of a sequence and the number of observations.
///
/// Sums accumulate in `f64` so small integer types cannot overflow.
pub fn sum<T, O, I>(observations: I, degree: usize) -> (Vec<f64>, usize)
where
    T: Number,
    O: Observation<T>,
    I: IntoIterator<Item = O>,
{
    let mut sums = vec![0.0; degree];
    let mut count = 0;
    for o in observations {
        count += 1;
        for (axis, total) in sums.iter_mut().enumerate() {
            *total += o.value(axis).to_f64();
        }
    }
    (sums, count)
}

/// Returns the per-axis mean of a sequence.
///
/// Each mean is narrowed with [`Number::from_f64`], so integer axes truncate.
///
/// # Errors
///
/// Returns [`Error::EmptyObservations`] if the sequence is empty.
pub fn center<T, O, I>(observations: I, degree: usize) -> Result<Vec<T>, Error>
where
    T: Number,
    O: Observation<T>,
    I: IntoIterator<Item = O>,
{
    let (sums, count) = sum(observations, degree);
    if count == 0 {
        return Err(Error::EmptyObservations);
    }

    #[allow(clippy::cast_precision_loss)]
    let n = count as f64;
    Ok(sums.into_iter().map(|s| T::from_f64(s / n)).collect())
}

/// Returns the mean [`distance`] from `o` to every observation in a sequence.
///
/// An empty sequence yields `0.0` rather than an error.
pub fn average_distance<T, A, O, I>(o: &A, observations: I, degree: usize) -> f64
where
    T: Number,
    A: Observation<T> + ?Sized,
    O: Observation<T>,
    I: IntoIterator<Item = O>,
{
    let mut total = 0.0;
    let mut count = 0_usize;
    for other in observations {
        total += distance(o, &other, degree);
        count += 1;
    }

    if count == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = count as f64;
    total / n
}
