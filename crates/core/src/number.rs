use std::fmt::Debug;

/// A numeric type usable as an observation value.
///
/// All arithmetic in the engine happens in `f64`. Values are widened with
/// [`Number::to_f64`] and narrowed back with [`Number::from_f64`], which
/// follows the `as` conversion rule: integers truncate toward zero and
/// saturate at their bounds.
pub trait Number: Copy + PartialOrd + Default + Debug {
    /// Widens the value to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows an `f64` into this type.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                #[inline]
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless
                )]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_number!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
);
