//! Pixel-level transformations.
//!
//! Every function here is pure: it reads one or more source images and
//! returns a freshly built image carrying the requested result name. The
//! registry bookkeeping lives in [`ImageEngine`](crate::ImageEngine).
//!
//! Rounding is round-half-up (`floor(x + 0.5)`) everywhere, including for
//! negative intermediate values, and results are clamped to
//! `0..=max_value` of the source image.

pub mod brighten;
pub mod channels;
pub mod convolve;
pub mod dither;
pub mod flip;
pub mod matrix;
pub mod visualize;

pub use convolve::Kernel;
pub use dither::{DiffusionKernel, FLOYD_STEINBERG};
pub use flip::Axis;
pub use matrix::ColorMatrix;

/// Round to the nearest integer, ties towards positive infinity.
#[inline]
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Clamp an intermediate channel value into `0..=max_value`.
#[inline]
pub(crate) fn clamp_channel(value: i64, max_value: u16) -> u16 {
    value.clamp(0, i64::from(max_value)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(84.5), 85);
        assert_eq!(round_half_up(84.49), 84);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-5, 255), 0);
        assert_eq!(clamp_channel(300, 255), 255);
        assert_eq!(clamp_channel(17, 15), 15);
        assert_eq!(clamp_channel(12, 15), 12);
    }
}
