//! Image data model.
//!
//! [`Image`] is an immutable, named, row-major grid of [`Pixel`](crate::Pixel)s
//! with a per-channel ceiling. [`Histogram`] summarises the distribution of
//! one channel (or of intensity) across an image.

mod buffer;
mod histogram;

pub use buffer::Image;
pub use histogram::Histogram;
