//! imagelab-engine: in-memory image registry and pixel transformations
//!
//! Images are rectangular grids of [`Pixel`]s with a per-image maximum
//! channel value. The [`ImageEngine`] keeps them in a name-keyed registry
//! and every transformation reads sources by name and publishes its result
//! under a new (or the same) name.
//!
//! # Quick Start
//!
//! ```
//! use imagelab_engine::{Axis, Image, ImageEngine, Pixel};
//!
//! let mut engine = ImageEngine::new();
//! let image = Image::from_rows(
//!     "base",
//!     vec![vec![Pixel::new(255, 0, 0, 255), Pixel::new(0, 255, 0, 255)]],
//!     255,
//! )
//! .unwrap();
//!
//! engine.load_image(image).unwrap();
//! engine.visualize_luma("base", "base-luma").unwrap();
//! engine.flip("base-luma", "mirrored", Axis::Horizontal).unwrap();
//!
//! let mirrored = engine.get_image("mirrored").unwrap();
//! assert_eq!(mirrored.pixel(0, 0), Some(&Pixel::grey(182, 255)));
//! ```
//!
//! # Pure Transformations
//!
//! The functions in [`ops`] work on images directly, without a registry:
//!
//! ```
//! use imagelab_engine::ops::matrix::transform;
//! use imagelab_engine::{Channel, ColorMatrix, Image, Pixel};
//!
//! let image = Image::from_rows("px", vec![vec![Pixel::new(255, 153, 51, 255)]], 255).unwrap();
//! let sepia = transform(&image, "sepia", &ColorMatrix::SEPIA);
//!
//! assert_eq!(sepia.pixel(0, 0).map(|p| p.channel(Channel::Red)), Some(228));
//! ```
//!
//! # Numeric Conventions
//!
//! - Channel index 0 is blue, 1 is green, 2 is red (see [`Channel::from_index`]).
//! - Fractional results round half up: `floor(x + 0.5)`.
//! - Every derived channel is clamped to `0..=max_value`.
//! - Alpha is carried through unchanged by every transformation.
//!
//! # Transformations
//!
//! | Operation | Output |
//! |-----------|--------|
//! | channel / value / intensity / luma | greyscale, alpha preserved |
//! | flip | mirrored along one [`Axis`] |
//! | brighten | every channel shifted by a signed increment |
//! | split / combine | three greyscales and back |
//! | sepia / color transform | 3×3 [`ColorMatrix`] per pixel |
//! | blur / sharpen / convolve | [`Kernel`] convolution |
//! | dither | black/white via [`FLOYD_STEINBERG`] error diffusion |

pub mod engine;
pub mod error;
pub mod image;
pub mod operation;
pub mod ops;
pub mod pixel;
pub mod registry;


pub use engine::ImageEngine;
pub use error::EngineError;
pub use image::{Histogram, Image};
pub use operation::Operation;
pub use ops::{Axis, ColorMatrix, DiffusionKernel, Kernel, FLOYD_STEINBERG};
pub use pixel::{Channel, Pixel};
pub use registry::ImageRegistry;
