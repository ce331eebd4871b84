//! The [`Image`] value type.

use std::fmt;

use super::Histogram;
use crate::error::EngineError;
use crate::pixel::{Channel, Pixel};

/// A named, immutable grid of pixels.
///
/// Pixels are stored in row-major order. `height` is the number of rows and
/// `width` the number of columns; the grid is always rectangular. Once
/// constructed an image is never mutated: transformations build new images.
///
/// Equality compares width, height and every pixel. The name and the max
/// value are metadata and do not take part in equality.
///
/// # Example
///
/// ```
/// use imagelab_engine::{Image, Pixel};
///
/// let red = Pixel::new(255, 0, 0, 255);
/// let blue = Pixel::new(0, 0, 255, 255);
/// let image = Image::from_rows("tiny", vec![vec![red, blue]], 255).unwrap();
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.height(), 1);
/// assert_eq!(image.pixel(0, 1), Some(&blue));
/// ```
#[derive(Clone)]
pub struct Image {
    name: String,
    width: usize,
    height: usize,
    max_value: u16,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Build an image from a flat row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// [`EngineError::PixelCountMismatch`] if `pixels.len() != width * height`.
    pub fn new(
        name: impl Into<String>,
        width: usize,
        height: usize,
        pixels: Vec<Pixel>,
        max_value: u16,
    ) -> Result<Self, EngineError> {
        if pixels.len() != width * height {
            return Err(EngineError::PixelCountMismatch {
                width,
                height,
                found: pixels.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            width,
            height,
            max_value,
            pixels,
        })
    }

    /// Build an image from a vector of rows.
    ///
    /// The width is taken from the first row; an empty vector yields a
    /// zero-sized image.
    ///
    /// # Errors
    ///
    /// [`EngineError::RaggedGrid`] if any row differs in length from row 0.
    pub fn from_rows(
        name: impl Into<String>,
        rows: Vec<Vec<Pixel>>,
        max_value: u16,
    ) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(EngineError::RaggedGrid {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            pixels.extend(values);
        }
        Self::new(name, width, height, pixels, max_value)
    }

    /// Build an image by evaluating `f(row, col)` for every position.
    pub fn from_fn<F>(
        name: impl Into<String>,
        width: usize,
        height: usize,
        max_value: u16,
        mut f: F,
    ) -> Self
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            name: name.into(),
            width,
            height,
            max_value,
            pixels,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The per-channel ceiling, e.g. 255 for 8-bit sources.
    #[inline]
    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    /// The pixel at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row < self.height && col < self.width {
            self.pixels.get(row * self.width + col)
        } else {
            None
        }
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate over rows as pixel slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks_exact panics on 0; a zero-width image has no pixels anyway
        self.pixels
            .chunks_exact(self.width.max(1))
            .take(self.height)
    }

    /// Same pixels under a different name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Apply `f` to every pixel, keeping dimensions and max value.
    pub(crate) fn map_pixels<F>(&self, name: &str, f: F) -> Self
    where
        F: Fn(&Pixel) -> Pixel,
    {
        Self {
            name: name.to_string(),
            width: self.width,
            height: self.height,
            max_value: self.max_value,
            pixels: self.pixels.iter().map(f).collect(),
        }
    }

    /// Frequency of each value of `channel`, indexed `0..=max_value`.
    pub fn histogram(&self, channel: Channel) -> Histogram {
        Histogram::from_values(
            self.max_value,
            self.pixels.iter().map(|p| p.channel(channel)),
        )
    }

    /// Frequency of each per-pixel intensity, the truncated mean of red,
    /// green and blue.
    pub fn intensity_histogram(&self) -> Histogram {
        Histogram::from_values(
            self.max_value,
            self.pixels.iter().map(|p| {
                let sum: u32 = p.rgb().iter().map(|&v| u32::from(v)).sum();
                (sum / 3) as u16
            }),
        )
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.pixels == other.pixels
    }
}

impl Eq for Image {}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("max_value", &self.max_value)
            .field("pixels", &self.pixels)
            .finish()
    }
}
