//! 3×3 color matrix transforms (luma greyscale, sepia).

use super::{clamp_channel, round_half_up};
use crate::error::EngineError;
use crate::image::Image;
use crate::pixel::Pixel;

/// A 3×3 matrix applied to each pixel's `(red, green, blue)` column vector.
///
/// Row 0 produces red, row 1 green, row 2 blue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    rows: [[f64; 3]; 3],
}

impl ColorMatrix {
    /// Luma weights in every row, so all three output channels are equal.
    pub const LUMA: ColorMatrix = ColorMatrix::from_array([
        [0.216, 0.7152, 0.0722],
        [0.216, 0.7152, 0.0722],
        [0.216, 0.7152, 0.0722],
    ]);

    /// Classic sepia tone.
    pub const SEPIA: ColorMatrix = ColorMatrix::from_array([
        [0.393, 0.769, 0.189],
        [0.349, 0.686, 0.168],
        [0.272, 0.534, 0.131],
    ]);

    pub const fn from_array(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Build a matrix from dynamically sized rows.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidMatrix`] unless there are exactly three rows of
    /// exactly three values each.
    ///
    /// # Example
    ///
    /// ```
    /// use imagelab_engine::ColorMatrix;
    ///
    /// let identity = ColorMatrix::new(&[
    ///     vec![1.0, 0.0, 0.0],
    ///     vec![0.0, 1.0, 0.0],
    ///     vec![0.0, 0.0, 1.0],
    /// ]);
    /// assert!(identity.is_ok());
    /// assert!(ColorMatrix::new(&[vec![1.0, 0.0]]).is_err());
    /// ```
    pub fn new<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, EngineError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.len() != 3 {
            return Err(EngineError::InvalidMatrix {
                rows: rows.len(),
                cols,
            });
        }
        let mut matrix = [[0.0; 3]; 3];
        for (target, row) in matrix.iter_mut().zip(rows) {
            let row = row.as_ref();
            if row.len() != 3 {
                return Err(EngineError::InvalidMatrix {
                    rows: rows.len(),
                    cols: row.len(),
                });
            }
            target.copy_from_slice(row);
        }
        Ok(Self { rows: matrix })
    }

    #[inline]
    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    /// Apply the matrix to one pixel. Alpha passes through.
    pub fn apply(&self, pixel: &Pixel, max_value: u16) -> Pixel {
        let [r, g, b] = pixel.rgb().map(f64::from);
        let [red, green, blue] = self.rows.map(|row| {
            clamp_channel(
                round_half_up(r * row[0] + g * row[1] + b * row[2]),
                max_value,
            )
        });
        Pixel::new(red, green, blue, pixel.alpha())
    }
}

/// Transform every pixel of `source` with `matrix`.
pub fn transform(source: &Image, name: &str, matrix: &ColorMatrix) -> Image {
    let max_value = source.max_value();
    source.map_pixels(name, |pixel| matrix.apply(pixel, max_value))
}
