//! Spatial convolution over the color channels.

use super::{clamp_channel, round_half_up};
use crate::error::EngineError;
use crate::image::Image;
use crate::pixel::Pixel;

/// A square convolution kernel with odd side length.
///
/// Weights are stored row-major; `weight(dy, dx)` addresses the cell at
/// offset `(dy, dx)` from the center.
///
/// # Border Handling
///
/// Kernel cells that fall outside the image are skipped, but the sum is
/// still divided by the full [`weight_sum`](Kernel::weight_sum). Pixels near
/// the border therefore come out darker for positive kernels.
///
/// ```text
/// blur (sum 16)      sharpen (sum 8)
///  1  2  1           -1 -1 -1 -1 -1
///  2  4  2           -1  2  2  2 -1
///  1  2  1           -1  2  8  2 -1
///                    -1  2  2  2 -1
///                    -1 -1 -1 -1 -1
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    size: usize,
    weights: Vec<i32>,
    weight_sum: i64,
}

impl Kernel {
    /// Build a kernel from rows of weights.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidKernel`] if the kernel is empty, not square,
    /// has an even side length, or its weights sum to zero.
    pub fn new<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, EngineError> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::InvalidKernel("kernel is empty"));
        }
        if size % 2 == 0 {
            return Err(EngineError::InvalidKernel("side length must be odd"));
        }
        let mut weights = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(EngineError::InvalidKernel("kernel must be square"));
            }
            weights.extend_from_slice(row);
        }
        let weight_sum: i64 = weights.iter().map(|&w| i64::from(w)).sum();
        if weight_sum == 0 {
            return Err(EngineError::InvalidKernel("weights sum to zero"));
        }
        Ok(Self {
            size,
            weights,
            weight_sum,
        })
    }

    /// 3×3 Gaussian blur.
    pub fn blur() -> Self {
        Self {
            size: 3,
            weights: vec![1, 2, 1, 2, 4, 2, 1, 2, 1],
            weight_sum: 16,
        }
    }

    /// 5×5 sharpen.
    pub fn sharpen() -> Self {
        #[rustfmt::skip]
        let weights = vec![
            -1, -1, -1, -1, -1,
            -1,  2,  2,  2, -1,
            -1,  2,  8,  2, -1,
            -1,  2,  2,  2, -1,
            -1, -1, -1, -1, -1,
        ];
        Self {
            size: 5,
            weights,
            weight_sum: 8,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn weight_sum(&self) -> i64 {
        self.weight_sum
    }

    #[inline]
    fn radius(&self) -> isize {
        (self.size / 2) as isize
    }

    #[inline]
    fn weight(&self, dy: isize, dx: isize) -> i64 {
        let r = self.radius();
        let idx = (dy + r) as usize * self.size + (dx + r) as usize;
        i64::from(self.weights[idx])
    }
}

/// Convolve the color channels of `source` with `kernel`.
///
/// Alpha at each position is copied from the source pixel at the same
/// position.
pub fn convolve(source: &Image, name: &str, kernel: &Kernel) -> Image {
    let width = source.width() as isize;
    let height = source.height() as isize;
    let max_value = source.max_value();
    let pixels = source.pixels();
    let radius = kernel.radius();
    let divisor = kernel.weight_sum() as f64;

    Image::from_fn(
        name,
        source.width(),
        source.height(),
        max_value,
        |row, col| {
            let (y, x) = (row as isize, col as isize);
            let mut sums = [0i64; 3];
            for dy in -radius..=radius {
                let sy = y + dy;
                if sy < 0 || sy >= height {
                    continue;
                }
                for dx in -radius..=radius {
                    let sx = x + dx;
                    if sx < 0 || sx >= width {
                        continue;
                    }
                    let weight = kernel.weight(dy, dx);
                    let neighbor = pixels[(sy * width + sx) as usize].rgb();
                    for (sum, value) in sums.iter_mut().zip(neighbor) {
                        *sum += weight * i64::from(value);
                    }
                }
            }
            let [red, green, blue] =
                sums.map(|sum| clamp_channel(round_half_up(sum as f64 / divisor), max_value));
            let alpha = pixels[row * source.width() + col].alpha();
            Pixel::new(red, green, blue, alpha)
        },
    )
}
