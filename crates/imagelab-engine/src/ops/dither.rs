//! Black/white error diffusion dithering.
//!
//! The green channel of each pixel is quantized to `0` or `max_value` in
//! row-major order, and the quantization error is pushed into neighbors
//! that have not been visited yet. Those neighbors are re-rounded and
//! clamped immediately, so later decisions see the adjusted values. The
//! scan order is part of the result: a different order gives a different
//! image.

use super::{clamp_channel, round_half_up};
use crate::image::Image;
use crate::pixel::Pixel;

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`; a neighbor receives
/// `error * weight / divisor`.
#[derive(Debug, Clone, Copy)]
pub struct DiffusionKernel {
    pub entries: &'static [(i32, i32, u8)],
    pub divisor: u8,
}

/// Floyd-Steinberg weights.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Dither `source` to black and white using [`FLOYD_STEINBERG`].
pub fn dither(source: &Image, name: &str) -> Image {
    dither_with_kernel(source, name, &FLOYD_STEINBERG)
}

/// Dither `source` with an arbitrary forward-only diffusion kernel.
///
/// Output pixels have all three color channels equal to the quantized
/// value; alpha comes from the source pixel.
pub fn dither_with_kernel(source: &Image, name: &str, kernel: &DiffusionKernel) -> Image {
    let width = source.width();
    let height = source.height();
    let max_value = source.max_value();
    let divisor = f64::from(kernel.divisor);

    // Working copy of the green channel, adjusted in place as error arrives.
    let mut levels: Vec<u16> = source.pixels().iter().map(Pixel::green).collect();
    let mut output = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let current = levels[idx];
            let quantized = closest_level(current, max_value);
            let error = f64::from(current) - f64::from(quantized);
            output.push(Pixel::grey(quantized, source.pixels()[idx].alpha()));

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + i64::from(dx);
                let ny = y as i64 + i64::from(dy);
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let nidx = ny as usize * width + nx as usize;
                let share = error * (f64::from(weight) / divisor);
                let adjusted = round_half_up(f64::from(levels[nidx]) + share);
                levels[nidx] = clamp_channel(adjusted, max_value);
            }
        }
    }

    Image::from_fn(name, width, height, max_value, |row, col| {
        output[row * width + col]
    })
}

/// Nearest of `0` and `max_value`; the midpoint goes to `max_value`.
#[inline]
fn closest_level(value: u16, max_value: u16) -> u16 {
    if i32::from(max_value) - i32::from(value) <= i32::from(value) {
        max_value
    } else {
        0
    }
}
