//! Linear brightness adjustment.

use super::clamp_channel;
use crate::image::Image;
use crate::pixel::Pixel;

/// Add `increment` to red, green and blue, clamping each to
/// `0..=max_value`. Alpha is untouched; a zero increment copies the image.
pub fn brighten(source: &Image, name: &str, increment: i32) -> Image {
    let max_value = source.max_value();
    let shift = |value: u16| clamp_channel(i64::from(value) + i64::from(increment), max_value);
    source.map_pixels(name, |pixel| {
        Pixel::new(
            shift(pixel.red()),
            shift(pixel.green()),
            shift(pixel.blue()),
            pixel.alpha(),
        )
    })
}
