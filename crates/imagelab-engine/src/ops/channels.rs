//! Split an image into per-channel greyscales and combine them back.

use super::visualize;
use crate::error::EngineError;
use crate::image::Image;
use crate::pixel::{Channel, Pixel};

/// The three greyscale images produced by [`split`].
#[derive(Debug, Clone, PartialEq)]
pub struct SplitChannels {
    pub red: Image,
    pub green: Image,
    pub blue: Image,
}

/// Decompose `source` into red, green and blue channel visualizations.
pub fn split(source: &Image, red_name: &str, green_name: &str, blue_name: &str) -> SplitChannels {
    SplitChannels {
        red: visualize::channel(source, red_name, Channel::Red),
        green: visualize::channel(source, green_name, Channel::Green),
        blue: visualize::channel(source, blue_name, Channel::Blue),
    }
}

/// Build one image taking red from `red`, green from `green`, blue from
/// `blue` and alpha from `red`. The max value is taken from `red`.
///
/// # Errors
///
/// [`EngineError::DimensionMismatch`] unless all three share width and
/// height.
pub fn combine(red: &Image, green: &Image, blue: &Image, name: &str) -> Result<Image, EngineError> {
    let same = |a: &Image, b: &Image| a.width() == b.width() && a.height() == b.height();
    if !same(red, green) || !same(green, blue) {
        return Err(EngineError::DimensionMismatch {
            red_width: red.width(),
            red_height: red.height(),
            green_width: green.width(),
            green_height: green.height(),
            blue_width: blue.width(),
            blue_height: blue.height(),
        });
    }

    let pixels = red
        .pixels()
        .iter()
        .zip(green.pixels())
        .zip(blue.pixels())
        .map(|((r, g), b)| Pixel::new(r.red(), g.green(), b.blue(), r.alpha()))
        .collect();
    Image::new(name, red.width(), red.height(), pixels, red.max_value())
}
