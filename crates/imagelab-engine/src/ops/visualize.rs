//! Greyscale visualizations of a per-pixel statistic.
//!
//! Each output pixel has all three color channels set to the statistic of
//! the corresponding source pixel; alpha and max value carry over.

use super::matrix::{self, ColorMatrix};
use super::round_half_up;
use crate::image::Image;
use crate::pixel::{Channel, Pixel};

/// Greyscale of a single channel.
pub fn channel(source: &Image, name: &str, channel: Channel) -> Image {
    source.map_pixels(name, |pixel| {
        Pixel::grey(pixel.channel(channel), pixel.alpha())
    })
}

/// Greyscale of `max(red, green, blue)`.
pub fn value(source: &Image, name: &str) -> Image {
    source.map_pixels(name, |pixel| {
        let max = pixel.red().max(pixel.green()).max(pixel.blue());
        Pixel::grey(max, pixel.alpha())
    })
}

/// Greyscale of the rounded mean of red, green and blue.
pub fn intensity(source: &Image, name: &str) -> Image {
    source.map_pixels(name, |pixel| {
        let sum: f64 = pixel.rgb().iter().map(|&v| f64::from(v)).sum();
        let mean = round_half_up(sum / 3.0);
        Pixel::grey(mean as u16, pixel.alpha())
    })
}

/// Greyscale of the weighted luma sum, via [`ColorMatrix::LUMA`].
pub fn luma(source: &Image, name: &str) -> Image {
    matrix::transform(source, name, &ColorMatrix::LUMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Image {
        let rgb = |r, g, b| Pixel::new(r, g, b, 255);
        Image::from_rows(
            "base",
            vec![
                vec![rgb(255, 0, 0), rgb(0, 255, 0), rgb(0, 0, 255)],
                vec![rgb(0, 0, 0), rgb(255, 153, 51), rgb(255, 255, 255)],
            ],
            255,
        )
        .unwrap()
    }

    fn greys(image: &Image) -> Vec<u16> {
        image.pixels().iter().map(Pixel::red).collect()
    }

    #[test]
    fn test_channel_visualization() {
        let image = fixture();
        assert_eq!(
            greys(&channel(&image, "r", Channel::Red)),
            vec![255, 0, 0, 0, 255, 255]
        );
        assert_eq!(
            greys(&channel(&image, "g", Channel::Green)),
            vec![0, 255, 0, 0, 153, 255]
        );
        assert_eq!(
            greys(&channel(&image, "b", Channel::Blue)),
            vec![0, 0, 255, 0, 51, 255]
        );
    }

    #[test]
    fn test_value_visualization() {
        assert_eq!(
            greys(&value(&fixture(), "v")),
            vec![255, 255, 255, 0, 255, 255]
        );
    }

    #[test]
    fn test_intensity_visualization() {
        // 255 / 3 = 85, (255 + 153 + 51) / 3 = 153
        assert_eq!(
            greys(&intensity(&fixture(), "i")),
            vec![85, 85, 85, 0, 153, 255]
        );
    }

    #[test]
    fn test_intensity_rounds_half_up() {
        // (1 + 1 + 0) / 3 = 0.67 -> 1, (1 + 0 + 0) / 3 = 0.33 -> 0
        let image = Image::from_rows(
            "tiny",
            vec![vec![Pixel::new(1, 1, 0, 255), Pixel::new(1, 0, 0, 255)]],
            255,
        )
        .unwrap();
        assert_eq!(greys(&intensity(&image, "i")), vec![1, 0]);
    }

    #[test]
    fn test_luma_visualization() {
        assert_eq!(
            greys(&luma(&fixture(), "l")),
            vec![55, 182, 18, 0, 168, 255]
        );
    }

    #[test]
    fn test_alpha_and_max_value_preserved() {
        let image = Image::from_rows("a", vec![vec![Pixel::new(10, 20, 30, 7)]], 100).unwrap();
        for result in [
            channel(&image, "c", Channel::Green),
            value(&image, "v"),
            intensity(&image, "i"),
            luma(&image, "l"),
        ] {
            assert_eq!(result.pixel(0, 0).unwrap().alpha(), 7);
            assert_eq!(result.max_value(), 100);
            let [r, g, b] = result.pixel(0, 0).unwrap().rgb();
            assert!(r == g && g == b);
        }
    }
}
