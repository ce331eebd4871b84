//! Test fixtures and constants.

use imagelab_engine::{Image, Pixel};

/// 2x3 PPM: red, green, blue / black, orange, white
pub const BASE_PPM: &str = "P3
# 2x3 reference image
3 2
255
255 0 0
0 255 0
0 0 255
0 0 0
255 153 51
255 255 255
";

/// The 3x3 reference image used by the convolution and dither scenarios
pub const BASE_3X3_PPM: &str = "P3
3 3
255
255 0 0  0 255 0  0 0 255
0 0 0  255 153 51  255 255 255
62 207 255  179 60 255  191 255 12
";

/// Build an opaque image from `(r, g, b)` rows
pub fn image(rows: &[&[(u16, u16, u16)]]) -> Image {
    let rows = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|&(r, g, b)| Pixel::new(r, g, b, 255))
                .collect()
        })
        .collect();
    Image::from_rows("expected", rows, 255).unwrap()
}

/// Build an opaque greyscale image
pub fn greys(rows: &[&[u16]]) -> Image {
    let rows = rows
        .iter()
        .map(|row| row.iter().map(|&v| Pixel::grey(v, 255)).collect())
        .collect();
    Image::from_rows("expected", rows, 255).unwrap()
}

/// `BASE_PPM` as an image
pub fn base() -> Image {
    image(&[
        &[(255, 0, 0), (0, 255, 0), (0, 0, 255)],
        &[(0, 0, 0), (255, 153, 51), (255, 255, 255)],
    ])
}
