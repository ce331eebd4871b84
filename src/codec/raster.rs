//! JPEG and BMP via the `image` crate.
//!
//! Both decode to 8-bit RGBA with max value 255. JPEG has no alpha channel,
//! so it is always saved as RGB; BMP switches to RGBA when some pixel is not
//! fully opaque.

use super::{alpha_8bit, has_translucency, to_8bit, ImageCodec, OPAQUE};
use crate::error::CodecError;
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage, RgbaImage};
use imagelab_engine::{Image, Pixel};
use std::io::Cursor;

pub static JPEG: RasterCodec = RasterCodec {
    format: ImageFormat::Jpeg,
};

pub static BMP: RasterCodec = RasterCodec {
    format: ImageFormat::Bmp,
};

/// A format the `image` crate reads and writes.
pub struct RasterCodec {
    format: ImageFormat,
}

impl RasterCodec {
    fn keeps_alpha(&self) -> bool {
        self.format != ImageFormat::Jpeg
    }
}

impl ImageCodec for RasterCodec {
    fn decode(&self, bytes: &[u8], name: &str) -> Result<Image, CodecError> {
        let decoded = ImageReader::with_format(Cursor::new(bytes), self.format).decode()?;
        let rgba = decoded.to_rgba8();

        let width = rgba.width() as usize;
        let height = rgba.height() as usize;
        let pixels = rgba
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                Pixel::new(r.into(), g.into(), b.into(), a.into())
            })
            .collect();

        Ok(Image::new(name, width, height, pixels, OPAQUE)?)
    }

    fn encode(&self, image: &Image) -> Result<Vec<u8>, CodecError> {
        let too_large = || CodecError::TooLarge {
            width: image.width(),
            height: image.height(),
        };
        let width = u32::try_from(image.width()).map_err(|_| too_large())?;
        let height = u32::try_from(image.height()).map_err(|_| too_large())?;

        let max_value = image.max_value();
        let with_alpha = self.keeps_alpha() && has_translucency(image);

        let mut data = Vec::with_capacity(image.pixels().len() * 4);
        for pixel in image.pixels() {
            data.extend(pixel.rgb().map(|c| to_8bit(c, max_value)));
            if with_alpha {
                data.push(alpha_8bit(pixel.alpha()));
            }
        }

        let dynamic = if with_alpha {
            RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8)
        } else {
            RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8)
        }
        .ok_or_else(too_large)?;

        let mut buf = Cursor::new(Vec::new());
        dynamic.write_to(&mut buf, self.format)?;
        Ok(buf.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Image {
        Image::from_rows(
            "sample",
            vec![
                vec![Pixel::new(255, 0, 0, 255), Pixel::new(0, 255, 0, 255)],
                vec![Pixel::new(0, 0, 0, 255), Pixel::new(255, 153, 51, 255)],
            ],
            255,
        )
        .unwrap()
    }

    #[test]
    fn test_bmp_is_lossless() {
        let bytes = BMP.encode(&sample()).unwrap();
        assert_eq!(&bytes[..2], b"BM");
        let decoded = BMP.decode(&bytes, "back").unwrap();
        assert_eq!(decoded, sample());
        assert_eq!(decoded.name(), "back");
        assert_eq!(decoded.max_value(), 255);
    }

    #[test]
    fn test_bmp_keeps_alpha() {
        let image = Image::from_rows(
            "alpha",
            vec![vec![Pixel::new(10, 20, 30, 0), Pixel::new(40, 50, 60, 128)]],
            255,
        )
        .unwrap();
        let decoded = BMP.decode(&BMP.encode(&image).unwrap(), "alpha").unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_jpeg_drops_alpha() {
        let image = Image::from_fn("grey", 8, 8, 255, |_, _| Pixel::new(128, 128, 128, 10));
        let bytes = JPEG.encode(&image).unwrap();
        assert_eq!(&bytes[..2], b"\xff\xd8");

        let decoded = JPEG.decode(&bytes, "grey").unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 8);
        for pixel in decoded.pixels() {
            assert_eq!(pixel.alpha(), OPAQUE);
            for c in pixel.rgb() {
                assert!(c.abs_diff(128) <= 2, "flat grey drifted to {c}");
            }
        }
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            JPEG.decode(b"not a jpeg", "x"),
            Err(CodecError::Image(_))
        ));
        assert!(matches!(
            BMP.decode(b"not a bmp", "x"),
            Err(CodecError::Image(_))
        ));
    }
}
