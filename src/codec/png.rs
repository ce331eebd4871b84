//! PNG via the `png` crate.
//!
//! Decoding normalizes every layout to 8-bit grey, grey+alpha, RGB or RGBA.
//! Encoding writes 8-bit RGB, switching to RGBA only when some pixel is not
//! fully opaque.

use super::{alpha_8bit, has_translucency, to_8bit, ImageCodec};
use crate::error::CodecError;
use imagelab_engine::{Image, Pixel};
use std::io::Cursor;

const MAX_8BIT: u16 = 255;

pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn decode(&self, bytes: &[u8], name: &str) -> Result<Image, CodecError> {
        let mut decoder = png::Decoder::new(bytes);
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder
            .read_info()
            .map_err(|e| CodecError::PngDecode(e.to_string()))?;

        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e| CodecError::PngDecode(e.to_string()))?;
        let data = &buf[..info.buffer_size()];

        if info.bit_depth != png::BitDepth::Eight {
            return Err(CodecError::UnsupportedLayout(format!(
                "{:?} {:?}",
                info.color_type, info.bit_depth
            )));
        }

        let v = |x: u8| u16::from(x);
        let pixels: Vec<Pixel> = match info.color_type {
            png::ColorType::Grayscale => data
                .iter()
                .map(|&g| Pixel::grey(v(g), MAX_8BIT))
                .collect(),
            png::ColorType::GrayscaleAlpha => data
                .chunks_exact(2)
                .map(|ga| Pixel::grey(v(ga[0]), v(ga[1])))
                .collect(),
            png::ColorType::Rgb => data
                .chunks_exact(3)
                .map(|c| Pixel::new(v(c[0]), v(c[1]), v(c[2]), MAX_8BIT))
                .collect(),
            png::ColorType::Rgba => data
                .chunks_exact(4)
                .map(|c| Pixel::new(v(c[0]), v(c[1]), v(c[2]), v(c[3])))
                .collect(),
            other => {
                return Err(CodecError::UnsupportedLayout(format!("{other:?}")));
            }
        };

        let width = info.width as usize;
        let height = info.height as usize;
        Ok(Image::new(name, width, height, pixels, MAX_8BIT)?)
    }

    fn encode(&self, image: &Image) -> Result<Vec<u8>, CodecError> {
        let too_large = || CodecError::TooLarge {
            width: image.width(),
            height: image.height(),
        };
        let width = u32::try_from(image.width()).map_err(|_| too_large())?;
        let height = u32::try_from(image.height()).map_err(|_| too_large())?;

        let max_value = image.max_value();
        let with_alpha = has_translucency(image);
        let (color_type, samples) = if with_alpha {
            (png::ColorType::Rgba, 4)
        } else {
            (png::ColorType::Rgb, 3)
        };

        let mut data = Vec::with_capacity(image.pixels().len() * samples);
        for pixel in image.pixels() {
            data.extend(pixel.rgb().map(|c| to_8bit(c, max_value)));
            if with_alpha {
                data.push(alpha_8bit(pixel.alpha()));
            }
        }

        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color_type);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(png::Compression::Default);
            let mut writer = encoder
                .write_header()
                .map_err(|e| CodecError::PngEncode(e.to_string()))?;
            writer
                .write_image_data(&data)
                .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        }
        Ok(buf.into_inner())
    }
}
