//! Plain-text PPM (`P3`).

use super::{ImageCodec, OPAQUE};
use crate::error::CodecError;
use imagelab_engine::{Image, Pixel};

const MAGIC: &str = "P3";

pub struct PpmCodec;

impl ImageCodec for PpmCodec {
    fn decode(&self, bytes: &[u8], name: &str) -> Result<Image, CodecError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| CodecError::PpmParse("file is not valid text".to_string()))?;

        // Comment lines are dropped whole; '#' elsewhere is not special.
        let mut tokens = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .flat_map(str::split_whitespace);

        match tokens.next() {
            Some(MAGIC) => {}
            _ => {
                return Err(CodecError::PpmParse(
                    "plain RAW file should begin with P3".to_string(),
                ))
            }
        }

        let width: usize = next_number(&mut tokens, "width")?;
        let height: usize = next_number(&mut tokens, "height")?;
        let max_value: u16 = next_number(&mut tokens, "max value")?;

        let count = width
            .checked_mul(height)
            .ok_or(CodecError::TooLarge { width, height })?;
        let mut pixels = Vec::with_capacity(count.min(1 << 20));
        for _ in 0..count {
            let red = next_number(&mut tokens, "red value")?;
            let green = next_number(&mut tokens, "green value")?;
            let blue = next_number(&mut tokens, "blue value")?;
            pixels.push(Pixel::new(red, green, blue, OPAQUE));
        }

        Ok(Image::new(name, width, height, pixels, max_value)?)
    }

    fn encode(&self, image: &Image) -> Result<Vec<u8>, CodecError> {
        let mut out = format!(
            "{MAGIC}\n{} {}\n{}\n",
            image.width(),
            image.height(),
            image.max_value()
        );
        for value in image.pixels().iter().flat_map(|p| p.rgb()) {
            out.push_str(&value.to_string());
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}

fn next_number<'a, T: std::str::FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<T, CodecError> {
    let token = tokens
        .next()
        .ok_or_else(|| CodecError::PpmParse(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| CodecError::PpmParse(format!("{what} is not a number: {token}")))
}
