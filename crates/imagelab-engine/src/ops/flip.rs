//! Mirror an image about its vertical or horizontal center line.

use crate::error::EngineError;
use crate::image::Image;

/// Flip direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Mirror left-right within each row.
    Horizontal,
    /// Mirror top-bottom across rows.
    Vertical,
}

impl Axis {
    /// Resolve an axis index: 0 = horizontal, 1 = vertical.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidAxis`] for any other value.
    pub fn from_index(index: i64) -> Result<Self, EngineError> {
        match index {
            0 => Ok(Axis::Horizontal),
            1 => Ok(Axis::Vertical),
            other => Err(EngineError::InvalidAxis(other)),
        }
    }
}

/// Flip `source` along `axis`.
///
/// The pixel at `(row, col)` swaps with its mirror position; for odd
/// dimensions the center row or column maps to itself. Flipping twice along
/// the same axis restores the original arrangement.
pub fn flip(source: &Image, name: &str, axis: Axis) -> Image {
    let width = source.width();
    let height = source.height();
    let pixels = source.pixels();
    Image::from_fn(name, width, height, source.max_value(), |row, col| {
        let (src_row, src_col) = match axis {
            Axis::Horizontal => (row, width - 1 - col),
            Axis::Vertical => (height - 1 - row, col),
        };
        pixels[src_row * width + src_col]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    fn numbered(width: usize, height: usize) -> Image {
        Image::from_fn("n", width, height, 255, |row, col| {
            Pixel::grey((row * width + col) as u16, 255)
        })
    }

    fn values(image: &Image) -> Vec<u16> {
        image.pixels().iter().map(Pixel::red).collect()
    }

    #[test]
    fn test_axis_from_index() {
        assert_eq!(Axis::from_index(0), Ok(Axis::Horizontal));
        assert_eq!(Axis::from_index(1), Ok(Axis::Vertical));
        assert_eq!(Axis::from_index(3), Err(EngineError::InvalidAxis(3)));
    }

    #[test]
    fn test_horizontal_flip() {
        let flipped = flip(&numbered(3, 2), "h", Axis::Horizontal);
        assert_eq!(values(&flipped), vec![2, 1, 0, 5, 4, 3]);
    }

    #[test]
    fn test_vertical_flip() {
        let flipped = flip(&numbered(3, 2), "v", Axis::Vertical);
        assert_eq!(values(&flipped), vec![3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn test_odd_center_row_stays() {
        let flipped = flip(&numbered(2, 3), "v", Axis::Vertical);
        assert_eq!(values(&flipped), vec![4, 5, 2, 3, 0, 1]);
    }

    #[test]
    fn test_flip_empty_image() {
        let empty = Image::from_rows("e", vec![], 255).unwrap();
        assert_eq!(flip(&empty, "e2", Axis::Horizontal).width(), 0);
        assert_eq!(flip(&empty, "e2", Axis::Vertical).height(), 0);
    }
}
