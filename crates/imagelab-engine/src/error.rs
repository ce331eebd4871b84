//! Error type for the imagelab engine.
//!
//! Every failure is scoped to the single requested operation and is raised
//! before the registry is touched, so a caller that receives an
//! [`EngineError`] can assume no image was published.

use thiserror::Error;

/// Errors returned by engine operations and data model constructors.
///
/// Variants fall into two classes: [`ImageNotFound`](EngineError::ImageNotFound)
/// for lookups of unregistered names, and invalid-argument errors for
/// everything else. Use [`EngineError::is_not_found`] to tell them apart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Image not found: {0}")]
    ImageNotFound(String),

    #[error("Image name cannot be empty")]
    EmptyName,

    #[error("Invalid channel value: {0}")]
    InvalidChannel(i64),

    #[error("Invalid axis value: {0}")]
    InvalidAxis(i64),

    #[error("Invalid transformation matrix: expected 3x3, got {rows}x{cols}")]
    InvalidMatrix { rows: usize, cols: usize },

    #[error("Invalid kernel: {0}")]
    InvalidKernel(&'static str),

    #[error(
        "The width and height of the given images are not same: \
         {red_width}x{red_height}, {green_width}x{green_height}, {blue_width}x{blue_height}"
    )]
    DimensionMismatch {
        red_width: usize,
        red_height: usize,
        green_width: usize,
        green_height: usize,
        blue_width: usize,
        blue_height: usize,
    },

    #[error("Row {row} has {found} pixels, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Pixel count {found} does not match {width}x{height}")]
    PixelCountMismatch {
        width: usize,
        height: usize,
        found: usize,
    },
}

impl EngineError {
    /// Returns `true` for the not-found class, `false` for invalid arguments.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::ImageNotFound(_))
    }
}
