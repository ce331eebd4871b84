//! Typed operation requests.
//!
//! [`Operation`] is the closed set of transformations the engine can run.
//! Front ends parse their input into an `Operation` once; the engine then
//! dispatches it with an exhaustive match in
//! [`ImageEngine::apply`](crate::ImageEngine::apply).

use crate::ops::{Axis, ColorMatrix, Kernel};
use crate::pixel::Channel;

/// One engine transformation together with its source and result names.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Greyscale of a single color channel.
    VisualizeChannel {
        source: String,
        target: String,
        channel: Channel,
    },
    /// Greyscale of the per-pixel maximum channel.
    VisualizeValue { source: String, target: String },
    /// Greyscale of the per-pixel channel mean.
    VisualizeIntensity { source: String, target: String },
    /// Greyscale of the weighted luma sum.
    VisualizeLuma { source: String, target: String },
    Flip {
        source: String,
        target: String,
        axis: Axis,
    },
    Brighten {
        source: String,
        target: String,
        increment: i32,
    },
    Split {
        source: String,
        red: String,
        green: String,
        blue: String,
    },
    Combine {
        red: String,
        green: String,
        blue: String,
        target: String,
    },
    Sepia { source: String, target: String },
    /// Arbitrary 3×3 color matrix.
    ColorTransform {
        source: String,
        target: String,
        matrix: ColorMatrix,
    },
    Blur { source: String, target: String },
    Sharpen { source: String, target: String },
    /// Arbitrary odd square kernel.
    Convolve {
        source: String,
        target: String,
        kernel: Kernel,
    },
    Dither { source: String, target: String },
}

impl Operation {
    /// Short command word for status messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::VisualizeChannel { channel, .. } => match channel {
                Channel::Red => "red-component",
                Channel::Green => "green-component",
                Channel::Blue => "blue-component",
            },
            Operation::VisualizeValue { .. } => "value-component",
            Operation::VisualizeIntensity { .. } => "intensity-component",
            Operation::VisualizeLuma { .. } => "luma-component",
            Operation::Flip { axis, .. } => match axis {
                Axis::Horizontal => "horizontal-flip",
                Axis::Vertical => "vertical-flip",
            },
            Operation::Brighten { .. } => "brighten",
            Operation::Split { .. } => "rgb-split",
            Operation::Combine { .. } => "rgb-combine",
            Operation::Sepia { .. } => "sepia",
            Operation::ColorTransform { .. } => "color-transform",
            Operation::Blur { .. } => "blur",
            Operation::Sharpen { .. } => "sharpen",
            Operation::Convolve { .. } => "convolve",
            Operation::Dither { .. } => "dither",
        }
    }

    /// Names of the images the operation reads.
    pub fn sources(&self) -> Vec<&str> {
        match self {
            Operation::Combine {
                red, green, blue, ..
            } => vec![red.as_str(), green.as_str(), blue.as_str()],
            Operation::VisualizeChannel { source, .. }
            | Operation::VisualizeValue { source, .. }
            | Operation::VisualizeIntensity { source, .. }
            | Operation::VisualizeLuma { source, .. }
            | Operation::Flip { source, .. }
            | Operation::Brighten { source, .. }
            | Operation::Split { source, .. }
            | Operation::Sepia { source, .. }
            | Operation::ColorTransform { source, .. }
            | Operation::Blur { source, .. }
            | Operation::Sharpen { source, .. }
            | Operation::Convolve { source, .. }
            | Operation::Dither { source, .. } => vec![source.as_str()],
        }
    }

    /// Names of the images the operation publishes.
    pub fn targets(&self) -> Vec<&str> {
        match self {
            Operation::Split {
                red, green, blue, ..
            } => vec![red.as_str(), green.as_str(), blue.as_str()],
            Operation::VisualizeChannel { target, .. }
            | Operation::VisualizeValue { target, .. }
            | Operation::VisualizeIntensity { target, .. }
            | Operation::VisualizeLuma { target, .. }
            | Operation::Flip { target, .. }
            | Operation::Brighten { target, .. }
            | Operation::Combine { target, .. }
            | Operation::Sepia { target, .. }
            | Operation::ColorTransform { target, .. }
            | Operation::Blur { target, .. }
            | Operation::Sharpen { target, .. }
            | Operation::Convolve { target, .. }
            | Operation::Dither { target, .. } => vec![target.as_str()],
        }
    }
}
