//! [`ImageEngine`]: the registry-backed entry point for every transformation.

use crate::error::EngineError;
use crate::image::Image;
use crate::operation::Operation;
use crate::ops::{self, Axis, ColorMatrix, Kernel};
use crate::pixel::Channel;
use crate::registry::ImageRegistry;

/// Owns the image registry and runs transformations against it.
///
/// Each entry point resolves its sources by name, computes the result, and
/// only then stores it under the target name (overwriting any previous
/// image). On error nothing is stored.
///
/// The engine is single-threaded: hosts that share one across threads must
/// wrap it in their own lock.
///
/// # Example
///
/// ```
/// use imagelab_engine::{Image, ImageEngine, Pixel};
///
/// let mut engine = ImageEngine::new();
/// let image = Image::from_rows(
///     "koala",
///     vec![vec![Pixel::new(250, 100, 0, 255)]],
///     255,
/// )
/// .unwrap();
///
/// engine.load_image(image).unwrap();
/// engine.brighten("koala", "koala-bright", 10).unwrap();
///
/// let bright = engine.get_image("koala-bright").unwrap();
/// assert_eq!(bright.pixel(0, 0), Some(&Pixel::new(255, 110, 10, 255)));
/// ```
#[derive(Debug, Default)]
pub struct ImageEngine {
    registry: ImageRegistry,
}

impl ImageEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoded image under its own name.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyName`] if the image has no name.
    pub fn load_image(&mut self, image: Image) -> Result<(), EngineError> {
        check_name(image.name())?;
        let name = image.name().to_string();
        self.registry.store(&name, image);
        Ok(())
    }

    /// Look up a registered image.
    pub fn get_image(&self, name: &str) -> Result<&Image, EngineError> {
        check_name(name)?;
        self.registry.get(name)
    }

    /// Read-only view of the registry.
    pub fn registry(&self) -> &ImageRegistry {
        &self.registry
    }

    /// Run a typed operation.
    pub fn apply(&mut self, operation: &Operation) -> Result<(), EngineError> {
        match operation {
            Operation::VisualizeChannel {
                source,
                target,
                channel,
            } => self.visualize_channel(source, target, *channel),
            Operation::VisualizeValue { source, target } => self.visualize_value(source, target),
            Operation::VisualizeIntensity { source, target } => {
                self.visualize_intensity(source, target)
            }
            Operation::VisualizeLuma { source, target } => self.visualize_luma(source, target),
            Operation::Flip {
                source,
                target,
                axis,
            } => self.flip(source, target, *axis),
            Operation::Brighten {
                source,
                target,
                increment,
            } => self.brighten(source, target, *increment),
            Operation::Split {
                source,
                red,
                green,
                blue,
            } => self.split(source, red, green, blue),
            Operation::Combine {
                red,
                green,
                blue,
                target,
            } => self.combine(red, green, blue, target),
            Operation::Sepia { source, target } => self.sepia(source, target),
            Operation::ColorTransform {
                source,
                target,
                matrix,
            } => self.color_transform(source, target, matrix),
            Operation::Blur { source, target } => self.blur(source, target),
            Operation::Sharpen { source, target } => self.sharpen(source, target),
            Operation::Convolve {
                source,
                target,
                kernel,
            } => self.convolve(source, target, kernel),
            Operation::Dither { source, target } => self.dither(source, target),
        }
    }

    /// Greyscale of one channel of `source`.
    pub fn visualize_channel(
        &mut self,
        source: &str,
        target: &str,
        channel: Channel,
    ) -> Result<(), EngineError> {
        self.map_single(source, target, |image| {
            ops::visualize::channel(image, target, channel)
        })
    }

    /// Like [`visualize_channel`](Self::visualize_channel) with an integer
    /// channel index (0 = blue, 1 = green, 2 = red).
    pub fn visualize_channel_index(
        &mut self,
        source: &str,
        target: &str,
        index: i64,
    ) -> Result<(), EngineError> {
        let channel = Channel::from_index(index)?;
        self.visualize_channel(source, target, channel)
    }

    pub fn visualize_value(&mut self, source: &str, target: &str) -> Result<(), EngineError> {
        self.map_single(source, target, |image| ops::visualize::value(image, target))
    }

    pub fn visualize_intensity(&mut self, source: &str, target: &str) -> Result<(), EngineError> {
        self.map_single(source, target, |image| {
            ops::visualize::intensity(image, target)
        })
    }

    pub fn visualize_luma(&mut self, source: &str, target: &str) -> Result<(), EngineError> {
        self.map_single(source, target, |image| ops::visualize::luma(image, target))
    }

    pub fn flip(&mut self, source: &str, target: &str, axis: Axis) -> Result<(), EngineError> {
        self.map_single(source, target, |image| ops::flip::flip(image, target, axis))
    }

    /// Like [`flip`](Self::flip) with an integer axis (0 = horizontal,
    /// 1 = vertical).
    pub fn flip_index(&mut self, source: &str, target: &str, index: i64) -> Result<(), EngineError> {
        let axis = Axis::from_index(index)?;
        self.flip(source, target, axis)
    }

    pub fn brighten(
        &mut self,
        source: &str,
        target: &str,
        increment: i32,
    ) -> Result<(), EngineError> {
        self.map_single(source, target, |image| {
            ops::brighten::brighten(image, target, increment)
        })
    }

    /// Split `source` into red, green and blue greyscales.
    ///
    /// All three targets are validated and built before any is stored.
    pub fn split(
        &mut self,
        source: &str,
        red: &str,
        green: &str,
        blue: &str,
    ) -> Result<(), EngineError> {
        check_name(source)?;
        check_name(red)?;
        check_name(green)?;
        check_name(blue)?;
        let parts = ops::channels::split(self.registry.get(source)?, red, green, blue);
        self.registry.store(red, parts.red);
        self.registry.store(green, parts.green);
        self.registry.store(blue, parts.blue);
        Ok(())
    }

    /// Combine the red channel of `red`, green of `green` and blue of
    /// `blue` into `target`.
    pub fn combine(
        &mut self,
        red: &str,
        green: &str,
        blue: &str,
        target: &str,
    ) -> Result<(), EngineError> {
        check_name(red)?;
        check_name(green)?;
        check_name(blue)?;
        check_name(target)?;
        let combined = ops::channels::combine(
            self.registry.get(red)?,
            self.registry.get(green)?,
            self.registry.get(blue)?,
            target,
        )?;
        self.registry.store(target, combined);
        Ok(())
    }

    pub fn sepia(&mut self, source: &str, target: &str) -> Result<(), EngineError> {
        self.color_transform(source, target, &ColorMatrix::SEPIA)
    }

    pub fn color_transform(
        &mut self,
        source: &str,
        target: &str,
        matrix: &ColorMatrix,
    ) -> Result<(), EngineError> {
        self.map_single(source, target, |image| {
            ops::matrix::transform(image, target, matrix)
        })
    }

    pub fn blur(&mut self, source: &str, target: &str) -> Result<(), EngineError> {
        self.convolve(source, target, &Kernel::blur())
    }

    pub fn sharpen(&mut self, source: &str, target: &str) -> Result<(), EngineError> {
        self.convolve(source, target, &Kernel::sharpen())
    }

    pub fn convolve(
        &mut self,
        source: &str,
        target: &str,
        kernel: &Kernel,
    ) -> Result<(), EngineError> {
        self.map_single(source, target, |image| {
            ops::convolve::convolve(image, target, kernel)
        })
    }

    pub fn dither(&mut self, source: &str, target: &str) -> Result<(), EngineError> {
        self.map_single(source, target, |image| ops::dither::dither(image, target))
    }

    /// Resolve `source`, build one result from it, publish under `target`.
    fn map_single<F>(&mut self, source: &str, target: &str, f: F) -> Result<(), EngineError>
    where
        F: FnOnce(&Image) -> Image,
    {
        check_name(source)?;
        check_name(target)?;
        let result = f(self.registry.get(source)?);
        self.registry.store(target, result);
        Ok(())
    }
}

fn check_name(name: &str) -> Result<(), EngineError> {
    if name.is_empty() {
        Err(EngineError::EmptyName)
    } else {
        Ok(())
    }
}
