//! Pixel value type and channel selection.
//!
//! Channels are addressed through [`Channel`] rather than bare integers.
//! The integer convention used by callers is inverted relative to the usual
//! RGB order (0 = blue, 1 = green, 2 = red) and is only ever interpreted in
//! [`Channel::from_index`] and [`Channel::index`].

use crate::error::EngineError;

/// One of the three color channels of a [`Pixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All color channels in red, green, blue order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Resolve a channel index: 0 = blue, 1 = green, 2 = red.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidChannel`] for any other value.
    ///
    /// # Example
    ///
    /// ```
    /// use imagelab_engine::Channel;
    ///
    /// assert_eq!(Channel::from_index(0).unwrap(), Channel::Blue);
    /// assert_eq!(Channel::from_index(2).unwrap(), Channel::Red);
    /// assert!(Channel::from_index(3).is_err());
    /// ```
    pub fn from_index(index: i64) -> Result<Self, EngineError> {
        match index {
            0 => Ok(Channel::Blue),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Red),
            other => Err(EngineError::InvalidChannel(other)),
        }
    }

    /// The integer index of this channel (inverse of [`Channel::from_index`]).
    pub fn index(self) -> i64 {
        match self {
            Channel::Blue => 0,
            Channel::Green => 1,
            Channel::Red => 2,
        }
    }

    /// Lowercase channel name, as used in command words and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// A single pixel: red, green, blue and alpha channel values.
///
/// Values are conventionally in `0..=max_value` of the owning image, but the
/// type does not enforce that; transformations clamp their results.
/// Equality and hashing are structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    red: u16,
    green: u16,
    blue: u16,
    alpha: u16,
}

impl Pixel {
    #[inline]
    pub fn new(red: u16, green: u16, blue: u16, alpha: u16) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// A pixel whose three color channels all equal `value`.
    #[inline]
    pub fn grey(value: u16, alpha: u16) -> Self {
        Self::new(value, value, value, alpha)
    }

    #[inline]
    pub fn red(&self) -> u16 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u16 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u16 {
        self.blue
    }

    #[inline]
    pub fn alpha(&self) -> u16 {
        self.alpha
    }

    /// Read a color channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Read a color channel by integer index (0 = blue, 1 = green, 2 = red).
    pub fn channel_at(&self, index: i64) -> Result<u16, EngineError> {
        Channel::from_index(index).map(|channel| self.channel(channel))
    }

    /// Color channels as `[red, green, blue]`.
    #[inline]
    pub fn rgb(&self) -> [u16; 3] {
        [self.red, self.green, self.blue]
    }
}
