//! Core color and channel types.

use palette::Srgb;

/// An 8-bit-per-channel color. Each channel is a PWM intensity (0-255).
pub type Rgb8 = Srgb<u8>;

/// One of the three output lines of a tri-color LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in write order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Returns this channel's component of `color`.
    #[inline]
    pub fn component(self, color: Rgb8) -> u8 {
        match self {
            Channel::Red => color.red,
            Channel::Green => color.green,
            Channel::Blue => color.blue,
        }
    }
}

/// Logical on/off state of each channel. `true` means the channel is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelLevels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl ChannelLevels {
    /// All channels dark.
    pub const OFF: Self = Self::new(false, false, false);

    /// All channels lit.
    pub const ALL_ON: Self = Self::new(true, true, true);

    /// Creates a level triple.
    #[inline]
    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }

    /// Returns the level of a single channel.
    #[inline]
    pub fn level(self, channel: Channel) -> bool {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}
