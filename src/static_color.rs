//! Named static colors and their channel levels.

use crate::output::{OutputDriver, RgbOutput};
use crate::types::ChannelLevels;

/// Closed set of colors the indicator can show without animation.
///
/// `White` is the all-on fallback that any unrecognized raw color value
/// resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum NamedColor {
    Red = 0,
    Green = 1,
    Blue = 2,
    Yellow = 3,
    Magenta = 4,
    Cyan = 5,
    White = 6,
}

impl NamedColor {
    /// The named colors, excluding the fallback.
    pub const ALL: [NamedColor; 6] = [
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Magenta,
        NamedColor::Cyan,
    ];

    /// Decodes a raw color index. Out-of-range values fall back to `White`.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => NamedColor::Red,
            1 => NamedColor::Green,
            2 => NamedColor::Blue,
            3 => NamedColor::Yellow,
            4 => NamedColor::Magenta,
            5 => NamedColor::Cyan,
            _ => NamedColor::White,
        }
    }

    /// Which channels are lit for this color.
    pub const fn levels(self) -> ChannelLevels {
        match self {
            NamedColor::Red => ChannelLevels::new(true, false, false),
            NamedColor::Green => ChannelLevels::new(false, true, false),
            NamedColor::Blue => ChannelLevels::new(false, false, true),
            NamedColor::Yellow => ChannelLevels::new(true, true, false),
            NamedColor::Magenta => ChannelLevels::new(true, false, true),
            NamedColor::Cyan => ChannelLevels::new(false, true, true),
            NamedColor::White => ChannelLevels::ALL_ON,
        }
    }
}

/// Channel levels for a raw color index, with the all-on fallback.
#[inline]
pub fn levels_for_raw(raw: u8) -> ChannelLevels {
    NamedColor::from_raw(raw).levels()
}

/// Shows a named color with three digital writes.
pub fn set_static_color<O: RgbOutput>(driver: &mut OutputDriver<O>, color: NamedColor) {
    driver.set_levels(color.levels());
}
