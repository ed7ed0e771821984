//! Triangle-wave brightness pulsing.

use crate::output::{OutputDriver, RgbOutput};
use crate::types::{Channel, Rgb8};
use palette::Srgb;

/// Pulse routines, each a hue whose lit channels share one brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseColor {
    White,
    Magenta,
    Yellow,
    Blue,
    /// Writes only the green and blue channels; red is left as it was.
    Cyan,
}

impl PulseColor {
    /// Full color at the given brightness.
    pub fn color(self, brightness: u8) -> Rgb8 {
        let b = brightness;
        match self {
            PulseColor::White => Srgb::new(b, b, b),
            PulseColor::Magenta => Srgb::new(b, 0, b),
            PulseColor::Yellow => Srgb::new(b, b, 0),
            PulseColor::Blue => Srgb::new(0, 0, b),
            PulseColor::Cyan => Srgb::new(0, b, b),
        }
    }
}

/// Brightness that ramps between 0 and 255, reversing direction at each end.
///
/// Each call to [`step`](Self::step) yields the current brightness and then
/// moves it by the fade amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    brightness: i16,
    fade_amount: i16,
}

impl Pulse {
    /// Starts dark and ramping up by `step` per call.
    pub fn new(step: u8) -> Self {
        Self {
            brightness: 0,
            fade_amount: i16::from(step),
        }
    }

    /// Current brightness.
    pub fn brightness(&self) -> u8 {
        self.brightness.clamp(0, 255) as u8
    }

    /// Returns `true` while the brightness is ramping up.
    pub fn is_rising(&self) -> bool {
        self.fade_amount > 0
    }

    /// Returns the current brightness and advances the ramp.
    pub fn step(&mut self) -> u8 {
        let current = self.brightness();
        self.brightness = (self.brightness + self.fade_amount).clamp(0, 255);
        if self.brightness <= 0 || self.brightness >= 255 {
            self.fade_amount = -self.fade_amount;
        }
        current
    }

    /// Writes `color` at the current brightness and advances the ramp.
    ///
    /// Returns [`PulseColor::color`] at the brightness written. For
    /// [`PulseColor::Cyan`] the returned red is 0, but the red channel itself is
    /// not written and keeps whatever it showed before.
    pub fn show<O: RgbOutput>(&mut self, driver: &mut OutputDriver<O>, color: PulseColor) -> Rgb8 {
        let brightness = self.step();
        let rgb = color.color(brightness);
        match color {
            PulseColor::Cyan => {
                driver.write_intensity(Channel::Green, rgb.green);
                driver.write_intensity(Channel::Blue, rgb.blue);
            }
            _ => driver.set_color(rgb),
        }
        rgb
    }
}
