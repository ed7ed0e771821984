//! Blink phase tracking and the blink-style display routines.

use crate::output::{OutputDriver, RgbOutput};
use crate::static_color::NamedColor;
use crate::time::{Millis, TimeDuration, TimeInstant};
use crate::types::ChannelLevels;

/// Boolean oscillator toggled at a fixed interval.
///
/// Updated once per scheduler tick and read by every blink routine in that
/// tick, so all blinking channels stay in phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkPhase<I: TimeInstant> {
    last_toggle: I,
    on: bool,
    interval: Millis,
}

impl<I: TimeInstant> BlinkPhase<I> {
    /// Creates an off phase whose first toggle is due `interval` after `start`.
    pub fn new(start: I, interval: Millis) -> Self {
        Self {
            last_toggle: start,
            on: false,
            interval,
        }
    }

    /// Flips the phase if the toggle interval has elapsed since the last flip.
    ///
    /// At most one flip happens per call. Returns `true` if the phase flipped.
    pub fn advance(&mut self, now: I) -> bool {
        let elapsed = now.duration_since(self.last_toggle).as_millis();
        if elapsed >= self.interval.0 {
            self.on = !self.on;
            self.last_toggle = now;
            true
        } else {
            false
        }
    }

    /// Current phase.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Instant of the most recent flip (or the start instant).
    pub fn last_toggle(&self) -> I {
        self.last_toggle
    }
}

/// Blink routines: a color alternating with off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkPattern {
    /// All channels follow the phase.
    White,
    /// Red and blue held off, green follows the phase.
    Green,
    /// Blue held off, red and green follow the phase.
    Yellow,
    /// Red and green held off, blue follows the phase.
    Blue,
}

impl BlinkPattern {
    /// Channel levels for the given phase.
    pub fn levels(self, on: bool) -> ChannelLevels {
        match self {
            BlinkPattern::White => ChannelLevels::new(on, on, on),
            BlinkPattern::Green => ChannelLevels::new(false, on, false),
            BlinkPattern::Yellow => ChannelLevels::new(on, on, false),
            BlinkPattern::Blue => ChannelLevels::new(false, false, on),
        }
    }

    /// Writes this pattern for the current phase.
    pub fn show<O: RgbOutput>(self, driver: &mut OutputDriver<O>, on: bool) {
        driver.set_levels(self.levels(on));
    }
}

/// Steps through cyan, magenta and yellow, holding each as a static color.
///
/// The position is derived from elapsed time since `start`, so the cycle never
/// blocks and never drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SteppedCycle<I: TimeInstant> {
    start: I,
    hold: Millis,
}

impl<I: TimeInstant> SteppedCycle<I> {
    /// Colors in display order.
    pub const COLORS: [NamedColor; 3] = [NamedColor::Cyan, NamedColor::Magenta, NamedColor::Yellow];

    /// Creates a cycle starting at `start`. A zero hold shows the first color forever.
    pub fn new(start: I, hold: Millis) -> Self {
        Self { start, hold }
    }

    /// Color shown at `now`.
    pub fn color_at(&self, now: I) -> NamedColor {
        if self.hold.0 == 0 {
            return Self::COLORS[0];
        }
        let elapsed = now.duration_since(self.start).as_millis();
        let step = (elapsed / self.hold.0) % Self::COLORS.len() as u64;
        Self::COLORS[step as usize]
    }

    /// Writes the color for `now` and returns it.
    pub fn show<O: RgbOutput>(&self, driver: &mut OutputDriver<O>, now: I) -> NamedColor {
        let color = self.color_at(now);
        driver.set_levels(color.levels());
        color
    }
}
