//! Hardware output abstraction for the three LED channels.
//!
//! Provides the [`RgbOutput`] capability trait, the [`OutputDriver`] that every
//! display routine writes through, and [`PwmOutput`], an adapter over
//! embedded-hal PWM channels.

use crate::types::{Channel, ChannelLevels, Rgb8};
use embedded_hal::pwm::SetDutyCycle;

/// Trait for abstracting the LED's output lines.
///
/// Implement this for your hardware (GPIO, PWM, a simulator, ...). Levels and
/// intensities are logical: `true` / `255` mean fully lit. Implementations are
/// responsible for any electrical inversion.
pub trait RgbOutput {
    /// Prepares a channel for output. Called once per channel by
    /// [`OutputDriver::setup`] before the periodic task starts.
    fn configure(&mut self, channel: Channel) -> Result<(), OutputError> {
        let _ = channel;
        Ok(())
    }

    /// Drives a channel fully on or fully off.
    fn write_digital(&mut self, channel: Channel, lit: bool) -> Result<(), OutputError>;

    /// Drives a channel at an 8-bit intensity.
    fn write_intensity(&mut self, channel: Channel, value: u8) -> Result<(), OutputError>;
}

impl<O: RgbOutput + ?Sized> RgbOutput for &mut O {
    fn configure(&mut self, channel: Channel) -> Result<(), OutputError> {
        (**self).configure(channel)
    }

    fn write_digital(&mut self, channel: Channel, lit: bool) -> Result<(), OutputError> {
        (**self).write_digital(channel, lit)
    }

    fn write_intensity(&mut self, channel: Channel, value: u8) -> Result<(), OutputError> {
        (**self).write_intensity(channel, value)
    }
}

/// Errors reported by an [`RgbOutput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// The hardware rejected the write.
    WriteFailed(Channel),

    /// The output handle for this channel is not usable.
    InvalidHandle(Channel),
}

impl OutputError {
    /// The channel the failed operation targeted.
    pub fn channel(&self) -> Channel {
        match self {
            OutputError::WriteFailed(channel) | OutputError::InvalidHandle(channel) => *channel,
        }
    }
}

impl core::fmt::Display for OutputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OutputError::WriteFailed(channel) => write!(f, "write to {:?} channel failed", channel),
            OutputError::InvalidHandle(channel) => {
                write!(f, "output handle for {:?} channel is invalid", channel)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutputError {}

/// Writes colors to an [`RgbOutput`], one channel at a time in R, G, B order.
///
/// A failed write is logged and counted, and the remaining channels are still
/// written. A skipped visual update is not worth halting the indicator for.
pub struct OutputDriver<O: RgbOutput> {
    output: O,
    failed_writes: u32,
}

impl<O: RgbOutput> OutputDriver<O> {
    /// Wraps an output. No hardware is touched until [`setup`](Self::setup).
    pub fn new(output: O) -> Self {
        Self {
            output,
            failed_writes: 0,
        }
    }

    /// Configures all three lines as outputs and forces them off.
    pub fn setup(&mut self) {
        for channel in Channel::ALL {
            let result = self.output.configure(channel);
            self.record(result);
        }
        self.turn_off();
    }

    /// Issues three digital writes.
    pub fn set_levels(&mut self, levels: ChannelLevels) {
        for channel in Channel::ALL {
            self.write_digital(channel, levels.level(channel));
        }
    }

    /// Issues three intensity writes.
    pub fn set_color(&mut self, color: Rgb8) {
        for channel in Channel::ALL {
            self.write_intensity(channel, channel.component(color));
        }
    }

    /// Drives every channel on.
    pub fn turn_on(&mut self) {
        self.set_levels(ChannelLevels::ALL_ON);
    }

    /// Drives every channel off.
    pub fn turn_off(&mut self) {
        self.set_levels(ChannelLevels::OFF);
    }

    /// Writes a single digital level.
    pub fn write_digital(&mut self, channel: Channel, lit: bool) {
        let result = self.output.write_digital(channel, lit);
        self.record(result);
    }

    /// Writes a single intensity.
    pub fn write_intensity(&mut self, channel: Channel, value: u8) {
        let result = self.output.write_intensity(channel, value);
        self.record(result);
    }

    /// Number of writes the hardware has rejected so far.
    pub fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    /// Returns a reference to the wrapped output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Returns a mutable reference to the wrapped output.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Releases the wrapped output.
    pub fn into_inner(self) -> O {
        self.output
    }

    fn record(&mut self, result: Result<(), OutputError>) {
        if let Err(err) = result {
            self.failed_writes = self.failed_writes.saturating_add(1);
            warn!("LED output error, continuing: {}", err);
        }
    }
}

/// Electrical polarity of the LED channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Common cathode: a high line lights the channel.
    #[default]
    ActiveHigh,

    /// Common anode: a low line lights the channel.
    ActiveLow,
}

impl Polarity {
    /// Converts a logical intensity into the line's duty level.
    #[inline]
    pub fn apply(self, value: u8) -> u8 {
        match self {
            Polarity::ActiveHigh => value,
            Polarity::ActiveLow => u8::MAX - value,
        }
    }
}

/// RGB output over three embedded-hal PWM channels.
///
/// Digital writes drive a channel fully on or fully off; intensity writes scale
/// the 8-bit value onto the channel's duty range. With [`Polarity::ActiveLow`]
/// both are inverted, so a lit channel holds its line low.
pub struct PwmOutput<R, G, B> {
    red: R,
    green: G,
    blue: B,
    polarity: Polarity,
}

impl<R, G, B> PwmOutput<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Creates a PWM output from the three channels.
    pub fn new(red: R, green: G, blue: B, polarity: Polarity) -> Self {
        Self {
            red,
            green,
            blue,
            polarity,
        }
    }

    /// Releases the PWM channels.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn set_level(&mut self, channel: Channel, value: u8) -> Result<(), OutputError> {
        let level = u16::from(self.polarity.apply(value));
        let denom = u16::from(u8::MAX);
        let result = match channel {
            Channel::Red => self.red.set_duty_cycle_fraction(level, denom).map_err(drop),
            Channel::Green => self.green.set_duty_cycle_fraction(level, denom).map_err(drop),
            Channel::Blue => self.blue.set_duty_cycle_fraction(level, denom).map_err(drop),
        };
        result.map_err(|()| OutputError::WriteFailed(channel))
    }
}

impl<R, G, B> RgbOutput for PwmOutput<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn write_digital(&mut self, channel: Channel, lit: bool) -> Result<(), OutputError> {
        self.set_level(channel, if lit { u8::MAX } else { 0 })
    }

    fn write_intensity(&mut self, channel: Channel, value: u8) -> Result<(), OutputError> {
        self.set_level(channel, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_low_inverts_intensity() {
        assert_eq!(Polarity::ActiveLow.apply(0), 255);
        assert_eq!(Polarity::ActiveLow.apply(255), 0);
        assert_eq!(Polarity::ActiveLow.apply(100), 155);
        assert_eq!(Polarity::ActiveHigh.apply(100), 100);
    }

    #[test]
    fn error_reports_its_channel() {
        assert_eq!(OutputError::WriteFailed(Channel::Green).channel(), Channel::Green);
        assert_eq!(OutputError::InvalidHandle(Channel::Blue).channel(), Channel::Blue);
    }
}
