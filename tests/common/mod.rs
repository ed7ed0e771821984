//! Shared test infrastructure for rgb-status-indicator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::sync::atomic::{AtomicBool, Ordering};
use rgb_status_indicator::{Channel, ChannelLevels, OutputError, Rgb8, RgbOutput, Srgb};

// ============================================================================
// Mock Output
// ============================================================================

/// A single hardware write seen by the mock output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Configure(Channel),
    Digital(Channel, bool),
    Intensity(Channel, u8),
}

/// Mock output that records every write and can reject writes to one channel
pub struct MockOutput {
    writes: heapless::Vec<Write, 1024>,
    failing: Option<Channel>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            writes: heapless::Vec::new(),
            failing: None,
        }
    }

    /// Rejects every write to `channel`
    pub fn failing_on(channel: Channel) -> Self {
        Self {
            writes: heapless::Vec::new(),
            failing: Some(channel),
        }
    }

    pub fn writes(&self) -> &[Write] {
        &self.writes
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }

    /// Digital levels from the last three writes, if they were R, G, B digital writes
    pub fn last_levels(&self) -> Option<ChannelLevels> {
        match self.writes.as_slice() {
            [
                ..,
                Write::Digital(Channel::Red, r),
                Write::Digital(Channel::Green, g),
                Write::Digital(Channel::Blue, b),
            ] => Some(ChannelLevels::new(*r, *g, *b)),
            _ => None,
        }
    }

    /// Intensities from the last three writes, if they were R, G, B intensity writes
    pub fn last_color(&self) -> Option<Rgb8> {
        match self.writes.as_slice() {
            [
                ..,
                Write::Intensity(Channel::Red, r),
                Write::Intensity(Channel::Green, g),
                Write::Intensity(Channel::Blue, b),
            ] => Some(Srgb::new(*r, *g, *b)),
            _ => None,
        }
    }

    fn record(&mut self, write: Write, channel: Channel) -> Result<(), OutputError> {
        let _ = self.writes.push(write);
        if self.failing == Some(channel) {
            Err(OutputError::WriteFailed(channel))
        } else {
            Ok(())
        }
    }
}

impl RgbOutput for MockOutput {
    fn configure(&mut self, channel: Channel) -> Result<(), OutputError> {
        self.record(Write::Configure(channel), channel)
    }

    fn write_digital(&mut self, channel: Channel, lit: bool) -> Result<(), OutputError> {
        self.record(Write::Digital(channel, lit), channel)
    }

    fn write_intensity(&mut self, channel: Channel, value: u8) -> Result<(), OutputError> {
        self.record(Write::Intensity(channel, value), channel)
    }
}

// ============================================================================
// Mock PWM channel
// ============================================================================

/// Mock embedded-hal PWM channel with a 0-255 duty range
pub struct MockPwm {
    pub duty: u16,
    pub fail: bool,
}

impl MockPwm {
    pub const MAX_DUTY: u16 = 255;

    pub fn new() -> Self {
        Self { duty: 0, fail: false }
    }

    pub fn failing() -> Self {
        Self { duty: 0, fail: true }
    }

    pub fn is_high(&self) -> bool {
        self.duty == Self::MAX_DUTY
    }
}

impl embedded_hal::pwm::ErrorType for MockPwm {
    type Error = embedded_hal::pwm::ErrorKind;
}

impl embedded_hal::pwm::SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        Self::MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.fail {
            return Err(embedded_hal::pwm::ErrorKind::Other);
        }
        self.duty = duty;
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that counts yields and raises a stop flag after a fixed number
pub struct MockDelay<'a> {
    pub calls: u32,
    pub total_ms: u64,
    stop_after: u32,
    stop: &'a AtomicBool,
}

impl<'a> MockDelay<'a> {
    pub fn stopping_after(stop_after: u32, stop: &'a AtomicBool) -> Self {
        Self {
            calls: 0,
            total_ms: 0,
            stop_after,
            stop,
        }
    }

    fn yielded(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += u64::from(ms);
        if self.calls >= self.stop_after {
            self.stop.store(true, Ordering::Release);
        }
    }
}

impl embedded_hal::delay::DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.yielded(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.yielded(ms);
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.yielded(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.yielded(ms);
    }
}
