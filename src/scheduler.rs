//! Periodic mode scheduler that reflects the device state on the LED.
//!
//! Provides [`ModeScheduler`], which owns every piece of mutable indicator state
//! (virtual clock, blink phase, fade and pulse state) and the [`OutputDriver`].
//! Each [`tick`](ModeScheduler::tick) advances the clock, updates the blink
//! phase and shows the static color for the current [`DeviceState`].

use crate::blink::{BlinkPattern, BlinkPhase, SteppedCycle};
use crate::command::IndicatorCommand;
use crate::config::{ConfigError, IndicatorConfig};
use crate::output::{OutputDriver, RgbOutput};
use crate::pulse::{Pulse, PulseColor};
use crate::static_color::{NamedColor, set_static_color};
use crate::time::{TimeSource, VirtualClock, VirtualInstant};
use crate::transition::{ColorSequence, Interpolator};
use crate::types::Rgb8;
use core::cell::Cell;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Overall device mode, owned and written by another subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    Idle,
    SoftAp,
    Processing,
    Speaking,
    Listening,
    Ota,
    /// A raw state outside 0-5, which this indicator has no dedicated color for.
    ///
    /// `Other(0)` through `Other(5)` are accepted and treated as the named state
    /// with that raw value; see [`normalized`](Self::normalized).
    Other(u8),
}

impl DeviceState {
    /// Raw encoding used when the state is shared through an [`AtomicU8`].
    pub fn raw(self) -> u8 {
        match self {
            DeviceState::Idle => 0,
            DeviceState::SoftAp => 1,
            DeviceState::Processing => 2,
            DeviceState::Speaking => 3,
            DeviceState::Listening => 4,
            DeviceState::Ota => 5,
            DeviceState::Other(raw) => raw,
        }
    }

    /// Canonical form: `Other` holding a known raw value becomes that named state.
    pub fn normalized(self) -> Self {
        DeviceState::from(self.raw())
    }

    /// Static color shown while the device is in this state.
    pub fn static_color(self) -> NamedColor {
        match self.normalized() {
            DeviceState::Idle => NamedColor::Green,
            DeviceState::SoftAp => NamedColor::Magenta,
            DeviceState::Processing => NamedColor::Red,
            DeviceState::Speaking => NamedColor::Blue,
            DeviceState::Listening => NamedColor::Yellow,
            DeviceState::Ota => NamedColor::Cyan,
            DeviceState::Other(_) => NamedColor::Green,
        }
    }
}

impl From<u8> for DeviceState {
    fn from(raw: u8) -> Self {
        match raw {
            0 => DeviceState::Idle,
            1 => DeviceState::SoftAp,
            2 => DeviceState::Processing,
            3 => DeviceState::Speaking,
            4 => DeviceState::Listening,
            5 => DeviceState::Ota,
            other => DeviceState::Other(other),
        }
    }
}

/// Read-only view of the externally owned device state.
pub trait DeviceStateSource {
    /// Returns the current device state.
    fn device_state(&self) -> DeviceState;
}

impl DeviceStateSource for DeviceState {
    fn device_state(&self) -> DeviceState {
        *self
    }
}

impl DeviceStateSource for AtomicU8 {
    fn device_state(&self) -> DeviceState {
        DeviceState::from(self.load(Ordering::Acquire))
    }
}

impl DeviceStateSource for Cell<DeviceState> {
    fn device_state(&self) -> DeviceState {
        self.get()
    }
}

impl<S: DeviceStateSource + ?Sized> DeviceStateSource for &S {
    fn device_state(&self) -> DeviceState {
        (**self).device_state()
    }
}

/// Drives a single tri-color status LED on a fixed tick.
///
/// The scheduler keeps its own virtual clock: every tick adds the configured
/// tick interval, so behavior depends only on the number of ticks, never on
/// wall time. Ticks must not overlap; the scheduler is the only writer of the
/// LED and of its own state.
///
/// # Type Parameters
/// * `O` - LED output implementation type
/// * `N` - Maximum number of colors in the fade sequence
pub struct ModeScheduler<O: RgbOutput, const N: usize> {
    driver: OutputDriver<O>,
    config: IndicatorConfig,
    clock: VirtualClock,
    blink: BlinkPhase<VirtualInstant>,
    interpolator: Interpolator<VirtualInstant, N>,
    pulse: Pulse,
    stepped: SteppedCycle<VirtualInstant>,
    last_state: Option<DeviceState>,
}

impl<O: RgbOutput> ModeScheduler<O, 3> {
    /// Creates a scheduler with the default configuration and fade table.
    pub fn with_defaults(output: O) -> Self {
        Self::assemble(
            output,
            IndicatorConfig::default(),
            ColorSequence::cyan_magenta_yellow(),
        )
    }
}

impl<O: RgbOutput, const N: usize> ModeScheduler<O, N> {
    /// Creates a scheduler. No hardware is touched until [`setup`](Self::setup).
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if any configured interval is zero.
    pub fn new(
        output: O,
        config: IndicatorConfig,
        sequence: ColorSequence<N>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(output, config, sequence))
    }

    fn assemble(output: O, config: IndicatorConfig, sequence: ColorSequence<N>) -> Self {
        let clock = VirtualClock::default();
        let start = clock.now();
        Self {
            driver: OutputDriver::new(output),
            config,
            clock,
            blink: BlinkPhase::new(start, config.toggle_interval),
            interpolator: Interpolator::new(sequence, config.transition_duration),
            pulse: Pulse::new(config.pulse_step),
            stepped: SteppedCycle::new(start, config.step_hold),
            last_state: None,
        }
    }

    /// Configures the three output lines and forces them off.
    pub fn setup(&mut self) {
        self.driver.setup();
    }

    /// Runs one tick and returns the static color shown.
    ///
    /// Advances the virtual clock by one tick interval, flips the blink phase
    /// if its interval has elapsed, then shows the static color for `state`.
    pub fn tick(&mut self, state: DeviceState) -> NamedColor {
        let state = state.normalized();
        let now = self.clock.advance(self.config.tick_interval);
        self.blink.advance(now);

        if self.last_state != Some(state) {
            debug!("device state changed to {}", state);
            self.last_state = Some(state);
        }

        let color = state.static_color();
        set_static_color(&mut self.driver, color);
        color
    }

    /// Runs ticks until `stop` is set, yielding through `delay` between ticks.
    ///
    /// Calls [`setup`](Self::setup) first. `stop` is checked once per tick boundary.
    pub fn run<S, D>(&mut self, source: &S, stop: &AtomicBool, delay: &mut D)
    where
        S: DeviceStateSource + ?Sized,
        D: embedded_hal::delay::DelayNs,
    {
        self.setup();
        while !stop.load(Ordering::Acquire) {
            self.tick(source.device_state());
            delay.delay_ms(self.tick_delay_ms());
        }
        debug!("indicator loop stopped at {} ms", self.clock.now().as_millis());
    }

    /// Async form of [`run`](Self::run) for cooperative executors.
    pub async fn run_async<S, D>(&mut self, source: &S, stop: &AtomicBool, delay: &mut D)
    where
        S: DeviceStateSource + ?Sized,
        D: embedded_hal_async::delay::DelayNs,
    {
        self.setup();
        while !stop.load(Ordering::Acquire) {
            self.tick(source.device_state());
            delay.delay_ms(self.tick_delay_ms()).await;
        }
        debug!("indicator loop stopped at {} ms", self.clock.now().as_millis());
    }

    /// Runs one independently invokable display routine.
    pub fn handle_command(&mut self, command: IndicatorCommand) {
        match command {
            IndicatorCommand::Static(color) => self.set_static(color),
            IndicatorCommand::Color(color) => self.set_color(color),
            IndicatorCommand::Blink(pattern) => self.blink(pattern),
            IndicatorCommand::Pulse(color) => {
                self.pulse(color);
            }
            IndicatorCommand::Fade => {
                self.fade();
            }
            IndicatorCommand::SteppedCycle => {
                self.stepped_cycle();
            }
            IndicatorCommand::On => self.turn_on(),
            IndicatorCommand::Off => self.turn_off(),
        }
    }

    /// Shows a named static color.
    pub fn set_static(&mut self, color: NamedColor) {
        set_static_color(&mut self.driver, color);
    }

    /// Writes an intensity triple directly, bypassing the named-color table.
    pub fn set_color(&mut self, color: Rgb8) {
        self.driver.set_color(color);
    }

    /// Shows `pattern` at the current blink phase.
    pub fn blink(&mut self, pattern: BlinkPattern) {
        pattern.show(&mut self.driver, self.blink.is_on());
    }

    /// Writes `color` at the next pulse brightness and returns it.
    ///
    /// For [`PulseColor::Cyan`] the red channel is not written; see [`Pulse::show`].
    pub fn pulse(&mut self, color: PulseColor) -> Rgb8 {
        self.pulse.show(&mut self.driver, color)
    }

    /// Writes the fade color for the current virtual time.
    pub fn fade(&mut self) -> Rgb8 {
        let now = self.clock.now();
        self.interpolator.render(&mut self.driver, now)
    }

    /// Shows the stepped-cycle color for the current virtual time.
    pub fn stepped_cycle(&mut self) -> NamedColor {
        let now = self.clock.now();
        self.stepped.show(&mut self.driver, now)
    }

    /// Drives every channel on.
    pub fn turn_on(&mut self) {
        self.driver.turn_on();
    }

    /// Drives every channel off.
    pub fn turn_off(&mut self) {
        self.driver.turn_off();
    }

    /// Current virtual time.
    pub fn now(&self) -> VirtualInstant {
        self.clock.now()
    }

    /// Current blink phase.
    pub fn blink_on(&self) -> bool {
        self.blink.is_on()
    }

    /// State shown by the most recent tick, if any.
    pub fn last_state(&self) -> Option<DeviceState> {
        self.last_state
    }

    /// Active configuration.
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Fade state.
    pub fn interpolator(&self) -> &Interpolator<VirtualInstant, N> {
        &self.interpolator
    }

    /// Output driver, e.g. to inspect failed writes.
    pub fn driver(&self) -> &OutputDriver<O> {
        &self.driver
    }

    /// Releases the LED output.
    pub fn into_output(self) -> O {
        self.driver.into_inner()
    }

    fn tick_delay_ms(&self) -> u32 {
        u32::try_from(self.config.tick_interval.0).unwrap_or(u32::MAX)
    }
}
