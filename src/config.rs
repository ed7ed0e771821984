//! Timing configuration for the indicator.

use crate::time::Millis;

/// Timing parameters for the mode scheduler and its display routines.
///
/// Every value defaults to the cadence the indicator was tuned for: a 20ms tick,
/// blink toggling every 200ms, 1000ms per color fade, 500ms per stepped-cycle
/// color and a pulse brightness step of 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorConfig {
    /// Virtual time added to the clock on each tick.
    pub tick_interval: Millis,

    /// Time between blink phase toggles.
    pub toggle_interval: Millis,

    /// Duration of one color-to-color fade.
    pub transition_duration: Millis,

    /// How long the stepped cycle holds each color.
    pub step_hold: Millis,

    /// Brightness change per pulse call.
    pub pulse_step: u8,
}

impl IndicatorConfig {
    pub const DEFAULT_TICK_INTERVAL: Millis = Millis(20);
    pub const DEFAULT_TOGGLE_INTERVAL: Millis = Millis(200);
    pub const DEFAULT_TRANSITION_DURATION: Millis = Millis(1000);
    pub const DEFAULT_STEP_HOLD: Millis = Millis(500);
    pub const DEFAULT_PULSE_STEP: u8 = 5;

    /// Sets the tick interval.
    pub fn with_tick_interval(mut self, interval: Millis) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Sets the blink toggle interval.
    pub fn with_toggle_interval(mut self, interval: Millis) -> Self {
        self.toggle_interval = interval;
        self
    }

    /// Sets the fade duration.
    pub fn with_transition_duration(mut self, duration: Millis) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Sets the stepped-cycle hold time.
    pub fn with_step_hold(mut self, hold: Millis) -> Self {
        self.step_hold = hold;
        self
    }

    /// Sets the pulse brightness step.
    pub fn with_pulse_step(mut self, step: u8) -> Self {
        self.pulse_step = step;
        self
    }

    /// Checks that every interval is non-zero.
    ///
    /// # Errors
    /// Returns the first zero-valued parameter found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.0 == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.toggle_interval.0 == 0 {
            return Err(ConfigError::ZeroToggleInterval);
        }
        if self.transition_duration.0 == 0 {
            return Err(ConfigError::ZeroTransitionDuration);
        }
        if self.step_hold.0 == 0 {
            return Err(ConfigError::ZeroStepHold);
        }
        if self.pulse_step == 0 {
            return Err(ConfigError::ZeroPulseStep);
        }
        Ok(())
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            toggle_interval: Self::DEFAULT_TOGGLE_INTERVAL,
            transition_duration: Self::DEFAULT_TRANSITION_DURATION,
            step_hold: Self::DEFAULT_STEP_HOLD,
            pulse_step: Self::DEFAULT_PULSE_STEP,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick interval is zero; the virtual clock would never advance.
    ZeroTickInterval,

    /// Blink toggle interval is zero.
    ZeroToggleInterval,

    /// Fade duration is zero.
    ZeroTransitionDuration,

    /// Stepped-cycle hold time is zero.
    ZeroStepHold,

    /// Pulse step is zero; brightness would never change.
    ZeroPulseStep,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTickInterval => write!(f, "tick interval must be non-zero"),
            ConfigError::ZeroToggleInterval => write!(f, "blink toggle interval must be non-zero"),
            ConfigError::ZeroTransitionDuration => {
                write!(f, "transition duration must be non-zero")
            }
            ConfigError::ZeroStepHold => write!(f, "stepped cycle hold time must be non-zero"),
            ConfigError::ZeroPulseStep => write!(f, "pulse step must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_tuned_cadence() {
        let config = IndicatorConfig::default();
        assert_eq!(config.tick_interval, Millis(20));
        assert_eq!(config.toggle_interval, Millis(200));
        assert_eq!(config.transition_duration, Millis(1000));
        assert_eq!(config.step_hold, Millis(500));
        assert_eq!(config.pulse_step, 5);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_intervals() {
        let base = IndicatorConfig::default();
        assert_eq!(
            base.with_tick_interval(Millis(0)).validate(),
            Err(ConfigError::ZeroTickInterval)
        );
        assert_eq!(
            base.with_toggle_interval(Millis(0)).validate(),
            Err(ConfigError::ZeroToggleInterval)
        );
        assert_eq!(
            base.with_transition_duration(Millis(0)).validate(),
            Err(ConfigError::ZeroTransitionDuration)
        );
        assert_eq!(
            base.with_step_hold(Millis(0)).validate(),
            Err(ConfigError::ZeroStepHold)
        );
        assert_eq!(
            base.with_pulse_step(0).validate(),
            Err(ConfigError::ZeroPulseStep)
        );
    }
}
