#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ModeScheduler`**: Periodic task that maps a `DeviceState` to a static color each tick
//! - **`Interpolator`**: Time-based linear fade through a cyclic `ColorSequence`
//! - **`BlinkPhase`**: Boolean oscillator shared by the blink routines within a tick
//! - **`Pulse`**: Triangle-wave brightness used by the pulse routines
//! - **`NamedColor`**: Closed set of static colors with an all-on fallback
//! - **`RgbOutput`**: Trait to implement for your LED hardware
//! - **`OutputDriver`**: Log-and-continue wrapper that writes R, G and B channels
//! - **`IndicatorCommand`**: Independently invokable display routines
//!
//! Intensities are 8-bit (`Srgb<u8>`, aliased as [`Rgb8`]). Digital levels are
//! logical: `true` means the channel is lit. Electrical polarity is handled by the
//! output implementation (see [`PwmOutput`] and [`Polarity`]).

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod fmt;

pub mod time;
pub mod types;
pub mod config;
pub mod output;
pub mod static_color;
pub mod blink;
pub mod pulse;
pub mod transition;
pub mod command;
pub mod scheduler;

pub use blink::{BlinkPattern, BlinkPhase, SteppedCycle};
pub use command::IndicatorCommand;
pub use config::{ConfigError, IndicatorConfig};
pub use output::{OutputDriver, OutputError, Polarity, PwmOutput, RgbOutput};
pub use pulse::{Pulse, PulseColor};
pub use scheduler::{DeviceState, DeviceStateSource, ModeScheduler};
pub use static_color::NamedColor;
pub use time::{Millis, TimeDuration, TimeInstant, TimeSource, VirtualClock, VirtualInstant};
pub use transition::{ColorSequence, Interpolator, SequenceBuilder, SequenceError};
pub use types::{Channel, ChannelLevels, Rgb8};

/// All channels at zero intensity.
pub const COLOR_OFF: Rgb8 = Srgb::new(0, 0, 0);
