//! Cyclic color fades driven by elapsed time.

use crate::output::{OutputDriver, RgbOutput};
use crate::time::{Millis, TimeDuration, TimeInstant};
use crate::types::Rgb8;
use heapless::Vec;
use palette::{Mix, Srgb};

/// An ordered, cyclic list of fade targets.
///
/// Holds at least two colors. After the last color the fade wraps back to the first.
///
/// # Type Parameters
/// * `N` - Maximum number of colors this sequence can hold
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSequence<const N: usize> {
    colors: Vec<Rgb8, N>,
}

impl<const N: usize> ColorSequence<N> {
    /// Creates a new sequence builder.
    pub fn builder() -> SequenceBuilder<N> {
        SequenceBuilder::new()
    }

    /// Number of colors in the cycle.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; a built sequence holds at least two colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapping around the cycle.
    pub fn color(&self, index: usize) -> Rgb8 {
        self.colors[index % self.colors.len()]
    }

    /// All colors in cycle order.
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }
}

impl ColorSequence<3> {
    /// Cyan, magenta, yellow: the indicator's default fade table.
    pub fn cyan_magenta_yellow() -> Self {
        Self {
            colors: Vec::from_array([
                Srgb::new(0, 255, 255),
                Srgb::new(255, 0, 255),
                Srgb::new(255, 255, 0),
            ]),
        }
    }
}

impl Default for ColorSequence<3> {
    fn default() -> Self {
        Self::cyan_magenta_yellow()
    }
}

/// Builder for validated color sequences.
#[derive(Debug)]
pub struct SequenceBuilder<const N: usize> {
    colors: Vec<Rgb8, N>,
}

impl<const N: usize> SequenceBuilder<N> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Appends a color to the cycle.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the sequence already holds `N` colors.
    pub fn color(mut self, color: Rgb8) -> Result<Self, SequenceError> {
        self.colors
            .push(color)
            .map_err(|_| SequenceError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the sequence.
    ///
    /// # Errors
    /// Returns `TooFewColors` if fewer than two colors were added.
    pub fn build(self) -> Result<ColorSequence<N>, SequenceError> {
        if self.colors.len() < 2 {
            return Err(SequenceError::TooFewColors);
        }
        Ok(ColorSequence {
            colors: self.colors,
        })
    }
}

impl<const N: usize> Default for SequenceBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequence validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// Fewer than two colors; there is nothing to fade between.
    TooFewColors,

    /// Sequence capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequenceError::TooFewColors => {
                write!(f, "color sequence must have at least two colors")
            }
            SequenceError::CapacityExceeded => {
                write!(f, "sequence capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TransitionState<I> {
    Uninitialized,
    Active {
        index: usize,
        start: Rgb8,
        end: Rgb8,
        started_at: I,
    },
}

/// Linearly fades between consecutive colors of a [`ColorSequence`], forever.
///
/// The first call to [`update`](Self::update) anchors the fade at the caller's
/// time. Every call recomputes the fraction from that anchor, so no error
/// accumulates between calls. When a fade completes, the call that observes it
/// emits the end color and re-anchors at its own time; a late call still moves
/// at most one step.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `N` - Maximum number of colors in the sequence
#[derive(Debug, Clone)]
pub struct Interpolator<I: TimeInstant, const N: usize> {
    sequence: ColorSequence<N>,
    duration: Millis,
    state: TransitionState<I>,
}

impl<I: TimeInstant, const N: usize> Interpolator<I, N> {
    /// Creates an uninitialized interpolator.
    ///
    /// A zero `duration` completes every fade on the call that starts it.
    pub fn new(sequence: ColorSequence<N>, duration: Millis) -> Self {
        Self {
            sequence,
            duration,
            state: TransitionState::Uninitialized,
        }
    }

    /// Computes the color for `now` and advances to the next pair if the
    /// current fade has finished.
    pub fn update(&mut self, now: I) -> Rgb8 {
        let (index, start, end, started_at) = match self.state {
            TransitionState::Uninitialized => {
                let start = self.sequence.color(0);
                let end = self.sequence.color(1);
                self.state = TransitionState::Active {
                    index: 0,
                    start,
                    end,
                    started_at: now,
                };
                (0, start, end, now)
            }
            TransitionState::Active {
                index,
                start,
                end,
                started_at,
            } => (index, start, end, started_at),
        };

        let elapsed = now.duration_since(started_at).as_millis();
        let duration = self.duration.0;
        let fraction = if duration == 0 {
            1.0
        } else {
            (elapsed as f32 / duration as f32).clamp(0.0, 1.0)
        };
        let color = mix(start, end, fraction);

        if elapsed >= duration {
            let next = (index + 1) % self.sequence.len();
            self.state = TransitionState::Active {
                index: next,
                start: end,
                end: self.sequence.color(next + 1),
                started_at: now,
            };
        }

        color
    }

    /// Computes the color for `now`, writes it through `driver` and returns it.
    pub fn render<O: RgbOutput>(&mut self, driver: &mut OutputDriver<O>, now: I) -> Rgb8 {
        let color = self.update(now);
        driver.set_color(color);
        color
    }

    /// Index of the sequence color the current fade started from.
    pub fn index(&self) -> Option<usize> {
        match self.state {
            TransitionState::Uninitialized => None,
            TransitionState::Active { index, .. } => Some(index),
        }
    }

    /// The `(start, end)` colors of the current fade.
    pub fn active_pair(&self) -> Option<(Rgb8, Rgb8)> {
        match self.state {
            TransitionState::Uninitialized => None,
            TransitionState::Active { start, end, .. } => Some((start, end)),
        }
    }

    /// Returns `true` once the first update has anchored the fade.
    pub fn is_initialized(&self) -> bool {
        !matches!(self.state, TransitionState::Uninitialized)
    }

    /// Forgets the anchor; the next update restarts from the first color.
    pub fn reset(&mut self) {
        self.state = TransitionState::Uninitialized;
    }

    /// The color cycle.
    pub fn sequence(&self) -> &ColorSequence<N> {
        &self.sequence
    }

    /// Duration of one fade.
    pub fn duration(&self) -> Millis {
        self.duration
    }
}

/// Per-channel linear interpolation on the raw 0-255 values, truncated toward zero.
#[inline]
fn mix(start: Rgb8, end: Rgb8, fraction: f32) -> Rgb8 {
    let start: Srgb<f32> = Srgb::new(
        f32::from(start.red),
        f32::from(start.green),
        f32::from(start.blue),
    );
    let end: Srgb<f32> = Srgb::new(f32::from(end.red), f32::from(end.green), f32::from(end.blue));
    let mixed = start.mix(end, fraction);
    Srgb::new(mixed.red as u8, mixed.green as u8, mixed.blue as u8)
}
