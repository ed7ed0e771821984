//! Command-based control for the independently invokable display routines.

use crate::blink::BlinkPattern;
use crate::pulse::PulseColor;
use crate::static_color::NamedColor;
use crate::types::Rgb8;

/// A display routine that can be run outside the device-state dispatch.
///
/// None of these are selected by the periodic tick; callers that want a blink,
/// pulse or fade invoke them explicitly, typically once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorCommand {
    /// Show a named static color.
    Static(NamedColor),
    /// Write an arbitrary intensity triple.
    Color(Rgb8),
    /// Show a blink pattern at the current blink phase.
    Blink(BlinkPattern),
    /// Write the next pulse brightness.
    Pulse(PulseColor),
    /// Write the fade color for the current virtual time.
    Fade,
    /// Show the stepped cyan, magenta, yellow cycle.
    SteppedCycle,
    /// All channels on.
    On,
    /// All channels off.
    Off,
}
