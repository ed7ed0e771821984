//! Time abstraction traits and the scheduler's virtual time base.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant (ZERO if `earlier` is later).
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u64);

impl TimeDuration for Millis {
    const ZERO: Self = Millis(0);

    #[inline]
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// A point on the scheduler's virtual time line, in milliseconds since an arbitrary epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VirtualInstant(pub u64);

impl VirtualInstant {
    /// Epoch of the virtual time line.
    pub const ZERO: Self = VirtualInstant(0);

    /// Milliseconds since the epoch.
    #[inline]
    pub fn as_millis(&self) -> u64 {
        self.0
    }
}

impl TimeInstant for VirtualInstant {
    type Duration = Millis;

    #[inline]
    fn duration_since(&self, earlier: Self) -> Millis {
        Millis(self.0.saturating_sub(earlier.0))
    }
}

/// Deterministic clock advanced once per scheduler tick.
///
/// The clock never reads wall time: the same sequence of ticks always produces
/// the same sequence of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VirtualClock {
    now: VirtualInstant,
}

impl VirtualClock {
    /// Creates a clock at the given instant.
    pub const fn starting_at(start: VirtualInstant) -> Self {
        Self { now: start }
    }

    /// Advances the clock, saturating at the end of the time line.
    pub fn advance(&mut self, by: Millis) -> VirtualInstant {
        self.now = VirtualInstant(self.now.0.saturating_add(by.0));
        self.now
    }
}

impl TimeSource<VirtualInstant> for VirtualClock {
    fn now(&self) -> VirtualInstant {
        self.now
    }
}
