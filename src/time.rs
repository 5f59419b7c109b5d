//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Clocks that can overflow must use modular (wrapping) arithmetic here.
    /// An `earlier` that is actually later than `self` then shows up as a very
    /// large duration, which callers treat as a wrap or a backwards jump.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u64);

impl TimeDuration for MillisDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Instant backed by a free-running 32-bit millisecond counter.
///
/// The counter wraps after ~49.7 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Returns the raw counter value.
    pub fn as_millis(&self) -> u32 {
        self.0
    }
}

impl TimeInstant for Millis {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0) as u64)
    }
}
