//! Time abstraction over a free-running, wrapping 32-bit counter.

use crate::types::ConfigError;

/// Trait for abstracting the free-running timer.
pub trait TimeSource {
    /// Returns the current counter value.
    fn now(&self) -> TickInstant;
}

/// A span of timer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickDuration(pub u32);

impl TickDuration {
    /// Zero duration constant.
    pub const ZERO: Self = TickDuration(0);

    /// Largest representable span; used as "a long time ago".
    pub const MAX: Self = TickDuration(u32::MAX);

    /// Returns the number of counts.
    #[inline]
    pub const fn counts(self) -> u32 {
        self.0
    }
}

/// A reading of the free-running counter.
///
/// The counter wraps at `u32::MAX`, so instants are only meaningful relative
/// to each other and only across less than one full counter period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInstant(pub u32);

impl TickInstant {
    /// Counts elapsed since an earlier instant, tolerating one counter wrap.
    #[inline]
    pub const fn duration_since(self, earlier: TickInstant) -> TickDuration {
        TickDuration(self.0.wrapping_sub(earlier.0))
    }

    /// Instant `duration` counts later, wrapping with the counter.
    #[inline]
    pub const fn wrapping_add(self, duration: TickDuration) -> TickInstant {
        TickInstant(self.0.wrapping_add(duration.0))
    }
}

/// Rate of the free-running counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerClock {
    counts_per_second: u32,
}

impl TimerClock {
    /// Creates a clock description from the counter rate in Hz.
    ///
    /// # Errors
    /// * `ZeroClockRate` - `counts_per_second` is zero
    pub const fn new(counts_per_second: u32) -> Result<Self, ConfigError> {
        if counts_per_second == 0 {
            return Err(ConfigError::ZeroClockRate);
        }
        Ok(Self { counts_per_second })
    }

    /// The 31 250 Hz reference timer (8 MHz peripheral clock, /256 prescaler).
    pub const fn reference() -> Self {
        Self {
            counts_per_second: crate::REFERENCE_TIMER_HZ,
        }
    }

    /// Returns the counter rate in Hz.
    pub const fn counts_per_second(&self) -> u32 {
        self.counts_per_second
    }

    /// Converts milliseconds to counter counts, rounding up.
    ///
    /// Saturates at `TickDuration::MAX` for spans longer than one counter period.
    pub const fn duration_from_millis(&self, millis: u32) -> TickDuration {
        let counts = (millis as u64 * self.counts_per_second as u64).div_ceil(1000);
        if counts > u32::MAX as u64 {
            TickDuration::MAX
        } else {
            TickDuration(counts as u32)
        }
    }

    /// Converts counter counts to whole milliseconds, rounding down.
    pub const fn millis_from_duration(&self, duration: TickDuration) -> u64 {
        duration.0 as u64 * 1000 / self.counts_per_second as u64
    }
}

impl Default for TimerClock {
    fn default() -> Self {
        Self::reference()
    }
}
