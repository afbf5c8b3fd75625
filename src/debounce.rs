//! Button debouncing for raw edge interrupts.
//!
//! The gate is fed every raw edge the button interrupt sees, including bounces
//! and edges in the release direction. It accepts an edge only when the pin
//! reads pressed and more than the threshold has elapsed since the last
//! accepted edge. Elapsed time uses wrapping subtraction on the 32-bit counter.

use crate::time::{TickDuration, TickInstant, TimerClock};
use crate::types::{ButtonEdge, ConfigError, PinLevel, ToggleEvent};

/// Debounce settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    threshold: TickDuration,
    active_level: PinLevel,
}

impl DebounceConfig {
    /// Creates a config from a threshold in timer counts.
    ///
    /// An edge is accepted only if strictly more than `threshold` counts have
    /// passed since the last accepted one.
    ///
    /// # Errors
    /// * `ZeroThreshold` - `threshold` is zero
    pub const fn new(threshold: TickDuration, active_level: PinLevel) -> Result<Self, ConfigError> {
        if threshold.counts() == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        Ok(Self {
            threshold,
            active_level,
        })
    }

    /// Creates a config from a threshold in milliseconds on `clock`.
    pub const fn from_millis(
        clock: &TimerClock,
        millis: u32,
        active_level: PinLevel,
    ) -> Result<Self, ConfigError> {
        Self::new(clock.duration_from_millis(millis), active_level)
    }

    /// 50 ms on the 31 250 Hz reference timer (1563 counts), pulled-up button
    /// that reads low when pressed.
    pub const fn reference() -> Self {
        Self {
            threshold: TimerClock::reference().duration_from_millis(crate::DEBOUNCE_MS),
            active_level: PinLevel::Low,
        }
    }

    /// Minimum counts between accepted edges.
    pub const fn threshold(&self) -> TickDuration {
        self.threshold
    }

    /// Pin level that means "pressed".
    pub const fn active_level(&self) -> PinLevel {
        self.active_level
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::reference()
    }
}

/// Edge filter that emits at most one [`ToggleEvent`] per physical press.
///
/// Safe to run in interrupt context: no allocation, no loops, no blocking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceGate {
    config: DebounceConfig,
    last_accepted: Option<TickInstant>,
}

impl DebounceGate {
    /// Creates a gate that has never accepted an edge.
    pub const fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            last_accepted: None,
        }
    }

    /// Filters one raw edge.
    ///
    /// Returns `Some` only for an accepted press; everything else is dropped.
    pub fn on_raw_edge(&mut self, edge: ButtonEdge) -> Option<ToggleEvent> {
        if edge.level != self.config.active_level {
            debug!("edge at {} ignored: button released", edge.timestamp.0);
            return None;
        }

        if let Some(last) = self.last_accepted {
            let elapsed = edge.timestamp.duration_since(last);
            if elapsed <= self.config.threshold {
                debug!("edge at {} ignored: bounce ({} counts)", edge.timestamp.0, elapsed.0);
                return None;
            }
        }

        self.last_accepted = Some(edge.timestamp);
        Some(ToggleEvent { at: edge.timestamp })
    }

    /// Timestamp of the last accepted edge, if any.
    pub fn last_accepted(&self) -> Option<TickInstant> {
        self.last_accepted
    }

    /// Returns the gate's configuration.
    pub fn config(&self) -> &DebounceConfig {
        &self.config
    }

    /// Forgets the last accepted edge, so the next press is accepted.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
