//! Core types shared by the sequencer, the debounce gate and the mode controller.

use crate::time::TickInstant;

/// Which pattern the LED bank is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// All LEDs blink "COE" in Morse code.
    #[default]
    Morse,

    /// One dark LED walks across the bank.
    Shift,
}

impl Mode {
    /// Returns the other mode.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Mode::Morse => Mode::Shift,
            Mode::Shift => Mode::Morse,
        }
    }

    /// Upper-case name, as printed on a mode change.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Morse => "MORSE",
            Mode::Shift => "SHIFT",
        }
    }

    /// Dense index for per-mode storage.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Mode::Morse => 0,
            Mode::Shift => 1,
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of a pattern: bit `i` set means LED `i` is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedMask(pub u8);

impl LedMask {
    /// Every LED lit.
    pub const ALL_ON: Self = LedMask(0xFF);

    /// Every LED dark.
    pub const ALL_OFF: Self = LedMask(0x00);

    /// All LEDs lit except `index`.
    ///
    /// `index` is taken modulo 8.
    #[inline]
    pub const fn single_off(index: usize) -> Self {
        LedMask(!(1u8 << (index % 8)))
    }

    /// Whether LED `index` is lit in this mask. Indices past 7 are never lit.
    #[inline]
    pub const fn is_lit(self, index: usize) -> bool {
        index < 8 && self.0 & (1 << index) != 0
    }
}

impl From<u8> for LedMask {
    fn from(bits: u8) -> Self {
        LedMask(bits)
    }
}

impl From<LedMask> for u8 {
    fn from(mask: LedMask) -> Self {
        mask.0
    }
}

/// Electrical level of the button pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Low,
    High,
}

impl PinLevel {
    /// Converts an `is_high()` reading.
    #[inline]
    pub const fn from_high(is_high: bool) -> Self {
        if is_high { PinLevel::High } else { PinLevel::Low }
    }
}

/// A raw, unvalidated transition reported by the button interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdge {
    /// Counter value when the edge was serviced.
    pub timestamp: TickInstant,

    /// Pin level sampled in the handler.
    pub level: PinLevel,
}

impl ButtonEdge {
    /// Creates an edge from an explicit timestamp.
    #[inline]
    pub const fn new(timestamp: TickInstant, level: PinLevel) -> Self {
        Self { timestamp, level }
    }

    /// Creates an edge stamped with the current time of `clock`.
    #[inline]
    pub fn sample<T: crate::time::TimeSource>(clock: &T, level: PinLevel) -> Self {
        Self::new(clock.now(), level)
    }
}

/// A validated button press: the mode should flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToggleEvent {
    /// Timestamp of the edge that was accepted.
    pub at: TickInstant,
}

/// Pattern table validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// No steps provided.
    EmptyTable,
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternError::EmptyTable => write!(f, "pattern table must have at least one step"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce threshold of zero counts.
    ZeroThreshold,

    /// Timer rate of zero counts per second.
    ZeroClockRate,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroThreshold => {
                write!(f, "debounce threshold must be at least one timer count")
            }
            ConfigError::ZeroClockRate => {
                write!(f, "timer rate must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
