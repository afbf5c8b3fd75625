#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Mode`**: Which pattern is on display (`Morse` or `Shift`)
//! - **`PatternTable`**: A fixed, non-empty list of `LedMask` steps, one per tick
//! - **`Sequencer`**: Per-mode step cursors, advanced and rendered once per tick
//! - **`DebounceGate`**: Turns raw, bouncy button edges into at most one `ToggleEvent` per press
//! - **`ModeController`**: Flips the mode on a `ToggleEvent` and rewinds the entered mode
//! - **`LedBankState`**: The complete mutable record shared by the tick and button contexts
//! - **`SharedLedBank`**: `LedBankState` behind a critical section, usable from a `static`
//! - **`handoff`**: Alternative split into an `EdgeHandler` and a `TickHandler` joined by an SPSC queue
//! - **`LedBank`**: Trait to implement for your LED hardware
//! - **`TimeSource`**: Trait to implement for your free-running timer
//!
//! Time is measured in counts of a wrapping 32-bit counter. Intervals are always
//! computed with wrapping subtraction, so counter overflow is not a fault.

#[macro_use]
mod fmt;

pub mod time;
pub mod types;
pub mod pattern;
pub mod sequencer;
pub mod debounce;
pub mod controller;
pub mod state;
pub mod shared;
pub mod handoff;
pub mod event;

pub use time::{TickDuration, TickInstant, TimeSource, TimerClock};
pub use types::{ButtonEdge, ConfigError, LedMask, Mode, PatternError, PinLevel, ToggleEvent};
pub use pattern::{MORSE_TABLE, PatternTable, SHIFT_TABLE, steps};
pub use sequencer::{LedBank, Sequencer, StepCursor};
pub use debounce::{DebounceConfig, DebounceGate};
pub use controller::ModeController;
pub use state::LedBankState;
pub use shared::SharedLedBank;
pub use event::BankEvent;

/// Number of LEDs in the bank.
pub const NUM_LEDS: usize = 8;

/// Period of the step timer in milliseconds. One pattern step is shown per period.
pub const TICK_PERIOD_MS: u32 = 100;

/// Minimum time between accepted button presses in milliseconds.
pub const DEBOUNCE_MS: u32 = 50;

/// Rate of the reference free-running timer (8 MHz / 256 prescaler).
pub const REFERENCE_TIMER_HZ: u32 = 31_250;
