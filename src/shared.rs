//! Interrupt-safe wrapper around [`LedBankState`].
//!
//! Every entry point runs the whole handler inside one critical section, so a
//! tick can never observe a half-applied toggle and a toggle can never land
//! between a tick's read of the mode and its cursor update.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::debounce::DebounceConfig;
use crate::sequencer::{LedBank, StepCursor};
use crate::state::LedBankState;
use crate::time::TickInstant;
use crate::types::{ButtonEdge, LedMask, Mode, ToggleEvent};

/// [`LedBankState`] behind a `critical_section::Mutex`, suitable for a `static`.
pub struct SharedLedBank {
    state: Mutex<RefCell<LedBankState>>,
}

impl SharedLedBank {
    /// Creates the power-on state.
    pub const fn new(debounce: DebounceConfig) -> Self {
        Self {
            state: Mutex::new(RefCell::new(LedBankState::new(debounce))),
        }
    }

    /// Tick interrupt entry point.
    pub fn on_tick<L: LedBank + ?Sized>(&self, leds: &mut L) -> LedMask {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).on_tick(leds))
    }

    /// Button interrupt entry point.
    pub fn on_raw_edge(&self, edge: ButtonEdge) -> Option<ToggleEvent> {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).on_raw_edge(edge))
    }

    /// Snapshot of the current mode.
    pub fn mode(&self) -> Mode {
        critical_section::with(|cs| self.state.borrow_ref(cs).mode())
    }

    /// Snapshot of the cursor of `mode`.
    pub fn cursor(&self, mode: Mode) -> StepCursor {
        critical_section::with(|cs| self.state.borrow_ref(cs).cursor(mode))
    }

    /// Snapshot of the last accepted press.
    pub fn last_accepted(&self) -> Option<TickInstant> {
        critical_section::with(|cs| self.state.borrow_ref(cs).last_accepted())
    }

    /// Runs `f` with exclusive access to the record.
    pub fn with<R>(&self, f: impl FnOnce(&mut LedBankState) -> R) -> R {
        critical_section::with(|cs| f(&mut self.state.borrow_ref_mut(cs)))
    }
}

impl Default for SharedLedBank {
    fn default() -> Self {
        Self::new(DebounceConfig::reference())
    }
}
