//! The mutable record shared by the tick handler and the button handler.

use crate::controller::ModeController;
use crate::debounce::{DebounceConfig, DebounceGate};
use crate::event::BankEvent;
use crate::pattern::{MORSE_TABLE, SHIFT_TABLE};
use crate::sequencer::{LedBank, Sequencer, StepCursor};
use crate::time::TickInstant;
use crate::types::{ButtonEdge, LedMask, Mode, ToggleEvent};

/// Mode, both step cursors and the debounce state, as one value.
///
/// Methods take `&mut self`; wrap the record in [`SharedLedBank`](crate::SharedLedBank)
/// or split it with [`handoff`](crate::handoff) to reach it from two interrupts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedBankState {
    controller: ModeController,
    sequencer: Sequencer,
    gate: DebounceGate,
}

impl LedBankState {
    /// Creates the power-on state: Morse mode, both cursors at the first step,
    /// no press accepted yet.
    pub const fn new(debounce: DebounceConfig) -> Self {
        Self {
            controller: ModeController::new(),
            sequencer: Sequencer::new(),
            gate: DebounceGate::new(debounce),
        }
    }

    /// Periodic tick: shows the active mode's current step and advances it.
    pub fn on_tick<L: LedBank + ?Sized>(&mut self, leds: &mut L) -> LedMask {
        self.sequencer.advance_and_render(self.controller.mode(), leds)
    }

    /// Raw button edge: flips the mode if the debounce gate accepts the edge.
    pub fn on_raw_edge(&mut self, edge: ButtonEdge) -> Option<ToggleEvent> {
        let event = self.gate.on_raw_edge(edge)?;
        self.on_toggle_event(event);
        Some(event)
    }

    /// Applies an already validated toggle.
    pub fn on_toggle_event(&mut self, event: ToggleEvent) -> Mode {
        self.controller.on_toggle_event(event, &mut self.sequencer)
    }

    /// Dispatches one event to the matching handler.
    ///
    /// Returns the toggle for an accepted edge, `None` for ticks and rejected edges.
    pub fn handle_event<L: LedBank + ?Sized>(
        &mut self,
        event: BankEvent,
        leds: &mut L,
    ) -> Option<ToggleEvent> {
        match event {
            BankEvent::Tick => {
                self.on_tick(leds);
                None
            }
            BankEvent::Edge(edge) => self.on_raw_edge(edge),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Cursor of `mode`.
    pub fn cursor(&self, mode: Mode) -> StepCursor {
        self.sequencer.cursor(mode)
    }

    /// Timestamp of the last accepted button press.
    pub fn last_accepted(&self) -> Option<TickInstant> {
        self.gate.last_accepted()
    }

    /// Returns the debounce settings.
    pub fn debounce_config(&self) -> &DebounceConfig {
        self.gate.config()
    }

    /// Logs the pattern lengths and debounce threshold.
    pub fn log_configuration(&self) {
        info!("initial mode: {}", self.mode().name());
        info!("morse pattern length: {} steps", MORSE_TABLE.len());
        info!("shift pattern length: {} steps", SHIFT_TABLE.len());
        info!("debounce threshold: {} counts", self.gate.config().threshold().0);
    }
}

impl Default for LedBankState {
    fn default() -> Self {
        Self::new(DebounceConfig::reference())
    }
}
