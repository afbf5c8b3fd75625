//! Event-based control for the LED bank.

use crate::types::ButtonEdge;

/// Input to [`LedBankState::handle_event`](crate::LedBankState::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BankEvent {
    /// One period of the step timer elapsed.
    Tick,
    /// The button pin changed.
    Edge(ButtonEdge),
}

impl From<ButtonEdge> for BankEvent {
    fn from(edge: ButtonEdge) -> Self {
        BankEvent::Edge(edge)
    }
}
