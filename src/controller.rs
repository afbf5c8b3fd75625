//! Mode selection.

use crate::sequencer::Sequencer;
use crate::types::{Mode, ToggleEvent};

/// Owns the current [`Mode`]. Starts in [`Mode::Morse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    /// Creates a controller in [`Mode::Morse`].
    pub const fn new() -> Self {
        Self { mode: Mode::Morse }
    }

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Flips the mode and rewinds the entered mode's cursor.
    ///
    /// The cursor of the mode being left keeps its position.
    pub fn on_toggle_event(&mut self, event: ToggleEvent, sequencer: &mut Sequencer) -> Mode {
        self.mode = self.mode.other();
        sequencer.reset(self.mode);
        info!("button pressed at {}: mode = {}", event.at.0, self.mode.name());
        self.mode
    }
}
