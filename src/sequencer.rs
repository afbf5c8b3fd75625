//! Step sequencer with per-mode cursors.
//!
//! Provides [`Sequencer`], which renders one pattern step per tick to an
//! [`LedBank`] and advances the cursor of the active mode. Also defines the
//! [`LedBank`] trait for hardware abstraction.

use crate::NUM_LEDS;
use crate::pattern::{self, PatternTable};
use crate::types::{LedMask, Mode};

/// Trait for abstracting the 8-LED output bank.
///
/// Implement this for your GPIO outputs. Handle any hardware errors
/// internally; this method cannot fail.
pub trait LedBank {
    /// Drives LED `index` (0..8) on or off.
    fn set_led(&mut self, index: usize, on: bool);

    /// Drives every LED from `mask`, bit `i` controlling LED `i`.
    fn show(&mut self, mask: LedMask) {
        for index in 0..NUM_LEDS {
            self.set_led(index, mask.is_lit(index));
        }
    }
}

impl<L: LedBank + ?Sized> LedBank for &mut L {
    fn set_led(&mut self, index: usize, on: bool) {
        (**self).set_led(index, on);
    }

    fn show(&mut self, mask: LedMask) {
        (**self).show(mask);
    }
}

/// Position within one pattern table.
///
/// Always in `[0, len)` of the table it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepCursor(usize);

impl StepCursor {
    /// Cursor at the first step.
    pub const START: Self = StepCursor(0);

    /// Returns the step index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns the cursor one step further along `table`, wrapping to the start.
    #[inline]
    pub const fn next(self, table: &PatternTable) -> Self {
        StepCursor((self.0 + 1) % table.len())
    }
}

/// Step cursors for both modes.
///
/// The sequencer reads the mode it is handed and never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequencer {
    cursors: [StepCursor; 2],
}

impl Sequencer {
    /// Creates a sequencer with both cursors at the first step.
    pub const fn new() -> Self {
        Self {
            cursors: [StepCursor::START; 2],
        }
    }

    /// Renders the current step of `mode` to `leds`, then advances that mode's cursor.
    ///
    /// Returns the mask that was rendered.
    pub fn advance_and_render<L: LedBank + ?Sized>(&mut self, mode: Mode, leds: &mut L) -> LedMask {
        let table = pattern::steps(mode);
        let cursor = self.cursors[mode.index()];
        let mask = table.step(cursor.index());

        leds.show(mask);
        self.cursors[mode.index()] = cursor.next(table);

        mask
    }

    /// Returns the cursor of `mode`.
    #[inline]
    pub fn cursor(&self, mode: Mode) -> StepCursor {
        self.cursors[mode.index()]
    }

    /// Rewinds `mode` to its first step.
    #[inline]
    pub fn reset(&mut self, mode: Mode) {
        self.cursors[mode.index()] = StepCursor::START;
    }

    /// Returns the step `mode` will render on its next tick.
    pub fn peek(&self, mode: Mode) -> LedMask {
        pattern::steps(mode).step(self.cursor(mode).index())
    }
}
