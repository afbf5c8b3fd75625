//! Fixed, compiled-in LED patterns.
//!
//! Each table holds one [`LedMask`] per tick. The Morse table uses a one-tick
//! unit, so at the 100 ms reference tick a dot lasts 100 ms and a dash 300 ms.

use crate::types::{LedMask, Mode, PatternError};

/// An immutable, non-empty sequence of LED masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternTable {
    steps: &'static [LedMask],
}

impl PatternTable {
    /// Wraps a static step list.
    ///
    /// # Errors
    /// * `EmptyTable` - `steps` is empty
    pub const fn new(steps: &'static [LedMask]) -> Result<Self, PatternError> {
        if steps.is_empty() {
            return Err(PatternError::EmptyTable);
        }
        Ok(Self { steps })
    }

    /// Const constructor for tables known at build time.
    ///
    /// # Panics
    /// Panics (at compile time in a `const`/`static` initializer) if `steps` is empty.
    pub const fn from_static(steps: &'static [LedMask]) -> Self {
        match Self::new(steps) {
            Ok(table) => table,
            Err(_) => panic!("pattern table must have at least one step"),
        }
    }

    /// Returns all steps in order.
    #[inline]
    pub const fn steps(&self) -> &'static [LedMask] {
        self.steps
    }

    /// Number of steps. Always at least one.
    #[inline]
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the step at `index`, wrapping past the end.
    #[inline]
    pub const fn step(&self, index: usize) -> LedMask {
        self.steps[index % self.steps.len()]
    }
}

const ON: LedMask = LedMask::ALL_ON;
const OFF: LedMask = LedMask::ALL_OFF;

#[rustfmt::skip]
const MORSE_STEPS: [LedMask; 39] = [
    // C  -.-.
    ON, ON, ON, OFF,
    ON, OFF,
    ON, ON, ON, OFF,
    ON, OFF,
    // letter gap
    OFF, OFF, OFF,
    // O  ---
    ON, ON, ON, OFF,
    ON, ON, ON, OFF,
    ON, ON, ON, OFF,
    // letter gap
    OFF, OFF, OFF,
    // E  .
    ON, OFF,
    // word gap
    OFF, OFF, OFF, OFF, OFF, OFF, OFF,
];

const SHIFT_STEPS: [LedMask; 8] = [
    LedMask::single_off(0),
    LedMask::single_off(1),
    LedMask::single_off(2),
    LedMask::single_off(3),
    LedMask::single_off(4),
    LedMask::single_off(5),
    LedMask::single_off(6),
    LedMask::single_off(7),
];

/// "COE" in Morse code, every LED on or off together.
pub static MORSE_TABLE: PatternTable = PatternTable::from_static(&MORSE_STEPS);

/// A single dark LED walking from bit 0 to bit 7.
pub static SHIFT_TABLE: PatternTable = PatternTable::from_static(&SHIFT_STEPS);

/// Returns the table for `mode`.
#[inline]
pub fn steps(mode: Mode) -> &'static PatternTable {
    match mode {
        Mode::Morse => &MORSE_TABLE,
        Mode::Shift => &SHIFT_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits a table into (lit, run length) runs.
    fn runs(table: &PatternTable) -> heapless::Vec<(bool, usize), 64> {
        let mut out: heapless::Vec<(bool, usize), 64> = heapless::Vec::new();
        for mask in table.steps() {
            let lit = *mask == LedMask::ALL_ON;
            if let Some((prev, n)) = out.last_mut()
                && *prev == lit
            {
                *n += 1;
                continue;
            }
            out.push((lit, 1)).unwrap();
        }
        out
    }

    #[test]
    fn morse_table_is_uniform() {
        for mask in MORSE_TABLE.steps() {
            assert!(*mask == LedMask::ALL_ON || *mask == LedMask::ALL_OFF);
        }
    }

    #[test]
    fn morse_table_spells_coe() {
        // each element is followed by a 1-unit gap, then 3 more units between
        // letters and 7 more after the word
        let expected: [(bool, usize); 16] = [
            (true, 3), (false, 1), (true, 1), (false, 1),
            (true, 3), (false, 1), (true, 1), (false, 4),
            (true, 3), (false, 1), (true, 3), (false, 1), (true, 3), (false, 4),
            (true, 1), (false, 8),
        ];
        assert_eq!(runs(&MORSE_TABLE).as_slice(), &expected[..]);
        assert_eq!(MORSE_TABLE.len(), 39);
    }

    #[test]
    fn morse_table_ends_with_seven_unit_word_gap() {
        let tail = &MORSE_TABLE.steps()[MORSE_TABLE.len() - 7..];
        assert!(tail.iter().all(|m| *m == LedMask::ALL_OFF));
    }

    #[test]
    fn shift_table_walks_single_dark_led_upwards() {
        assert_eq!(SHIFT_TABLE.len(), 8);
        let raw: [u8; 8] = [
            0b1111_1110,
            0b1111_1101,
            0b1111_1011,
            0b1111_0111,
            0b1110_1111,
            0b1101_1111,
            0b1011_1111,
            0b0111_1111,
        ];
        for (k, bits) in raw.iter().enumerate() {
            assert_eq!(SHIFT_TABLE.step(k), LedMask(*bits));
        }
    }

    #[test]
    fn steps_selects_table_by_mode() {
        assert_eq!(steps(Mode::Morse).len(), MORSE_TABLE.len());
        assert_eq!(steps(Mode::Shift).len(), SHIFT_TABLE.len());
    }

    #[test]
    fn empty_table_is_rejected() {
        static EMPTY: [LedMask; 0] = [];
        assert_eq!(PatternTable::new(&EMPTY), Err(PatternError::EmptyTable));
    }

    #[test]
    fn step_wraps_past_end() {
        assert_eq!(SHIFT_TABLE.step(8), SHIFT_TABLE.step(0));
        assert_eq!(SHIFT_TABLE.step(11), SHIFT_TABLE.step(3));
    }
}
