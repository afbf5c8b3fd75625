//! Integration tests for Sequencer and the pattern tables

mod common;
use common::*;

use led_bank_sequencer::{
    LedMask, MORSE_TABLE, Mode, SHIFT_TABLE, Sequencer, StepCursor, steps,
};

#[test]
fn rendered_outputs_match_table_entry() {
    let mut leds = MockLedBank::new();
    let mut sequencer = Sequencer::new();

    for k in 0..SHIFT_TABLE.len() {
        let mask = sequencer.advance_and_render(Mode::Shift, &mut leds);
        assert_eq!(mask, SHIFT_TABLE.step(k));
        assert_eq!(leds.read_back(), SHIFT_TABLE.step(k));
    }
}

#[test]
fn rendering_overwrites_previous_frame() {
    let mut leds = MockLedBank::new();
    let mut sequencer = Sequencer::new();

    // Morse starts with a dash (all on), shift then clears LED 0
    sequencer.advance_and_render(Mode::Morse, &mut leds);
    assert_eq!(leds.read_back(), LedMask::ALL_ON);

    sequencer.advance_and_render(Mode::Shift, &mut leds);
    assert!(!leds.is_on(0));
    assert!((1..8).all(|i| leds.is_on(i)));
}

#[test]
fn cursor_advances_by_one_per_tick_and_stays_in_range() {
    let mut leds = MockLedBank::new();
    let mut sequencer = Sequencer::new();

    for mode in [Mode::Morse, Mode::Shift] {
        let len = steps(mode).len();
        for _ in 0..(2 * len + 3) {
            let before = sequencer.cursor(mode).index();
            sequencer.advance_and_render(mode, &mut leds);
            let after = sequencer.cursor(mode).index();
            assert_eq!(after, (before + 1) % len);
            assert!(after < len);
        }
    }
}

#[test]
fn inactive_mode_cursor_is_left_alone() {
    let mut leds = MockLedBank::new();
    let mut sequencer = Sequencer::new();

    for _ in 0..3 {
        sequencer.advance_and_render(Mode::Shift, &mut leds);
    }
    for _ in 0..10 {
        sequencer.advance_and_render(Mode::Morse, &mut leds);
    }

    assert_eq!(sequencer.cursor(Mode::Shift).index(), 3);
    assert_eq!(sequencer.cursor(Mode::Morse).index(), 10);
}

#[test]
fn full_morse_cycle_renders_table_in_order() {
    let mut leds = MockLedBank::new();
    let mut sequencer = Sequencer::new();

    for _ in 0..MORSE_TABLE.len() {
        sequencer.advance_and_render(Mode::Morse, &mut leds);
    }

    assert_eq!(leds.frames(), MORSE_TABLE.steps());
    assert_eq!(sequencer.cursor(Mode::Morse), StepCursor::START);
}
