//! Shared test infrastructure for led-bank-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use led_bank_sequencer::{
    ButtonEdge, DebounceConfig, LedBank, LedMask, NUM_LEDS, PinLevel, TickDuration, TickInstant,
    TimeSource,
};

// ============================================================================
// Mock LED bank
// ============================================================================

/// Mock LED bank that keeps per-pin state and records every rendered frame
pub struct MockLedBank {
    outputs: [bool; NUM_LEDS],
    frames: heapless::Vec<LedMask, 128>,
}

impl MockLedBank {
    pub fn new() -> Self {
        Self {
            outputs: [false; NUM_LEDS],
            frames: heapless::Vec::new(),
        }
    }

    /// Reads the physical outputs back as a mask
    pub fn read_back(&self) -> LedMask {
        let mut bits = 0u8;
        for (i, on) in self.outputs.iter().enumerate() {
            if *on {
                bits |= 1 << i;
            }
        }
        LedMask(bits)
    }

    pub fn is_on(&self, index: usize) -> bool {
        self.outputs[index]
    }

    /// Masks rendered so far, one per tick
    pub fn frames(&self) -> &[LedMask] {
        &self.frames
    }

    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }
}

impl LedBank for MockLedBank {
    fn set_led(&mut self, index: usize, on: bool) {
        self.outputs[index] = on;
    }

    fn show(&mut self, mask: LedMask) {
        for index in 0..NUM_LEDS {
            self.set_led(index, mask.is_lit(index));
        }
        let _ = self.frames.push(mask);
    }
}

// ============================================================================
// Mock clock
// ============================================================================

/// Mock free-running counter with controllable advancement
pub struct MockClock {
    counter: core::cell::Cell<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(counts: u32) -> Self {
        Self {
            counter: core::cell::Cell::new(counts),
        }
    }

    /// Advance the counter, wrapping like the hardware does
    pub fn advance(&self, counts: u32) {
        self.counter.set(self.counter.get().wrapping_add(counts));
    }
}

impl TimeSource for MockClock {
    fn now(&self) -> TickInstant {
        TickInstant(self.counter.get())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Active-low debounce config with a threshold in counts
pub fn debounce(threshold: u32) -> DebounceConfig {
    DebounceConfig::new(TickDuration(threshold), PinLevel::Low).unwrap()
}

/// Pressed edge (pin low) at `clock`'s current time
pub fn press(clock: &MockClock) -> ButtonEdge {
    ButtonEdge::sample(clock, PinLevel::Low)
}

/// Released edge (pin high) at `clock`'s current time
pub fn release(clock: &MockClock) -> ButtonEdge {
    ButtonEdge::sample(clock, PinLevel::High)
}
