#![no_std]
#![no_main]

use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::{entry, exception};
use led_bank_sequencer::handoff::{self, ToggleQueue};
use led_bank_sequencer::{
    ButtonEdge, DebounceConfig, LedBank, PinLevel, SharedLedBank, TickInstant, TimeSource,
};
use panic_halt as _;

// ============================================================================
// Minimal Hardware Stand-ins
// ============================================================================

/// Output register image; one bit per LED
static LED_PORT: AtomicU8 = AtomicU8::new(0);

/// Free-running counter, advanced by SysTick
static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Minimal LED bank writing into `LED_PORT`
pub struct MinimalLeds;

impl LedBank for MinimalLeds {
    fn set_led(&mut self, index: usize, on: bool) {
        let bit = 1u8 << index;
        if on {
            LED_PORT.fetch_or(bit, Ordering::Relaxed);
        } else {
            LED_PORT.fetch_and(!bit, Ordering::Relaxed);
        }
    }
}

/// Minimal time source reading `COUNTER`
pub struct MinimalClock;

impl TimeSource for MinimalClock {
    fn now(&self) -> TickInstant {
        TickInstant(COUNTER.load(Ordering::Relaxed))
    }
}

// ============================================================================
// Shared State
// ============================================================================

static BANK: SharedLedBank = SharedLedBank::new(DebounceConfig::reference());

#[exception]
fn SysTick() {
    COUNTER.fetch_add(3125, Ordering::Relaxed);
    BANK.on_tick(&mut MinimalLeds);
}

// This function uses the handoff variant to keep it in the binary
#[inline(never)]
fn exercise_handoff() {
    let mut queue: ToggleQueue<4> = ToggleQueue::new();
    let (mut edges, mut ticks) = handoff::split(&mut queue, DebounceConfig::reference());

    let _ = edges.on_raw_edge(ButtonEdge::sample(&MinimalClock, PinLevel::Low));
    let mask = ticks.on_tick(&mut MinimalLeds);
    core::hint::black_box(mask);
}

#[entry]
fn main() -> ! {
    let mut core = cortex_m::Peripherals::take().unwrap();

    core.SYST.set_clock_source(SystClkSource::Core);
    core.SYST.set_reload(800_000 - 1);
    core.SYST.clear_current();
    core.SYST.enable_counter();
    core.SYST.enable_interrupt();

    BANK.with(|state| state.log_configuration());
    exercise_handoff();

    loop {
        let level = PinLevel::from_high(core::hint::black_box(true));
        let _ = BANK.on_raw_edge(ButtonEdge::sample(&MinimalClock, level));
        cortex_m::asm::wfi();
    }
}
