//! Split state joined by a single-producer/single-consumer queue.
//!
//! The button interrupt owns the [`EdgeHandler`] (debounce gate and queue
//! producer). The tick interrupt owns the [`TickHandler`] (mode, cursors and
//! queue consumer). Accepted presses are queued and applied at the start of the
//! next tick, so the mode controller and the sequencer only ever run in the
//! tick context and no critical section is needed.
//!
//! ```ignore
//! static QUEUE: StaticCell<ToggleQueue<4>> = StaticCell::new();
//!
//! let (edges, ticks) = handoff::split(QUEUE.init(ToggleQueue::new()), DebounceConfig::reference());
//! // move `edges` into the button interrupt and `ticks` into the timer interrupt
//! ```

use heapless::spsc::{Consumer, Producer, Queue};

use crate::controller::ModeController;
use crate::debounce::{DebounceConfig, DebounceGate};
use crate::sequencer::{LedBank, Sequencer, StepCursor};
use crate::types::{ButtonEdge, LedMask, Mode, ToggleEvent};

/// Queue of accepted presses waiting for the next tick.
pub type ToggleQueue<const N: usize> = Queue<ToggleEvent, N>;

/// Splits `queue` into the button-side and tick-side handlers.
pub fn split<const N: usize>(
    queue: &mut ToggleQueue<N>,
    debounce: DebounceConfig,
) -> (EdgeHandler<'_>, TickHandler<'_>) {
    let (producer, consumer) = queue.split();
    (
        EdgeHandler {
            gate: DebounceGate::new(debounce),
            producer,
        },
        TickHandler {
            controller: ModeController::new(),
            sequencer: Sequencer::new(),
            consumer,
        },
    )
}

/// Button-side half: debounces raw edges and queues accepted presses.
pub struct EdgeHandler<'q> {
    gate: DebounceGate,
    producer: Producer<'q, ToggleEvent>,
}

impl<'q> EdgeHandler<'q> {
    /// Button interrupt entry point.
    ///
    /// Returns the queued event. While the queue is full every edge is dropped
    /// before it reaches the debounce gate, so a lost press never starts a
    /// debounce window.
    pub fn on_raw_edge(&mut self, edge: ButtonEdge) -> Option<ToggleEvent> {
        if !self.producer.ready() {
            warn!("toggle queue full, edge at {} dropped", edge.timestamp.0);
            return None;
        }

        let event = self.gate.on_raw_edge(edge)?;
        // only this producer fills the queue, so `ready()` still holds
        self.producer.enqueue(event).ok()?;
        Some(event)
    }

    /// Returns the debounce gate.
    pub fn gate(&self) -> &DebounceGate {
        &self.gate
    }
}

/// Tick-side half: applies queued presses, then renders one step.
pub struct TickHandler<'q> {
    controller: ModeController,
    sequencer: Sequencer,
    consumer: Consumer<'q, ToggleEvent>,
}

impl<'q> TickHandler<'q> {
    /// Tick interrupt entry point.
    pub fn on_tick<L: LedBank + ?Sized>(&mut self, leds: &mut L) -> LedMask {
        while let Some(event) = self.consumer.dequeue() {
            self.controller.on_toggle_event(event, &mut self.sequencer);
        }
        self.sequencer.advance_and_render(self.controller.mode(), leds)
    }

    /// Number of presses waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.consumer.len()
    }

    /// Current mode, not counting pending presses.
    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Cursor of `mode`.
    pub fn cursor(&self, mode: Mode) -> StepCursor {
        self.sequencer.cursor(mode)
    }
}
