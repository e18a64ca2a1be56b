//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side end of the platform → core channel.
//
// Once per tick the collector drains pending `PlatformEvent`s (bounded, so
// a flood of input cannot stall the simulation) and flattens every input
// batch into one ordered list for the tick:
//
// ```text
//   Inputs { discrete, continuous } ─┐
//   Inputs { discrete, continuous } ─┼─▶ [d.., c.., d.., c..] → InputSystem
//   WindowClosed / disconnect ───────┴─▶ TickControl::Exit(reason)
// ```
//
// Within a batch, discrete events come before the coalesced cursor
// position.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== TickControl =========================================================

/// Why the core loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitReason {
    /// The user closed the window.
    WindowClosed,
    /// The platform side dropped its sender.
    PlatformGone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit(ExitReason),
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<InputEvent>,
}

impl EventCollector {
    /// Upper bound on channel messages handled per tick. Leftovers stay
    /// queued for the next tick.
    const MAX_MESSAGES_PER_TICK: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(32),
        }
    }

    /// Replaces the previous tick's events with everything pending now.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();

        for _ in 0..Self::MAX_MESSAGES_PER_TICK {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs {
                    discrete,
                    continuous,
                }) => {
                    self.events.extend(discrete);
                    self.events.extend(continuous);
                }
                Ok(PlatformEvent::WindowClosed) => {
                    return TickControl::Exit(ExitReason::WindowClosed);
                }
                Err(TryRecvError::Disconnected) => {
                    return TickControl::Exit(ExitReason::PlatformGone);
                }
                Err(TryRecvError::Empty) => return TickControl::Continue,
            }
        }

        if !self.receiver.is_empty() {
            warn!(
                target: "core",
                "Input backlog: {} messages deferred to the next tick",
                self.receiver.len()
            );
        }

        TickControl::Continue
    }

    /// Input events gathered by the last `collect_frame`, in arrival order.
    pub(crate) fn events(&self) -> &[InputEvent] {
        &self.events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
