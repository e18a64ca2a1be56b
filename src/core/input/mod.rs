//=========================================================================
// Input System
//=========================================================================
//
// Turns the platform input events of one tick into the state the game
// reads:
//
// - `ControlState`: movement held, jump/menu pressed this tick
// - `MouseState`: cursor position and left click this tick (UI hit tests)
//
// Owned and updated by the CoreSystemsOrchestrator on the logic thread.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod bindings;
pub mod event;
mod state_tracker;

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use bindings::{Control, KeyBindings};
use event::{InputEvent, MouseButton};
use state_tracker::StateTracker;

//=== ControlState ========================================================

/// Game controls for one tick.
///
/// `left`/`right` are held states; `jump_pressed`/`menu_pressed` are
/// edges and only true on the tick the key went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
    pub menu_pressed: bool,
}

//=== MouseState ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseState {
    pub position: (f32, f32),
    /// Left button went down this tick.
    pub clicked: bool,
}

//=== InputSystem =========================================================

#[derive(Debug, Default)]
pub struct InputSystem {
    tracker: StateTracker,
    bindings: KeyBindings,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            tracker: StateTracker::new(),
            bindings,
        }
    }

    //--- update() ---------------------------------------------------------
    //
    // Applies the events received during the current tick, in order.
    // Edges from the previous tick are cleared first.
    //
    pub fn update(&mut self, events: &[InputEvent]) {
        self.tracker.clear();
        if !events.is_empty() {
            trace!(target: "core::input", "Digesting {} input events", events.len());
            self.tracker.process_events(events);
        }
    }

    //--- Query Methods ----------------------------------------------------

    pub fn controls(&self) -> ControlState {
        ControlState {
            left: self.bindings.is_held(&self.tracker, Control::Left),
            right: self.bindings.is_held(&self.tracker, Control::Right),
            jump_pressed: self.bindings.was_pressed(&self.tracker, Control::Jump),
            menu_pressed: self.bindings.was_pressed(&self.tracker, Control::Menu),
        }
    }

    pub fn mouse(&self) -> MouseState {
        MouseState {
            position: self.tracker.mouse_position(),
            clicked: self.tracker.is_button_pressed(MouseButton::Left),
        }
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
