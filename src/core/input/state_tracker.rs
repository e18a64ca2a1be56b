//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state with per-frame edge tracking.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and per-frame edges (keys pressed).
#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),

    //--- Frame Edges (reset each frame via clear()) ---------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears per-frame edges.
    pub(super) fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
    }

    pub(super) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => {
                // OS key repeat arrives as further KeyDowns; only the first
                // one is an edge.
                if self.keys_down.insert(key) {
                    self.keys_pressed_this_frame.insert(key);
                }
            }

            InputEvent::KeyUp { key } => {
                self.keys_down.remove(&key);
            }

            InputEvent::MouseButtonDown { button } => {
                if self.mouse_buttons_down.insert(button) {
                    self.mouse_buttons_pressed_this_frame.insert(button);
                }
            }

            InputEvent::MouseButtonUp { button } => {
                self.mouse_buttons_down.remove(&button);
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (x, y);
            }
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if the key went UP → DOWN this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_frame.contains(&button)
    }

    #[cfg(test)]
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Cursor position in window coordinates.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    fn frame(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.clear();
        tracker.process_events(events);
    }

    //=====================================================================
    // Keyboard Tests
    //=====================================================================

    #[test]
    fn key_pressed_only_on_transition_frame() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[key_down(KeyCode::Space)]);
        assert!(tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_down(KeyCode::Space));

        frame(&mut tracker, &[]);
        assert!(!tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_down(KeyCode::Space));

        frame(&mut tracker, &[key_up(KeyCode::Space)]);
        assert!(!tracker.is_key_down(KeyCode::Space));
    }

    #[test]
    fn key_repeat_is_not_a_new_edge() {
        let mut tracker = StateTracker::new();
        frame(&mut tracker, &[key_down(KeyCode::Space)]);
        frame(&mut tracker, &[key_down(KeyCode::Space)]);
        assert!(!tracker.is_key_pressed(KeyCode::Space));
    }

    #[test]
    fn tap_within_one_frame_still_registers_edge() {
        let mut tracker = StateTracker::new();
        frame(
            &mut tracker,
            &[key_down(KeyCode::Space), key_up(KeyCode::Space)],
        );
        assert!(tracker.is_key_pressed(KeyCode::Space));
        assert!(!tracker.is_key_down(KeyCode::Space));
    }

    //=====================================================================
    // Mouse Tests
    //=====================================================================

    #[test]
    fn mouse_click_and_position() {
        let mut tracker = StateTracker::new();
        frame(
            &mut tracker,
            &[
                InputEvent::MouseMoved { x: 480.0, y: 200.0 },
                InputEvent::MouseButtonDown {
                    button: MouseButton::Left,
                },
            ],
        );

        assert_eq!(tracker.mouse_position(), (480.0, 200.0));
        assert!(tracker.is_button_pressed(MouseButton::Left));
        assert!(tracker.is_button_down(MouseButton::Left));

        frame(
            &mut tracker,
            &[InputEvent::MouseButtonUp {
                button: MouseButton::Left,
            }],
        );
        assert!(!tracker.is_button_pressed(MouseButton::Left));
        assert!(!tracker.is_button_down(MouseButton::Left));
        assert_eq!(tracker.mouse_position(), (480.0, 200.0));
    }
}
