//=========================================================================
// Input Event Types
//=========================================================================
//
// Platform-independent representation of keyboard and mouse input.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held keys, per-frame edges, cursor)
//         ↓
//    KeyBindings → ControlState (left / right / jump / menu)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the key location, not the produced character: `KeyA` is the
/// same key on QWERTY and AZERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Any key the input layer does not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event delivered by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { key: KeyCode },
    KeyUp { key: KeyCode },
    MouseButtonDown { button: MouseButton },
    MouseButtonUp { button: MouseButton },

    /// Cursor position in logical window pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },
}

impl InputEvent {
    /// Cursor moves are continuous; everything else is a transition.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::MouseMoved { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_events_compare_by_type_and_key() {
        let down_a = InputEvent::KeyDown { key: KeyCode::KeyA };
        assert_eq!(down_a, InputEvent::KeyDown { key: KeyCode::KeyA });
        assert_ne!(down_a, InputEvent::KeyDown { key: KeyCode::KeyD });
        assert_ne!(down_a, InputEvent::KeyUp { key: KeyCode::KeyA });
    }

    #[test]
    fn cursor_moves_compare_by_position() {
        let a = InputEvent::MouseMoved { x: 1.0, y: 2.0 };
        assert_eq!(a, InputEvent::MouseMoved { x: 1.0, y: 2.0 });
        assert_ne!(a, InputEvent::MouseMoved { x: 300.0, y: 400.0 });
    }

    #[test]
    fn only_cursor_moves_are_continuous() {
        assert!(InputEvent::MouseMoved { x: 0.0, y: 0.0 }.is_continuous());
        assert!(!InputEvent::KeyDown { key: KeyCode::Space }.is_continuous());
        assert!(!InputEvent::MouseButtonUp {
            button: MouseButton::Left
        }
        .is_continuous());
    }
}
