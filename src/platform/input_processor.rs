//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit events into engine InputEvents.
//
// Architecture:
//   winit events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Cursor positions arrive in physical pixels and are converted to logical
// (world) pixels using the window's current scale factor, so UI hit tests
// line up with the 960×540 layout on HiDPI screens. Unmapped keys are
// filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, MouseButton};

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    scale_factor: f64,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { scale_factor: 1.0 }
    }

    //--- Scale Factor -----------------------------------------------------

    /// Updates the physical → logical conversion factor.
    pub(crate) fn update_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    #[cfg(test)]
    pub(crate) fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a physical key transition (filters unmapped keys).
    pub(crate) fn process_key(&self, key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
        let key = match key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        if key == KeyCode::Unidentified {
            return None;
        }

        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key },
            ElementState::Released => InputEvent::KeyUp { key },
        })
    }

    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button },
            ElementState::Released => InputEvent::MouseButtonUp { button },
        }
    }

    /// Creates a mouse move event in logical pixels.
    pub(crate) fn process_mouse_move(&self, position: PhysicalPosition<f64>) -> InputEvent {
        let logical = position.to_logical::<f64>(self.scale_factor);
        InputEvent::MouseMoved {
            x: logical.x as f32,
            y: logical.y as f32,
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Maps letters, arrows and common special keys. Everything else becomes
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Letters ------------------------------------------------------
            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------
            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn key_transitions() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.process_key(PhysicalKey::Code(WinitKeyCode::Space), ElementState::Pressed),
            Some(InputEvent::KeyDown { key: KeyCode::Space })
        );
        assert_eq!(
            processor.process_key(PhysicalKey::Code(WinitKeyCode::KeyA), ElementState::Released),
            Some(InputEvent::KeyUp { key: KeyCode::KeyA })
        );
    }

    #[test]
    fn unmapped_keys_are_filtered() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.process_key(PhysicalKey::Code(WinitKeyCode::F13), ElementState::Pressed),
            None
        );
        assert_eq!(
            processor.process_key(
                PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
                ElementState::Pressed
            ),
            None
        );
    }

    #[test]
    fn mouse_buttons() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed),
            InputEvent::MouseButtonDown {
                button: MouseButton::Left
            }
        );
        assert_eq!(
            MouseButton::from(WinitMouseButton::Back),
            MouseButton::Other
        );
    }

    #[test]
    fn mouse_move_is_converted_to_logical_pixels() {
        let mut processor = InputProcessor::new();
        processor.update_scale_factor(2.0);

        match processor.process_mouse_move(PhysicalPosition::new(960.0, 400.0)) {
            InputEvent::MouseMoved { x, y } => assert_eq!((x, y), (480.0, 200.0)),
            other => panic!("Expected MouseMoved, got {:?}", other),
        }
    }

    #[test]
    fn invalid_scale_factor_is_ignored() {
        let mut processor = InputProcessor::new();
        processor.update_scale_factor(0.0);
        assert_eq!(processor.scale_factor(), 1.0);
    }

    #[test]
    fn keycode_conversion() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode::KeyZ);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::Digit1), KeyCode::Unidentified);
    }
}
