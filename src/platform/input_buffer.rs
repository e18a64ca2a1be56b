//=========================================================================
// Input Buffer
//
// Holds the input gathered between two RedrawRequested events:
// - key and button transitions, in arrival order
// - the latest cursor position (intermediate positions are not needed
//   for menu hit tests)
//
// Flushed at every frame boundary. The transition list keeps its
// allocation across frames.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::event::InputEvent;

//=== InputBuffer Struct ==================================================
pub(crate) struct InputBuffer {
    transitions: Vec<InputEvent>,
    cursor: Option<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        Self {
            transitions: Vec::with_capacity(32),
            cursor: None,
        }
    }

    //--- Recording --------------------------------------------------------

    /// Records one event. A cursor move replaces any earlier one this
    /// frame; a transition identical to the previous one is skipped.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if event.is_continuous() {
            self.cursor = Some(event);
        } else if self.transitions.last() != Some(&event) {
            self.transitions.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Takes `(discrete, continuous)` for this frame; `None` when the frame
    /// saw no input.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = self.transitions.drain(..).collect();
        let continuous = self.cursor.take().into_iter().collect();
        Some((discrete, continuous))
    }

    pub(crate) fn len(&self) -> usize {
        self.transitions.len() + usize::from(self.cursor.is_some())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transitions.is_empty() && self.cursor.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{KeyCode, MouseButton};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn cursor(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }

    #[test]
    fn repeated_transition_is_skipped() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::Space));
        buffer.push(key_down(KeyCode::Space));
        buffer.push(key_down(KeyCode::ArrowLeft));
        buffer.push(key_down(KeyCode::Space));
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn only_latest_cursor_position_is_kept() {
        let mut buffer = InputBuffer::new();
        buffer.push(cursor(10.0, 10.0));
        buffer.push(cursor(480.0, 200.0));
        assert_eq!(buffer.len(), 1);

        let (discrete, continuous) = buffer.drain().unwrap();
        assert!(discrete.is_empty());
        match continuous.as_slice() {
            [InputEvent::MouseMoved { x, y }] => assert_eq!((*x, *y), (480.0, 200.0)),
            other => panic!("Expected one cursor event, found {:?}", other),
        }
    }

    #[test]
    fn click_drains_in_order_and_empties_buffer() {
        let mut buffer = InputBuffer::new();
        let down = InputEvent::MouseButtonDown {
            button: MouseButton::Left,
        };
        let up = InputEvent::MouseButtonUp {
            button: MouseButton::Left,
        };
        buffer.push(down);
        buffer.push(up);
        buffer.push(cursor(5.0, 5.0));

        let (discrete, continuous) = buffer.drain().unwrap();
        assert_eq!(discrete, vec![down, up]);
        assert_eq!(continuous.len(), 1);
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn empty_frame_drains_to_none() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn transition_capacity_survives_drain() {
        let mut buffer = InputBuffer::new();
        for i in 0..100 {
            let key = if i % 2 == 0 { KeyCode::KeyA } else { KeyCode::KeyD };
            buffer.push(key_down(key));
        }

        let capacity = buffer.transitions.capacity();
        buffer.drain();
        assert!(buffer.transitions.is_empty());
        assert_eq!(buffer.transitions.capacity(), capacity);
    }
}
