//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps physical keys to game controls.
//
// Architecture:
//   KeyCode → HashMap → Control
//
// Several keys may drive the same control; a key drives at most one.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use super::state_tracker::StateTracker;

//=== Control =============================================================

/// Game-level control a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Jump,
    Menu,
}

//=== KeyBindings =========================================================

#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Control>,
}

impl KeyBindings {
    /// Creates an empty binding table.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` to `control`, replacing any previous binding of `key`.
    pub fn bind(&mut self, key: KeyCode, control: Control) -> &mut Self {
        self.bindings.insert(key, control);
        self
    }

    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Removes every key bound to `control`.
    pub fn clear_control(&mut self, control: Control) {
        self.bindings.retain(|_, bound| *bound != control);
    }

    //--- Queries ----------------------------------------------------------

    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        self.bindings.get(&key).copied()
    }

    /// Iterates over all keys bound to `control`.
    pub fn keys_for(&self, control: Control) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| **bound == control)
            .map(|(key, _)| *key)
    }

    /// Returns `true` while any key bound to `control` is held.
    pub(super) fn is_held(&self, tracker: &StateTracker, control: Control) -> bool {
        self.keys_for(control).any(|key| tracker.is_key_down(key))
    }

    /// Returns `true` if any key bound to `control` was pressed this frame.
    pub(super) fn was_pressed(&self, tracker: &StateTracker, control: Control) -> bool {
        self.keys_for(control).any(|key| tracker.is_key_pressed(key))
    }
}

impl Default for KeyBindings {
    /// Arrows and A/D move, Space/Up/W jump, Escape opens the menu.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind(KeyCode::ArrowLeft, Control::Left)
            .bind(KeyCode::KeyA, Control::Left)
            .bind(KeyCode::ArrowRight, Control::Right)
            .bind(KeyCode::KeyD, Control::Right)
            .bind(KeyCode::Space, Control::Jump)
            .bind(KeyCode::ArrowUp, Control::Jump)
            .bind(KeyCode::KeyW, Control::Jump)
            .bind(KeyCode::Escape, Control::Menu);
        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
