//=========================================================================
// Button
//=========================================================================

//=== Internal Dependencies ===============================================

use super::UiCommand;
use crate::core::world::Rect;

//=== Button ==============================================================

/// Clickable rectangle with a text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    label: String,
    rect: Rect,
    hover: bool,
    command: UiCommand,
}

impl Button {
    pub fn new(label: impl Into<String>, rect: Rect, command: UiCommand) -> Self {
        Self {
            label: label.into(),
            rect,
            hover: false,
            command,
        }
    }

    /// Updates the hover flag from the cursor position.
    pub fn update_hover(&mut self, position: (f32, f32)) {
        self.hover = self.contains(position);
    }

    pub fn contains(&self, position: (f32, f32)) -> bool {
        self.rect.contains_point(position.0, position.1)
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    //--- Queries ----------------------------------------------------------

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_hovered(&self) -> bool {
        self.hover
    }

    pub fn command(&self) -> UiCommand {
        self.command
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn start_button() -> Button {
        Button::new("Start", Rect::new(360, 190, 240, 48), UiCommand::Start)
    }

    #[test]
    fn hover_follows_cursor() {
        let mut button = start_button();
        button.update_hover((400.0, 200.0));
        assert!(button.is_hovered());

        button.update_hover((10.0, 10.0));
        assert!(!button.is_hovered());
    }

    #[test]
    fn right_and_bottom_edges_are_outside() {
        let button = start_button();
        assert!(button.contains((360.0, 190.0)));
        assert!(!button.contains((600.0, 200.0)));
        assert!(!button.contains((400.0, 238.0)));
    }

    #[test]
    fn relabel() {
        let mut button = start_button();
        button.set_label("Go");
        assert_eq!(button.label(), "Go");
        assert_eq!(button.command(), UiCommand::Start);
    }
}
