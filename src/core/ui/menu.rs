//=========================================================================
// Menus
//=========================================================================
//
// Button sets for the two scenes:
//
// - MainMenu: Start, Music toggle, Sounds toggle, Quit (centred column)
// - GameHud:  Menu, Restart (top-right corner)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::button::Button;
use super::UiCommand;
use crate::config::WORLD_WIDTH;
use crate::core::audio::on_off;
use crate::core::world::Rect;

//=== Layout ==============================================================

const MENU_BUTTON_WIDTH: i32 = 240;
const MENU_BUTTON_HEIGHT: i32 = 48;
const MENU_FIRST_ROW: i32 = 190;
const MENU_ROW_SPACING: i32 = 60;

const HUD_BUTTON_WIDTH: i32 = 100;
const HUD_BUTTON_HEIGHT: i32 = 35;

pub(crate) fn music_label(enabled: bool) -> String {
    format!("Music: {}", on_off(enabled))
}

pub(crate) fn sfx_label(enabled: bool) -> String {
    format!("Sounds: {}", on_off(enabled))
}

/// First button containing `position`, if any.
fn hit(buttons: &[Button], position: (f32, f32)) -> Option<UiCommand> {
    buttons
        .iter()
        .find(|button| button.contains(position))
        .map(Button::command)
}

//=== MainMenu ============================================================

#[derive(Debug, Clone)]
pub struct MainMenu {
    buttons: Vec<Button>,
}

impl MainMenu {
    pub fn new(music_enabled: bool, sfx_enabled: bool) -> Self {
        let x = WORLD_WIDTH / 2 - MENU_BUTTON_WIDTH / 2;
        let row = |index: i32| {
            Rect::new(
                x,
                MENU_FIRST_ROW + index * MENU_ROW_SPACING,
                MENU_BUTTON_WIDTH,
                MENU_BUTTON_HEIGHT,
            )
        };

        Self {
            buttons: vec![
                Button::new("Start", row(0), UiCommand::Start),
                Button::new(music_label(music_enabled), row(1), UiCommand::ToggleMusic),
                Button::new(sfx_label(sfx_enabled), row(2), UiCommand::ToggleSfx),
                Button::new("Quit", row(3), UiCommand::Quit),
            ],
        }
    }

    pub fn update_hover(&mut self, position: (f32, f32)) {
        for button in &mut self.buttons {
            button.update_hover(position);
        }
    }

    pub fn click(&self, position: (f32, f32)) -> Option<UiCommand> {
        hit(&self.buttons, position)
    }

    /// Refreshes the toggle labels.
    pub fn sync_toggles(&mut self, music_enabled: bool, sfx_enabled: bool) {
        for button in &mut self.buttons {
            match button.command() {
                UiCommand::ToggleMusic => button.set_label(music_label(music_enabled)),
                UiCommand::ToggleSfx => button.set_label(sfx_label(sfx_enabled)),
                _ => {}
            }
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }
}

//=== GameHud =============================================================

#[derive(Debug, Clone)]
pub struct GameHud {
    buttons: Vec<Button>,
}

impl GameHud {
    pub fn new() -> Self {
        let x = WORLD_WIDTH - HUD_BUTTON_WIDTH - 20;

        Self {
            buttons: vec![
                Button::new(
                    "Menu",
                    Rect::new(x, 10, HUD_BUTTON_WIDTH, HUD_BUTTON_HEIGHT),
                    UiCommand::QuitToMenu,
                ),
                Button::new(
                    "Restart",
                    Rect::new(x, 50, HUD_BUTTON_WIDTH, HUD_BUTTON_HEIGHT),
                    UiCommand::Restart,
                ),
            ],
        }
    }

    pub fn update_hover(&mut self, position: (f32, f32)) {
        for button in &mut self.buttons {
            button.update_hover(position);
        }
    }

    pub fn click(&self, position: (f32, f32)) -> Option<UiCommand> {
        hit(&self.buttons, position)
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }
}

impl Default for GameHud {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_layout() {
        let menu = MainMenu::new(true, false);
        let labels: Vec<&str> = menu.buttons().iter().map(Button::label).collect();
        assert_eq!(labels, vec!["Start", "Music: ON", "Sounds: OFF", "Quit"]);

        let rects: Vec<Rect> = menu.buttons().iter().map(Button::rect).collect();
        assert_eq!(rects[0], Rect::new(360, 190, 240, 48));
        assert_eq!(rects[3], Rect::new(360, 370, 240, 48));
    }

    #[test]
    fn main_menu_clicks() {
        let menu = MainMenu::new(true, true);
        assert_eq!(menu.click((480.0, 200.0)), Some(UiCommand::Start));
        assert_eq!(menu.click((480.0, 260.0)), Some(UiCommand::ToggleMusic));
        assert_eq!(menu.click((480.0, 320.0)), Some(UiCommand::ToggleSfx));
        assert_eq!(menu.click((480.0, 380.0)), Some(UiCommand::Quit));
        // Gap between rows
        assert_eq!(menu.click((480.0, 245.0)), None);
    }

    #[test]
    fn toggles_relabel() {
        let mut menu = MainMenu::new(true, true);
        menu.sync_toggles(false, true);
        assert_eq!(menu.buttons()[1].label(), "Music: OFF");
        assert_eq!(menu.buttons()[2].label(), "Sounds: ON");
    }

    #[test]
    fn hud_layout_and_clicks() {
        let mut hud = GameHud::new();
        assert_eq!(hud.buttons()[0].rect(), Rect::new(840, 10, 100, 35));
        assert_eq!(hud.click((850.0, 20.0)), Some(UiCommand::QuitToMenu));
        assert_eq!(hud.click((850.0, 60.0)), Some(UiCommand::Restart));

        hud.update_hover((850.0, 60.0));
        assert!(!hud.buttons()[0].is_hovered());
        assert!(hud.buttons()[1].is_hovered());
    }
}
