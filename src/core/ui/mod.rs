//=========================================================================
// UI
//=========================================================================
//
// Mouse-driven buttons for the menu and the in-game HUD.
//
// Flow:
//   MouseState → Ui::handle_mouse(scene) → hover update + UiCommand
//
// The UI only reports commands. The orchestrator decides what a command
// does (scene trigger, audio toggle, shutdown).
//
//=========================================================================

//=== Module Declarations =================================================

mod button;
mod menu;

//=== Public API ==========================================================

pub use button::Button;
pub use menu::{GameHud, MainMenu};

//=== Internal Dependencies ===============================================

use crate::core::input::MouseState;
use crate::core::scene::Scene;

//=== UiCommand ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiCommand {
    Start,
    ToggleMusic,
    ToggleSfx,
    Quit,
    QuitToMenu,
    Restart,
}

//=== Ui ==================================================================

#[derive(Debug, Clone)]
pub struct Ui {
    menu: MainMenu,
    hud: GameHud,
}

impl Ui {
    pub fn new(music_enabled: bool, sfx_enabled: bool) -> Self {
        Self {
            menu: MainMenu::new(music_enabled, sfx_enabled),
            hud: GameHud::new(),
        }
    }

    /// Updates hover on the active scene's buttons and returns the command
    /// of the button clicked this tick, if any.
    pub fn handle_mouse(&mut self, scene: Scene, mouse: &MouseState) -> Option<UiCommand> {
        match scene {
            Scene::Menu => {
                self.menu.update_hover(mouse.position);
                mouse.clicked.then(|| self.menu.click(mouse.position)).flatten()
            }
            Scene::Game => {
                self.hud.update_hover(mouse.position);
                mouse.clicked.then(|| self.hud.click(mouse.position)).flatten()
            }
        }
    }

    pub fn sync_toggles(&mut self, music_enabled: bool, sfx_enabled: bool) {
        self.menu.sync_toggles(music_enabled, sfx_enabled);
    }

    pub fn menu(&self) -> &MainMenu {
        &self.menu
    }

    pub fn hud(&self) -> &GameHud {
        &self.hud
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn click_at(x: f32, y: f32) -> MouseState {
        MouseState {
            position: (x, y),
            clicked: true,
        }
    }

    #[test]
    fn clicks_resolve_against_the_active_scene() {
        let mut ui = Ui::new(true, true);

        // (850, 20) is the HUD "Menu" button but empty space in the menu
        assert_eq!(ui.handle_mouse(Scene::Menu, &click_at(850.0, 20.0)), None);
        assert_eq!(
            ui.handle_mouse(Scene::Game, &click_at(850.0, 20.0)),
            Some(UiCommand::QuitToMenu)
        );
        assert_eq!(
            ui.handle_mouse(Scene::Menu, &click_at(480.0, 200.0)),
            Some(UiCommand::Start)
        );
    }

    #[test]
    fn hover_without_click_returns_nothing() {
        let mut ui = Ui::new(true, true);
        let mouse = MouseState {
            position: (480.0, 200.0),
            clicked: false,
        };

        assert_eq!(ui.handle_mouse(Scene::Menu, &mouse), None);
        assert!(ui.menu().buttons()[0].is_hovered());
    }
}
