//=========================================================================
// Render Output
//=========================================================================
//
// Builds a backend-agnostic list of draw commands from post-tick state.
//
// The core never touches a graphics API. Each tick it publishes a
// `RenderFrame` to the platform, whose presenter turns the commands into
// pixels (or, by default, just a window title).
//
// Sprites name their frame and carry a placeholder color: a renderer
// missing the asset draws a filled rect of that color at the entity rect
// instead.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::config::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::scene::{Scene, SceneController};
use crate::core::ui::{Button, Ui};
use crate::core::world::{Facing, FrameId, Rect};

//=== Color ===============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BACKGROUND: Self = Self(30, 144, 255);
    pub const PLATFORM: Self = Self(90, 200, 120);
    pub const PLAYER: Self = Self(240, 200, 80);
    pub const ENEMY: Self = Self(230, 80, 100);
    pub const UI: Self = Self(230, 230, 230);
    pub const UI_ACCENT: Self = Self(160, 220, 255);
}

//=== Draw Commands =======================================================

/// Which point of the sprite is pinned to the entity rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    MidBottom,
}

/// Which point of the text box is pinned to the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    TopLeft,
    TopRight,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Full-screen background image, or `fallback` when it is missing.
    Background { image: &'static str, fallback: Color },
    FilledRect { rect: Rect, color: Color },
    Outline { rect: Rect, color: Color },
    Sprite {
        frame: FrameId,
        rect: Rect,
        anchor: Anchor,
        flip_x: bool,
        placeholder: Color,
    },
    Text {
        text: String,
        position: (i32, i32),
        align: TextAlign,
        size: u32,
        color: Color,
    },
}

//=== RenderFrame =========================================================

/// Compact state summary for hosts that do not draw (window title, logs).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HudSummary {
    pub scene: Scene,
    pub lives: u32,
    pub enemies: usize,
    pub elapsed: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    pub commands: Vec<DrawCommand>,
    pub hud: HudSummary,
}

//=== Frame Building ======================================================

const TITLE: &str = "JUNGLE PLATFORM";
const CONTROLS_HINT: &str = "Arrows to move, Space to jump";
const MENU_HINT: &str = "Esc for Menu";

/// Builds the frame for the controller's current scene.
pub fn build_frame(scene: &SceneController, ui: &Ui) -> RenderFrame {
    let mut commands = vec![DrawCommand::Background {
        image: "background",
        fallback: Color::BACKGROUND,
    }];

    match scene.scene() {
        Scene::Menu => push_menu(&mut commands, ui),
        Scene::Game => push_game(&mut commands, scene, ui),
    }

    RenderFrame {
        commands,
        hud: HudSummary {
            scene: scene.scene(),
            lives: scene.player().lives(),
            enemies: scene.enemies().len(),
            elapsed: scene.elapsed_time(),
        },
    }
}

fn push_menu(commands: &mut Vec<DrawCommand>, ui: &Ui) {
    commands.push(text(TITLE, (WORLD_WIDTH / 2, 110), TextAlign::Center, 48));
    for button in ui.menu().buttons() {
        push_button(commands, button, 28);
    }
    commands.push(text(
        CONTROLS_HINT,
        (WORLD_WIDTH / 2, WORLD_HEIGHT - 40),
        TextAlign::Center,
        24,
    ));
}

fn push_game(commands: &mut Vec<DrawCommand>, scene: &SceneController, ui: &Ui) {
    //--- World ------------------------------------------------------------
    for platform in scene.platforms() {
        commands.push(DrawCommand::FilledRect {
            rect: platform.rect(),
            color: Color::PLATFORM,
        });
    }

    for enemy in scene.enemies().iter().filter(|enemy| !enemy.is_dead()) {
        commands.push(entity(
            enemy.current_frame(),
            enemy.rect(),
            Anchor::Center,
            enemy.facing(),
            Color::ENEMY,
        ));
    }

    let player = scene.player();
    commands.push(entity(
        player.current_frame(),
        player.rect(),
        Anchor::MidBottom,
        player.body().facing,
        Color::PLAYER,
    ));

    //--- HUD --------------------------------------------------------------
    commands.push(text(
        MENU_HINT,
        (WORLD_WIDTH - 14, 90),
        TextAlign::TopRight,
        22,
    ));
    commands.push(text(
        &format!("Enemies: {}", scene.enemies().len()),
        (10, 10),
        TextAlign::TopLeft,
        22,
    ));
    commands.push(text(
        &format!("Lives: {}", player.lives()),
        (10, 34),
        TextAlign::TopLeft,
        22,
    ));
    for button in ui.hud().buttons() {
        push_button(commands, button, 22);
    }
}

//--- Helpers -------------------------------------------------------------

fn entity(
    frame: Option<FrameId>,
    rect: Rect,
    anchor: Anchor,
    facing: Facing,
    placeholder: Color,
) -> DrawCommand {
    match frame {
        Some(frame) => DrawCommand::Sprite {
            frame,
            rect,
            anchor,
            flip_x: facing == Facing::Left,
            placeholder,
        },
        None => DrawCommand::FilledRect {
            rect,
            color: placeholder,
        },
    }
}

fn text(content: &str, position: (i32, i32), align: TextAlign, size: u32) -> DrawCommand {
    DrawCommand::Text {
        text: content.to_string(),
        position,
        align,
        size,
        color: Color::UI_ACCENT,
    }
}

fn push_button(commands: &mut Vec<DrawCommand>, button: &Button, size: u32) {
    let rect = button.rect();
    let fill = if button.is_hovered() {
        Color::UI_ACCENT
    } else {
        Color::UI
    };

    commands.push(DrawCommand::FilledRect { rect, color: fill });
    commands.push(DrawCommand::Outline {
        rect,
        color: Color::BACKGROUND,
    });
    commands.push(DrawCommand::Text {
        text: button.label().to_string(),
        position: rect.center(),
        align: TextAlign::Center,
        size,
        color: Color::BACKGROUND,
    });
}

//=========================================================================
// Unit Tests
//=========================================================================
