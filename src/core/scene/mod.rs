//=========================================================================
// Scene System
//=========================================================================
//
// Two-scene state machine driving the game:
//
// ```text
//            Start                      Restart
//   Menu ──────────────▶ Game ◀───────────────┐
//    ▲                    │  └────────────────┘
//    └── QuitToMenu / ────┘
//        Escape / game over
// ```
//
// Architecture:
//   SceneController
//     ├─ pending: TransitionQueue (triggers applied at tick start)
//     ├─ player: Player
//     ├─ enemies: Vec<Enemy>
//     └─ layout: LevelLayout (platforms and spawns)
//
//=========================================================================

//=== Module Declarations =================================================

mod controller;
mod transition_queue;

//=== Public API ==========================================================

pub use controller::{FrameEvents, SceneController};
pub use transition_queue::TransitionQueue;

//=== Scene ===============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    #[default]
    Menu,
    Game,
}

//=== SceneTrigger ========================================================

/// Externally requested scene change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTrigger {
    /// Menu → Game with a fresh level.
    Start,
    /// Game → Game with a fresh level.
    Restart,
    /// Game → Menu.
    QuitToMenu,
}

//=== SceneNotification ===================================================

/// Scene-level event reported to the host after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneNotification {
    EnteredMenu,
    EnteredGame,
    /// A life was lost and the level was reset.
    LevelReset,
    /// The last life was lost.
    GameOver,
}
