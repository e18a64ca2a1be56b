//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use jungle_platformer::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::platform::{Presenter, TitlePresenter};
pub use crate::PlatformError;

// Configuration
pub use crate::config::{AudioConfig, ConfigError, GameConfig, PhysicsConfig, WindowConfig};

// Input
pub use crate::core::input::bindings::{Control, KeyBindings};
pub use crate::core::input::event::{InputEvent, KeyCode, MouseButton};

// Audio
pub use crate::core::audio::{AudioBackend, AudioError, SilentAudio, SoundEvent};

// Scene and world
pub use crate::core::scene::{Scene, SceneController, SceneTrigger};
pub use crate::core::world::{EnemySpawn, LevelError, LevelLayout, Platform, Rect};

// Render output
pub use crate::core::render::{DrawCommand, HudSummary, RenderFrame};
