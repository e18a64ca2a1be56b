//=========================================================================
// World
//=========================================================================
//
// Entities and physics of a level.
//
// Architecture:
//   Player ─┐
//           ├─ Body (rect, velocity, ground contact, facing)
//   Enemy ──┘   └─ move_and_collide(&[Platform])
//
//   Player / Enemy ─ AnimationSelector (frame ids for the renderer)
//
// All positions are integer pixels in world space (top-left origin,
// y grows downward). Velocities are f32 pixels per second.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod body;
pub mod enemy;
pub mod geometry;
pub mod level;
pub mod player;

//=== Public API ==========================================================

pub use animation::{AnimationSelector, AnimationSet, FrameId, Sequence};
pub use body::{Body, Facing};
pub use enemy::Enemy;
pub use geometry::Rect;
pub use level::{EnemySpawn, LevelError, LevelLayout, Platform};
pub use player::{CombatOutcome, Player};
