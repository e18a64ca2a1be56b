//=========================================================================
// Level Layout
//=========================================================================
//
// Static description of a level: platforms, enemy spawns, player spawn
// and world bounds.
//
// Layouts are validated once, at construction. A layout that made it
// through `LevelLayout::new` never fails at runtime.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::geometry::Rect;
use crate::config::{WORLD_HEIGHT, WORLD_WIDTH};

//=== LevelError ==========================================================

/// Precondition violations detected while building a [`LevelLayout`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    #[error("platform {index} has non-positive size {w}x{h}")]
    EmptyPlatform { index: usize, w: i32, h: i32 },

    #[error("enemy {index} has patrol bounds [{left}, {right}] (left must be < right)")]
    InvalidPatrol { index: usize, left: i32, right: i32 },

    #[error("enemy {index} has non-positive speed {speed}")]
    InvalidSpeed { index: usize, speed: f32 },

    #[error("world height must be positive, got {0}")]
    InvalidWorldHeight(i32),
}

//=== Platform ============================================================

/// Immutable solid rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    rect: Rect,
}

impl Platform {
    pub const fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

//=== EnemySpawn ==========================================================

/// Where an enemy appears and the horizontal range it patrols.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub x: i32,
    pub y: i32,
    pub patrol_left: i32,
    pub patrol_right: i32,
    pub speed: f32,
}

impl EnemySpawn {
    pub const fn new(x: i32, y: i32, patrol_left: i32, patrol_right: i32, speed: f32) -> Self {
        Self {
            x,
            y,
            patrol_left,
            patrol_right,
            speed,
        }
    }
}

//=== LevelLayout =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    platforms: Vec<Platform>,
    enemy_spawns: Vec<EnemySpawn>,
    player_spawn: (i32, i32),
    world_height: i32,
}

impl LevelLayout {
    //--- Construction -----------------------------------------------------

    /// Validates and builds a layout.
    ///
    /// # Errors
    ///
    /// Returns the first [`LevelError`] found: empty platforms, inverted or
    /// empty patrol ranges, non-positive enemy speeds, or a non-positive
    /// world height.
    pub fn new(
        platforms: Vec<Platform>,
        enemy_spawns: Vec<EnemySpawn>,
        player_spawn: (i32, i32),
        world_height: i32,
    ) -> Result<Self, LevelError> {
        if world_height <= 0 {
            return Err(LevelError::InvalidWorldHeight(world_height));
        }

        for (index, platform) in platforms.iter().enumerate() {
            let rect = platform.rect();
            if !rect.has_area() {
                return Err(LevelError::EmptyPlatform {
                    index,
                    w: rect.w,
                    h: rect.h,
                });
            }
        }

        for (index, spawn) in enemy_spawns.iter().enumerate() {
            if spawn.patrol_left >= spawn.patrol_right {
                return Err(LevelError::InvalidPatrol {
                    index,
                    left: spawn.patrol_left,
                    right: spawn.patrol_right,
                });
            }
            if !(spawn.speed > 0.0) {
                return Err(LevelError::InvalidSpeed {
                    index,
                    speed: spawn.speed,
                });
            }
        }

        Ok(Self {
            platforms,
            enemy_spawns,
            player_spawn,
            world_height,
        })
    }

    /// The jungle level: a ground strip, four ledges and four bees.
    pub fn jungle() -> Self {
        let h = WORLD_HEIGHT;

        let platforms = vec![
            Platform::new(Rect::new(0, h - 40, WORLD_WIDTH, 40)),
            Platform::new(Rect::new(80, h - 140, 180, 18)),
            Platform::new(Rect::new(340, h - 230, 160, 18)),
            Platform::new(Rect::new(600, h - 320, 200, 18)),
            Platform::new(Rect::new(760, h - 120, 140, 18)),
        ];

        let enemy_spawns = vec![
            EnemySpawn::new(120, h - 184, 80, 260, 70.0),
            EnemySpawn::new(360, h - 274, 340, 480, 90.0),
            EnemySpawn::new(620, h - 364, 600, 800, 80.0),
            EnemySpawn::new(780, h - 164, 760, 900, 85.0),
        ];

        Self {
            platforms,
            enemy_spawns,
            player_spawn: (60, h - 100),
            world_height: h,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn enemy_spawns(&self) -> &[EnemySpawn] {
        &self.enemy_spawns
    }

    pub fn player_spawn(&self) -> (i32, i32) {
        self.player_spawn
    }

    pub fn world_height(&self) -> i32 {
        self.world_height
    }
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::jungle()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Platform {
        Platform::new(Rect::new(0, 500, 960, 40))
    }

    #[test]
    fn jungle_layout_passes_validation() {
        let jungle = LevelLayout::jungle();
        let rebuilt = LevelLayout::new(
            jungle.platforms().to_vec(),
            jungle.enemy_spawns().to_vec(),
            jungle.player_spawn(),
            jungle.world_height(),
        );
        assert_eq!(rebuilt, Ok(jungle));
    }

    #[test]
    fn jungle_layout_contents() {
        let jungle = LevelLayout::jungle();
        assert_eq!(jungle.platforms().len(), 5);
        assert_eq!(jungle.enemy_spawns().len(), 4);
        assert_eq!(jungle.player_spawn(), (60, 440));
        assert_eq!(jungle.world_height(), 540);
    }

    #[test]
    fn inverted_patrol_is_rejected() {
        let result = LevelLayout::new(
            vec![ground()],
            vec![EnemySpawn::new(100, 400, 200, 200, 50.0)],
            (0, 0),
            540,
        );
        assert_eq!(
            result,
            Err(LevelError::InvalidPatrol {
                index: 0,
                left: 200,
                right: 200
            })
        );
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        let result = LevelLayout::new(
            vec![ground()],
            vec![
                EnemySpawn::new(100, 400, 80, 200, 50.0),
                EnemySpawn::new(100, 400, 80, 200, 0.0),
            ],
            (0, 0),
            540,
        );
        assert!(matches!(result, Err(LevelError::InvalidSpeed { index: 1, .. })));
    }

    #[test]
    fn nan_speed_is_rejected() {
        let result = LevelLayout::new(
            vec![],
            vec![EnemySpawn::new(0, 0, 0, 10, f32::NAN)],
            (0, 0),
            540,
        );
        assert!(matches!(result, Err(LevelError::InvalidSpeed { .. })));
    }

    #[test]
    fn empty_platform_is_rejected() {
        let result = LevelLayout::new(
            vec![ground(), Platform::new(Rect::new(0, 0, 10, 0))],
            vec![],
            (0, 0),
            540,
        );
        assert_eq!(
            result,
            Err(LevelError::EmptyPlatform { index: 1, w: 10, h: 0 })
        );
    }

    #[test]
    fn world_height_must_be_positive() {
        let result = LevelLayout::new(vec![], vec![], (0, 0), 0);
        assert_eq!(result, Err(LevelError::InvalidWorldHeight(0)));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = LevelError::InvalidPatrol {
            index: 2,
            left: 300,
            right: 100,
        };
        assert!(err.to_string().contains("enemy 2"));
    }
}
