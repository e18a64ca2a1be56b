//=========================================================================
// Body
//=========================================================================
//
// Physics primitive embedded by value in `Player` and `Enemy`.
//
// Movement is axis-separated: horizontal move + resolve, then vertical
// move + resolve. Per-tick displacement is truncated toward zero to whole
// pixels and the sub-pixel remainder is discarded.
//
// Overlapping platforms are resolved in list order against the rect as
// already corrected by earlier platforms, so the last colliding platform
// decides the final position on that axis.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::geometry::Rect;
use super::level::Platform;
use crate::config::PhysicsConfig;

//=== Facing ==============================================================

/// Horizontal orientation, used for sprite flipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Signed direction: `-1` left, `+1` right.
    pub fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

//=== Body ================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub facing: Facing,
}

impl Body {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            facing: Facing::Right,
        }
    }

    //--- Gravity ----------------------------------------------------------

    /// Accelerates downward, clamped to terminal velocity.
    pub fn apply_gravity(&mut self, physics: &PhysicsConfig, dt: f32) {
        self.vy = (self.vy + physics.gravity * dt).min(physics.max_fall);
    }

    //--- Movement ---------------------------------------------------------

    /// Moves by `velocity * dt` and pushes the rect out of platforms.
    pub fn move_and_collide(&mut self, platforms: &[Platform], dt: f32) {
        self.move_horizontal(platforms, dt);
        self.move_vertical(platforms, dt);
    }

    fn move_horizontal(&mut self, platforms: &[Platform], dt: f32) {
        self.rect.x += pixel_step(self.vx, dt);

        for platform in platforms {
            let solid = platform.rect();
            if !self.rect.intersects(&solid) {
                continue;
            }

            if self.vx > 0.0 {
                self.rect.set_right(solid.left());
            } else if self.vx < 0.0 {
                self.rect.set_left(solid.right());
            }
            self.vx = 0.0;
        }
    }

    fn move_vertical(&mut self, platforms: &[Platform], dt: f32) {
        self.rect.y += pixel_step(self.vy, dt);
        self.on_ground = false;

        for platform in platforms {
            let solid = platform.rect();
            if !self.rect.intersects(&solid) {
                continue;
            }

            if self.vy > 0.0 {
                self.rect.set_bottom(solid.top());
                self.on_ground = true;
                self.vy = 0.0;
            } else if self.vy < 0.0 {
                self.rect.set_top(solid.bottom());
                self.vy = 0.0;
            }
        }
    }
}

//=== Helpers =============================================================

/// Whole-pixel displacement for one tick, truncated toward zero.
pub(crate) fn pixel_step(velocity: f32, dt: f32) -> i32 {
    (velocity * dt) as i32
}

//=========================================================================
// Unit Tests
//=========================================================================
