//=========================================================================
// Player
//=========================================================================
//
// Player-controlled body with buffered jumps, a single mid-air jump,
// damage immunity windows and stomp combat.
//
// Tick order (load-bearing):
// ```text
//   timers ↓ → input → gravity → move/collide → jump resolution → animation
// ```
//
// Jumps are requested, not performed: `request_jump()` arms a short
// buffer that the next ticks consume once ground contact (or the double
// jump) allows it. Input edges may therefore arrive before the ground
// check of the same frame without being lost.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::animation::{AnimationSelector, AnimationSet, FrameId};
use super::body::{Body, Facing};
use super::enemy::Enemy;
use super::geometry::Rect;
use super::level::Platform;
use crate::config::PhysicsConfig;
use crate::core::audio::SoundEvent;
use crate::core::input::ControlState;

//=== Constants ===========================================================

pub const PLAYER_WIDTH: i32 = 40;
pub const PLAYER_HEIGHT: i32 = 54;

const PLAYER_FRAME_DURATION: f32 = 0.25;

const PLAYER_FRAMES: AnimationSet = AnimationSet {
    idle: &["player_idle_1", "player_idle_2"],
    run: &["player_run_1", "player_run_2"],
    jump: &["player_jump_1"],
};

//=== CombatOutcome =======================================================

/// Result of a damage check, consumed by the scene controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// No damaging hit this tick.
    Unhurt,
    /// A life was lost and lives remain.
    ResetLevel,
    /// The last life was lost.
    GameOver,
}

//=== Player ==============================================================

#[derive(Debug, Clone)]
pub struct Player {
    body: Body,
    spawn: (i32, i32),
    lives: u32,
    jump_buffer_timer: f32,
    invincibility_timer: f32,
    can_double_jump: bool,
    anim: AnimationSelector,
    physics: PhysicsConfig,
}

impl Player {
    //--- Construction -----------------------------------------------------

    pub fn new(spawn: (i32, i32), lives: u32, physics: PhysicsConfig) -> Self {
        Self {
            body: Body::new(Rect::new(spawn.0, spawn.1, PLAYER_WIDTH, PLAYER_HEIGHT)),
            spawn,
            lives,
            jump_buffer_timer: 0.0,
            invincibility_timer: 0.0,
            can_double_jump: false,
            anim: AnimationSelector::new(PLAYER_FRAMES, PLAYER_FRAME_DURATION),
            physics,
        }
    }

    //--- Input ------------------------------------------------------------

    /// Sets horizontal velocity from held directions.
    ///
    /// Holding both directions resolves to right. Facing only changes on
    /// non-zero input, so it persists while idle.
    pub fn handle_input(&mut self, controls: &ControlState) {
        let direction = if controls.right {
            1.0
        } else if controls.left {
            -1.0
        } else {
            0.0
        };

        self.body.vx = direction * self.physics.move_speed;

        if direction > 0.0 {
            self.body.facing = Facing::Right;
        } else if direction < 0.0 {
            self.body.facing = Facing::Left;
        }
    }

    /// Arms the jump buffer; the jump itself happens during `tick`.
    pub fn request_jump(&mut self) {
        self.jump_buffer_timer = self.physics.jump_buffer;
    }

    //--- Simulation -------------------------------------------------------

    /// Advances the player by one tick.
    pub fn tick(
        &mut self,
        platforms: &[Platform],
        controls: &ControlState,
        dt: f32,
        sounds: &mut Vec<SoundEvent>,
    ) {
        //--- 1. Timers -----------------------------------------------------
        if self.jump_buffer_timer > 0.0 {
            self.jump_buffer_timer -= dt;
        }
        if self.invincibility_timer > 0.0 {
            self.invincibility_timer -= dt;
        }

        //--- 2-4. Input and physics ---------------------------------------
        self.handle_input(controls);
        self.body.apply_gravity(&self.physics, dt);
        self.body.move_and_collide(platforms, dt);

        //--- 5. Jump resolution -------------------------------------------
        if self.jump_buffer_timer > 0.0 {
            if self.body.on_ground {
                self.body.vy = -self.physics.jump_speed;
                self.can_double_jump = true;
                self.jump_buffer_timer = 0.0;
                sounds.push(SoundEvent::Jump);
            } else if self.can_double_jump {
                self.body.vy = self.physics.double_jump_velocity();
                self.can_double_jump = false;
                self.jump_buffer_timer = 0.0;
                sounds.push(SoundEvent::Jump);
            }
        }

        //--- 6. Animation -------------------------------------------------
        self.anim
            .select(self.body.on_ground, self.body.vx != 0.0, self.body.vy);
        self.anim.advance(dt);
    }

    /// Returns to the spawn point with a short immunity window.
    pub fn reset_state(&mut self) {
        self.body.rect.x = self.spawn.0;
        self.body.rect.y = self.spawn.1;
        self.body.vx = 0.0;
        self.body.vy = 0.0;
        self.body.on_ground = true;
        self.invincibility_timer = self.physics.invincibility_duration;
    }

    //--- Combat -----------------------------------------------------------

    /// Resolves contact with every live enemy overlapping the player.
    ///
    /// Stomps never end the check early, so several enemies can be stomped
    /// in one tick. The first damaging hit returns immediately.
    pub fn resolve_enemy_collisions(
        &mut self,
        enemies: &mut [Enemy],
        sounds: &mut Vec<SoundEvent>,
    ) -> CombatOutcome {
        for enemy in enemies.iter_mut() {
            if enemy.is_dead() || !self.body.rect.intersects(&enemy.rect()) {
                continue;
            }

            let stomping = self.body.vy > 0.0
                && self.body.rect.bottom() - enemy.rect().top() < self.physics.stomp_tolerance;

            if stomping {
                sounds.push(SoundEvent::HitEnemy);
                self.body.vy = self.physics.stomp_bounce();
                enemy.stomp();
            } else if !self.is_invincible() {
                sounds.push(SoundEvent::PlayerHurt);
                self.invincibility_timer = self.physics.invincibility_duration;
                return self.lose_life();
            }
        }

        CombatOutcome::Unhurt
    }

    /// Removes one life and reports whether the run continues.
    pub fn lose_life(&mut self) -> CombatOutcome {
        self.lives = self.lives.saturating_sub(1);
        debug!("Player lost a life ({} left)", self.lives);

        if self.lives > 0 {
            CombatOutcome::ResetLevel
        } else {
            CombatOutcome::GameOver
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility_timer > 0.0
    }

    pub fn invincibility_timer(&self) -> f32 {
        self.invincibility_timer
    }

    pub fn jump_buffer_timer(&self) -> f32 {
        self.jump_buffer_timer
    }

    pub fn can_double_jump(&self) -> bool {
        self.can_double_jump
    }

    pub fn animation(&self) -> &AnimationSelector {
        &self.anim
    }

    pub fn current_frame(&self) -> Option<FrameId> {
        self.anim.current_frame()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
