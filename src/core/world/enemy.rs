//=========================================================================
// Enemy
//=========================================================================
//
// Patrolling bee. Walks back and forth between its patrol bounds without
// gravity or platform collision, dies when stomped and lingers for a short
// death timer before the scene prunes it.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::animation::{AnimationSelector, AnimationSet, FrameId, Sequence};
use super::body::{pixel_step, Body, Facing};
use super::geometry::Rect;
use super::level::EnemySpawn;

//=== Constants ===========================================================

pub const ENEMY_SIZE: i32 = 14;

const ENEMY_FRAME_DURATION: f32 = 0.2;

const ENEMY_FRAMES: AnimationSet = AnimationSet {
    idle: &[],
    run: &["bee_a", "bee_b"],
    jump: &[],
};

//=== Enemy ===============================================================

#[derive(Debug, Clone)]
pub struct Enemy {
    body: Body,
    patrol_left: i32,
    patrol_right: i32,
    speed: f32,
    is_dead: bool,
    death_timer: f32,
    death_duration: f32,
    anim: AnimationSelector,
}

impl Enemy {
    /// Spawns an enemy moving right at `spawn.speed`.
    ///
    /// `spawn` is expected to come from a validated level layout.
    pub fn new(spawn: &EnemySpawn, death_duration: f32) -> Self {
        let mut body = Body::new(Rect::new(spawn.x, spawn.y, ENEMY_SIZE, ENEMY_SIZE));
        body.vx = spawn.speed;

        Self {
            body,
            patrol_left: spawn.patrol_left,
            patrol_right: spawn.patrol_right,
            speed: spawn.speed,
            is_dead: false,
            death_timer: 0.0,
            death_duration,
            anim: AnimationSelector::new(ENEMY_FRAMES, ENEMY_FRAME_DURATION)
                .starting_with(Sequence::Run),
        }
    }

    /// Kills the enemy. Only the first call starts the death timer.
    pub fn stomp(&mut self) {
        if !self.is_dead {
            self.is_dead = true;
            self.death_timer = self.death_duration;
        }
    }

    /// Advances patrol and animation, or just the death timer once dead.
    pub fn tick(&mut self, dt: f32) {
        if self.is_dead {
            self.death_timer -= dt;
            return;
        }

        if self.body.rect.left() <= self.patrol_left {
            self.body.vx = self.speed.abs();
            self.body.facing = Facing::Right;
        } else if self.body.rect.right() >= self.patrol_right {
            self.body.vx = -self.speed.abs();
            self.body.facing = Facing::Left;
        }

        self.body.rect.x += pixel_step(self.body.vx, dt);
        self.anim.advance(dt);
    }

    /// True once a dead enemy's death timer has run out.
    pub fn should_remove(&self) -> bool {
        self.is_dead && self.death_timer <= 0.0
    }

    //--- Queries ----------------------------------------------------------

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    pub fn facing(&self) -> Facing {
        self.body.facing
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn death_timer(&self) -> f32 {
        self.death_timer
    }

    pub fn patrol_bounds(&self) -> (i32, i32) {
        (self.patrol_left, self.patrol_right)
    }

    pub fn current_frame(&self) -> Option<FrameId> {
        self.anim.current_frame()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn bee(x: i32, left: i32, right: i32, speed: f32) -> Enemy {
        Enemy::new(&EnemySpawn::new(x, 100, left, right, speed), 0.25)
    }

    #[test]
    fn spawns_alive_moving_right_on_run_animation() {
        let enemy = bee(120, 80, 260, 70.0);
        assert!(!enemy.is_dead());
        assert_eq!(enemy.body().vx, 70.0);
        assert_eq!(enemy.facing(), Facing::Right);
        assert_eq!(enemy.current_frame(), Some("bee_a"));
        assert_eq!(enemy.rect(), Rect::new(120, 100, 14, 14));
    }

    #[test]
    fn turns_around_at_right_bound() {
        let mut enemy = bee(246, 80, 260, 70.0);
        enemy.tick(DT);
        assert_eq!(enemy.body().vx, -70.0);
        assert_eq!(enemy.facing(), Facing::Left);
        assert_eq!(enemy.rect().x, 245);
    }

    #[test]
    fn turns_around_at_left_bound() {
        let mut enemy = bee(80, 80, 260, 70.0);
        enemy.body.vx = -70.0;
        enemy.body.facing = Facing::Left;
        enemy.tick(DT);
        assert_eq!(enemy.body().vx, 70.0);
        assert_eq!(enemy.facing(), Facing::Right);
        assert_eq!(enemy.rect().x, 81);
    }

    #[test]
    fn patrol_stays_within_bounds_plus_one_step() {
        let mut enemy = bee(360, 340, 480, 90.0);
        let max_step = pixel_step(90.0, DT);

        for _ in 0..2000 {
            enemy.tick(DT);
            let rect = enemy.rect();
            assert!(rect.left() >= 340 - max_step, "left {}", rect.left());
            assert!(rect.right() <= 480 + max_step, "right {}", rect.right());
        }
    }

    #[test]
    fn animation_cycles_while_patrolling() {
        let mut enemy = bee(120, 80, 260, 70.0);
        enemy.tick(0.2);
        assert_eq!(enemy.current_frame(), Some("bee_b"));
        enemy.tick(0.2);
        assert_eq!(enemy.current_frame(), Some("bee_a"));
    }

    //=====================================================================
    // Death Tests
    //=====================================================================

    #[test]
    fn stomp_starts_death_timer() {
        let mut enemy = bee(120, 80, 260, 70.0);
        enemy.stomp();
        assert!(enemy.is_dead());
        assert_eq!(enemy.death_timer(), 0.25);
        assert!(!enemy.should_remove());
    }

    #[test]
    fn second_stomp_leaves_timer_unchanged() {
        let mut enemy = bee(120, 80, 260, 70.0);
        enemy.stomp();
        enemy.tick(0.1);
        let timer = enemy.death_timer();

        enemy.stomp();
        assert_eq!(enemy.death_timer(), timer);
    }

    #[test]
    fn dead_enemy_stops_moving_and_expires() {
        let mut enemy = bee(120, 80, 260, 70.0);
        enemy.stomp();

        let x = enemy.rect().x;
        for _ in 0..16 {
            enemy.tick(DT);
            assert_eq!(enemy.rect().x, x);
        }
        assert!(enemy.should_remove());
    }

    #[test]
    fn live_enemy_is_never_removed() {
        let mut enemy = bee(120, 80, 260, 70.0);
        enemy.tick(10.0);
        assert!(!enemy.should_remove());
    }
}
