//=========================================================================
// Scene Controller
//=========================================================================
//
// Owns the level state and runs one simulation step per tick.
//
// Game tick order (load-bearing):
// ```text
//   pending triggers → Escape check → jump request → elapsed += dt
//     → player.tick → enemy.tick (each) → combat → fall check
//     → apply outcome → prune expired enemies
// ```
//
// Pruning runs as a separate pass after all enemies were updated, so no
// enemy is skipped or removed while the list is being walked.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneNotification, SceneTrigger, TransitionQueue};
use crate::config::{GameConfig, PhysicsConfig};
use crate::core::audio::SoundEvent;
use crate::core::input::ControlState;
use crate::core::world::{CombatOutcome, Enemy, LevelLayout, Platform, Player};

//=== FrameEvents =========================================================

/// Everything a tick asks the host to react to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub sounds: Vec<SoundEvent>,
    pub notifications: Vec<SceneNotification>,
}

//=== SceneController =====================================================

#[derive(Debug)]
pub struct SceneController {
    scene: Scene,
    layout: LevelLayout,
    physics: PhysicsConfig,
    starting_lives: u32,

    platforms: Vec<Platform>,
    player: Player,
    enemies: Vec<Enemy>,
    elapsed: f32,

    pending: TransitionQueue,
}

impl SceneController {
    //--- Construction -----------------------------------------------------

    /// Creates a controller sitting in the menu. The level is only built
    /// when the game starts.
    pub fn new(layout: LevelLayout, physics: PhysicsConfig, starting_lives: u32) -> Self {
        let player = Player::new(layout.player_spawn(), starting_lives, physics);

        Self {
            scene: Scene::Menu,
            layout,
            physics,
            starting_lives,
            platforms: Vec::new(),
            player,
            enemies: Vec::new(),
            elapsed: 0.0,
            pending: TransitionQueue::new(),
        }
    }

    pub fn from_config(layout: LevelLayout, config: &GameConfig) -> Self {
        Self::new(layout, config.physics, config.starting_lives)
    }

    //--- Triggers ---------------------------------------------------------

    /// Queues a scene change for the start of the next tick.
    pub fn request(&mut self, trigger: SceneTrigger) {
        self.pending.push(trigger);
    }

    fn apply_trigger(&mut self, trigger: SceneTrigger, events: &mut FrameEvents) {
        match (trigger, self.scene) {
            (SceneTrigger::Start, _) | (SceneTrigger::Restart, Scene::Game) => {
                self.start_game();
                events.notifications.push(SceneNotification::EnteredGame);
            }
            (SceneTrigger::QuitToMenu, Scene::Game) => {
                self.enter_menu();
                events.notifications.push(SceneNotification::EnteredMenu);
            }
            (trigger, scene) => {
                debug!(target: "core::scene", "Ignoring {:?} while in {:?}", trigger, scene);
            }
        }
    }

    //--- Transitions ------------------------------------------------------

    /// Builds a fresh level: platforms, player, full enemy roster, elapsed 0.
    fn start_game(&mut self) {
        self.platforms = self.layout.platforms().to_vec();
        self.player = Player::new(self.layout.player_spawn(), self.starting_lives, self.physics);
        self.reset_enemies();
        self.elapsed = 0.0;
        self.scene = Scene::Game;

        info!(target: "core::scene", "Entered game with {} lives", self.starting_lives);
    }

    fn enter_menu(&mut self) {
        self.scene = Scene::Menu;
        info!(target: "core::scene", "Entered menu");
    }

    fn reset_enemies(&mut self) {
        let death_duration = self.physics.enemy_death_duration;
        self.enemies = self
            .layout
            .enemy_spawns()
            .iter()
            .map(|spawn| Enemy::new(spawn, death_duration))
            .collect();
    }

    //--- tick() -----------------------------------------------------------

    /// Runs one tick and reports the sounds and scene events it produced.
    pub fn tick(&mut self, controls: &ControlState, dt: f32) -> FrameEvents {
        let mut events = FrameEvents::default();

        for trigger in self.pending.take() {
            self.apply_trigger(trigger, &mut events);
        }

        if self.scene != Scene::Game {
            return events;
        }

        if controls.menu_pressed {
            self.enter_menu();
            events.notifications.push(SceneNotification::EnteredMenu);
            return events;
        }

        if controls.jump_pressed {
            self.player.request_jump();
        }

        self.step(controls, dt, &mut events);
        events
    }

    fn step(&mut self, controls: &ControlState, dt: f32, events: &mut FrameEvents) {
        self.elapsed += dt;

        //--- Entities -----------------------------------------------------
        self.player
            .tick(&self.platforms, controls, dt, &mut events.sounds);
        for enemy in &mut self.enemies {
            enemy.tick(dt);
        }

        //--- Combat and falls ---------------------------------------------
        let mut outcome = self
            .player
            .resolve_enemy_collisions(&mut self.enemies, &mut events.sounds);

        let fall_limit = self.layout.world_height() + self.physics.fall_margin;
        if outcome == CombatOutcome::Unhurt
            && self.player.rect().top() > fall_limit
            && !self.player.is_invincible()
        {
            events.sounds.push(SoundEvent::PlayerHurt);
            outcome = self.player.lose_life();
        }

        //--- Outcome ------------------------------------------------------
        match outcome {
            CombatOutcome::Unhurt => {}
            CombatOutcome::ResetLevel => {
                debug!(
                    target: "core::scene",
                    "Level reset, {} lives left",
                    self.player.lives()
                );
                self.reset_enemies();
                self.player.reset_state();
                self.elapsed = 0.0;
                events.notifications.push(SceneNotification::LevelReset);
            }
            CombatOutcome::GameOver => {
                info!(target: "core::scene", "Game over after {:.1}s", self.elapsed);
                events.notifications.push(SceneNotification::GameOver);
                self.enter_menu();
                events.notifications.push(SceneNotification::EnteredMenu);
            }
        }

        //--- Prune --------------------------------------------------------
        self.enemies.retain(|enemy| !enemy.should_remove());
    }

    //--- Queries ----------------------------------------------------------

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn layout(&self) -> &LevelLayout {
        &self.layout
    }

    /// Seconds since the level was (re)started.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
