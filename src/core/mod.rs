//=========================================================================
// Core Systems Orchestrator
//=========================================================================
//
// Central coordinator for the game systems running on the logic
// (non-platform) thread.
//
// Each tick, at a fixed rate (TPS):
// ```text
//   EventCollector ─▶ InputSystem ─▶ Ui (mouse) ─▶ UiCommand
//                         │                           │
//                         ▼                           ▼
//                   ControlState ─────────▶ SceneController.tick(dt)
//                                                     │
//                          AudioDispatcher ◀── sounds ┤
//                                                     ▼
//                          platform ◀── CoreEvent::Frame(RenderFrame)
// ```
//
// The orchestrator owns every system directly. Communication with the
// platform happens only through crossbeam channels.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod audio;
pub mod input;
pub mod render;
pub mod scene;
pub mod ui;
pub mod world;

pub(crate) mod platform_bridge;

//=== External Dependencies ===============================================

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use audio::{AudioBackend, AudioDispatcher};
use input::bindings::KeyBindings;
use input::event::InputEvent;
use input::InputSystem;
use platform_bridge::{CoreEvent, EventCollector, ExitReason, PlatformEvent, TickControl};
use render::{build_frame, RenderFrame};
use scene::{SceneController, SceneNotification, SceneTrigger};
use ui::{Ui, UiCommand};
use world::LevelLayout;

//=== TickOutput ==========================================================

/// Result of one orchestrated tick.
pub(crate) struct TickOutput {
    pub frame: RenderFrame,
    pub quit: bool,
}

//=== CoreSystemsOrchestrator =============================================

pub(crate) struct CoreSystemsOrchestrator {
    input: InputSystem,
    ui: Ui,
    scene: SceneController,
    audio: AudioDispatcher,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Initializes all core systems but does not yet start the logic thread.
    //
    pub fn new(
        config: &GameConfig,
        layout: LevelLayout,
        bindings: KeyBindings,
        audio_backend: Box<dyn AudioBackend>,
    ) -> Self {
        let audio = AudioDispatcher::new(audio_backend, &config.audio);

        Self {
            input: InputSystem::new(bindings),
            ui: Ui::new(audio.music_enabled(), audio.sfx_enabled()),
            scene: SceneController::from_config(layout, config),
            audio,
        }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread ticking all systems at `tps`.
    //
    // Each tick:
    //  1. Collects platform events (exit on window close / disconnect)
    //  2. Runs the game tick with dt = 1 / tps
    //  3. Publishes the frame, or a shutdown request on Quit
    //  4. Sleeps to maintain fixed pacing
    //
    pub fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        sender: Sender<CoreEvent>,
        tps: f64,
    ) -> io::Result<thread::JoinHandle<()>> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);
        let dt = frame_duration.as_secs_f32();

        thread::Builder::new().name("core".into()).spawn(move || {
            let mut collector = EventCollector::new(receiver);
            info!(target: "core", "Core thread running at {} TPS", tps);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if let TickControl::Exit(reason) = collector.collect_frame() {
                    match reason {
                        ExitReason::WindowClosed => {
                            info!(target: "core", "Window closed, core thread exiting")
                        }
                        ExitReason::PlatformGone => {
                            warn!(target: "core", "Platform channel closed, core thread exiting")
                        }
                    }
                    break;
                }

                //--- Step 2: Update systems --------------------------------
                let output = self.tick(collector.events(), dt);

                //--- Step 3: Publish ---------------------------------------
                if output.quit {
                    info!(target: "core", "Quit requested, shutting down");
                    let _ = sender.send(CoreEvent::Shutdown);
                    break;
                }

                match sender.try_send(CoreEvent::Frame(output.frame)) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        trace!(target: "core", "Platform busy, frame dropped");
                    }
                    Err(TrySendError::Disconnected(_)) => {
                        warn!(target: "core", "Platform gone, core thread exiting");
                        break;
                    }
                }

                //--- Step 4: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- tick() -----------------------------------------------------------
    //
    // One full game tick, independent of threads and channels.
    //
    pub(crate) fn tick(&mut self, events: &[InputEvent], dt: f32) -> TickOutput {
        self.input.update(events);
        self.audio.ensure_music_started();

        let controls = self.input.controls();
        let mouse = self.input.mouse();

        let mut quit = false;
        if let Some(command) = self.ui.handle_mouse(self.scene.scene(), &mouse) {
            quit = self.apply_command(command);
        }

        let events = self.scene.tick(&controls, dt);
        self.audio.play(&events.sounds);
        for notification in &events.notifications {
            log_notification(*notification);
        }

        TickOutput {
            frame: build_frame(&self.scene, &self.ui),
            quit,
        }
    }

    /// Applies a UI command. Returns `true` when the game should quit.
    fn apply_command(&mut self, command: UiCommand) -> bool {
        trace!(target: "core", "UI command {:?}", command);

        match command {
            UiCommand::Start => self.scene.request(SceneTrigger::Start),
            UiCommand::Restart => self.scene.request(SceneTrigger::Restart),
            UiCommand::QuitToMenu => self.scene.request(SceneTrigger::QuitToMenu),
            UiCommand::ToggleMusic => {
                self.audio.toggle_music();
                self.ui
                    .sync_toggles(self.audio.music_enabled(), self.audio.sfx_enabled());
            }
            UiCommand::ToggleSfx => {
                self.audio.toggle_sfx();
                self.ui
                    .sync_toggles(self.audio.music_enabled(), self.audio.sfx_enabled());
            }
            UiCommand::Quit => return true,
        }

        false
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn scene(&self) -> &SceneController {
        &self.scene
    }
}

fn log_notification(notification: SceneNotification) {
    match notification {
        SceneNotification::GameOver => info!(target: "core::scene", "Game over"),
        SceneNotification::LevelReset => info!(target: "core::scene", "Life lost, level reset"),
        SceneNotification::EnteredMenu | SceneNotification::EnteredGame => {
            trace!(target: "core::scene", "{:?}", notification)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::audio::SilentAudio;
    use crate::core::input::event::{KeyCode, MouseButton};
    use crate::core::render::DrawCommand;
    use crate::core::scene::Scene;
    use crossbeam_channel::bounded;

    //--- Test Helpers -----------------------------------------------------

    const DT: f32 = 1.0 / 60.0;

    fn orchestrator() -> CoreSystemsOrchestrator {
        CoreSystemsOrchestrator::new(
            &GameConfig::default(),
            LevelLayout::jungle(),
            KeyBindings::default(),
            Box::new(SilentAudio),
        )
    }

    fn click(x: f32, y: f32) -> [InputEvent; 3] {
        [
            InputEvent::MouseMoved { x, y },
            InputEvent::MouseButtonDown {
                button: MouseButton::Left,
            },
            InputEvent::MouseButtonUp {
                button: MouseButton::Left,
            },
        ]
    }

    fn label_of(frame: &RenderFrame, prefix: &str) -> Option<String> {
        frame.commands.iter().find_map(|command| match command {
            DrawCommand::Text { text, .. } if text.starts_with(prefix) => Some(text.clone()),
            _ => None,
        })
    }

    //=====================================================================
    // Tick Tests
    //=====================================================================

    #[test]
    fn start_button_enters_game_same_tick() {
        let mut core = orchestrator();
        let output = core.tick(&click(480.0, 200.0), DT);

        assert!(!output.quit);
        assert_eq!(core.scene().scene(), Scene::Game);
        assert_eq!(output.frame.hud.scene, Scene::Game);
        assert_eq!(output.frame.hud.enemies, 4);
    }

    #[test]
    fn quit_button_requests_shutdown() {
        let mut core = orchestrator();
        let output = core.tick(&click(480.0, 380.0), DT);
        assert!(output.quit);
    }

    #[test]
    fn music_toggle_relabels_button() {
        let mut core = orchestrator();
        let output = core.tick(&click(480.0, 260.0), DT);
        assert_eq!(label_of(&output.frame, "Music"), Some("Music: OFF".to_string()));

        let output = core.tick(&click(480.0, 260.0), DT);
        assert_eq!(label_of(&output.frame, "Music"), Some("Music: ON".to_string()));
    }

    #[test]
    fn escape_and_hud_buttons_in_game() {
        let mut core = orchestrator();
        core.tick(&click(480.0, 200.0), DT);

        let escape = [InputEvent::KeyDown {
            key: KeyCode::Escape,
        }];
        core.tick(&escape, DT);
        assert_eq!(core.scene().scene(), Scene::Menu);

        // Back in, then use the HUD "Menu" button
        core.tick(&click(480.0, 200.0), DT);
        assert_eq!(core.scene().scene(), Scene::Game);
        core.tick(&click(850.0, 20.0), DT);
        assert_eq!(core.scene().scene(), Scene::Menu);
    }

    //=====================================================================
    // Thread Tests
    //=====================================================================

    #[test]
    fn core_thread_publishes_frames_and_exits_on_close() {
        let (platform_tx, platform_rx) = bounded(16);
        let (core_tx, core_rx) = bounded(4);

        let handle = orchestrator()
            .spawn_core_thread(platform_rx, core_tx, 240.0)
            .unwrap();

        match core_rx.recv_timeout(Duration::from_secs(2)) {
            Ok(CoreEvent::Frame(frame)) => assert_eq!(frame.hud.scene, Scene::Menu),
            other => panic!("Expected a frame, got {:?}", other),
        }

        platform_tx.send(PlatformEvent::WindowClosed).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn core_thread_sends_shutdown_on_quit() {
        let (platform_tx, platform_rx) = bounded(16);
        let (core_tx, core_rx) = bounded(64);

        let handle = orchestrator()
            .spawn_core_thread(platform_rx, core_tx, 240.0)
            .unwrap();

        platform_tx
            .send(PlatformEvent::Inputs {
                discrete: vec![
                    InputEvent::MouseButtonDown {
                        button: MouseButton::Left,
                    },
                    InputEvent::MouseButtonUp {
                        button: MouseButton::Left,
                    },
                ],
                continuous: vec![InputEvent::MouseMoved { x: 480.0, y: 380.0 }],
            })
            .unwrap();

        // Keep draining frames so the core never blocks on a full channel
        loop {
            match core_rx.recv_timeout(Duration::from_secs(2)) {
                Ok(CoreEvent::Shutdown) => break,
                Ok(CoreEvent::Frame(_)) => continue,
                Err(e) => panic!("Core never requested shutdown: {:?}", e),
            }
        }

        handle.join().unwrap();
    }
}
