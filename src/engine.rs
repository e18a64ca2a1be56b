//=========================================================================
// Engine
//
// Entry point and coordinator for the game runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ spawns the core thread
//         ├─ with_channel_capacity() ├─ runs the platform (main thread)
//         ├─ with_config()           └─ joins the core thread on exit
//         ├─ with_layout()
//         ├─ with_bindings()
//         ├─ with_audio()
//         └─ with_presenter()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::audio::{AudioBackend, SilentAudio};
use crate::core::input::bindings::KeyBindings;
use crate::core::platform_bridge::{CoreEvent, PlatformError, PlatformEvent};
use crate::core::world::LevelLayout;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, Presenter, TitlePresenter};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 messages per direction
/// - **Config**: [`GameConfig::default`]
/// - **Level**: [`LevelLayout::jungle`]
/// - **Bindings**: [`KeyBindings::default`]
/// - **Audio**: [`SilentAudio`]
/// - **Presenter**: [`TitlePresenter`] using the configured window title
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use jungle_platformer::EngineBuilder;
///
/// EngineBuilder::new().build().run()?;
/// # Ok::<(), jungle_platformer::PlatformError>(())
/// ```
///
/// Advanced configuration:
/// ```no_run
/// use jungle_platformer::prelude::*;
///
/// let config = GameConfig::load_or_default("jungle.toml");
///
/// EngineBuilder::new()
///     .with_tps(120.0)              // Finer simulation steps
///     .with_channel_capacity(256)   // Extra buffering
///     .with_config(config)
///     .build()
///     .run()?;
/// # Ok::<(), PlatformError>(())
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    layout: LevelLayout,
    bindings: KeyBindings,
    audio: Box<dyn AudioBackend>,
    presenter: Option<Box<dyn Presenter>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: GameConfig::default(),
            layout: LevelLayout::jungle(),
            bindings: KeyBindings::default(),
            audio: Box::new(SilentAudio),
            presenter: None,
        }
    }

    /// Sets the target ticks per second for the logic thread. Each tick
    /// advances the simulation by `1 / tps` seconds.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of both thread channels.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_layout(mut self, layout: LevelLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Replaces the silent audio backend.
    pub fn with_audio(mut self, audio: Box<dyn AudioBackend>) -> Self {
        self.audio = audio;
        self
    }

    /// Replaces the default title-bar presenter.
    pub fn with_presenter(mut self, presenter: Box<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Builds the engine. All core systems are created here; the threads
    /// start in [`Engine::run`].
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {}, level: {} platforms / {} enemies)",
            self.tps,
            self.channel_capacity,
            self.layout.platforms().len(),
            self.layout.enemy_spawns().len()
        );

        let presenter: Box<dyn Presenter> = match self.presenter {
            Some(presenter) => presenter,
            None => Box::new(TitlePresenter::new(self.config.window.title.clone())),
        };

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(
                &self.config,
                self.layout,
                self.bindings,
                self.audio,
            ),
            config: self.config,
            presenter,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime. Create via [`EngineBuilder`].
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► Input, UI, Scene, Audio, RenderFrame
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling, Presenter
///
/// Communication: bounded crossbeam channels
///   PlatformEvent  platform → core
///   CoreEvent      core → platform
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    config: GameConfig,
    presenter: Box<dyn Presenter>,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core and core → platform channels
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On exit: closing the channels stops the logic thread, which is joined
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the logic thread cannot be spawned or
    /// the event loop fails. A panicking logic thread is logged, not
    /// propagated.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels -----------------------------
        let (platform_tx, platform_rx) = bounded::<PlatformEvent>(self.channel_capacity);
        let (core_tx, core_rx) = bounded::<CoreEvent>(self.channel_capacity);

        info!("Channels created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self
            .orchestrator
            .spawn_core_thread(platform_rx, core_tx, self.tps)
            .map_err(PlatformError::ThreadSpawn)?;
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(platform_tx, core_rx, self.config.window, self.presenter);
        info!("Platform initialized, entering event loop");

        let result = platform.run();
        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: wait for the logic thread -----------------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
