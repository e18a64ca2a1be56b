//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the game's core thread via
// crossbeam channels.
//
// One platform frame, driven by winit on the main thread:
// ```text
//   CursorMoved / KeyboardInput / MouseInput
//       └─ InputProcessor (winit → InputEvent, physical → logical px)
//            └─ InputBuffer (transitions in order, latest cursor)
//
//   RedrawRequested
//       ├─ buffered input ──PlatformEvent::Inputs──▶ core thread
//       ├─ newest CoreEvent::Frame ──▶ Presenter (older frames skipped)
//       └─ request_redraw() for the next frame
// ```
//
// The core ticks at its own fixed rate; the display refresh rate only
// decides how often input is flushed and frames are shown.
//
// Shutdown paths:
// - Window closed: `WindowClosed` is sent to the core, loop exits
// - Quit from the menu: core sends `Shutdown`, loop exits
// - Core thread gone (receiver disconnected): loop exits with a warning
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::config::WindowConfig;
use crate::core::platform_bridge::{CoreEvent, PlatformError, PlatformEvent};
use crate::core::render::{HudSummary, RenderFrame};
use crate::core::scene::Scene;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Presenter ===========================================================

/// Receives every frame the platform decides to show.
///
/// Implemented by the actual renderer. The window is passed so the
/// presenter can reach its surface, size and title.
pub trait Presenter {
    fn present(&mut self, frame: &RenderFrame, window: &Window);
}

/// Default presenter: mirrors the HUD summary in the window title.
pub struct TitlePresenter {
    base: String,
    last: Option<String>,
}

impl TitlePresenter {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            last: None,
        }
    }

    fn title_for(&self, hud: &HudSummary) -> String {
        match hud.scene {
            Scene::Menu => self.base.clone(),
            Scene::Game => format!(
                "{} | Lives: {} | Enemies: {} | {:.0}s",
                self.base, hud.lives, hud.enemies, hud.elapsed
            ),
        }
    }
}

impl Presenter for TitlePresenter {
    fn present(&mut self, frame: &RenderFrame, window: &Window) {
        let title = self.title_for(&frame.hud);
        if self.last.as_deref() != Some(title.as_str()) {
            window.set_title(&title);
            self.last = Some(title);
        }
    }
}

//=== CorePoll ============================================================

/// Outcome of draining the core → platform channel once.
#[derive(Debug, Default)]
struct CorePoll {
    latest: Option<RenderFrame>,
    shutdown: bool,
}

//=== Platform ============================================================

/// Window manager, input aggregator and frame presenter.
///
/// Runs on the main thread (Winit requirement on macOS/iOS). This type is
/// not `Send`; it talks to the core thread only through its channels.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,
    window_config: WindowConfig,

    buffer: InputBuffer,
    input_processor: InputProcessor,

    event_sender: Sender<PlatformEvent>,
    core_receiver: Receiver<CoreEvent>,

    presenter: Box<dyn Presenter>,
    frames_presented: u64,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet; that happens in `resumed()`.
    pub fn new(
        event_sender: Sender<PlatformEvent>,
        core_receiver: Receiver<CoreEvent>,
        window_config: WindowConfig,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            window_config,
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            event_sender,
            core_receiver,
            presenter,
            frames_presented: 0,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop on the calling thread until the window is
    /// closed or the core requests shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        info!(
            target: "platform",
            "Event loop finished after {} presented frames",
            self.frames_presented
        );
        Ok(())
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the core thread as one `Inputs` message.
    /// Empty buffers are not sent. A disconnected channel drops the events
    /// with a warning so the window can still be closed.
    fn flush_input_buffer(&mut self) {
        let pending = self.buffer.len();

        if let Some((discrete, continuous)) = self.buffer.drain() {
            trace!(
                target: "platform::input",
                "Flushing {} events ({} discrete, {} continuous)",
                pending,
                discrete.len(),
                continuous.len()
            );

            if self
                .event_sender
                .send(PlatformEvent::Inputs {
                    discrete,
                    continuous,
                })
                .is_err()
            {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    pending
                );
            }
        }
    }

    /// Drains every pending core message, keeping only the newest frame.
    fn poll_core(&mut self) -> CorePoll {
        let mut poll = CorePoll::default();

        loop {
            match self.core_receiver.try_recv() {
                Ok(CoreEvent::Frame(frame)) => poll.latest = Some(frame),
                Ok(CoreEvent::Shutdown) => {
                    info!(target: "platform", "Core requested shutdown");
                    poll.shutdown = true;
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!(target: "platform", "Core thread disconnected");
                    poll.shutdown = true;
                    break;
                }
            }
        }

        poll
    }

    fn handle_redraw(&mut self, event_loop: &ActiveEventLoop) {
        // Frame boundary: flush all buffered input
        self.flush_input_buffer();

        let poll = self.poll_core();

        if let (Some(frame), Some(window)) = (&poll.latest, &self.window) {
            self.presenter.present(frame, window);
            self.frames_presented += 1;
        }

        if poll.shutdown {
            event_loop.exit();
            return;
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume. On mobile this may be called
    /// again after a suspend.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.window_config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.window_config.width,
                self.window_config.height,
            ))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.input_processor.update_scale_factor(window.scale_factor());
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                debug!(target: "platform", "Scale factor changed to {}", scale_factor);
                self.input_processor.update_scale_factor(*scale_factor);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(*position);
                self.buffer.push(event);
            }

            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.repeat {
                    return;
                }
                match self
                    .input_processor
                    .process_key(key_event.physical_key, key_event.state)
                {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push(event);
            }

            WindowEvent::RedrawRequested => self.handle_redraw(event_loop),

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
