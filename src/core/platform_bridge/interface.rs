//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Message and error types exchanged between the platform thread and the
// core thread.
//
// ```text
//   platform ── PlatformEvent ──▶ core     (input batches, window closed)
//   platform ◀── CoreEvent ────── core     (render frame, shutdown)
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;
use winit::error::EventLoopError;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;
use crate::core::render::RenderFrame;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for a frame.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested.
    WindowClosed,
}

//=== CoreEvent ===========================================================

/// Events sent from core to platform.
#[derive(Debug, Clone)]
pub(crate) enum CoreEvent {
    /// Post-tick frame to present.
    Frame(RenderFrame),

    /// The game asked to quit.
    Shutdown,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors. These are the only errors
/// that stop the engine.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] EventLoopError),

    /// Event loop execution error.
    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] EventLoopError),

    /// The OS refused to start the core logic thread.
    #[error("core thread spawn failed: {0}")]
    ThreadSpawn(#[source] std::io::Error),
}
