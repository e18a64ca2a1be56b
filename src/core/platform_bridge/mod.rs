//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the platform thread (window, OS events) and the core
// thread (simulation).
//
// Components:
// - `interface`: message and error types crossing the thread boundary
// - `event_collector`: core-side draining of platform messages
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, ExitReason, TickControl};
pub(crate) use interface::{CoreEvent, PlatformEvent};
pub use interface::PlatformError;
