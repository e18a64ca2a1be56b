//=========================================================================
// Jungle Platformer — Library Root
//
// Public API surface of the platformer runtime.
//
// Responsibilities:
// - Expose the runtime facade (`Engine`, `EngineBuilder`)
// - Expose the deterministic game core (`core`) for hosts and tests
// - Keep OS integration (`platform`) private, apart from the
//   `Presenter` seam used by renderers
//
// Typical usage:
// ```no_run
// use jungle_platformer::EngineBuilder;
//
// fn main() -> Result<(), jungle_platformer::PlatformError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the simulation: world, scene flow, input, UI, audio
// dispatch and render output. It has no dependency on the window layer.
//
// `config` holds the TOML-loadable tuning values.
//
pub mod config;
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use config::GameConfig;
pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};
pub use platform::{Presenter, TitlePresenter};
