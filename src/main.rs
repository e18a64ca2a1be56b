//=========================================================================
// Jungle Platformer — Binary
//
// Loads the game config (path from `JUNGLE_CONFIG`, default
// `jungle.toml`; missing or invalid files fall back to defaults) and runs
// the engine. Logging is controlled by `RUST_LOG` (default `info`).
//=========================================================================

use std::env;
use std::process;

use log::{error, info};

use jungle_platformer::{EngineBuilder, GameConfig};

const CONFIG_ENV: &str = "JUNGLE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "jungle.toml";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    info!("Loading config from {}", config_path);
    let config = GameConfig::load_or_default(&config_path);

    let engine = EngineBuilder::new().with_config(config).build();

    if let Err(e) = engine.run() {
        error!("Engine stopped: {}", e);
        process::exit(1);
    }
}
