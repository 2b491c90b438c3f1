mod app;
mod config;
mod terminal;

use app::App;
use config::Config;

fn main() {
    // Initialize logging
    env_logger::init();

    // --- 1. LOAD CONFIG ---
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).map_err(|e| (path, e)),
        None => Config::load_default().map_err(|e| ("marquee.toml".to_string(), e)),
    };
    let config = match config {
        Ok(config) => config,
        Err((path, e)) => {
            log::warn!("Failed to load {}: {}, using defaults", path, e);
            Config::default()
        }
    };

    // --- 2. RUN FRAME LOOP ---
    let mut app = App::new(config);
    if let Err(e) = app.run() {
        log::error!("Failed to write frame: {}", e);
    }
}
