use crate::app::App;
use log::{error, info, LevelFilter};
use std::error::Error;
use winit::event_loop::EventLoop;

mod app;
mod config;
mod drum;
mod input;
mod notify;
mod options;
mod settings;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Logging Setup ---
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info) // Default level
        .filter_module("donsync::drum", LevelFilter::Debug) // Zone/dispatch tracing
        .init();

    info!("Application starting...");

    settings::load();

    let event_loop = EventLoop::new()?;
    let app = App::new();

    if let Err(e) = app.run(event_loop) {
        error!("Application exited with error: {}", e);
        return Err(e);
    }

    info!("Application exited gracefully.");
    Ok(())
}
