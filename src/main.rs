use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use lorenz_flight::app::App;
use lorenz_flight::cli::Cli;
use lorenz_flight::config::ViewerConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .init();

    let mut config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    cli.apply_to(&mut config);

    let mut app = App::new(config)?;
    let event_loop = EventLoop::new().context("failed to create event loop")?;

    log::info!(
        "Controls: WASD move, hold right mouse to look, 1/2 slower/faster, Q/E adjust r, Escape to quit"
    );
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
