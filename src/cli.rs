// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::ViewerConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "lorenz-flight")]
#[command(about = "Fly a free camera through the Lorenz attractor", long_about = None)]
pub struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lorenz sigma coefficient
    #[arg(long)]
    pub sigma: Option<f64>,

    /// Lorenz r coefficient (adjust at runtime with Q/E)
    #[arg(long)]
    pub r: Option<f64>,

    /// Lorenz b coefficient
    #[arg(long)]
    pub b: Option<f64>,

    /// Initial state
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub start: Option<Vec<f64>>,

    /// Integration step size
    #[arg(long)]
    pub step: Option<f64>,

    /// Integration end time
    #[arg(long)]
    pub horizon: Option<f64>,

    /// Distance moved per frame while a movement key is held
    #[arg(long)]
    pub move_amount: Option<f32>,

    /// Radians of rotation per pixel of mouse movement
    #[arg(long)]
    pub sensitivity: Option<f32>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Hide the coefficient overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Draw the trajectory in a single colour
    #[arg(long, default_value = "false")]
    pub white: bool,

    /// Log filter, e.g. "debug" or "lorenz_flight=trace"; RUST_LOG wins when set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Layer the flags over `config`
    pub fn apply_to(&self, config: &mut ViewerConfig) {
        if let Some(sigma) = self.sigma {
            config.params.sigma = sigma;
        }
        if let Some(r) = self.r {
            config.params.r = r;
        }
        if let Some(b) = self.b {
            config.params.b = b;
        }
        if let Some([x, y, z]) = self.start.as_deref().and_then(|s| <[f64; 3]>::try_from(s).ok()) {
            config.scenario.start = [x, y, z];
        }
        if let Some(step) = self.step {
            config.scenario.step = step;
        }
        if let Some(horizon) = self.horizon {
            config.scenario.end_time = horizon;
        }
        if let Some(move_amount) = self.move_amount {
            config.move_amount = move_amount;
        }
        if let Some(sensitivity) = self.sensitivity {
            config.sensitivity = sensitivity;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if self.no_ui {
            config.show_overlay = false;
        }
        if self.white {
            config.gradient = false;
        }
    }
}
