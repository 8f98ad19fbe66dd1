use std::path::{Path, PathBuf};

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::controls::{DEFAULT_MOVE_AMOUNT, DEFAULT_SENSITIVITY};
use crate::integrator::{step_count, IntegrationError};
use crate::lorenz::{LorenzParams, Scenario};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid integration range: {0}")]
    Integration(#[from] IntegrationError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Lorenz Attractor".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Perspective projection used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl ProjectionConfig {
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 90.0,
            near: 0.1,
            far: 500.0,
        }
    }
}

/// Everything the viewer needs at start-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub params: LorenzParams,
    pub scenario: Scenario,
    pub camera_start: [f32; 3],
    pub move_amount: f32,
    pub sensitivity: f32,
    pub window: WindowConfig,
    pub projection: ProjectionConfig,
    pub show_overlay: bool,
    pub gradient: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            params: LorenzParams::default(),
            scenario: Scenario::default(),
            camera_start: [0.0, 0.0, 10.0],
            move_amount: DEFAULT_MOVE_AMOUNT,
            sensitivity: DEFAULT_SENSITIVITY,
            window: WindowConfig::default(),
            projection: ProjectionConfig::default(),
            show_overlay: true,
            gradient: true,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn camera_start(&self) -> Vec3 {
        Vec3::from_array(self.camera_start)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        step_count(self.scenario.start_time, self.scenario.end_time, self.scenario.step)?;

        if !self.scenario.start.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::Invalid("start state must be finite".into()));
        }
        if !(self.move_amount.is_finite() && self.move_amount > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "move_amount must be positive, got {}",
                self.move_amount
            )));
        }
        if !self.sensitivity.is_finite() {
            return Err(ConfigError::Invalid("sensitivity must be finite".into()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        let p = &self.projection;
        if !(p.near > 0.0 && p.far > p.near) {
            return Err(ConfigError::Invalid(format!(
                "clip planes need 0 < near < far, got near={} far={}",
                p.near, p.far
            )));
        }
        if !(p.fov_y_degrees > 0.0 && p.fov_y_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "field of view must be within (0, 180) degrees, got {}",
                p.fov_y_degrees
            )));
        }
        Ok(())
    }
}
