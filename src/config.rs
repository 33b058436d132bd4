use crate::capture::CaptureOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Animation timings for the cosmetic effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Scale the form starts from when an edit begins
    pub emphasis_scale: f32,
    pub emphasis_ms: u64,
    /// Horizontal shake amplitude for delete acknowledgment
    pub shake_offset: f32,
    /// Duration of each of the three shake steps
    pub shake_step_ms: u64,
    /// Wait for the shake to finish before removing a task
    pub defer_delete: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            emphasis_scale: 0.9,
            emphasis_ms: 500,
            shake_offset: 10.0,
            shake_step_ms: 50,
            defer_delete: true,
        }
    }
}

/// Capture UI options and simulated OS permissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub allow_editing: bool,
    pub quality: f32,
    pub camera_permission: bool,
    pub gallery_permission: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            allow_editing: true,
            quality: 0.8,
            camera_permission: true,
            gallery_permission: true,
        }
    }
}

impl CaptureConfig {
    pub fn options(&self) -> CaptureOptions {
        CaptureOptions {
            allow_editing: self.allow_editing,
            quality: self.quality.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. "info" or "photo_todo=debug"
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub capture: CaptureConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults when it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
