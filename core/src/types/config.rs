use crate::types::media::{
    CaptureConstraints, ContainerSpec, ErrorCorrection, FacingMode,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Booth configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoothConfig {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub recording: RecordingConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub download: DownloadConfig,
}

impl BoothConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, BoothConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), BoothConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.recording.duration_secs == 0 {
            errors.push("duration_secs must be at least 1".to_string());
        }

        if self.recording.countdown_from == 0 {
            errors.push("countdown_from must be at least 1".to_string());
        }

        if self.gallery.cap == 0 {
            errors.push("gallery cap must be at least 1".to_string());
        }

        if self.share.window_secs == 0 {
            errors.push("share window_secs must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            capture: self.capture.clone(),
            recording: RecordingConfig {
                duration_secs: if self.recording.duration_secs == 0 {
                    defaults.recording.duration_secs
                } else {
                    self.recording.duration_secs
                },
                countdown_from: if self.recording.countdown_from == 0 {
                    defaults.recording.countdown_from
                } else {
                    self.recording.countdown_from
                },
                ..self.recording.clone()
            },
            gallery: GalleryConfig {
                cap: if self.gallery.cap == 0 {
                    defaults.gallery.cap
                } else {
                    self.gallery.cap
                },
                ..self.gallery.clone()
            },
            share: ShareConfig {
                window_secs: if self.share.window_secs == 0 {
                    defaults.share.window_secs
                } else {
                    self.share.window_secs
                },
                ..self.share.clone()
            },
            download: self.download.clone(),
        }
    }
}

/// Capture device acquisition settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(default)]
    pub facing: FacingMode,
    #[serde(default = "default_ideal_width")]
    pub ideal_width: u32,
    #[serde(default = "default_ideal_height")]
    pub ideal_height: u32,
    #[serde(default = "default_true")]
    pub audio: bool,
}

impl CaptureConfig {
    pub fn constraints(&self) -> CaptureConstraints {
        CaptureConstraints {
            facing: self.facing,
            ideal_width: self.ideal_width,
            ideal_height: self.ideal_height,
            audio: self.audio,
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            facing: FacingMode::default(),
            ideal_width: default_ideal_width(),
            ideal_height: default_ideal_height(),
            audio: true,
        }
    }
}

/// Recording cadence and container settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordingConfig {
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
    #[serde(default = "default_countdown_from")]
    pub countdown_from: u32,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl RecordingConfig {
    pub fn container_spec(&self) -> ContainerSpec {
        ContainerSpec {
            mime_type: self.mime_type.clone(),
            extension: self.extension.clone(),
        }
    }
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
            countdown_from: default_countdown_from(),
            mime_type: default_mime_type(),
            extension: default_extension(),
        }
    }
}

/// Gallery bounds and persistence key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_gallery_cap")]
    pub cap: usize,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            cap: default_gallery_cap(),
            storage_key: default_storage_key(),
        }
    }
}

/// Share code appearance and expiry window.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
    #[serde(default = "default_code_size")]
    pub code_width: u32,
    #[serde(default = "default_code_size")]
    pub code_height: u32,
    #[serde(default = "default_dark_color")]
    pub dark_color: String,
    #[serde(default = "default_light_color")]
    pub light_color: String,
    #[serde(default)]
    pub correction: ErrorCorrection,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            code_width: default_code_size(),
            code_height: default_code_size(),
            dark_color: default_dark_color(),
            light_color: default_light_color(),
            correction: ErrorCorrection::default(),
        }
    }
}

/// Local download naming.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DownloadConfig {
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_ideal_width() -> u32 {
    1280
}

fn default_ideal_height() -> u32 {
    720
}

fn default_duration_secs() -> u64 {
    10
}

fn default_countdown_from() -> u32 {
    3
}

fn default_mime_type() -> String {
    "video/webm;codecs=vp9,opus".to_string()
}

fn default_extension() -> String {
    "webm".to_string()
}

fn default_gallery_cap() -> usize {
    10
}

fn default_storage_key() -> String {
    "videos".to_string()
}

fn default_window_secs() -> u64 {
    30
}

fn default_code_size() -> u32 {
    200
}

fn default_dark_color() -> String {
    "#FFA500".to_string()
}

fn default_light_color() -> String {
    "#000000".to_string()
}

fn default_file_prefix() -> String {
    "video_360_".to_string()
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum BoothConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests;
