use serde::{Deserialize, Serialize};
use std::fmt;

/// Camera facing preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    #[default]
    User,
    Environment,
}

impl fmt::Display for FacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacingMode::User => write!(f, "user"),
            FacingMode::Environment => write!(f, "environment"),
        }
    }
}

/// Constraints passed to the capture device on acquisition. Dimensions are
/// ideals, not requirements; the device may hand back whatever it has.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureConstraints {
    pub facing: FacingMode,
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub audio: bool,
}

/// Container and codec selection handed to the encoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerSpec {
    pub mime_type: String,
    /// File extension matching the container, without the dot.
    pub extension: String,
}

/// Error-correction level for the scannable share code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    #[default]
    High,
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCorrection::Low => write!(f, "L"),
            ErrorCorrection::Medium => write!(f, "M"),
            ErrorCorrection::Quartile => write!(f, "Q"),
            ErrorCorrection::High => write!(f, "H"),
        }
    }
}

/// Everything the code-rendering service needs to draw a share code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeSpec {
    pub payload: String,
    pub width: u32,
    pub height: u32,
    pub dark_color: String,
    pub light_color: String,
    pub correction: ErrorCorrection,
}
