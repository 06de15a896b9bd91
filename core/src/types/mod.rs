pub mod config;
pub use config::{
    BoothConfig, BoothConfigError, CaptureConfig, DownloadConfig, GalleryConfig, RecordingConfig,
    ShareConfig,
};

pub(crate) mod locator;
pub use locator::{ClipLocator, ClipLocatorError, ClipRef, MAX_LOCATOR_LENGTH};

pub(crate) mod entry;
pub use entry::GalleryEntry;

pub(crate) mod media;
pub use media::{
    CaptureConstraints, CodeSpec, ContainerSpec, ErrorCorrection, FacingMode,
};
