use crate::storage::error::StorageError;
use crate::types::config::BoothConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("download error: {0}")]
    Download(#[from] DownloadError),

    #[error("config error: {0}")]
    Config(#[from] BoothConfigError),
}

/// Device acquisition failure. Permission denial and missing hardware are
/// deliberately not distinguished; the session degrades the same way for both.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("could not access the capture device: {0}")]
    Unavailable(String),
}

/// Local save failure. Logged, never surfaced to the user.
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("save failed: {0}")]
    Failed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
