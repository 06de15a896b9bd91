pub mod booth;
pub mod clips;
pub mod clock;
pub mod countdown;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod recording;
pub mod services;
pub mod share;
pub mod storage;
pub mod types;

pub use booth::{Booth, Event, Services};
pub use error::{CaptureError, DownloadError, Error, Result};
