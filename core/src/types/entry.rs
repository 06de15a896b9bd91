use crate::types::ClipLocator;
use serde::{Deserialize, Serialize};

/// One persisted gallery item. The gallery keeps these newest-first and
/// never holds more than the configured cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub locator: ClipLocator,
    /// Milliseconds since the Unix epoch, taken when the clip was finalized.
    pub timestamp: i64,
}
