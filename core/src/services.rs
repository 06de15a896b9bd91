//! Seams to the services the booth orchestrates but does not implement:
//! the capture device, the media encoder, the code renderer, the download
//! trigger and the presentation surface. The core only ever talks to these
//! traits; the runtime decides what sits behind them.

use crate::error::{CaptureError, DownloadError};
use crate::layout::LayoutSnapshot;
use crate::types::{CaptureConstraints, ClipLocator, CodeSpec, ContainerSpec};

/// Opaque handle to a live capture stream. Read continuously by the preview
/// surface and consumed by at most one encoder at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamHandle(u64);

impl StreamHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Camera/microphone acquisition. One-shot: there is no retry policy.
pub trait CaptureDevice {
    fn request(&mut self, constraints: &CaptureConstraints) -> Result<StreamHandle, CaptureError>;
}

/// Event emitted by an active encoder, drained by the session after each
/// dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncoderEvent {
    /// An encoded slice is available. May be empty; empty slices are not
    /// buffered.
    DataAvailable(Vec<u8>),
    /// The encoder has fully stopped; all data events have been delivered.
    Stopped,
}

/// A recorder driving the encoder against one stream.
pub trait MediaEncoder {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_active(&self) -> bool;
    /// Returns and clears the pending events, oldest first.
    fn drain_events(&mut self) -> Vec<EncoderEvent>;
}

/// Creates one recorder per capture cycle.
pub trait EncoderFactory {
    fn create(&mut self, stream: &StreamHandle, spec: &ContainerSpec) -> Box<dyn MediaEncoder>;
}

/// Draws and clears the scannable share code.
pub trait CodeRenderer {
    fn render(&mut self, spec: &CodeSpec);
    fn clear(&mut self);
}

/// Browser-level save action for a finished clip.
pub trait DownloadSink {
    fn save(
        &mut self,
        locator: &ClipLocator,
        data: &[u8],
        filename: &str,
    ) -> Result<(), DownloadError>;
}

/// Visual/textual state of the capture trigger control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Default state, enabled.
    Ready,
    /// Disabled while the countdown runs.
    Disabled,
    /// "Recording" appearance, still disabled.
    Recording,
}

/// One rendered gallery item. `available` is false for entries whose
/// locator no longer resolves (recorded in a previous session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub locator: ClipLocator,
    pub timestamp: i64,
    pub available: bool,
}

/// Thin presentation binding. The session core pushes state changes through
/// this trait and pulls geometry from it; nothing else in the core touches
/// the surface.
pub trait Presenter {
    fn bind_preview(&mut self, stream: &StreamHandle);
    fn show_notice(&mut self, message: &str);

    fn show_wall_clock(&mut self, text: &str);

    fn show_countdown(&mut self, remaining: u32);
    fn hide_countdown(&mut self);

    fn set_trigger(&mut self, state: TriggerState);
    fn show_elapsed(&mut self, text: &str);
    fn hide_elapsed(&mut self);
    fn set_loading(&mut self, visible: bool);

    fn reveal_result(&mut self);
    fn render_gallery(&mut self, items: &[GalleryItem]);
    /// Asks the user to confirm a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;
    /// Opens a clip in a new viewing context.
    fn open_clip(&mut self, locator: &ClipLocator);

    fn show_share_panel(&mut self);
    fn show_share_remaining(&mut self, label: &str);
    fn show_share_expired(&mut self);

    fn layout(&self) -> LayoutSnapshot;
    fn scroll_to(&mut self, offset: i64);
}
