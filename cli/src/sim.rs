//! Simulated media services for terminal runs. The capture device always
//! grants, the encoder synthesizes a stand-in payload, and downloads land
//! as real files in the data directory.

use std::fs;
use std::path::PathBuf;

use totem_core::error::{CaptureError, DownloadError};
use totem_core::services::{
    CaptureDevice, DownloadSink, EncoderEvent, EncoderFactory, MediaEncoder, StreamHandle,
};
use totem_core::types::{CaptureConstraints, ClipLocator, ContainerSpec};

/// Always-granting capture device; hands out a fresh handle per acquisition.
pub struct SimCamera {
    next_id: u64,
}

impl SimCamera {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }
}

impl CaptureDevice for SimCamera {
    fn request(&mut self, constraints: &CaptureConstraints) -> Result<StreamHandle, CaptureError> {
        self.next_id += 1;
        tracing::info!(
            facing = %constraints.facing,
            width = constraints.ideal_width,
            height = constraints.ideal_height,
            "simulated capture stream acquired"
        );
        Ok(StreamHandle::new(self.next_id))
    }
}

/// Delivers everything on stop, like a recorder running without a
/// timeslice.
struct SimEncoder {
    spec: ContainerSpec,
    active: bool,
    pending: Vec<EncoderEvent>,
}

impl MediaEncoder for SimEncoder {
    fn start(&mut self) {
        self.active = true;
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let payload = format!("simulated {} clip", self.spec.mime_type).into_bytes();
        self.pending.push(EncoderEvent::DataAvailable(payload));
        self.pending.push(EncoderEvent::Stopped);
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn drain_events(&mut self) -> Vec<EncoderEvent> {
        std::mem::take(&mut self.pending)
    }
}

pub struct SimEncoderFactory;

impl EncoderFactory for SimEncoderFactory {
    fn create(&mut self, stream: &StreamHandle, spec: &ContainerSpec) -> Box<dyn MediaEncoder> {
        tracing::debug!(stream = stream.id(), mime = %spec.mime_type, "encoder created");
        Box::new(SimEncoder {
            spec: spec.clone(),
            active: false,
            pending: Vec::new(),
        })
    }
}

/// Writes "downloaded" clips into a local directory.
pub struct FileDownloadSink {
    dir: PathBuf,
}

impl FileDownloadSink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl DownloadSink for FileDownloadSink {
    fn save(
        &mut self,
        locator: &ClipLocator,
        data: &[u8],
        filename: &str,
    ) -> Result<(), DownloadError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, data)?;
        tracing::info!(%locator, path = %path.display(), "clip saved");
        Ok(())
    }
}
