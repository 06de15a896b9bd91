//! Transient per-capture recording state.
//!
//! One `RecordingSession` exists between recording start and finalization:
//! it buffers encoded chunks as the encoder emits them, counts elapsed
//! seconds, and assembles the final clip artifact. The session stops itself
//! when elapsed time reaches the duration cap; the cap is the only thing
//! that ends an unattended recording.

/// Accumulated state for one capture cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingSession {
    chunks: Vec<Vec<u8>>,
    elapsed: u64,
}

/// Outcome of one elapsed-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingTick {
    /// Still under the cap; keep recording.
    Running,
    /// Elapsed time reached the configured duration; stop now.
    ReachedCap,
}

impl RecordingSession {
    /// Starts a fresh session with an empty buffer and a zeroed counter.
    pub fn begin() -> Self {
        Self {
            chunks: Vec::new(),
            elapsed: 0,
        }
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Buffers one encoded slice. Zero-length slices are skipped.
    pub fn push_chunk(&mut self, data: Vec<u8>) {
        if !data.is_empty() {
            self.chunks.push(data);
        }
    }

    /// Advances the elapsed counter by one second.
    pub fn tick(&mut self, duration_cap_secs: u64) -> RecordingTick {
        self.elapsed += 1;
        if self.elapsed >= duration_cap_secs {
            RecordingTick::ReachedCap
        } else {
            RecordingTick::Running
        }
    }

    /// Assembles all buffered chunks into a single clip artifact.
    pub fn finish(self) -> Vec<u8> {
        let total: usize = self.chunks.iter().map(Vec::len).sum();
        let mut artifact = Vec::with_capacity(total);
        for chunk in self.chunks {
            artifact.extend_from_slice(&chunk);
        }
        artifact
    }
}
