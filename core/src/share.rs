//! Share code state.
//!
//! At most one share code is live at a time; finalizing a new recording
//! replaces the previous one. Expiry is strictly timer-driven: the code
//! cannot be dismissed early and its payload is never refreshed.

use crate::types::{ClipLocator, CodeSpec, ShareConfig};

/// A live share code counting down toward expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCode {
    locator: ClipLocator,
    remaining: u64,
}

/// Outcome of one share-countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTick {
    /// Still valid; show this many seconds.
    Remaining(u64),
    /// Window elapsed; tear the code down.
    Expired,
}

impl ShareCode {
    pub fn generate(locator: ClipLocator, window_secs: u64) -> Self {
        Self {
            locator,
            remaining: window_secs,
        }
    }

    pub fn locator(&self) -> &ClipLocator {
        &self.locator
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// The countdown label shown next to the code, e.g. `"30s"`.
    pub fn label(&self) -> String {
        format!("{}s", self.remaining)
    }

    pub fn tick(&mut self) -> ShareTick {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            ShareTick::Expired
        } else {
            ShareTick::Remaining(self.remaining)
        }
    }

    /// Builds the drawing instructions for the code-rendering service.
    pub fn code_spec(&self, config: &ShareConfig) -> CodeSpec {
        CodeSpec {
            payload: self.locator.to_string(),
            width: config.code_width,
            height: config.code_height,
            dark_color: config.dark_color.clone(),
            light_color: config.light_color.clone(),
            correction: config.correction,
        }
    }
}
