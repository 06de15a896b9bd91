//! Pre-recording countdown.
//!
//! The countdown is explicit state ticked by the session, not a live timer.
//! Once started it always runs to completion; there is no cancellation path.

/// Countdown state between the trigger press and recording start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

/// Outcome of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Still counting; show this value.
    Display(u32),
    /// Reached zero; hide the counter and start recording.
    Finished,
}

impl Countdown {
    pub fn start(from: u32) -> Self {
        Self { remaining: from }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self) -> CountdownStep {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            CountdownStep::Finished
        } else {
            CountdownStep::Display(self.remaining)
        }
    }
}
