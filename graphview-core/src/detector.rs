use std::time::{Duration, Instant};

use crate::target::RenderTarget;

/// Delay between readiness checks while an artifact is loading.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Requested,
    Polling,
    Loaded,
}

/// Emitted once per load when the render target reports readiness. The
/// generation identifies the search that armed the detector, so completions
/// from superseded searches can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadComplete {
    pub generation: u64,
    pub content_bytes: u64,
}

/// Tick-driven readiness detector. There is no retry bound: an artifact
/// that never finishes keeps the detector in `Polling` until it is
/// cancelled or re-armed, which bumps the generation and invalidates any
/// completion still in flight.
#[derive(Debug)]
pub struct LoadDetector {
    phase: LoadPhase,
    generation: u64,
    next_check: Option<Instant>,
}

impl LoadDetector {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Idle,
            generation: 0,
            next_check: None,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a new detection cycle with a check due immediately. Returns
    /// the generation of the new cycle.
    pub fn arm(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Requested;
        self.next_check = Some(now);
        self.generation
    }

    /// Returns to `Idle` and invalidates the current cycle.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.phase = LoadPhase::Idle;
        self.next_check = None;
    }

    /// Inspects the target if a check is due. Not ready schedules the next
    /// check one [`POLL_INTERVAL`] out; ready transitions to `Loaded` and
    /// reports the content size for the size check.
    pub fn poll(&mut self, target: &dyn RenderTarget, now: Instant) -> Option<LoadComplete> {
        match self.phase {
            LoadPhase::Idle | LoadPhase::Loaded => return None,
            LoadPhase::Requested | LoadPhase::Polling => {}
        }
        let due = match self.next_check {
            Some(at) => now >= at,
            None => false,
        };
        if !due {
            return None;
        }
        if target.is_ready() {
            self.phase = LoadPhase::Loaded;
            self.next_check = None;
            Some(LoadComplete {
                generation: self.generation,
                content_bytes: target.content_size().unwrap_or(0),
            })
        } else {
            self.phase = LoadPhase::Polling;
            self.next_check = Some(now + POLL_INTERVAL);
            None
        }
    }
}

impl Default for LoadDetector {
    fn default() -> Self {
        Self::new()
    }
}
