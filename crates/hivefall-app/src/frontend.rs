//! Input and presentation boundary.

use std::time::{Duration, Instant};

use hivefall_core::enums::InputSymbol;
use hivefall_core::types::Drawable;

/// What the driver needs from a platform layer: input polling before the
/// tick, frame presentation after it.
pub trait Frontend {
    /// Poll the input symbols gathered since the last tick.
    fn poll_inputs(&mut self) -> Vec<InputSymbol>;

    /// Present one frame of drawables (world first, UI last).
    fn present(&mut self, frame: &[Drawable]);
}

/// Frontend that renders nothing and requests quit after an optional
/// time budget. Used for smoke runs and pacing checks.
pub struct HeadlessFrontend {
    budget: Option<Duration>,
    started: Instant,
    frames: u64,
}

impl HeadlessFrontend {
    pub fn new(budget: Option<Duration>) -> Self {
        Self {
            budget,
            started: Instant::now(),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Frontend for HeadlessFrontend {
    fn poll_inputs(&mut self) -> Vec<InputSymbol> {
        match self.budget {
            Some(budget) if self.started.elapsed() >= budget => vec![InputSymbol::Quit],
            _ => Vec::new(),
        }
    }

    fn present(&mut self, _frame: &[Drawable]) {
        self.frames += 1;
    }
}
