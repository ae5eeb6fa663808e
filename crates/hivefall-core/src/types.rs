//! Fundamental geometric and timing types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub position: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_parts(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Corner form: `[min_x, min_y, max_x, max_y]`.
    pub fn corners(&self) -> [f32; 4] {
        [
            self.position.x,
            self.position.y,
            self.position.x + self.size.x,
            self.position.y + self.size.y,
        ]
    }

    /// The same rectangle shifted by `delta`.
    pub fn translated(&self, delta: Vec2) -> Bounds {
        Bounds {
            position: self.position + delta,
            size: self.size,
        }
    }

    /// Closed-interval intersection test on each axis independently.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        let [ax0, ay0, ax1, ay1] = self.corners();
        let [bx0, by0, bx1, by1] = other.corners();
        ax0 <= bx1 && bx0 <= ax1 && ay0 <= by1 && by0 <= ay1
    }

    /// True when `self` pokes past any edge of `container`.
    pub fn escapes(&self, container: &Bounds) -> bool {
        let [cx0, cy0, cx1, cy1] = container.corners();
        let [sx0, sy0, sx1, sy1] = self.corners();
        sx0 <= cx0 || sy0 <= cy0 || sx1 >= cx1 || sy1 >= cy1
    }

    /// True when `self` lies entirely beyond `container`'s extent.
    pub fn fully_outside(&self, container: &Bounds) -> bool {
        let [cx0, cy0, cx1, cy1] = container.corners();
        let [sx0, sy0, sx1, sy1] = self.corners();
        sx1 < cx0 || sx0 > cx1 || sy1 < cy0 || sy0 > cy1
    }
}

/// Countdown timer: "has elapsed" is a pure function of accumulated
/// time versus duration. Advanced once per tick by the wall-time delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
}

impl Timer {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn has_elapsed(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Rearm with a new duration, discarding accumulated time.
    pub fn restart(&mut self, duration: f32) {
        self.duration = duration;
        self.elapsed = 0.0;
    }
}

/// Removal schedule for a timed ("effect") component: an optional
/// countdown plus an explicit cleanup flag a stage may raise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Expiry {
    pub timer: Option<Timer>,
    pub flagged: bool,
}

impl Expiry {
    /// Persists until a stage flags it.
    pub fn never() -> Self {
        Self::default()
    }

    /// Expires `secs` after attachment.
    pub fn after(secs: f32) -> Self {
        Self {
            timer: Some(Timer::new(secs)),
            flagged: false,
        }
    }

    pub fn from_timeout(timeout: Option<f32>) -> Self {
        match timeout {
            Some(secs) => Self::after(secs),
            None => Self::never(),
        }
    }

    pub fn flag(&mut self) {
        self.flagged = true;
    }

    pub fn is_due(&self) -> bool {
        self.flagged || self.timer.as_ref().is_some_and(Timer::has_elapsed)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// One renderable element handed to the frontend: a filled rectangle
/// with an optional text overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Rgba,
    pub text: Option<String>,
}
