use std::time::Instant;

use crate::constants::{MAX_RIPPLES, RIPPLE_LIFETIME, RIPPLE_WAVE_MS};
use crate::window::Point;

#[derive(Debug)]
struct Ripple {
    center: Point,
    started: Instant,
}

/// Expanding click ripples. Capped: while the cap is reached new clicks
/// simply do not spawn one.
#[derive(Debug, Default)]
pub struct RippleEffect {
    ripples: Vec<Ripple>,
}

impl RippleEffect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, center: Point, now: Instant) {
        self.prune(now);
        if self.ripples.len() >= MAX_RIPPLES {
            return;
        }
        self.ripples.push(Ripple {
            center,
            started: now,
        });
    }

    pub fn prune(&mut self, now: Instant) {
        self.ripples
            .retain(|r| now.duration_since(r.started) < RIPPLE_LIFETIME);
    }

    pub fn active(&self) -> usize {
        self.ripples.len()
    }

    /// Live ripples as (center, radius) pairs for drawing.
    pub fn frames(&self, now: Instant) -> Vec<(Point, i32)> {
        self.ripples
            .iter()
            .map(|r| {
                let elapsed = now.duration_since(r.started).as_millis() as u64;
                (r.center, (elapsed / RIPPLE_WAVE_MS) as i32)
            })
            .collect()
    }
}

/// Last seen pointer cell, for the drawn cursor glyph.
#[derive(Debug, Default)]
pub struct Cursor {
    position: Option<Point>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = Some(position);
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }
}
