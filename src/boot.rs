use std::time::Instant;

use crate::apps::BOOT_LOG;
use crate::constants::{BOOT_CHARS_PER_SEC, BOOT_LINGER};

/// Typewriter reveal of the boot log, driven entirely by elapsed time so
/// it needs no timers of its own. Any keypress skips it.
#[derive(Debug)]
pub struct BootSequence {
    started: Instant,
    skipped: bool,
}

impl BootSequence {
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            skipped: false,
        }
    }

    pub fn skip(&mut self) {
        self.skipped = true;
    }

    fn budget(&self, now: Instant) -> u64 {
        if self.skipped {
            return u64::MAX;
        }
        now.duration_since(self.started).as_millis() as u64 * BOOT_CHARS_PER_SEC / 1000
    }

    /// The lines revealed so far; the last one may be cut mid-word.
    pub fn visible_lines(&self, now: Instant) -> Vec<String> {
        let mut remaining = self.budget(now) as usize;
        let mut lines = Vec::new();
        for line in BOOT_LOG.lines() {
            let len = line.chars().count();
            if remaining >= len {
                lines.push(line.to_string());
                remaining -= len;
            } else {
                lines.push(line.chars().take(remaining).collect());
                break;
            }
        }
        lines
    }

    pub fn finished(&self, now: Instant) -> bool {
        if self.skipped {
            return true;
        }
        let total: u64 = BOOT_LOG.lines().map(|l| l.chars().count() as u64).sum();
        let linger_chars = BOOT_LINGER.as_millis() as u64 * BOOT_CHARS_PER_SEC / 1000;
        self.budget(now) >= total + linger_chars
    }
}
