//! Slide-in reveal for page sections

use super::progress;
use std::time::{Duration, Instant};

/// Where a revealed section slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

/// Reveal progress for one section
#[derive(Debug, Clone)]
pub struct RevealState {
    pub direction: RevealDirection,
    pub delay: Duration,
    pub duration: Duration,
    /// Stay revealed after the first trigger
    pub once: bool,
    visible_since: Option<Instant>,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(RevealDirection::Up)
    }
}

impl RevealState {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);
    /// Cells a section is displaced by before its reveal starts
    pub const DISTANCE: u16 = 4;

    pub fn new(direction: RevealDirection) -> Self {
        Self {
            direction,
            delay: Duration::ZERO,
            duration: Self::DEFAULT_DURATION,
            once: true,
            visible_since: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[cfg(test)]
    pub fn repeating(mut self) -> Self {
        self.once = false;
        self
    }

    /// Mark the section visible. Re-triggering keeps the first start time.
    pub fn trigger(&mut self, now: Instant) {
        self.visible_since.get_or_insert(now);
    }

    /// Mark the section hidden; only repeating reveals reset
    pub fn hide(&mut self) {
        if !self.once {
            self.visible_since = None;
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.visible_since.is_some()
    }

    /// Eased progress in `0.0..=1.0`
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(since) = self.visible_since else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(since);
        let Some(animating) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        simple_easing::cubic_out(progress(animating, self.duration))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_triggered() && self.progress(now) < 1.0
    }

    /// Remaining displacement in cells as `(dx, dy)`
    pub fn offset(&self, now: Instant) -> (i16, i16) {
        let remaining = ((1.0 - self.progress(now)) * f32::from(Self::DISTANCE)).round() as i16;
        match self.direction {
            RevealDirection::Up => (0, remaining),
            RevealDirection::Down => (0, -remaining),
            RevealDirection::Left => (remaining, 0),
            RevealDirection::Right => (-remaining, 0),
        }
    }
}
