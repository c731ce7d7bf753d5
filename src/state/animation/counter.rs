//! Animated number counter

use super::progress;
use std::time::{Duration, Instant};

/// Tween from `from` to `to` with cubic ease-out, started on first reveal
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    /// Digits after the decimal point in the displayed value
    pub decimals: usize,
    pub suffix: &'static str,
    started_at: Option<Instant>,
    finished: bool,
}

impl CounterAnimation {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

    pub fn new(to: f64) -> Self {
        Self {
            from: 0.0,
            to,
            duration: Self::DEFAULT_DURATION,
            decimals: 0,
            suffix: "",
            started_at: None,
            finished: false,
        }
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Start the tween. Later calls keep the original start time.
    pub fn start(&mut self, now: Instant) {
        self.started_at.get_or_insert(now);
    }

    /// Jump straight to the target (reduced motion)
    pub fn finish(&mut self) {
        self.finished = true;
    }

    #[cfg(test)]
    pub fn is_started(&self) -> bool {
        self.finished || self.started_at.is_some()
    }

    pub fn is_running(&self, now: Instant) -> bool {
        !self.finished
            && self
                .started_at
                .is_some_and(|start| now.saturating_duration_since(start) < self.duration)
    }

    /// Value after `elapsed`: `floor(from + range * cubic_out(p))`, exact target once done
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let p = progress(elapsed, self.duration);
        if p >= 1.0 {
            return self.to;
        }
        let scale = 10f64.powi(self.decimals as i32);
        let eased = f64::from(simple_easing::cubic_out(p));
        let raw = self.from + (self.to - self.from) * eased;
        (raw * scale).floor() / scale
    }

    pub fn current(&self, now: Instant) -> f64 {
        if self.finished {
            return self.to;
        }
        match self.started_at {
            Some(start) => self.value_at(now.saturating_duration_since(start)),
            None => self.from,
        }
    }

    /// Formatted value with its suffix, e.g. `99.9%`
    pub fn display(&self, now: Instant) -> String {
        format!(
            "{:.*}{}",
            self.decimals,
            self.current(now),
            self.suffix
        )
    }
}
