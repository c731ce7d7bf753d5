//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static logo display
    Display,
    /// Logo lifting off the top of the screen
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Splash screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    /// Logo hold time before lifting off
    pub const DISPLAY_DURATION: Duration = Duration::from_millis(1300);
    /// Duration of the lift-off
    pub const ANIMATION_DURATION: Duration = Duration::from_millis(800);

    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Advance the animation to `now`
    pub fn update(&mut self, now: Instant, terminal_height: u16) {
        if self.is_complete() {
            return;
        }
        let elapsed = now.saturating_duration_since(self.start_time);

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let progress = (elapsed - Self::DISPLAY_DURATION).as_secs_f32()
                / Self::ANIMATION_DURATION.as_secs_f32();
            self.scroll_offset = simple_easing::cubic_out(progress) * f32::from(terminal_height);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}
