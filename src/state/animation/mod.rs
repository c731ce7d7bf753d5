//! Decorative animation state
//!
//! Each animation is owned by the component that draws it and advanced
//! with an explicit timestamp from the event loop tick.

mod counter;
mod particles;
mod reveal;

pub use counter::CounterAnimation;
pub use particles::{Density, ParticleField};
pub use reveal::{RevealDirection, RevealState};

/// Fraction of `duration` covered by `elapsed`, clamped to `0.0..=1.0`
pub(crate) fn progress(elapsed: std::time::Duration, duration: std::time::Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
