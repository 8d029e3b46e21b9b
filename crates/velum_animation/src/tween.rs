//! Fixed-duration interpolation
//!
//! A `Tween` moves a value from `from` to `to` over a duration, shaped by an
//! [`Easing`] curve. It holds no clock of its own: the caller positions it
//! with [`Tween::seek`] using the time since the animation started.

use crate::easing::Easing;
use crate::values::Interpolate;

/// A timed interpolation between two values
#[derive(Clone, Debug)]
pub struct Tween<T: Interpolate> {
    from: T,
    to: T,
    duration_ms: u32,
    easing: Easing,
    elapsed_ms: f32,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            elapsed_ms: 0.0,
        }
    }

    /// Jump to an absolute time since start
    pub fn seek(&mut self, elapsed_ms: f32) {
        self.elapsed_ms = elapsed_ms.clamp(0.0, self.duration_ms as f32);
    }

    /// Current eased value; exactly `to` once the duration has elapsed
    pub fn value(&self) -> T {
        if self.duration_ms == 0 || self.elapsed_ms >= self.duration_ms as f32 {
            return self.to.clone();
        }
        let progress = self.elapsed_ms / self.duration_ms as f32;
        self.from.lerp(&self.to, self.easing.apply(progress))
    }
}
