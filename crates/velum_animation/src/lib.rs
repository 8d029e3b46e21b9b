//! Velum Animation System
//!
//! Frame-driven animation primitives. Nothing here owns a thread or a clock:
//! callers advance animations with the time elapsed since the last frame.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs, configurable by stiffness
//!   and damping or by response time and damping ratio
//! - **Easing**: Standard and custom cubic Bézier timing curves
//! - **Tweens**: Fixed-duration interpolation of any `Interpolate` value
//! - **Timers**: Deadline queue polled from the frame update

pub mod easing;
pub mod spring;
pub mod timer;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use spring::{Spring, SpringConfig};
pub use timer::{TimerId, TimerQueue};
pub use tween::Tween;
pub use values::Interpolate;
