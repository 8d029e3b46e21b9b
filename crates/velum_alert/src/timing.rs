//! Animation timing for the alert lifecycle

use velum_animation::{Easing, SpringConfig};

use crate::error::{AlertError, Result};

/// Timing of the entrance spring, the exit tween and the unmount
///
/// The unmount always happens strictly after the exit tween has finished;
/// [`AlertTiming::new`] rejects timings that would cut the exit short.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlertTiming {
    entrance: SpringConfig,
    exit_duration_ms: u32,
    exit_easing: Easing,
    unmount_delay_ms: u32,
}

impl Default for AlertTiming {
    /// 0.5s / 0.6 spring in, 200ms ease-in-out out, unmount after 250ms
    fn default() -> Self {
        Self {
            entrance: SpringConfig::alert_entrance(),
            exit_duration_ms: 200,
            exit_easing: Easing::EaseInOut,
            unmount_delay_ms: 250,
        }
    }
}

impl AlertTiming {
    pub fn new(
        entrance: SpringConfig,
        exit_duration_ms: u32,
        exit_easing: Easing,
        unmount_delay_ms: u32,
    ) -> Result<Self> {
        if unmount_delay_ms <= exit_duration_ms {
            return Err(AlertError::UnmountBeforeExit {
                exit_ms: exit_duration_ms,
                unmount_ms: unmount_delay_ms,
            });
        }
        Ok(Self {
            entrance,
            exit_duration_ms,
            exit_easing,
            unmount_delay_ms,
        })
    }

    pub fn entrance(&self) -> SpringConfig {
        self.entrance
    }

    pub fn exit_duration_ms(&self) -> u32 {
        self.exit_duration_ms
    }

    pub fn exit_easing(&self) -> Easing {
        self.exit_easing
    }

    /// Delay from the start of the exit until the alert unmounts
    pub fn unmount_delay_ms(&self) -> u32 {
        self.unmount_delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_unmounts_after_exit() {
        let timing = AlertTiming::default();
        assert_eq!(timing.exit_duration_ms(), 200);
        assert_eq!(timing.unmount_delay_ms(), 250);
        assert!(timing.unmount_delay_ms() > timing.exit_duration_ms());
    }

    #[test]
    fn test_rejects_early_unmount() {
        let err = AlertTiming::new(SpringConfig::stiff(), 200, Easing::Linear, 200).unwrap_err();
        assert!(matches!(
            err,
            AlertError::UnmountBeforeExit {
                exit_ms: 200,
                unmount_ms: 200
            }
        ));
    }

    #[test]
    fn test_accepts_tighter_margin() {
        let timing = AlertTiming::new(SpringConfig::stiff(), 200, Easing::EaseIn, 201).unwrap();
        assert_eq!(timing.unmount_delay_ms(), 201);
        assert_eq!(timing.exit_easing(), Easing::EaseIn);
    }
}
