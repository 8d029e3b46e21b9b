//! Alert presentation controller
//!
//! Owns the show → interact → dismiss lifecycle of one alert:
//!
//! - [`present`](AlertController::present) takes the configuration for this
//!   presentation, mounts the alert at scale 0.7 and opacity 0 and springs
//!   both to 1
//! - [`request_dismiss`](AlertController::request_dismiss) tweens back to
//!   0.7 / 0 and schedules the unmount
//! - [`update`](AlertController::update) is called every frame with a
//!   monotonic clock; it advances the animations and performs the unmount,
//!   which flips visibility off and then runs the matching callback
//!
//! Animation start times are stamped on the first `update` after the action,
//! so actions can be issued from event handlers that have no clock at hand.
//!
//! # Example
//!
//! ```ignore
//! use velum_alert::prelude::*;
//!
//! let mut controller = AlertController::new();
//! controller.on_visibility_changed(|visible| host.set_overlay_mounted(visible));
//!
//! let config = alert("Delete item?", "Yes", || delete()).cancel_text("No").build();
//! controller.present(config);
//! // every frame:
//! let keep_animating = controller.update(clock.now_ms());
//! ```

use std::sync::Arc;

use velum_animation::{Spring, TimerQueue, Tween};
use velum_core::{Point, Rect};

use crate::button::{AlertButtonRole, ButtonAppearance};
use crate::config::AlertConfig;
use crate::layout::{AlertHit, AlertLayout, TextMeasure};
use crate::state::{AlertEvent, AlertPhase, AlertVisualState, DismissReason, HIDDEN_SCALE};
use crate::timing::AlertTiming;

/// Observer notified whenever the alert mounts (`true`) or unmounts (`false`)
pub type VisibilityObserver = Arc<dyn Fn(bool) + Send + Sync>;

/// Exit animation in flight
#[derive(Clone, Debug)]
struct ExitAnimation {
    reason: DismissReason,
    scale: Tween<f32>,
    opacity: Tween<f32>,
    started_at_ms: Option<u64>,
}

/// Drives one alert through its lifecycle
pub struct AlertController {
    /// Configuration of the current or most recent presentation
    config: Option<AlertConfig>,
    timing: AlertTiming,
    phase: AlertPhase,
    scale: Spring,
    opacity: Spring,
    exit: Option<ExitAnimation>,
    unmount: TimerQueue<DismissReason>,
    last_frame_ms: Option<u64>,
    pressed: Option<AlertHit>,
    observers: Vec<VisibilityObserver>,
}

impl Default for AlertController {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertController {
    pub fn new() -> Self {
        Self::with_timing(AlertTiming::default())
    }

    pub fn with_timing(timing: AlertTiming) -> Self {
        let entrance = timing.entrance();
        Self {
            config: None,
            timing,
            phase: AlertPhase::Hidden,
            scale: Spring::new(entrance, HIDDEN_SCALE),
            opacity: Spring::new(entrance, 0.0),
            exit: None,
            unmount: TimerQueue::new(),
            last_frame_ms: None,
            pressed: None,
            observers: Vec::new(),
        }
    }

    /// Configuration of the current or most recent presentation
    pub fn config(&self) -> Option<&AlertConfig> {
        self.config.as_ref()
    }

    pub fn timing(&self) -> &AlertTiming {
        &self.timing
    }

    pub fn phase(&self) -> AlertPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    /// Register an observer for mount/unmount changes
    pub fn on_visibility_changed<F>(&mut self, observer: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.observers.push(Arc::new(observer));
    }

    /// Current visibility, scale and opacity
    pub fn visual_state(&self) -> AlertVisualState {
        match self.phase {
            AlertPhase::Hidden => AlertVisualState::HIDDEN,
            AlertPhase::Entering | AlertPhase::Resting => AlertVisualState {
                visible: true,
                scale: self.scale.value().clamp(0.0, 1.0),
                opacity: self.opacity.value().clamp(0.0, 1.0),
            },
            AlertPhase::Exiting => {
                let (scale, opacity) = self
                    .exit
                    .as_ref()
                    .map(|exit| (exit.scale.value(), exit.opacity.value()))
                    .unwrap_or((HIDDEN_SCALE, 0.0));
                AlertVisualState {
                    visible: true,
                    scale: scale.clamp(0.0, 1.0),
                    opacity: opacity.clamp(0.0, 1.0),
                }
            }
        }
    }

    /// Mount an alert showing `config` and start the entrance
    ///
    /// Returns `false` without doing anything if an alert is already
    /// mounted, including while it is still exiting; `config` is dropped and
    /// the mounted alert keeps its own.
    pub fn present(&mut self, config: AlertConfig) -> bool {
        let Some(next) = self.phase.on_event(AlertEvent::Present) else {
            tracing::debug!("AlertController::present - ignored in {:?}", self.phase);
            return false;
        };

        self.config = Some(config);
        self.set_phase(next);
        self.scale.snap_to(HIDDEN_SCALE);
        self.scale.set_target(1.0);
        self.opacity.snap_to(0.0);
        self.opacity.set_target(1.0);
        self.last_frame_ms = None;
        self.pressed = None;
        self.notify_visibility(true);
        true
    }

    /// Start dismissing for `reason`
    ///
    /// Returns `false` if the alert is hidden or already exiting; a repeated
    /// request never schedules a second unmount or callback.
    pub fn request_dismiss(&mut self, reason: DismissReason) -> bool {
        let Some(next) = self.phase.on_event(AlertEvent::Dismiss) else {
            tracing::debug!(
                "AlertController::request_dismiss({:?}) - ignored in {:?}",
                reason,
                self.phase
            );
            return false;
        };

        // Exit starts from wherever the entrance got to
        let from = self.visual_state();
        let duration = self.timing.exit_duration_ms();
        let easing = self.timing.exit_easing();
        self.exit = Some(ExitAnimation {
            reason,
            scale: Tween::new(from.scale, HIDDEN_SCALE, duration, easing),
            opacity: Tween::new(from.opacity, 0.0, duration, easing),
            started_at_ms: None,
        });
        self.pressed = None;
        self.set_phase(next);
        true
    }

    /// Backdrop tap; same exit path as cancel
    pub fn tap_backdrop(&mut self) -> bool {
        self.request_dismiss(DismissReason::BackdropTapped)
    }

    /// Advance animations to `now_ms`
    ///
    /// Returns `true` while the alert still needs frames (entering or exiting).
    pub fn update(&mut self, now_ms: u64) -> bool {
        let dt_ms = self
            .last_frame_ms
            .map(|last| now_ms.saturating_sub(last))
            .unwrap_or(0);
        self.last_frame_ms = Some(now_ms);

        match self.phase {
            AlertPhase::Hidden => {}
            AlertPhase::Entering | AlertPhase::Resting => {
                let dt = dt_ms as f32 / 1000.0;
                self.scale.step(dt);
                self.opacity.step(dt);
                tracing::trace!(
                    "AlertController: scale={:.3} opacity={:.3}",
                    self.scale.value(),
                    self.opacity.value()
                );

                if self.phase == AlertPhase::Entering
                    && self.scale.is_settled()
                    && self.opacity.is_settled()
                {
                    self.transition(AlertEvent::EntranceSettled);
                }
            }
            AlertPhase::Exiting => {
                if let Some(exit) = self.exit.as_mut() {
                    match exit.started_at_ms {
                        None => {
                            exit.started_at_ms = Some(now_ms);
                            self.unmount.schedule_after(
                                now_ms,
                                self.timing.unmount_delay_ms() as u64,
                                exit.reason,
                            );
                            tracing::debug!(
                                "AlertController: exit started at {}ms, unmount in {}ms",
                                now_ms,
                                self.timing.unmount_delay_ms()
                            );
                        }
                        Some(started) => {
                            let elapsed = now_ms.saturating_sub(started) as f32;
                            exit.scale.seek(elapsed);
                            exit.opacity.seek(elapsed);
                        }
                    }
                }

                for reason in self.unmount.poll(now_ms) {
                    self.finish_dismiss(reason);
                }
            }
        }

        self.phase.is_animating()
    }

    /// Layout of the presented configuration, `None` before the first
    /// [`present`](Self::present)
    pub fn layout(&self, viewport: Rect, measurer: &impl TextMeasure) -> Option<AlertLayout> {
        self.config
            .as_ref()
            .map(|config| AlertLayout::compute(config, viewport, measurer))
    }

    /// Pointer pressed at `point`
    pub fn pointer_down(&mut self, point: Point, layout: &AlertLayout) {
        if !self.phase.is_interactive() {
            return;
        }
        self.pressed = layout.hit_test(point);
    }

    /// Pointer released at `point`
    ///
    /// A release on the same button or backdrop region that was pressed
    /// dismisses with the matching reason. Returns `true` if a dismissal
    /// started.
    pub fn pointer_up(&mut self, point: Point, layout: &AlertLayout) -> bool {
        let pressed = self.pressed.take();
        if !self.phase.is_interactive() {
            return false;
        }

        let released = layout.hit_test(point);
        if pressed.is_none() || pressed != released {
            return false;
        }

        match released {
            Some(AlertHit::Button(AlertButtonRole::Confirm)) => {
                self.request_dismiss(DismissReason::Confirmed)
            }
            Some(AlertHit::Button(AlertButtonRole::Cancel)) => {
                self.request_dismiss(DismissReason::Cancelled)
            }
            Some(AlertHit::Backdrop) => self.tap_backdrop(),
            Some(AlertHit::Card) | None => false,
        }
    }

    /// Press and release at the same point
    pub fn tap(&mut self, point: Point, layout: &AlertLayout) -> bool {
        self.pointer_down(point, layout);
        self.pointer_up(point, layout)
    }

    /// Button currently held down, if any
    pub fn pressed_button(&self) -> Option<AlertButtonRole> {
        match self.pressed {
            Some(AlertHit::Button(role)) => Some(role),
            _ => None,
        }
    }

    /// Resolved appearance of a laid-out button for this frame
    pub fn button_appearance(
        &self,
        layout: &AlertLayout,
        role: AlertButtonRole,
    ) -> Option<ButtonAppearance> {
        layout
            .button(role)
            .map(|b| b.style.appearance(self.pressed_button() == Some(role)))
    }

    fn finish_dismiss(&mut self, reason: DismissReason) {
        self.transition(AlertEvent::UnmountElapsed);
        self.exit = None;
        self.pressed = None;
        self.scale.snap_to(HIDDEN_SCALE);
        self.opacity.snap_to(0.0);
        self.notify_visibility(false);

        let callback = self
            .config
            .as_ref()
            .and_then(|config| config.callback_for(reason))
            .cloned();
        match callback {
            Some(callback) => {
                tracing::debug!("AlertController: running callback for {:?}", reason);
                callback();
            }
            None => tracing::debug!("AlertController: no callback for {:?}", reason),
        }
    }

    fn transition(&mut self, event: AlertEvent) {
        if let Some(next) = self.phase.on_event(event) {
            self.set_phase(next);
        }
    }

    fn set_phase(&mut self, next: AlertPhase) {
        tracing::debug!("AlertController: {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    fn notify_visibility(&self, visible: bool) {
        tracing::debug!("AlertController: visible={}", visible);
        for observer in &self.observers {
            observer(visible);
        }
    }
}
