//! End-to-end alert lifecycle driven through layout hit testing

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use velum_alert::prelude::*;

const FRAME_MS: u64 = 16;
const VIEWPORT: Rect = Rect::new(0.0, 0.0, 390.0, 844.0);

struct Harness {
    controller: AlertController,
    config: AlertConfig,
    layout: AlertLayout,
    confirms: Arc<AtomicUsize>,
    cancels: Arc<AtomicUsize>,
    now: u64,
}

impl Harness {
    fn delete_item() -> Self {
        let confirms = Arc::new(AtomicUsize::new(0));
        let cancels = Arc::new(AtomicUsize::new(0));
        let config = {
            let confirms = confirms.clone();
            let cancels = cancels.clone();
            alert("Delete item?", "Yes", move || {
                confirms.fetch_add(1, Ordering::SeqCst);
            })
            .cancel_text("No")
            .on_cancel(move || {
                cancels.fetch_add(1, Ordering::SeqCst);
            })
            .build()
        };
        let layout = AlertLayout::compute(&config, VIEWPORT, &FixedMetrics::default());
        Self {
            controller: AlertController::new(),
            config,
            layout,
            confirms,
            cancels,
            now: 0,
        }
    }

    fn present(&mut self) -> bool {
        self.controller.present(self.config.clone())
    }

    /// Run frames until the controller stops asking for them
    fn settle(&mut self) {
        while self.controller.update(self.now) {
            self.now += FRAME_MS;
            assert!(self.now < 10_000, "animation never settled");
        }
    }

    fn button_center(&self, role: AlertButtonRole) -> Point {
        self.layout.button(role).unwrap().rect.center()
    }
}

#[test]
fn tap_no_cancels_after_exit() {
    let mut h = Harness::delete_item();
    assert!(h.present());
    h.settle();
    assert_eq!(h.controller.phase(), AlertPhase::Resting);
    assert_eq!(h.controller.visual_state(), AlertVisualState::RESTING);

    let no = h.button_center(AlertButtonRole::Cancel);
    assert!(h.controller.tap(no, &h.layout));
    assert_eq!(h.controller.phase(), AlertPhase::Exiting);

    let start = h.now;
    h.controller.update(start);
    h.controller.update(start + 200);
    let state = h.controller.visual_state();
    assert!(state.visible);
    assert!((state.scale - 0.7).abs() < 1e-4);
    assert!(state.opacity.abs() < 1e-4);
    assert_eq!(h.cancels.load(Ordering::SeqCst), 0);

    h.controller.update(start + 250);
    assert!(!h.controller.is_visible());
    assert_eq!(h.cancels.load(Ordering::SeqCst), 1);
    assert_eq!(h.confirms.load(Ordering::SeqCst), 0);

    // Nothing fires again on later frames
    h.controller.update(start + 1_000);
    assert_eq!(h.cancels.load(Ordering::SeqCst), 1);
}

#[test]
fn tap_yes_confirms() {
    let mut h = Harness::delete_item();
    h.present();
    h.settle();

    let yes = h.button_center(AlertButtonRole::Confirm);
    assert!(h.controller.tap(yes, &h.layout));
    h.settle();

    assert!(!h.controller.is_visible());
    assert_eq!(h.confirms.load(Ordering::SeqCst), 1);
    assert_eq!(h.cancels.load(Ordering::SeqCst), 0);
}

#[test]
fn backdrop_tap_runs_cancel_callback() {
    let mut h = Harness::delete_item();
    h.present();
    h.settle();

    assert!(h.controller.tap(Point::new(5.0, 5.0), &h.layout));
    h.settle();
    assert_eq!(h.cancels.load(Ordering::SeqCst), 1);
    assert_eq!(h.confirms.load(Ordering::SeqCst), 0);
}

#[test]
fn card_tap_does_nothing() {
    let mut h = Harness::delete_item();
    h.present();
    h.settle();

    let message = h.layout.message.rect.center();
    assert!(!h.controller.tap(message, &h.layout));
    assert_eq!(h.controller.phase(), AlertPhase::Resting);
}

#[test]
fn press_and_drag_off_does_not_dismiss() {
    let mut h = Harness::delete_item();
    h.present();
    h.settle();

    let yes = h.button_center(AlertButtonRole::Confirm);
    h.controller.pointer_down(yes, &h.layout);
    assert_eq!(
        h.controller.pressed_button(),
        Some(AlertButtonRole::Confirm)
    );
    let look = h
        .controller
        .button_appearance(&h.layout, AlertButtonRole::Confirm)
        .unwrap();
    assert_eq!(look.scale, 0.95);

    let card_center = h.layout.message.rect.center();
    assert!(!h.controller.pointer_up(card_center, &h.layout));
    assert_eq!(h.controller.pressed_button(), None);
    assert_eq!(h.controller.phase(), AlertPhase::Resting);
}

#[test]
fn double_tap_fires_once() {
    let mut h = Harness::delete_item();
    h.present();
    h.settle();

    let yes = h.button_center(AlertButtonRole::Confirm);
    assert!(h.controller.tap(yes, &h.layout));
    assert!(!h.controller.tap(yes, &h.layout));
    h.settle();
    assert_eq!(h.confirms.load(Ordering::SeqCst), 1);
}

#[test]
fn can_present_again_after_unmount() {
    let mut h = Harness::delete_item();
    let mounts = Arc::new(Mutex::new(Vec::new()));
    {
        let mounts = mounts.clone();
        h.controller
            .on_visibility_changed(move |visible| mounts.lock().unwrap().push(visible));
    }

    for _ in 0..2 {
        h.present();
        h.settle();
        h.controller.tap_backdrop();
        h.settle();
    }

    assert_eq!(*mounts.lock().unwrap(), vec![true, false, true, false]);
    assert_eq!(h.cancels.load(Ordering::SeqCst), 2);
}

#[test]
fn scale_and_opacity_stay_in_range() {
    let mut h = Harness::delete_item();
    h.present();
    let mut dismissed = false;

    loop {
        let animating = h.controller.update(h.now);
        let state = h.controller.visual_state();
        assert!((0.0..=1.0).contains(&state.opacity));
        assert!(state.scale >= 0.7 - 1e-4 || !state.visible);
        assert!(state.scale <= 1.0);

        if !animating {
            if dismissed {
                break;
            }
            h.controller.tap_backdrop();
            dismissed = true;
        }
        h.now += FRAME_MS;
    }
}
