//! Headless Alert Demo
//!
//! Drives an alert through its full lifecycle on a simulated 60fps clock:
//! - presents a "Delete item?" alert and prints the entrance spring
//! - taps the "No" button through the computed layout
//! - prints the exit tween until the alert unmounts
//!
//! Run with: RUST_LOG=velum_alert=debug cargo run -p velum_alert --example headless_alert

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use velum_alert::prelude::*;

const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cancelled = Arc::new(AtomicBool::new(false));
    let config = {
        let cancelled = cancelled.clone();
        alert("Are you sure you want to delete this item?", "Yes", || {
            println!("  -> confirmed")
        })
        .title("Delete item?")
        .image(AlertImage::named("trash"))
        .cancel_text("No")
        .on_cancel(move || {
            println!("  -> cancelled");
            cancelled.store(true, Ordering::SeqCst);
        })
        .build()
    };

    let mut controller = AlertController::new();
    controller.on_visibility_changed(|visible| println!("  mounted = {visible}"));

    println!("entrance:");
    controller.present(config);

    let viewport = Rect::new(0.0, 0.0, 390.0, 844.0);
    let layout = controller
        .layout(viewport, &FixedMetrics::default())
        .context("alert has no configuration")?;
    println!("card at {:?}", layout.card);

    let mut now = 0;
    while controller.update(now) {
        print_frame(now, &controller);
        now += FRAME_MS;
    }
    print_frame(now, &controller);

    let cancel = layout
        .button(AlertButtonRole::Cancel)
        .context("layout has no cancel button")?;
    println!("tap \"{}\" at {:?}", cancel.label, cancel.rect.center());
    if !controller.tap(cancel.rect.center(), &layout) {
        bail!("tap did not start a dismissal");
    }

    println!("exit:");
    while controller.update(now) {
        print_frame(now, &controller);
        now += FRAME_MS;
    }

    if !cancelled.load(Ordering::SeqCst) {
        bail!("cancel callback did not run");
    }
    println!("done at {now}ms");
    Ok(())
}

fn print_frame(now: u64, controller: &AlertController) {
    let state = controller.visual_state();
    println!(
        "  {:>5}ms {:?} scale={:.3} opacity={:.3}",
        now,
        controller.phase(),
        state.scale,
        state.opacity
    );
}
