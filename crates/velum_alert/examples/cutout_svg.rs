//! Cutout Shape SVG Export
//!
//! Prints a standalone SVG document with the cutout frame outline.
//!
//! Run with: cargo run -p velum_alert --example cutout_svg > cutout.svg

use anyhow::{ensure, Result};
use velum_alert::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let rect = Rect::new(10.0, 10.0, 300.0, 200.0);
    let shape = CutoutShape::new(20.0, 40.0);
    ensure!(shape.is_well_formed(rect), "radii do not fit {rect:?}");

    let data = shape.path(rect).to_svg_path_data();
    println!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="220" viewBox="0 0 320 220">
  <path d="{data}" fill="#007AFF" stroke="#1C1C1E" stroke-width="2"/>
</svg>"##
    );
    Ok(())
}
