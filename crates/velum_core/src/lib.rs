//! Velum Core
//!
//! Foundational primitives shared by the Velum crates:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` in y-down screen space
//! - **Color**: RGBA colors with hex parsing and serde support
//! - **Paths**: Vector outlines built from lines and circular arcs,
//!   exportable as SVG path data
//!
//! # Example
//!
//! ```rust
//! use velum_core::{ArcDirection, Path, Point};
//!
//! let path = Path::new()
//!     .move_to(10.0, 0.0)
//!     .arc(Point::ZERO, 10.0, 0.0, std::f32::consts::FRAC_PI_2, ArcDirection::Clockwise)
//!     .close();
//!
//! assert!(path.is_closed());
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod path;

pub use color::{Color, Shadow};
pub use error::ColorParseError;
pub use geometry::{Point, Rect, Size};
pub use path::{point_on_circle, ArcDirection, Path, PathCommand};
