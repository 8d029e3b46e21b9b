//! Velum Alert
//!
//! A modal alert overlay for hosts that bring their own renderer and event
//! loop, plus a decorative cutout frame shape.
//!
//! - [`AlertConfig`]: what to show (image, title, message, buttons, colors)
//!   and what to call when it is dismissed
//! - [`AlertController`]: the mount → spring in → dismiss → tween out →
//!   unmount lifecycle, driven by [`AlertController::update`] every frame
//! - [`AlertLayout`]: absolute rectangles and hit testing for a viewport
//! - [`AlertTheme`]: shared colors loaded from TOML
//! - [`CutoutShape`]: rounded rectangle with a semicircular top notch
//!
//! The alert and the shape are independent of each other.
//!
//! # Example
//!
//! ```rust
//! use velum_alert::prelude::*;
//!
//! let config = alert("Delete item?", "Yes", || {})
//!     .cancel_text("No")
//!     .build();
//!
//! let mut controller = AlertController::new();
//! controller.present(config);
//!
//! let mut now = 0;
//! while controller.update(now) {
//!     now += 16;
//! }
//! assert_eq!(controller.phase(), AlertPhase::Resting);
//!
//! controller.tap_backdrop();
//! while controller.update(now) {
//!     now += 16;
//! }
//! assert!(!controller.is_visible());
//! ```

pub mod button;
pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod shape;
pub mod state;
pub mod theme;
pub mod timing;

pub use button::{AlertButtonRole, AlertButtonStyle, ButtonAppearance};
pub use config::{
    alert, AlertCallback, AlertConfig, AlertConfigBuilder, AlertImage, BackdropStyle,
    ButtonColors, ShadowStyle,
};
pub use controller::{AlertController, VisibilityObserver};
pub use error::{AlertError, Result};
pub use layout::{
    AlertHit, AlertLayout, ButtonLayout, FixedMetrics, TextBlock, TextMeasure, TextWeight,
};
pub use shape::CutoutShape;
pub use state::{AlertEvent, AlertPhase, AlertVisualState, DismissReason, HIDDEN_SCALE};
pub use theme::AlertTheme;
pub use timing::AlertTiming;

/// Common imports for hosts embedding an alert
pub mod prelude {
    pub use crate::{
        alert, AlertButtonRole, AlertConfig, AlertController, AlertHit, AlertImage, AlertLayout,
        AlertPhase, AlertTheme, AlertVisualState, CutoutShape, DismissReason, FixedMetrics,
        TextMeasure,
    };
    pub use velum_core::{Color, Point, Rect, Size};
}
