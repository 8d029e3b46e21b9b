//! Alert configuration
//!
//! An [`AlertConfig`] is built once per presentation and never changes while
//! the alert is on screen. Only the message, the confirm label and the
//! confirm callback are required; everything else has a default.
//!
//! ```ignore
//! use velum_alert::prelude::*;
//!
//! let config = alert("Delete item?", "Yes", || tracing::info!("deleted"))
//!     .title("Confirm")
//!     .cancel_text("No")
//!     .on_cancel(|| tracing::info!("kept"))
//!     .build();
//! ```

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use velum_core::{Color, Shadow};

use crate::state::DismissReason;
use crate::theme::AlertTheme;

/// Callback invoked when an alert finishes dismissing
pub type AlertCallback = Arc<dyn Fn() + Send + Sync>;

/// Image shown above the title, resolved by the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlertImage {
    /// Named asset or symbol, e.g. `"exclamationmark.triangle.fill"`
    Named(String),
    /// Image file on disk
    Path(PathBuf),
}

impl AlertImage {
    pub fn named(name: impl Into<String>) -> Self {
        AlertImage::Named(name.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        AlertImage::Path(path.into())
    }
}

/// Background and label colors of one button
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonColors {
    pub background: Color,
    pub foreground: Color,
}

impl ButtonColors {
    pub fn new(background: Color, foreground: Color) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// Blue background, white label
    pub fn confirm_default() -> Self {
        Self::new(Color::from_hex(0x007AFF), Color::WHITE)
    }

    /// Translucent gray background, black label
    pub fn cancel_default() -> Self {
        Self::new(Color::from_hex(0x8E8E93).with_alpha(0.3), Color::BLACK)
    }
}

/// Drop shadow under the alert card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    pub color: Color,
    pub radius: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK.with_alpha(0.3),
            radius: 8.0,
            offset_x: 0.0,
            offset_y: 4.0,
        }
    }
}

impl ShadowStyle {
    pub fn to_shadow(&self) -> Shadow {
        Shadow::new(self.offset_x, self.offset_y, self.radius, self.color)
    }
}

/// Dimmed layer behind the card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropStyle {
    pub color: Color,
    pub opacity: f32,
}

impl Default for BackdropStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            opacity: 0.3,
        }
    }
}

impl BackdropStyle {
    /// Backdrop color with the opacity folded into its alpha
    pub fn effective_color(&self) -> Color {
        self.color.opacity(self.opacity)
    }
}

/// Immutable description of one alert presentation
#[derive(Clone)]
pub struct AlertConfig {
    image: Option<AlertImage>,
    title: Option<String>,
    message: String,
    confirm_text: String,
    cancel_text: Option<String>,
    confirm_colors: ButtonColors,
    cancel_colors: ButtonColors,
    shadow: ShadowStyle,
    backdrop: BackdropStyle,
    on_confirm: AlertCallback,
    on_cancel: Option<AlertCallback>,
}

impl AlertConfig {
    /// Start building an alert from its required parts
    pub fn builder<F>(
        message: impl Into<String>,
        confirm_text: impl Into<String>,
        on_confirm: F,
    ) -> AlertConfigBuilder
    where
        F: Fn() + Send + Sync + 'static,
    {
        AlertConfigBuilder::new(message, confirm_text, on_confirm)
    }

    pub fn image(&self) -> Option<&AlertImage> {
        self.image.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn confirm_text(&self) -> &str {
        &self.confirm_text
    }

    pub fn cancel_text(&self) -> Option<&str> {
        self.cancel_text.as_deref()
    }

    pub fn confirm_colors(&self) -> ButtonColors {
        self.confirm_colors
    }

    pub fn cancel_colors(&self) -> ButtonColors {
        self.cancel_colors
    }

    pub fn shadow(&self) -> ShadowStyle {
        self.shadow
    }

    pub fn backdrop(&self) -> BackdropStyle {
        self.backdrop
    }

    /// A cancel button is shown iff a cancel label was given
    pub fn has_cancel_button(&self) -> bool {
        self.cancel_text.is_some()
    }

    pub fn has_cancel_callback(&self) -> bool {
        self.on_cancel.is_some()
    }

    /// Callback to run once a dismissal for `reason` completes
    ///
    /// Cancel and backdrop dismissals share the cancel callback and yield
    /// `None` when none was registered.
    pub fn callback_for(&self, reason: DismissReason) -> Option<&AlertCallback> {
        match reason {
            DismissReason::Confirmed => Some(&self.on_confirm),
            DismissReason::Cancelled | DismissReason::BackdropTapped => self.on_cancel.as_ref(),
        }
    }
}

impl fmt::Debug for AlertConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertConfig")
            .field("image", &self.image)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("confirm_text", &self.confirm_text)
            .field("cancel_text", &self.cancel_text)
            .field("confirm_colors", &self.confirm_colors)
            .field("cancel_colors", &self.cancel_colors)
            .field("shadow", &self.shadow)
            .field("backdrop", &self.backdrop)
            .field("on_cancel", &self.on_cancel.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`AlertConfig`]
pub struct AlertConfigBuilder {
    config: AlertConfig,
}

impl AlertConfigBuilder {
    pub fn new<F>(message: impl Into<String>, confirm_text: impl Into<String>, on_confirm: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            config: AlertConfig {
                image: None,
                title: None,
                message: message.into(),
                confirm_text: confirm_text.into(),
                cancel_text: None,
                confirm_colors: ButtonColors::confirm_default(),
                cancel_colors: ButtonColors::cancel_default(),
                shadow: ShadowStyle::default(),
                backdrop: BackdropStyle::default(),
                on_confirm: Arc::new(on_confirm),
                on_cancel: None,
            },
        }
    }

    /// Apply colors, shadow and backdrop from a theme
    ///
    /// Calls made after this one override the theme's values.
    pub fn theme(mut self, theme: &AlertTheme) -> Self {
        self.config.confirm_colors = theme.confirm;
        self.config.cancel_colors = theme.cancel;
        self.config.shadow = theme.shadow;
        self.config.backdrop = theme.backdrop;
        self
    }

    pub fn image(mut self, image: AlertImage) -> Self {
        self.config.image = Some(image);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Label for the cancel button; without it no cancel button is shown
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.config.cancel_text = Some(text.into());
        self
    }

    pub fn confirm_background(mut self, color: Color) -> Self {
        self.config.confirm_colors.background = color;
        self
    }

    pub fn confirm_foreground(mut self, color: Color) -> Self {
        self.config.confirm_colors.foreground = color;
        self
    }

    pub fn cancel_background(mut self, color: Color) -> Self {
        self.config.cancel_colors.background = color;
        self
    }

    pub fn cancel_foreground(mut self, color: Color) -> Self {
        self.config.cancel_colors.foreground = color;
        self
    }

    pub fn shadow_color(mut self, color: Color) -> Self {
        self.config.shadow.color = color;
        self
    }

    pub fn shadow_radius(mut self, radius: f32) -> Self {
        self.config.shadow.radius = radius;
        self
    }

    pub fn shadow_offset(mut self, x: f32, y: f32) -> Self {
        self.config.shadow.offset_x = x;
        self.config.shadow.offset_y = y;
        self
    }

    pub fn backdrop_color(mut self, color: Color) -> Self {
        self.config.backdrop.color = color;
        self
    }

    pub fn backdrop_opacity(mut self, opacity: f32) -> Self {
        self.config.backdrop.opacity = opacity;
        self
    }

    /// Runs after a cancel-button or backdrop dismissal
    pub fn on_cancel<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.config.on_cancel = Some(Arc::new(callback));
        self
    }

    pub fn build(self) -> AlertConfig {
        self.config
    }
}

/// Shorthand for [`AlertConfig::builder`]
pub fn alert<F>(
    message: impl Into<String>,
    confirm_text: impl Into<String>,
    on_confirm: F,
) -> AlertConfigBuilder
where
    F: Fn() + Send + Sync + 'static,
{
    AlertConfigBuilder::new(message, confirm_text, on_confirm)
}
