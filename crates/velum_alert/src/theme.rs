//! Alert theme files
//!
//! A theme supplies the colors, shadow and backdrop shared by many alerts.
//! Themes are plain TOML; every key is optional:
//!
//! ```toml
//! [confirm]
//! background = "#34C759"
//!
//! [cancel]
//! foreground = "#FF3B30"
//!
//! [shadow]
//! color = "#00000066"
//! radius = 8.0
//! offset_x = 3.0
//! offset_y = 3.0
//!
//! [backdrop]
//! color = "#0000FF"
//! opacity = 0.3
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use velum_core::Color;

use crate::config::{BackdropStyle, ButtonColors, ShadowStyle};
use crate::error::{AlertError, Result};

/// Shared visual defaults for alerts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlertTheme {
    pub confirm: ButtonColors,
    pub cancel: ButtonColors,
    pub shadow: ShadowStyle,
    pub backdrop: BackdropStyle,
}

impl Default for AlertTheme {
    fn default() -> Self {
        Self {
            confirm: ButtonColors::confirm_default(),
            cancel: ButtonColors::cancel_default(),
            shadow: ShadowStyle::default(),
            backdrop: BackdropStyle::default(),
        }
    }
}

impl AlertTheme {
    /// Parse a theme from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(source)?;
        Ok(file.resolve())
    }

    /// Read and parse a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| AlertError::ThemeIo {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_toml_str(&source)?;
        tracing::debug!("AlertTheme: loaded {}", path.display());
        Ok(theme)
    }
}

// =============================================================================
// On-disk format
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    confirm: ButtonSection,
    cancel: ButtonSection,
    shadow: ShadowSection,
    backdrop: BackdropSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ButtonSection {
    background: Option<Color>,
    foreground: Option<Color>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ShadowSection {
    color: Option<Color>,
    radius: Option<f32>,
    offset_x: Option<f32>,
    offset_y: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BackdropSection {
    color: Option<Color>,
    opacity: Option<f32>,
}

impl ButtonSection {
    fn resolve(self, fallback: ButtonColors) -> ButtonColors {
        ButtonColors {
            background: self.background.unwrap_or(fallback.background),
            foreground: self.foreground.unwrap_or(fallback.foreground),
        }
    }
}

impl ThemeFile {
    fn resolve(self) -> AlertTheme {
        let defaults = AlertTheme::default();
        AlertTheme {
            confirm: self.confirm.resolve(defaults.confirm),
            cancel: self.cancel.resolve(defaults.cancel),
            shadow: ShadowStyle {
                color: self.shadow.color.unwrap_or(defaults.shadow.color),
                radius: self.shadow.radius.unwrap_or(defaults.shadow.radius),
                offset_x: self.shadow.offset_x.unwrap_or(defaults.shadow.offset_x),
                offset_y: self.shadow.offset_y.unwrap_or(defaults.shadow.offset_y),
            },
            backdrop: BackdropStyle {
                color: self.backdrop.color.unwrap_or(defaults.backdrop.color),
                opacity: self.backdrop.opacity.unwrap_or(defaults.backdrop.opacity),
            },
        }
    }
}
