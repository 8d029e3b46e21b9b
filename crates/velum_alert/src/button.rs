//! Alert button styling

use velum_core::Color;

use crate::config::ButtonColors;

/// Corner radius of alert buttons
pub const BUTTON_CORNER_RADIUS: f32 = 8.0;
/// Background alpha multiplier while pressed
pub const PRESSED_OPACITY: f32 = 0.6;
/// Scale while pressed
pub const PRESSED_SCALE: f32 = 0.95;

/// Which action a button triggers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertButtonRole {
    Cancel,
    Confirm,
}

/// Static style of an alert button
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlertButtonStyle {
    pub background: Color,
    pub foreground: Color,
    pub corner_radius: f32,
}

/// Resolved look of a button for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonAppearance {
    pub background: Color,
    pub foreground: Color,
    pub corner_radius: f32,
    pub scale: f32,
}

impl AlertButtonStyle {
    pub fn new(colors: ButtonColors) -> Self {
        Self {
            background: colors.background,
            foreground: colors.foreground,
            corner_radius: BUTTON_CORNER_RADIUS,
        }
    }

    /// Dims and shrinks the button while it is held down
    pub fn appearance(&self, pressed: bool) -> ButtonAppearance {
        let (opacity, scale) = if pressed {
            (PRESSED_OPACITY, PRESSED_SCALE)
        } else {
            (1.0, 1.0)
        };
        ButtonAppearance {
            background: self.background.opacity(opacity),
            foreground: self.foreground,
            corner_radius: self.corner_radius,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_appearance_is_unchanged() {
        let style = AlertButtonStyle::new(ButtonColors::confirm_default());
        let look = style.appearance(false);
        assert_eq!(look.background, style.background);
        assert_eq!(look.scale, 1.0);
        assert_eq!(look.corner_radius, 8.0);
    }

    #[test]
    fn test_pressed_appearance_dims_and_shrinks() {
        let style = AlertButtonStyle::new(ButtonColors::cancel_default());
        let look = style.appearance(true);
        assert!((look.background.a - style.background.a * 0.6).abs() < 1e-6);
        assert_eq!(look.foreground, style.foreground);
        assert_eq!(look.scale, 0.95);
    }
}
