//! Alert layout and hit testing
//!
//! [`AlertLayout::compute`] turns an [`AlertConfig`] into absolute rectangles
//! for a viewport. The layout ignores the animated scale: renderers apply
//! [`AlertVisualState::scale`](crate::AlertVisualState) around the card
//! center, and hit testing uses the unscaled rectangles.
//!
//! ```text
//! ┌──────────── card (max 300 wide) ────────────┐
//! │                  [ image ]                  │  80×80, optional
//! │                                             │  20
//! │                 Bold title                  │  optional
//! │                                             │  6
//! │               Message text…                 │
//! │                                             │  20
//! │   [   Cancel   ]        [   Confirm   ]     │  cancel only with a label
//! └─────────────────────────────────────────────┘
//! ```

use smallvec::SmallVec;
use velum_core::{Color, Point, Rect, Shadow, Size};

use crate::button::{AlertButtonRole, AlertButtonStyle};
use crate::config::AlertConfig;

pub const CARD_MAX_WIDTH: f32 = 300.0;
pub const CARD_PADDING: f32 = 16.0;
pub const CARD_SPACING: f32 = 20.0;
pub const CARD_CORNER_RADIUS: f32 = 15.0;
pub const IMAGE_SIZE: f32 = 80.0;
pub const TEXT_SPACING: f32 = 6.0;
pub const TEXT_INSET: f32 = 20.0;
pub const BUTTON_ROW_INSET: f32 = 20.0;
pub const BUTTON_SPACING: f32 = 16.0;
pub const BUTTON_PADDING: f32 = 16.0;

// =============================================================================
// Text measurement
// =============================================================================

/// Font weight requested for a text block
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextWeight {
    #[default]
    Regular,
    Bold,
}

/// Measures wrapped text, supplied by the host's text engine
pub trait TextMeasure {
    /// Size of `text` wrapped to `max_width`
    fn measure(&self, text: &str, max_width: f32, weight: TextWeight) -> Size;
}

/// Fixed-advance text metrics with greedy word wrapping
///
/// Good enough for tests and headless hosts; real hosts should measure with
/// their font stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMetrics {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 20.0,
        }
    }
}

impl TextMeasure for FixedMetrics {
    fn measure(&self, text: &str, max_width: f32, _weight: TextWeight) -> Size {
        let max_chars = ((max_width / self.char_width).floor() as usize).max(1);
        let mut lines = 0usize;
        let mut widest = 0usize;

        for paragraph in text.split('\n') {
            let mut current = 0usize;
            for word in paragraph.split_whitespace() {
                let len = word.chars().count();
                let needed = if current == 0 { len } else { current + 1 + len };
                if current > 0 && needed > max_chars {
                    widest = widest.max(current);
                    lines += 1;
                    current = len;
                } else {
                    current = needed;
                }
            }
            // Overlong words are clipped to the line rather than broken
            widest = widest.max(current.min(max_chars));
            lines += 1;
        }

        Size::new(
            widest as f32 * self.char_width,
            lines as f32 * self.line_height,
        )
    }
}

// =============================================================================
// Layout
// =============================================================================

/// A positioned run of text
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub text: String,
    /// Line box; text is centered horizontally inside it
    pub rect: Rect,
    pub weight: TextWeight,
}

/// A positioned button
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonLayout {
    pub role: AlertButtonRole,
    pub label: String,
    pub rect: Rect,
    pub style: AlertButtonStyle,
}

/// What a point on screen lands on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertHit {
    Button(AlertButtonRole),
    /// Card body outside any button
    Card,
    /// Dimmed area around the card
    Backdrop,
}

/// Absolute geometry of one alert in a viewport
#[derive(Clone, Debug, PartialEq)]
pub struct AlertLayout {
    pub viewport: Rect,
    pub backdrop_color: Color,
    pub card: Rect,
    pub card_corner_radius: f32,
    pub card_background: Color,
    pub card_shadow: Shadow,
    pub image: Option<Rect>,
    pub title: Option<TextBlock>,
    pub message: TextBlock,
    /// Cancel first (when present), then confirm
    pub buttons: SmallVec<[ButtonLayout; 2]>,
}

impl AlertLayout {
    pub fn compute(config: &AlertConfig, viewport: Rect, measurer: &impl TextMeasure) -> Self {
        let card_width = CARD_MAX_WIDTH.min(viewport.width());
        let content_width = (card_width - 2.0 * CARD_PADDING).max(0.0);
        let text_width = (content_width - 2.0 * TEXT_INSET).max(0.0);
        let row_width = (content_width - 2.0 * BUTTON_ROW_INSET).max(0.0);

        // Lay out relative to the card origin, then translate
        let mut y = CARD_PADDING;

        let image = config.image().map(|_| {
            let rect = Rect::new(
                (card_width - IMAGE_SIZE) / 2.0,
                y,
                IMAGE_SIZE,
                IMAGE_SIZE,
            );
            y += IMAGE_SIZE + CARD_SPACING;
            rect
        });

        let text_x = CARD_PADDING + TEXT_INSET;
        let title = config.title().map(|title| {
            let size = measurer.measure(title, text_width, TextWeight::Bold);
            let block = TextBlock {
                text: title.to_string(),
                rect: Rect::new(text_x, y, text_width, size.height),
                weight: TextWeight::Bold,
            };
            y += size.height + TEXT_SPACING;
            block
        });

        let message_size = measurer.measure(config.message(), text_width, TextWeight::Regular);
        let message = TextBlock {
            text: config.message().to_string(),
            rect: Rect::new(text_x, y, text_width, message_size.height),
            weight: TextWeight::Regular,
        };
        y += message_size.height + CARD_SPACING;

        let mut specs: SmallVec<[(AlertButtonRole, &str, AlertButtonStyle); 2]> = SmallVec::new();
        if let Some(cancel) = config.cancel_text() {
            specs.push((
                AlertButtonRole::Cancel,
                cancel,
                AlertButtonStyle::new(config.cancel_colors()),
            ));
        }
        specs.push((
            AlertButtonRole::Confirm,
            config.confirm_text(),
            AlertButtonStyle::new(config.confirm_colors()),
        ));

        let count = specs.len() as f32;
        let button_width = ((row_width - BUTTON_SPACING * (count - 1.0)) / count).max(0.0);
        let button_height = specs
            .iter()
            .map(|(_, label, _)| measurer.measure(label, button_width, TextWeight::Regular).height)
            .fold(0.0f32, f32::max)
            + 2.0 * BUTTON_PADDING;

        let mut x = CARD_PADDING + BUTTON_ROW_INSET;
        let buttons = specs
            .into_iter()
            .map(|(role, label, style)| {
                let rect = Rect::new(x, y, button_width, button_height);
                x += button_width + BUTTON_SPACING;
                ButtonLayout {
                    role,
                    label: label.to_string(),
                    rect,
                    style,
                }
            })
            .collect::<SmallVec<[ButtonLayout; 2]>>();
        y += button_height + CARD_PADDING;

        let card = Rect::from_center(viewport.center(), Size::new(card_width, y));
        let (dx, dy) = (card.x(), card.y());

        AlertLayout {
            viewport,
            backdrop_color: config.backdrop().effective_color(),
            card,
            card_corner_radius: CARD_CORNER_RADIUS,
            card_background: Color::WHITE,
            card_shadow: config.shadow().to_shadow(),
            image: image.map(|r| r.offset(dx, dy)),
            title: title.map(|t| TextBlock {
                rect: t.rect.offset(dx, dy),
                ..t
            }),
            message: TextBlock {
                rect: message.rect.offset(dx, dy),
                ..message
            },
            buttons: buttons
                .into_iter()
                .map(|b| ButtonLayout {
                    rect: b.rect.offset(dx, dy),
                    ..b
                })
                .collect(),
        }
    }

    /// Button with the given role, if shown
    pub fn button(&self, role: AlertButtonRole) -> Option<&ButtonLayout> {
        self.buttons.iter().find(|b| b.role == role)
    }

    /// Card rectangle after applying the animated scale around its center
    pub fn scaled_card(&self, scale: f32) -> Rect {
        let size = Size::new(self.card.width() * scale, self.card.height() * scale);
        Rect::from_center(self.card.center(), size)
    }

    /// Resolve what a pointer at `point` lands on
    pub fn hit_test(&self, point: Point) -> Option<AlertHit> {
        if let Some(button) = self.buttons.iter().find(|b| b.rect.contains(point)) {
            return Some(AlertHit::Button(button.role));
        }
        if self.card.contains(point) {
            return Some(AlertHit::Card);
        }
        if self.viewport.contains(point) {
            return Some(AlertHit::Backdrop);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{alert, AlertImage};

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);

    #[test]
    fn test_fixed_metrics_wraps_words() {
        let m = FixedMetrics::default();
        // 12 chars per line at 96px
        let size = m.measure("hello world again", 96.0, TextWeight::Regular);
        assert_eq!(size, Size::new(88.0, 40.0));

        let single = m.measure("ok", 80.0, TextWeight::Regular);
        assert_eq!(single, Size::new(16.0, 20.0));
    }

    #[test]
    fn test_fixed_metrics_empty_text_is_one_line() {
        let m = FixedMetrics::default();
        assert_eq!(
            m.measure("", 100.0, TextWeight::Regular),
            Size::new(0.0, 20.0)
        );
    }

    #[test]
    fn test_confirm_only_layout() {
        let config = alert("Saved", "OK", || {}).build();
        let layout = AlertLayout::compute(&config, VIEWPORT, &FixedMetrics::default());

        assert_eq!(layout.buttons.len(), 1);
        assert_eq!(layout.buttons[0].role, AlertButtonRole::Confirm);
        assert!(layout.button(AlertButtonRole::Cancel).is_none());
        assert!(layout.image.is_none());
        assert!(layout.title.is_none());

        // Single button spans the row
        assert_eq!(layout.buttons[0].rect.width(), 300.0 - 32.0 - 40.0);
    }

    #[test]
    fn test_cancel_button_requires_label() {
        let with_callback = alert("m", "ok", || {}).on_cancel(|| {}).build();
        let layout = AlertLayout::compute(&with_callback, VIEWPORT, &FixedMetrics::default());
        assert!(layout.button(AlertButtonRole::Cancel).is_none());

        let with_label = alert("m", "ok", || {}).cancel_text("No").build();
        let layout = AlertLayout::compute(&with_label, VIEWPORT, &FixedMetrics::default());
        assert_eq!(layout.buttons.len(), 2);
        assert_eq!(layout.buttons[0].role, AlertButtonRole::Cancel);
        assert_eq!(layout.buttons[1].role, AlertButtonRole::Confirm);
        assert_eq!(layout.buttons[0].rect.width(), layout.buttons[1].rect.width());
        assert!(layout.buttons[0].rect.max_x() < layout.buttons[1].rect.x());
    }

    #[test]
    fn test_full_layout_is_centered_and_stacked() {
        let config = alert("This is a customizable alert.", "Yes", || {})
            .image(AlertImage::named("exclamationmark.triangle.fill"))
            .title("Heads up")
            .cancel_text("No")
            .build();
        let layout = AlertLayout::compute(&config, VIEWPORT, &FixedMetrics::default());

        assert_eq!(layout.card.width(), 300.0);
        assert_eq!(layout.card.center(), VIEWPORT.center());

        let image = layout.image.unwrap();
        assert_eq!(image.size, Size::new(80.0, 80.0));
        assert_eq!(image.mid_x(), layout.card.mid_x());
        assert_eq!(image.y(), layout.card.y() + CARD_PADDING);

        let title = layout.title.as_ref().unwrap();
        assert_eq!(title.weight, TextWeight::Bold);
        assert_eq!(title.rect.y(), image.max_y() + CARD_SPACING);
        assert_eq!(layout.message.rect.y(), title.rect.max_y() + TEXT_SPACING);

        let button = &layout.buttons[0];
        assert_eq!(button.rect.y(), layout.message.rect.max_y() + CARD_SPACING);
        assert_eq!(layout.card.max_y(), button.rect.max_y() + CARD_PADDING);
    }

    #[test]
    fn test_narrow_viewport_shrinks_card() {
        let config = alert("m", "ok", || {}).build();
        let viewport = Rect::new(0.0, 0.0, 200.0, 400.0);
        let layout = AlertLayout::compute(&config, viewport, &FixedMetrics::default());
        assert_eq!(layout.card.width(), 200.0);
    }

    #[test]
    fn test_backdrop_color_applies_opacity() {
        let config = alert("m", "ok", || {})
            .backdrop_color(Color::rgb(0.0, 0.0, 1.0))
            .backdrop_opacity(0.5)
            .build();
        let layout = AlertLayout::compute(&config, VIEWPORT, &FixedMetrics::default());
        assert_eq!(layout.backdrop_color, Color::rgba(0.0, 0.0, 1.0, 0.5));
    }

    #[test]
    fn test_hit_test_regions() {
        let config = alert("m", "ok", || {}).cancel_text("No").build();
        let layout = AlertLayout::compute(&config, VIEWPORT, &FixedMetrics::default());

        let cancel = layout.button(AlertButtonRole::Cancel).unwrap().rect.center();
        let confirm = layout.button(AlertButtonRole::Confirm).unwrap().rect.center();
        assert_eq!(
            layout.hit_test(cancel),
            Some(AlertHit::Button(AlertButtonRole::Cancel))
        );
        assert_eq!(
            layout.hit_test(confirm),
            Some(AlertHit::Button(AlertButtonRole::Confirm))
        );
        assert_eq!(layout.hit_test(layout.message.rect.center()), Some(AlertHit::Card));
        assert_eq!(layout.hit_test(Point::new(5.0, 5.0)), Some(AlertHit::Backdrop));
        assert_eq!(layout.hit_test(Point::new(-5.0, 5.0)), None);
    }

    #[test]
    fn test_scaled_card_keeps_center() {
        let config = alert("m", "ok", || {}).build();
        let layout = AlertLayout::compute(&config, VIEWPORT, &FixedMetrics::default());
        let scaled = layout.scaled_card(0.7);
        assert_eq!(scaled.center(), layout.card.center());
        assert!((scaled.width() - 210.0).abs() < 1e-4);
    }
}
