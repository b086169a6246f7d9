//! Border progress widget
//!
//! Animated outline with the `"value / max"` label centered on top.

use iced::widget::{center, stack, text};
use iced::{Color, Element};

use crate::progress;
use crate::ui::primitives::{BorderProgress, view_border_progress};
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Fixed dimensions of a border indicator
///
/// The default radius is clamped to half the inner height when the outline is
/// built, which makes a pill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub stroke_width: f32,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            width: 88.0,
            height: 34.0,
            corner_radius: 100.0,
            stroke_width: 2.0,
        }
    }
}

/// Create a border progress element
///
/// # Arguments
/// * `value` - Animated value (already interpolated by the caller)
/// * `max` - Upper bound used for the ratio and the label
/// * `color` - Highlight color
/// * `style` - Size and stroke
pub fn view<'a, Message: 'a>(
    value: f32,
    max: f32,
    color: Color,
    style: BorderStyle,
) -> Element<'a, Message> {
    let border = BorderProgress::new(value, max, color)
        .corner_radius(style.corner_radius)
        .stroke_width(style.stroke_width);

    let label = center(
        text(progress::border_label(value, max))
            .size(11)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .style(theme::primary_text),
    )
    .width(style.width)
    .height(style.height);

    stack![
        view_border_progress(border, style.width, style.height),
        label
    ]
    .into()
}
