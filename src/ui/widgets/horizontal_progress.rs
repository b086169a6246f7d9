//! Horizontal progress widget
//!
//! Label, clamped value line and a bar underneath.

use iced::widget::{Space, column, row, text};
use iced::{Alignment, Color, Element, Fill};

use crate::progress::{self, ProgressInput};
use crate::ui::primitives::{ProgressBar, view_progress_bar};
use crate::ui::theme;

const BAR_HEIGHT: f32 = 12.0;

/// Create a horizontal progress element
///
/// # Arguments
/// * `label` - Title shown above the bar
/// * `current` - Current amount; values above `max` are shown as `max`
/// * `max` - Upper bound; `max <= 0` renders an empty bar
/// * `color` - Fill color
pub fn view<'a, Message: 'a>(
    label: &'a str,
    current: i64,
    max: i64,
    color: Color,
) -> Element<'a, Message> {
    let input = ProgressInput::from_counts(current, max);
    let clamped = input.clamped() as i64;

    let header = row![
        text(label).size(16).style(theme::primary_text),
        Space::new().width(Fill),
        text(progress::bar_label(clamped, max))
            .size(14)
            .style(theme::muted_text),
    ]
    .align_y(Alignment::Center);

    column![
        header,
        view_progress_bar(ProgressBar::new(input.ratio(), color), BAR_HEIGHT),
    ]
    .spacing(8)
    .width(Fill)
    .into()
}
