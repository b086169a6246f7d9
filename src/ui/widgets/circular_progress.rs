//! Circular calorie widget
//!
//! Ring with the current numeral in its center, title and value on the side.

use iced::widget::{center, column, row, stack, text};
use iced::{Alignment, Element};

use crate::progress::{self, ProgressInput};
use crate::ui::primitives::{ProgressRing, view_progress_ring_styled};
use crate::ui::theme::{self, BOLD_WEIGHT};

const RING_SIZE: f32 = 130.0;

/// Create the calories ring element
pub fn view<'a, Message: 'a>(current: i64, max: i64) -> Element<'a, Message> {
    let input = ProgressInput::from_counts(current, max);

    let ring = view_progress_ring_styled(
        ProgressRing::new(input.ratio())
            .stroke_width(14.0)
            .progress_color(theme::ACCENT_CYAN),
        RING_SIZE,
    );

    let numeral = center(
        text(current.to_string())
            .size(32)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .style(theme::primary_text),
    )
    .width(RING_SIZE)
    .height(RING_SIZE);

    let labels = column![
        text("Calories").size(18).style(theme::primary_text),
        text(progress::calories_label(current, max))
            .size(14)
            .style(theme::muted_text),
    ]
    .spacing(4);

    row![stack![ring, numeral], labels]
        .spacing(24)
        .align_y(Alignment::Center)
        .into()
}
