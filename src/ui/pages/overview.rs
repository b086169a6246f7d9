//! Overview page
//!
//! Two nutrient bars, a row of border indicators and the calorie ring in one
//! vertically scrollable column.

use iced::widget::{Row, column, container, scrollable, text};
use iced::{Color, Element, Fill, Padding};

use crate::ui::theme;
use crate::ui::widgets::{self, BorderStyle};

/// One horizontal bar entry
#[derive(Debug, Clone)]
pub struct BarEntry {
    pub label: String,
    pub current: i64,
    pub max: i64,
    pub color: Color,
}

/// One border indicator, already sampled for this frame
#[derive(Debug, Clone, Copy)]
pub struct BorderEntry {
    pub value: f32,
    pub max: f32,
    pub color: Color,
}

/// Build the overview page
///
/// `borders` are copied into the canvas programs, so only the bar labels
/// borrow from the caller.
pub fn view<'a, Message: 'a>(
    bars: &'a [BarEntry],
    borders: &[BorderEntry],
    border_style: BorderStyle,
    calories: (i64, i64),
) -> Element<'a, Message> {
    let bars = bars.iter().fold(column![].spacing(20), |col, bar| {
        col.push(widgets::horizontal_progress(
            &bar.label,
            bar.current,
            bar.max,
            bar.color,
        ))
    });

    let borders = borders.iter().fold(Row::new().spacing(10), |row, entry| {
        row.push(widgets::border_progress(
            entry.value,
            entry.max,
            entry.color,
            border_style,
        ))
    });

    let (calories, calories_max) = calories;

    let content = column![
        section("Macros", bars.into()),
        section("Goals", borders.into()),
        section("Energy", widgets::circular_progress(calories, calories_max)),
    ]
    .spacing(24)
    .padding(Padding::new(24.0))
    .max_width(720.0);

    container(
        scrollable(container(content).center_x(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::dark_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

fn section<'a, Message: 'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![text(title).size(20).style(theme::primary_text), body].spacing(16),
    )
    .padding(20)
    .width(Fill)
    .style(theme::card_container)
    .into()
}
