//! Theme for the progress gallery
//! Fixed palette with a dark and a light variant

use iced::color;
use iced::widget::{container, scrollable, text};
use iced::{Background, Border, Color, Shadow, Theme};

// ============================================================================
// Color Palette
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0f0f12);
    pub const CARD: Color = color!(0x1b1b21);
    pub const BORDER: Color = color!(0x2c2c34);
    pub const TEXT_MUTED: Color = color!(0x8a8a94);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf4f4f6);
    pub const CARD: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xdcdce2);
    pub const TEXT_MUTED: Color = color!(0x6e6e78);
    pub const TEXT_PRIMARY: Color = color!(0x18181c);
}

/// Neutral track drawn beneath every indicator (same for both modes)
pub const TRACK: Color = Color::from_rgba(0.55, 0.55, 0.6, 0.25);

/// First protein bar, first border
pub const ACCENT_BLUE: Color = color!(0x3d8bfd);
/// Second protein bar and the calories ring
pub const ACCENT_CYAN: Color = color!(0x1cc7d8);
/// Border indicators
pub const ACCENT_RED: Color = color!(0xf0475b);
pub const ACCENT_YELLOW: Color = color!(0xf5c518);

/// Heavy weight for numerals
pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get card surface color based on theme
pub fn card(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::CARD
    } else {
        light::CARD
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Screen background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Rounded card holding one indicator
pub fn card_container(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

// ============================================================================
// Text Styles
// ============================================================================

pub fn primary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(text_primary(theme)),
    }
}

pub fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(text_muted(theme)),
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for main content
pub fn dark_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(card(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
