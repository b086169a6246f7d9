//! Horizontal progress bar primitive
//!
//! Full-width rounded track with a fill whose width is `ratio × width`.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::ui::theme;

/// Track and fill rectangles of a bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub track: Rectangle,
    pub fill: Rectangle,
    pub corner_radius: f32,
}

impl BarLayout {
    pub fn compute(size: Size, ratio: f32) -> Self {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        let track = Rectangle::new(Point::ORIGIN, size);
        let fill = Rectangle::new(Point::ORIGIN, Size::new(size.width * ratio, size.height));

        Self {
            track,
            fill,
            corner_radius: size.height / 2.0,
        }
    }

    pub fn has_fill(&self) -> bool {
        self.fill.width > 0.0
    }
}

/// Horizontal bar configuration
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    /// Progress value (0.0 - 1.0)
    pub progress: f32,
    pub track_color: Color,
    pub fill_color: Color,
}

impl ProgressBar {
    pub fn new(progress: f32, fill_color: Color) -> Self {
        Self {
            progress,
            track_color: theme::TRACK,
            fill_color,
        }
    }
}

impl<Message> Program<Message> for ProgressBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let layout = BarLayout::compute(bounds.size(), self.progress);

        let track = Path::rounded_rectangle(
            layout.track.position(),
            layout.track.size(),
            layout.corner_radius.into(),
        );
        frame.fill(&track, self.track_color);

        if layout.has_fill() {
            // A fill narrower than the caps would bulge out of the track
            let radius = layout.corner_radius.min(layout.fill.width / 2.0);
            let fill = Path::rounded_rectangle(
                layout.fill.position(),
                layout.fill.size(),
                radius.into(),
            );
            frame.fill(&fill, self.fill_color);
        }

        vec![frame.into_geometry()]
    }
}

/// Create a bar element filling the available width
pub fn view_progress_bar<'a, Message: 'a>(bar: ProgressBar, height: f32) -> Element<'a, Message> {
    Canvas::new(bar).width(Length::Fill).height(height).into()
}
