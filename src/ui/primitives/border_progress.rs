//! Border progress primitive
//!
//! Strokes a rounded-rectangle outline and highlights the last `ratio`
//! fraction of it. The default corner radius is larger than any box it is
//! drawn in, so the outline clamps to a pill. The outline is memoized per widget in [`BorderState`]; the
//! neutral base stroke is kept in a canvas cache and redrawn only when the
//! outline changes.

use iced::widget::Canvas;
use iced::widget::canvas::{self, Frame, Geometry, LineCap, LineJoin, Program, Stroke};
use iced::{Color, Element, Length, Rectangle, Renderer, Size, Theme, mouse};
use std::cell::Cell;

use super::outline::{OutlineCache, OutlineKey, segments_to_path};
use crate::progress;
use crate::ui::theme;

/// Per-widget canvas state
#[derive(Default)]
pub struct BorderState {
    outline: OutlineCache,
    base: canvas::Cache,
    base_key: Cell<Option<OutlineKey>>,
}

impl BorderState {
    /// Drop the cached base stroke when the outline key changed
    ///
    /// Returns `true` when the cache was cleared.
    fn invalidate_base(&self, key: OutlineKey) -> bool {
        if self.base_key.get() == Some(key) {
            return false;
        }
        self.base.clear();
        self.base_key.set(Some(key));
        true
    }
}

/// Border progress configuration
#[derive(Debug, Clone, Copy)]
pub struct BorderProgress {
    /// Animated value, not yet divided by `max`
    pub value: f32,
    pub max: f32,
    pub corner_radius: f32,
    pub stroke_width: f32,
    pub track_color: Color,
    pub progress_color: Color,
}

impl BorderProgress {
    pub fn new(value: f32, max: f32, progress_color: Color) -> Self {
        Self {
            value,
            max,
            corner_radius: 100.0,
            stroke_width: 2.0,
            track_color: theme::TRACK,
            progress_color,
        }
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn ratio(&self) -> f32 {
        progress::ratio(self.value, self.max)
    }

    fn outline_key(&self, size: Size) -> OutlineKey {
        OutlineKey {
            size,
            corner_radius: self.corner_radius,
            inset: self.stroke_width / 2.0,
        }
    }

    fn stroke(&self, color: Color) -> Stroke<'static> {
        Stroke::default()
            .with_width(self.stroke_width)
            .with_color(color)
            .with_line_cap(LineCap::Round)
            .with_line_join(LineJoin::Round)
    }
}

impl<Message> Program<Message> for BorderProgress {
    type State = BorderState;

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let key = self.outline_key(bounds.size());
        let outline = state.outline.get(key);

        if state.invalidate_base(key) {
            tracing::trace!("Border base stroke invalidated");
        }

        let base = state.base.draw(renderer, bounds.size(), |frame| {
            if outline.length() <= 0.0 {
                return;
            }
            frame.stroke(&outline.to_path(), self.stroke(self.track_color));
        });

        let tail = outline.tail(self.ratio());
        if tail.is_empty() {
            return vec![base];
        }

        let mut frame = Frame::new(renderer, bounds.size());
        frame.stroke(&segments_to_path(&tail), self.stroke(self.progress_color));

        vec![base, frame.into_geometry()]
    }
}

/// Create a border progress canvas of a fixed size
pub fn view_border_progress<'a, Message: 'a>(
    border: BorderProgress,
    width: impl Into<Length>,
    height: impl Into<Length>,
) -> Element<'a, Message> {
    Canvas::new(border).width(width).height(height).into()
}
