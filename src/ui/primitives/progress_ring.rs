//! Circular progress ring primitive
//!
//! A circular progress indicator using iced's Canvas.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! The arc geometry lives in [`RingLayout`] so it can be checked without a
//! renderer.

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, LineCap, Path, Program, Stroke};
use iced::{Color, Element, Point, Radians, Renderer, Size, Theme, mouse};

use crate::ui::theme;

/// Resolved geometry of a ring inside a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub center: Point,
    pub radius: f32,
    /// Arc start, 12 o'clock
    pub start_angle: f32,
    /// Clockwise sweep in radians, `ratio × 2π`
    pub sweep: f32,
}

impl RingLayout {
    pub fn compute(size: Size, stroke_width: f32, ratio: f32) -> Self {
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let radius = ((size.width.min(size.height) / 2.0) - (stroke_width / 2.0) - 1.0).max(0.0);
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };

        Self {
            center,
            radius,
            start_angle: -FRAC_PI_2,
            sweep: ratio * TAU,
        }
    }

    #[cfg(test)]
    pub fn sweep_degrees(&self) -> f32 {
        self.sweep.to_degrees()
    }
}

/// Progress ring configuration
#[derive(Debug, Clone, Copy)]
pub struct ProgressRing {
    /// Progress value (0.0 - 1.0)
    pub progress: f32,
    /// Ring stroke width
    pub stroke_width: f32,
    /// Background ring color
    pub background_color: Color,
    /// Progress ring color
    pub progress_color: Color,
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self {
            progress: 0.0,
            stroke_width: 14.0,
            background_color: theme::TRACK,
            progress_color: theme::ACCENT_CYAN,
        }
    }
}

impl ProgressRing {
    pub fn new(progress: f32) -> Self {
        Self {
            progress: if progress.is_nan() {
                0.0
            } else {
                progress.clamp(0.0, 1.0)
            },
            ..Default::default()
        }
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn progress_color(mut self, color: Color) -> Self {
        self.progress_color = color;
        self
    }

    /// Full ring underneath, round caps
    fn track_stroke(&self) -> Stroke<'static> {
        Stroke::default()
            .with_width(self.stroke_width)
            .with_color(self.background_color)
            .with_line_cap(LineCap::Round)
    }

    /// Progress arc, square caps so the ends sit flush with the sweep
    fn arc_stroke(&self) -> Stroke<'static> {
        Stroke::default()
            .with_width(self.stroke_width)
            .with_color(self.progress_color)
            .with_line_cap(LineCap::Square)
    }
}

impl<Message> Program<Message> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let layout = RingLayout::compute(bounds.size(), self.stroke_width, self.progress);

        // Background circle
        let background_circle = Path::circle(layout.center, layout.radius);
        frame.stroke(&background_circle, self.track_stroke());

        // Progress arc
        if layout.sweep > 0.0 {
            let progress_arc = Path::new(|builder| {
                builder.arc(iced::widget::canvas::path::Arc {
                    center: layout.center,
                    radius: layout.radius,
                    start_angle: Radians(layout.start_angle),
                    end_angle: Radians(layout.start_angle + layout.sweep),
                });
            });

            frame.stroke(&progress_arc, self.arc_stroke());
        }

        vec![frame.into_geometry()]
    }
}

/// Create a customized progress ring element
pub fn view_progress_ring_styled<'a, Message: 'a>(
    ring: ProgressRing,
    size: f32,
) -> Element<'a, Message> {
    Canvas::new(ring).width(size).height(size).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ratio;

    #[test]
    fn test_sweep_follows_ratio() {
        let layout = RingLayout::compute(Size::new(160.0, 160.0), 10.0, ratio(40.0, 100.0));
        assert!((layout.sweep_degrees() - 144.0).abs() < 1e-3);
        assert_eq!(layout.start_angle, -FRAC_PI_2);
    }

    #[test]
    fn test_full_and_empty_sweep() {
        let size = Size::new(100.0, 100.0);
        assert_eq!(RingLayout::compute(size, 8.0, 0.0).sweep, 0.0);
        assert!((RingLayout::compute(size, 8.0, 1.0).sweep_degrees() - 360.0).abs() < 1e-3);
        assert!((RingLayout::compute(size, 8.0, 4.0).sweep_degrees() - 360.0).abs() < 1e-3);
    }

    #[test]
    fn test_radius_fits_shorter_side() {
        let layout = RingLayout::compute(Size::new(200.0, 120.0), 10.0, 0.5);
        assert_eq!(layout.center, Point::new(100.0, 60.0));
        assert_eq!(layout.radius, 54.0);
        assert_eq!(RingLayout::compute(Size::new(4.0, 4.0), 10.0, 0.5).radius, 0.0);
    }

    #[test]
    fn test_arc_caps_are_square_over_round_track() {
        let ring = ProgressRing::new(0.4);
        assert!(matches!(ring.track_stroke().line_cap, LineCap::Round));
        assert!(matches!(ring.arc_stroke().line_cap, LineCap::Square));
        assert_eq!(ring.arc_stroke().width, 14.0);
    }

    #[test]
    fn test_ring_clamps_progress() {
        assert_eq!(ProgressRing::new(1.7).progress, 1.0);
        assert_eq!(ProgressRing::new(-0.2).progress, 0.0);
        assert_eq!(ProgressRing::new(f32::NAN).progress, 0.0);
    }
}
