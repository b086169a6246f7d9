//! Rounded-rectangle outline with arc-length measurement
//!
//! The outline is kept as a list of straight edges and circular arcs so its
//! length is exact and any sub-range of it can be cut out without
//! flattening. Conversion to an iced [`Path`] only happens at draw time.

use std::cell::RefCell;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::rc::Rc;

use iced::widget::canvas::Path;
use iced::{Point, Size, Vector};

/// One piece of an outline, in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line {
        from: Point,
        to: Point,
    },
    /// Circular arc; a positive sweep runs clockwise on screen
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep: f32,
    },
}

impl Segment {
    pub fn length(&self) -> f32 {
        match *self {
            Segment::Line { from, to } => from.distance(to),
            Segment::Arc { radius, sweep, .. } => radius * sweep.abs(),
        }
    }

    pub fn start(&self) -> Point {
        match *self {
            Segment::Line { from, .. } => from,
            Segment::Arc {
                center,
                radius,
                start_angle,
                ..
            } => point_on_circle(center, radius, start_angle),
        }
    }

    #[cfg(test)]
    pub fn end(&self) -> Point {
        match *self {
            Segment::Line { to, .. } => to,
            Segment::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => point_on_circle(center, radius, start_angle + sweep),
        }
    }

    /// Sub-segment between distances `from` and `to` along this segment
    fn slice(&self, from: f32, to: f32) -> Segment {
        let length = self.length();
        if length <= 0.0 {
            return *self;
        }
        let a = (from / length).clamp(0.0, 1.0);
        let b = (to / length).clamp(0.0, 1.0);

        match *self {
            Segment::Line { from: p, to: q } => Segment::Line {
                from: lerp(p, q, a),
                to: lerp(p, q, b),
            },
            Segment::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => Segment::Arc {
                center,
                radius,
                start_angle: start_angle + sweep * a,
                sweep: sweep * (b - a),
            },
        }
    }
}

fn lerp(a: Point, b: Point, t: f32) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    center + Vector::new(radius * angle.cos(), radius * angle.sin())
}

/// Total length of a run of segments
pub fn segments_length(segments: &[Segment]) -> f32 {
    segments.iter().map(Segment::length).sum()
}

/// Memoization key of an [`Outline`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineKey {
    pub size: Size,
    pub corner_radius: f32,
    /// Distance the contour is pulled inside the bounds (half a stroke)
    pub inset: f32,
}

/// Closed rounded-rectangle contour
///
/// Starts at the middle of the top edge and runs clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    key: OutlineKey,
    segments: Vec<Segment>,
    length: f32,
}

impl Outline {
    /// Build the outline for `key`
    ///
    /// The corner radius is clamped to half the shorter side, so a large
    /// radius yields a pill. Degenerate sizes give an empty outline.
    pub fn rounded_rect(key: OutlineKey) -> Self {
        let inset = key.inset.max(0.0);
        let width = key.size.width - inset * 2.0;
        let height = key.size.height - inset * 2.0;

        if !(width > 0.0 && height > 0.0) {
            return Self {
                key,
                segments: Vec::new(),
                length: 0.0,
            };
        }

        let r = key.corner_radius.max(0.0).min(width.min(height) / 2.0);
        let (x0, y0) = (inset, inset);
        let (x1, y1) = (x0 + width, y0 + height);
        let top_mid = Point::new(x0 + width / 2.0, y0);

        let candidates = [
            line(top_mid, Point::new(x1 - r, y0)),
            arc(Point::new(x1 - r, y0 + r), r, -FRAC_PI_2),
            line(Point::new(x1, y0 + r), Point::new(x1, y1 - r)),
            arc(Point::new(x1 - r, y1 - r), r, 0.0),
            line(Point::new(x1 - r, y1), Point::new(x0 + r, y1)),
            arc(Point::new(x0 + r, y1 - r), r, FRAC_PI_2),
            line(Point::new(x0, y1 - r), Point::new(x0, y0 + r)),
            arc(Point::new(x0 + r, y0 + r), r, PI),
            line(Point::new(x0 + r, y0), top_mid),
        ];

        let segments: Vec<Segment> = candidates
            .into_iter()
            .filter(|segment| segment.length() > f32::EPSILON)
            .collect();
        let length = segments_length(&segments);

        Self {
            key,
            segments,
            length,
        }
    }

    pub fn key(&self) -> OutlineKey {
        self.key
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total perimeter length
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Segments covering arc lengths `[from, to]` of the outline
    pub fn extract(&self, from: f32, to: f32) -> Vec<Segment> {
        let from = from.clamp(0.0, self.length);
        let to = to.clamp(0.0, self.length);
        if to - from <= 0.0 {
            return Vec::new();
        }

        let mut result = Vec::new();
        let mut offset = 0.0;

        for segment in &self.segments {
            let length = segment.length();
            let seg_start = offset;
            let seg_end = offset + length;
            offset = seg_end;

            if seg_end <= from {
                continue;
            }
            if seg_start >= to {
                break;
            }

            let local_from = (from - seg_start).max(0.0);
            let local_to = (to - seg_start).min(length);
            if local_from == 0.0 && local_to == length {
                result.push(*segment);
            } else if local_to > local_from {
                result.push(segment.slice(local_from, local_to));
            }
        }

        result
    }

    /// The last `ratio` fraction of the outline: `[L × (1 − ratio), L]`
    pub fn tail(&self, ratio: f32) -> Vec<Segment> {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        if ratio <= 0.0 {
            return Vec::new();
        }
        if ratio >= 1.0 {
            return self.segments.clone();
        }
        self.extract(self.length * (1.0 - ratio), self.length)
    }

    /// Path of the whole closed outline
    pub fn to_path(&self) -> Path {
        build_path(&self.segments, true)
    }
}

fn line(from: Point, to: Point) -> Segment {
    Segment::Line { from, to }
}

fn arc(center: Point, radius: f32, start_angle: f32) -> Segment {
    Segment::Arc {
        center,
        radius,
        start_angle,
        sweep: FRAC_PI_2,
    }
}

/// Path for a contiguous run of segments
pub fn segments_to_path(segments: &[Segment]) -> Path {
    build_path(segments, false)
}

fn build_path(segments: &[Segment], close: bool) -> Path {
    Path::new(|builder| {
        let Some(first) = segments.first() else {
            return;
        };
        builder.move_to(first.start());

        for segment in segments {
            match *segment {
                Segment::Line { to, .. } => builder.line_to(to),
                Segment::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                } => {
                    // Quadratic pieces of at most 45° with the control point
                    // on the tangent intersection
                    let pieces = (sweep.abs() / FRAC_PI_4).ceil().max(1.0) as usize;
                    let step = sweep / pieces as f32;
                    for i in 0..pieces {
                        let a0 = start_angle + step * i as f32;
                        let mid = a0 + step / 2.0;
                        let control =
                            point_on_circle(center, radius / (step / 2.0).cos(), mid);
                        let to = point_on_circle(center, radius, a0 + step);
                        builder.quadratic_curve_to(control, to);
                    }
                }
            }
        }

        if close {
            builder.close();
        }
    })
}

/// Per-widget memo of the outline geometry
///
/// Rebuilds only when the [`OutlineKey`] changes.
#[derive(Debug, Default)]
pub struct OutlineCache {
    entry: RefCell<Option<Rc<Outline>>>,
}

impl OutlineCache {
    pub fn get(&self, key: OutlineKey) -> Rc<Outline> {
        let mut entry = self.entry.borrow_mut();

        if let Some(outline) = entry.as_ref().filter(|outline| outline.key() == key) {
            return Rc::clone(outline);
        }

        tracing::debug!(
            "Rebuilding border outline for {}x{} (radius {})",
            key.size.width,
            key.size.height,
            key.corner_radius
        );
        let outline = Rc::new(Outline::rounded_rect(key));
        *entry = Some(Rc::clone(&outline));
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    fn key(width: f32, height: f32, radius: f32) -> OutlineKey {
        OutlineKey {
            size: Size::new(width, height),
            corner_radius: radius,
            inset: 0.0,
        }
    }

    #[test]
    fn test_perimeter_matches_closed_form() {
        let outline = Outline::rounded_rect(key(200.0, 100.0, 20.0));
        let expected = 2.0 * (200.0 - 40.0) + 2.0 * (100.0 - 40.0) + 2.0 * PI * 20.0;
        assert!((outline.length() - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_pill_drops_zero_length_edges() {
        let outline = Outline::rounded_rect(key(200.0, 60.0, 100.0));
        // Vertical edges vanish once the radius reaches half the height
        assert_eq!(outline.segments().len(), 7);
        let expected = 2.0 * (200.0 - 60.0) + 2.0 * PI * 30.0;
        assert!((outline.length() - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_outline_is_contiguous_and_closed() {
        let outline = Outline::rounded_rect(key(120.0, 80.0, 16.0));
        let segments = outline.segments();
        for pair in segments.windows(2) {
            assert!(pair[0].end().distance(pair[1].start()) < TOLERANCE);
        }
        let first = segments.first().map(Segment::start);
        let last = segments.last().map(Segment::end);
        assert_eq!(first, Some(Point::new(60.0, 0.0)));
        assert!(first.zip(last).is_some_and(|(a, b)| a.distance(b) < TOLERANCE));
    }

    #[test]
    fn test_tail_length_is_proportional() {
        let outline = Outline::rounded_rect(key(160.0, 160.0, 28.0));
        let total = outline.length();
        for ratio in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let tail = outline.tail(ratio);
            let length = segments_length(&tail);
            assert!(
                (length - total * ratio).abs() < TOLERANCE,
                "ratio {ratio}: {length} vs {}",
                total * ratio
            );
        }
    }

    #[test]
    fn test_tail_edges() {
        let outline = Outline::rounded_rect(key(100.0, 100.0, 10.0));
        assert!(outline.tail(0.0).is_empty());
        assert!(outline.tail(-1.0).is_empty());
        assert!(outline.tail(f32::NAN).is_empty());
        assert_eq!(outline.tail(1.0), outline.segments().to_vec());
        assert_eq!(outline.tail(3.0), outline.segments().to_vec());
    }

    #[test]
    fn test_tail_ends_at_outline_start() {
        let outline = Outline::rounded_rect(key(100.0, 100.0, 10.0));
        let tail = outline.tail(0.3);
        let end = tail.last().map(Segment::end);
        assert!(end.is_some_and(|p| p.distance(Point::new(50.0, 0.0)) < TOLERANCE));
    }

    #[test]
    fn test_extract_inner_range() {
        let outline = Outline::rounded_rect(key(300.0, 120.0, 24.0));
        let part = outline.extract(40.0, 400.0);
        assert!((segments_length(&part) - 360.0).abs() < TOLERANCE);
        for pair in part.windows(2) {
            assert!(pair[0].end().distance(pair[1].start()) < TOLERANCE);
        }
        assert!(outline.extract(50.0, 50.0).is_empty());
        assert!(outline.extract(80.0, 20.0).is_empty());
    }

    #[test]
    fn test_inset_shrinks_outline() {
        let plain = Outline::rounded_rect(key(100.0, 100.0, 10.0));
        let inset = Outline::rounded_rect(OutlineKey {
            inset: 4.0,
            ..key(100.0, 100.0, 10.0)
        });
        assert!(inset.length() < plain.length());
        assert_eq!(inset.segments()[0].start(), Point::new(50.0, 4.0));
    }

    #[test]
    fn test_degenerate_bounds_are_empty() {
        assert_eq!(Outline::rounded_rect(key(0.0, 50.0, 10.0)).length(), 0.0);
        let tiny = Outline::rounded_rect(OutlineKey {
            inset: 10.0,
            ..key(15.0, 15.0, 4.0)
        });
        assert!(tiny.segments().is_empty());
        assert!(tiny.tail(0.5).is_empty());
    }

    #[test]
    fn test_cache_reuses_outline_for_same_key() {
        let cache = OutlineCache::default();
        let first = cache.get(key(180.0, 90.0, 28.0));
        let second = cache.get(key(180.0, 90.0, 28.0));
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.length(), second.length());
    }

    #[test]
    fn test_cache_rebuilds_when_key_changes() {
        let cache = OutlineCache::default();
        let small = cache.get(key(100.0, 50.0, 10.0));
        let large = cache.get(key(200.0, 50.0, 10.0));
        assert!(!Rc::ptr_eq(&small, &large));
        assert!(large.length() > small.length());

        // Going back to an earlier key rebuilds it with the same geometry
        let again = cache.get(key(100.0, 50.0, 10.0));
        assert!(!Rc::ptr_eq(&small, &again));
        assert_eq!(small.length(), again.length());
    }
}
