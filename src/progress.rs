//! Progress values and the ratio math shared by every indicator
//!
//! All widgets go through [`ratio`] so clamping and the `max <= 0` guard
//! behave the same everywhere.

/// A progress value and its upper bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressInput {
    pub current: f32,
    pub max: f32,
}

impl ProgressInput {
    pub fn new(current: f32, max: f32) -> Self {
        Self { current, max }
    }

    /// Build from integer counts (grams, kcal, ...)
    pub fn from_counts(current: i64, max: i64) -> Self {
        Self {
            current: current as f32,
            max: max as f32,
        }
    }

    /// Current value clamped into `[0, max]`, or 0 when there is no valid max
    pub fn clamped(&self) -> f32 {
        clamp_value(self.current, self.max)
    }

    /// Fraction of `max` reached, always in `[0, 1]`
    pub fn ratio(&self) -> f32 {
        ratio(self.current, self.max)
    }
}

/// Clamp `current` into `[0, max]`
///
/// Returns 0 when `max <= 0` or either operand is NaN.
pub fn clamp_value(current: f32, max: f32) -> f32 {
    if max.is_nan() || max <= 0.0 || current.is_nan() {
        return 0.0;
    }
    current.clamp(0.0, max)
}

/// `clamp(current, 0, max) / max`
///
/// Out-of-range input is clamped silently. A non-positive `max` yields 0
/// instead of dividing.
pub fn ratio(current: f32, max: f32) -> f32 {
    if max.is_nan() || max <= 0.0 || max.is_infinite() {
        return 0.0;
    }
    (clamp_value(current, max) / max).clamp(0.0, 1.0)
}

/// Second text line of the horizontal bar, e.g. `"100 / 200 G"`
pub fn bar_label(clamped: i64, max: i64) -> String {
    format!("{} / {} G", clamped, max)
}

/// Calorie line of the circular indicator, e.g. `"40 / 100 kcal"`
pub fn calories_label(current: i64, max: i64) -> String {
    format!("{} / {} kcal", current, max)
}

/// Label drawn inside the border indicator, values truncated to integers
pub fn border_label(value: f32, max: f32) -> String {
    format!("{} / {}", truncate(value), truncate(max))
}

fn truncate(value: f32) -> i64 {
    if value.is_finite() { value.trunc() as i64 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_within_unit_range() {
        for max in [1.0, 7.5, 200.0, 1000.0] {
            for current in [-50.0, 0.0, 0.3, 3.0, 150.0, 1500.0, 99999.0] {
                let r = ratio(current, max);
                assert!((0.0..=1.0).contains(&r), "ratio({current}, {max}) = {r}");
            }
        }
    }

    #[test]
    fn test_ratio_non_positive_max_is_zero() {
        assert_eq!(ratio(10.0, 0.0), 0.0);
        assert_eq!(ratio(10.0, -5.0), 0.0);
        assert_eq!(ratio(0.0, 0.0), 0.0);
        assert_eq!(ratio(f32::NAN, 10.0), 0.0);
        assert_eq!(ratio(5.0, f32::NAN), 0.0);
        assert_eq!(ProgressInput::from_counts(3, 0).ratio(), 0.0);
        assert_eq!(ProgressInput::from_counts(3, 0).clamped(), 0.0);
    }

    #[test]
    fn test_ratio_endpoints() {
        assert_eq!(ratio(0.0, 200.0), 0.0);
        assert_eq!(ratio(200.0, 200.0), 1.0);
        assert_eq!(ratio(1500.0, 200.0), 1.0);
        assert_eq!(ratio(-1.0, 200.0), 0.0);
    }

    #[test]
    fn test_half_filled_bar_scenario() {
        let input = ProgressInput::from_counts(100, 200);
        assert_eq!(input.ratio(), 0.5);
        assert_eq!(bar_label(input.clamped() as i64, 200), "100 / 200 G");
    }

    #[test]
    fn test_out_of_range_bar_scenario() {
        let input = ProgressInput::from_counts(1500, 200);
        assert_eq!(input.clamped(), 200.0);
        assert_eq!(input.ratio(), 1.0);
        assert_eq!(bar_label(input.clamped() as i64, 200), "200 / 200 G");
    }

    #[test]
    fn test_labels() {
        assert_eq!(calories_label(40, 100), "40 / 100 kcal");
        assert_eq!(border_label(1000.0, 1000.0), "1000 / 1000");
        assert_eq!(border_label(639.97, 1000.0), "639 / 1000");
        assert_eq!(border_label(f32::NAN, 10.0), "0 / 10");
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let input = ProgressInput::new(1500.0, 200.0);
        let once = input.clamped();
        let twice = ProgressInput::new(once, 200.0).clamped();
        assert_eq!(once, twice);
    }
}
