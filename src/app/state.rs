//! Application state definitions

use iced::Color;
use iced::time::{Duration, Instant};

use crate::features::Settings;
use crate::progress::ProgressInput;
use crate::ui::animation::{EasingPreset, ProgressTween};
use crate::ui::pages::overview::{BarEntry, BorderEntry};
use crate::ui::theme;
use crate::ui::widgets::BorderStyle;

/// Main application state
pub struct App {
    pub settings: Settings,
    /// Static nutrient bars
    pub bars: Vec<BarEntry>,
    /// Animated border indicators, left to right
    pub borders: Vec<BorderProgressState>,
    pub border_style: BorderStyle,
    /// Calorie ring (current, max)
    pub calories: (i64, i64),
    /// Last value of the external "collapsed" signal
    pub collapsed: bool,
}

impl App {
    /// Build the overview content from settings
    pub fn with_settings(settings: Settings) -> Self {
        let duration = settings
            .animation
            .duration(settings.display.power_saving_mode);
        let easing = settings.animation.easing;

        let bars = vec![
            BarEntry {
                label: "Protein".to_string(),
                current: 100,
                max: 200,
                color: theme::ACCENT_BLUE,
            },
            BarEntry {
                label: "Protein".to_string(),
                current: 1500,
                max: 200,
                color: theme::ACCENT_CYAN,
            },
        ];

        let borders = [
            (800.0, theme::ACCENT_BLUE),
            (300.0, theme::ACCENT_RED),
            (1000.0, theme::ACCENT_YELLOW),
        ]
        .into_iter()
        .map(|(current, color)| {
            BorderProgressState::new(
                ProgressInput::new(current, 1000.0),
                color,
                duration,
                easing,
            )
        })
        .collect();

        let border_style = BorderStyle {
            corner_radius: settings.border.corner_radius,
            stroke_width: settings.border.stroke_width,
            ..BorderStyle::default()
        };

        Self {
            settings,
            bars,
            borders,
            border_style,
            calories: (40, 100),
            collapsed: false,
        }
    }

    /// Check if any border indicator is mid-animation
    pub fn has_active_animations(&self) -> bool {
        self.borders.iter().any(BorderProgressState::is_animating)
    }

    /// Advance every border indicator to `now`
    pub fn tick_animations(&mut self, now: Instant) {
        for border in &mut self.borders {
            border.advance(now);
        }
    }

    /// Feed the collapse signal to every border indicator
    ///
    /// Returns how many animations were started.
    pub fn set_collapsed(&mut self, collapsed: bool, now: Instant) -> usize {
        self.collapsed = collapsed;
        self.borders
            .iter_mut()
            .map(|border| border.set_trigger(collapsed, now))
            .filter(|started| *started)
            .count()
    }

    /// Border values sampled for the current frame
    pub fn border_entries(&self) -> Vec<BorderEntry> {
        self.borders.iter().map(BorderProgressState::entry).collect()
    }
}

/// One animated border indicator
///
/// The displayed value starts at 0 and animates to the clamped current value
/// on each rising edge of the trigger.
#[derive(Debug)]
pub struct BorderProgressState {
    input: ProgressInput,
    color: Color,
    tween: ProgressTween,
    trigger: bool,
}

impl BorderProgressState {
    pub fn new(
        input: ProgressInput,
        color: Color,
        duration: Duration,
        easing: EasingPreset,
    ) -> Self {
        Self {
            input,
            color,
            tween: ProgressTween::new(0.0, duration, easing),
            trigger: false,
        }
    }

    /// Currently displayed (animated) value
    pub fn value(&self) -> f32 {
        self.tween.value()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_animating()
    }

    /// Record the trigger signal; a false→true edge starts an animation
    ///
    /// Returns `true` when an animation was started.
    pub fn set_trigger(&mut self, signal: bool, now: Instant) -> bool {
        let rising = signal && !self.trigger;
        self.trigger = signal;

        if !rising {
            return false;
        }

        self.tween.animate_to(self.input.clamped(), now);
        self.tween.is_animating()
    }

    pub fn advance(&mut self, now: Instant) -> f32 {
        self.tween.advance(now)
    }

    pub fn entry(&self) -> BorderEntry {
        BorderEntry {
            value: self.value(),
            max: self.input.max,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress;

    fn border(current: f32, max: f32) -> BorderProgressState {
        BorderProgressState::new(
            ProgressInput::new(current, max),
            theme::ACCENT_YELLOW,
            Duration::from_millis(500),
            EasingPreset::EaseOut,
        )
    }

    #[test]
    fn test_idle_until_rising_edge() {
        let mut b = border(640.0, 1000.0);
        let now = Instant::now();
        assert!(!b.set_trigger(false, now));
        assert!(!b.is_animating());
        assert_eq!(b.value(), 0.0);

        assert!(b.set_trigger(true, now));
        assert!(b.is_animating());
        // Holding the signal high is not another edge
        assert!(!b.set_trigger(true, now));
    }

    #[test]
    fn test_full_value_scenario() {
        let mut b = border(1000.0, 1000.0);
        let start = Instant::now();
        b.set_trigger(true, start);
        b.advance(start + Duration::from_secs(1));

        let entry = b.entry();
        assert_eq!(entry.value, 1000.0);
        assert_eq!(progress::ratio(entry.value, entry.max), 1.0);
        assert_eq!(progress::border_label(entry.value, entry.max), "1000 / 1000");
    }

    #[test]
    fn test_animation_target_is_clamped() {
        let mut b = border(5000.0, 1000.0);
        let start = Instant::now();
        b.set_trigger(true, start);
        assert_eq!(b.advance(start + Duration::from_secs(1)), 1000.0);
    }

    #[test]
    fn test_samples_non_decreasing() {
        let mut b = border(640.0, 1000.0);
        let start = Instant::now();
        b.set_trigger(true, start);
        let mut last = b.value();
        for ms in (0..=520).step_by(16) {
            let v = b.advance(start + Duration::from_millis(ms));
            assert!(v >= last);
            last = v;
        }
        assert_eq!(last, 640.0);
        assert!(!b.is_animating());
    }

    #[test]
    fn test_retrigger_does_not_snap_back() {
        let mut b = border(400.0, 1000.0);
        let start = Instant::now();
        b.set_trigger(true, start);
        let mid = start + Duration::from_millis(200);
        let reached = b.advance(mid);
        assert!(reached > 0.0);

        b.set_trigger(false, mid);
        assert!(b.set_trigger(true, mid));
        assert!(b.value() >= reached);
        assert!(b.advance(mid + Duration::from_millis(16)) >= reached);
    }

    #[test]
    fn test_app_starts_every_border_on_collapse() {
        let mut app = App::with_settings(Settings::default());
        assert!(!app.has_active_animations());

        let now = Instant::now();
        assert_eq!(app.set_collapsed(true, now), 3);
        assert!(app.has_active_animations());

        app.tick_animations(now + Duration::from_secs(5));
        assert!(!app.has_active_animations());
        let values: Vec<f32> = app.border_entries().iter().map(|e| e.value).collect();
        assert_eq!(values, vec![800.0, 300.0, 1000.0]);
    }

    #[test]
    fn test_overview_content() {
        let app = App::with_settings(Settings::default());

        let labels: Vec<&str> = app.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Protein", "Protein"]);
        assert_eq!((app.bars[1].current, app.bars[1].max), (1500, 200));

        let colors: Vec<Color> = app.border_entries().iter().map(|e| e.color).collect();
        assert_eq!(
            colors,
            vec![theme::ACCENT_BLUE, theme::ACCENT_RED, theme::ACCENT_YELLOW]
        );
        assert!(app.border_entries().iter().all(|e| e.value == 0.0));
        assert_eq!(app.border_style, BorderStyle::default());
        assert_eq!(app.calories, (40, 100));
    }

    #[test]
    fn test_power_saving_jumps_to_target() {
        let mut settings = Settings::default();
        settings.display.power_saving_mode = true;
        let mut app = App::with_settings(settings);

        assert_eq!(app.set_collapsed(true, Instant::now()), 0);
        assert!(!app.has_active_animations());
        assert_eq!(app.borders[2].value(), 1000.0);
    }
}
