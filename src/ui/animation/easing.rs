//! Named `iced_anim` easing presets that can be picked from settings

use iced::time::Duration;
use iced_anim::transition::Easing;
use serde::{Deserialize, Serialize};

/// Easing curve selected by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingPreset {
    /// Smooth start and end, weighted toward the start
    Ease,
    /// Fast start, gentle landing
    #[default]
    EaseOut,
    /// Smooth at both ends
    EaseInOut,
}

impl EasingPreset {
    /// The `iced_anim` curve running over `duration`
    pub fn easing(self, duration: Duration) -> Easing {
        let curve = match self {
            Self::Ease => Easing::EASE,
            Self::EaseOut => Easing::EASE_OUT,
            Self::EaseInOut => Easing::EASE_IN_OUT,
        };
        curve.with_duration(duration)
    }
}

impl std::fmt::Display for EasingPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EasingPreset::Ease => write!(f, "ease"),
            EasingPreset::EaseOut => write!(f, "ease-out"),
            EasingPreset::EaseInOut => write!(f, "ease-in-out"),
        }
    }
}
