//! Animation system for the progress indicators
//!
//! Values are animated with `iced_anim` transitions. [`ProgressTween`] adds an
//! explicit `Idle`/`Animating` view and restarts from the current value when
//! retargeted, so a second trigger never snaps back.
//!
//! # Usage
//!
//! ```ignore
//! let easing = EasingPreset::EaseOut;
//! let mut tween = ProgressTween::new(0.0, Duration::from_millis(900), easing);
//! tween.animate_to(800.0, Instant::now());
//! // on every frame
//! let value = tween.advance(Instant::now());
//! ```

mod easing;
mod tween;

pub use easing::EasingPreset;
pub use tween::ProgressTween;
