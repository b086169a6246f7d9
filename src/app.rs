//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings
        let settings = crate::features::Settings::load();
        let delay = settings.animation.trigger_delay();
        tracing::info!(
            "Starting with {} easing, {}ms duration, trigger after {:?}",
            settings.animation.easing,
            settings.animation.duration_ms,
            delay
        );

        // 2. Build state
        let app = Self::with_settings(settings);

        // 3. Raise the collapse signal once the window is up
        let trigger = Task::perform(tokio::time::sleep(delay), |_| {
            Message::SetCollapsed(true)
        });

        (app, trigger)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        "Progress Gallery".to_string()
    }

    /// Animation frames are only requested while a border is in flight
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}
