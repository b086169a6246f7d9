//! Message update handlers

use iced::Task;
use iced::time::Instant;

use super::{App, Message};

impl App {
    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AnimationTick => {
                let was_animating = self.has_active_animations();
                self.tick_animations(Instant::now());
                if was_animating && !self.has_active_animations() {
                    tracing::debug!("Border animations finished");
                }
            }
            Message::SetCollapsed(collapsed) => {
                if collapsed != self.collapsed {
                    tracing::info!("Collapsed signal changed to {}", collapsed);
                }
                let started = self.set_collapsed(collapsed, Instant::now());
                if started > 0 {
                    tracing::debug!("Started {} border animations", started);
                }
            }
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;

    #[test]
    fn test_collapse_message_starts_animations() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::SetCollapsed(true));
        assert!(app.collapsed);
        assert!(app.has_active_animations());
    }

    #[test]
    fn test_tick_finishes_animations() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::SetCollapsed(true));
        let _ = app.update(Message::SetCollapsed(false));
        assert!(!app.collapsed);
        // Lowering the signal does not cancel the running animation
        assert!(app.has_active_animations());

        app.tick_animations(Instant::now() + iced::time::Duration::from_secs(10));
        let _ = app.update(Message::AnimationTick);
        assert!(!app.has_active_animations());
    }
}
