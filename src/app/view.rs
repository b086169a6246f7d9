//! Application view rendering

use iced::Element;

use super::App;
use super::message::Message;
use crate::ui::pages;

impl App {
    /// Build the overview screen
    pub fn view(&self) -> Element<'_, Message> {
        pages::overview::view(
            &self.bars,
            &self.border_entries(),
            self.border_style,
            self.calories,
        )
    }
}
