//! Feature modules - logic separated from UI
//!
//! Features should not depend on UI components directly, apart from plain
//! value types such as easing curves.

pub mod settings;

pub use settings::Settings;
