//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into the three
//! progress indicators shown on the overview page.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Generic callbacks**: Use generic Message types
//! - **Composable**: Build on primitives and iced's built-in widgets
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Canvas programs and geometry
//! - **Widgets** (this module): Indicator + text labels
//! - **Pages** (`crate::ui::pages`): Screen layout

pub mod border_progress;
pub mod circular_progress;
pub mod horizontal_progress;

pub use border_progress::{BorderStyle, view as border_progress};
pub use circular_progress::view as circular_progress;
pub use horizontal_progress::view as horizontal_progress;
