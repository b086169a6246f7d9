//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly, plus the pure geometry they draw.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Testable geometry**: Layout math is computed by plain structs
//!   (`BarLayout`, `RingLayout`, `Outline`) the programs only paint
//!
//! # Contents
//!
//! - [`ProgressBar`] - Horizontal bar
//! - [`ProgressRing`] - Circular progress indicator
//! - [`BorderProgress`] - Rounded outline that fills along its perimeter
//! - [`outline`] - Rounded-rectangle contour with arc-length extraction

pub mod border_progress;
pub mod outline;
pub mod progress_bar;
pub mod progress_ring;

pub use border_progress::{BorderProgress, view_border_progress};
pub use progress_bar::{ProgressBar, view_progress_bar};
pub use progress_ring::{ProgressRing, view_progress_ring_styled};
