//! UI module for the progress gallery
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Canvas programs and their geometry
//! - **Widgets** (`widgets`): Indicators composed with their labels
//! - **Pages** (`pages`): Screen layout

pub mod animation;
pub mod pages;
pub mod primitives;
pub mod theme;
pub mod widgets;
