//! Page views

pub mod overview;
