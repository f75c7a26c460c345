//! Layout Components
//!
//! Page header and the slide-out navigation drawer.

pub mod drawer;
pub mod header;
