//! Helper Utilities
//!
//! Common utilities used across the application.

mod action;
mod bounded;
mod fs;
mod scroll_animator;

pub use action::*;
pub use bounded::*;
pub use fs::*;
pub use scroll_animator::*;
