//! Application Layer
//!
//! App initialization, global actions and window management.

pub mod application;
