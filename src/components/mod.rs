//! Components - Reusable UI Components
//!
//! Stateless `RenderOnce` pieces. Interaction goes through the landing state
//! entity they are handed.

pub mod carousel;
pub mod composite;
pub mod layout;
pub mod primitives;
