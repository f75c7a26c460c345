//! State Management Layer
//!
//! Application state built on GPUI's Entity system, plus the pure state
//! machines it is composed of. Data flows one way:
//!
//! ```text
//! UI click → LandingState method → pure transition → notify → UI refresh
//!                 │
//!                 └─ spawn catalog load → apply_catalog → notify
//! ```

mod anchor;
mod app;
mod diagnostics;
mod drawer;
mod header;
mod i18n;
mod landing;
mod page;

pub use anchor::*;
pub use app::*;
pub use diagnostics::*;
pub use drawer::*;
pub use header::*;
pub use i18n::*;
pub use landing::*;
pub use page::*;
