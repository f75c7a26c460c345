//! Domain - Pure Data Structures
//!
//! Content model of the page, loaded from the catalog document and never
//! mutated afterwards.

pub mod catalog;
pub mod category;
pub mod item;

pub use catalog::*;
pub use category::*;
pub use item::*;
