//! Views - Stateful GPUI views

mod landing_page;

pub use landing_page::*;
