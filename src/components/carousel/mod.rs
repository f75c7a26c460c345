//! Carousel - paginated horizontal card strip
//!
//! [`state`] holds the pagination math; [`view`] draws a frame of it and
//! reports measured widths back to the landing state.

mod state;
mod view;

pub use state::*;
pub use view::*;
