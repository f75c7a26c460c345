//! Header Mode
//!
//! The header turns sticky once the page is scrolled past a threshold.

/// Header presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// Scrolls away with the content
    #[default]
    Static,
    /// Pinned to the top of the window
    Sticky,
}

impl HeaderMode {
    /// Mode for a vertical scroll position (pixels from the top)
    pub fn for_scroll(scroll_y: f32, threshold: f32) -> HeaderMode {
        if scroll_y > threshold {
            HeaderMode::Sticky
        } else {
            HeaderMode::Static
        }
    }

    pub fn is_sticky(&self) -> bool {
        matches!(self, HeaderMode::Sticky)
    }
}
