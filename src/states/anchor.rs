//! In-Page Anchors
//!
//! Resolves `#target` links and plans the scroll that brings the target
//! section to the top of the page.

use crate::domain::Category;

/// Where an anchor link was clicked from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOrigin {
    Header,
    Drawer,
}

/// Outcome of following an anchor link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// Not an in-page link; the click is left alone
    Ignored,
    /// In-page link without a matching section; the click is consumed
    NoTarget,
    /// Scroll to the section of `Category`
    ScrollTo(Category),
}

/// Extract the target id from an href
///
/// Returns `None` for empty hrefs, hrefs not starting with `#`, and a bare `#`.
pub fn resolve_anchor(href: &str) -> Option<&str> {
    let target = href.strip_prefix('#')?;
    if target.is_empty() {
        return None;
    }
    Some(target)
}

/// Follow an href against the page's sections
pub fn follow_anchor(href: &str) -> AnchorOutcome {
    match resolve_anchor(href) {
        None => AnchorOutcome::Ignored,
        Some(target) => match Category::from_anchor(target) {
            Some(category) => AnchorOutcome::ScrollTo(category),
            None => AnchorOutcome::NoTarget,
        },
    }
}

/// Scroll position (pixels from the top) that aligns a section with the top
///
/// `current` is the current scroll position, `section_top` the section's top
/// edge relative to the scroll container's top edge, and `max` the largest
/// reachable scroll position.
pub fn target_scroll_position(current: f32, section_top: f32, max: f32) -> f32 {
    (current + section_top).clamp(0.0, max.max(0.0))
}
