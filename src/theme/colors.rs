//! Colors - Wayfare Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Wayfare color palette, accessed via associated functions
pub struct WayfareColors;

impl WayfareColors {
    /// Header and brand background
    pub fn header_bg() -> Rgba { rgb(0x0f766e) }
    /// Primary accent (search button, active controls)
    pub fn accent() -> Rgba { rgb(0xf59e0b) }

    /// Page background
    pub fn background() -> Rgba { rgb(0xf8fafc) }
    /// Card and dialog background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Hero banner background
    pub fn hero_bg() -> Rgba { rgb(0x134e4a) }
    /// Drawer background
    pub fn drawer_bg() -> Rgba { rgb(0x1f2937) }
    /// Dimmed overlay behind the drawer and dialogs
    pub fn overlay() -> Rgba { rgba(0x00000088) }
    /// Placeholder shown while a card image loads
    pub fn image_placeholder() -> Rgba { rgb(0xe2e8f0) }

    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    /// Error text
    pub fn danger() -> Rgba { rgb(0xef4444) }

    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Hover fill for rows and links
    pub fn hover() -> Rgba { rgb(0xf3f4f6) }
    /// Hover fill on dark backgrounds
    pub fn hover_dark() -> Rgba { rgba(0xffffff22) }

    /// Navigation control background
    pub fn control_bg() -> Rgba { rgba(0xffffffee) }
    /// Disabled navigation control background
    pub fn control_disabled_bg() -> Rgba { rgba(0xffffff66) }
}
