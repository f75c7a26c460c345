//! UI Constants
//!
//! Centralized layout and behavior constants for the landing page.

/// Drawer width in pixels; a closed drawer sits at `-DRAWER_WIDTH`
pub const DRAWER_WIDTH: f32 = 280.0;

/// Header height in pixels
pub const HEADER_HEIGHT: f32 = 64.0;

/// Scroll distance after which the header turns sticky
pub const STICKY_HEADER_THRESHOLD: f32 = 100.0;

/// Width of a single card slot (card plus its horizontal gutter) in the responsive layout
pub const CARD_SLOT_WIDTH: f32 = 240.0;

/// Horizontal gutter inside a card slot
pub const CARD_GUTTER: f32 = 8.0;

/// Card image height
pub const CARD_IMAGE_HEIGHT: f32 = 150.0;

/// Items per page assumed by a responsive carousel before its first measurement
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Delay before the first measurement-based recomputation after mount
pub const LAYOUT_SETTLE_DELAY_MS: u64 = 100;

/// Smooth anchor scroll duration
pub const ANCHOR_SCROLL_DURATION_MS: u64 = 350;

/// Frame interval of the scroll animation
pub const ANIMATION_FRAME_MS: u64 = 16;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Bounded diagnostics capacity
pub const DIAGNOSTICS_CAPACITY: usize = 200;
