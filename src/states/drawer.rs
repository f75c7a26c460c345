//! Drawer State
//!
//! The slide-out navigation panel. Two states, one pure transition function.

use crate::constants::DRAWER_WIDTH;

/// Drawer visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Inputs that move the drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    /// Menu button in the header
    OpenRequested,
    /// Close button inside the drawer
    CloseRequested,
    /// Click on the dimmed overlay
    OverlayClicked,
    /// An anchor inside the drawer resolved to a section
    AnchorFollowedInside,
}

impl DrawerState {
    /// Next state after `event`
    pub fn apply(self, event: DrawerEvent) -> DrawerState {
        match event {
            DrawerEvent::OpenRequested => DrawerState::Open,
            DrawerEvent::CloseRequested
            | DrawerEvent::OverlayClicked
            | DrawerEvent::AnchorFollowedInside => DrawerState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DrawerState::Open)
    }

    /// Left edge of the drawer in pixels
    pub fn left_offset(&self) -> f32 {
        match self {
            DrawerState::Open => 0.0,
            DrawerState::Closed => -DRAWER_WIDTH,
        }
    }

    /// Whether the overlay behind the drawer is shown
    pub fn overlay_active(&self) -> bool {
        self.is_open()
    }
}
