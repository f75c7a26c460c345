//! Keyboard Actions and Shortcuts

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Application-level actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    Quit,
}

/// Navigation drawer actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum DrawerAction {
    Open,
    Close,
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        KeyBinding::new("secondary-m", DrawerAction::Open, None),
        KeyBinding::new("escape", DrawerAction::Close, None),
    ]
}
