//! Wayfare Landing Page Library
//!
//! A native travel-booking landing page: category carousels fed from a JSON
//! catalog, a slide-out navigation drawer, a sticky header and smooth
//! in-page anchor scrolling.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
pub mod theme;
pub mod views;
