//! Theme - Wayfare palette

pub mod colors;
