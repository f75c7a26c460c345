//! Primitive Components
//!
//! Small building blocks shared by the layout components.

pub mod nav_link;
