//! UI layer
//!
//! Contains components, widgets and theme definitions.

pub mod components;
pub mod theme;
pub mod widgets;
