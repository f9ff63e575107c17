//! Command-line surface: result rendering and the interactive menu.

pub mod commands;
pub mod menu;

pub use menu::{Menu, MenuChoice, MAX_CHOICE};
