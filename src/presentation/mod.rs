//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the form and the project lists with ratatui and
//! maps key presses onto application actions.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
