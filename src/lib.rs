//! ptrack - Terminal Project Tracker Library
//!
//! Keeps projects in an in-memory store that broadcasts every change to its
//! listeners, with a terminal front end for adding and moving projects.

pub mod domain;
pub mod application;
pub mod presentation;
pub mod config;
pub mod logging;

pub use domain::*;
pub use application::*;
