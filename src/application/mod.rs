//! Application layer managing state and workflows.
//!
//! This module holds the project store with its listeners, and the form,
//! list and top-level state that the terminal UI is built from.

pub mod store;
pub mod form;
pub mod list;
pub mod state;

pub use store::*;
pub use form::*;
pub use list::*;
pub use state::*;
