//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. They perform I/O
//! but never touch state; the runtime spawns them and forwards the result to
//! the inbox.

pub mod assets;
pub mod auth;

pub use assets::*;
pub use auth::*;
