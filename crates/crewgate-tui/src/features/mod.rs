//! Feature slices for the TUI (state/update/render per slice).

pub mod auth;
pub mod backdrop;
pub mod landing;
