//! Decorative background and logo shared by every view.

mod render;
mod state;

pub use render::{HalfBlockImage, render_backdrop, render_logo};
pub use state::{AssetSlot, BackdropState};
