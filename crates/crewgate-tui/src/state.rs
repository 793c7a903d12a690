//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── view: View              (landing | auth form instance)
//! │   ├── backdrop: BackdropState (decoded images, fitted grids)
//! │   ├── task_seq: TaskSeq       (async task id generator)
//! │   ├── tasks: Tasks            (task lifecycle state)
//! │   └── banner                  (last success message)
//! └── overlay: Option<Overlay>    (blocking notification)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay handlers
//! can take `&mut` to the overlay while reading the rest of the state.

use std::path::PathBuf;

use crewgate_core::config::AssetsConfig;

use crate::auth::AuthFormState;
use crate::backdrop::{AssetSlot, BackdropState};
use crate::common::{TaskSeq, Tasks};
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(assets: AssetsConfig) -> Self {
        Self {
            tui: TuiState::new(assets),
            overlay: None,
        }
    }
}

/// Which top-level view is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Landing,
    Auth,
}

/// The displayed view. The auth variant owns its form instance, so leaving
/// the view drops everything typed into it.
#[derive(Debug)]
pub enum View {
    Landing,
    Auth(AuthFormState),
}

impl View {
    pub fn mode(&self) -> ViewMode {
        match self {
            View::Landing => ViewMode::Landing,
            View::Auth(_) => ViewMode::Auth,
        }
    }

    pub fn auth_form(&self) -> Option<&AuthFormState> {
        match self {
            View::Auth(form) => Some(form),
            View::Landing => None,
        }
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub view: View,
    pub backdrop: BackdropState,
    /// One-line status shown on the landing view after a successful submission.
    pub banner: Option<String>,
    pub assets: AssetsConfig,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(assets: AssetsConfig) -> Self {
        Self {
            should_quit: false,
            view: View::Landing,
            backdrop: BackdropState::default(),
            banner: None,
            assets,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }

    /// Enters the auth view with a fresh form. Already in it: nothing changes.
    pub fn go_to_auth(&mut self) {
        if matches!(self.view, View::Auth(_)) {
            return;
        }
        tracing::debug!("view: landing -> auth");
        self.banner = None;
        self.view = View::Auth(AuthFormState::new());
    }

    pub fn go_to_landing(&mut self) {
        if matches!(self.view, View::Auth(_)) {
            tracing::debug!("view: auth -> landing");
        }
        self.view = View::Landing;
    }

    pub fn asset_path(&self, slot: AssetSlot) -> PathBuf {
        match slot {
            AssetSlot::Background => self.assets.background_path(),
            AssetSlot::Logo => self.assets.logo_path(),
        }
    }
}
