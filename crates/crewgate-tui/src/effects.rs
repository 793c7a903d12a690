//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).

use std::path::PathBuf;

use crewgate_core::auth::AuthRequest;

use crate::backdrop::AssetSlot;
use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Send a validated auth request to the server.
    SubmitAuth { task: TaskId, request: AuthRequest },

    /// Decode a decorative image off the UI loop.
    LoadAsset {
        task: TaskId,
        slot: AssetSlot,
        path: PathBuf,
    },
}
