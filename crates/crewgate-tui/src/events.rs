//! UI event types.
//!
//! Everything the reducer reacts to: terminal input, the frame clock, and
//! results of async tasks delivered through the runtime inbox.

use std::time::Duration;

use crewgate_core::assets::SourceImage;
use crewgate_core::auth::{AuthError, AuthSuccess};
use crossterm::event::Event;

use crate::backdrop::AssetSlot;
use crate::common::{TaskCompleted, TaskId, TaskKind};

#[derive(Debug)]
pub enum UiEvent {
    /// Animation/render clock; `elapsed` is the time since the previous tick.
    Tick { elapsed: Duration },

    /// Current terminal size, emitted before each batch of events.
    Frame { width: u16, height: u16 },

    /// Raw crossterm event (key, paste, resize).
    Terminal(Event),

    /// A spawned task has started.
    TaskStarted { kind: TaskKind, id: TaskId },

    /// A spawned task has completed; `completed.result` is the inner event.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// An auth submission resolved.
    AuthFinished {
        task: TaskId,
        result: Result<AuthSuccess, AuthError>,
    },

    /// A decorative image finished decoding (or failed to).
    AssetLoaded {
        slot: AssetSlot,
        result: Result<SourceImage, String>,
    },
}
