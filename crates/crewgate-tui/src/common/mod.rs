//! Shared helpers for the TUI (task bookkeeping, text fitting).

pub mod task;
pub mod text;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskState, Tasks};
