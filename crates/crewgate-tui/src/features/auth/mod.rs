//! Auth form feature: login and registration card.
//!
//! - `state`: one form instance (fields, sub-mode, focus, busy flag)
//! - `update`: key handling and submission lifecycle
//! - `render`: the card

mod render;
mod state;
mod update;

pub use render::render_auth;
pub use state::{AuthFormState, Focus};
pub use update::{
    AuthAction, FinishOutcome, SubmitOutcome, begin_submit, handle_finished, handle_key,
    handle_paste,
};
