//! Login and registration against the crew auth server.
//!
//! - `form`: field state and wire payloads
//! - `api`: HTTP client and response interpretation
//! - `error`: submission failure taxonomy

pub mod api;
pub mod error;
pub mod form;

pub use api::{AuthClient, AuthSuccess};
pub use error::{AuthError, AuthErrorKind, FALLBACK_MESSAGE, PASSWORD_MISMATCH_MESSAGE};
pub use form::{AuthForm, AuthMode, AuthRequest, FieldKey, LoginPayload, RegisterPayload};
