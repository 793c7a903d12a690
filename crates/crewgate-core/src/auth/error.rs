use std::fmt;

/// Message shown when a failure carries nothing displayable.
pub const FALLBACK_MESSAGE: &str = "요청 실패";

/// Message for a registration whose passwords differ.
pub const PASSWORD_MISMATCH_MESSAGE: &str = "비밀번호가 일치하지 않습니다.";

/// Categories of submission failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Rejected locally before any request was sent.
    Validation,
    /// Connection refused, DNS failure, timeout, broken body stream.
    Transport,
    /// Server answered with a falsy `ok`.
    Application,
    /// Body was not JSON, or was `null`.
    Parse,
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthErrorKind::Validation => write!(f, "validation"),
            AuthErrorKind::Transport => write!(f, "transport"),
            AuthErrorKind::Application => write!(f, "application"),
            AuthErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Failure of a login or registration submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    /// User-facing message, if the failure produced one.
    pub message: Option<String>,
    /// Diagnostic detail for logs (never shown in the notification).
    pub details: Option<String>,
}

impl AuthError {
    pub fn password_mismatch() -> Self {
        Self {
            kind: AuthErrorKind::Validation,
            message: Some(PASSWORD_MISMATCH_MESSAGE.to_string()),
            details: None,
        }
    }

    pub fn transport(details: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::Transport,
            message: None,
            details: Some(details.into()),
        }
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::Application,
            message: Some(message.into()),
            details: None,
        }
    }

    pub fn parse(details: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::Parse,
            message: None,
            details: Some(details.into()),
        }
    }

    /// Text for the blocking notification.
    pub fn notice_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_MESSAGE)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notice_message())
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_fall_back_to_generic_message() {
        let err = AuthError::transport("connection refused");
        assert_eq!(err.notice_message(), FALLBACK_MESSAGE);
        assert_eq!(err.details.as_deref(), Some("connection refused"));
    }

    #[test]
    fn empty_application_message_falls_back() {
        let err = AuthError::application("");
        assert_eq!(err.to_string(), FALLBACK_MESSAGE);
    }

    #[test]
    fn mismatch_carries_validation_message() {
        let err = AuthError::password_mismatch();
        assert_eq!(err.kind, AuthErrorKind::Validation);
        assert_eq!(err.notice_message(), PASSWORD_MISMATCH_MESSAGE);
    }
}
