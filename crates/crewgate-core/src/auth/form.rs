//! Auth form model and request payloads.
//!
//! The form is a plain record of free-text fields. Building a request reads it
//! once and applies the only client-side rule: registration passwords must match.

use serde::Serialize;

use super::error::AuthError;

/// Whether the form logs in or registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn is_login(self) -> bool {
        matches!(self, AuthMode::Login)
    }
}

/// Keys of the form's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Unit,
    Tank,
    Rank,
    Id,
    Password,
    ConfirmPassword,
}

impl FieldKey {
    pub const ALL: [FieldKey; 7] = [
        FieldKey::Name,
        FieldKey::Unit,
        FieldKey::Tank,
        FieldKey::Rank,
        FieldKey::Id,
        FieldKey::Password,
        FieldKey::ConfirmPassword,
    ];

    /// Fields shown for a mode, in display order.
    pub fn visible_in(mode: AuthMode) -> &'static [FieldKey] {
        match mode {
            AuthMode::Login => &[FieldKey::Id, FieldKey::Password],
            AuthMode::Register => &Self::ALL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Unit => "Unit",
            FieldKey::Tank => "Assigned Tank",
            FieldKey::Rank => "Position",
            FieldKey::Id => "ID",
            FieldKey::Password => "Password",
            FieldKey::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(self) -> String {
        format!("Enter your {}", self.label().to_lowercase())
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FieldKey::Password | FieldKey::ConfirmPassword)
    }
}

/// In-memory field values of one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub unit: String,
    pub tank: String,
    pub rank: String,
    pub id: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Unit => &self.unit,
            FieldKey::Tank => &self.tank,
            FieldKey::Rank => &self.rank,
            FieldKey::Id => &self.id,
            FieldKey::Password => &self.password,
            FieldKey::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot(&mut self, key: FieldKey) -> &mut String {
        match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Unit => &mut self.unit,
            FieldKey::Tank => &mut self.tank,
            FieldKey::Rank => &mut self.rank,
            FieldKey::Id => &mut self.id,
            FieldKey::Password => &mut self.password,
            FieldKey::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Replaces one field's value.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        *self.slot(key) = value.into();
    }

    pub fn push_char(&mut self, key: FieldKey, c: char) {
        self.slot(key).push(c);
    }

    pub fn push_str(&mut self, key: FieldKey, text: &str) {
        self.slot(key).push_str(text);
    }

    pub fn pop_char(&mut self, key: FieldKey) {
        self.slot(key).pop();
    }

    /// Builds the request for `mode`, or fails locally without touching the network.
    ///
    /// # Errors
    /// Returns a validation error when registering with mismatched passwords.
    pub fn build_request(&self, mode: AuthMode) -> Result<AuthRequest, AuthError> {
        match mode {
            AuthMode::Login => Ok(AuthRequest::Login(LoginPayload {
                userid: self.id.clone(),
                password: self.password.clone(),
            })),
            AuthMode::Register => {
                if self.password != self.confirm_password {
                    return Err(AuthError::password_mismatch());
                }
                Ok(AuthRequest::Register(RegisterPayload {
                    name: self.name.clone(),
                    unit: self.unit.clone(),
                    tank: self.tank.clone(),
                    rank: self.rank.clone(),
                    userid: self.id.clone(),
                    password: self.password.clone(),
                }))
            }
        }
    }
}

/// Wire body of `POST /api/auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub userid: String,
    pub password: String,
}

/// Wire body of `POST /api/auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub unit: String,
    pub tank: String,
    pub rank: String,
    pub userid: String,
    pub password: String,
}

/// A submission ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login(LoginPayload),
    Register(RegisterPayload),
}

impl AuthRequest {
    pub fn endpoint(&self) -> &'static str {
        match self {
            AuthRequest::Login(_) => "/api/auth/login",
            AuthRequest::Register(_) => "/api/auth/register",
        }
    }

    /// Message used when the server rejects without an `error` field.
    pub fn failure_message(&self) -> &'static str {
        match self {
            AuthRequest::Login(_) => "login failed",
            AuthRequest::Register(_) => "register failed",
        }
    }

    pub fn userid(&self) -> &str {
        match self {
            AuthRequest::Login(p) => &p.userid,
            AuthRequest::Register(p) => &p.userid,
        }
    }

    pub fn mode(&self) -> AuthMode {
        match self {
            AuthRequest::Login(_) => AuthMode::Login,
            AuthRequest::Register(_) => AuthMode::Register,
        }
    }
}

// Passwords stay out of Debug output (and therefore out of logs).
impl std::fmt::Debug for LoginPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginPayload")
            .field("userid", &self.userid)
            .field("password", &"***")
            .finish()
    }
}

impl std::fmt::Debug for RegisterPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterPayload")
            .field("name", &self.name)
            .field("unit", &self.unit)
            .field("tank", &self.tank)
            .field("rank", &self.rank)
            .field("userid", &self.userid)
            .field("password", &"***")
            .finish()
    }
}
