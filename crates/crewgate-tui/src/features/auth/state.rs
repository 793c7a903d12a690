use crewgate_core::auth::{AuthForm, AuthMode, FieldKey};

use crate::common::TaskId;

/// Focusable controls of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldKey),
    Submit,
    Toggle,
    Back,
}

/// One auth form instance. A fresh one is created on every entry into the
/// auth view, so nothing typed survives leaving it.
#[derive(Debug, Clone)]
pub struct AuthFormState {
    pub form: AuthForm,
    pub mode: AuthMode,
    pub show_password: bool,
    pub focus: Focus,
    /// In-flight submission; `Some` means busy.
    pub pending: Option<TaskId>,
}

impl Default for AuthFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthFormState {
    pub fn new() -> Self {
        let mode = AuthMode::default();
        Self {
            form: AuthForm::default(),
            mode,
            show_password: false,
            focus: first_focus(mode),
            pending: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn focused_field(&self) -> Option<FieldKey> {
        match self.focus {
            Focus::Field(key) => Some(key),
            _ => None,
        }
    }

    /// Tab order: visible fields, then submit, the sub-mode link, and back.
    pub fn focus_order(&self) -> Vec<Focus> {
        FieldKey::visible_in(self.mode)
            .iter()
            .copied()
            .map(Focus::Field)
            .chain([Focus::Submit, Focus::Toggle, Focus::Back])
            .collect()
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        let len = order.len() as isize;
        let current = order
            .iter()
            .position(|f| *f == self.focus)
            .map_or(0, |i| i as isize);
        let next = (current + delta).rem_euclid(len) as usize;
        if let Some(focus) = order.get(next) {
            self.focus = *focus;
        }
    }

    /// Switches login/register. Field values are kept; focus moves to the
    /// first field if the focused one is hidden in the new sub-mode.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        if !self.focus_order().contains(&self.focus) {
            self.focus = first_focus(self.mode);
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Login",
            AuthMode::Register => "Sign Up",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Sign in to access your dashboard.",
            AuthMode::Register => "Please enter your information accurately for security.",
        }
    }

    /// Footer prompt and link label of the sub-mode toggle.
    pub fn toggle_prompt(&self) -> (&'static str, &'static str) {
        match self.mode {
            AuthMode::Login => ("Don't have an account? ", "Sign up"),
            AuthMode::Register => ("Already have an account? ", "Log in"),
        }
    }
}

fn first_focus(mode: AuthMode) -> Focus {
    FieldKey::visible_in(mode)
        .first()
        .copied()
        .map_or(Focus::Submit, Focus::Field)
}
