//! Auth feature reducer.
//!
//! Key handling edits the form in place and reports the actions the shell
//! must handle. Submission is split in two: `begin_submit` validates and marks
//! the form busy, `handle_finished` clears it when the request resolves.

use crewgate_core::auth::{AuthError, AuthRequest, AuthSuccess};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AuthFormState, Focus};
use crate::common::{TaskId, TaskSeq};

/// Actions the shell handles on behalf of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Back,
    Submit,
}

pub fn handle_key(state: &mut AuthFormState, key: KeyEvent) -> Option<AuthAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    // Windows reports AltGr as Ctrl+Alt.
    let alt_gr = ctrl && alt;

    match key.code {
        KeyCode::Esc => Some(AuthAction::Back),
        KeyCode::Char('t') if ctrl && !alt => {
            state.toggle_mode();
            None
        }
        KeyCode::Char('r') if ctrl && !alt => {
            state.toggle_password_visibility();
            None
        }
        KeyCode::Tab | KeyCode::Down => {
            state.focus_next();
            None
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus_prev();
            None
        }
        KeyCode::Enter => match state.focus {
            Focus::Field(_) | Focus::Submit => Some(AuthAction::Submit),
            Focus::Toggle => {
                state.toggle_mode();
                None
            }
            Focus::Back => Some(AuthAction::Back),
        },
        KeyCode::Backspace => {
            if let Some(field) = state.focused_field() {
                state.form.pop_char(field);
            }
            None
        }
        KeyCode::Char(c) if alt_gr || (!ctrl && !alt) => {
            if let Some(field) = state.focused_field() {
                state.form.push_char(field, c);
            }
            None
        }
        _ => None,
    }
}

/// Appends pasted text (newlines dropped) to the focused field.
pub fn handle_paste(state: &mut AuthFormState, text: &str) {
    if let Some(field) = state.focused_field() {
        let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        state.form.push_str(field, &cleaned);
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A submission is already in flight.
    Ignored,
    /// Rejected locally; nothing was sent and the form never became busy.
    Rejected(AuthError),
    /// The form is busy until `task` finishes.
    Started { task: TaskId, request: AuthRequest },
}

pub fn begin_submit(state: &mut AuthFormState, task_seq: &mut TaskSeq) -> SubmitOutcome {
    if state.is_busy() {
        return SubmitOutcome::Ignored;
    }
    match state.form.build_request(state.mode) {
        Ok(request) => {
            let task = task_seq.next_id();
            state.pending = Some(task);
            SubmitOutcome::Started { task, request }
        }
        Err(err) => SubmitOutcome::Rejected(err),
    }
}

#[derive(Debug)]
pub enum FinishOutcome {
    /// The result belongs to an older submission or another form instance.
    Stale,
    Succeeded(AuthSuccess),
    Failed(AuthError),
}

pub fn handle_finished(
    state: &mut AuthFormState,
    task: TaskId,
    result: Result<AuthSuccess, AuthError>,
) -> FinishOutcome {
    if state.pending != Some(task) {
        return FinishOutcome::Stale;
    }
    state.pending = None;
    match result {
        Ok(success) => FinishOutcome::Succeeded(success),
        Err(err) => FinishOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use crewgate_core::auth::{AuthErrorKind, AuthMode, FieldKey};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(state: &mut AuthFormState, text: &str) {
        for c in text.chars() {
            handle_key(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_edits_only_the_focused_field() {
        let mut state = AuthFormState::new();
        type_text(&mut state, "a1x");
        handle_key(&mut state, key(KeyCode::Backspace));
        handle_key(&mut state, key(KeyCode::Tab));
        type_text(&mut state, "p");

        assert_eq!(state.form.id, "a1");
        assert_eq!(state.form.password, "p");
        assert_eq!(state.form.name, "");
    }

    #[test]
    fn alt_gr_characters_are_typed() {
        let mut state = AuthFormState::new();
        let alt_gr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for c in ['a', '@', '{'] {
            handle_key(&mut state, KeyEvent::new(KeyCode::Char(c), alt_gr));
        }
        assert_eq!(state.form.id, "a@{");
        assert_eq!(state.mode, AuthMode::Login);

        // Plain Alt chords still type nothing.
        handle_key(&mut state, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(state.form.id, "a@{");
    }

    #[test]
    fn typing_on_buttons_is_ignored() {
        let mut state = AuthFormState::new();
        state.focus = Focus::Submit;
        type_text(&mut state, "zz");
        assert_eq!(state.form, crewgate_core::auth::AuthForm::default());
    }

    #[test]
    fn control_shortcuts() {
        let mut state = AuthFormState::new();
        assert_eq!(handle_key(&mut state, ctrl('r')), None);
        assert!(state.show_password);
        assert_eq!(handle_key(&mut state, ctrl('t')), None);
        assert_eq!(state.mode, AuthMode::Register);
        assert_eq!(state.form.id, "");
    }

    #[test]
    fn enter_depends_on_focus() {
        let mut state = AuthFormState::new();
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), Some(AuthAction::Submit));

        state.focus = Focus::Toggle;
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), None);
        assert_eq!(state.mode, AuthMode::Register);

        state.focus = Focus::Back;
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), Some(AuthAction::Back));
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), Some(AuthAction::Back));
    }

    #[test]
    fn paste_drops_newlines() {
        let mut state = AuthFormState::new();
        handle_paste(&mut state, "a1\r\n");
        assert_eq!(state.form.id, "a1");
    }

    #[test]
    fn mismatch_rejects_without_becoming_busy() {
        let mut state = AuthFormState::new();
        state.toggle_mode();
        state.form.set(FieldKey::Password, "x");
        state.form.set(FieldKey::ConfirmPassword, "y");

        let outcome = begin_submit(&mut state, &mut TaskSeq::default());
        let SubmitOutcome::Rejected(err) = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert_eq!(err.kind, AuthErrorKind::Validation);
        assert!(!state.is_busy());
    }

    #[test]
    fn busy_between_start_and_finish() {
        let mut seq = TaskSeq::default();
        let mut state = AuthFormState::new();
        state.form.set(FieldKey::Id, "a1");

        let SubmitOutcome::Started { task, .. } = begin_submit(&mut state, &mut seq) else {
            panic!("expected start");
        };
        assert!(state.is_busy());
        assert!(matches!(begin_submit(&mut state, &mut seq), SubmitOutcome::Ignored));

        let outcome = handle_finished(&mut state, task, Err(AuthError::transport("refused")));
        assert!(matches!(outcome, FinishOutcome::Failed(_)));
        assert!(!state.is_busy());
    }

    #[test]
    fn foreign_task_results_are_stale() {
        let mut seq = TaskSeq::default();
        let other = seq.next_id();
        let mut state = AuthFormState::new();
        let SubmitOutcome::Started { task, .. } = begin_submit(&mut state, &mut seq) else {
            panic!("expected start");
        };

        let outcome = handle_finished(&mut state, other, Err(AuthError::transport("refused")));
        assert!(matches!(outcome, FinishOutcome::Stale));
        assert_eq!(state.pending, Some(task));
    }
}
