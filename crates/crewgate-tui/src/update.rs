//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crewgate_core::auth::{AuthError, AuthMode, AuthSuccess};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::auth::{AuthAction, FinishOutcome, SubmitOutcome};
use crate::backdrop::AssetSlot;
use crate::common::TaskId;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::landing::LandingSignal;
use crate::overlays::{Overlay, OverlayTransition};
use crate::state::{AppState, TuiState, View};
use crate::{auth, landing};

/// Signals the view shell reacts to.
#[derive(Debug)]
pub enum ShellSignal {
    /// Landing asked to start.
    GetStarted,
    /// Auth form asked to go back.
    Back,
    /// A submission was accepted by the server.
    Succeeded(AuthSuccess),
}

/// Effects to run once before the first frame.
pub fn startup_effects(app: &mut AppState) -> Vec<UiEffect> {
    [AssetSlot::Background, AssetSlot::Logo]
        .into_iter()
        .map(|slot| UiEffect::LoadAsset {
            task: app.tui.task_seq.next_id(),
            slot,
            path: app.tui.asset_path(slot),
        })
        .collect()
}

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick { elapsed } => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            app.tui.backdrop.advance(elapsed);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.tui.backdrop.on_frame(width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, id } => {
            app.tui.tasks.state_mut(kind).on_started(id);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "dropping superseded task result");
                vec![]
            }
        }
        UiEvent::AuthFinished { task, result } => handle_auth_finished(app, task, result),
        UiEvent::AssetLoaded { slot, result } => {
            match result {
                Ok(image) => {
                    let (w, h) = image.dimensions();
                    tracing::debug!(slot = slot.label(), w, h, "asset decoded");
                    app.tui.backdrop.set_source(slot, image);
                }
                Err(err) => {
                    tracing::warn!(slot = slot.label(), "asset unavailable, using plain fill: {err}");
                }
            }
            vec![]
        }
    }
}

/// Applies a view-shell signal.
pub fn apply_signal(tui: &mut TuiState, signal: ShellSignal) -> Vec<UiEffect> {
    match signal {
        ShellSignal::GetStarted => tui.go_to_auth(),
        ShellSignal::Back => tui.go_to_landing(),
        ShellSignal::Succeeded(success) => {
            tracing::info!(userid = %success.userid, mode = ?success.mode, "auth succeeded");
            tui.banner = Some(match success.mode {
                AuthMode::Login => format!("Signed in as {}", success.userid),
                AuthMode::Register => "Registration complete".to_string(),
            });
            tui.go_to_landing();
        }
    }
    vec![]
}

fn handle_auth_finished(
    app: &mut AppState,
    task: TaskId,
    result: Result<AuthSuccess, AuthError>,
) -> Vec<UiEffect> {
    let View::Auth(form) = &mut app.tui.view else {
        tracing::debug!(id = task.0, "auth result arrived after leaving the form");
        return vec![];
    };

    match auth::handle_finished(form, task, result) {
        FinishOutcome::Stale => {
            tracing::debug!(id = task.0, "ignoring auth result for another form");
            vec![]
        }
        FinishOutcome::Succeeded(success) => {
            apply_signal(&mut app.tui, ShellSignal::Succeeded(success))
        }
        FinishOutcome::Failed(err) => {
            app.overlay = Some(Overlay::notice(err.notice_message()));
            vec![]
        }
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            if app.overlay.is_none()
                && let View::Auth(form) = &mut app.tui.view
            {
                auth::handle_paste(form, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    // An active overlay takes every key.
    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(key);
        if matches!(update.transition, OverlayTransition::Close) {
            app.overlay = None;
        }
        return vec![];
    }

    match app.tui.view {
        View::Landing => handle_landing_key(app, key),
        View::Auth(_) => handle_auth_key(app, key),
    }
}

fn handle_landing_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match landing::handle_key(key) {
        Some(LandingSignal::GetStarted) => apply_signal(&mut app.tui, ShellSignal::GetStarted),
        Some(LandingSignal::Quit) => vec![UiEffect::Quit],
        None => vec![],
    }
}

fn handle_auth_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let View::Auth(form) = &mut app.tui.view else {
        return vec![];
    };
    match auth::handle_key(form, key) {
        Some(AuthAction::Back) => apply_signal(&mut app.tui, ShellSignal::Back),
        Some(AuthAction::Submit) => submit(app),
        None => vec![],
    }
}

fn submit(app: &mut AppState) -> Vec<UiEffect> {
    let View::Auth(form) = &mut app.tui.view else {
        return vec![];
    };
    match auth::begin_submit(form, &mut app.tui.task_seq) {
        SubmitOutcome::Ignored => {
            tracing::debug!("submit ignored while a request is in flight");
            vec![]
        }
        SubmitOutcome::Rejected(err) => {
            tracing::info!(kind = %err.kind, "submission rejected locally");
            app.overlay = Some(Overlay::notice(err.notice_message()));
            vec![]
        }
        SubmitOutcome::Started { task, request } => vec![UiEffect::SubmitAuth { task, request }],
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crewgate_core::assets::{Rgb, RgbImage, SourceImage};
    use crewgate_core::auth::{
        AuthForm, AuthRequest, FALLBACK_MESSAGE, FieldKey, LoginPayload, PASSWORD_MISMATCH_MESSAGE,
    };
    use crewgate_core::config::AssetsConfig;

    use super::*;
    use crate::auth::Focus;
    use crate::common::{TaskCompleted, TaskKind};
    use crate::overlays::OverlayExt;
    use crate::state::ViewMode;

    fn app() -> AppState {
        AppState::new(AssetsConfig::default())
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn press_ctrl(app: &mut AppState, c: char) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn form(app: &AppState) -> &crate::auth::AuthFormState {
        app.tui.view.auth_form().expect("auth view")
    }

    /// Delivers a finished auth task the way the runtime does.
    fn finish_auth(app: &mut AppState, task: TaskId, result: Result<AuthSuccess, AuthError>) {
        update(
            app,
            UiEvent::TaskStarted {
                kind: TaskKind::AuthSubmit,
                id: task,
            },
        );
        update(
            app,
            UiEvent::TaskCompleted {
                kind: TaskKind::AuthSubmit,
                completed: TaskCompleted {
                    id: task,
                    result: Box::new(UiEvent::AuthFinished { task, result }),
                },
            },
        );
    }

    fn submit_login(app: &mut AppState, id: &str, password: &str) -> (TaskId, AuthRequest) {
        press(app, KeyCode::Enter);
        type_text(app, id);
        press(app, KeyCode::Tab);
        type_text(app, password);
        let mut effects = press(app, KeyCode::Enter);
        assert_eq!(effects.len(), 1);
        let Some(UiEffect::SubmitAuth { task, request }) = effects.pop() else {
            panic!("expected SubmitAuth");
        };
        (task, request)
    }

    fn fill_register(app: &mut AppState, password: &str, confirm: &str) {
        press(app, KeyCode::Enter);
        press_ctrl(app, 't');
        press(app, KeyCode::BackTab);
        press(app, KeyCode::BackTab);
        press(app, KeyCode::BackTab);
        press(app, KeyCode::BackTab);
        assert_eq!(form(app).focus, Focus::Field(FieldKey::Name));
        for value in ["Kim", "11th", "K2-07", "gunner", "a1", password, confirm] {
            type_text(app, value);
            press(app, KeyCode::Tab);
        }
    }

    #[test]
    fn login_success_returns_to_landing_with_banner() {
        let mut app = app();
        let (task, request) = submit_login(&mut app, "a1", "p");
        assert_eq!(
            request,
            AuthRequest::Login(LoginPayload {
                userid: "a1".to_string(),
                password: "p".to_string(),
            })
        );
        assert!(form(&app).is_busy());

        finish_auth(
            &mut app,
            task,
            Ok(AuthSuccess {
                mode: AuthMode::Login,
                userid: "a1".to_string(),
                usercode: None,
            }),
        );

        assert_eq!(app.tui.view.mode(), ViewMode::Landing);
        assert_eq!(app.tui.banner.as_deref(), Some("Signed in as a1"));
        assert!(app.overlay.is_none());
    }

    #[test]
    fn rejected_login_shows_server_message() {
        let mut app = app();
        let (task, _) = submit_login(&mut app, "a1", "wrong");

        finish_auth(
            &mut app,
            task,
            Err(AuthError::application("invalid credentials")),
        );

        assert_eq!(app.overlay.notice_message(), Some("invalid credentials"));
        assert_eq!(app.tui.view.mode(), ViewMode::Auth);
        assert!(!form(&app).is_busy());
        assert!(app.tui.banner.is_none());
    }

    #[test]
    fn register_mismatch_sends_nothing() {
        let mut app = app();
        fill_register(&mut app, "x", "y");
        assert_eq!(form(&app).focus, Focus::Submit);

        let effects = press(&mut app, KeyCode::Enter);
        assert!(effects.is_empty());
        assert_eq!(app.overlay.notice_message(), Some(PASSWORD_MISMATCH_MESSAGE));
        assert!(!form(&app).is_busy());
        assert!(app.tui.tasks.state(TaskKind::AuthSubmit).active.is_none());
    }

    #[test]
    fn transport_failure_shows_fallback_and_clears_busy() {
        let mut app = app();
        fill_register(&mut app, "x", "x");

        let mut effects = press(&mut app, KeyCode::Enter);
        let Some(UiEffect::SubmitAuth { task, request }) = effects.pop() else {
            panic!("expected SubmitAuth");
        };
        assert_eq!(request.endpoint(), "/api/auth/register");

        finish_auth(
            &mut app,
            task,
            Err(AuthError::transport("Connection failed: refused")),
        );
        assert_eq!(app.overlay.notice_message(), Some(FALLBACK_MESSAGE));
        assert!(!form(&app).is_busy());
    }

    #[test]
    fn reentering_auth_shows_empty_form() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "a1");
        press_ctrl(&mut app, 't');
        assert_eq!(form(&app).form.id, "a1");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.tui.view.mode(), ViewMode::Landing);
        press(&mut app, KeyCode::Enter);

        assert_eq!(form(&app).form, AuthForm::default());
        assert_eq!(form(&app).mode, AuthMode::Login);
    }

    #[test]
    fn second_submit_while_busy_is_ignored() {
        let mut app = app();
        let (task, _) = submit_login(&mut app, "a1", "p");
        assert!(press(&mut app, KeyCode::Enter).is_empty());

        finish_auth(&mut app, task, Err(AuthError::application("nope")));
        press(&mut app, KeyCode::Enter); // dismiss
        assert!(app.overlay.is_none());
        assert_eq!(press(&mut app, KeyCode::Enter).len(), 1);
    }

    #[test]
    fn result_after_leaving_the_form_is_dropped() {
        let mut app = app();
        let (task, _) = submit_login(&mut app, "a1", "p");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);

        finish_auth(&mut app, task, Err(AuthError::application("late")));
        assert!(app.overlay.is_none());
        assert!(!form(&app).is_busy());
    }

    #[test]
    fn notice_swallows_keys_until_dismissed() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app.overlay = Some(Overlay::notice("요청 실패"));

        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());
        assert_eq!(form(&app).form.id, "");
        assert_eq!(app.tui.view.mode(), ViewMode::Auth);
    }

    #[test]
    fn ctrl_c_quits_from_any_view() {
        let mut app = app();
        assert!(matches!(press_ctrl(&mut app, 'c').as_slice(), [UiEffect::Quit]));
        press(&mut app, KeyCode::Enter);
        assert!(matches!(press_ctrl(&mut app, 'c').as_slice(), [UiEffect::Quit]));
        assert!(matches!(press(&mut app, KeyCode::Esc).as_slice(), []));
        assert!(matches!(press(&mut app, KeyCode::Char('q')).as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn paste_goes_to_focused_field() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        update(&mut app, UiEvent::Terminal(Event::Paste("a1\n".to_string())));
        assert_eq!(form(&app).form.id, "a1");
    }

    #[test]
    fn startup_loads_both_assets() {
        let mut app = app();
        let effects = startup_effects(&mut app);
        assert_eq!(effects.len(), 2);
        assert!(effects.iter().all(|e| matches!(
            e,
            UiEffect::LoadAsset { path, .. } if path.ends_with("bg.gif") || path.ends_with("logo.png")
        )));
    }

    #[test]
    fn tick_advances_animated_background() {
        let mut app = app();
        update(&mut app, UiEvent::Frame { width: 4, height: 2 });
        let frames = [Rgb([250, 0, 0]), Rgb([0, 0, 250])]
            .map(|color| (RgbImage::from_pixel(8, 8, color), Duration::from_millis(100)));
        update(
            &mut app,
            UiEvent::AssetLoaded {
                slot: AssetSlot::Background,
                result: Ok(SourceImage::from_frames(frames)),
            },
        );
        assert_eq!(app.tui.backdrop.frame_index(), 0);

        update(&mut app, UiEvent::Tick { elapsed: Duration::from_millis(16) });
        assert_eq!(app.tui.backdrop.frame_index(), 0);
        update(&mut app, UiEvent::Tick { elapsed: Duration::from_millis(100) });
        assert_eq!(app.tui.backdrop.frame_index(), 1);
        assert_eq!(app.tui.spinner_frame, 2);
    }

    #[test]
    fn asset_results_update_backdrop() {
        let mut app = app();
        update(&mut app, UiEvent::Frame { width: 20, height: 10 });
        update(
            &mut app,
            UiEvent::AssetLoaded {
                slot: AssetSlot::Logo,
                result: Err("missing".to_string()),
            },
        );
        assert!(app.tui.backdrop.logo().is_empty());

        let image = SourceImage::from_rgb(RgbImage::from_pixel(8, 8, Rgb([1, 2, 3])));
        update(
            &mut app,
            UiEvent::AssetLoaded {
                slot: AssetSlot::Background,
                result: Ok(image),
            },
        );
        assert_eq!(app.tui.backdrop.background().width(), 20);
    }
}
