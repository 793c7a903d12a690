//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each frame to collect results
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers/`: Effect handler implementations (HTTP, image decoding)

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crewgate_core::auth::AuthClient;
use crewgate_core::config::Config;
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskKind};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame interval while something is animating (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle (no task running, no animation, no recent input).
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    client: AuthClient,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime talking to `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or the terminal cannot be set up.
    pub fn new(config: &Config, base_url: &str) -> Result<Self> {
        let client = AuthClient::new(base_url, config.request_timeout())?;

        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config.assets.clone());
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if reading terminal events or drawing fails.
    pub fn run(&mut self) -> Result<()> {
        let effects = update::startup_effects(&mut self.state);
        self.execute_effects(effects);

        let mut dirty = true;
        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            // Sizing happens before anything else in the batch.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers a render; other events batch into the next one.
                if matches!(&event, UiEvent::Tick { .. }) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.tasks.is_any_running()
            || self.state.tui.backdrop.is_animated()
            || recent_terminal_activity;
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        let elapsed = self.last_tick.elapsed();
        if elapsed >= tick_interval {
            events.push(UiEvent::Tick { elapsed });
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let _ = tx.send(UiEvent::TaskStarted { kind, id });
        tokio::spawn(async move {
            let inner = f().await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::SubmitAuth { task, request } => {
                let client = self.client.clone();
                self.spawn_task(TaskKind::AuthSubmit, task, move || {
                    handlers::auth_submit(client, task, request)
                });
            }
            UiEffect::LoadAsset { task, slot, path } => {
                tracing::debug!(slot = slot.label(), path = %path.display(), "loading asset");
                self.spawn_task(slot.task_kind(), task, move || {
                    handlers::asset_load(slot, path)
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
