//! Full-screen TUI for crewgate.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use crewgate_core::config::Config;
pub use features::{auth, backdrop, landing};
pub use runtime::TuiRuntime;

/// Runs the interactive landing/auth interface against `base_url`.
///
/// # Errors
/// Returns an error if no terminal is attached or the runtime fails.
pub async fn run_interactive(config: &Config, base_url: &str) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive client requires a terminal.\n\
             Use `crewgate login` or `crewgate register` for non-interactive use."
        );
    }

    tracing::info!(base_url, "starting interactive client");
    let mut runtime = TuiRuntime::new(config, base_url)?;
    runtime.run()?;
    drop(runtime);

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
