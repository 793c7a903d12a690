//! Runtime execution modes.
//!
//! - `tui`: Full-screen landing/auth interface (optional feature)

#[cfg(feature = "tui")]
pub use crewgate_tui::run_interactive;

#[cfg(not(feature = "tui"))]
pub async fn run_interactive(
    _config: &crewgate_core::config::Config,
    _base_url: &str,
) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
