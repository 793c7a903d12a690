//! Launches the interactive client.

use anyhow::Result;
use crewgate_core::config::Config;

use crate::modes;

pub async fn run(config: &Config, api_url: Option<&str>) -> Result<()> {
    let base_url = config.resolve_base_url(api_url)?;
    modes::run_interactive(config, &base_url).await
}
