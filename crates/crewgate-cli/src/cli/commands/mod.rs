//! CLI command handlers.

pub mod auth;
pub mod config;
pub mod health;
pub mod ui;

use anyhow::Result;
use crewgate_core::auth::AuthClient;
use crewgate_core::config::Config;

fn client(config: &Config, api_url: Option<&str>) -> Result<AuthClient> {
    let base_url = config.resolve_base_url(api_url)?;
    AuthClient::new(base_url, config.request_timeout())
}
