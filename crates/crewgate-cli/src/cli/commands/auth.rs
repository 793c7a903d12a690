//! Non-interactive login/register.
//!
//! Both go through the same form model as the TUI, so validation, payload
//! shape and response interpretation are identical.

use anyhow::Result;
use crewgate_core::auth::{AuthError, AuthForm, AuthMode, AuthSuccess};
use crewgate_core::config::Config;

pub struct RegisterArgs {
    pub name: String,
    pub unit: String,
    pub tank: String,
    pub rank: String,
    pub id: String,
    pub password: String,
    pub confirm_password: String,
}

pub async fn login(
    config: &Config,
    api_url: Option<&str>,
    id: String,
    password: String,
) -> Result<()> {
    let form = AuthForm {
        id,
        password,
        ..AuthForm::default()
    };
    submit(config, api_url, &form, AuthMode::Login).await?;
    println!("Logged in.");
    Ok(())
}

pub async fn register(config: &Config, api_url: Option<&str>, args: RegisterArgs) -> Result<()> {
    let RegisterArgs {
        name,
        unit,
        tank,
        rank,
        id,
        password,
        confirm_password,
    } = args;
    let form = AuthForm {
        name,
        unit,
        tank,
        rank,
        id,
        password,
        confirm_password,
    };
    submit(config, api_url, &form, AuthMode::Register).await?;
    println!("Registered.");
    Ok(())
}

async fn submit(
    config: &Config,
    api_url: Option<&str>,
    form: &AuthForm,
    mode: AuthMode,
) -> Result<AuthSuccess> {
    let client = super::client(config, api_url)?;
    client
        .submit(form, mode)
        .await
        .map_err(|err: AuthError| anyhow::anyhow!("{}", err.notice_message()))
}
