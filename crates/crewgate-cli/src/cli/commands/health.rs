use anyhow::Result;
use crewgate_core::config::Config;

pub async fn run(config: &Config, api_url: Option<&str>) -> Result<()> {
    let client = super::client(config, api_url)?;
    client.health().await?;
    println!("ok");
    Ok(())
}
