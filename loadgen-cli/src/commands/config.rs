//! `loadgen config`

use anyhow::{Context, Result};
use loadgen_config::LoadgenConfig;

pub fn handle_config_show(config: &LoadgenConfig) -> Result<()> {
    let rendered = serde_yaml::to_string(config).context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}

pub fn handle_config_sample() -> Result<()> {
    print!("{}", LoadgenConfig::generate_sample());
    Ok(())
}
