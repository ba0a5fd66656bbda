use anyhow::Result;

use crate::config::Config;

pub fn run(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
