use std::path::Path;

use anyhow::Context;
use vola_config::VolaConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<VolaConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv(&cwd)?;
    VolaConfig::load().context("failed to load vola configuration")
}

fn load_dotenv(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
