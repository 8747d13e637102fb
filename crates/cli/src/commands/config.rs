//! `logist config`: Show where config is read from and the default template.

use logist_config::LogistConfig;
use tracing::debug;

pub fn run() -> anyhow::Result<()> {
    let path = LogistConfig::config_dir().join("config.toml");
    debug!(path = %path.display(), exists = path.exists(), "Config location");

    println!("# Config file: {}", path.display());
    if !path.exists() {
        println!("# (not present; defaults below are in effect)");
    }
    println!();
    print!("{}", LogistConfig::default_toml());
    Ok(())
}
