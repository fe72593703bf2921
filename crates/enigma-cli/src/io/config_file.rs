// crates/enigma-cli/src/io/config_file.rs

use std::path::Path;

use anyhow::{Context, Result};
use enigma_core::MachineConfig;

/// Load a TOML machine description. Names and settings are checked when the
/// machine is built, not here.
pub fn load_toml(path: &Path) -> Result<MachineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg = toml::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
