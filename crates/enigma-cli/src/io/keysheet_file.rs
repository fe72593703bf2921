// crates/enigma-cli/src/io/keysheet_file.rs

use std::path::Path;

use anyhow::{Context, Result};
use enigma_core::config::format as keysheet_format;
use enigma_core::MachineConfig;

pub fn load_eks(path: &Path) -> Result<MachineConfig> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read keysheet {}", path.display()))?;
    let cfg = keysheet_format::decode(&bytes)
        .with_context(|| format!("decode keysheet {}", path.display()))?;
    Ok(cfg)
}

pub fn save_eks(path: &Path, cfg: &MachineConfig) -> Result<()> {
    let bytes = keysheet_format::encode(cfg).context("encode keysheet")?;
    std::fs::write(path, bytes)
        .with_context(|| format!("write keysheet {}", path.display()))?;
    Ok(())
}
