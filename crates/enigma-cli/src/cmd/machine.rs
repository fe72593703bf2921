// crates/enigma-cli/src/cmd/machine.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use enigma_core::{MachineConfig, Setting};

use crate::io::{config_file, keysheet_file};

const KEY_FLAGS: [&str; 6] = [
    "rotors",
    "reflector",
    "rings",
    "positions",
    "plugs",
    "alphabet",
];

/// Machine key, shared by every command that builds a machine.
///
/// Precedence: --keysheet, then --config, then the individual flags.
#[derive(Args, Debug)]
pub struct MachineArgs {
    /// Wheel order, left to right (e.g. "I II III", "Beta II IV I")
    #[arg(long, default_value = "I II III")]
    pub rotors: String,

    /// Reflector name (A, B, C, B-Thin, C-Thin)
    #[arg(long, default_value = "B")]
    pub reflector: String,

    /// Ring settings, one per rotor ("AAA", "01 01 01")
    #[arg(long)]
    pub rings: Option<String>,

    /// Starting window positions, one per rotor ("BLA", "2 12 1")
    #[arg(long)]
    pub positions: Option<String>,

    /// Plugboard pairs ("AV BS CG")
    #[arg(long)]
    pub plugs: Option<String>,

    /// Custom symbol set, replacing the 26 Latin capitals
    #[arg(long)]
    pub alphabet: Option<String>,

    /// Machine description (.toml)
    #[arg(long, conflicts_with_all = KEY_FLAGS)]
    pub config: Option<PathBuf>,

    /// Saved key sheet (.eks)
    #[arg(long, conflicts_with = "config", conflicts_with_all = KEY_FLAGS)]
    pub keysheet: Option<PathBuf>,
}

impl MachineArgs {
    pub fn source(&self) -> &'static str {
        if self.keysheet.is_some() {
            "keysheet"
        } else if self.config.is_some() {
            "config"
        } else {
            "flags"
        }
    }

    pub fn resolve(&self) -> anyhow::Result<MachineConfig> {
        if let Some(path) = &self.keysheet {
            return keysheet_file::load_eks(path);
        }
        if let Some(path) = &self.config {
            return config_file::load_toml(path);
        }

        let mut cfg = MachineConfig::new(&self.rotors, &self.reflector)
            .with_context(|| format!("parse --rotors {:?}", self.rotors))?;
        if let Some(symbols) = &self.alphabet {
            cfg = cfg.with_alphabet(symbols.as_str());
        }
        if let Some(rings) = &self.rings {
            cfg = cfg
                .with_rings(rings)
                .with_context(|| format!("parse --rings {rings:?}"))?;
        }
        if let Some(positions) = &self.positions {
            cfg = cfg
                .with_positions(positions)
                .with_context(|| format!("parse --positions {positions:?}"))?;
        }
        if let Some(plugs) = &self.plugs {
            cfg = cfg
                .with_plugs(plugs)
                .with_context(|| format!("parse --plugs {plugs:?}"))?;
        }
        Ok(cfg)
    }
}

/// "A" for symbols, "01" for numbers, as printed on a key sheet.
pub fn show_setting(s: Setting) -> String {
    match s {
        Setting::Symbol(c) => c.to_string(),
        Setting::Number(n) => format!("{n:02}"),
    }
}
