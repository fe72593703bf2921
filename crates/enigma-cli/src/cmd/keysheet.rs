// crates/enigma-cli/src/cmd/keysheet.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};
use enigma_core::config::format as keysheet_format;
use enigma_core::{Machine, MachineConfig, RotorSlot, Setting};
use tracing::info;

use crate::cmd::machine::{show_setting, MachineArgs};
use crate::io::keysheet_file;

#[derive(Args)]
pub struct KeysheetArgs {
    #[command(subcommand)]
    pub cmd: KeysheetCmd,
}

#[derive(Subcommand)]
pub enum KeysheetCmd {
    /// Write a key sheet (.eks) from flags, a config file or another key sheet
    Save(SaveArgs),
    /// Print every key sheet field and its key id
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct SaveArgs {
    #[command(flatten)]
    pub machine: MachineArgs,

    /// Output key sheet path (.eks)
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Key sheet path (.eks)
    #[arg(long)]
    pub keysheet: PathBuf,

    /// Print the key as a TOML machine file instead
    #[arg(long)]
    pub toml: bool,
}

pub fn run(args: KeysheetArgs) -> anyhow::Result<()> {
    match args.cmd {
        KeysheetCmd::Save(a) => cmd_save(a),
        KeysheetCmd::Inspect(a) => cmd_inspect(a),
    }
}

fn cmd_save(a: SaveArgs) -> anyhow::Result<()> {
    let cfg = a.machine.resolve()?;
    // Only keys that build a working machine are written.
    Machine::build(&cfg).context("build machine")?;

    keysheet_file::save_eks(&a.out, &cfg)?;
    let kid = keysheet_format::key_id_hex(&cfg)?;
    println!("key_id = {kid}");
    info!(
        "keysheet save ok: out={} source={} rotors={} key_id={}",
        a.out.display(),
        a.machine.source(),
        cfg.rotors.len(),
        kid
    );
    Ok(())
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let cfg = keysheet_file::load_eks(&a.keysheet)?;

    if a.toml {
        print!("{}", toml::to_string(&cfg).context("render toml")?);
        return Ok(());
    }

    let kid = keysheet_format::key_id_hex(&cfg)?;
    println!("keysheet_path = {}", a.keysheet.display());
    println!("key_id        = {kid}");
    println!(
        "alphabet      = {}",
        cfg.alphabet.as_deref().unwrap_or("(latin)")
    );
    println!("reflector     = {}", cfg.reflector.label());
    println!("rotors        = {}", cfg.wheel_labels().join(" "));
    println!("rings         = {}", settings(&cfg, |r| r.ring));
    println!("positions     = {}", settings(&cfg, |r| r.position));
    println!("plugs         = {}", cfg.plugboard.join(" "));

    // Surface keys that decode but no longer build (e.g. a renamed catalog entry).
    let m = match Machine::build(&cfg) {
        Ok(m) => m,
        Err(e) => {
            println!("window        = (invalid: {e})");
            return Ok(());
        }
    };
    println!("window        = {}", m.window());

    let a = m.alphabet();
    for (i, r) in m.rotors().iter().enumerate() {
        let mut notches: String = r.notches().iter().map(|p| a.symbol_at(p)).collect();
        if notches.is_empty() {
            notches.push('-');
        }
        let kind = if r.is_stationary() {
            "stationary"
        } else {
            "stepping"
        };
        println!(
            "slot[{}]       = {} ring={} notches={notches} {kind}",
            i + 1,
            r.name(),
            a.symbol_at(r.ring_setting())
        );
    }
    let cabled: Vec<String> = m
        .plugboard()
        .pairs()
        .into_iter()
        .map(|(x, y)| [a.symbol_at(x), a.symbol_at(y)].iter().collect())
        .collect();
    println!("cabled        = {}", cabled.join(" "));
    Ok(())
}

fn settings(cfg: &MachineConfig, pick: impl Fn(&RotorSlot) -> Setting) -> String {
    let shown: Vec<String> = cfg.rotors.iter().map(|r| show_setting(pick(r))).collect();
    shown.join(" ")
}
