// crates/enigma-cli/src/cmd/encipher.rs

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use enigma_core::config::format as keysheet_format;
use enigma_core::Machine;
use tracing::info;

use crate::cmd::machine::MachineArgs;
use crate::io::{keysheet_file, text};

const BAD_SYMBOL: &str =
    "input contains a symbol outside the machine alphabet (drop --strict to filter it)";

#[derive(Args)]
pub struct EncipherArgs {
    #[command(flatten)]
    pub machine: MachineArgs,

    /// Input file. If neither --in nor --text is given, stdin is read.
    #[arg(long, conflicts_with = "text")]
    pub r#in: Option<PathBuf>,

    /// Inline message
    #[arg(long)]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Reject symbols outside the alphabet instead of uppercasing and dropping them.
    /// Whitespace is always ignored.
    #[arg(long)]
    pub strict: bool,

    /// Print the result in groups of N symbols (0 = no grouping)
    #[arg(long, default_value_t = 0)]
    pub group: usize,

    /// Write a key sheet with the rotor positions reached after this message
    #[arg(long)]
    pub save_state: Option<PathBuf>,
}

pub fn run(args: EncipherArgs) -> anyhow::Result<()> {
    let input = read_input(&args)?;

    let cfg = args.machine.resolve()?;
    let mut machine = Machine::build(&cfg).context("build machine")?;
    let start = machine.window();

    let prepared = if args.strict {
        text::strip_whitespace(&input)
    } else {
        text::prepare(&input, machine.alphabet())
    };

    let out = machine.process_str(&prepared.text).context(BAD_SYMBOL)?;

    let mut rendered = text::group(&out, args.group);
    rendered.push('\n');
    if let Some(path) = &args.out {
        std::fs::write(path, &rendered)
            .with_context(|| format!("write output {}", path.display()))?;
    } else {
        print!("{rendered}");
    }

    if let Some(path) = &args.save_state {
        let next = cfg.resume_from(&machine);
        keysheet_file::save_eks(path, &next)?;
        info!(
            "state saved: keysheet={} window={} key_id={}",
            path.display(),
            machine.window(),
            keysheet_format::key_id_hex(&next)?
        );
    }

    let stats = machine.stats();
    info!(
        "encipher ok: source={} symbols={} dropped={} start={} end={} double_steps={} key_id={}",
        args.machine.source(),
        stats.symbols,
        prepared.dropped,
        start,
        machine.window(),
        stats.double_steps,
        keysheet_format::key_id_hex(&cfg)?
    );

    Ok(())
}

fn read_input(args: &EncipherArgs) -> anyhow::Result<String> {
    if let Some(t) = &args.text {
        return Ok(t.clone());
    }
    if let Some(path) = &args.r#in {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read input {}", path.display()))?;
        return Ok(text);
    }
    let mut s = String::new();
    std::io::stdin()
        .read_to_string(&mut s)
        .context("read stdin")?;
    Ok(s)
}
