// crates/enigma-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "enigma-cli")]
#[command(about = "Rotor cipher machine CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encipher text (the same key deciphers it again)
    Encipher(cmd::encipher::EncipherArgs),

    /// Key sheet tools (.eks)
    Keysheet(cmd::keysheet::KeysheetArgs),

    /// List built-in wheels and reflectors
    Catalog(cmd::catalog::CatalogArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encipher(args) => cmd::encipher::run(args),
        Commands::Keysheet(args) => cmd::keysheet::run(args),
        Commands::Catalog(args) => cmd::catalog::run(args),
    }
}
