// crates/enigma-cli/src/cmd/catalog.rs

use clap::Args;
use enigma_core::config::catalog::{REFLECTORS, WHEELS};

#[derive(Args)]
pub struct CatalogArgs {
    /// Only list reflectors
    #[arg(long, conflicts_with = "wheels")]
    pub reflectors: bool,

    /// Only list wheels
    #[arg(long)]
    pub wheels: bool,
}

pub fn run(args: CatalogArgs) -> anyhow::Result<()> {
    if !args.reflectors {
        println!("wheels:");
        for w in WHEELS {
            let kind = if w.stationary {
                "stationary"
            } else {
                "stepping"
            };
            let notches = if w.notches.is_empty() {
                "-"
            } else {
                w.notches
            };
            println!("  {:<6} {}  notches={notches:<2} {kind}", w.name, w.wiring);
        }
    }
    if !args.wheels {
        println!("reflectors:");
        for r in REFLECTORS {
            println!("  {:<6} {}", r.name, r.wiring);
        }
    }
    Ok(())
}
