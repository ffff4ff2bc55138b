use clap::Parser;

use crate::cli::collect::{collect_command, CollectArgs};

pub mod collect;

#[derive(Parser)]
#[command(name = "patch-collector")]
#[command(about = "Collect SUSE security patches and export them to XLSX")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub collect: CollectArgs,
}

pub fn run_cli() -> crate::Result<()> {
    let cli = Cli::parse();

    collect_command(cli.collect)
}
