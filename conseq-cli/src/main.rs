mod consensus;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "conseq";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Build per-base consensus sequences by overlaying variant calls onto a reference FASTA.")
        .subcommand_required(true)
        .subcommand(consensus::cli::create_consensus_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // CONSENSUS
        //
        Some((consensus::cli::CONSENSUS_CMD, matches)) => {
            consensus::handlers::run_consensus(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
