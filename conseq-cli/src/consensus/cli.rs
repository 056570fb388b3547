use clap::{Arg, ArgAction, Command};

pub const CONSENSUS_CMD: &str = "consensus";

pub fn create_consensus_cli() -> Command {
    Command::new(CONSENSUS_CMD)
        .about("Overlay variant calls onto a reference FASTA. Outputs consensus FASTA with the original line wrapping.")
        .arg(
            Arg::new("fasta")
                .long("fasta")
                .required(true)
                .help("Reference FASTA file, plain or gzipped"),
        )
        .arg(
            Arg::new("vcf")
                .long("vcf")
                .required(true)
                .help("Variant file, co-sorted with the reference, plain or gzipped"),
        )
        .arg(
            Arg::new("indels")
                .long("indels")
                .action(ArgAction::SetTrue)
                .help("Apply indel records (multi-base substitutions); ignored by default"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .required(false)
                .help("Output FASTA file (default: stdout)"),
        )
}
