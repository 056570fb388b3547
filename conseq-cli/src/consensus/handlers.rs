use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use conseq_core::utils::get_dynamic_reader;
use conseq_core::{ConsensusOptions, apply_consensus};

pub fn run_consensus(matches: &ArgMatches) -> Result<()> {
    let fasta_path = matches
        .get_one::<String>("fasta")
        .expect("--fasta is required");
    let vcf_path = matches.get_one::<String>("vcf").expect("--vcf is required");
    let output_path = matches.get_one::<String>("output");

    let options = ConsensusOptions {
        include_indels: matches.get_flag("indels"),
    };

    let fasta = get_dynamic_reader(Path::new(fasta_path))?;
    let variants = get_dynamic_reader(Path::new(vcf_path))?;

    let stderr = io::stderr();
    let mut err = stderr.lock();

    match output_path {
        Some(p) => {
            let file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            let mut out = BufWriter::new(file);
            apply_consensus(fasta, variants, &mut out, &mut err, options)?;
            out.flush()?;
            eprintln!("Output written to {}", p);
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            apply_consensus(fasta, variants, &mut out, &mut err, options)?;
            out.flush()?;
        }
    }

    Ok(())
}
