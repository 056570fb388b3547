//! Build per-base consensus sequences by overlaying variant calls onto a
//! reference FASTA.
//!
//! The reference and the variant stream are walked in lock-step, scaffold by
//! scaffold: for each scaffold the variants belonging to it are collected
//! into a position-keyed table, then the scaffold's bases are rewritten in a
//! single pass, substituting alternate alleles at called positions and
//! (optionally) consuming multi-base reference alleles for indel calls.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use conseq_core::{apply_consensus, ConsensusOptions};
//! use conseq_core::utils::get_dynamic_reader;
//!
//! let fasta = get_dynamic_reader("ref.fa".as_ref()).unwrap();
//! let variants = get_dynamic_reader("calls.vcf.gz".as_ref()).unwrap();
//! let mut out = io::stdout().lock();
//! let mut err = io::stderr().lock();
//! let options = ConsensusOptions { include_indels: true };
//! apply_consensus(fasta, variants, &mut out, &mut err, options).unwrap();
//! ```

pub mod consensus;
pub mod errors;
pub mod rewrite;
pub mod utils;
pub mod variant;

// re-exports
pub use consensus::{ConsensusOptions, apply_consensus};
pub use errors::ConsensusError;
pub use variant::{VariantRecord, VariantTable};
