//! End-to-end tests for the consensus pipeline through the public API:
//! reference and variant files on disk, consensus FASTA captured from the
//! output writer.
//!
//! Unit tests for table building and the rewrite algorithm itself live in
//! src/variant.rs and src/rewrite.rs.

use std::io::Write;

use conseq_core::utils::get_dynamic_reader;
use conseq_core::{ConsensusOptions, apply_consensus};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write");
    file
}

fn run_files(fasta: &str, vcf: &str, include_indels: bool) -> (String, String) {
    let fasta_file = write_temp(fasta);
    let vcf_file = write_temp(vcf);

    let fasta_reader = get_dynamic_reader(fasta_file.path()).expect("Failed to open FASTA");
    let vcf_reader = get_dynamic_reader(vcf_file.path()).expect("Failed to open variants");

    let mut out = Vec::new();
    let mut err = Vec::new();
    apply_consensus(
        fasta_reader,
        vcf_reader,
        &mut out,
        &mut err,
        ConsensusOptions { include_indels },
    )
    .expect("Consensus run failed");

    (
        String::from_utf8(out).expect("Output is not UTF-8"),
        String::from_utf8(err).expect("Diagnostics are not UTF-8"),
    )
}

#[test]
fn test_two_scaffolds_with_headers_and_wrapping() {
    let fasta = "\
>scaffold_1 length=10
ACGTA
CGTAC
>scaffold_10 length=8
TTTTGGGG
";
    let vcf = "\
##fileformat=VCFv4.2
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
scaffold_1\t2\t.\tC\tA\t40\tPASS\tDP=18
scaffold_1\t7\t.\tG\tC\t40\tPASS\tDP=22
scaffold_10\t5\t.\tG\tC\t40\tPASS\tDP=9
";
    let (out, err) = run_files(fasta, vcf, false);
    assert_eq!(
        out,
        "\
>scaffold_1 length=10
AAGTA
CCTAC
>scaffold_10 length=8
TTTTCGGG
"
    );
    assert_eq!(err, "");
}

#[test]
fn test_scaffold_name_prefix_never_steals_records() {
    // scaffold_1 records must not be claimed by scaffold_10 or vice versa.
    let fasta = ">scaffold_1\nAAAA\n>scaffold_10\nCCCC\n";
    let vcf = "scaffold_1\t1\t.\tA\tG\t40\tPASS\tDP=5\nscaffold_10\t1\t.\tC\tT\t40\tPASS\tDP=5\n";
    let (out, _) = run_files(fasta, vcf, false);
    assert_eq!(out, ">scaffold_1\nGAAA\n>scaffold_10\nTCCC\n");
}

#[test]
fn test_indel_pipeline_with_mixed_records() {
    let fasta = ">chr1\nAAACCCGGGTTT\n";
    let vcf = "\
chr1\t2\t.\tA\tT\t40\tPASS\tDP=11
chr1\t4\t.\tCCC\t.\t40\tPASS\tINDEL;IDV=6
chr1\t10\t.\tT\tTAA\t40\tPASS\tINDEL;IDV=4
";
    let (out, err) = run_files(fasta, vcf, true);
    assert_eq!(out, ">chr1\nATAGGGTAATT\n");
    assert_eq!(err, "");
}

#[test]
fn test_diagnostics_never_reach_primary_output() {
    let fasta = ">chr1\nACGT\n";
    let vcf = "chr1\t1\t.\tT\tG\t40\tPASS\tDP=5\nchr2\t1\t.\tA\tC\t40\tPASS\tDP=5\n";
    let (out, err) = run_files(fasta, vcf, false);
    assert_eq!(out, ">chr1\nGCGT\n");
    assert!(err.contains("chr1:1 A is not T"));
    assert!(err.contains("variant records remain"));
}
