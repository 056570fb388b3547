//! Variant record model and the per-scaffold variant table builder.
//!
//! The variant stream is tab-separated text, co-sorted with the reference:
//! records for a scaffold form a contiguous run, in the same scaffold order
//! as the reference stream. [`build_table`] consumes exactly the run
//! belonging to one scaffold and hands back the first line of the next run
//! as a read-ahead token, so the stream is never rewound.

use std::io::BufRead;

use fxhash::FxHashMap;

use crate::errors::ConsensusError;

/// One called site from the variant stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    /// 1-based offset within the scaffold's base sequence.
    pub position: u64,
    /// Reference allele; length 1 for SNPs, longer for deletions/indels.
    pub ref_allele: String,
    /// Replacement text; `"."` means emit nothing (pure deletion marker).
    pub alt_allele: String,
}

/// Variants for a single scaffold, keyed by 1-based position.
pub type VariantTable = FxHashMap<u64, VariantRecord>;

// Required tab-separated fields: through the attributes column.
const MIN_FIELDS: usize = 8;

const POSITION_FIELD: usize = 1;
const REF_FIELD: usize = 3;
const ALT_FIELD: usize = 4;
const ATTRIBUTES_FIELD: usize = 7;

/// Read the next variant line, skipping `#` comment lines and stripping the
/// trailing line terminator. Returns `None` once the stream is exhausted.
pub fn next_variant_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, ConsensusError> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        if line.starts_with('#') {
            continue;
        }
        return Ok(Some(std::mem::take(&mut line)));
    }
}

/// Exact match of the line's scaffold field against the scaffold name.
///
/// Deliberately not a prefix match: `scaffold_1` must never claim records
/// called on `scaffold_10`.
pub fn scaffold_matches(line: &str, scaffold: &str) -> bool {
    line.split('\t').next() == Some(scaffold)
}

/// Parse one variant line, applying the filtering policy. Returns `Ok(None)`
/// for lines dropped by policy:
///
/// * indel records (attributes field beginning with `INDEL`) when
///   `include_indels` is off;
/// * no-calls: non-indel records whose alternate allele is `.` or `N`.
///
/// Of a comma-separated alternate-allele list only the first value is kept.
fn parse_variant_line(
    line: &str,
    include_indels: bool,
) -> Result<Option<VariantRecord>, ConsensusError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(ConsensusError::MalformedVariantLine(line.to_string()));
    }

    let is_indel = fields[ATTRIBUTES_FIELD].starts_with("INDEL");
    if is_indel && !include_indels {
        return Ok(None);
    }

    let alt = fields[ALT_FIELD]
        .split(',')
        .next()
        .unwrap_or(fields[ALT_FIELD]);
    if !is_indel && (alt == "." || alt == "N") {
        return Ok(None);
    }

    let position: u64 =
        fields[POSITION_FIELD]
            .parse()
            .map_err(|_| ConsensusError::InvalidPosition {
                position: fields[POSITION_FIELD].to_string(),
                line: line.to_string(),
            })?;

    Ok(Some(VariantRecord {
        position,
        ref_allele: fields[REF_FIELD].to_string(),
        alt_allele: alt.to_string(),
    }))
}

/// Build the variant table for one scaffold.
///
/// `first_line` is the read-ahead token from the previous scaffold (or the
/// first non-comment line of the stream). Lines are consumed while their
/// scaffold field matches `scaffold`; the first non-matching line is returned
/// as the next read-ahead token, `None` once the stream is exhausted.
///
/// Inserting at an already-seen position overwrites the earlier record:
/// last parsed wins.
pub fn build_table<R: BufRead>(
    reader: &mut R,
    scaffold: &str,
    first_line: Option<String>,
    include_indels: bool,
) -> Result<(VariantTable, Option<String>), ConsensusError> {
    let mut table = VariantTable::default();
    let mut line = first_line;

    while let Some(current) = line {
        if !scaffold_matches(&current, scaffold) {
            return Ok((table, Some(current)));
        }
        if let Some(record) = parse_variant_line(&current, include_indels)? {
            table.insert(record.position, record);
        }
        line = next_variant_line(reader)?;
    }

    Ok((table, None))
}
