//! Stream orchestrator: drives the reference FASTA scaffold by scaffold,
//! building each scaffold's variant table and rewriting its bases.
//!
//! The variant stream is read in lock-step with the reference; the only
//! state carried across scaffold boundaries is the read-ahead token (the
//! first variant line belonging to a later scaffold).

use std::io::{BufRead, Write};

use crate::errors::ConsensusError;
use crate::rewrite::rewrite_scaffold;
use crate::variant::{build_table, next_variant_line};

/// Options threaded through a consensus run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsensusOptions {
    /// Apply multi-base (indel) records with skip/extend semantics. When
    /// off, indel records are ignored entirely.
    pub include_indels: bool,
}

struct ScaffoldBuffer {
    name: String,
    lines: Vec<String>,
}

/// Overlay the variant stream onto the reference stream, writing consensus
/// FASTA to `out` and diagnostics to `err`.
///
/// Header lines are echoed verbatim; sequence lines are rewritten with the
/// original wrapping preserved. Scaffold identity is the first
/// whitespace-delimited token after `>`. Variant records left unconsumed
/// after the last scaffold produce a single summary warning on `err`,
/// never an error.
pub fn apply_consensus<R, V, O, E>(
    fasta: R,
    mut variants: V,
    out: &mut O,
    err: &mut E,
    options: ConsensusOptions,
) -> Result<(), ConsensusError>
where
    R: BufRead,
    V: BufRead,
    O: Write,
    E: Write,
{
    let mut token = next_variant_line(&mut variants)?;
    let mut current: Option<ScaffoldBuffer> = None;

    for line in fasta.lines() {
        let line = line?;
        if let Some(rest) = line.strip_prefix('>') {
            if let Some(scaffold) = current.take() {
                token = flush_scaffold(scaffold, &mut variants, token, out, err, options)?;
            }
            writeln!(out, "{line}")?;
            let name = rest.split_whitespace().next().unwrap_or("").to_string();
            current = Some(ScaffoldBuffer {
                name,
                lines: Vec::new(),
            });
        } else if let Some(scaffold) = current.as_mut() {
            scaffold.lines.push(line);
        } else if !line.trim().is_empty() {
            return Err(ConsensusError::SequenceBeforeHeader);
        }
    }

    if let Some(scaffold) = current.take() {
        token = flush_scaffold(scaffold, &mut variants, token, out, err, options)?;
    }

    if token.is_some() {
        writeln!(
            err,
            "warning: variant records remain for scaffolds not present in the reference"
        )?;
    }

    Ok(())
}

fn flush_scaffold<V, O, E>(
    scaffold: ScaffoldBuffer,
    variants: &mut V,
    token: Option<String>,
    out: &mut O,
    err: &mut E,
    options: ConsensusOptions,
) -> Result<Option<String>, ConsensusError>
where
    V: BufRead,
    O: Write,
    E: Write,
{
    let (table, next_token) = build_table(variants, &scaffold.name, token, options.include_indels)?;
    let rewritten = rewrite_scaffold(&scaffold.lines, &table, &scaffold.name);
    for diagnostic in &rewritten.diagnostics {
        writeln!(err, "{diagnostic}")?;
    }
    for line in &rewritten.lines {
        writeln!(out, "{line}")?;
    }
    Ok(next_token)
}
