//! Consensus rewriter: single pass over one scaffold's buffered sequence
//! lines, substituting alternate alleles at called positions.
//!
//! Positions and skip windows are computed over the logical concatenation of
//! the scaffold's bases, but output is produced line by line so the original
//! FASTA wrapping survives. A multi-base reference allele may therefore span
//! a wrap point; the skip counter carries across line boundaries.

use crate::variant::{VariantRecord, VariantTable};

/// Output of [`rewrite_scaffold`]: one rewritten line per input line, plus
/// any reference-base mismatch diagnostics collected along the way.
#[derive(Debug, Default)]
pub struct RewrittenScaffold {
    pub lines: Vec<String>,
    pub diagnostics: Vec<String>,
}

/// Rewrite one scaffold's sequence lines against its variant table.
///
/// For each base, in 1-based position order:
///
/// * no table entry: the base is emitted unchanged;
/// * a table entry: for a single-base reference allele that disagrees with
///   the actual base, a diagnostic is recorded (substitution proceeds
///   regardless); the alternate allele is emitted unless it is `"."`; a
///   multi-base reference allele opens a skip window over the following
///   `len(ref) - 1` bases, which are consumed without emission.
///
/// Inside a skip window, a call whose reference allele is strictly longer
/// than the active call's wins: the window restarts from the consumed
/// position (`skip = len(ref) - 1`), so the consumed span ends exactly at
/// the end of the longest call. Shorter or equal-length nested calls are
/// consumed silently, with no effect and no alternate-allele emission.
pub fn rewrite_scaffold(
    lines: &[String],
    table: &VariantTable,
    scaffold: &str,
) -> RewrittenScaffold {
    let mut out = RewrittenScaffold {
        lines: Vec::with_capacity(lines.len()),
        diagnostics: Vec::new(),
    };

    // 1-based position over the concatenated bases, shared across lines.
    let mut pos: u64 = 0;
    // Bases still to consume without emission, and the call that opened
    // (or last extended) the window.
    let mut skip: usize = 0;
    let mut active: Option<&VariantRecord> = None;

    for line in lines {
        let mut rewritten = String::with_capacity(line.len());
        for base in line.chars() {
            pos += 1;

            if skip > 0 {
                match (table.get(&pos), active) {
                    (Some(inner), Some(current))
                        if inner.ref_allele.len() > current.ref_allele.len() =>
                    {
                        // Strictly longer call starting inside the window:
                        // the window restarts from its position.
                        skip = inner.ref_allele.len() - 1;
                        active = Some(inner);
                    }
                    _ => skip -= 1,
                }
                continue;
            }

            match table.get(&pos) {
                Some(var) => {
                    if var.ref_allele.len() == 1 && !var.ref_allele.starts_with(base) {
                        out.diagnostics
                            .push(format!("{scaffold}:{pos} {base} is not {}", var.ref_allele));
                    }
                    if var.alt_allele != "." {
                        rewritten.push_str(&var.alt_allele);
                    }
                    skip = var.ref_allele.len() - 1;
                    active = Some(var);
                }
                None => rewritten.push(base),
            }
        }
        out.lines.push(rewritten);
    }

    out
}
