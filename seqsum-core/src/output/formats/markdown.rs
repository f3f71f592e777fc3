//! Markdown report writer.

use std::io::Write;

use crate::results::{AnalysisSummary, LengthStatistics};
use crate::types::AnalysisError;

/// Writes the summary as a Markdown document with one section per group.
pub fn write_markdown_report<W: Write>(
    writer: &mut W,
    summary: &AnalysisSummary,
) -> Result<(), AnalysisError> {
    writeln!(
        writer,
        "# Sequence Collection Analysis Summary\n\n{} sequences analyzed.\n",
        summary.sequence_count
    )?;

    writeln!(writer, "## GC Content Distribution\n")?;
    writeln!(writer, "- Mean: {:.2}", summary.gc.mean)?;
    writeln!(writer, "- Min: {:.2}", summary.gc.min)?;
    writeln!(writer, "- Max: {:.2}", summary.gc.max)?;
    writeln!(writer)?;
    writeln!(writer, "| Bin center | Sequences |")?;
    writeln!(writer, "|-----------:|----------:|")?;
    for bin in summary.gc.distribution.iter().filter(|bin| bin.count > 0) {
        writeln!(writer, "| {:.2} | {} |", bin.center, bin.count)?;
    }
    writeln!(writer)?;

    writeln!(writer, "## Dinucleotide Frequencies\n")?;
    writeln!(writer, "| Pair | Count |")?;
    writeln!(writer, "|------|------:|")?;
    for entry in &summary.dinucleotides {
        writeln!(writer, "| {} | {} |", entry.key, entry.count)?;
    }
    writeln!(writer)?;

    writeln!(writer, "## Most Common k-mers\n")?;
    for ranking in &summary.kmer_rankings {
        let entries: Vec<String> = ranking
            .top
            .iter()
            .map(|entry| format!("{} ({})", entry.key, entry.count))
            .collect();
        writeln!(writer, "- **{}-mers**: {}", ranking.k, entries.join(", "))?;
    }
    writeln!(writer)?;

    writeln!(
        writer,
        "## Palindromes\n\nLength >= {}, distinct bases >= {}. Total found: {}.\n",
        summary.palindromes.min_length,
        summary.palindromes.min_diversity,
        summary.palindromes.total()
    )?;
    for record in &summary.palindromes.records {
        writeln!(
            writer,
            "- sequence {}: `{}`",
            record.sequence_index, record.substring
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "## Sequence Lengths\n")?;
    match &summary.lengths {
        LengthStatistics::Uniform { length } => {
            writeln!(writer, "All sequences have the same length: {length} bp.")?;
        }
        LengthStatistics::Varied { average, min, max } => {
            writeln!(writer, "- Average length: {average:.2} bp")?;
            writeln!(writer, "- Shortest sequence: {min} bp")?;
            writeln!(writer, "- Longest sequence: {max} bp")?;
        }
    }
    writeln!(writer)?;

    writeln!(
        writer,
        "## Repeat Sequences\n\nWindow {}, {} unique windows.\n",
        summary.repeats.window, summary.repeats.unique
    )?;
    writeln!(writer, "| Repeat | Count |")?;
    writeln!(writer, "|--------|------:|")?;
    for entry in &summary.repeats.top {
        writeln!(writer, "| `{}` | {} |", entry.key, entry.count)?;
    }
    writeln!(writer)?;

    writeln!(writer, "## Nucleotide Composition\n")?;
    writeln!(writer, "| Base | Count | Fraction |")?;
    writeln!(writer, "|------|------:|---------:|")?;
    for c in &summary.composition {
        writeln!(writer, "| {} | {} | {:.3} |", c.base, c.count, c.fraction)?;
    }

    Ok(())
}
