//! Plain-text report writer with one numbered section per result group.

use std::io::Write;

use crate::results::{AnalysisSummary, LengthStatistics};
use crate::types::AnalysisError;

/// Writes the summary as a numbered plain-text report.
pub fn write_text_report<W: Write>(
    writer: &mut W,
    summary: &AnalysisSummary,
) -> Result<(), AnalysisError> {
    writeln!(
        writer,
        "Sequence Collection Analysis Summary ({} sequences)",
        summary.sequence_count
    )?;
    writeln!(writer)?;

    writeln!(writer, "1. GC Content Distribution:")?;
    writeln!(writer, "   - Mean: {:.2}", summary.gc.mean)?;
    writeln!(writer, "   - Min: {:.2}", summary.gc.min)?;
    writeln!(writer, "   - Max: {:.2}", summary.gc.max)?;
    writeln!(writer, "   - Distribution:")?;
    let bins: Vec<String> = summary
        .gc
        .distribution
        .iter()
        .filter(|bin| bin.count > 0)
        .map(|bin| format!("{:.2}: {:3}", bin.center, bin.count))
        .collect();
    writeln!(writer, "     {}", bins.join("  "))?;
    writeln!(writer)?;

    writeln!(writer, "2. Dinucleotide Frequencies:")?;
    let pairs: Vec<String> = summary
        .dinucleotides
        .iter()
        .map(|entry| entry.to_string())
        .collect();
    writeln!(writer, "   {}", pairs.join("  "))?;
    writeln!(writer)?;

    writeln!(writer, "3. Most Common k-mers:")?;
    for ranking in &summary.kmer_rankings {
        let entries: Vec<String> = ranking
            .top
            .iter()
            .map(|entry| format!("{} ({})", entry.key, entry.count))
            .collect();
        writeln!(writer, "   {}-mers: {}", ranking.k, entries.join(", "))?;
    }
    writeln!(writer)?;

    writeln!(
        writer,
        "4. Palindromes (length >= {}, distinct bases >= {}):",
        summary.palindromes.min_length, summary.palindromes.min_diversity
    )?;
    writeln!(writer, "   Total found: {}", summary.palindromes.total())?;
    for record in &summary.palindromes.records {
        writeln!(
            writer,
            "   [seq {}] {}",
            record.sequence_index, record.substring
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "5. Sequence Lengths:")?;
    match &summary.lengths {
        LengthStatistics::Uniform { length } => {
            writeln!(
                writer,
                "   All sequences have the same length: {length} bp"
            )?;
        }
        LengthStatistics::Varied { average, min, max } => {
            writeln!(writer, "   - Average length: {average:.2} bp")?;
            writeln!(writer, "   - Shortest sequence: {min} bp")?;
            writeln!(writer, "   - Longest sequence: {max} bp")?;
        }
    }
    writeln!(writer)?;

    writeln!(
        writer,
        "6. Repeat Sequences (window {}):",
        summary.repeats.window
    )?;
    writeln!(
        writer,
        "   - Unique repeat sequences found: {}",
        summary.repeats.unique
    )?;
    writeln!(writer, "   - Top {}:", summary.repeats.top.len())?;
    for entry in &summary.repeats.top {
        writeln!(writer, "     {entry}")?;
    }
    writeln!(writer)?;

    writeln!(writer, "7. Nucleotide Composition:")?;
    let fractions: Vec<String> = summary
        .composition
        .iter()
        .map(|c| format!("{}: {:.3}", c.base, c.fraction))
        .collect();
    writeln!(writer, "   {}", fractions.join("  "))?;

    Ok(())
}
