//! JSON report writer: the summary record serialized without reshaping.

use std::io::Write;

use crate::results::AnalysisSummary;
use crate::types::AnalysisError;

/// Writes the summary as pretty-printed JSON.
pub fn write_json_report<W: Write>(
    writer: &mut W,
    summary: &AnalysisSummary,
) -> Result<(), AnalysisError> {
    serde_json::to_writer_pretty(&mut *writer, summary)
        .map_err(|e| AnalysisError::Parse(e.to_string()))?;
    writeln!(writer)?;
    Ok(())
}
