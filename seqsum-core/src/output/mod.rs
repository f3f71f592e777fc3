//! Report rendering for [`AnalysisSummary`] records.
//!
//! The summary itself is a plain data record; everything presentational
//! lives here, behind a single dispatch function, so formats can be swapped
//! without touching the engine.
//!
//! ## Supported formats
//!
//! - **Text**: a numbered-section report (GC distribution, dinucleotide
//!   frequencies, k-mer rankings, palindromes, lengths, repeats,
//!   composition)
//! - **Markdown**: the same grouping with headings, for saving alongside
//!   notebooks and READMEs
//! - **Json**: the summary record serialized as-is
//!
//! ## Examples
//!
//! ```rust
//! use seqsum_core::{SummaryAnalyzer, config::AnalysisConfig};
//! use seqsum_core::output::{write_summary, ReportFormat};
//!
//! let analyzer = SummaryAnalyzer::new(AnalysisConfig {
//!     quiet: true,
//!     ..Default::default()
//! });
//! let summary = analyzer.analyze(&["AGCTAGCTAGCTAGCTAGCTA".to_string()])?;
//!
//! let mut buffer = Vec::new();
//! write_summary(&mut buffer, &summary, ReportFormat::Text)?;
//! assert!(String::from_utf8_lossy(&buffer).contains("GC Content"));
//! # Ok::<(), seqsum_core::types::AnalysisError>(())
//! ```

use std::io::Write;

use crate::results::AnalysisSummary;
use crate::types::AnalysisError;

mod formats {
    pub mod json;
    pub mod markdown;
    pub mod text;
}

use formats::{json::write_json_report, markdown::write_markdown_report, text::write_text_report};

/// Output format for rendered summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain-text report with numbered sections.
    Text,
    /// Markdown report.
    Markdown,
    /// The summary record as pretty-printed JSON.
    Json,
}

/// Renders a summary in the requested format.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if writing fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &AnalysisSummary,
    format: ReportFormat,
) -> Result<(), AnalysisError> {
    match format {
        ReportFormat::Text => write_text_report(writer, summary),
        ReportFormat::Markdown => write_markdown_report(writer, summary),
        ReportFormat::Json => write_json_report(writer, summary),
    }
}
