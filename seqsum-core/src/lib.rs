//! # seqsum - Sequence Collection Summary Engine
//!
//! Statistical and structural summaries of DNA sequence collections:
//! composition statistics, k-mer rankings, repeated-substring tables, and
//! mirror-palindrome listings, reduced into a single immutable summary
//! record.
//!
//! ## Overview
//!
//! The engine consumes an ordered collection of sequences over the A/C/G/T
//! alphabet and runs a set of linear and near-linear scans:
//!
//! - **Composition**: GC content, single-base counts, dinucleotide
//!   frequencies (per sequence)
//! - **K-mer indexing**: sliding-window substring tallies with stable
//!   top-N rankings (per sequence, merged collection-wide)
//! - **Palindrome detection**: center expansion under a minimum length and
//!   a minimum-diversity filter (per sequence)
//! - **Repeat finding**: fixed-window tallies summed across the whole
//!   collection
//!
//! Per-sequence scans run in parallel via rayon; the cross-sequence merge
//! is a deterministic sequential fold, so the same input and configuration
//! always produce an identical [`AnalysisSummary`].
//!
//! ## Quick Start
//!
//! ```rust
//! use seqsum_core::{SummaryAnalyzer, config::AnalysisConfig};
//!
//! let analyzer = SummaryAnalyzer::new(AnalysisConfig {
//!     quiet: true,
//!     ..Default::default()
//! });
//!
//! let sequences = vec!["AGCTAGCTAGCTAGCTAGCTA".to_string()];
//! let summary = analyzer.analyze(&sequences)?;
//!
//! println!("mean GC: {:.3}", summary.gc.mean);
//! println!("palindromes: {}", summary.palindromes.total());
//! # Ok::<(), seqsum_core::types::AnalysisError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: analysis thresholds and engine options
//! - [`engine`]: the [`SummaryAnalyzer`] entry point
//! - [`composition`]: GC content and base/dinucleotide counting
//! - [`kmer`]: sliding-window k-mer tallies
//! - [`palindrome`]: center-expansion palindrome detection
//! - [`repeats`]: collection-wide repeat windows
//! - [`aggregate`]: cross-sequence reduction into the summary
//! - [`results`]: the [`AnalysisSummary`] record and its parts
//! - [`types`]: [`types::FrequencyTable`], palindrome records, errors
//! - [`progress`]: injected progress observers
//! - [`ingest`]: JSON and FASTA collection loading
//! - [`output`]: text, Markdown, and JSON report rendering
//!
//! ## Error Handling
//!
//! All fallible operations return
//! [`Result<T, AnalysisError>`](types::AnalysisError). Empty collections,
//! empty sequences handed to GC calculation, and zero-length windows are
//! rejected eagerly as typed errors, never converted to NaN or placeholder
//! zeros.

pub mod aggregate;
pub mod composition;
pub mod config;
pub mod engine;
pub mod ingest;
pub mod kmer;
pub mod output;
pub mod palindrome;
pub mod progress;
pub mod repeats;
pub mod results;
pub mod types;

pub use engine::SummaryAnalyzer;
pub use results::AnalysisSummary;
pub use types::AnalysisError;
