//! # seqsum - Sequence Collection Summary CLI
//!
//! Command-line front end for the seqsum analysis engine.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize a JSON sequence collection to stdout
//! seqsum -i dna_sequences.json
//!
//! # Markdown report written to a file
//! seqsum -i sequences.fasta -f md -o analysis_summary.md
//!
//! # Custom thresholds
//! seqsum -i dna_sequences.json --palindrome-min-length 12 --repeat-window 10
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: input file, JSON (`{"sequences": [...]}`) or FASTA
//! - `--input-format <FORMAT>`: json or fasta (default: by file extension)
//! - `-o, --output <FILE>`: output file (default: stdout)
//! - `-f, --format <FORMAT>`: report format: text, md, json (default: text)
//! - `-q, --quiet`: suppress progress messages
//! - `--threads <N>`: worker threads for per-sequence profiling

use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::{Arg, ArgAction, Command};
use seqsum_core::config::AnalysisConfig;
use seqsum_core::output::{write_summary, ReportFormat};
use seqsum_core::SummaryAnalyzer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("seqsum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Statistical and structural summaries of DNA sequence collections")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("Input file with the sequence collection"),
        )
        .arg(
            Arg::new("input-format")
                .long("input-format")
                .value_name("FORMAT")
                .help("Input format: json or fasta (default: by file extension)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Report format: text, md, json")
                .default_value("text"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress progress messages"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .value_name("N")
                .help("Number of worker threads (default: all cores)"),
        )
        .arg(
            Arg::new("palindrome-min-length")
                .long("palindrome-min-length")
                .value_name("BP")
                .help("Minimum palindrome span length [default: 20]"),
        )
        .arg(
            Arg::new("palindrome-min-diversity")
                .long("palindrome-min-diversity")
                .value_name("N")
                .help("Minimum distinct bases in a palindrome [default: 3]"),
        )
        .arg(
            Arg::new("repeat-window")
                .long("repeat-window")
                .value_name("BP")
                .help("Window length of the repeat scan [default: 20]"),
        )
        .arg(
            Arg::new("repeat-top")
                .long("repeat-top")
                .value_name("N")
                .help("Entries kept in the repeat ranking [default: 10]"),
        )
        .arg(
            Arg::new("kmer-top")
                .long("kmer-top")
                .value_name("N")
                .help("Entries kept in each k-mer ranking [default: 5]"),
        )
        .get_matches();

    let mut config = AnalysisConfig {
        quiet: matches.get_flag("quiet"),
        ..Default::default()
    };

    if let Some(threads) = matches.get_one::<String>("threads") {
        config.num_threads = Some(threads.parse().map_err(|_| "Invalid thread count")?);
    }
    if let Some(value) = matches.get_one::<String>("palindrome-min-length") {
        config.palindrome_min_length =
            value.parse().map_err(|_| "Invalid palindrome length")?;
    }
    if let Some(value) = matches.get_one::<String>("palindrome-min-diversity") {
        config.palindrome_min_diversity =
            value.parse().map_err(|_| "Invalid palindrome diversity")?;
    }
    if let Some(value) = matches.get_one::<String>("repeat-window") {
        config.repeat_window = value.parse().map_err(|_| "Invalid repeat window")?;
    }
    if let Some(value) = matches.get_one::<String>("repeat-top") {
        config.repeat_top_n = value.parse().map_err(|_| "Invalid repeat ranking size")?;
    }
    if let Some(value) = matches.get_one::<String>("kmer-top") {
        config.kmer_top_n = value.parse().map_err(|_| "Invalid k-mer ranking size")?;
    }

    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("text") | None => ReportFormat::Text,
        Some("md") | Some("markdown") => ReportFormat::Markdown,
        Some("json") => ReportFormat::Json,
        _ => return Err("Invalid report format".into()),
    };

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let input_format = match matches.get_one::<String>("input-format").map(String::as_str) {
        Some("json") => InputFormat::Json,
        Some("fasta") | Some("fa") => InputFormat::Fasta,
        Some(_) => return Err("Invalid input format".into()),
        None => detect_input_format(input),
    };

    let quiet = config.quiet;
    let analyzer = SummaryAnalyzer::with_thread_pool(config)?;
    let summary = match input_format {
        InputFormat::Json => analyzer.analyze_json_file(input)?,
        InputFormat::Fasta => analyzer.analyze_fasta_file(input)?,
    };

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    write_summary(&mut writer, &summary, format)?;
    writer.flush()?;

    if !quiet {
        eprintln!(
            "Analysis complete! {} sequences, {} palindromes, {} unique repeat windows.",
            summary.sequence_count,
            summary.palindromes.total(),
            summary.repeats.unique
        );
    }

    Ok(())
}

/// Input file formats the CLI can ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Json,
    Fasta,
}

/// Guesses the input format from the file extension; JSON when unsure.
fn detect_input_format(path: &str) -> InputFormat {
    let lower = path.to_ascii_lowercase();
    if lower.ends_with(".fa") || lower.ends_with(".fasta") || lower.ends_with(".fna") {
        InputFormat::Fasta
    } else {
        InputFormat::Json
    }
}
