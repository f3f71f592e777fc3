//! Shared fixtures for the CLI integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Writes a JSON collection file and returns the handle keeping it alive.
pub fn json_fixture(sequences: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    let quoted: Vec<String> = sequences.iter().map(|s| format!("\"{s}\"")).collect();
    write!(file, "{{\"sequences\": [{}]}}", quoted.join(", ")).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}

/// Writes a FASTA collection file with one record per sequence.
pub fn fasta_fixture(sequences: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".fasta")
        .tempfile()
        .expect("create temp file");
    for (i, seq) in sequences.iter().enumerate() {
        writeln!(file, ">seq{i}").expect("write fixture");
        writeln!(file, "{seq}").expect("write fixture");
    }
    file.flush().expect("flush fixture");
    file
}

/// Two 20 bp sequences; the first carries mirror palindromes around its
/// ACGTGCA cores, the second is a pure AGCT tandem repeat.
pub const SEQUENCES: [&str; 2] = ["TTACGTGCATTACGTGCATT", "AGCTAGCTAGCTAGCTAGCT"];
