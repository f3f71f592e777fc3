//! Sequence ingestion helpers.
//!
//! The engine itself never touches storage; these functions are the thin
//! collaborators that turn a file into the ordered `Vec<String>` the engine
//! consumes. Two source formats are supported: the JSON collection format
//! (`{"sequences": [...]}`) and FASTA. Sequences are uppercased on the way
//! in so the GC and diversity logic sees the canonical A/C/G/T alphabet.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bio::io::fasta;
use serde::Deserialize;

use crate::types::AnalysisError;

/// On-disk JSON layout: a single object holding the ordered sequence list.
#[derive(Debug, Deserialize)]
struct SequenceFile {
    sequences: Vec<String>,
}

/// Reads a JSON sequence collection (`{"sequences": [...]}`).
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if the file cannot be opened and
/// [`AnalysisError::Parse`] for malformed JSON or a missing `sequences`
/// field.
pub fn read_json_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<String>, AnalysisError> {
    let file = File::open(path)?;
    let parsed: SequenceFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AnalysisError::Parse(e.to_string()))?;
    Ok(parsed
        .sequences
        .into_iter()
        .map(|s| s.to_ascii_uppercase())
        .collect())
}

/// Reads all sequences from a FASTA file, in record order.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if the file cannot be opened and
/// [`AnalysisError::Parse`] for malformed records.
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<String>, AnalysisError> {
    let file = File::open(path)?;
    let reader = fasta::Reader::new(file);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| AnalysisError::Parse(e.to_string()))?;
        sequences.push(String::from_utf8_lossy(record.seq()).to_ascii_uppercase());
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_json_sequences() {
        let file = temp_file_with(r#"{"sequences": ["ACGT", "ggcc"]}"#);
        let sequences = read_json_sequences(file.path()).unwrap();
        assert_eq!(sequences, vec!["ACGT".to_string(), "GGCC".to_string()]);
    }

    #[test]
    fn test_read_json_empty_list() {
        let file = temp_file_with(r#"{"sequences": []}"#);
        let sequences = read_json_sequences(file.path()).unwrap();
        assert!(sequences.is_empty());
    }

    #[test]
    fn test_read_json_malformed() {
        let file = temp_file_with(r#"{"reads": ["ACGT"]}"#);
        let result = read_json_sequences(file.path());
        assert!(matches!(result, Err(AnalysisError::Parse(_))));
    }

    #[test]
    fn test_read_json_missing_file() {
        let result = read_json_sequences("no_such_file.json");
        assert!(matches!(result, Err(AnalysisError::Io(_))));
    }

    #[test]
    fn test_read_fasta_sequences() {
        let file = temp_file_with(">seq1\nACGT\nACGT\n>seq2 description\nttaa\n");
        let sequences = read_fasta_sequences(file.path()).unwrap();
        assert_eq!(
            sequences,
            vec!["ACGTACGT".to_string(), "TTAA".to_string()]
        );
    }

    #[test]
    fn test_read_fasta_empty_file() {
        let file = temp_file_with("");
        let sequences = read_fasta_sequences(file.path()).unwrap();
        assert!(sequences.is_empty());
    }
}
