mod common;

use assert_cmd::Command;
use common::{fasta_fixture, json_fixture, SEQUENCES};
use predicates::prelude::*;

fn seqsum() -> Command {
    Command::cargo_bin("seqsum").expect("binary builds")
}

#[test]
fn fasta_input_detected_by_extension() {
    let input = fasta_fixture(&SEQUENCES);
    seqsum()
        .args(["-i", input.path().to_str().unwrap(), "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sequence Collection Analysis Summary (2 sequences)",
        ));
}

#[test]
fn input_format_flag_overrides_extension() {
    // JSON content behind a .txt name; the flag must win over detection.
    let mut builder = tempfile::Builder::new();
    builder.suffix(".txt");
    let mut file = builder.tempfile().expect("create temp file");
    std::io::Write::write_all(
        &mut file,
        b"{\"sequences\": [\"ACGTACGTACGT\", \"TTTTAAAACCCC\"]}",
    )
    .expect("write fixture");

    seqsum()
        .args(["-i", file.path().to_str().unwrap()])
        .args(["--input-format", "json", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 sequences)"));
}

#[test]
fn lowercase_sequences_are_normalized() {
    let mut builder = tempfile::Builder::new();
    builder.suffix(".json");
    let mut file = builder.tempfile().expect("create temp file");
    std::io::Write::write_all(&mut file, b"{\"sequences\": [\"acgtacgtacgt\"]}")
        .expect("write fixture");

    seqsum()
        .args(["-i", file.path().to_str().unwrap()])
        .args(["-f", "json", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"base\": \"A\""));
}

#[test]
fn missing_input_file_fails() {
    seqsum()
        .args(["-i", "/nonexistent/sequences.json"])
        .assert()
        .failure();
}

#[test]
fn empty_collection_is_rejected() {
    let input = json_fixture(&[]);
    seqsum()
        .args(["-i", input.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("EmptyCollection"));
}

#[test]
fn invalid_report_format_is_rejected() {
    let input = json_fixture(&SEQUENCES);
    seqsum()
        .args(["-i", input.path().to_str().unwrap()])
        .args(["-f", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid report format"));
}

#[test]
fn quiet_flag_suppresses_progress() {
    let input = json_fixture(&SEQUENCES);
    seqsum()
        .args(["-i", input.path().to_str().unwrap(), "-q"])
        .assert()
        .success()
        .stderr("");

    seqsum()
        .args(["-i", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Analysis complete!"));
}

#[test]
fn help_lists_threshold_flags() {
    seqsum()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--palindrome-min-length"))
        .stdout(predicate::str::contains("--repeat-window"));
}
