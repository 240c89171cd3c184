//! Index fingerprints must not change between runs of the same build

use std::process::Command;

use pretty_assertions::assert_eq;
use staffdex_core::{Directory, FuzzyEngine, PersonRecord};

/// Set when this test binary re-runs itself to report a fingerprint
const CHILD_ENV: &str = "STAFFDEX_FINGERPRINT_CHILD";
const MARKER: &str = "FINGERPRINT=";

fn fingerprint() -> String {
    let records = ["Alice Smith", "Bob Lee", "Marco Chen", "Bob Lee"]
        .iter()
        .map(|name| PersonRecord::new(*name, "someone@example.com", "Engineer", "Platform", 1))
        .collect();
    FuzzyEngine::build(Directory::from_records(records))
        .index_hash()
        .to_string()
}

#[test]
fn test_report_fingerprint() {
    if std::env::var_os(CHILD_ENV).is_some() {
        println!("{MARKER}{}", fingerprint());
    }
}

fn fingerprint_from_new_process() -> String {
    let output = Command::new(std::env::current_exe().unwrap())
        .args(["test_report_fingerprint", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();
    assert!(output.status.success(), "child run failed: {output:?}");

    // libtest may print the test name on the same line as our output
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| {
            let start = line.find(MARKER)? + MARKER.len();
            line.get(start..start + 16).map(str::to_string)
        })
        .unwrap_or_else(|| panic!("no fingerprint in child output:\n{stdout}"))
}

#[test]
fn test_fingerprint_is_stable_across_processes() {
    let local = fingerprint();
    assert_eq!(local.len(), 16);

    assert_eq!(fingerprint_from_new_process(), local);
    assert_eq!(fingerprint_from_new_process(), local);
}
