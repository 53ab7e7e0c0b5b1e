//! Verify command implementation.

use super::CommandError;
use std::path::Path;
use wordhoard_core::{Config, DictionaryIndex};

/// Runs the verify command.
pub fn run(path: &Path, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("Verifying dictionary at {:?}", path);
    println!();

    let (_, index) = super::open_dictionary(path, config)?;
    print_summary(&index);

    println!();
    match index.check_invariants() {
        Ok(()) => {
            println!("✓ Dictionary verification passed");
            Ok(())
        }
        Err(e) => {
            println!("  ERROR: {}", e);
            println!("✗ Dictionary verification failed");
            Err(CommandError::VerificationFailed.into())
        }
    }
}

fn print_summary(index: &DictionaryIndex) {
    println!(
        "  words: {}, definitions: {}, absorbed duplicates: {}",
        index.word_count(),
        index.definition_count(),
        index.absorbed_duplicates()
    );
    for (pos, count) in index.usage() {
        println!("    {}: {}", pos, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn valid_file_passes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "cat::noun::a pet\ncat::verb::to vomit\ndog::noun::a friend\n").unwrap();
        run(&path, Config::default()).unwrap();
    }

    #[test]
    fn duplicate_lines_pass() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "cat::noun::a pet\ncat::noun::a pet\n").unwrap();
        run(&path, Config::default()).unwrap();
    }

    #[test]
    fn malformed_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "cat::noun::a pet\ncat noun").unwrap();
        assert!(run(&path, Config::default()).is_err());
    }
}
