//! Add command implementation.

use std::path::Path;
use tracing::info;
use wordhoard_core::{validate_text, validate_word, AddOutcome, Config};

/// Runs the add command: adds one definition and saves the file.
pub fn run(
    path: &Path,
    config: Config,
    word: &str,
    part_of_speech: &str,
    text: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    validate_word(word)?;
    validate_text(text)?;
    let (mut file, mut index) = super::open_dictionary(path, config)?;

    match index.add(word, part_of_speech, text)? {
        AddOutcome::Duplicate => {
            println!("{word} already has that definition; nothing to save");
            return Ok(());
        }
        AddOutcome::NewWord => println!("Added new word {word}"),
        AddOutcome::Added => println!("Added definition to {word}"),
    }

    file.save(&index)?;
    info!(path = %file.path().display(), "dictionary written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wordhoard_core::LineEnding;

    #[test]
    fn adds_and_saves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "dog::noun::a friend").unwrap();

        run(&path, Config::new().line_ending(LineEnding::Lf), "cat", "noun", "a pet").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "cat::noun::a pet\ndog::noun::a friend"
        );
    }

    #[test]
    fn creates_missing_file_when_allowed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.txt");

        assert!(run(&path, Config::default(), "cat", "noun", "a pet").is_err());
        run(&path, Config::new().create_if_missing(true), "cat", "noun", "a pet").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "cat::noun::a pet");
    }

    #[test]
    fn rejects_invalid_input_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "dog::noun::a friend").unwrap();

        assert!(run(&path, Config::default(), "cat", "pronoun", "a pet").is_err());
        assert!(run(&path, Config::default(), "cat", "noun", "a::pet").is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "dog::noun::a friend");
    }
}
