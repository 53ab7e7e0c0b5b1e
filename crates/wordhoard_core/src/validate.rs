//! Validation shared by every layer that accepts user-supplied words and text.
//!
//! The dictionary file format has no escaping, so anything that would break a
//! `word::pos::text` line is rejected here before it reaches the index.

use crate::error::{CoreError, CoreResult};

/// Field separator of the dictionary file format.
pub const DELIMITER: &str = "::";

/// Checks that `word` can be stored as the first field of a record.
///
/// # Errors
///
/// Returns [`CoreError::InvalidWord`] if the word is empty, contains the
/// delimiter or a line break, or ends in `:`.
pub fn validate_word(word: &str) -> CoreResult<()> {
    check_field(word).map_err(CoreError::invalid_word)?;
    // "a:" would be written as "a:::pos::text" and split after the first colon
    if word.ends_with(':') {
        return Err(CoreError::invalid_word("must not end with ':'"));
    }
    Ok(())
}

/// Checks that `text` can be stored as the definition field of a record.
///
/// # Errors
///
/// Returns [`CoreError::InvalidText`] if the text is empty, contains the
/// delimiter, or contains a line break.
pub fn validate_text(text: &str) -> CoreResult<()> {
    check_field(text).map_err(CoreError::invalid_text)
}

fn check_field(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err("must not be empty")
    } else if value.contains(DELIMITER) {
        Err("must not contain \"::\"")
    } else if value.contains(['\n', '\r']) {
        Err("must not contain a line break")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_values() {
        assert!(validate_word("cat").is_ok());
        assert!(validate_text("a small domesticated animal").is_ok());
        assert!(validate_text("ratio 1:2").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(validate_word(""), Err(CoreError::InvalidWord { .. })));
        assert!(matches!(validate_text(""), Err(CoreError::InvalidText { .. })));
    }

    #[test]
    fn rejects_delimiter() {
        assert!(validate_word("a::b").is_err());
        assert!(validate_text("one::two").is_err());
    }

    #[test]
    fn rejects_word_ending_in_colon() {
        assert!(validate_word("ratio:").is_err());
        assert!(validate_word(":ratio").is_ok());
    }

    #[test]
    fn rejects_line_breaks() {
        assert!(validate_text("first\nsecond").is_err());
        assert!(validate_word("cat\r").is_err());
    }
}
