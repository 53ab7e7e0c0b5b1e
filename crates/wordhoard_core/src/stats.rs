//! Dictionary statistics.
//!
//! A [`Statistics`] value is a snapshot taken by
//! [`DictionaryIndex::statistics`](crate::DictionaryIndex::statistics); it
//! does not track later changes.

use serde::Serialize;
use std::fmt;

/// Summary figures for a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of distinct words.
    pub words: usize,
    /// Number of definitions across all words.
    pub definitions: usize,
    /// Definitions per word, formatted with exactly three decimals.
    pub definitions_per_word: String,
    /// Number of distinct parts of speech in use.
    pub parts_of_speech: usize,
    /// Lexicographically first word, empty if the dictionary is empty.
    pub first_word: String,
    /// Lexicographically last word, empty if the dictionary is empty.
    pub last_word: String,
}

impl Statistics {
    pub(crate) fn new(
        words: usize,
        definitions: usize,
        parts_of_speech: usize,
        first_word: Option<&str>,
        last_word: Option<&str>,
    ) -> Self {
        Self {
            words,
            definitions,
            definitions_per_word: format_average(definitions, words),
            parts_of_speech,
            first_word: first_word.unwrap_or_default().to_string(),
            last_word: last_word.unwrap_or_default().to_string(),
        }
    }
}

/// Formats `definitions / words` with three decimals, `0.000` when there are
/// no words.
#[must_use]
pub fn format_average(definitions: usize, words: usize) -> String {
    if words == 0 {
        return format!("{:.3}", 0.0);
    }
    format!("{:.3}", definitions as f64 / words as f64)
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "words: {}", self.words)?;
        writeln!(f, "definitions: {}", self.definitions)?;
        writeln!(f, "definitions per word: {}", self.definitions_per_word)?;
        writeln!(f, "parts of speech: {}", self.parts_of_speech)?;
        writeln!(f, "first word: {}", self.first_word)?;
        write!(f, "last word: {}", self.last_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_guards_zero_words() {
        assert_eq!(format_average(0, 0), "0.000");
    }

    #[test]
    fn average_three_decimals() {
        assert_eq!(format_average(1, 1), "1.000");
        assert_eq!(format_average(1, 2), "0.500");
        assert_eq!(format_average(2, 3), "0.667");
        assert_eq!(format_average(10, 4), "2.500");
    }

    #[test]
    fn display_layout() {
        let stats = Statistics::new(2, 3, 2, Some("apple"), Some("zebra"));
        assert_eq!(
            stats.to_string(),
            "words: 2\ndefinitions: 3\ndefinitions per word: 1.500\n\
             parts of speech: 2\nfirst word: apple\nlast word: zebra"
        );
    }

    #[test]
    fn empty_words_render_blank() {
        let stats = Statistics::new(0, 0, 0, None, None);
        assert!(stats.to_string().ends_with("first word: \nlast word: "));
    }

    #[test]
    fn serializes_to_json() {
        let stats = Statistics::new(1, 1, 1, Some("cat"), Some("cat"));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["words"], 1);
        assert_eq!(json["definitions_per_word"], "1.000");
        assert_eq!(json["first_word"], "cat");
    }
}
