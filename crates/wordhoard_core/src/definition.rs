//! A single (part of speech, text) meaning of a word.

use crate::error::CoreResult;
use crate::types::PartOfSpeech;
use crate::validate::DELIMITER;

/// One definition of a word.
///
/// Ordered by part of speech, then by text. Definitions are never mutated
/// once created: changing the text of a definition held in an ordered set
/// means removing it and inserting a replacement.
///
/// The text is stored as given. Callers accepting user input check it with
/// [`crate::validate_text`] first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Definition {
    part_of_speech: PartOfSpeech,
    text: String,
}

impl Definition {
    /// Creates a definition from an already-parsed tag.
    #[must_use]
    pub fn new(part_of_speech: PartOfSpeech, text: impl Into<String>) -> Self {
        Self {
            part_of_speech,
            text: text.into(),
        }
    }

    /// Creates a definition from a raw tag string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::InvalidPartOfSpeech`] if `tag` is not in
    /// the closed set.
    pub fn parse(tag: &str, text: impl Into<String>) -> CoreResult<Self> {
        Ok(Self::new(PartOfSpeech::parse(tag)?, text))
    }

    /// Returns the part of speech.
    #[must_use]
    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.part_of_speech
    }

    /// Returns the definition text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns a copy carrying the same part of speech and new text.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(self.part_of_speech, text)
    }

    /// Human-readable form: `pos.<TAB>text`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}.\t{}", self.part_of_speech, self.text)
    }

    /// File form without the word: `pos::text`.
    #[must_use]
    pub fn serialize(&self) -> String {
        format!("{}{DELIMITER}{}", self.part_of_speech, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn parse_valid() {
        let def = Definition::parse("noun", "a small animal").unwrap();
        assert_eq!(def.part_of_speech(), PartOfSpeech::Noun);
        assert_eq!(def.text(), "a small animal");
    }

    #[test]
    fn parse_invalid_tag() {
        let err = Definition::parse("pronoun", "I, you").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPartOfSpeech { .. }));
    }

    #[test]
    fn orders_by_tag_then_text() {
        let verb = Definition::new(PartOfSpeech::Verb, "aaa");
        let noun_b = Definition::new(PartOfSpeech::Noun, "b");
        let noun_a = Definition::new(PartOfSpeech::Noun, "a");
        let adj = Definition::new(PartOfSpeech::Adjective, "zzz");

        let mut defs = vec![verb.clone(), noun_b.clone(), noun_a.clone(), adj.clone()];
        defs.sort();
        assert_eq!(defs, vec![adj, noun_a, noun_b, verb]);
    }

    #[test]
    fn identical_pairs_are_equal() {
        let a = Definition::new(PartOfSpeech::Noun, "same");
        let b = Definition::parse("noun", "same").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    }

    #[test]
    fn render_and_serialize() {
        let def = Definition::new(PartOfSpeech::Adverb, "quickly");
        assert_eq!(def.render(), "adv.\tquickly");
        assert_eq!(def.serialize(), "adv::quickly");
    }

    #[test]
    fn with_text_keeps_tag() {
        let def = Definition::new(PartOfSpeech::Verb, "to run");
        let updated = def.with_text("to sprint");
        assert_eq!(updated.part_of_speech(), PartOfSpeech::Verb);
        assert_eq!(updated.text(), "to sprint");
    }
}
