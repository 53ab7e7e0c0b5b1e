//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random test data
//! that respects the dictionary file format.

use proptest::prelude::*;
use wordhoard_core::{PartOfSpeech, Record};

/// Strategy for generating valid words.
///
/// The alphabet is small so generated dictionaries share words often.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-f]{1,3}").expect("Invalid regex")
}

/// Strategy for generating parts of speech.
pub fn part_of_speech_strategy() -> impl Strategy<Value = PartOfSpeech> {
    prop::sample::select(PartOfSpeech::ALL.to_vec())
}

/// Strategy for generating valid definition texts.
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z ,.:]{0,15}")
        .expect("Invalid regex")
        .prop_filter("Text must not contain the field delimiter", |s| {
            !s.contains("::")
        })
}

/// Strategy for generating records.
pub fn record_strategy() -> impl Strategy<Value = Record> {
    (word_strategy(), part_of_speech_strategy(), text_strategy())
        .prop_map(|(word, pos, text)| Record::new(word, pos, text))
}

/// Strategy for generating a dictionary file's records.
pub fn records_strategy(max_records: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..max_records)
}

/// Dictionary operations for property tests.
#[derive(Debug, Clone)]
pub enum DictionaryOperation {
    /// Add a definition
    Add {
        /// Word
        word: String,
        /// Part of speech
        part_of_speech: PartOfSpeech,
        /// Definition text
        text: String,
    },
    /// Replace the text of a definition
    Update {
        /// Word
        word: String,
        /// 0-based definition position
        index: usize,
        /// New text
        text: String,
    },
    /// Remove a definition
    Remove {
        /// Word
        word: String,
        /// 0-based definition position
        index: usize,
    },
}

/// Strategy for generating dictionary operations.
///
/// Indices run slightly past typical definition counts so that
/// out-of-range requests are generated too.
pub fn dictionary_operation_strategy() -> impl Strategy<Value = DictionaryOperation> {
    prop_oneof![
        4 => (word_strategy(), part_of_speech_strategy(), text_strategy()).prop_map(
            |(word, part_of_speech, text)| DictionaryOperation::Add {
                word,
                part_of_speech,
                text,
            }
        ),
        2 => (word_strategy(), 0..4usize, text_strategy())
            .prop_map(|(word, index, text)| DictionaryOperation::Update { word, index, text }),
        2 => (word_strategy(), 0..4usize)
            .prop_map(|(word, index)| DictionaryOperation::Remove { word, index }),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<DictionaryOperation>> {
    prop::collection::vec(dictionary_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordhoard_core::{record, validate_text, validate_word};

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn generated_words_are_valid(word in word_strategy()) {
            prop_assert!(validate_word(&word).is_ok());
        }

        #[test]
        fn generated_texts_are_valid(text in text_strategy()) {
            prop_assert!(validate_text(&text).is_ok());
        }

        #[test]
        fn generated_records_parse_back(rec in record_strategy()) {
            let parsed = record::parse_line(&rec.to_line(), 1).unwrap();
            prop_assert_eq!(parsed, rec);
        }
    }
}
