//! Core type definitions for wordhoard.

use crate::error::{CoreError, CoreResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A part-of-speech tag from the fixed closed set.
///
/// Variants are declared in the lexicographic order of their tags, so the
/// derived `Ord` agrees with comparing the tag strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PartOfSpeech {
    /// `adj`
    #[serde(rename = "adj")]
    Adjective,
    /// `adv`
    #[serde(rename = "adv")]
    Adverb,
    /// `conj`
    #[serde(rename = "conj")]
    Conjunction,
    /// `interj`
    #[serde(rename = "interj")]
    Interjection,
    /// `noun`
    #[serde(rename = "noun")]
    Noun,
    /// `prep`
    #[serde(rename = "prep")]
    Preposition,
    /// `pron`
    #[serde(rename = "pron")]
    Pronoun,
    /// `verb`
    #[serde(rename = "verb")]
    Verb,
}

impl PartOfSpeech {
    /// Every tag, in order.
    pub const ALL: [PartOfSpeech; 8] = [
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Interjection,
        PartOfSpeech::Noun,
        PartOfSpeech::Preposition,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Verb,
    ];

    /// Returns the tag as written in dictionary files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adjective => "adj",
            Self::Adverb => "adv",
            Self::Conjunction => "conj",
            Self::Interjection => "interj",
            Self::Noun => "noun",
            Self::Preposition => "prep",
            Self::Pronoun => "pron",
            Self::Verb => "verb",
        }
    }

    /// Parses a tag, failing with [`CoreError::InvalidPartOfSpeech`].
    pub fn parse(tag: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|pos| pos.as_str() == tag)
            .ok_or_else(|| CoreError::invalid_part_of_speech(tag))
    }

    /// Returns the tags joined for display, e.g. in a prompt.
    #[must_use]
    pub fn tag_list() -> String {
        let tags: Vec<&str> = Self::ALL.iter().map(|pos| pos.as_str()).collect();
        format!("[{}]", tags.join(", "))
    }
}

impl FromStr for PartOfSpeech {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line terminator used when writing rendered or serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Returns the platform's native line ending.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    /// Returns the terminator characters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_tags() {
        assert_eq!(PartOfSpeech::parse("noun").unwrap(), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::parse("pron").unwrap(), PartOfSpeech::Pronoun);
        assert_eq!("interj".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Interjection);
    }

    #[test]
    fn parse_rejects_long_form() {
        let err = PartOfSpeech::parse("pronoun").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPartOfSpeech { ref tag } if tag == "pronoun"));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(PartOfSpeech::parse("Noun").is_err());
        assert!(PartOfSpeech::parse("").is_err());
    }

    #[test]
    fn order_matches_tag_order() {
        let mut tags: Vec<&str> = PartOfSpeech::ALL.iter().map(|p| p.as_str()).collect();
        let declared = tags.clone();
        tags.sort_unstable();
        assert_eq!(tags, declared);

        for pair in PartOfSpeech::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn display_round_trips() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(pos.to_string().parse::<PartOfSpeech>().unwrap(), pos);
        }
    }

    #[test]
    fn tag_list_format() {
        assert_eq!(
            PartOfSpeech::tag_list(),
            "[adj, adv, conj, interj, noun, prep, pron, verb]"
        );
    }

    #[test]
    fn line_ending_strings() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
        assert_eq!(LineEnding::default(), LineEnding::Lf);
    }

    #[test]
    fn native_line_ending() {
        let expected = if cfg!(windows) { "\r\n" } else { "\n" };
        assert_eq!(LineEnding::native().as_str(), expected);
    }
}
