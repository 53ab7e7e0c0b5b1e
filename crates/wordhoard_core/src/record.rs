//! Line codec for the dictionary file format.
//!
//! One definition per line, as `word::pos::text`. There is no header, no
//! escaping, and no trailing line after the last record.

use crate::definition::Definition;
use crate::error::{CoreError, CoreResult};
use crate::types::PartOfSpeech;
use crate::validate::DELIMITER;

/// One parsed line of a dictionary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The word.
    pub word: String,
    /// The word's definition on this line.
    pub definition: Definition,
}

impl Record {
    /// Creates a record.
    #[must_use]
    pub fn new(word: impl Into<String>, part_of_speech: PartOfSpeech, text: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: Definition::new(part_of_speech, text),
        }
    }

    /// Renders the record as a line, without terminator.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{}{DELIMITER}{}", self.word, self.definition.serialize())
    }
}

/// Parses one line. `line_no` is 1-based and only used for error reporting.
///
/// # Errors
///
/// Returns [`CoreError::MalformedRecord`] if the line does not split into
/// exactly three fields on `::`, if the word or text field is empty, or if
/// the part-of-speech field is not a known tag.
pub fn parse_line(line: &str, line_no: usize) -> CoreResult<Record> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [word, tag, text] = fields.as_slice() else {
        return Err(CoreError::malformed_record(
            line_no,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    };

    if word.is_empty() {
        return Err(CoreError::malformed_record(line_no, "empty word"));
    }
    if text.is_empty() {
        return Err(CoreError::malformed_record(line_no, "empty definition"));
    }
    let part_of_speech = PartOfSpeech::parse(tag)
        .map_err(|_| CoreError::malformed_record(line_no, format!("unknown part of speech {tag:?}")))?;

    Ok(Record::new(*word, part_of_speech, *text))
}

/// Parses every line of `content`.
///
/// Lines may end in `\n` or `\r\n`. When `skip_blank` is set, lines holding
/// only whitespace are ignored; otherwise they are reported as malformed.
///
/// # Errors
///
/// Returns the first malformed line's error.
pub fn parse_all(content: &str, skip_blank: bool) -> CoreResult<Vec<Record>> {
    let mut records = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if skip_blank && line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(line, i + 1)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_line() {
        let record = parse_line("cat::noun::a small animal", 1).unwrap();
        assert_eq!(record.word, "cat");
        assert_eq!(record.definition.part_of_speech(), PartOfSpeech::Noun);
        assert_eq!(record.definition.text(), "a small animal");
    }

    #[test]
    fn text_may_contain_single_colons() {
        let record = parse_line("ratio::noun::a relation such as 1:2", 1).unwrap();
        assert_eq!(record.definition.text(), "a relation such as 1:2");
    }

    #[test]
    fn too_few_fields() {
        let err = parse_line("cat::noun", 7).unwrap_err();
        assert!(matches!(err, CoreError::MalformedRecord { line: 7, .. }));
    }

    #[test]
    fn too_many_fields() {
        let err = parse_line("cat::noun::a::b", 2).unwrap_err();
        assert!(matches!(err, CoreError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn unknown_tag_is_malformed() {
        let err = parse_line("cat::pronoun::x", 3).unwrap_err();
        match err {
            CoreError::MalformedRecord { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("pronoun"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_fields_are_malformed() {
        assert!(parse_line("::noun::x", 1).is_err());
        assert!(parse_line("cat::noun::", 1).is_err());
    }

    #[test]
    fn to_line_round_trip() {
        let record = Record::new("run", PartOfSpeech::Verb, "to move fast");
        assert_eq!(record.to_line(), "run::verb::to move fast");
        assert_eq!(parse_line(&record.to_line(), 1).unwrap(), record);
    }

    #[test]
    fn parse_all_handles_crlf_and_blank_lines() {
        let content = "cat::noun::a pet\r\n\r\ndog::noun::a friend\r\n";
        let records = parse_all(content, true).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].definition.text(), "a friend");
    }

    #[test]
    fn parse_all_strict_rejects_blank_line() {
        let content = "cat::noun::a pet\n\ndog::noun::a friend";
        let err = parse_all(content, false).unwrap_err();
        assert!(matches!(err, CoreError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn parse_all_empty_content() {
        assert!(parse_all("", true).unwrap().is_empty());
    }
}
