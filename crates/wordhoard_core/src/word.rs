//! A word and its ordered set of definitions.

use crate::definition::Definition;
use crate::error::{CoreError, CoreResult};
use crate::types::{LineEnding, PartOfSpeech};
use crate::validate::DELIMITER;
use std::collections::{BTreeMap, BTreeSet};

/// Result of replacing the text of a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    /// The definition that was replaced.
    pub old: Definition,
    /// True if the new text matched another definition of the same part of
    /// speech, so the two collapsed into one.
    pub merged: bool,
}

/// A word with one or more definitions.
///
/// Definitions are kept in a `BTreeSet`, ordered by part of speech and then
/// by text. Alongside it, `parts_of_speech` counts the definitions per tag so
/// the set of tags in use is maintained on every insert and removal instead
/// of being rebuilt from the definitions.
///
/// A `WordEntry` is never empty after construction; when the last definition
/// is removed the owner drops the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    definitions: BTreeSet<Definition>,
    parts_of_speech: BTreeMap<PartOfSpeech, usize>,
}

impl WordEntry {
    /// Creates an entry holding exactly one definition.
    #[must_use]
    pub fn new(word: impl Into<String>, definition: Definition) -> Self {
        let mut entry = Self {
            word: word.into(),
            definitions: BTreeSet::new(),
            parts_of_speech: BTreeMap::new(),
        };
        entry.add_definition(definition);
        entry
    }

    /// Creates an entry from a raw tag string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPartOfSpeech`] if `tag` is invalid.
    pub fn parse(word: impl Into<String>, tag: &str, text: impl Into<String>) -> CoreResult<Self> {
        Ok(Self::new(word, Definition::parse(tag, text)?))
    }

    /// Returns the word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Inserts a definition.
    ///
    /// Returns `false` if an identical (part of speech, text) pair was already
    /// present, in which case nothing changes.
    pub fn add_definition(&mut self, definition: Definition) -> bool {
        let pos = definition.part_of_speech();
        if !self.definitions.insert(definition) {
            return false;
        }
        *self.parts_of_speech.entry(pos).or_insert(0) += 1;
        true
    }

    /// Returns the definitions in sorted order.
    ///
    /// The iterator borrows the entry and can be requested again at any time.
    pub fn definitions(&self) -> impl DoubleEndedIterator<Item = &Definition> + ExactSizeIterator + '_ {
        self.definitions.iter()
    }

    /// Returns the definitions paired with their 1-based display number.
    pub fn numbered_definitions(&self) -> impl Iterator<Item = (usize, &Definition)> + '_ {
        self.definitions.iter().enumerate().map(|(i, def)| (i + 1, def))
    }

    /// Returns the definition at a 0-based position in sorted order.
    #[must_use]
    pub fn definition(&self, index: usize) -> Option<&Definition> {
        self.definitions.iter().nth(index)
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Returns the distinct parts of speech in use, in tag order.
    pub fn parts_of_speech(&self) -> impl Iterator<Item = PartOfSpeech> + '_ {
        self.parts_of_speech.keys().copied()
    }

    /// Replaces the text of the definition at `index` (0-based, sorted order).
    ///
    /// The old definition is removed and a new one with the same part of
    /// speech is inserted, since the text is part of the ordering key.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DefinitionOutOfRange`] if `index` is past the end.
    pub fn update_definition(&mut self, index: usize, text: impl Into<String>) -> CoreResult<Replaced> {
        let old = self.take(index)?;
        let replacement = old.with_text(text);
        let merged = !self.add_definition(replacement);
        Ok(Replaced { old, merged })
    }

    /// Removes the definition at `index` (0-based, sorted order) and returns it.
    ///
    /// The caller checks [`definition_count`](Self::definition_count)
    /// afterwards; zero means the entry must be dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DefinitionOutOfRange`] if `index` is past the end.
    pub fn remove_definition(&mut self, index: usize) -> CoreResult<Definition> {
        self.take(index)
    }

    fn take(&mut self, index: usize) -> CoreResult<Definition> {
        let target = self
            .definition(index)
            .cloned()
            .ok_or_else(|| {
                CoreError::definition_out_of_range(&self.word, index, self.definitions.len())
            })?;

        self.definitions.remove(&target);
        let pos = target.part_of_speech();
        if let Some(count) = self.parts_of_speech.get_mut(&pos) {
            *count -= 1;
            if *count == 0 {
                self.parts_of_speech.remove(&pos);
            }
        }
        Ok(target)
    }

    /// The word followed by each rendered definition on its own indented line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.word.clone();
        for def in &self.definitions {
            out.push_str("\n\t");
            out.push_str(&def.render());
        }
        out
    }

    /// The word header followed by each part of speech in use, one per line.
    #[must_use]
    pub fn parts_of_speech_summary(&self) -> String {
        let mut out = format!("{}:", self.word);
        for pos in self.parts_of_speech.keys() {
            out.push_str("\n\t");
            out.push_str(pos.as_str());
        }
        out
    }

    /// One `word::pos::text` line per definition, each terminated by `\n`.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out, LineEnding::Lf);
        out
    }

    /// Appends one terminated record line per definition to `out`.
    pub fn serialize_into(&self, out: &mut String, ending: LineEnding) {
        for def in &self.definitions {
            out.push_str(&self.word);
            out.push_str(DELIMITER);
            out.push_str(&def.serialize());
            out.push_str(ending.as_str());
        }
    }
}
