//! The dictionary index.

use crate::definition::Definition;
use crate::error::{CoreError, CoreResult};
use crate::record::Record;
use crate::stats::Statistics;
use crate::types::{LineEnding, PartOfSpeech};
use crate::word::WordEntry;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Bound;
use tracing::{debug, warn};

/// What [`DictionaryIndex::add`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The word was unknown and has been created with this definition.
    NewWord,
    /// The definition was added to an existing word.
    Added,
    /// The word already had an identical definition. The definition set is
    /// unchanged but the counters still grew; see [`DictionaryIndex`].
    Duplicate,
}

/// What [`DictionaryIndex::remove_definition`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The definition that was removed.
    pub definition: Definition,
    /// True if it was the word's last definition and the word is gone too.
    pub word_removed: bool,
}

/// An in-memory dictionary of words and their definitions.
///
/// Three aggregates are kept in step by every mutating operation:
///
/// - `entries`: word to [`WordEntry`], for lookup
/// - `ordered`: the words in lexicographic order, for first/last/range queries
/// - `usage`: definitions per part of speech across the whole dictionary;
///   a tag is present only while its count is non-zero
///
/// Every operation validates its inputs before touching any of them, so a
/// failed call leaves the index unchanged.
///
/// # Counting
///
/// `definition_count` and `usage` count every successful `add`, including a
/// duplicate (part of speech, text) pair that the word's definition set
/// absorbs. An update whose new text collapses onto an existing definition
/// leaves them untouched as well. Both cases are tallied per tag in
/// `absorbed`, so that for every tag
///
/// `usage[tag] == definitions with tag + absorbed[tag]`
///
/// and the counters exceed the stored definitions by exactly
/// [`absorbed_duplicates`](Self::absorbed_duplicates).
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    entries: HashMap<String, WordEntry>,
    ordered: BTreeSet<String>,
    usage: BTreeMap<PartOfSpeech, usize>,
    absorbed: BTreeMap<PartOfSpeech, usize>,
    definition_count: usize,
}

impl DictionaryIndex {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary by adding each record in order.
    #[must_use]
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut index = Self::new();
        index.extend(records);
        index
    }

    /// Adds a definition given as a raw tag string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPartOfSpeech`] if `tag` is not in the
    /// closed set. The index is unchanged in that case.
    pub fn add(&mut self, word: &str, tag: &str, text: &str) -> CoreResult<AddOutcome> {
        let definition = Definition::parse(tag, text)?;
        Ok(self.add_definition(word, definition))
    }

    /// Adds a definition to `word`, creating the word if it is unknown.
    ///
    /// The definition count and the usage of its part of speech grow by one
    /// on every call. A (part of speech, text) pair the word already has is
    /// absorbed by the definition set, reported as [`AddOutcome::Duplicate`]
    /// and logged.
    pub fn add_definition(&mut self, word: &str, definition: Definition) -> AddOutcome {
        let pos = definition.part_of_speech();
        let outcome = match self.entries.get_mut(word) {
            Some(entry) => {
                if entry.add_definition(definition) {
                    AddOutcome::Added
                } else {
                    AddOutcome::Duplicate
                }
            }
            None => {
                self.entries
                    .insert(word.to_string(), WordEntry::new(word, definition));
                self.ordered.insert(word.to_string());
                AddOutcome::NewWord
            }
        };

        self.definition_count += 1;
        *self.usage.entry(pos).or_insert(0) += 1;
        if outcome == AddOutcome::Duplicate {
            *self.absorbed.entry(pos).or_insert(0) += 1;
            warn!(word, part_of_speech = %pos, "duplicate definition absorbed, counters still incremented");
        } else {
            debug!(word, part_of_speech = %pos, ?outcome, "definition added");
        }
        outcome
    }

    /// Returns a snapshot of the dictionary statistics.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::new(
            self.word_count(),
            self.definition_count,
            self.usage.len(),
            self.first_word(),
            self.last_word(),
        )
    }

    /// Returns the words `k` with `start <= k <= end`, in order.
    ///
    /// An inverted range (`start > end`) or a range matching no word yields an
    /// empty result.
    #[must_use]
    pub fn words_in_range(&self, start: &str, end: &str) -> Vec<&str> {
        if start > end {
            return Vec::new();
        }
        self.ordered
            .range::<str, _>((Bound::Included(start), Bound::Included(end)))
            .map(String::as_str)
            .collect()
    }

    /// Returns the full rendering of `word`, or `None` if it is unknown.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<String> {
        self.get(word).map(WordEntry::render)
    }

    /// Returns the entry for `word`.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(word)
    }

    /// Returns whether `word` is in the dictionary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Returns the lexicographically first word.
    #[must_use]
    pub fn first_word(&self) -> Option<&str> {
        self.ordered.first().map(String::as_str)
    }

    /// Returns the lexicographically last word.
    #[must_use]
    pub fn last_word(&self) -> Option<&str> {
        self.ordered.last().map(String::as_str)
    }

    /// Returns the entry of the first word.
    #[must_use]
    pub fn first_entry(&self) -> Option<&WordEntry> {
        self.first_word().and_then(|word| self.get(word))
    }

    /// Returns the entry of the last word.
    #[must_use]
    pub fn last_entry(&self) -> Option<&WordEntry> {
        self.last_word().and_then(|word| self.get(word))
    }

    /// Returns the parts-of-speech summary of `word`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WordNotFound`] if `word` is unknown.
    pub fn parts_of_speech(&self, word: &str) -> CoreResult<String> {
        Ok(self.entry(word)?.parts_of_speech_summary())
    }

    /// Returns the definitions of `word` in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WordNotFound`] if `word` is unknown.
    pub fn definitions_of(&self, word: &str) -> CoreResult<impl Iterator<Item = &Definition> + '_> {
        Ok(self.entry(word)?.definitions())
    }

    /// Returns the number of definitions of `word`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WordNotFound`] if `word` is unknown.
    pub fn definition_count_of(&self, word: &str) -> CoreResult<usize> {
        Ok(self.entry(word)?.definition_count())
    }

    /// Replaces the text of the definition at `index` (0-based, sorted order).
    ///
    /// The counters are never touched. If the new text equals another
    /// definition of the same part of speech the two collapse, and the lost
    /// definition is tallied as absorbed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WordNotFound`] or
    /// [`CoreError::DefinitionOutOfRange`]; the index is unchanged on error.
    pub fn update_definition(&mut self, word: &str, index: usize, text: &str) -> CoreResult<()> {
        let replaced = self.entry_mut(word)?.update_definition(index, text)?;
        if replaced.merged {
            *self.absorbed.entry(replaced.old.part_of_speech()).or_insert(0) += 1;
            warn!(word, index, "updated definition merged with an existing one");
        } else {
            debug!(word, index, "definition updated");
        }
        Ok(())
    }

    /// Removes the definition at `index` (0-based, sorted order).
    ///
    /// Removing a word's last definition removes the word as well, which is
    /// reported through [`Removal::word_removed`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WordNotFound`] or
    /// [`CoreError::DefinitionOutOfRange`]; the index is unchanged on error.
    pub fn remove_definition(&mut self, word: &str, index: usize) -> CoreResult<Removal> {
        let entry = self.entry_mut(word)?;
        let definition = entry.remove_definition(index)?;
        let now_empty = entry.definition_count() == 0;

        self.release(definition.part_of_speech());
        if now_empty {
            self.entries.remove(word);
            self.ordered.remove(word);
            debug!(word, "last definition removed, word dropped");
        } else {
            debug!(word, index, "definition removed");
        }

        Ok(Removal {
            definition,
            word_removed: now_empty,
        })
    }

    /// Returns the number of words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.ordered.len()
    }

    /// Returns the number of definitions counted across all words.
    ///
    /// This includes absorbed duplicates; subtract
    /// [`absorbed_duplicates`](Self::absorbed_duplicates) for the number of
    /// stored definitions.
    #[must_use]
    pub fn definition_count(&self) -> usize {
        self.definition_count
    }

    /// Returns how many counted definitions were absorbed by a definition set,
    /// either as a duplicate add or as an update that collapsed two
    /// definitions.
    #[must_use]
    pub fn absorbed_duplicates(&self) -> usize {
        self.absorbed.values().sum()
    }

    /// Returns whether the dictionary has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Returns the usage count of each part of speech in use, in tag order.
    pub fn usage(&self) -> impl Iterator<Item = (PartOfSpeech, usize)> + '_ {
        self.usage.iter().map(|(pos, count)| (*pos, *count))
    }

    /// Returns how many definitions use `pos`.
    #[must_use]
    pub fn usage_of(&self, pos: PartOfSpeech) -> usize {
        self.usage.get(&pos).copied().unwrap_or(0)
    }

    /// Returns the entries in lexicographic word order.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> + '_ {
        self.ordered.iter().filter_map(|word| self.entries.get(word))
    }

    /// Every word rendered in order, separated by line breaks, with no
    /// trailing separator.
    #[must_use]
    pub fn render(&self) -> String {
        self.iter()
            .map(WordEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The dictionary in file format with `\n` line endings.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.serialize_with(LineEnding::Lf)
    }

    /// The dictionary in file format: every record line in word order, with
    /// no line ending after the last record.
    #[must_use]
    pub fn serialize_with(&self, ending: LineEnding) -> String {
        let mut out = String::new();
        for entry in self.iter() {
            entry.serialize_into(&mut out, ending);
        }
        if out.ends_with(ending.as_str()) {
            out.truncate(out.len() - ending.as_str().len());
        }
        out
    }

    /// Audits the index invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvariantViolation`] describing the first
    /// invariant found broken.
    pub fn check_invariants(&self) -> CoreResult<()> {
        if self.entries.len() != self.ordered.len() {
            return Err(CoreError::invariant_violation(format!(
                "{} entries but {} ordered words",
                self.entries.len(),
                self.ordered.len()
            )));
        }

        let mut definitions = 0;
        let mut usage: BTreeMap<PartOfSpeech, usize> = BTreeMap::new();
        for word in &self.ordered {
            let entry = self.entries.get(word).ok_or_else(|| {
                CoreError::invariant_violation(format!("ordered word {word:?} has no entry"))
            })?;
            if entry.definition_count() == 0 {
                return Err(CoreError::invariant_violation(format!(
                    "word {word:?} has no definitions"
                )));
            }

            let mut tags = BTreeSet::new();
            for def in entry.definitions() {
                tags.insert(def.part_of_speech());
                *usage.entry(def.part_of_speech()).or_insert(0) += 1;
            }
            if !tags.into_iter().eq(entry.parts_of_speech()) {
                return Err(CoreError::invariant_violation(format!(
                    "parts of speech of {word:?} do not match its definitions"
                )));
            }
            definitions += entry.definition_count();
        }

        let absorbed = self.absorbed_duplicates();
        if definitions + absorbed != self.definition_count {
            return Err(CoreError::invariant_violation(format!(
                "definition count is {} but entries hold {definitions} plus {absorbed} absorbed",
                self.definition_count
            )));
        }
        for (pos, count) in &self.absorbed {
            *usage.entry(*pos).or_insert(0) += count;
        }
        if usage != self.usage {
            return Err(CoreError::invariant_violation(
                "part-of-speech usage does not match definitions",
            ));
        }
        Ok(())
    }

    fn entry(&self, word: &str) -> CoreResult<&WordEntry> {
        self.entries
            .get(word)
            .ok_or_else(|| CoreError::word_not_found(word))
    }

    fn entry_mut(&mut self, word: &str) -> CoreResult<&mut WordEntry> {
        self.entries
            .get_mut(word)
            .ok_or_else(|| CoreError::word_not_found(word))
    }

    /// Drops one definition of `pos` from the aggregate counters.
    fn release(&mut self, pos: PartOfSpeech) {
        self.definition_count -= 1;
        if let Some(count) = self.usage.get_mut(&pos) {
            *count -= 1;
            if *count == 0 {
                self.usage.remove(&pos);
            }
        }
    }
}

impl Extend<Record> for DictionaryIndex {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, records: T) {
        for record in records {
            self.add_definition(&record.word, record.definition);
        }
    }
}

impl FromIterator<Record> for DictionaryIndex {
    fn from_iter<T: IntoIterator<Item = Record>>(records: T) -> Self {
        Self::from_records(records)
    }
}
