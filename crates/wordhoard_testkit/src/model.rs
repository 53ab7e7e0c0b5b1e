//! Reference model for dictionary property tests.
//!
//! [`DictionaryModel`] keeps the same information as a
//! [`DictionaryIndex`] in the plainest possible form (nested ordered
//! sets) and recomputes every aggregate on demand. Applying the same
//! operations to both and comparing them checks the index's incremental
//! bookkeeping.
//!
//! Like the index, the model keeps counting a definition that a word's set
//! absorbs (a duplicate add, or an update that collapses two definitions).

use crate::generators::DictionaryOperation;
use std::collections::{BTreeMap, BTreeSet};
use wordhoard_core::{Definition, DictionaryIndex, PartOfSpeech};

/// Naive dictionary: word to its sorted (part of speech, text) pairs, plus
/// the per-tag tally of absorbed definitions.
#[derive(Debug, Clone, Default)]
pub struct DictionaryModel {
    words: BTreeMap<String, BTreeSet<(PartOfSpeech, String)>>,
    absorbed: BTreeMap<PartOfSpeech, usize>,
}

impl DictionaryModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `op`. Returns whether it should have succeeded.
    pub fn apply(&mut self, op: &DictionaryOperation) -> bool {
        match op {
            DictionaryOperation::Add {
                word,
                part_of_speech,
                text,
            } => {
                let inserted = self
                    .words
                    .entry(word.clone())
                    .or_default()
                    .insert((*part_of_speech, text.clone()));
                if !inserted {
                    *self.absorbed.entry(*part_of_speech).or_insert(0) += 1;
                }
                true
            }
            DictionaryOperation::Update { word, index, text } => {
                let Some(defs) = self.words.get_mut(word) else {
                    return false;
                };
                let Some(old) = defs.iter().nth(*index).cloned() else {
                    return false;
                };
                defs.remove(&old);
                if !defs.insert((old.0, text.clone())) {
                    *self.absorbed.entry(old.0).or_insert(0) += 1;
                }
                true
            }
            DictionaryOperation::Remove { word, index } => {
                let Some(defs) = self.words.get_mut(word) else {
                    return false;
                };
                let Some(old) = defs.iter().nth(*index).cloned() else {
                    return false;
                };
                defs.remove(&old);
                if defs.is_empty() {
                    self.words.remove(word);
                }
                true
            }
        }
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of stored definitions.
    pub fn stored_definitions(&self) -> usize {
        self.words.values().map(BTreeSet::len).sum()
    }

    /// Number of absorbed definitions still counted.
    pub fn absorbed(&self) -> usize {
        self.absorbed.values().sum()
    }

    /// Number of counted definitions.
    pub fn definition_count(&self) -> usize {
        self.stored_definitions() + self.absorbed()
    }

    /// Counted definitions per part of speech, only tags with a non-zero count.
    pub fn usage(&self) -> BTreeMap<PartOfSpeech, usize> {
        let mut usage = self.absorbed.clone();
        for (pos, _) in self.words.values().flatten() {
            *usage.entry(*pos).or_insert(0) += 1;
        }
        usage.retain(|_, count| *count > 0);
        usage
    }

    /// Words in order.
    pub fn words(&self) -> Vec<&str> {
        self.words.keys().map(String::as_str).collect()
    }
}

/// Applies `op` to `index`. Returns whether it succeeded.
pub fn apply_to_index(index: &mut DictionaryIndex, op: &DictionaryOperation) -> bool {
    match op {
        DictionaryOperation::Add {
            word,
            part_of_speech,
            text,
        } => {
            index.add_definition(word, Definition::new(*part_of_speech, text.clone()));
            true
        }
        DictionaryOperation::Update { word, index: i, text } => {
            index.update_definition(word, *i, text).is_ok()
        }
        DictionaryOperation::Remove { word, index: i } => index.remove_definition(word, *i).is_ok(),
    }
}

/// Panics with a description of the first difference between `index` and
/// `model`.
pub fn assert_matches_model(index: &DictionaryIndex, model: &DictionaryModel) {
    if let Err(e) = index.check_invariants() {
        panic!("index invariants broken: {e}");
    }
    assert_eq!(index.word_count(), model.word_count(), "word count");
    assert_eq!(index.definition_count(), model.definition_count(), "definition count");
    assert_eq!(index.absorbed_duplicates(), model.absorbed(), "absorbed definitions");

    let usage: BTreeMap<PartOfSpeech, usize> = index.usage().collect();
    assert_eq!(usage, model.usage(), "part-of-speech usage");
    assert_eq!(index.statistics().parts_of_speech, usage.len(), "parts of speech");

    let words: Vec<&str> = index.iter().map(|entry| entry.word()).collect();
    assert_eq!(words, model.words(), "word order");

    for (word, defs) in &model.words {
        let actual: Vec<(PartOfSpeech, String)> = index
            .definitions_of(word)
            .unwrap_or_else(|e| panic!("{word}: {e}"))
            .map(|def| (def.part_of_speech(), def.text().to_string()))
            .collect();
        let expected: Vec<(PartOfSpeech, String)> = defs.iter().cloned().collect();
        assert_eq!(actual, expected, "definitions of {word}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{operation_sequence_strategy, records_strategy, PropTestConfig};
    use proptest::prelude::*;
    use wordhoard_core::{store, Config};
    use wordhoard_storage::InMemoryBackend;

    proptest! {
        #![proptest_config(PropTestConfig::default().to_proptest_config())]

        #[test]
        fn index_matches_model(ops in operation_sequence_strategy(1, 64)) {
            let mut index = DictionaryIndex::new();
            let mut model = DictionaryModel::new();
            for op in &ops {
                let expected = model.apply(op);
                let actual = apply_to_index(&mut index, op);
                prop_assert_eq!(actual, expected, "outcome of {:?}", op);
            }
            assert_matches_model(&index, &model);
        }

        #[test]
        fn failed_operations_leave_index_unchanged(ops in operation_sequence_strategy(1, 32)) {
            let mut index = DictionaryIndex::new();
            for op in &ops {
                let before = index.serialize();
                if !apply_to_index(&mut index, op) {
                    prop_assert_eq!(index.serialize(), before);
                }
            }
        }

        #[test]
        fn serialized_dictionary_loads_back(ops in operation_sequence_strategy(1, 64)) {
            let mut index = DictionaryIndex::new();
            for op in &ops {
                apply_to_index(&mut index, op);
            }

            let mut backend = InMemoryBackend::new();
            store::save(&index, &mut backend, &Config::default()).unwrap();
            let loaded = store::load(&backend, &Config::default()).unwrap();

            // a reload stores each definition once, so only absorbed
            // definitions drop out of the counters
            prop_assert_eq!(loaded.serialize(), index.serialize());
            prop_assert_eq!(loaded.word_count(), index.word_count());
            prop_assert_eq!(loaded.absorbed_duplicates(), 0);
            prop_assert_eq!(
                loaded.definition_count(),
                index.definition_count() - index.absorbed_duplicates()
            );
            if index.absorbed_duplicates() == 0 {
                prop_assert_eq!(loaded.statistics(), index.statistics());
            }
        }

        #[test]
        fn load_is_order_independent(records in records_strategy(40)) {
            let forward = DictionaryIndex::from_records(records.clone());
            let backward: DictionaryIndex = records.into_iter().rev().collect();
            prop_assert_eq!(forward.serialize(), backward.serialize());
            prop_assert_eq!(forward.definition_count(), backward.definition_count());
        }

        #[test]
        fn range_is_sorted_and_bounded(
            ops in operation_sequence_strategy(1, 48),
            start in "[a-f]{0,3}",
            end in "[a-f]{0,3}",
        ) {
            let mut index = DictionaryIndex::new();
            for op in &ops {
                apply_to_index(&mut index, op);
            }
            let words = index.words_in_range(&start, &end);
            prop_assert!(words.windows(2).all(|w| w[0] < w[1]));
            for word in &words {
                prop_assert!(start.as_str() <= *word && *word <= end.as_str());
            }
            let expected = index
                .iter()
                .filter(|entry| start.as_str() <= entry.word() && entry.word() <= end.as_str())
                .count();
            prop_assert_eq!(words.len(), expected);
        }
    }

    #[test]
    fn model_counts_absorbed_duplicates() {
        let add = DictionaryOperation::Add {
            word: "cat".into(),
            part_of_speech: PartOfSpeech::Noun,
            text: "a pet".into(),
        };
        let mut index = DictionaryIndex::new();
        let mut model = DictionaryModel::new();
        for _ in 0..3 {
            model.apply(&add);
            apply_to_index(&mut index, &add);
        }
        assert_eq!(model.stored_definitions(), 1);
        assert_eq!(model.definition_count(), 3);
        assert_matches_model(&index, &model);
    }

    #[test]
    fn model_removes_empty_words() {
        let mut model = DictionaryModel::new();
        model.apply(&DictionaryOperation::Add {
            word: "cat".into(),
            part_of_speech: PartOfSpeech::Noun,
            text: "a pet".into(),
        });
        assert!(model.apply(&DictionaryOperation::Remove {
            word: "cat".into(),
            index: 0,
        }));
        assert_eq!(model.word_count(), 0);
        assert!(!model.apply(&DictionaryOperation::Remove {
            word: "cat".into(),
            index: 0,
        }));
    }
}
