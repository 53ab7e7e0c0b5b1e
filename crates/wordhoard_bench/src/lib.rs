//! Benchmark utilities.

#![warn(missing_docs)]

use rand::seq::SliceRandom;
use rand::Rng;
use wordhoard_core::{Definition, DictionaryIndex, PartOfSpeech};

/// Dictionary sizes (definitions added) used across benchmarks.
pub const SIZES: [usize; 4] = [10_000, 20_000, 40_000, 80_000];

/// Builds a dictionary from `size` random additions.
///
/// Words are decimal numbers drawn from `0..size / 4`, so most words end up
/// with several definitions. Returns the dictionary and the last word added.
pub fn random_dictionary(size: usize) -> (DictionaryIndex, String) {
    let mut rng = rand::thread_rng();
    let mut index = DictionaryIndex::new();
    let mut last = String::new();

    for _ in 0..size {
        let word = rng.gen_range(0..(size / 4).max(1)).to_string();
        let pos = random_part_of_speech(&mut rng);
        let text = format!("{word}{word}{word} {word}");
        index.add_definition(&word, Definition::new(pos, text));
        last = word;
    }

    (index, last)
}

/// Picks a part of speech uniformly.
pub fn random_part_of_speech<R: Rng>(rng: &mut R) -> PartOfSpeech {
    *PartOfSpeech::ALL.choose(rng).unwrap_or(&PartOfSpeech::Noun)
}

/// Returns `count` random words from `index`.
pub fn sample_words(index: &DictionaryIndex, count: usize) -> Vec<String> {
    let words: Vec<&str> = index.iter().map(|entry| entry.word()).collect();
    let mut rng = rand::thread_rng();
    (0..count)
        .filter_map(|_| words.choose(&mut rng).map(|w| (*w).to_string()))
        .collect()
}
