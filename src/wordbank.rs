use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::{WORD_LENGTH, info_log};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("could not read word bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("no valid 5-letter words found in word bank")]
    Empty,
}

/// The word list loaded at startup. Ordered for index-based secret selection,
/// with a derived set for membership checks.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl WordBank {
    fn from_words(words: Vec<String>) -> Result<Self, WordBankError> {
        if words.is_empty() {
            return Err(WordBankError::Empty);
        }
        let lookup = words.iter().cloned().collect();
        info_log!("word bank loaded with {} words", words.len());
        Ok(WordBank { words, lookup })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word at `index`, or `None` when the index is out of range.
    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, candidate: &str) -> bool {
        self.lookup.contains(&candidate.to_lowercase())
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    let valid = word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic());
    valid.then_some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Result<WordBank, WordBankError> {
    WordBank::from_words(data.lines().filter_map(normalize).collect())
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, WordBankError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    WordBank::from_words(words)
}
