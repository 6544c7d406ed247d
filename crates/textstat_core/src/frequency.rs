use std::collections::HashMap;

use serde::Serialize;

use crate::tokenize::{PunctuationTokenizer, Tokenizer};

/// A token together with how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Occurrence counts keyed by token, kept in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    pub fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push(WordCount::new(token, 1));
            }
        }
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all occurrence counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&slot| self.entries[slot].count)
    }

    /// All entries, most frequent first. Equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        // `sort_by` is stable, which gives the first-seen tie-break.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<WordCount> {
        if n == 0 {
            return Vec::new();
        }
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

/// The `n` most frequent tokens of `text`.
///
/// Returns fewer than `n` entries when the text has fewer distinct tokens,
/// and nothing when `n` is zero.
pub fn top_n_words(text: &str, n: usize) -> Vec<WordCount> {
    top_n_words_with(text, n, &PunctuationTokenizer)
}

pub fn top_n_words_with(text: &str, n: usize, tokenizer: &dyn Tokenizer) -> Vec<WordCount> {
    if n == 0 {
        return Vec::new();
    }
    FrequencyTable::from_tokens(tokenizer.tokenize(text)).top(n)
}
