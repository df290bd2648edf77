use std::collections::HashMap;

use log::debug;

use crate::error::ModelError;
use crate::tokenize::{folded_words, split_sentences};

/// Frequency tables for one text and one n-gram order.
///
/// Built once from a text, then only read. The order `n` cannot be
/// changed afterwards; build again from the same text to use another one.
///
/// # Invariants
/// - `n >= 1`
/// - `total_words_count` is the sum of all word counts
/// - `unique_words_count` is the number of distinct words
/// - n-grams never span two sentences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusStats {
    n: usize,
    sentences: Vec<String>,
    word_counts: HashMap<String, usize>,
    ngram_counts: HashMap<String, usize>,
    total_words_count: usize,
    unique_words_count: usize,
}

impl CorpusStats {
    /// Builds word and n-gram frequency tables from `text`.
    ///
    /// Every word of every sentence is counted. For each position `i` with
    /// `i >= n - 1`, the `n` words ending at `i` are joined with a single
    /// space and counted as one n-gram. A sentence shorter than `n` words
    /// therefore adds words but no n-grams.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidOrder`] if `n < 1`. Nothing is built in
    /// that case.
    pub fn build(text: &str, n: usize) -> Result<Self, ModelError> {
        if n < 1 {
            return Err(ModelError::InvalidOrder(n));
        }

        let sentences = split_sentences(text);
        let mut word_counts: HashMap<String, usize> = HashMap::new();
        let mut ngram_counts: HashMap<String, usize> = HashMap::new();

        for sentence in &sentences {
            let words = folded_words(sentence);
            for (i, word) in words.iter().enumerate() {
                *word_counts.entry(word.clone()).or_insert(0) += 1;
                if i + 1 >= n {
                    let ngram = words[i + 1 - n..=i].join(" ");
                    *ngram_counts.entry(ngram).or_insert(0) += 1;
                }
            }
        }

        let total_words_count = word_counts.values().sum();
        let unique_words_count = word_counts.len();

        debug!(
            "Built {}-gram statistics: {} sentences, {} words, {} unique, {} distinct n-grams",
            n,
            sentences.len(),
            total_words_count,
            unique_words_count,
            ngram_counts.len()
        );

        Ok(Self {
            n,
            sentences,
            word_counts,
            ngram_counts,
            total_words_count,
            unique_words_count,
        })
    }

    /// The n-gram order these statistics were built with.
    pub fn order(&self) -> usize {
        self.n
    }

    /// Sentences of the corpus, in their original order and casing.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn word_counts(&self) -> &HashMap<String, usize> {
        &self.word_counts
    }

    pub fn ngram_counts(&self) -> &HashMap<String, usize> {
        &self.ngram_counts
    }

    pub fn total_words_count(&self) -> usize {
        self.total_words_count
    }

    pub fn unique_words_count(&self) -> usize {
        self.unique_words_count
    }

    /// Occurrences of a case-folded word, 0 if unseen.
    pub fn word_count(&self, word: &str) -> usize {
        self.word_counts.get(word).copied().unwrap_or(0)
    }

    /// Occurrences of a space-joined, case-folded n-gram, 0 if unseen.
    pub fn ngram_count(&self, ngram: &str) -> usize {
        self.ngram_counts.get(ngram).copied().unwrap_or(0)
    }

    /// Number of sentences whose lower-cased text starts with `prefix`.
    ///
    /// This is a plain string prefix test, not a word-aligned one.
    pub fn start_count(&self, prefix: &str) -> usize {
        self.sentences
            .iter()
            .filter(|sentence| sentence.to_lowercase().starts_with(prefix))
            .count()
    }
}
