//! Chain-rule sentence probabilities over [`CorpusStats`].
//!
//! Both estimators walk a sentence the same way: one factor for how the
//! sentence starts, then one factor per word from position `n` on, each
//! relating the n-gram ending at that word to the word's own count.
//! The raw estimator uses the counts as they are; the smoothed one adds one
//! to every count.

use num::ToPrimitive;

use crate::error::ModelError;
use crate::stats::CorpusStats;
use crate::tokenize::folded_words;

/// Counts gathered along one sentence.
struct ChainCounts {
    /// Sentences of the corpus starting with the first `n` words.
    start_count: usize,
    /// `(ngram count, word count)` for each word at position `n..`.
    steps: Vec<(usize, usize)>,
}

impl ChainCounts {
    fn collect(words: &[String], stats: &CorpusStats) -> Self {
        let n = stats.order();
        let head = words[..n.min(words.len())].join(" ");
        let start_count = stats.start_count(&head);

        let steps = (n..words.len())
            .map(|i| {
                let ngram = words[i + 1 - n..=i].join(" ");
                (stats.ngram_count(&ngram), stats.word_count(&words[i]))
            })
            .collect();

        Self { start_count, steps }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    let numerator = numerator.to_f64().unwrap_or(f64::MAX);
    let denominator = denominator.to_f64().unwrap_or(f64::MAX);
    numerator / denominator
}

/// Maximum-likelihood probability of `sentence`.
///
/// The first factor is the number of corpus sentences starting with the
/// sentence's first `n` words divided by the total word count. Note the
/// mixed units: a sentence count over a word count. It is kept that way for
/// compatibility with existing scores.
///
/// Any unseen n-gram makes the result exactly 0. An empty sentence is 0.
pub fn raw_probability(sentence: &str, stats: &CorpusStats) -> f64 {
    let words = folded_words(sentence);
    if words.is_empty() {
        return 0.0;
    }

    let chain = ChainCounts::collect(&words, stats);
    let total_words = stats.total_words_count();

    let start = if total_words > 0 {
        ratio(chain.start_count, total_words)
    } else {
        0.0
    };

    chain
        .steps
        .iter()
        .map(|&(ngram_count, word_count)| {
            if word_count > 0 {
                ratio(ngram_count, word_count)
            } else {
                0.0
            }
        })
        .fold(start, |product, factor| product * factor)
}

/// Add-one smoothed probability of `sentence`.
///
/// Every factor is `(count + 1) / (denominator + unique_words_count)`, so a
/// non-empty sentence never scores 0. If the product underflows `f64`, the
/// smallest positive normal value is returned instead. An empty sentence is
/// still 0.
///
/// # Errors
/// Returns [`ModelError::InvalidModel`] when the statistics hold no words.
pub fn smoothed_probability(sentence: &str, stats: &CorpusStats) -> Result<f64, ModelError> {
    let total_words = stats.total_words_count();
    let unique_words = stats.unique_words_count();
    if total_words == 0 || unique_words == 0 {
        return Err(ModelError::InvalidModel {
            total_words,
            unique_words,
        });
    }

    let words = folded_words(sentence);
    if words.is_empty() {
        return Ok(0.0);
    }

    let chain = ChainCounts::collect(&words, stats);
    let start = ratio(chain.start_count + 1, total_words + unique_words);

    let probability = chain
        .steps
        .iter()
        .map(|&(ngram_count, word_count)| ratio(ngram_count + 1, word_count + unique_words))
        .fold(start, |product, factor| product * factor);

    // underflow
    Ok(probability.max(f64::MIN_POSITIVE))
}
