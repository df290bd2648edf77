use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::estimate::{raw_probability, smoothed_probability};
use crate::perplexity::perplexity;
use crate::stats::CorpusStats;
use crate::tokenize::split_words;

/// Which probability estimate a [`PerplexityModel`] scores with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Estimator {
    /// Maximum-likelihood counts, may be exactly 0.
    Raw,
    /// Add-one (Laplace) smoothed counts.
    #[default]
    Smoothed,
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimator::Raw => write!(f, "raw"),
            Estimator::Smoothed => write!(f, "smoothed"),
        }
    }
}

impl FromStr for Estimator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" | "mle" => Ok(Estimator::Raw),
            "smoothed" | "laplace" => Ok(Estimator::Smoothed),
            other => Err(format!(
                "unknown estimator '{other}', expected 'raw' or 'smoothed'"
            )),
        }
    }
}

/// Probability and perplexity of one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScore {
    pub sentence: String,
    pub word_count: usize,
    pub probability: f64,
    pub perplexity: f64,
}

/// An n-gram model trained on a text and used to score sentences.
///
/// The model is trained on the same text whose sentences it scores.
pub struct PerplexityModel {
    stats: CorpusStats,
    estimator: Estimator,
}

impl PerplexityModel {
    pub fn new(stats: CorpusStats, estimator: Estimator) -> PerplexityModel {
        PerplexityModel { stats, estimator }
    }

    /// Builds the statistics for `text` at order `n`.
    ///
    /// # Errors
    /// [`ModelError::InvalidOrder`] if `n < 1`.
    pub fn from_text(text: &str, n: usize, estimator: Estimator) -> Result<PerplexityModel, ModelError> {
        let stats = CorpusStats::build(text, n)?;
        Ok(PerplexityModel::new(stats, estimator))
    }

    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    /// Scores a single sentence against the trained statistics.
    pub fn score_sentence(&self, sentence: &str) -> Result<SentenceScore, ModelError> {
        let probability = match self.estimator {
            Estimator::Raw => raw_probability(sentence, &self.stats),
            Estimator::Smoothed => smoothed_probability(sentence, &self.stats)?,
        };
        let word_count = split_words(sentence).len();

        Ok(SentenceScore {
            sentence: sentence.to_owned(),
            word_count,
            probability,
            perplexity: perplexity(probability, word_count),
        })
    }

    /// Scores every sentence of the training text, in order.
    ///
    /// A failure on one sentence is yielded in its place and the remaining
    /// sentences are still scored.
    pub fn score_corpus(&self) -> impl Iterator<Item = Result<SentenceScore, ModelError>> + '_ {
        self.stats
            .sentences()
            .iter()
            .map(move |sentence| self.score_sentence(sentence))
    }
}
