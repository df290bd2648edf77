//! Self-trained n-gram sentence probabilities and perplexity.
//!
//! A text is split into sentences, word and n-gram frequencies are counted
//! over it, and each sentence of the same text is then scored with either a
//! maximum-likelihood or an add-one smoothed chain-rule probability.
//!
//! ```
//! use ngramplexity::{Estimator, PerplexityModel};
//!
//! let model = PerplexityModel::from_text("The cat sat. The dog ran.", 2, Estimator::Smoothed)?;
//! for score in model.score_corpus() {
//!     let score = score?;
//!     println!("{}: {}", score.sentence, score.perplexity);
//! }
//! # Ok::<(), ngramplexity::ModelError>(())
//! ```

pub mod error;
pub mod estimate;
pub mod input;
pub mod model;
pub mod perplexity;
pub mod stats;
pub mod tokenize;

pub use error::ModelError;
pub use estimate::{raw_probability, smoothed_probability};
pub use model::{Estimator, PerplexityModel, SentenceScore};
pub use perplexity::{perplexity, PROBABILITY_FLOOR};
pub use stats::CorpusStats;
pub use tokenize::{split_sentences, split_words};
