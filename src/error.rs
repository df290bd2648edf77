use thiserror::Error;

/// Failures raised by the statistics builder and the estimators.
///
/// Empty sentences and perplexity overflow are not errors: they are
/// answered in-band with a probability of 0 and `f64::INFINITY`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Statistics were requested with an n-gram order below 1.
    #[error("n-gram order must be at least 1, got {0}")]
    InvalidOrder(usize),

    /// Smoothing was requested against statistics with nothing in them.
    #[error(
        "total words count ({total_words}) or unique words count ({unique_words}) is zero, \
         which is invalid for probability calculations"
    )]
    InvalidModel {
        total_words: usize,
        unique_words: usize,
    },
}
