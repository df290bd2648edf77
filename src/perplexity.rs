use num::ToPrimitive;

/// Smallest probability fed to the logarithm.
pub const PROBABILITY_FLOOR: f64 = 1e-10;

/// Perplexity of a sentence with the given probability and word count.
///
/// Computed as `exp(-ln(p) * word_count)` with `p` clamped to
/// [`PROBABILITY_FLOOR`]. Returns `f64::INFINITY` when the result does not
/// fit in an `f64`, and `1.0` for zero words.
pub fn perplexity(probability: f64, word_count: usize) -> f64 {
    let probability = probability.max(PROBABILITY_FLOOR);
    let log_prob = probability.ln();
    let word_count = word_count.to_f64().unwrap_or(f64::MAX);

    let result = (-log_prob * word_count).exp();
    if result.is_finite() {
        result
    } else {
        f64::INFINITY
    }
}
