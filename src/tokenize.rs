use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.?!]\s+").unwrap();
}

const TERMINAL_MARKS: [char; 3] = ['.', '?', '!'];

/// Splits raw text into sentences.
///
/// A boundary is one of `.`, `?`, `!` followed by at least one whitespace
/// character; the boundary itself is consumed. The mark closing the whole
/// text is dropped as well. Any other punctuation stays in the sentence.
/// Empty text yields a single empty sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences: Vec<String> = SENTENCE_BOUNDARY
        .split(text)
        .map(str::to_owned)
        .collect();

    if let Some(last) = sentences.last_mut() {
        let trimmed = last.trim_end();
        if let Some(stripped) = trimmed.strip_suffix(&TERMINAL_MARKS[..]) {
            *last = stripped.to_owned();
        }
    }

    sentences
}

/// Splits a sentence on runs of whitespace.
pub fn split_words(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}

/// Lower-cases a sentence and splits it into words.
///
/// This is the form used both when counting and when scoring.
pub fn folded_words(sentence: &str) -> Vec<String> {
    split_words(&sentence.to_lowercase())
        .into_iter()
        .map(str::to_owned)
        .collect()
}
