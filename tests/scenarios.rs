use ngramplexity::{
    perplexity, raw_probability, smoothed_probability, split_sentences, CorpusStats, Estimator,
    ModelError, PerplexityModel,
};

#[test]
fn cat_and_dog_bigram_counts() {
    let stats = CorpusStats::build("The cat sat. The dog ran.", 2).unwrap();

    assert_eq!(stats.sentences(), &["The cat sat", "The dog ran"]);
    assert_eq!(stats.word_count("the"), 2);
    assert_eq!(stats.word_count("cat"), 1);
    assert_eq!(stats.word_count("sat"), 1);
    assert_eq!(stats.word_count("dog"), 1);
    assert_eq!(stats.word_count("ran"), 1);
    assert_eq!(stats.ngram_count("the cat"), 1);
    assert_eq!(stats.ngram_count("cat sat"), 1);
    assert_eq!(stats.ngram_count("the dog"), 1);
    assert_eq!(stats.ngram_count("dog ran"), 1);

    // totals follow the tables: six words, five of them distinct
    assert_eq!(stats.total_words_count(), 6);
    assert_eq!(stats.unique_words_count(), 5);
}

#[test]
fn empty_text_cannot_be_smoothed() {
    let stats = CorpusStats::build("", 2).unwrap();
    assert_eq!(split_sentences(""), vec![String::new()]);
    assert_eq!(stats.total_words_count(), 0);

    for sentence in stats.sentences().iter().map(String::as_str).chain(["The cat sat"]) {
        assert!(matches!(
            smoothed_probability(sentence, &stats),
            Err(ModelError::InvalidModel { .. })
        ));
    }
}

#[test]
fn trigram_order_with_two_word_sentence() {
    let stats = CorpusStats::build("Go now", 3).unwrap();
    assert_eq!(stats.word_count("go"), 1);
    assert_eq!(stats.word_count("now"), 1);
    assert_eq!(stats.total_words_count(), 2);
    assert!(stats.ngram_counts().is_empty());
}

#[test]
fn trigram_counts_ignore_short_sentences() {
    let stats = CorpusStats::build("Go now. The cat sat down.", 3).unwrap();
    assert_eq!(stats.ngram_counts().len(), 2);
    assert_eq!(stats.ngram_count("the cat sat"), 1);
    assert_eq!(stats.ngram_count("cat sat down"), 1);
    assert_eq!(stats.ngram_count("now the cat"), 0);
}

#[test]
fn order_zero_is_rejected() {
    assert_eq!(CorpusStats::build("Go now.", 0), Err(ModelError::InvalidOrder(0)));
    assert!(PerplexityModel::from_text("Go now.", 0, Estimator::Raw).is_err());
}

#[test]
fn raw_and_smoothed_disagree_on_unseen_text() {
    let stats = CorpusStats::build("The cat sat. The dog ran.", 2).unwrap();
    assert_eq!(raw_probability("The dog sat", &stats), 0.0);
    assert!(smoothed_probability("The dog sat", &stats).unwrap() > 0.0);
}

#[test]
fn smoothed_model_scores_its_own_text() {
    let text = "The cat sat on the mat. The dog sat on the log! Did the cat see the dog?";
    let model = PerplexityModel::from_text(text, 2, Estimator::Smoothed).unwrap();

    let scores: Vec<_> = model.score_corpus().collect::<Result<_, _>>().unwrap();
    assert_eq!(scores.len(), 3);
    assert_eq!(scores[2].sentence, "Did the cat see the dog");

    for score in scores {
        assert!(score.probability > 0.0 && score.probability <= 1.0);
        assert_eq!(score.perplexity, perplexity(score.probability, score.word_count));
        assert!(score.perplexity >= 1.0);
    }
}

#[test]
fn very_improbable_long_sentence_has_infinite_perplexity() {
    let text = (0..60).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
    let model = PerplexityModel::from_text(&text, 2, Estimator::Raw).unwrap();
    let score = model.score_sentence("nothing like the training text at all").unwrap();
    assert_eq!(score.probability, 0.0);
    assert!(score.perplexity.is_finite());

    let long = vec!["unseen"; 40].join(" ");
    let score = model.score_sentence(&long).unwrap();
    assert_eq!(score.perplexity, f64::INFINITY);
}
