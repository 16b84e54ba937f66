use review_lens::nlp::normalize::{lemmatize, ContentFilter, Normalizer};

#[test]
fn missing_text_becomes_empty_document() {
    let normalizer = Normalizer::new(ContentFilter::AdjectivesAndNouns);
    assert_eq!(normalizer.normalize(None), "");
    assert_eq!(normalizer.normalize(Some("")), "");
    assert_eq!(normalizer.normalize(Some("   ")), "");
}

#[test]
fn adjective_mode_keeps_only_adjectives() {
    let normalizer = Normalizer::new(ContentFilter::Adjectives);
    let doc = normalizer.normalize(Some("A great sturdy phone"));
    assert_eq!(doc, "great sturdy");
}

#[test]
fn content_mode_keeps_nouns_and_adjectives_minus_stopwords() {
    let normalizer = Normalizer::new(ContentFilter::AdjectivesAndNouns);
    let doc = normalizer.normalize(Some("The battery drains fast"));
    assert_eq!(doc, "battery drain fast");
}

#[test]
fn normalization_lowercases_and_lemmatizes_plurals() {
    let normalizer = Normalizer::new(ContentFilter::AdjectivesAndNouns);
    let doc = normalizer.normalize(Some("Cheap BATTERIES"));
    assert_eq!(doc, "cheap battery");
}

#[test]
fn lemmatizer_handles_regular_forms() {
    assert_eq!(lemmatize("batteries"), "battery");
    assert_eq!(lemmatize("glasses"), "glass");
    assert_eq!(lemmatize("phones"), "phone");
    assert_eq!(lemmatize("glass"), "glass");
    assert_eq!(lemmatize("status"), "status");
}
