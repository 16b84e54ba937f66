use review_lens::assign::{assign_label, resolve_sentiment, CaseFolding, ZeroOverlapPolicy};
use review_lens::llm::{Label, Sentiment};

fn aspect_labels() -> Vec<Label> {
    vec![
        Label {
            name: "battery".into(),
            keywords: vec!["battery".into(), "charge".into(), "drain".into()],
            sentiment: Sentiment::Neutral,
        },
        Label {
            name: "camera".into(),
            keywords: vec!["camera".into(), "photo".into(), "lens".into()],
            sentiment: Sentiment::Neutral,
        },
    ]
}

#[test]
fn highest_keyword_overlap_wins() {
    let labels = aspect_labels();
    let text = "the battery drains fast, battery life is bad";
    let assigned = assign_label(text, &labels, CaseFolding::Lower, ZeroOverlapPolicy::FirstLabel);
    assert_eq!(assigned, Some(0));
}

#[test]
fn zero_overlap_defaults_to_first_label() {
    let labels = aspect_labels();
    let text = "nice screen colors";
    let assigned = assign_label(text, &labels, CaseFolding::Lower, ZeroOverlapPolicy::FirstLabel);
    // "battery" wins despite zero relevance; first-seen label takes all ties.
    assert_eq!(assigned, Some(0));
}

#[test]
fn zero_overlap_can_leave_reviews_unassigned() {
    let labels = aspect_labels();
    let text = "nice screen colors";
    let assigned = assign_label(text, &labels, CaseFolding::Lower, ZeroOverlapPolicy::Unassigned);
    assert_eq!(assigned, None);
}

#[test]
fn ties_keep_the_first_seen_label() {
    let labels = aspect_labels();
    // One hit for each label.
    let text = "charge and lens";
    let assigned = assign_label(text, &labels, CaseFolding::Lower, ZeroOverlapPolicy::FirstLabel);
    assert_eq!(assigned, Some(0));
}

#[test]
fn case_folding_changes_match_behaviour() {
    let labels = vec![Label {
        name: "battery".into(),
        keywords: vec!["Battery".into()],
        sentiment: Sentiment::Neutral,
    }];
    let text = "battery life";
    let preserved = assign_label(
        text,
        &labels,
        CaseFolding::Preserve,
        ZeroOverlapPolicy::Unassigned,
    );
    let folded = assign_label(
        text,
        &labels,
        CaseFolding::Lower,
        ZeroOverlapPolicy::Unassigned,
    );
    assert_eq!(preserved, None);
    assert_eq!(folded, Some(0));
}

#[test]
fn neutral_labels_fall_back_to_the_lexicon() {
    let sentiment =
        resolve_sentiment(Sentiment::Neutral, "this is the best phone, amazing battery");
    assert_eq!(sentiment, Sentiment::Positive);
}

#[test]
fn lexicon_tie_stays_neutral() {
    let sentiment = resolve_sentiment(Sentiment::Neutral, "good phone with bad battery");
    assert_eq!(sentiment, Sentiment::Neutral);
}

#[test]
fn non_neutral_label_sentiment_stands() {
    let sentiment = resolve_sentiment(Sentiment::Negative, "this is the best phone ever");
    assert_eq!(sentiment, Sentiment::Negative);
}
