use proptest::prelude::*;
use review_lens::nlp::vectorize::{self, DocFreq, VectorizerConfig, Weighting};

fn permissive(weighting: Weighting) -> VectorizerConfig {
    VectorizerConfig {
        weighting,
        min_df: DocFreq::Count(1),
        max_df: DocFreq::Ratio(1.0),
        max_features: 1000,
    }
}

#[test]
fn count_matrix_holds_raw_counts() {
    let corpus = vec!["battery battery screen".to_string(), "screen".to_string()];
    let (fitted, matrix) = vectorize::fit(&permissive(Weighting::Count), &corpus);
    let terms = fitted.terms();
    assert_eq!(terms, vec!["battery".to_string(), "screen".to_string()]);
    assert_eq!(matrix[(0, 0)], 2.0);
    assert_eq!(matrix[(0, 1)], 1.0);
    assert_eq!(matrix[(1, 0)], 0.0);
    assert_eq!(matrix[(1, 1)], 1.0);
}

#[test]
fn unseen_terms_are_dropped_not_errors() {
    let corpus = vec!["battery screen".to_string()];
    let (fitted, _) = vectorize::fit(&permissive(Weighting::TfIdf), &corpus);
    let row = fitted.transform("keyboard mouse");
    assert!(row.iter().all(|&v| v == 0.0));
}

#[test]
fn tfidf_rows_are_l2_normalized() {
    let corpus = vec![
        "battery life battery".to_string(),
        "screen bright screen".to_string(),
        "battery screen".to_string(),
    ];
    let (_, matrix) = vectorize::fit(&permissive(Weighting::TfIdf), &corpus);
    for row in matrix.rows() {
        let norm: f64 = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9, "row norm was {norm}");
    }
}

#[test]
fn vocabulary_is_bounded_by_max_features() {
    let corpus = vec!["alpha beta gamma delta".to_string(); 3];
    let config = VectorizerConfig {
        weighting: Weighting::Count,
        min_df: DocFreq::Count(1),
        max_df: DocFreq::Ratio(1.0),
        max_features: 2,
    };
    let (fitted, matrix) = vectorize::fit(&config, &corpus);
    assert_eq!(fitted.vocabulary_len(), 2);
    assert_eq!(matrix.ncols(), 2);
}

proptest! {
    // Re-fitting an identical corpus with identical configuration must
    // reproduce bit-identical weights.
    #[test]
    fn refit_reproduces_identical_weights(
        words in proptest::collection::vec("[a-e]{1,3}", 4..40),
    ) {
        let corpus: Vec<String> = words
            .chunks(4)
            .map(|chunk| chunk.join(" "))
            .collect();
        let config = permissive(Weighting::TfIdf);
        let (_, first) = vectorize::fit(&config, &corpus);
        let (_, second) = vectorize::fit(&config, &corpus);
        prop_assert_eq!(first, second);
    }
}
