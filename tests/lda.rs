use ndarray::Array2;
use review_lens::model::lda::{self, LdaConfig};

fn toy_count_matrix() -> Array2<f64> {
    // Four documents over a six-term vocabulary, two obvious themes.
    Array2::from_shape_vec(
        (4, 6),
        vec![
            3.0, 2.0, 1.0, 0.0, 0.0, 0.0, //
            2.0, 3.0, 0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 3.0, 2.0, 2.0, //
            0.0, 1.0, 0.0, 2.0, 3.0, 2.0,
        ],
    )
    .expect("valid shape")
}

#[test]
fn topic_distribution_sums_to_one() {
    let model = lda::fit(&LdaConfig::new(2), &toy_count_matrix().view()).expect("fit succeeds");
    for doc in 0..4 {
        let distribution = model.topic_distribution(doc);
        let total: f64 = distribution.iter().sum();
        assert!((total - 1.0).abs() < 1e-9, "distribution summed to {total}");
    }
}

#[test]
fn assignment_is_argmax_of_distribution() {
    let model = lda::fit(&LdaConfig::new(2), &toy_count_matrix().view()).expect("fit succeeds");
    for doc in 0..4 {
        let distribution = model.topic_distribution(doc);
        let argmax = distribution
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).expect("comparable"))
            .map(|(idx, _)| idx)
            .expect("non-empty distribution");
        let assigned = model.assign(doc);
        assert!(distribution[assigned] >= distribution[argmax] - 1e-12);
    }
}

#[test]
fn assignments_stay_in_range() {
    let model = lda::fit(&LdaConfig::new(3), &toy_count_matrix().view()).expect("fit succeeds");
    for assignment in model.assign_all() {
        assert!(assignment < 3);
    }
}

#[test]
fn fitting_is_deterministic() {
    let matrix = toy_count_matrix();
    let first = lda::fit(&LdaConfig::new(2), &matrix.view()).expect("fit succeeds");
    let second = lda::fit(&LdaConfig::new(2), &matrix.view()).expect("fit succeeds");
    assert_eq!(first.assign_all(), second.assign_all());
    assert_eq!(first.topic_word(), second.topic_word());
}

#[test]
fn too_small_corpus_is_a_configuration_error() {
    let matrix = Array2::<f64>::zeros((2, 4));
    let err = lda::fit(&LdaConfig::new(5), &matrix.view()).unwrap_err();
    assert!(err.to_string().contains("5 topics"));
}
