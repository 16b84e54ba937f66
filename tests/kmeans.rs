use ndarray::Array2;
use proptest::prelude::*;
use review_lens::model::kmeans::{self, KMeansConfig};

fn two_blob_matrix() -> Array2<f64> {
    Array2::from_shape_vec(
        (6, 2),
        vec![
            0.0, 0.1, //
            0.1, 0.0, //
            0.05, 0.05, //
            5.0, 5.1, //
            5.1, 5.0, //
            5.05, 5.05,
        ],
    )
    .expect("valid shape")
}

#[test]
fn separated_blobs_land_in_distinct_clusters() {
    let matrix = two_blob_matrix();
    let model = kmeans::fit(&KMeansConfig::new(2), &matrix.view()).expect("fit succeeds");
    let assignments = model.assign_all(&matrix.view());
    assert_eq!(assignments[0], assignments[1]);
    assert_eq!(assignments[0], assignments[2]);
    assert_eq!(assignments[3], assignments[4]);
    assert_eq!(assignments[3], assignments[5]);
    assert_ne!(assignments[0], assignments[3]);
}

#[test]
fn prediction_is_idempotent() {
    let matrix = two_blob_matrix();
    let model = kmeans::fit(&KMeansConfig::new(2), &matrix.view()).expect("fit succeeds");
    let row = matrix.row(0);
    assert_eq!(model.assign(&row), model.assign(&row));
}

#[test]
fn too_small_corpus_is_a_configuration_error() {
    let matrix = Array2::<f64>::zeros((3, 2));
    let err = kmeans::fit(&KMeansConfig::new(10), &matrix.view()).unwrap_err();
    assert!(err.to_string().contains("10 clusters"));
}

#[test]
fn identical_input_reproduces_identical_partition() {
    let matrix = two_blob_matrix();
    let first = kmeans::fit(&KMeansConfig::new(2), &matrix.view()).expect("fit succeeds");
    let second = kmeans::fit(&KMeansConfig::new(2), &matrix.view()).expect("fit succeeds");
    assert_eq!(
        first.assign_all(&matrix.view()),
        second.assign_all(&matrix.view())
    );
}

proptest! {
    // Every assignment must lie in [0, K) no matter the corpus contents.
    #[test]
    fn assignments_stay_in_range(
        values in proptest::collection::vec(0.0f64..1.0, 32),
        clusters in 1usize..4,
    ) {
        let matrix = Array2::from_shape_vec((8, 4), values).expect("valid shape");
        let model = kmeans::fit(&KMeansConfig::new(clusters), &matrix.view())
            .expect("corpus is large enough");
        for assignment in model.assign_all(&matrix.view()) {
            prop_assert!(assignment < clusters);
        }
    }
}
