use review_lens::data::reviews::load_reviews;
use review_lens::pipeline;

fn write_fixture(dir: &std::path::Path) -> std::path::PathBuf {
    let input = dir.join("reviews.tsv");
    let mut body = String::from("review_body\tstar_rating\tproduct_id\tproduct_title\n");
    let reviews = [
        "Great sturdy phone with a nice bright screen",
        "Terrible flimsy case, bad quality",
        "Amazing camera, excellent photos",
        "Poor battery, slow charging",
        "Nice light design, easy setup",
        "Awful screen, cheap plastic",
        "Good value, great price",
        "Bad customer service, broken on arrival",
        "Excellent sound, loud speakers",
        "Weak signal, poor reception",
        "Solid build, heavy but durable",
        "Small battery, short life",
    ];
    for (idx, review) in reviews.iter().enumerate() {
        body.push_str(&format!("{review}\t{}\tP{idx}\tAcme Phone\n", (idx % 5) + 1));
    }
    // Rows with a missing body or product id must be dropped.
    body.push_str("\t3\tP99\tAcme Phone\n");
    body.push_str("Orphan review\t3\t\tAcme Phone\n");
    std::fs::write(&input, body).expect("write fixture");
    input
}

#[test]
fn null_rows_are_dropped_at_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_fixture(dir.path());
    let reviews = load_reviews(&input).expect("load succeeds");
    assert_eq!(reviews.len(), 12);
    assert!(reviews.iter().all(|r| !r.body.is_empty()));
}

#[test]
fn missing_required_column_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("bad.tsv");
    std::fs::write(&input, "review_body\tstar_rating\nGreat\t5\n").expect("write fixture");
    let err = load_reviews(&input).unwrap_err();
    assert!(err.to_string().contains("product_id"));
}

#[test]
fn cluster_flow_produces_one_row_per_review() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_fixture(dir.path());
    let output = dir.path().join("clusters.csv");

    pipeline::run_cluster(&input, &output, 3).expect("flow succeeds");

    let mut reader = csv::Reader::from_path(&output).expect("open output");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "review_body",
            "star_rating",
            "product_id",
            "product_title",
            "cluster",
            "cluster_name"
        ]
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 12);
    for row in &rows {
        let cluster: usize = row[4].parse().expect("cluster id");
        assert!(cluster < 3);
        assert!(!row[5].is_empty(), "cluster name must be non-empty");
    }
}

#[test]
fn topic_flow_produces_topic_names() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_fixture(dir.path());
    let output = dir.path().join("topics.csv");

    pipeline::run_topics(&input, &output, 2, 10).expect("flow succeeds");

    let mut reader = csv::Reader::from_path(&output).expect("open output");
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 12);
    for row in &rows {
        let topic: usize = row[4].parse().expect("topic id");
        assert!(topic < 2);
        assert!(!row[5].is_empty(), "topic name must be non-empty");
    }
}

#[test]
fn undersized_corpus_is_rejected_before_fitting() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_fixture(dir.path());
    let output = dir.path().join("clusters.csv");
    let err = pipeline::run_cluster(&input, &output, 50).unwrap_err();
    assert!(err.to_string().contains("50 clusters"));
    assert!(!output.exists());
}
