use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("review-lens").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn cluster_help_mentions_cluster_count() {
    let mut cmd = Command::cargo_bin("review-lens").expect("binary exists");
    let output = cmd.args(["cluster", "--help"]).output().expect("runs");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--clusters"));
}
