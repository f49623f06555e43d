use assert_cmd::Command;
use predicates::prelude::*;

fn magview() -> Command {
    Command::cargo_bin("magview").unwrap()
}

#[test]
fn svg_backend_writes_labelled_plot() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("mag.svg");

    magview()
        .args(["--backend", "svg", "--output"])
        .arg(&output)
        .args(["--width", "640", "--height", "480"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mag.svg"));

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("3D Scatter Plot of Magnetometer Data"));
    assert!(svg.contains("X [uT]"));
    assert!(svg.contains("Y [uT]"));
    assert!(svg.contains("Z [uT]"));
    assert!(svg.contains("width=\"640\""));
}

#[test]
fn png_output_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("plot.png");

    magview()
        .args(["--backend", "svg", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("raster images are not supported"));

    assert!(!output.exists());
}

#[test]
fn unknown_backend_is_reported() {
    magview()
        .args(["--backend", "gtk4cairo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backend unavailable: gtk4cairo"));
}

#[test]
fn terminal_backend_needs_a_terminal() {
    // assert_cmd pipes stdout, so there is no terminal to draw on.
    magview()
        .args(["--backend", "terminal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdout is not a terminal"));
}

#[test]
fn no_backend_and_no_terminal_fails() {
    magview()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backend unavailable: default"));
}

#[test]
fn log_file_records_run() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("magview.log");
    let output = dir.path().join("plot.svg");

    magview()
        .args(["--backend", "svg", "--output"])
        .arg(&output)
        .arg("--log")
        .arg(&log)
        .env_remove("RUST_LOG")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting Magview"));
    assert!(contents.contains("Exported figure to"));
}
