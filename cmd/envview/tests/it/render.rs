use assert_fs::prelude::*;
use predicates::prelude::*;

use crate::util::TestEnv;

#[test]
fn renders_html_to_stdout() {
    TestEnv::new()
        .new_cmd("render")
        .env("REACT_APP_NAME", "demo")
        .env("OTHER", "x")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!doctype html>"))
        .stdout(predicate::str::contains("<h1>.env Variables</h1>"))
        .stdout(predicate::str::contains(
            "<li><strong>REACT_APP_NAME:</strong> demo</li>",
        ))
        .stdout(predicate::str::contains("transition: all 0.6s ease-out"))
        .stdout(predicate::str::contains("OTHER").not());
}

#[test]
fn renders_fallback_html() {
    TestEnv::new()
        .new_cmd("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>No REACT_APP_* variables found.</p>"))
        .stdout(predicate::str::contains("<ul").not());
}

#[test]
fn renders_text() {
    TestEnv::new()
        .new_cmd("render")
        .args(["--format", "text", "--title", "Build env"])
        .env("REACT_APP_NAME", "demo")
        .assert()
        .success()
        .stdout("Build env\n\nREACT_APP_NAME: demo\n");
}

#[test]
fn renders_json() {
    let output = TestEnv::new()
        .new_cmd("render")
        .args(["--format", "json"])
        .env("REACT_APP_NAME", "demo")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "heading": ".env Variables",
            "entries": [{"key": "REACT_APP_NAME", "value": "demo"}],
            "fallback": null,
        })
    );
}

#[test]
fn writes_to_file() {
    let env = TestEnv::new();
    env.new_cmd("render")
        .args(["--out", "index.html"])
        .env("REACT_APP_NAME", "demo")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Wrote index.html"));

    let html = std::fs::read_to_string(env.dir.child("index.html").path()).unwrap();
    assert!(html.contains("<li><strong>REACT_APP_NAME:</strong> demo</li>"));
}

#[test]
fn quiet_suppresses_status() {
    let env = TestEnv::new();
    env.new_cmd("render")
        .args(["--out", "index.html", "--quiet"])
        .assert()
        .success()
        .stderr("");
    env.dir.child("index.html").assert(predicate::path::exists());
}
