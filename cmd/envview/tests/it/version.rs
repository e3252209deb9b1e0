use predicates::prelude::*;

use crate::util::TestEnv;

#[test]
fn prints_version() {
    TestEnv::new()
        .new_cmd("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "envview {}",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("default prefix REACT_APP_"));
}

#[test]
fn prints_bash_completion() {
    TestEnv::new()
        .new_cmd("completion")
        .args(["--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_envview()"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("--no-dotenv"));
}
