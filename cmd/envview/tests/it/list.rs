use predicates::prelude::*;

use crate::util::TestEnv;

#[test]
fn lists_prefixed_variables_only() {
    TestEnv::new()
        .new_cmd("list")
        .env("REACT_APP_NAME", "demo")
        .env("OTHER", "x")
        .assert()
        .success()
        .stdout("REACT_APP_NAME: demo\n");
}

#[test]
fn empty_environment_prints_fallback() {
    TestEnv::new()
        .new_cmd("list")
        .assert()
        .success()
        .stdout("No REACT_APP_* variables found.\n");
}

#[test]
fn reads_dotenv_from_working_directory() {
    let env = TestEnv::new();
    env.write(".env", "REACT_APP_FROM_FILE=yes\nREACT_APP_NAME=file\n");

    env.new_cmd("list")
        .env("REACT_APP_NAME", "env")
        .assert()
        .success()
        .stdout(predicate::str::contains("REACT_APP_NAME: env\n"))
        .stdout(predicate::str::contains("REACT_APP_FROM_FILE: yes\n"))
        .stdout(predicate::str::contains("REACT_APP_NAME: file").not());
}

#[test]
fn no_dotenv_ignores_working_directory_file() {
    let env = TestEnv::new();
    env.write(".env", "REACT_APP_FROM_FILE=yes\n");

    env.new_cmd("list")
        .arg("--no-dotenv")
        .assert()
        .success()
        .stdout("No REACT_APP_* variables found.\n");
}

#[test]
fn no_dotenv_overrides_env_file_from_environment() {
    let env = TestEnv::new();
    env.write("vars.env", "REACT_APP_FROM_FILE=yes\n");

    env.new_cmd("list")
        .arg("--no-dotenv")
        .env("ENVVIEW_ENV_FILE", "vars.env")
        .assert()
        .success()
        .stdout("No REACT_APP_* variables found.\n");

    env.new_cmd("list")
        .env("ENVVIEW_ENV_FILE", "vars.env")
        .assert()
        .success()
        .stdout("REACT_APP_FROM_FILE: yes\n");
}

#[test]
fn explicit_env_file_must_exist() {
    TestEnv::new()
        .new_cmd("list")
        .args(["--env-file", "missing.env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading env file missing.env"));
}

#[test]
fn prefix_from_flag_env_and_config_file() {
    let env = TestEnv::new();
    env.write("envview.toml", "prefix = \"VITE_\"\n");

    env.new_cmd("list")
        .env("VITE_API", "from-config")
        .assert()
        .success()
        .stdout("VITE_API: from-config\n");

    env.new_cmd("list")
        .env("ENVVIEW_PREFIX", "NEXT_PUBLIC_")
        .env("NEXT_PUBLIC_API", "from-env")
        .assert()
        .success()
        .stdout("NEXT_PUBLIC_API: from-env\n");

    env.new_cmd("list")
        .args(["--prefix", "REACT_APP_"])
        .env("ENVVIEW_PREFIX", "NEXT_PUBLIC_")
        .env("REACT_APP_API", "from-flag")
        .assert()
        .success()
        .stdout("REACT_APP_API: from-flag\n");
}

#[test]
fn bad_config_file_is_reported() {
    let env = TestEnv::new();
    env.write("envview.toml", "prefix = 3\n");

    env.new_cmd("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
