#[path = "common/mod.rs"]
mod common;

use std::path::Path;

use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::tempdir;

fn jarlaunch() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("jarlaunch"))
}

#[test]
fn missing_resources_dir_fails() {
    let temp = tempdir().expect("failed to create tempdir");
    let config = common::write_config(temp.path(), Path::new("/nonexistent/java"));

    jarlaunch()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("Failed to read artifacts directory"));
}

#[test]
fn empty_resources_dir_reports_no_artifact() {
    let temp = tempdir().expect("failed to create tempdir");
    common::resources_with(temp.path(), &["notes.txt"]);
    let config = common::write_config(temp.path(), Path::new("/nonexistent/java"));

    jarlaunch()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("No artifact matching 'bot-*.jar'"));
}

#[test]
fn malformed_version_fails() {
    let temp = tempdir().expect("failed to create tempdir");
    common::resources_with(temp.path(), &["bot-1.two.0.jar"]);
    let config = common::write_config(temp.path(), Path::new("/nonexistent/java"));

    jarlaunch()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("Invalid version '1.two.0'"));
}

#[test]
fn missing_interpreter_is_a_spawn_error() {
    let temp = tempdir().expect("failed to create tempdir");
    common::resources_with(temp.path(), &["bot-1.0.0.jar"]);
    let config = common::write_config(temp.path(), Path::new("/nonexistent/java"));

    jarlaunch()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("Failed to start '/nonexistent/java'"));
}

#[test]
fn root_flag_overrides_config_root() {
    let temp = tempdir().expect("failed to create tempdir");
    let config = common::write_config(temp.path(), Path::new("/nonexistent/java"));
    let other = temp.path().join("other");
    common::resources_with(&other, &[]);

    jarlaunch()
        .arg("--config")
        .arg(&config)
        .arg("--root")
        .arg(&other)
        .assert()
        .failure()
        .stderr(contains("No artifact matching"));
}

#[test]
fn rejects_invalid_log_level() {
    jarlaunch()
        .arg("--log-level")
        .arg("loud")
        .assert()
        .failure()
        .stderr(contains("invalid log level"));
}

#[cfg(unix)]
#[test]
fn reports_clean_exit_of_newest_artifact() {
    let temp = tempdir().expect("failed to create tempdir");
    common::resources_with(temp.path(), &["bot-1.2.0.jar", "bot-1.10.0.jar"]);
    let interpreter =
        common::fake_interpreter(temp.path(), "sleep 0.3\necho \"child: $4\"\nexit 0");
    let config = common::write_config(temp.path(), &interpreter);

    jarlaunch()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(contains("child: ").and(contains("bot-1.10.0.jar")))
        .stderr(contains("Using artifact:").and(contains("exited with code 0")));
}

#[cfg(unix)]
#[test]
fn reports_failing_exit_code() {
    let temp = tempdir().expect("failed to create tempdir");
    common::resources_with(temp.path(), &["bot-2.0.0.jar"]);
    let interpreter = common::fake_interpreter(temp.path(), "exit 7");
    let config = common::write_config(temp.path(), &interpreter);

    // The launch itself succeeded, so the launcher does too.
    jarlaunch()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stderr(contains("exited with code 7"));
}

#[cfg(unix)]
#[test]
fn detach_returns_without_exit_report() {
    let temp = tempdir().expect("failed to create tempdir");
    common::resources_with(temp.path(), &["bot-1.0.0.jar"]);
    let interpreter = common::fake_interpreter(temp.path(), "sleep 1");
    let config = common::write_config(temp.path(), &interpreter);

    jarlaunch()
        .arg("--config")
        .arg(&config)
        .arg("--detach")
        .assert()
        .success()
        .stderr(contains("Detaching from pid").and(contains("exited with code").not()));
}
