use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn help_lists_the_flags() {
    Command::cargo_bin("berth_cli")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--headless"));
}

#[test]
fn missing_runtime_exits_with_its_code() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("berth.json");

    // A runtime program that cannot exist on the PATH.
    let config = r#"
    {
        "target_url": "http://127.0.0.1:4400",
        "readiness": { "max_wait_secs": 1 },
        "stack": {
            "runtime_program": "berth-test-no-such-runtime",
            "daemon_check": ["berth-test-no-such-runtime", "info"],
            "up": ["berth-test-no-such-runtime", "up"]
        }
    }
    "#;
    fs::write(&config_path, config).unwrap();

    Command::cargo_bin("berth_cli")
        .unwrap()
        .arg("--headless")
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .assert()
        .code(10)
        .stdout(predicate::str::contains("No container runtime was found"));
}

#[cfg(unix)]
#[test]
fn daemon_off_headless_quits_with_its_code() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("berth.json");

    // Runtime present (sh), daemon check fails: the headless prompt answers
    // Quit.
    let config = r#"
    {
        "target_url": "http://127.0.0.1:4400",
        "readiness": { "max_wait_secs": 1 },
        "stack": {
            "runtime_program": "sh",
            "daemon_check": ["sh", "-c", "exit 1"],
            "up": ["sh", "-c", "exit 0"]
        }
    }
    "#;
    fs::write(&config_path, config).unwrap();

    Command::cargo_bin("berth_cli")
        .unwrap()
        .arg("--headless")
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .assert()
        .code(11);
}
