use assert_cmd::Command;
use predicates::prelude::*;

fn devlog(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("devlog").unwrap();
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("DEVLOG_SETTINGS")
        .env_remove("DEVLOG_ENABLED")
        .env_remove("DEVLOG_TABLE_SEPARATOR");
    cmd
}

#[test]
fn test_table_from_stdin() {
    let home = tempfile::tempdir().unwrap();
    devlog(home.path())
        .write_stdin("[1, 2, 3]")
        .assert()
        .success()
        .stdout("\n0 | 1\n1 | 2\n2 | 3\n");
}

#[test]
fn test_object_keys_sorted() {
    let home = tempfile::tempdir().unwrap();
    devlog(home.path())
        .write_stdin(r#"{"b": 2, "a": 1}"#)
        .assert()
        .success()
        .stdout("\na | 1\nb | 2\n");
}

#[test]
fn test_dump_mode_from_file() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("input.json");
    std::fs::write(&input, r#"{"name": "edge", "up": true}"#).unwrap();

    devlog(home.path())
        .arg("--mode")
        .arg("dump")
        .arg(&input)
        .assert()
        .success()
        .stdout("\n{\n  \"name\": \"edge\",\n  \"up\": true\n}\n");
}

#[test]
fn test_settings_separator() {
    let home = tempfile::tempdir().unwrap();
    let settings = home.path().join("devlog.toml");
    std::fs::write(&settings, "tableSeparator = \" ; \"\n").unwrap();

    devlog(home.path())
        .arg("--settings")
        .arg(&settings)
        .write_stdin("[null]")
        .assert()
        .success()
        .stdout("\n0 ; nil\n");
}

#[test]
fn test_separator_flag_wins() {
    let home = tempfile::tempdir().unwrap();
    devlog(home.path())
        .args(["--separator", "/"])
        .write_stdin("[[1, 2]]")
        .assert()
        .success()
        .stdout("\n0/0/1\n /1/2\n");
}

#[test]
fn test_level_sends_to_stderr() {
    let home = tempfile::tempdir().unwrap();
    devlog(home.path())
        .args(["--level", "warn"])
        .write_stdin("[7]")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::starts_with("[DEVLOG] ").and(predicate::str::contains("\n0 | 7\n")));
}

#[test]
fn test_invalid_json() {
    let home = tempfile::tempdir().unwrap();
    devlog(home.path())
        .write_stdin("{not json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid JSON input"));
}
