#![allow(deprecated)]

use almarecords::test_utils::SAMPLE_USER;
use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn almarec_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("almarec"));
    cmd.current_dir(cwd)
        .env_remove("ALMAREC_DATA_DIR")
        .env_remove("ALMAREC_DEFAULT_ACTION")
        .env_remove("ALMAREC_PRETTY")
        .env_remove("ALMAREC_LOG_LEVEL");
    cmd
}

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("stored.json"), SAMPLE_USER).unwrap();
    temp
}

#[test]
fn test_show_summary() {
    let temp = setup();
    almarec_cmd(temp.path())
        .args(["show", "stored.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jdoe  Jane Doe"))
        .stdout(predicate::str::contains("1 internal, 1 external"));
}

#[test]
fn test_show_reads_stdin() {
    let temp = setup();
    almarec_cmd(temp.path())
        .args(["show", "-", "--raw"])
        .write_stdin(r#"{"primary_id": "piped"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""primary_id": "piped""#));
}

#[test]
fn test_merge_deletes_omitted_external_segments() {
    let temp = setup();
    fs::write(
        temp.path().join("incoming.json"),
        r#"{"user_identifier": [], "user_role": [], "last_name": "Smith"}"#,
    )
    .unwrap();

    almarec_cmd(temp.path())
        .args(["merge", "stored.json", "incoming.json", "--action", "update"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"B-1\""))
        .stdout(predicate::str::contains("\"U-1\"").not())
        .stdout(predicate::str::contains("\"21\""))
        .stdout(predicate::str::contains("Smith"));
}

#[test]
fn test_merge_rejects_unknown_action() {
    let temp = setup();
    almarec_cmd(temp.path())
        .args(["merge", "stored.json", "stored.json", "-a", "replace"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown merge action 'replace'"));
}

#[test]
fn test_put_get_list_workflow() {
    let temp = setup();
    let data = temp.path().join("data");
    let data_arg = data.to_str().unwrap();

    almarec_cmd(temp.path())
        .args(["--data-dir", data_arg, "put", "jdoe", "stored.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored users/jdoe (update)"));
    assert!(data.join("users").join("jdoe.json").exists());

    fs::write(
        temp.path().join("update.json"),
        r#"{"user_note": [{"note_text": "From feed"}]}"#,
    )
    .unwrap();
    almarec_cmd(temp.path())
        .args(["--data-dir", data_arg, "put", "jdoe", "update.json", "-a", "sync"])
        .assert()
        .success();

    almarec_cmd(temp.path())
        .args(["--data-dir", data_arg, "get", "jdoe", "--field", "user_note"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Staff note"))
        .stdout(predicate::str::contains("From feed"))
        .stdout(predicate::str::contains("Feed note").not());

    almarec_cmd(temp.path())
        .args(["--data-dir", data_arg, "get", "jdoe", "-f", "user_group"])
        .assert()
        .success()
        .stdout("UNDERGRAD (Undergraduate)\n");

    almarec_cmd(temp.path())
        .args(["--data-dir", data_arg, "list"])
        .assert()
        .success()
        .stdout("jdoe\n");
}

#[test]
fn test_sync_put_of_new_user_marks_segments_external() {
    let temp = setup();
    fs::write(
        temp.path().join("new.json"),
        r#"{"primary_id": "n", "user_identifier": [{"value": "B-7", "segment_type": "Internal"}]}"#,
    )
    .unwrap();

    almarec_cmd(temp.path())
        .args(["--data-dir", "data", "put", "n", "new.json", "-a", "sync"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored users/n (sync)"));

    let stored = fs::read_to_string(temp.path().join("data").join("users").join("n.json")).unwrap();
    assert!(stored.contains("\"External\""));
    assert!(!stored.contains("Internal"));
}

#[test]
fn test_get_missing_record() {
    let temp = setup();
    almarec_cmd(temp.path())
        .args(["--data-dir", "data", "get", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record not found: users/nobody"));
}

#[test]
fn test_config_file_in_working_directory() {
    let temp = setup();
    fs::write(
        temp.path().join("almarec.toml"),
        "data_dir = \"records\"\npretty = false\n",
    )
    .unwrap();

    almarec_cmd(temp.path())
        .args(["put", "jdoe", "stored.json"])
        .assert()
        .success();
    assert!(temp.path().join("records").join("users").join("jdoe.json").exists());

    almarec_cmd(temp.path())
        .args(["get", "jdoe"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"primary_id":"jdoe""#));
}
