use assert_cmd::Command;

mod common;
use common::{fixture, read_text, section};

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("-V");
    cmd.assert().success().stdout("iplkit 0.1.0\n");
}

// map subcommand tests

#[test]
fn map_writes_ipl_and_ide() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("sample.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("map")
        .arg(fixture("sample_scene.json"))
        .arg("-o")
        .arg(&output);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Exported 3 instance(s)"))
        .stdout(predicates::str::contains("IDE: 2 definition(s)"));

    assert!(output.is_file());
    assert!(temp.path().join("sample.ide").is_file());
}

#[test]
fn map_no_ide_flag() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("sample.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("map")
        .arg(fixture("sample_scene.json"))
        .arg("-o")
        .arg(&output)
        .arg("--no-ide");
    cmd.assert().success();

    assert!(output.is_file());
    assert!(!temp.path().join("sample.ide").exists());
}

#[test]
fn map_game_flag_selects_layout() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("sample.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("map")
        .arg(fixture("sample_scene.json"))
        .arg("-o")
        .arg(&output)
        .args(["--game", "iii"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("GTA III"));

    let ipl = read_text(&output);
    assert_eq!(
        section(&ipl, "inst")[0],
        "1, streetlamp, 10.0, 20.0, 0.0, 1, 1, 1, 0, 0, 0, 1"
    );
}

#[test]
fn game_env_var_is_used() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("sample.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.env("IPLKIT_GAME", "vc")
        .arg("map")
        .arg(fixture("sample_scene.json"))
        .arg("-o")
        .arg(&output);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("GTA Vice City"));
}

#[test]
fn unknown_game_falls_back_to_sa() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("sample.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("map")
        .arg(fixture("sample_scene.json"))
        .arg("-o")
        .arg(&output)
        .args(["--game", "not-a-game"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("GTA San Andreas"));
}

#[test]
fn map_json_report() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("sample.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("map")
        .arg(fixture("sample_scene.json"))
        .arg("-o")
        .arg(&output)
        .args(["--report", "json"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"instances\": 3"))
        .stdout(predicates::str::contains("\"status\": \"written\""));
}

#[test]
fn map_partial_failure_exits_non_zero_but_keeps_ipl() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("sample.ipl");
    std::fs::create_dir(temp.path().join("sample.ide")).expect("block ide path");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("map")
        .arg(fixture("sample_scene.json"))
        .arg("-o")
        .arg(&output);
    cmd.assert()
        .failure()
        .stdout(predicates::str::contains("IDE FAILED"))
        .stderr(predicates::str::contains("IDE export"));

    assert!(output.is_file());
}

// ipl subcommand tests

#[test]
fn ipl_from_yaml_scene() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("yaml.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("ipl")
        .arg(fixture("sample_scene.yaml"))
        .arg("-o")
        .arg(&output);
    cmd.assert().success();

    let ipl = read_text(&output);
    assert_eq!(
        section(&ipl, "inst"),
        vec!["1, streetlamp, 0, 10.0, 20.0, 0.0, 0, 0, 0, 1, -1"]
    );
    assert_eq!(section(&ipl, "cull").len(), 1);
}

#[test]
fn ipl_no_cull_flag() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("inst_only.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("ipl")
        .arg(fixture("sample_scene.json"))
        .arg("-o")
        .arg(&output)
        .arg("--no-cull");
    cmd.assert().success();

    let ipl = read_text(&output);
    assert_eq!(section(&ipl, "inst").len(), 4);
    assert!(section(&ipl, "cull").is_empty());
}

#[test]
fn nothing_selected_writes_nothing() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("empty.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("ipl")
        .arg(fixture("nothing_selected.json"))
        .arg("-o")
        .arg(&output)
        .arg("--only-selected");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Nothing to export"));

    assert!(!output.exists());
}

#[test]
fn nothing_selected_json_report_is_valid_json() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("empty.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("ipl")
        .arg(fixture("nothing_selected.json"))
        .arg("-o")
        .arg(&output)
        .arg("--only-selected")
        .args(["--report", "json"]);
    let assert = cmd.assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout");
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).expect("parse report");
    assert_eq!(report["status"], "nothing-to-export");
    assert!(!output.exists());
}

#[test]
fn invalid_scene_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("out.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("ipl")
        .arg(fixture("invalid_scene.json"))
        .arg("-o")
        .arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Failed to parse scene JSON"));

    assert!(!output.exists());
}

#[test]
fn nonexistent_scene_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.args(["ipl", "nonexistent_scene.json", "-o"])
        .arg(temp.path().join("out.ipl"));
    cmd.assert().failure();
}

#[test]
fn unwritable_destination_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = temp.path().join("missing_dir").join("out.ipl");

    let mut cmd = Command::cargo_bin("iplkit").unwrap();
    cmd.arg("map")
        .arg(fixture("sample_scene.json"))
        .arg("-o")
        .arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Failed to write"));
}
