use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;

/// Run inside an empty directory so no stray `.env` or config file is picked
/// up.
fn command(dir: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("lostfoundctl");
    cmd.current_dir(dir.path())
        .env_remove("LOSTFOUND_CONFIG_PATH")
        .env_remove("LOSTFOUND_CONFIG_JSON")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn demo_profile_prints_loaded_fields() {
    let dir = tempfile::tempdir().unwrap();
    let output = command(&dir)
        .args(["--demo", "profile", "--user", "u123"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);

    assert!(text.contains("Asha"));
    assert!(text.contains("asha@example.com"));
    assert!(text.contains("Points : 5"));
}

#[test]
fn demo_profile_for_unknown_user_fails_with_alert() {
    let dir = tempfile::tempdir().unwrap();
    let output = command(&dir)
        .args(["--demo", "profile", "--user", "u999"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    assert!(String::from_utf8_lossy(&output).contains("User Information not found"));
}

#[test]
fn demo_sign_out_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let output = command(&dir)
        .args(["--demo", "sign-out", "--user", "u123"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);

    assert!(text.contains("signed out"));
    assert!(text.contains("push subscription removed"));
}

#[test]
fn config_reads_explicit_file_and_redacts_secrets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        "[firestore]\nproject_id = \"demo\"\napi_key = \"very-secret\"\n\n[push]\napp_id = 13599\napp_token = \"also-secret\"\n",
    )
    .unwrap();

    let output = command(&dir)
        .arg("--config")
        .arg(&path)
        .args(["config", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);

    assert!(text.contains("\"project_id\": \"demo\""));
    assert!(text.contains("13599"));
    assert!(!text.contains("very-secret"));
    assert!(!text.contains("also-secret"));
}
