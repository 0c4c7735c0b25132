//
//  instaapi
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SESSION: &str = r#"{
    "session": {
        "username": "corner.shop",
        "logged_in_user": {"pk": 1784140, "username": "corner.shop"},
        "csrf_token": "csrf-token-123",
        "is_authenticated": true
    }
}"#;

/// A config directory with the keyring disabled.
fn config_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[core]\nuse_keyring = false\n",
    )
    .unwrap();
    dir
}

fn insta(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("insta").unwrap();
    cmd.env("INSTA_CONFIG_DIR", dir)
        .env_remove("INSTA_API_URL")
        .env_remove("INSTA_GRAPH_URL")
        .env_remove("INSTA_LOG");
    cmd
}

fn import_session(dir: &Path) {
    import_session_expecting(dir, "Imported session for @corner.shop");
}

fn import_session_expecting(dir: &Path, stdout: &str) {
    let file = dir.join("export.json");
    std::fs::write(&file, SESSION).unwrap();
    insta(dir)
        .args(["session", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(stdout));
}

#[test]
fn version_prints_name() {
    let dir = config_dir();
    insta(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("insta version "));
}

#[test]
fn config_path_uses_override() {
    let dir = config_dir();
    insta(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_set_then_get() {
    let dir = config_dir();
    insta(dir.path())
        .args(["config", "set", "api.locale", "de-DE"])
        .assert()
        .success();
    insta(dir.path())
        .args(["config", "get", "api.locale"])
        .assert()
        .success()
        .stdout("de-DE\n");
    insta(dir.path())
        .args(["config", "get", "core.use_keyring"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn config_rejects_unknown_key() {
    let dir = config_dir();
    insta(dir.path())
        .args(["config", "get", "core.editor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn session_status_without_session() {
    let dir = config_dir();
    insta(dir.path())
        .args(["session", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No session imported"));
}

#[test]
fn session_status_follows_configured_output() {
    let dir = config_dir();
    insta(dir.path())
        .args(["config", "set", "core.output", "json"])
        .assert()
        .success();
    insta(dir.path())
        .args(["session", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""logged_in": false"#));

    import_session_expecting(dir.path(), r#""username": "corner.shop""#);
    insta(dir.path())
        .args(["session", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""success": true"#));
}

#[test]
fn business_without_session_is_auth_error() {
    let dir = config_dir();
    insta(dir.path())
        .args(["business", "stats"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No session imported"));
}

#[test]
fn session_import_status_logout() {
    let dir = config_dir();
    import_session(dir.path());

    insta(dir.path())
        .args(["session", "status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""logged_in": true"#))
        .stdout(predicate::str::contains(r#""username": "corner.shop""#));

    insta(dir.path())
        .args(["session", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session removed"));
    assert!(!dir.path().join("session.json").exists());
}

#[test]
fn session_import_rejects_logged_out_export() {
    let dir = config_dir();
    let file = dir.path().join("export.json");
    std::fs::write(&file, r#"{"username": "corner.shop", "is_authenticated": false}"#).unwrap();

    insta(dir.path())
        .args(["session", "import"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"));
    assert!(!dir.path().join("session.json").exists());
}

#[test]
fn direct_star_against_server() {
    let dir = config_dir();
    import_session(dir.path());

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/v1/direct_v2/threads/42/label/")
        .match_body(mockito::Matcher::UrlEncoded(
            "_csrftoken".into(),
            "csrf-token-123".into(),
        ))
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create();

    insta(dir.path())
        .args(["direct", "star", "42", "--json", "--api-url"])
        .arg(server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""starred": true"#));
    mock.assert();
}

#[test]
fn rate_limited_exit_code() {
    let dir = config_dir();
    import_session(dir.path());

    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/v1/feed/promotable_media/")
        .with_status(429)
        .with_body(r#"{"status": "fail", "message": "Please wait a few minutes"}"#)
        .create();

    insta(dir.path())
        .args(["business", "promotable", "--api-url"])
        .arg(server.url())
        .assert()
        .code(32)
        .stderr(predicate::str::contains("Please wait a few minutes"));
}

#[test]
fn completion_generates_script() {
    let dir = config_dir();
    insta(dir.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("insta"));
}
