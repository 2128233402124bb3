//! End-to-end CLI tests for the fusker binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds the binary command with an empty config home so a developer's own
/// config file cannot leak into the test.
fn fusker(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fusker").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_binary_without_input_prints_guidance() {
    let config_home = TempDir::new().unwrap();
    fusker(&config_home)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No patterns provided"));
}

#[test]
fn test_binary_help_displays_usage() {
    let config_home = TempDir::new().unwrap();
    fusker(&config_home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expand bracketed URL range patterns"));
}

#[test]
fn test_binary_version_displays_version() {
    let config_home = TempDir::new().unwrap();
    fusker(&config_home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fusker"));
}

#[test]
fn test_binary_invalid_flag_returns_error() {
    let config_home = TempDir::new().unwrap();
    fusker(&config_home)
        .arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_dry_run_prints_expanded_urls_in_order() {
    let config_home = TempDir::new().unwrap();
    fusker(&config_home)
        .args(["--dry-run", "-q", "http://x/img[08-10].jpg"])
        .assert()
        .success()
        .stdout("http://x/img08.jpg\nhttp://x/img09.jpg\nhttp://x/img10.jpg\n");
}

#[test]
fn test_dry_run_reads_comma_separated_patterns_from_stdin() {
    let config_home = TempDir::new().unwrap();
    fusker(&config_home)
        .args(["--dry-run", "-q"])
        .write_stdin("http://x/[a-b].png, http://y/[1-2].gif\n")
        .assert()
        .success()
        .stdout("http://x/a.png\nhttp://x/b.png\nhttp://y/1.gif\nhttp://y/2.gif\n");
}

#[test]
fn test_dry_run_cross_product_flag() {
    let config_home = TempDir::new().unwrap();
    fusker(&config_home)
        .args(["--dry-run", "-q", "--cross-product", "x[1-2][a-b]"])
        .assert()
        .success()
        .stdout("x1a\nx1b\nx2a\nx2b\n");
}

#[test]
fn test_dry_run_uses_cross_product_from_config_file() {
    let config_home = TempDir::new().unwrap();
    let config_dir = config_home.path().join("fusker");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "cross_product = true\n").unwrap();

    fusker(&config_home)
        .args(["--dry-run", "-q", "x[1-2][a-b]"])
        .assert()
        .success()
        .stdout("x1a\nx1b\nx2a\nx2b\n");
}

#[test]
fn test_invalid_config_file_fails_with_line_number() {
    let config_home = TempDir::new().unwrap();
    let config_dir = config_home.path().join("fusker");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "bogus = 1\n").unwrap();

    fusker(&config_home)
        .args(["--dry-run", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_inverted_range_fails_before_download() {
    let config_home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    fusker(&config_home)
        .arg("-o")
        .arg(out_dir.path())
        .arg("http://127.0.0.1:9/img[5-3].jpg")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[5-3]"));
    assert_eq!(std::fs::read_dir(out_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_output_dir_fails() {
    let config_home = TempDir::new().unwrap();
    let missing = config_home.path().join("does-not-exist");
    fusker(&config_home)
        .arg("-o")
        .arg(&missing)
        .arg("http://127.0.0.1:9/a.jpg")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_save_list_appends_expanded_urls() {
    let config_home = TempDir::new().unwrap();
    let list = config_home.path().join("urls.txt");
    std::fs::write(&list, "existing\n").unwrap();

    fusker(&config_home)
        .args(["--dry-run", "-q", "--save-list"])
        .arg(&list)
        .arg("http://x/[1-2]")
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&list).unwrap(),
        "existing\nhttp://x/1\nhttp://x/2\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_partial_batch_exits_with_code_two() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/img1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"one".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/img2.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config_home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let pattern = format!("{}/img[1-2].jpg", server.uri());

    fusker(&config_home)
        .arg("-q")
        .arg("-o")
        .arg(out_dir.path())
        .arg(&pattern)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("ok "))
        .stdout(predicate::str::contains("failed "))
        .stdout(predicate::str::contains("1 of 2 downloaded, 1 failed"));

    assert_eq!(std::fs::read(out_dir.path().join("img1.jpg")).unwrap(), b"one");
    assert!(!out_dir.path().join("img2.jpg").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output_and_all_failed_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config_home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let pattern = format!("{}/[a-b].png", server.uri());

    let assert = fusker(&config_home)
        .args(["-q", "--json", "-o"])
        .arg(out_dir.path())
        .arg(&pattern)
        .assert()
        .code(1);

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item["status"] == "failed"));
    assert_eq!(items[0]["url"], format!("{}/a.png", server.uri()));
}
