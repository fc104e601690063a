//! Integration tests that invoke the compiled `nxrm` binary

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the nxrm binary pointed at `config`
fn nxrm_cmd(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nxrm").expect("Failed to find nxrm binary");
    cmd.env_remove("NXRM_CONFIG").arg("--config").arg(config);
    cmd
}

fn add_server(config: &Path, kind: &str, id: &str, url: &str) {
    nxrm_cmd(config)
        .args([
            "add",
            "--kind",
            kind,
            "--id",
            id,
            "--display-name",
            &format!("Server {id}"),
            "--server-url",
            url,
            "--credentials-id",
            "cred-123",
        ])
        .assert()
        .success();
}

#[test]
fn test_help_exits_zero() {
    let temp = TempDir::new().unwrap();
    nxrm_cmd(&temp.path().join("nxrm.toml"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("descriptors"));
}

#[test]
fn test_descriptors_lists_test_server() {
    let temp = TempDir::new().unwrap();
    nxrm_cmd(&temp.path().join("nxrm.toml"))
        .arg("descriptors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nexus Repository Manager Test Server"))
        .stdout(predicate::str::contains("Nexus Repository Manager 3.x Server"))
        .stdout(predicate::str::contains("unspecified"));
}

#[test]
fn test_list_empty() {
    let temp = TempDir::new().unwrap();
    nxrm_cmd(&temp.path().join("nxrm.toml"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No servers configured"));
}

#[test]
fn test_add_writes_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nxrm.toml");

    add_server(&config, "nxrm3", "main", "https://nexus.example.com");

    let content = std::fs::read_to_string(&config).unwrap();
    let parsed: toml::Value = toml::from_str(&content).unwrap();
    let servers = parsed["servers"].as_array().unwrap();
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0]["kind"].as_str(), Some("nxrm3"));
    assert_eq!(servers[0]["id"].as_str(), Some("main"));
    assert!(!servers[0]["internalId"].as_str().unwrap().is_empty());
}

#[test]
fn test_list_json_reports_absent_version() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nxrm.toml");
    add_server(&config, "simple", "srv1", "https://nxrm.example.com");
    add_server(&config, "nxrm2", "legacy", "https://legacy.example.com");

    let output = nxrm_cmd(&config).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let servers: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(servers[0]["id"], "srv1");
    assert!(servers[0]["version"].is_null());
    assert_eq!(servers[1]["version"], "nxrm2");
}

#[test]
fn test_show_unversioned_server() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nxrm.toml");
    add_server(&config, "simple", "srv1", "https://nxrm.example.com");

    nxrm_cmd(&config)
        .args(["show", "srv1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nexus Repository Manager Test Server"))
        .stdout(predicate::str::contains("unspecified"))
        .stdout(predicate::str::contains("cred-123"));
}

#[test]
fn test_add_duplicate_id_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nxrm.toml");
    add_server(&config, "nxrm3", "main", "https://nexus.example.com");

    nxrm_cmd(&config)
        .args([
            "add",
            "--kind",
            "nxrm2",
            "--id",
            "main",
            "--display-name",
            "Other",
            "--server-url",
            "https://other.example.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate server id"));
}

#[test]
fn test_add_malformed_url_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nxrm.toml");

    nxrm_cmd(&config)
        .args([
            "add",
            "--kind",
            "nxrm3",
            "--id",
            "main",
            "--display-name",
            "Main",
            "--server-url",
            "nexus.example.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed URL"));
    assert!(!config.exists());
}

#[test]
fn test_add_unknown_kind_fails() {
    let temp = TempDir::new().unwrap();
    nxrm_cmd(&temp.path().join("nxrm.toml"))
        .args([
            "add",
            "--kind",
            "nxrm4",
            "--id",
            "x",
            "--display-name",
            "X",
            "--server-url",
            "https://x.example.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration kind"));
}

#[test]
fn test_remove_then_check() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nxrm.toml");
    add_server(&config, "nxrm3", "a", "https://a.example.com");
    add_server(&config, "nxrm3", "b", "https://b.example.com");

    nxrm_cmd(&config).args(["remove", "a"]).assert().success();
    nxrm_cmd(&config)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 server(s) valid"));

    nxrm_cmd(&config)
        .args(["remove", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Server not found"));
}

#[test]
fn test_anonymous_server_warns() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nxrm.json");

    nxrm_cmd(&config)
        .args([
            "add",
            "--kind",
            "nxrm3",
            "--id",
            "anon",
            "--display-name",
            "Anonymous",
            "--server-url",
            "https://nexus.example.com",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("anonymous access"));
    assert!(config.exists());
}
