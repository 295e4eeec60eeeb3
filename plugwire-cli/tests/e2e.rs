//! End-to-end integration tests for plugwire-cli
//!
//! These shell out to `cargo run` and are gated behind the `integration`
//! feature flag. Run with:
//!
//! ```sh
//! cargo test -p plugwire-cli --features integration
//! ```

#![cfg(feature = "integration")]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn plugwire(config: &Path, args: &[&str]) -> Output {
    let project_dir = config.parent().unwrap();
    Command::new("cargo")
        .args(["run", "-q", "-p", "plugwire-cli", "--", "--config"])
        .arg(config)
        .args(args)
        .env("PLUGWIRE_PROJECT_CONFIG_DIR", project_dir.join("no-project"))
        .output()
        .expect("Failed to run plugwire")
}

fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
    std::fs::write(dir.path().join("base.json"), r#"{"options":{"verbose":true}}"#).unwrap();
    let config = dir.path().join("plugwire.toml");
    std::fs::write(
        &config,
        r#"
[plugin]
name = "fixture"

[plugin.sources]
base = "base.json"
"#,
    )
    .unwrap();
    config
}

/// Test that plugwire --help works
#[test]
fn plugwire_help_works() {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "plugwire-cli", "--", "--help"])
        .output()
        .expect("Failed to run plugwire --help");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("call"));
    assert!(stdout.contains("ping"));
}

/// Test that genConfig prints the file contents under the source name
#[test]
fn plugwire_call_generates_configs() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir);

    let output = plugwire(&config, &["call"]);

    assert!(output.status.success());
    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["status"]["code"], 0);
    assert_eq!(
        envelope["response"][0]["base"],
        r#"{"options":{"verbose":true}}"#
    );
}

/// Test that an unknown action exits with status code 1
#[test]
fn plugwire_call_unknown_action_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir);

    let output = plugwire(&config, &["call", "--action", "foo"]);

    assert_eq!(output.status.code(), Some(1));
    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["status"]["message"], "unknown action: foo");
    assert!(envelope.get("response").is_none());
}

/// Test that info reports the config registry
#[test]
fn plugwire_info_reports_registry() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir);

    let output = plugwire(&config, &["info"]);

    assert!(output.status.success());
    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["name"], "fixture");
    assert_eq!(info["registry"], "config");
    assert_eq!(info["routes"], serde_json::json!([]));
}
