//! Tests for the `statebox` binary.

mod common;

use std::io::Write;
use std::process::{Command, Stdio};

use common::{json_lines, temp_file};
use serde_json::json;

fn statebox_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_statebox"));
    cmd.env_remove("STATEBOX_LOG");
    cmd
}

/// Config file pinning the defaults so user config does not leak in.
fn default_config() -> (tempfile::TempDir, std::path::PathBuf) {
    temp_file("config.toml", "[defaults]\nreducer = \"messenger\"\n")
}

#[test]
fn test_help_shows_reducer_option() {
    let output = statebox_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--reducer"));
    assert!(stdout.contains("messenger"));
}

#[test]
fn test_replays_script_file() {
    let (_cfg_dir, config) = default_config();
    let (_dir, script) = temp_file(
        "script.jsonl",
        "{\"type\": \"edited_message\", \"message\": \"hi\"}\n",
    );

    let output = statebox_cmd()
        .arg("--config")
        .arg(&config)
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(
        json_lines(&output.stdout),
        vec![json!({"selected_id": 0, "messages": {"0": "hi"}})]
    );
}

#[test]
fn test_reads_stdin_when_no_script() {
    let (_cfg_dir, config) = default_config();
    let mut child = statebox_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--reducer")
        .arg("tasks")
        .arg("--quiet")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"{\"type\": \"added\", \"text\": \"a\"}\n")
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"{\"type\": \"added\", \"text\": \"b\"}\n")
        .unwrap();
    // Closes stdin before waiting.
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let states = json_lines(&output.stdout);
    assert_eq!(states.len(), 1);
    assert_eq!(states[0]["tasks"][1]["id"], 1);
}

#[test]
fn test_unknown_action_exits_with_error() {
    let (_cfg_dir, config) = default_config();
    let (_dir, script) = temp_file(
        "script.jsonl",
        "{\"type\": \"sent_message\"}\n{\"type\": \"bogus\"}\n",
    );

    let output = statebox_cmd()
        .arg("--config")
        .arg(&config)
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Line 2: action rejected"), "{stderr}");
    assert!(stderr.contains("Unknown action type 'bogus'"), "{stderr}");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_cfg_dir, config) = temp_file("config.toml", "[messenger]\nselected_id = 5\n");

    let output = statebox_cmd()
        .arg("--config")
        .arg(&config)
        .arg("-")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "{stderr}");
}

#[test]
fn test_missing_script_file_exits_with_error() {
    let (_cfg_dir, config) = default_config();
    let output = statebox_cmd()
        .arg("--config")
        .arg(&config)
        .arg("/nonexistent/script.jsonl")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to open script"), "{stderr}");
}
