use std::{fs, process::Command};

use crate::common::{fixture, BINARY_PATH};

fn run(args: &[&str]) -> std::process::Output {
    Command::new(BINARY_PATH)
        .args(args)
        .env_remove("EMPTYKIT_CONFIG_PATH")
        .env("RUST_LOG", "off")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("process should start")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn check_prints_emptiness() {
    let output = run(&["check", "[]"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), r#"{"empty":true,"kind":"slice"}"#);
}

#[test]
fn chunk_reads_size_from_config() {
    let config = fixture("tests/fixtures/config_valid.toml");
    let output = run(&["--config", &config, "chunk", "[1,2,3,4]"]);
    assert!(output.status.success(), "{output:?}");

    let groups: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(groups, serde_json::json!([[1, 2, 3], [4]]));
}

#[test]
fn chunk_with_negative_size_exits_with_invalid_argument() {
    let output = run(&["chunk", "--size", "-1", "[1,2]"]);
    assert_eq!(output.status.code(), Some(2), "{output:?}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid_argument"), "{stderr}");
    assert!(stderr.contains("got -1"), "{stderr}");
}

#[test]
fn chunk_with_null_input_exits_with_invalid_argument() {
    let output = run(&["chunk", "null"]);
    assert_eq!(output.status.code(), Some(2), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("the input sequence cannot be absent"), "{stderr}");
}

#[test]
fn compact_prints_remaining_elements() {
    let output = run(&["compact", r#"["", "a", 0, 3, null]"#]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), r#"["a",3]"#);
}

#[test]
fn invalid_config_exits_with_config_code() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("emptykit.toml");
    fs::write(&path, "[chunk]\ndefault_size = -4\n").expect("config should be written");

    let output = run(&["--config", &path.display().to_string(), "check", "1"]);
    assert_eq!(output.status.code(), Some(3), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("chunk.default_size"), "{stderr}");
}

fn run_with_log_level(args: &[&str], level: Option<&str>) -> std::process::Output {
    let mut command = Command::new(BINARY_PATH);
    command
        .args(args)
        .env_remove("EMPTYKIT_CONFIG_PATH")
        .env_remove("RUST_LOG")
        .current_dir(env!("CARGO_MANIFEST_DIR"));
    if let Some(level) = level {
        command.env("RUST_LOG", level);
    }
    command.output().expect("process should start")
}

#[test]
fn invalid_config_is_logged_before_exit() {
    let config = fixture("tests/fixtures/config_invalid_level.toml");
    let output = run_with_log_level(&["--config", &config, "check", "1"], None);
    assert_eq!(output.status.code(), Some(3), "{output:?}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("emptykit::config"), "{stderr}");
    assert!(
        stderr.contains("Failed to validate configuration file"),
        "{stderr}"
    );
}

#[test]
fn config_resolution_is_traced_at_debug() {
    let output = run_with_log_level(&["check", "1"], Some("debug"));
    assert!(output.status.success(), "{output:?}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("EMPTYKIT_CONFIG_PATH not set"), "{stderr}");
    assert!(stderr.contains("Configuration resolved"), "{stderr}");
}

#[test]
fn help_lists_every_command() {
    let output = run(&["--help"]);
    assert!(output.status.success(), "{output:?}");
    let help = stdout(&output);
    for command in ["check", "chunk", "compact", "kind"] {
        assert!(help.contains(command), "help should mention {command}: {help}");
    }
}
