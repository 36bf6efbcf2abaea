//! CLI tests: event in, rewritten request out.

use serde_json::json;

use crate::helpers::{command, event_file, run_with_stdin, stdout_json, viewer_event};

#[test]
fn test_stdin_event_is_rewritten() {
    let event = viewer_event("/blog");
    let output = run_with_stdin(&mut command(), &event.to_string());

    assert!(output.status.success(), "exit: {:?}", output.status);

    let request = stdout_json(&output);
    assert_eq!(request["uri"], "/blog/index.html");
    // Everything else comes back as sent
    assert_eq!(request["method"], event["request"]["method"]);
    assert_eq!(request["querystring"], event["request"]["querystring"]);
    assert_eq!(request["headers"], event["request"]["headers"]);
    assert_eq!(request["cookies"], event["request"]["cookies"]);
}

#[test]
fn test_dash_reads_stdin() {
    let output = run_with_stdin(
        command().arg("-"),
        &json!({ "request": { "uri": "/docs/" } }).to_string(),
    );

    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({ "uri": "/docs/index.html" }));
}

#[test]
fn test_event_file_argument() {
    let file = event_file(&viewer_event("/styles/main.css"));

    let output = command().arg(file.path()).output().expect("run edge_index");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["uri"], "/styles/main.css");
}

#[test]
fn test_event_file_env() {
    let file = event_file(&viewer_event("/"));

    let output = command()
        .env("EVENT_FILE", file.path())
        .output()
        .expect("run edge_index");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["uri"], "/index.html");
}

#[test]
fn test_pretty_output() {
    let output = run_with_stdin(
        command().env("PRETTY_OUTPUT", "1"),
        r#"{"request":{"uri":"/a.b/"}}"#,
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().lines().count() > 1, "not pretty: {:?}", stdout);
    assert_eq!(stdout_json(&output)["uri"], "/a.b/index.html");
}

#[test]
fn test_pretty_flag() {
    let output = run_with_stdin(command().arg("--pretty"), r#"{"request":{"uri":"/blog"}}"#);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().lines().count() > 1, "not pretty: {:?}", stdout);
}

#[test]
fn test_end_of_options_marker() {
    // A file whose name starts with '-' is reachable after "--"
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("-event.json"),
        viewer_event("/about").to_string(),
    )
    .expect("write event");

    let output = command()
        .current_dir(dir.path())
        .args(["--", "-event.json"])
        .output()
        .expect("run edge_index");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_json(&output)["uri"], "/about/index.html");
}

#[test]
fn test_argument_overrides_event_file_env() {
    let from_env = event_file(&viewer_event("/from-env"));
    let from_arg = event_file(&viewer_event("/from-arg/"));

    let output = command()
        .env("EVENT_FILE", from_env.path())
        .arg(from_arg.path())
        .output()
        .expect("run edge_index");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["uri"], "/from-arg/index.html");
}

#[test]
fn test_invalid_json_fails() {
    let output = run_with_stdin(&mut command(), "{not json");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid event"), "stderr: {}", stderr);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.json");

    let output = command().arg(&missing).output().expect("run edge_index");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_config_fails() {
    let output = run_with_stdin(
        command().env("PRETTY_OUTPUT", "sometimes"),
        r#"{"request":{"uri":"/"}}"#,
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sometimes"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_log_format_fails() {
    let output = run_with_stdin(
        command().env("LOG_FORMAT", "xml"),
        r#"{"request":{"uri":"/"}}"#,
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("LOG_FORMAT"), "stderr: {}", stderr);
}

#[test]
fn test_version_flag() {
    let output = command().arg("--version").output().expect("run edge_index");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("edge_index "), "stdout: {}", stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_option_fails() {
    let output = command().arg("--bogus").output().expect("run edge_index");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--bogus"), "stderr: {}", stderr);
}

#[test]
fn test_two_paths_fail() {
    let output = command()
        .args(["a.json", "b.json"])
        .output()
        .expect("run edge_index");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_json_logs_go_to_stderr() {
    let output = run_with_stdin(
        command().env("LOG_LEVEL", "debug").env("LOG_FORMAT", "json"),
        r#"{"request":{"uri":"/blog"}}"#,
    );

    assert!(output.status.success());
    // stdout stays a single JSON document
    assert_eq!(stdout_json(&output)["uri"], "/blog/index.html");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let rewrite_line = stderr
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .find(|v| v["msg"] == "uri rewritten")
        .unwrap_or_else(|| panic!("no rewrite log in stderr: {}", stderr));

    assert_eq!(rewrite_line["level"], "debug");
    assert_eq!(rewrite_line["data"]["rule"], "extensionless");
    assert_eq!(rewrite_line["data"]["to"], "/blog/index.html");
}
