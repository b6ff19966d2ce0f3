// tests/cli_tests.rs

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_input-sanitizer"))
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("SANITIZE_ALLOWED_TAGS")
        .env_remove("SANITIZE_MODE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn input-sanitizer");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn arguments_are_sanitized_line_by_line() {
    let output = run_binary(&["<script>alert('XSS')</script>", "Jan Kowalski", "<b>Bold text</b>"], "");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\nJan Kowalski\nBold text\n");
}

#[test]
fn stdin_is_sanitized_without_arguments() {
    let output = run_binary(&[], "<b>Bold text</b>");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Bold text");
}

#[test]
fn unknown_form_exits_with_failure() {
    let output = run_binary(&["--form", "invoice"], "{}");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown form"));
}

#[test]
fn invalid_escape_config_exits_with_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_input-sanitizer"))
        .arg("text")
        .env("RUST_LOG", "error")
        .env("SANITIZE_MODE", "escape")
        .env("SANITIZE_ALLOWED_TAGS", "b")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
