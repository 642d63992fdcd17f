use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("script_header.json"), r#"{"header": ["; cli", ""]}"#).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_hotkeyforge"))
            .arg("--data-dir")
            .arg(self.path())
            .args(args)
            .output()
            .expect("Failed to execute binary")
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }
}

#[test]
fn test_cli_assign_then_preview() {
    let ctx = TestContext::new();
    ctx.stdout(&["assign", "f1", "Send, Hello"]);
    ctx.stdout(&["assign", "f1", "--modifier", "ctrl", "Send, {Ctrl}"]);
    ctx.stdout(&["--profile", "id1", "assign", "q", "--disabled", "Send, off"]);

    let preview = ctx.stdout(&["preview"]);
    assert_eq!(
        preview.trim_end(),
        "; cli\n\n; Default keyboard\n^F1::\n    Send, {Ctrl}\nreturn\n\nF1::\n    Send, Hello\nreturn\n\n\n; id1 keyboard\n#if cm1.IsActive\n#if"
    );
    assert!(ctx.path().join("assignments.json").exists());
}

#[test]
fn test_cli_action_from_file() {
    let ctx = TestContext::new();
    let body = ctx.path().join("body.txt");
    fs::write(&body, "Send, one\nSend, two\n").unwrap();

    ctx.stdout(&["assign", "numpad1", "--file", body.to_str().unwrap()]);
    let preview = ctx.stdout(&["preview"]);
    assert!(preview.contains("Numpad1::\n    Send, one\n    Send, two\nreturn"));
}

#[test]
fn test_cli_toggle_and_clear() {
    let ctx = TestContext::new();
    ctx.stdout(&["assign", "a", "Send, a"]);

    ctx.stdout(&["toggle", "a"]);
    assert!(!ctx.stdout(&["preview"]).contains("A::"));

    ctx.stdout(&["toggle", "a", "--on"]);
    assert!(ctx.stdout(&["preview"]).contains("A::"));

    ctx.stdout(&["clear", "a"]);
    assert_eq!(ctx.stdout(&["preview"]).trim_end(), "; cli");
}

#[test]
fn test_cli_export_remembers_destination() {
    let ctx = TestContext::new();
    let dest = ctx.path().join("out.ahk");
    ctx.stdout(&["assign", "f5", "Reload"]);

    ctx.stdout(&["export", "--to", dest.to_str().unwrap()]);
    let written = fs::read_to_string(&dest).unwrap();
    assert!(written.ends_with("F5::\n    Reload\nreturn"));

    fs::remove_file(&dest).unwrap();
    ctx.stdout(&["export"]);
    assert_eq!(fs::read_to_string(&dest).unwrap(), written);
}

#[test]
fn test_cli_rejects_unknown_modifier() {
    let ctx = TestContext::new();
    let output = ctx.run(&["assign", "f1", "--modifier", "hyper", "Send, x"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown modifier"));
}

#[test]
fn test_cli_warns_on_corrupt_settings() {
    let ctx = TestContext::new();
    fs::write(ctx.path().join("assignments.json"), "{ nope").unwrap();

    let output = ctx.run(&["preview"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Settings load failed"));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "; cli");
}

#[test]
fn test_cli_lists_profiles_and_keys() {
    let ctx = TestContext::new();
    let profiles = ctx.stdout(&["profiles"]);
    assert!(profiles.contains("cm2.IsActive"));
    assert!(profiles.contains("Default keyboard"));

    let keys = ctx.stdout(&["keys"]);
    assert!(keys.contains("Numeric Keypad"));
    assert!(keys.contains("Space"));
}
