use hotkeyforge::api::EditorSession;
use hotkeyforge::config::{Config, DataPaths};
use hotkeyforge::error::HotkeyForgeError;
use hotkeyforge::modifier::Modifier;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    config: Config,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config {
            paths: DataPaths::in_dir(dir.path()),
            profile: None,
        };
        // Keep previews short and predictable.
        fs::write(dir.path().join("script_header.json"), r#"{"header": ["; test header", ""]}"#)
            .unwrap();
        Self { dir, config }
    }

    fn open(&self) -> EditorSession {
        EditorSession::open(&self.config)
    }
}

#[test]
fn test_first_run_starts_on_default_profile() {
    let ctx = TestContext::new();
    let mut session = ctx.open();

    assert!(session.take_load_warning().is_none());
    assert_eq!(session.current_profile().id, "default");
    assert!(session.actions().is_empty());
    assert_eq!(session.preview(), "; test header");
    assert_eq!(session.export_path(), ctx.dir.path().join("export.ahk").as_path());
}

#[test]
fn test_assign_persists_and_restores() {
    let ctx = TestContext::new();
    {
        let mut session = ctx.open();
        session.select_profile("id1 keyboard").unwrap();
        session.select_key("F2");
        session.assign(Modifier::Ctrl, "  Send, hello  ", true).unwrap();
    }

    let session = ctx.open();
    assert_eq!(session.current_profile().id, "id1");
    assert_eq!(session.selected_key(), Some("f2"));
    assert_eq!(session.last_modifier(), Modifier::Ctrl);
    assert_eq!(session.last_text(), "Send, hello");
    assert!(session.has_binding("f2"));
    assert_eq!(session.key_summary("f2"), vec!["Ctrl: Send, hello"]);
    assert_eq!(
        session.preview(),
        "; test header\n\n; id1 keyboard\n#if cm1.IsActive\n^F2::\n    Send, hello\nreturn\n\n#if"
    );
}

#[test]
fn test_actions_require_a_selected_key() {
    let ctx = TestContext::new();
    let mut session = ctx.open();

    let err = session.assign(Modifier::None, "Send, x", true).unwrap_err();
    assert!(matches!(err, HotkeyForgeError::Validation(_)));
    assert!(session.clear(Modifier::None).is_err());
    assert!(!ctx.dir.path().join("assignments.json").exists());
}

#[test]
fn test_unknown_profile_is_rejected() {
    let ctx = TestContext::new();
    let mut session = ctx.open();
    assert!(session.select_profile("Nope").is_err());
    assert_eq!(session.current_profile().id, "default");
}

#[test]
fn test_toggle_and_clear() {
    let ctx = TestContext::new();
    let mut session = ctx.open();
    session.select_key("a");
    session.assign(Modifier::None, "Send, a", true).unwrap();

    session.set_enabled(Modifier::None, false).unwrap();
    assert!(!session.has_binding("a"));
    assert_eq!(session.preview(), "; test header\n\n; Default keyboard");

    session.set_enabled(Modifier::None, true).unwrap();
    assert!(session.preview().contains("A::\n    Send, a\nreturn"));

    let removed = session.clear(Modifier::None).unwrap();
    assert_eq!(removed.map(|a| a.action), Some("Send, a".to_string()));
    assert!(session.bindings("a").is_none());
    assert_eq!(session.last_modifier(), Modifier::None);
    assert_eq!(ctx.open().preview(), "; test header");
}

#[test]
fn test_suggested_modifier() {
    let ctx = TestContext::new();
    let mut session = ctx.open();
    session.select_key("b");
    session.assign(Modifier::Shift, "Send, B", true).unwrap();
    session.assign(Modifier::Win, "Send, w", true).unwrap();

    assert_eq!(session.suggested_modifier("b"), Modifier::Win);
    assert_eq!(session.suggested_modifier("c"), Modifier::None);

    session.select_key("c");
    session.assign(Modifier::Alt, "Send, c", true).unwrap();
    session.clear(Modifier::Alt).unwrap();
    assert_eq!(session.suggested_modifier("b"), Modifier::Shift);
}

#[test]
fn test_corrupt_settings_warn_and_start_empty() {
    let ctx = TestContext::new();
    fs::write(ctx.dir.path().join("assignments.json"), "{ corrupt").unwrap();

    let mut session = ctx.open();
    assert!(matches!(session.take_load_warning(), Some(HotkeyForgeError::Json(_))));
    assert!(session.take_load_warning().is_none());
    assert!(session.actions().is_empty());
}

#[test]
fn test_profile_override_and_stale_last_profile() {
    let ctx = TestContext::new();
    fs::write(
        ctx.dir.path().join("assignments.json"),
        json!({"last_profile": "removed_profile"}).to_string(),
    )
    .unwrap();
    assert_eq!(ctx.open().current_profile().id, "default");

    let mut config = ctx.config.clone();
    config.profile = Some("id2".to_string());
    assert_eq!(EditorSession::open(&config).current_profile().id, "id2");
}

#[test]
fn test_export_to_remembers_path() {
    let ctx = TestContext::new();
    let dest = ctx.dir.path().join("macros.ahk");
    {
        let mut session = ctx.open();
        session.select_key("f1");
        session.assign(Modifier::None, "Send, x", true).unwrap();
        assert_eq!(session.export_to(&dest).unwrap(), dest);
        assert_eq!(fs::read_to_string(&dest).unwrap(), session.preview());
    }

    let session = ctx.open();
    assert_eq!(session.export_path(), dest.as_path());
    fs::remove_file(&dest).unwrap();
    session.export().unwrap();
    assert!(dest.exists());
}

#[test]
fn test_empty_script_is_not_exported() {
    let ctx = TestContext::new();
    fs::write(ctx.dir.path().join("script_header.json"), r#"{"header": []}"#).unwrap();
    let session = ctx.open();

    let err = session.export().unwrap_err();
    assert!(matches!(err, HotkeyForgeError::Validation(_)));
    assert!(!session.export_path().exists());
}

#[test]
fn test_rejected_export_to_does_not_remember_path() {
    let ctx = TestContext::new();
    fs::write(ctx.dir.path().join("script_header.json"), r#"{"header": []}"#).unwrap();
    let mut session = ctx.open();
    let dest = ctx.dir.path().join("elsewhere.ahk");

    let err = session.export_to(&dest).unwrap_err();
    assert!(matches!(err, HotkeyForgeError::Validation(_)));
    assert!(!dest.exists());
    assert!(!ctx.dir.path().join("export_path.json").exists());
    assert_eq!(session.export_path(), ctx.dir.path().join("export.ahk").as_path());

    let err = session.export_to(Path::new("")).unwrap_err();
    assert!(matches!(err, HotkeyForgeError::Validation(_)));
    assert!(!ctx.dir.path().join("export_path.json").exists());
}
