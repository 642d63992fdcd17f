pub const SETTINGS_FILENAME: &str = "assignments.json";
pub const KEYBOARD_PROFILES_FILENAME: &str = "keyboards.json";
pub const SCRIPT_HEADER_FILENAME: &str = "script_header.json";
pub const EXPORT_PATH_FILENAME: &str = "export_path.json";
pub const DEFAULT_EXPORT_FILENAME: &str = "export.ahk";

/// Indent applied to every line of an action body.
pub const ACTION_INDENT: &str = "    ";

/// Preamble used when no script header file is configured.
pub const DEFAULT_HEADER_LINES: &[&str] = &[
    "#SingleInstance force",
    "#Persistent",
    "#include Lib\\AutoHotInterception.ahk",
    "",
    "AHI := new AutoHotInterception()",
    "id1 := AHI.GetKeyboardId(0x046D, 0xC31C, 1)",
    "cm1 := AHI.CreateContextManager(id1)",
    "id2 := AHI.GetKeyboardId(0x258A, 0x002A, 1)",
    "cm2 := AHI.CreateContextManager(id2)",
    "return",
    "",
];
