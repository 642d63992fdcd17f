#![allow(dead_code)]

use hotkeyforge::assignments::AssignmentMap;
use hotkeyforge::compiler::compile;
use hotkeyforge::keys::KeyNameTable;
use hotkeyforge::modifier::{default_prefix_table, Modifier};
use hotkeyforge::profiles::KeyboardProfile;

pub fn profile(id: &str, label: &str, condition: &str) -> KeyboardProfile {
    KeyboardProfile::new(id, label, condition, "", "")
}

pub fn header(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

/// Compiles with the default prefixes, no key-name overrides and all modifiers.
pub fn compile_plain(header_lines: &[&str], profiles: &[KeyboardProfile], map: &AssignmentMap) -> String {
    compile(
        &header(header_lines),
        profiles,
        map,
        &KeyNameTable::new(),
        &default_prefix_table(),
        &Modifier::ALL,
    )
}
