use hotkeyforge::modifier::Modifier;
use strum::IntoEnumIterator;

pub mod assign;
pub mod clear;
pub mod export;
pub mod show;
pub mod toggle;

/// Case-insensitive modifier names for the command line (`ctrl`, `Ctrl`, ...).
pub fn parse_modifier(s: &str) -> Result<Modifier, String> {
    Modifier::iter()
        .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| {
            let names: Vec<&str> = Modifier::iter().map(Modifier::name).collect();
            format!("unknown modifier '{}' (expected one of: {})", s, names.join(", "))
        })
}
