//! Renders the assignment mapping as a macro script.
//!
//! Output is a pure function of the inputs: profiles keep their configured
//! order, keys and modifiers are sorted by name, so preview and export always
//! match byte for byte.

use crate::assignments::{prune_profile, AssignmentMap};
use crate::consts::ACTION_INDENT;
use crate::keys::{script_key_name, KeyNameTable};
use crate::modifier::{Modifier, PrefixTable};
use crate::profiles::KeyboardProfile;

/// Builds the full script text.
pub fn compile(
    header_lines: &[String],
    profiles: &[KeyboardProfile],
    actions_by_profile: &AssignmentMap,
    key_names: &KeyNameTable,
    modifier_prefix: &PrefixTable,
    modifier_options: &[Modifier],
) -> String {
    let mut lines: Vec<String> = header_lines.to_vec();

    for profile in profiles {
        let profile_id = profile.id.trim();
        if profile_id.is_empty() {
            continue;
        }
        let Some(keys) = actions_by_profile.profile(profile_id) else {
            continue;
        };
        let valid = prune_profile(keys, modifier_options);
        if valid.is_empty() {
            continue;
        }

        let label = if profile.label.is_empty() {
            profile_id
        } else {
            profile.label.as_str()
        };
        lines.push(format!("; {}", label));

        let condition = profile.condition.trim();
        if !condition.is_empty() {
            lines.push(format!("#if {}", condition));
        }

        for (key_id, bindings) in &valid {
            let key_name = script_key_name(key_id, key_names);
            for (modifier, entry) in bindings {
                if !entry.is_active() {
                    continue;
                }
                lines.push(format!("{}::", hotkey_token(&key_name, *modifier, modifier_prefix)));
                lines.extend(
                    split_lines(entry.action.trim()).map(|l| format!("{}{}", ACTION_INDENT, l)),
                );
                lines.push("return".to_string());
                lines.push(String::new());
            }
        }

        if !condition.is_empty() {
            lines.push("#if".to_string());
        }
        lines.push(String::new());
    }

    lines.join("\n").trim_end().to_string()
}

/// `^F1` for Ctrl+F1; keys without a prefix entry are emitted bare.
pub fn hotkey_token(key_name: &str, modifier: Modifier, modifier_prefix: &PrefixTable) -> String {
    match modifier_prefix.get(&modifier) {
        Some(prefix) => format!("{}{}", prefix, key_name),
        None => key_name.to_string(),
    }
}

/// Splits on `\r\n` and every single-character line boundary
/// (`\n`, `\r`, vertical tab, form feed, `\x1c`-`\x1e`, NEL, U+2028, U+2029).
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .flat_map(|l| l.split(is_line_break))
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_handles_mixed_endings() {
        let parts: Vec<&str> = split_lines("a\r\nb\rc\nd").collect();
        assert_eq!(parts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_handles_unicode_separators() {
        let parts: Vec<&str> = split_lines("a\u{2028}b\x0cc\u{85}d\x1ee\x0bf\u{2029}g").collect();
        assert_eq!(parts, vec!["a", "b", "c", "d", "e", "f", "g"]);
    }

    #[test]
    fn test_hotkey_token_without_prefix() {
        let prefix = crate::modifier::default_prefix_table();
        assert_eq!(hotkey_token("F1", Modifier::None, &prefix), "F1");
        assert_eq!(hotkey_token("F1", Modifier::Win, &prefix), "#F1");
    }
}
