use std::collections::{BTreeMap, HashSet};

/// A labelled group of keyboard rows, as laid out in the editor.
pub struct KeySection {
    pub name: &'static str,
    pub rows: &'static [&'static [&'static str]],
}

pub const KEY_SECTIONS: &[KeySection] = &[
    KeySection {
        name: "Function Keys",
        rows: &[
            &["esc", "f1", "f2", "f3", "f4", "f5", "f6"],
            &["f7", "f8", "f9", "f10", "f11", "f12"],
        ],
    },
    KeySection {
        name: "Typing Keys",
        rows: &[
            &[
                "`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", "backspace",
            ],
            &[
                "tab", "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "[", "]", "\\",
            ],
            &[
                "capslock", "a", "s", "d", "f", "g", "h", "j", "k", "l", ";", "'", "enter",
            ],
            &[
                "shift", "z", "x", "c", "v", "b", "n", "m", ",", ".", "/", "shift",
            ],
            &["ctrl", "win", "alt", "space  ", "alt", "win", "[=]", "ctrl"],
        ],
    },
    KeySection {
        name: "System, Editing & Navigation",
        rows: &[
            &["printscreen", "scrolllock", "pause"],
            &["insert", "home", "pageup"],
            &["delete", "end", "pagedown"],
            &["up"],
            &["left", "down", "right"],
        ],
    },
    KeySection {
        name: "Numeric Keypad",
        rows: &[
            &["numlock", "numpaddiv", "numpadmult"],
            &["numpad7", "numpad8", "numpad9", "numpadadd"],
            &["numpad4", "numpad5", "numpad6", "numpadsub"],
            &["numpad1", "numpad2", "numpad3", "numpad0"],
            &["numpaddot", "numpadenter"],
        ],
    },
];

pub type KeyNameTable = BTreeMap<String, String>;

/// Script-level names for keys whose upper-cased id is not what the engine expects.
pub fn default_key_names() -> KeyNameTable {
    let pairs = [
        ("esc", "Escape"),
        ("tab", "Tab"),
        ("capslock", "CapsLock"),
        ("shift", "Shift"),
        ("ctrl", "Ctrl"),
        ("alt", "Alt"),
        ("win", "LWin"),
        ("space", "Space"),
        ("numlock", "NumLock"),
        ("pageup", "PgUp"),
        ("pagedown", "PgDn"),
        ("printscreen", "PrintScreen"),
        ("scrolllock", "ScrollLock"),
        ("insert", "Insert"),
        ("delete", "Delete"),
        ("home", "Home"),
        ("end", "End"),
        ("pause", "Pause"),
        ("up", "Up"),
        ("down", "Down"),
        ("left", "Left"),
        ("right", "Right"),
        ("backspace", "Backspace"),
        ("enter", "Enter"),
        ("`", "Grave"),
        ("~", "Tilde"),
        ("[=]", "Equal"),
        ("numpad0", "Numpad0"),
        ("numpad1", "Numpad1"),
        ("numpad2", "Numpad2"),
        ("numpad3", "Numpad3"),
        ("numpad4", "Numpad4"),
        ("numpad5", "Numpad5"),
        ("numpad6", "Numpad6"),
        ("numpad7", "Numpad7"),
        ("numpad8", "Numpad8"),
        ("numpad9", "Numpad9"),
        ("numpadadd", "NumpadAdd"),
        ("numpadsub", "NumpadSub"),
        ("numpaddiv", "NumpadDiv"),
        ("numpadmult", "NumpadMult"),
        ("numpadenter", "NumpadEnter"),
        ("numpaddot", "NumpadDot"),
    ];

    pairs
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}

/// Canonical id for a raw layout label (`"space  "` -> `"space"`).
pub fn key_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolves a key id to the name used in the compiled script.
pub fn script_key_name(key_id: &str, names: &KeyNameTable) -> String {
    names
        .get(key_id)
        .cloned()
        .unwrap_or_else(|| key_id.to_uppercase())
}

/// Caption shown on a key cap.
pub fn display_label(raw: &str) -> String {
    let cleaned = raw.trim();
    let lower = cleaned.to_lowercase();

    if let Some(suffix) = lower.strip_prefix("numpad") {
        return match suffix {
            "div" => "/".to_string(),
            "mult" => "*".to_string(),
            "add" => "+".to_string(),
            "sub" => "-".to_string(),
            "enter" => "Enter".to_string(),
            "dot" => ".".to_string(),
            other => other.to_uppercase(),
        };
    }
    if lower == "space" {
        return "Space".to_string();
    }
    if !cleaned.is_empty() && cleaned.chars().all(char::is_alphabetic) {
        let mut chars = cleaned.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        };
    }
    if !cleaned.is_empty() && cleaned.chars().all(char::is_alphanumeric) {
        return cleaned.to_uppercase();
    }
    cleaned.to_string()
}

/// Every distinct key id in layout order.
pub fn all_key_ids() -> Vec<String> {
    let mut seen = HashSet::new();
    KEY_SECTIONS
        .iter()
        .flat_map(|section| section.rows.iter())
        .flat_map(|row| row.iter())
        .map(|raw| key_id(raw))
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

pub fn is_known_key(id: &str) -> bool {
    KEY_SECTIONS
        .iter()
        .flat_map(|section| section.rows.iter())
        .flat_map(|row| row.iter())
        .any(|raw| key_id(raw) == id)
}
