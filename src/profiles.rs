use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A keyboard context under which assignments apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardProfile {
    pub id: String,
    pub label: String,
    /// Guard expression; empty means unconditional.
    pub condition: String,
    pub device_id: String,
    pub description: String,
}

impl KeyboardProfile {
    pub fn new(id: &str, label: &str, condition: &str, device_id: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            condition: condition.to_string(),
            device_id: device_id.to_string(),
            description: description.to_string(),
        }
    }

    /// Label if set, otherwise the id.
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// Built-in profiles used when the profiles file is unusable.
pub fn fallback_profiles() -> Vec<KeyboardProfile> {
    vec![
        KeyboardProfile::new("default", "Default keyboard", "", "", "Global profile"),
        KeyboardProfile::new(
            "id1",
            "id1 keyboard",
            "cm1.IsActive",
            "0x046D,0xC31C,1",
            "Logitech profile",
        ),
        KeyboardProfile::new(
            "id2",
            "id2 keyboard",
            "cm2.IsActive",
            "0x258A,0x002A,1",
            "Secondary profile",
        ),
    ]
}

/// Ordered, immutable set of profiles for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCatalog {
    profiles: Vec<KeyboardProfile>,
    default_profile: String,
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::new(fallback_profiles(), "")
    }
}

impl ProfileCatalog {
    /// Falls back to the built-in set when `profiles` is empty. An unknown
    /// `default_profile` resolves to the first profile.
    pub fn new(profiles: Vec<KeyboardProfile>, default_profile: &str) -> Self {
        let profiles = if profiles.is_empty() {
            fallback_profiles()
        } else {
            profiles
        };
        let default_profile = if profiles.iter().any(|p| p.id == default_profile) {
            default_profile.to_string()
        } else {
            profiles[0].id.clone()
        };
        Self {
            profiles,
            default_profile,
        }
    }

    pub fn from_json(data: &Value) -> Self {
        let mut seen = HashSet::new();
        let profiles: Vec<KeyboardProfile> = data
            .get("profiles")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(parse_profile)
                    .filter(|p| seen.insert(p.id.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let default_profile = data
            .get("default_profile")
            .map(field_text)
            .unwrap_or_default();

        Self::new(profiles, &default_profile)
    }

    pub fn profiles(&self) -> &[KeyboardProfile] {
        &self.profiles
    }

    pub fn default_profile(&self) -> &str {
        &self.default_profile
    }

    pub fn by_id(&self, id: &str) -> Option<&KeyboardProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn by_label(&self, label: &str) -> Option<&KeyboardProfile> {
        self.profiles.iter().find(|p| p.label == label)
    }

    pub fn label_for(&self, id: &str) -> Option<&str> {
        self.by_id(id).map(|p| p.label.as_str())
    }

    /// Accepts either a label (as picked in the UI) or an id.
    pub fn resolve(&self, label_or_id: &str) -> Option<&KeyboardProfile> {
        self.by_label(label_or_id).or_else(|| self.by_id(label_or_id))
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn parse_profile(entry: &Value) -> Option<KeyboardProfile> {
    let obj = entry.as_object()?;
    let text = |name: &str| obj.get(name).map(field_text).unwrap_or_default();

    let id = text("id");
    let label = text("label");
    if id.is_empty() || label.is_empty() {
        return None;
    }
    Some(KeyboardProfile {
        id,
        label,
        condition: text("condition"),
        device_id: text("device_id"),
        description: text("description"),
    })
}

/// Loads the keyboard profiles file; any problem yields the built-in set.
pub fn load_profiles<P: AsRef<Path>>(path: P) -> ProfileCatalog {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No profiles file at {}, using built-in profiles", path.display());
            return ProfileCatalog::default();
        }
        Err(e) => {
            warn!("Unable to read {}: {}", path.display(), e);
            return ProfileCatalog::default();
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(data) => ProfileCatalog::from_json(&data),
        Err(e) => {
            warn!("Unable to parse {}: {}", path.display(), e);
            ProfileCatalog::default()
        }
    }
}
