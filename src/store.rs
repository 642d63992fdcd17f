//! Persistence of the assignment mapping and last-used editor state.

use crate::assignments::AssignmentMap;
use crate::error::{HfResult, HotkeyForgeError};
use crate::fsutil::atomic_write;
use crate::modifier::Modifier;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Everything the assignments file holds, already sanitized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedSettings {
    pub last_key: String,
    pub last_text: String,
    pub last_modifier: Modifier,
    pub last_profile: String,
    pub actions_by_profile: AssignmentMap,
}

/// On-disk layout. Field order is alphabetical so the output has sorted keys.
#[derive(Serialize)]
struct SettingsFile<'a> {
    actions: &'a AssignmentMap,
    last_key: &'a str,
    last_modifier: &'a str,
    last_profile: &'a str,
    last_text: &'a str,
}

/// Reads the assignments file.
///
/// A missing file is the normal first-run state and yields defaults with no
/// error. An unreadable or malformed file also yields defaults, together with
/// an error the caller should surface as a warning.
pub fn load_settings<P: AsRef<Path>>(
    path: P,
    modifier_options: &[Modifier],
) -> (LoadedSettings, Option<HotkeyForgeError>) {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No settings at {}, starting empty", path.display());
        return (LoadedSettings::default(), None);
    }

    let data = match fs::read_to_string(path)
        .map_err(HotkeyForgeError::from)
        .and_then(|content| serde_json::from_str::<Value>(&content).map_err(HotkeyForgeError::from))
    {
        Ok(data) => data,
        Err(e) => {
            warn!("Unable to read {}: {}", path.display(), e);
            return (LoadedSettings::default(), Some(e));
        }
    };

    (settings_from_json(&data, modifier_options), None)
}

/// Sanitizes every field independently; never fails.
pub fn settings_from_json(data: &Value, modifier_options: &[Modifier]) -> LoadedSettings {
    if !data.is_object() {
        warn!("Settings root is not an object, ignoring its contents");
    }

    let last_modifier = data
        .get("last_modifier")
        .and_then(Value::as_str)
        .and_then(|name| Modifier::parse_allowed(name, modifier_options))
        .unwrap_or(Modifier::None);

    let last_text = match data.get("last_text") {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };

    LoadedSettings {
        last_key: loose_string(data.get("last_key")),
        last_text,
        last_modifier,
        last_profile: loose_string(data.get("last_profile")),
        actions_by_profile: data
            .get("actions")
            .map(|a| AssignmentMap::from_json(a, modifier_options))
            .unwrap_or_default(),
    }
}

/// Strings pass through, falsy values become empty, scalars are rendered.
fn loose_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => String::new(),
    }
}

/// Writes a pruned snapshot of the mapping plus the auxiliary fields.
///
/// The file is replaced atomically; on failure the previous file is intact
/// and the in-memory state is untouched so the caller can retry.
pub fn save_settings<P: AsRef<Path>>(
    path: P,
    settings: &LoadedSettings,
    modifier_options: &[Modifier],
) -> HfResult<()> {
    let path = path.as_ref();
    let actions = settings.actions_by_profile.pruned(modifier_options);
    let payload = SettingsFile {
        actions: &actions,
        last_key: &settings.last_key,
        last_modifier: settings.last_modifier.name(),
        last_profile: &settings.last_profile,
        last_text: &settings.last_text,
    };

    let json = serde_json::to_string_pretty(&payload)?;
    atomic_write(path, json)?;
    debug!("Saved settings to {}", path.display());
    Ok(())
}

/// Reads the `header` list from the script header file, or returns
/// `default_lines` when the file is absent or not shaped as expected.
pub fn load_script_header<P: AsRef<Path>>(path: P, default_lines: &[&str]) -> Vec<String> {
    let defaults = || -> Vec<String> { default_lines.iter().map(|l| l.to_string()).collect() };
    let path = path.as_ref();

    let Ok(content) = fs::read_to_string(path) else {
        debug!("No script header at {}, using defaults", path.display());
        return defaults();
    };
    let Ok(data) = serde_json::from_str::<Value>(&content) else {
        debug!("Script header {} is not valid JSON, using defaults", path.display());
        return defaults();
    };

    match data.get("header").and_then(Value::as_array) {
        Some(lines) => lines
            .iter()
            .map(|l| l.as_str().map(str::to_string))
            .collect::<Option<Vec<String>>>()
            .unwrap_or_else(defaults),
        None => defaults(),
    }
}
