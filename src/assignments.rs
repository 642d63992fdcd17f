//! Typed profile -> key -> modifier mapping.
//!
//! Untrusted JSON enters through [`AssignmentMap::from_json`] only. Everything
//! downstream works on the validated structure and never re-checks shapes.

use crate::modifier::Modifier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyAssignment {
    pub action: String,
    pub enabled: bool,
}

impl KeyAssignment {
    pub fn new(action: impl Into<String>, enabled: bool) -> Self {
        Self {
            action: action.into(),
            enabled,
        }
    }

    /// Trimmed copy, or `None` when the entry carries no information
    /// (empty action that is still enabled).
    pub fn normalized(&self) -> Option<KeyAssignment> {
        let action = self.action.trim();
        if action.is_empty() && self.enabled {
            return None;
        }
        Some(KeyAssignment::new(action, self.enabled))
    }

    /// Enabled with a non-empty body, i.e. produces a hotkey.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.action.trim().is_empty()
    }
}

pub type KeyBindings = BTreeMap<Modifier, KeyAssignment>;
pub type ProfileAssignments = BTreeMap<String, KeyBindings>;

/// Shape of a stored key entry. Older files kept a bare string per key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredBinding {
    Structured(Map<String, Value>),
    Legacy(String),
}

impl StoredBinding {
    /// Legacy strings always become a `None` entry; `options` only filters
    /// structured entries.
    fn into_bindings(self, options: &[Modifier]) -> KeyBindings {
        match self {
            StoredBinding::Structured(entries) => entries
                .iter()
                .filter_map(|(name, raw)| {
                    let modifier = Modifier::parse_allowed(name, options)?;
                    let assignment = parse_assignment(raw)?;
                    Some((modifier, assignment))
                })
                .collect(),
            StoredBinding::Legacy(text) => {
                let text = text.trim();
                let mut bindings = KeyBindings::new();
                if !text.is_empty() {
                    bindings.insert(Modifier::None, KeyAssignment::new(text, true));
                }
                bindings
            }
        }
    }
}

fn parse_assignment(raw: &Value) -> Option<KeyAssignment> {
    let obj = raw.as_object()?;
    let action = match obj.get("action") {
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return None,
        None => "",
    };
    let enabled = obj.get("enabled").map(truthy).unwrap_or(true);
    KeyAssignment::new(action, enabled).normalized()
}

/// Loose truthiness for hand-edited `enabled` flags (`0`, `""`, `null` are false).
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssignmentMap(BTreeMap<String, ProfileAssignments>);

impl AssignmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from arbitrary JSON, dropping anything malformed.
    ///
    /// Never fails: unknown modifiers, wrong types and empty enabled entries
    /// are discarded, and keys or profiles left without entries are removed.
    pub fn from_json(value: &Value, options: &[Modifier]) -> Self {
        let Some(profiles) = value.as_object() else {
            return Self::default();
        };

        let mut map = BTreeMap::new();
        for (profile_id, keys) in profiles {
            let Some(keys) = keys.as_object() else {
                continue;
            };
            let cleaned: ProfileAssignments = keys
                .iter()
                .filter_map(|(key_id, entry)| {
                    let stored = StoredBinding::deserialize(entry).ok()?;
                    let bindings = stored.into_bindings(options);
                    (!bindings.is_empty()).then(|| (key_id.clone(), bindings))
                })
                .collect();
            if !cleaned.is_empty() {
                map.insert(profile_id.clone(), cleaned);
            }
        }
        Self(map)
    }

    /// Copy that satisfies the pruning invariant: only allowed modifiers,
    /// trimmed actions, no empty enabled entries, no empty keys or profiles.
    pub fn pruned(&self, options: &[Modifier]) -> Self {
        let map = self
            .0
            .iter()
            .filter_map(|(profile_id, keys)| {
                let cleaned = prune_profile(keys, options);
                (!cleaned.is_empty()).then(|| (profile_id.clone(), cleaned))
            })
            .collect();
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn profile(&self, profile_id: &str) -> Option<&ProfileAssignments> {
        self.0.get(profile_id)
    }

    pub fn profiles(&self) -> impl Iterator<Item = (&String, &ProfileAssignments)> {
        self.0.iter()
    }

    pub fn bindings(&self, profile_id: &str, key_id: &str) -> Option<&KeyBindings> {
        self.0.get(profile_id)?.get(key_id)
    }

    pub fn get(&self, profile_id: &str, key_id: &str, modifier: Modifier) -> Option<&KeyAssignment> {
        self.bindings(profile_id, key_id)?.get(&modifier)
    }

    /// Inserts without any normalization. Callers that want the editor
    /// semantics use [`AssignmentMap::set`].
    pub fn insert_raw(
        &mut self,
        profile_id: &str,
        key_id: &str,
        modifier: Modifier,
        assignment: KeyAssignment,
    ) {
        self.0
            .entry(profile_id.to_string())
            .or_default()
            .entry(key_id.to_string())
            .or_default()
            .insert(modifier, assignment);
    }

    /// Stores the trimmed text when it is non-empty or the entry is enabled;
    /// a blank disabled entry removes the modifier instead.
    pub fn set(
        &mut self,
        profile_id: &str,
        key_id: &str,
        modifier: Modifier,
        action: &str,
        enabled: bool,
    ) {
        let text = action.trim();
        if !text.is_empty() || enabled {
            self.insert_raw(profile_id, key_id, modifier, KeyAssignment::new(text, enabled));
        } else {
            self.clear(profile_id, key_id, modifier);
        }
    }

    /// Removes one modifier entry, returning it if present.
    pub fn clear(&mut self, profile_id: &str, key_id: &str, modifier: Modifier) -> Option<KeyAssignment> {
        let keys = self.0.get_mut(profile_id)?;
        let bindings = keys.get_mut(key_id)?;
        let removed = bindings.remove(&modifier);
        if bindings.is_empty() {
            keys.remove(key_id);
        }
        if keys.is_empty() {
            self.0.remove(profile_id);
        }
        removed
    }

    /// Flips the enabled flag while keeping the current action text.
    pub fn set_enabled(&mut self, profile_id: &str, key_id: &str, modifier: Modifier, enabled: bool) {
        let action = self
            .get(profile_id, key_id, modifier)
            .map(|a| a.action.clone())
            .unwrap_or_default();
        self.set(profile_id, key_id, modifier, &action, enabled);
    }

    /// True if any entry of the key would produce a hotkey.
    pub fn has_active_binding(&self, profile_id: &str, key_id: &str) -> bool {
        self.bindings(profile_id, key_id)
            .is_some_and(|b| b.values().any(KeyAssignment::is_active))
    }

    /// One `"Badge: first line"` row per active entry, in display order.
    pub fn summary(&self, profile_id: &str, key_id: &str) -> Vec<String> {
        let Some(bindings) = self.bindings(profile_id, key_id) else {
            return Vec::new();
        };
        Modifier::iter()
            .filter_map(|m| {
                let entry = bindings.get(&m).filter(|a| a.is_active())?;
                let first = entry.action.trim().lines().next().unwrap_or_default();
                Some(format!("{}: {}", m.badge(), first))
            })
            .collect()
    }
}

pub(crate) fn prune_profile(keys: &ProfileAssignments, options: &[Modifier]) -> ProfileAssignments {
    keys.iter()
        .filter_map(|(key_id, bindings)| {
            let kept: KeyBindings = bindings
                .iter()
                .filter(|(m, _)| options.contains(m))
                .filter_map(|(m, a)| a.normalized().map(|a| (*m, a)))
                .collect();
            (!kept.is_empty()).then(|| (key_id.clone(), kept))
        })
        .collect()
}
