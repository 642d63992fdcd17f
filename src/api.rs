// ===== hotkeyforge/src/api.rs =====
use crate::assignments::{AssignmentMap, KeyAssignment, KeyBindings};
use crate::compiler;
use crate::config::{Config, DataPaths};
use crate::consts::DEFAULT_HEADER_LINES;
use crate::error::{HfResult, HotkeyForgeError};
use crate::export;
use crate::keys::{self, KeyNameTable};
use crate::modifier::{self, Modifier, PrefixTable};
use crate::profiles::{self, KeyboardProfile, ProfileCatalog};
use crate::store::{self, LoadedSettings};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The in-memory state behind the editor.
///
/// Holds the live mapping plus the static tables loaded at startup. Every
/// mutating call persists a snapshot through the settings store.
pub struct EditorSession {
    paths: DataPaths,
    catalog: ProfileCatalog,
    header_lines: Vec<String>,
    key_names: KeyNameTable,
    modifier_prefix: PrefixTable,
    modifier_options: Vec<Modifier>,
    actions: AssignmentMap,
    current_profile: String,
    selected_key: String,
    last_text: String,
    last_modifier: Modifier,
    export_path: PathBuf,
    load_warning: Option<HotkeyForgeError>,
}

impl EditorSession {
    /// Loads profiles, header, assignments and export path. Never fails:
    /// unusable files fall back to defaults, and a corrupt assignments file
    /// is reported through [`EditorSession::take_load_warning`].
    pub fn open(config: &Config) -> Self {
        let paths = config.paths.clone();
        let catalog = profiles::load_profiles(paths.profiles());
        let header_lines = store::load_script_header(paths.header(), DEFAULT_HEADER_LINES);
        let modifier_options = Modifier::ALL.to_vec();
        let (settings, load_warning) = store::load_settings(paths.settings(), &modifier_options);
        let export_path = export::load_export_path(paths.export_path(), &paths.default_export());

        let current_profile = if catalog.by_id(&settings.last_profile).is_some() {
            settings.last_profile.clone()
        } else {
            catalog.default_profile().to_string()
        };

        let mut session = Self {
            paths,
            catalog,
            header_lines,
            key_names: keys::default_key_names(),
            modifier_prefix: modifier::default_prefix_table(),
            modifier_options,
            actions: settings.actions_by_profile,
            current_profile,
            selected_key: settings.last_key,
            last_text: settings.last_text,
            last_modifier: settings.last_modifier,
            export_path,
            load_warning,
        };

        if let Some(requested) = &config.profile {
            match session.catalog.resolve(requested) {
                Some(p) => session.current_profile = p.id.clone(),
                None => warn!("Unknown profile '{}', keeping '{}'", requested, session.current_profile),
            }
        }

        info!(
            "Session opened: {} profiles, editing '{}'",
            session.catalog.profiles().len(),
            session.current_profile
        );
        session
    }

    pub fn take_load_warning(&mut self) -> Option<HotkeyForgeError> {
        self.load_warning.take()
    }

    pub fn catalog(&self) -> &ProfileCatalog {
        &self.catalog
    }

    pub fn actions(&self) -> &AssignmentMap {
        &self.actions
    }

    pub fn header_lines(&self) -> &[String] {
        &self.header_lines
    }

    pub fn current_profile(&self) -> &KeyboardProfile {
        self.catalog
            .by_id(&self.current_profile)
            .unwrap_or(&self.catalog.profiles()[0])
    }

    pub fn selected_key(&self) -> Option<&str> {
        (!self.selected_key.is_empty()).then_some(self.selected_key.as_str())
    }

    pub fn last_modifier(&self) -> Modifier {
        self.last_modifier
    }

    pub fn last_text(&self) -> &str {
        &self.last_text
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    pub fn select_profile(&mut self, label_or_id: &str) -> HfResult<()> {
        let id = self
            .catalog
            .resolve(label_or_id)
            .map(|p| p.id.clone())
            .ok_or_else(|| HotkeyForgeError::Validation(format!("Unknown profile '{}'", label_or_id)))?;
        self.current_profile = id;
        self.save()
    }

    /// Selects a key for editing. Keys outside the built-in layout are
    /// accepted and compiled with their upper-cased id.
    pub fn select_key(&mut self, key: &str) {
        let id = keys::key_id(key);
        if !keys::is_known_key(&id) {
            warn!("Key '{}' is not part of the built-in layout", id);
        }
        self.selected_key = id;
    }

    fn require_key(&self) -> HfResult<String> {
        self.selected_key().map(str::to_string).ok_or_else(|| {
            HotkeyForgeError::Validation("Please choose a key before saving an action.".to_string())
        })
    }

    pub fn bindings(&self, key: &str) -> Option<&KeyBindings> {
        self.actions.bindings(&self.current_profile, &keys::key_id(key))
    }

    /// Modifier to show when a key is opened: the last used one if the key has
    /// it, otherwise the key's first entry, otherwise `None`.
    pub fn suggested_modifier(&self, key: &str) -> Modifier {
        match self.bindings(key) {
            Some(b) if b.contains_key(&self.last_modifier) => self.last_modifier,
            Some(b) => b.keys().next().copied().unwrap_or_default(),
            None => Modifier::None,
        }
    }

    pub fn has_binding(&self, key: &str) -> bool {
        self.actions
            .has_active_binding(&self.current_profile, &keys::key_id(key))
    }

    pub fn key_summary(&self, key: &str) -> Vec<String> {
        self.actions.summary(&self.current_profile, &keys::key_id(key))
    }

    pub fn assign(&mut self, modifier: Modifier, text: &str, enabled: bool) -> HfResult<()> {
        let key = self.require_key()?;
        self.actions
            .set(&self.current_profile, &key, modifier, text, enabled);
        self.last_text = text.trim().to_string();
        self.last_modifier = modifier;
        self.save()
    }

    pub fn clear(&mut self, modifier: Modifier) -> HfResult<Option<KeyAssignment>> {
        let key = self.require_key()?;
        let removed = self.actions.clear(&self.current_profile, &key, modifier);
        self.last_text.clear();
        self.last_modifier = Modifier::None;
        self.save()?;
        Ok(removed)
    }

    pub fn set_enabled(&mut self, modifier: Modifier, enabled: bool) -> HfResult<()> {
        let key = self.require_key()?;
        self.actions
            .set_enabled(&self.current_profile, &key, modifier, enabled);
        self.save()
    }

    pub fn preview(&self) -> String {
        compiler::compile(
            &self.header_lines,
            self.catalog.profiles(),
            &self.actions,
            &self.key_names,
            &self.modifier_prefix,
            &self.modifier_options,
        )
    }

    /// Writes the compiled script to the remembered export path.
    pub fn export(&self) -> HfResult<PathBuf> {
        export::export_script(&self.export_path, &self.preview())?;
        Ok(self.export_path.clone())
    }

    /// Exports to `dest`, then remembers it as the export path.
    /// A rejected export leaves the remembered path unchanged.
    pub fn export_to(&mut self, dest: &Path) -> HfResult<PathBuf> {
        export::export_script(dest, &self.preview())?;
        if dest != self.export_path.as_path() {
            self.export_path = dest.to_path_buf();
            export::save_export_path(self.paths.export_path(), &self.export_path)?;
        }
        Ok(dest.to_path_buf())
    }

    /// Persists the mapping and last-used state.
    pub fn save(&self) -> HfResult<()> {
        let snapshot = LoadedSettings {
            last_key: self.selected_key.clone(),
            last_text: self.last_text.clone(),
            last_modifier: self.last_modifier,
            last_profile: self.current_profile.clone(),
            actions_by_profile: self.actions.clone(),
        };
        store::save_settings(self.paths.settings(), &snapshot, &self.modifier_options)
    }
}
