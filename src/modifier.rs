use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Modifier combined with a physical key to form a hotkey.
///
/// Declaration order is the order shown to users. `Ord` compares by name,
/// so ordered maps keyed by `Modifier` iterate Alt, Ctrl, None, Shift, Win.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Modifier {
    #[default]
    None,
    Ctrl,
    Win,
    Alt,
    Shift,
}

impl Modifier {
    pub const ALL: [Modifier; 5] = [
        Modifier::None,
        Modifier::Ctrl,
        Modifier::Win,
        Modifier::Alt,
        Modifier::Shift,
    ];

    /// Name as written in the assignments file.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parses `name` and accepts it only if it belongs to `options`.
    pub fn parse_allowed(name: &str, options: &[Modifier]) -> Option<Modifier> {
        name.parse::<Modifier>()
            .ok()
            .filter(|m| options.contains(m))
    }

    /// Short heading used in key summaries.
    pub fn badge(&self) -> &'static str {
        match self {
            Modifier::None => "Base",
            Modifier::Ctrl => "Ctrl",
            Modifier::Win => "Win",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
        }
    }
}

impl PartialOrd for Modifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Modifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

pub type PrefixTable = BTreeMap<Modifier, String>;

/// Symbolic prefixes understood by the remapping engine. `None` has no entry.
pub fn default_prefix_table() -> PrefixTable {
    [
        (Modifier::Ctrl, "^"),
        (Modifier::Win, "#"),
        (Modifier::Alt, "!"),
        (Modifier::Shift, "+"),
    ]
    .into_iter()
    .map(|(m, p)| (m, p.to_string()))
    .collect()
}
