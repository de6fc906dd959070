//! Core data types: identifiers, discovery records, and the persisted
//! practice-status document.
//!
//! Identifiers are structured value types; the `|`-delimited composite
//! string used as the store key is derived only at the display/storage
//! boundary via [`SetId::key`], [`TuneId::key`], and [`PartId::key`].

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::naming::{PartLabel, PARTS_DIR};

pub const SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_DECAY_RATE: f64 = 1.0;
pub const DEFAULT_FOCUS_INSTRUMENT: &str = "bass";

/// What a practice-status entry tracks.
///
/// `Set` survives only so legacy status documents round-trip; sets are
/// organizational and are never created or decayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Set,
    Tune,
    Part,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Set => f.write_str("set"),
            ItemKind::Tune => f.write_str("tune"),
            ItemKind::Part => f.write_str("part"),
        }
    }
}

/// Identity of a set: owning section folder plus set folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetId {
    pub section: String,
    pub folder: String,
}

impl SetId {
    pub fn new(section: impl Into<String>, folder: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            folder: folder.into(),
        }
    }

    /// The composite store key, `<section>|<folder>`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.section, self.folder)
    }
}

/// Identity of a tune within a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TuneId {
    pub set: SetId,
    pub tune: String,
}

impl TuneId {
    pub fn new(set: SetId, tune: impl Into<String>) -> Self {
        Self {
            set,
            tune: tune.into(),
        }
    }

    /// The composite store key, `<section>|<folder>|<tune>`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TuneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.set, self.tune)
    }
}

/// Identity of a practiced part within a set's Parts folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartId {
    pub set: SetId,
    pub part: String,
}

impl PartId {
    pub fn new(set: SetId, part: impl Into<String>) -> Self {
        Self {
            set,
            part: part.into(),
        }
    }

    /// The composite store key, `<section>|<folder>|Parts|<part>`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.set, PARTS_DIR, self.part)
    }
}

/// Classify a composite store key by its shape.
///
/// `<section>|<folder>` is a set, `<section>|<folder>|<tune>` a tune, and
/// `<section>|<folder>|Parts|<part>` a part.
pub fn kind_of_key(key: &str) -> Option<ItemKind> {
    let segments: Vec<&str> = key.split('|').collect();
    match segments.len() {
        2 => Some(ItemKind::Set),
        3 => Some(ItemKind::Tune),
        4 if segments[2] == PARTS_DIR => Some(ItemKind::Part),
        _ => None,
    }
}

/// The `<section>|<folder>` prefix of any composite key.
pub fn set_key_of(key: &str) -> Option<String> {
    let mut segments = key.split('|');
    let section = segments.next()?;
    let folder = segments.next()?;
    Some(format!("{}|{}", section, folder))
}

/// A named tune belonging to a set, discovered or synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuneRef {
    pub name: String,
    pub id: TuneId,
}

impl TuneRef {
    pub fn new(set_id: &SetId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: TuneId::new(set_id.clone(), name.clone()),
            name,
        }
    }

    /// The synthetic tune a part falls back to when no tune name matches:
    /// the set folder itself.
    pub fn folder_fallback(set_id: &SetId) -> Self {
        Self::new(set_id, set_id.folder.clone())
    }
}

/// One practiced fragment: a paired PDF/WAV inside a set's Parts folder,
/// assigned to the tune it belongs to.
#[derive(Debug, Clone)]
pub struct PartRecord {
    pub id: PartId,
    pub label: PartLabel,
    pub short_label: String,
    pub pdf_path: PathBuf,
    pub wav_path: PathBuf,
    pub tune: TuneRef,
}

/// One discovered unit-of-organization: a set folder with its resolved
/// tunes and paired parts.
#[derive(Debug, Clone)]
pub struct SetRecord {
    pub id: SetId,
    pub path: PathBuf,
    pub tunes: Vec<TuneRef>,
    pub parts: Vec<PartRecord>,
}

/// Practice state for one item, keyed in the store by its composite id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub score: f64,
    pub last_practiced: Option<DateTime<Utc>>,
    pub last_score_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub missing: bool,
}

impl PracticeItem {
    /// A fresh record: zero streak, zero score, never practiced.
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            streak: 0,
            score: 0.0,
            last_practiced: None,
            last_score_updated: None,
            missing: false,
        }
    }
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_decay_rate() -> f64 {
    DEFAULT_DECAY_RATE
}

fn default_focus_instrument() -> String {
    DEFAULT_FOCUS_INSTRUMENT.to_string()
}

/// The persisted practice-status document.
///
/// Absent fields normalize to defaults on load, so documents written by
/// older versions keep working.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeStatus {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default = "default_decay_rate")]
    pub decay_rate_percent_per_day: f64,
    #[serde(default = "default_focus_instrument")]
    pub focus_instrument: String,
    #[serde(default)]
    pub focus_set_ids: Vec<String>,
    #[serde(default)]
    pub show_focus_only: bool,
    #[serde(default)]
    pub set_instruments: HashMap<String, String>,
    #[serde(default)]
    pub items: HashMap<String, PracticeItem>,
}

impl Default for PracticeStatus {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            last_updated: None,
            decay_rate_percent_per_day: DEFAULT_DECAY_RATE,
            focus_instrument: default_focus_instrument(),
            focus_set_ids: Vec::new(),
            show_focus_only: false,
            set_instruments: HashMap::new(),
            items: HashMap::new(),
        }
    }
}

impl PracticeStatus {
    pub fn item(&self, key: &str) -> Option<&PracticeItem> {
        self.items.get(key)
    }

    /// Streak for a key; unknown items count as zero.
    pub fn streak_for(&self, key: &str) -> u32 {
        self.items.get(key).map(|item| item.streak).unwrap_or(0)
    }

    /// Instrument to use for a set: per-set override, else the focus
    /// instrument.
    pub fn instrument_for_set(&self, set_key: &str) -> &str {
        self.set_instruments
            .get(set_key)
            .map(String::as_str)
            .unwrap_or(&self.focus_instrument)
    }
}
