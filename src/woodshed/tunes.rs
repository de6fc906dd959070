//! # Tune Resolution
//!
//! Resolves a set's tune list through an ordered chain of sources:
//! the externally-produced structure map, inference from complete-tune
//! files in the set folder, and finally the set folder itself as a single
//! synthetic tune. The first source that answers wins.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::model::{SetId, TuneRef};
use crate::naming::{is_tune_stem, strip_instrument_suffix, INSTRUMENTS};

/// File name of the structure map inside the data directory.
pub const STRUCTURE_FILE: &str = "music_book_structure.json";

#[derive(Debug, Clone, Deserialize)]
pub struct StructureTune {
    pub tune_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StructureSet {
    pub folder_name: String,
    #[serde(default)]
    pub tunes: Vec<StructureTune>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StructureSection {
    pub section_name: String,
    #[serde(default)]
    pub sets: Vec<StructureSet>,
}

/// The externally-supplied section/set/tune map.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct StructureMap {
    pub sections: Vec<StructureSection>,
}

impl StructureMap {
    /// Load the map from the data directory. Absent, unreadable, or
    /// malformed files all degrade to `None`; discovery then infers from
    /// the filesystem instead.
    pub fn load(data_dir: &Path) -> Option<Self> {
        let path = data_dir.join(STRUCTURE_FILE);
        if !path.exists() {
            return None;
        }
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("could not read structure map {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(map) => Some(map),
            Err(e) => {
                warn!("could not parse structure map {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// One source of tune names for a set. Returning `None` passes the
/// question to the next source in the chain.
pub trait TuneSource {
    fn tunes_for(&self, set_id: &SetId, set_path: &Path) -> Option<Vec<TuneRef>>;
}

/// Tune names taken verbatim from the structure map entry matching the
/// set's section and folder.
pub struct MappedTunes(pub StructureMap);

impl TuneSource for MappedTunes {
    fn tunes_for(&self, set_id: &SetId, _set_path: &Path) -> Option<Vec<TuneRef>> {
        let section = self
            .0
            .sections
            .iter()
            .find(|section| section.section_name == set_id.section)?;
        let set = section
            .sets
            .iter()
            .find(|set| set.folder_name == set_id.folder)?;
        let tunes: Vec<TuneRef> = set
            .tunes
            .iter()
            .filter(|tune| !tune.tune_name.is_empty())
            .map(|tune| TuneRef::new(set_id, tune.tune_name.clone()))
            .collect();
        if tunes.is_empty() {
            None
        } else {
            Some(tunes)
        }
    }
}

/// Tune names inferred from complete-tune files directly in the set
/// folder: PDF/WAV stems without an instrument suffix matching the
/// `Set NN - Title` convention, deduplicated and sorted.
pub struct InferredTunes;

impl TuneSource for InferredTunes {
    fn tunes_for(&self, set_id: &SetId, set_path: &Path) -> Option<Vec<TuneRef>> {
        let entries = match std::fs::read_dir(set_path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("could not read set folder {}: {}", set_path.display(), e);
                return None;
            }
        };

        let mut names: BTreeSet<String> = BTreeSet::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_lowercase());
            if !matches!(ext.as_deref(), Some("pdf") | Some("wav")) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if strip_instrument_suffix(stem, &INSTRUMENTS) != stem {
                continue;
            }
            if is_tune_stem(stem) {
                names.insert(stem.to_string());
            }
        }

        if names.is_empty() {
            None
        } else {
            Some(
                names
                    .into_iter()
                    .map(|name| TuneRef::new(set_id, name))
                    .collect(),
            )
        }
    }
}

/// Last resort: the set folder itself is the single tune. Competition
/// sets with one score and no `Set NN` naming land here.
pub struct FolderTune;

impl TuneSource for FolderTune {
    fn tunes_for(&self, set_id: &SetId, _set_path: &Path) -> Option<Vec<TuneRef>> {
        Some(vec![TuneRef::folder_fallback(set_id)])
    }
}

/// Walk the chain and return the first answer. The chain is expected to
/// end with [`FolderTune`], which always answers.
pub fn resolve_tunes(
    sources: &[Box<dyn TuneSource>],
    set_id: &SetId,
    set_path: &Path,
) -> Vec<TuneRef> {
    sources
        .iter()
        .find_map(|source| source.tunes_for(set_id, set_path))
        .unwrap_or_else(|| vec![TuneRef::folder_fallback(set_id)])
}
