//! # Part Pairing
//!
//! Pairs the audio and score files inside a set's `Parts/` folder. A PDF
//! carries an instrument suffix (`... line 1_bagpipes.pdf`) while the
//! matching recording does not (`... line 1.wav`); stripping the suffix
//! yields the shared pairing key. Only keys with both halves survive.
//!
//! Output ordering is pedagogical: parts are grouped phrase/line/part and
//! sorted inside each group by current streak, lowest first, so the weak
//! spots come up first in a session.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::{PartId, PracticeStatus, SetId};
use crate::naming::{detect_label, short_label, strip_instrument_suffix, PartLabel, INSTRUMENTS};

/// A paired part before tune assignment.
#[derive(Debug, Clone)]
pub struct PairedPart {
    pub id: PartId,
    pub label: PartLabel,
    pub short_label: String,
    pub pdf_path: PathBuf,
    pub wav_path: PathBuf,
}

/// Pair the PDF/WAV files directly inside `parts_dir`.
///
/// Files without a phrase/line/part keyword are ignored. Keys missing
/// either half are dropped. The returned sequence is grouped by label and
/// sorted by streak ascending within each group, with filesystem order as
/// the stable tie-break.
pub fn pair_parts(
    parts_dir: &Path,
    set_id: &SetId,
    status: &PracticeStatus,
) -> Result<Vec<PairedPart>> {
    let mut pdfs: HashMap<String, PathBuf> = HashMap::new();
    let mut wavs: HashMap<String, PathBuf> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for entry in std::fs::read_dir(parts_dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("unreadable entry in {}: {}", parts_dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if detect_label(name).is_none() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("pdf") => {
                let key = strip_instrument_suffix(stem, &INSTRUMENTS).to_string();
                insert_candidate(&mut pdfs, &mut order, key, path);
            }
            Some("wav") => {
                insert_candidate(&mut wavs, &mut order, stem.to_string(), path);
            }
            _ => {}
        }
    }

    let mut buckets: BTreeMap<PartLabel, Vec<PairedPart>> = BTreeMap::new();
    for key in order {
        let (Some(pdf_path), Some(wav_path)) = (pdfs.get(&key), wavs.get(&key)) else {
            debug!("part {:?}: missing PDF or WAV pair", key);
            continue;
        };
        let Some(label) = detect_label(&key) else {
            continue;
        };
        buckets.entry(label).or_default().push(PairedPart {
            id: PartId::new(set_id.clone(), key.clone()),
            label,
            short_label: short_label(&key).to_string(),
            pdf_path: pdf_path.clone(),
            wav_path: wav_path.clone(),
        });
    }

    let mut parts = Vec::new();
    for label in PartLabel::ORDERED {
        let mut group = buckets.remove(&label).unwrap_or_default();
        group.sort_by_key(|part| status.streak_for(&part.id.key()));
        parts.extend(group);
    }
    Ok(parts)
}

/// Record a candidate file for a pairing key. When two files collapse to
/// the same key on the same side, the lexicographically smallest file
/// name is kept so re-discovery is reproducible.
fn insert_candidate(
    map: &mut HashMap<String, PathBuf>,
    order: &mut Vec<String>,
    key: String,
    path: PathBuf,
) {
    if !order.contains(&key) {
        order.push(key.clone());
    }
    match map.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(path);
        }
        Entry::Occupied(mut slot) => {
            warn!(
                "ambiguous pairing for key {:?}: {} vs {}",
                slot.key(),
                slot.get().display(),
                path.display()
            );
            if path.file_name() < slot.get().file_name() {
                slot.insert(path);
            }
        }
    }
}
