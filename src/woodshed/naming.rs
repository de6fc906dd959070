//! # Naming Conventions
//!
//! Pure helpers for the library's file and folder naming conventions:
//! which folders are sections, which file stems are complete tunes, which
//! filenames denote a practiced fragment, and how instrument-specific
//! PDF names map back to the instrument-agnostic recording name.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Instrument suffixes that may appear on score PDFs (`_bass`, `_snare`, ...).
pub const INSTRUMENTS: [&str; 5] = ["bagpipes", "seconds", "bass", "snare", "tenor"];

/// Subfolder of a set that holds practiced fragments.
pub const PARTS_DIR: &str = "Parts";

/// Reserved folder name excluded from section discovery.
pub const RESOURCE_DIR: &str = "Tune Resources";

static SECTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^Section\s+\d+\s+-").unwrap());
static TUNE_STEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Set\s+\d+[a-z]?\s+-\s+.+").unwrap());

/// The kind of practiced fragment a file denotes.
///
/// Variant order is the priority order used both for label detection and
/// for grouping parts in discovery output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartLabel {
    Phrase,
    Line,
    Part,
}

impl PartLabel {
    pub const ORDERED: [PartLabel; 3] = [PartLabel::Phrase, PartLabel::Line, PartLabel::Part];

    pub fn keyword(self) -> &'static str {
        match self {
            PartLabel::Phrase => "phrase",
            PartLabel::Line => "line",
            PartLabel::Part => "part",
        }
    }
}

impl fmt::Display for PartLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Return which label (phrase/line/part) appears in `name`, if any.
///
/// Case-insensitive substring search, checked in priority order; the
/// first keyword found wins when several appear.
pub fn detect_label(name: &str) -> Option<PartLabel> {
    let lower = name.to_lowercase();
    PartLabel::ORDERED
        .into_iter()
        .find(|label| lower.contains(label.keyword()))
}

/// Strip a trailing instrument suffix (`_bass`, ` bass`, ...) from a stem.
///
/// Produces the pairing key shared between an instrument-specific PDF and
/// its instrument-agnostic WAV. Stems without a known suffix pass through
/// unchanged.
pub fn strip_instrument_suffix<'a>(stem: &'a str, instruments: &[&str]) -> &'a str {
    let lower = stem.to_lowercase();
    for instrument in instruments {
        for sep in ['_', ' '] {
            let suffix = format!("{}{}", sep, instrument);
            if lower.ends_with(&suffix) {
                return &stem[..stem.len() - suffix.len()];
            }
        }
    }
    stem
}

/// Shorten a part identifier to the fragment it names.
///
/// Finds the first ` <keyword>` occurrence (in priority order) in the
/// lowercased id and returns the original-case substring starting at the
/// keyword. Ids without a keyword are returned unchanged. Idempotent.
pub fn short_label(full_id: &str) -> &str {
    let lower = full_id.to_lowercase();
    for label in PartLabel::ORDERED {
        let needle = format!(" {}", label.keyword());
        if let Some(pos) = lower.find(&needle) {
            return &full_id[pos + 1..];
        }
    }
    full_id
}

/// Whether a folder name matches the `Section <N> - <Name>` convention.
pub fn is_section_folder(name: &str) -> bool {
    SECTION_RE.is_match(name)
}

/// Whether a file stem matches the `Set <NN><letter?> - <Title>` convention
/// used for complete tunes.
pub fn is_tune_stem(stem: &str) -> bool {
    TUNE_STEM_RE.is_match(stem)
}

/// Folders skipped during discovery: hidden names, `#`-prefixed resource
/// folders, and the reserved tune-resources folder.
pub fn is_excluded_dir(name: &str) -> bool {
    name.starts_with('#') || name.starts_with('.') || name == RESOURCE_DIR
}
