//! Reconciles discovery results with the persisted practice status.
//!
//! The merge is strictly additive: unseen tunes and parts get a default
//! record, existing entries are never touched, and running it twice with
//! unchanged discovery results is a no-op. Sets are organizational only
//! and never receive an entry.

use std::collections::hash_map::Entry;

use crate::model::{ItemKind, PracticeItem, PracticeStatus, SetRecord};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added_tunes: usize,
    pub added_parts: usize,
}

impl MergeReport {
    pub fn total(&self) -> usize {
        self.added_tunes + self.added_parts
    }
}

/// Insert default records for every discovered tune and part missing from
/// the status document.
pub fn merge_discovered(status: &mut PracticeStatus, sets: &[SetRecord]) -> MergeReport {
    let mut report = MergeReport::default();
    for set in sets {
        for tune in &set.tunes {
            if insert_default(status, tune.id.key(), ItemKind::Tune) {
                report.added_tunes += 1;
            }
        }
        for part in &set.parts {
            if insert_default(status, part.id.key(), ItemKind::Part) {
                report.added_parts += 1;
            }
        }
    }
    report
}

fn insert_default(status: &mut PracticeStatus, key: String, kind: ItemKind) -> bool {
    match status.items.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(PracticeItem::new(kind));
            true
        }
        Entry::Occupied(_) => false,
    }
}
