//! Assigns a paired part to the tune it belongs to.

use crate::model::{SetId, TuneRef};

/// Pick the tune whose name is the longest prefix of the part's pairing
/// key. Greedy longest-match disambiguates sibling tunes ("Set 01a" vs
/// "Set 01b"). When no tune name matches, or the tune list is empty, the
/// set folder itself stands in as the tune.
pub fn assign_part_to_tune(part_key: &str, tunes: &[TuneRef], set_id: &SetId) -> TuneRef {
    tunes
        .iter()
        .filter(|tune| part_key.starts_with(tune.name.as_str()))
        .max_by_key(|tune| tune.name.len())
        .cloned()
        .unwrap_or_else(|| TuneRef::folder_fallback(set_id))
}
