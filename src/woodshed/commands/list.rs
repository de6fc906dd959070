use std::path::Path;

use crate::commands::CmdResult;
use crate::discovery::discover;
use crate::error::Result;
use crate::model::PracticeStatus;

/// Discover the library for display. With `focus_only`, keep only the
/// sets marked as focused in the status document.
pub fn run(
    library_root: &Path,
    data_dir: &Path,
    status: &PracticeStatus,
    focus_only: bool,
) -> Result<CmdResult> {
    let mut sets = discover(library_root, data_dir, status)?;
    if focus_only || status.show_focus_only {
        sets.retain(|set| status.focus_set_ids.contains(&set.id.key()));
    }
    Ok(CmdResult::default().with_sets(sets))
}
