use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::discovery::discover;
use crate::error::Result;
use crate::merge::merge_discovered;
use crate::model::PracticeStatus;

/// Discover the library and register new tunes and parts in the status
/// document.
pub fn run(
    library_root: &Path,
    data_dir: &Path,
    status: &mut PracticeStatus,
) -> Result<CmdResult> {
    let sets = discover(library_root, data_dir, status)?;
    let report = merge_discovered(status, &sets);

    let mut result = CmdResult::default();
    result.changed = report.total() > 0;
    result.add_message(CmdMessage::success(format!(
        "{} sets discovered, {} new tunes, {} new parts",
        sets.len(),
        report.added_tunes,
        report.added_parts
    )));
    Ok(result.with_sets(sets))
}
