//! # Library Discovery
//!
//! Walks the library folder tree and assembles one [`SetRecord`] per set
//! folder: section folders matching `Section <N> - <Name>` at the top
//! level, set folders one level below, tunes resolved through the
//! [`crate::tunes`] chain, and parts paired from each set's `Parts/`
//! subfolder.
//!
//! Discovery is a pure read: it never mutates the status store. A single
//! unreadable or malformed folder is skipped with a diagnostic; only a
//! wholly inaccessible library root fails the pass.

use std::path::Path;

use tracing::warn;

use crate::assign::assign_part_to_tune;
use crate::error::Result;
use crate::model::{PartRecord, PracticeStatus, SetId, SetRecord};
use crate::naming::{is_excluded_dir, is_section_folder, PARTS_DIR};
use crate::pairing::pair_parts;
use crate::tunes::{resolve_tunes, FolderTune, InferredTunes, MappedTunes, StructureMap, TuneSource};

/// Discover all sets (with tunes and parts) under `library_root`.
///
/// `data_dir` may hold the structure map; `status` supplies the streaks
/// used to order parts. Results are sorted by section then set folder.
pub fn discover(
    library_root: &Path,
    data_dir: &Path,
    status: &PracticeStatus,
) -> Result<Vec<SetRecord>> {
    let mut sources: Vec<Box<dyn TuneSource>> = Vec::new();
    if let Some(map) = StructureMap::load(data_dir) {
        sources.push(Box::new(MappedTunes(map)));
    }
    sources.push(Box::new(InferredTunes));
    sources.push(Box::new(FolderTune));

    let mut records = Vec::new();
    for entry in std::fs::read_dir(library_root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("unreadable entry in {}: {}", library_root.display(), e);
                continue;
            }
        };
        let section_path = entry.path();
        if !section_path.is_dir() {
            continue;
        }
        let Some(section_name) = section_path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_excluded_dir(section_name) || !is_section_folder(section_name) {
            continue;
        }

        let sets = match std::fs::read_dir(&section_path) {
            Ok(sets) => sets,
            Err(e) => {
                warn!("skipping section {}: {}", section_path.display(), e);
                continue;
            }
        };
        for set_entry in sets.flatten() {
            let set_path = set_entry.path();
            if !set_path.is_dir() {
                continue;
            }
            let Some(set_folder_name) = set_path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if set_folder_name.starts_with('.') {
                continue;
            }

            let set_id = SetId::new(section_name, set_folder_name);
            let tunes = resolve_tunes(&sources, &set_id, &set_path);

            let mut parts: Vec<PartRecord> = Vec::new();
            let parts_dir = set_path.join(PARTS_DIR);
            if parts_dir.is_dir() {
                match pair_parts(&parts_dir, &set_id, status) {
                    Ok(paired) => {
                        parts = paired
                            .into_iter()
                            .map(|part| {
                                let tune = assign_part_to_tune(&part.id.part, &tunes, &set_id);
                                PartRecord {
                                    id: part.id,
                                    label: part.label,
                                    short_label: part.short_label,
                                    pdf_path: part.pdf_path,
                                    wav_path: part.wav_path,
                                    tune,
                                }
                            })
                            .collect();
                    }
                    Err(e) => {
                        warn!("skipping parts folder {}: {}", parts_dir.display(), e);
                    }
                }
            }

            records.push(SetRecord {
                id: set_id,
                path: set_path,
                tunes,
                parts,
            });
        }
    }

    records.sort_by(|a, b| {
        a.id.section
            .cmp(&b.id.section)
            .then_with(|| a.id.folder.cmp(&b.id.folder))
    });
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Fixture {
        _tmp: TempDir,
        library: PathBuf,
        data: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let tmp = TempDir::new().unwrap();
            let library = tmp.path().join("lib");
            let data = tmp.path().join("data");
            fs::create_dir_all(&library).unwrap();
            fs::create_dir_all(&data).unwrap();
            Self {
                _tmp: tmp,
                library,
                data,
            }
        }

        fn dir(&self, rel: &str) -> PathBuf {
            let path = self.library.join(rel);
            fs::create_dir_all(&path).unwrap();
            path
        }

        fn discover(&self) -> Vec<SetRecord> {
            discover(&self.library, &self.data, &PracticeStatus::default()).unwrap()
        }
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn one_record_per_set_folder_with_unique_ids() {
        let fx = Fixture::new();
        fx.dir("Section 1 - Marches/Set 01 - Medley");
        fx.dir("Section 1 - Marches/Set 02 - Slow Airs");
        fx.dir("Section 2 - Competition/Set 01 - Medley");

        let records = fx.discover();
        assert_eq!(records.len(), 3);
        let mut ids: Vec<String> = records.iter().map(|r| r.id.key()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn skips_non_section_and_excluded_folders() {
        let fx = Fixture::new();
        fx.dir("Section 1 - Marches/Set 01 - Medley");
        fx.dir("Tune Resources/whatever");
        fx.dir("#Practice Resources/data");
        fx.dir(".git/objects");
        fx.dir("Unrelated Folder/Set 01");

        let records = fx.discover();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.section, "Section 1 - Marches");
    }

    #[test]
    fn hidden_set_folders_are_skipped() {
        let fx = Fixture::new();
        fx.dir("Section 1 - Marches/.DS_Store_dir");
        fx.dir("Section 1 - Marches/Any Name At All");

        let records = fx.discover();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.folder, "Any Name At All");
    }

    #[test]
    fn records_sorted_by_section_then_folder() {
        let fx = Fixture::new();
        fx.dir("Section 2 - B/Set 01");
        fx.dir("Section 1 - A/Set 02");
        fx.dir("Section 1 - A/Set 01");

        let keys: Vec<String> = fx.discover().iter().map(|r| r.id.key()).collect();
        assert_eq!(
            keys,
            [
                "Section 1 - A|Set 01",
                "Section 1 - A|Set 02",
                "Section 2 - B|Set 01"
            ]
        );
    }

    #[test]
    fn structure_map_takes_precedence_over_inference() {
        let fx = Fixture::new();
        let set_dir = fx.dir("Section 1 - Marches/Set 01 - Medley");
        touch(&set_dir, "Set 01a - Inferred.pdf");
        let json = r#"[{"section_name": "Section 1 - Marches", "sets": [
            {"folder_name": "Set 01 - Medley", "tunes": [{"tune_name": "Mapped Tune"}]}
        ]}]"#;
        fs::write(fx.data.join(crate::tunes::STRUCTURE_FILE), json).unwrap();

        let records = fx.discover();
        assert_eq!(records[0].tunes.len(), 1);
        assert_eq!(records[0].tunes[0].name, "Mapped Tune");
    }

    #[test]
    fn single_tune_set_policy_for_competition_layout() {
        let fx = Fixture::new();
        let set_dir = fx.dir("Section 1 - Comp/Competition 08 - X");
        touch(&set_dir, "Competition 08 - X.wav");
        let parts_dir = fx.dir("Section 1 - Comp/Competition 08 - X/Parts");
        touch(&parts_dir, "Competition 08 - X line 1.pdf");
        touch(&parts_dir, "Competition 08 - X line 1.wav");

        let records = fx.discover();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.tunes.len(), 1);
        assert_eq!(record.tunes[0].name, "Competition 08 - X");
        assert_eq!(record.parts.len(), 1);
        assert_eq!(record.parts[0].tune.name, "Competition 08 - X");
        assert_eq!(
            record.parts[0].id.key(),
            "Section 1 - Comp|Competition 08 - X|Parts|Competition 08 - X line 1"
        );
    }

    #[test]
    fn parts_assigned_to_longest_prefix_tune() {
        let fx = Fixture::new();
        let set_dir = fx.dir("Section 1 - Marches/Set 01 - Medley");
        touch(&set_dir, "Set 01a - March.pdf");
        touch(&set_dir, "Set 01b - Strathspey.pdf");
        let parts_dir = fx.dir("Section 1 - Marches/Set 01 - Medley/Parts");
        touch(&parts_dir, "Set 01b - Strathspey line 1_bass.pdf");
        touch(&parts_dir, "Set 01b - Strathspey line 1.wav");

        let records = fx.discover();
        let part = &records[0].parts[0];
        assert_eq!(part.tune.name, "Set 01b - Strathspey");
        assert_eq!(part.short_label, "line 1");
    }

    #[test]
    fn rediscovery_is_reproducible() {
        let fx = Fixture::new();
        let set_dir = fx.dir("Section 1 - Marches/Set 01 - Medley");
        touch(&set_dir, "Set 01a - March.pdf");
        let parts_dir = fx.dir("Section 1 - Marches/Set 01 - Medley/Parts");
        touch(&parts_dir, "Set 01a - March phrase 1.pdf");
        touch(&parts_dir, "Set 01a - March phrase 1.wav");

        let first = fx.discover();
        let second = fx.discover();
        let first_keys: Vec<String> = first
            .iter()
            .flat_map(|r| r.parts.iter().map(|p| p.id.key()))
            .collect();
        let second_keys: Vec<String> = second
            .iter()
            .flat_map(|r| r.parts.iter().map(|p| p.id.key()))
            .collect();
        assert_eq!(first_keys, second_keys);
    }
}
