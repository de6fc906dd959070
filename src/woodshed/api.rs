//! # API Facade
//!
//! The single entry point for all woodshed operations, regardless of the
//! client driving them. The facade loads the status document once,
//! dispatches to the command layer, and persists through the store after
//! every mutation. It returns structured [`CmdResult`] values and never
//! touches stdout or stderr.
//!
//! Generic over [`StatusStore`] so the same code runs against the
//! production [`crate::store::fs::FileStore`] and the in-memory store in
//! tests.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::commands;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::PracticeStatus;
use crate::store::StatusStore;

pub struct PracticeApi<S: StatusStore> {
    store: S,
    library_root: PathBuf,
    data_dir: PathBuf,
    status: PracticeStatus,
}

impl<S: StatusStore> PracticeApi<S> {
    /// Open the API against a store and library location, loading the
    /// current status document.
    pub fn open(store: S, library_root: PathBuf, data_dir: PathBuf) -> Result<Self> {
        let status = store.load()?;
        Ok(Self {
            store,
            library_root,
            data_dir,
            status,
        })
    }

    pub fn status(&self) -> &PracticeStatus {
        &self.status
    }

    pub fn library_root(&self) -> &Path {
        &self.library_root
    }

    /// On-launch decay, persisted only when a score actually changed.
    pub fn apply_launch_decay(&mut self) -> Result<CmdResult> {
        let result = commands::decay::run(&mut self.status, Utc::now())?;
        self.persist_if_changed(&result)?;
        Ok(result)
    }

    /// Discover the library and register new tunes and parts.
    pub fn scan(&mut self) -> Result<CmdResult> {
        let result = commands::scan::run(&self.library_root, &self.data_dir, &mut self.status)?;
        self.persist_if_changed(&result)?;
        Ok(result)
    }

    /// Discover the library for display.
    pub fn list(&self, focus_only: bool) -> Result<CmdResult> {
        commands::list::run(&self.library_root, &self.data_dir, &self.status, focus_only)
    }

    pub fn start_session(&mut self, key: &str, instrument: Option<&str>) -> Result<CmdResult> {
        let result = commands::session::start(&mut self.status, key, instrument)?;
        self.persist_if_changed(&result)?;
        Ok(result)
    }

    pub fn record_success(&mut self, key: &str) -> Result<CmdResult> {
        let result = commands::session::record_success(&mut self.status, key)?;
        self.persist_if_changed(&result)?;
        Ok(result)
    }

    pub fn record_fail(&mut self, key: &str) -> Result<CmdResult> {
        let result = commands::session::record_fail(&mut self.status, key)?;
        self.persist_if_changed(&result)?;
        Ok(result)
    }

    pub fn reset_item(&mut self, key: &str) -> Result<CmdResult> {
        let result = commands::session::reset(&mut self.status, key)?;
        self.persist_if_changed(&result)?;
        Ok(result)
    }

    /// Resolve PDF/WAV paths for an item id. Always resolves against the
    /// full library, ignoring any focus filter.
    pub fn resolve_assets(&self, key: &str, instrument: Option<&str>) -> Result<CmdResult> {
        let sets = crate::discovery::discover(&self.library_root, &self.data_dir, &self.status)?;
        commands::assets::run(&sets, &self.status, key, instrument)
    }

    pub fn get_config(&self, key: Option<&str>) -> Result<CmdResult> {
        commands::config::get(&self.status, key)
    }

    pub fn set_config(&mut self, key: &str, value: &str) -> Result<CmdResult> {
        let result = commands::config::set(&mut self.status, key, value)?;
        self.persist_if_changed(&result)?;
        Ok(result)
    }

    fn persist_if_changed(&mut self, result: &CmdResult) -> Result<()> {
        if result.changed {
            self.store.save(&mut self.status)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemKind;
    use crate::store::memory::InMemoryStore;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn library_fixture() -> (TempDir, PathBuf, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let library = tmp.path().join("lib");
        let data = tmp.path().join("data");
        let set_dir = library.join("Section 1 - Test/Set 01 - Medley");
        let parts_dir = set_dir.join("Parts");
        fs::create_dir_all(&parts_dir).unwrap();
        fs::create_dir_all(&data).unwrap();
        fs::write(set_dir.join("Set 01a - March.pdf"), b"").unwrap();
        fs::write(parts_dir.join("Set 01a - March line 1.pdf"), b"").unwrap();
        fs::write(parts_dir.join("Set 01a - March line 1.wav"), b"").unwrap();
        (tmp, library, data)
    }

    fn open(library: PathBuf, data: PathBuf) -> PracticeApi<InMemoryStore> {
        PracticeApi::open(InMemoryStore::new(), library, data).unwrap()
    }

    #[test]
    fn scan_then_practice_flow() {
        let (_tmp, library, data) = library_fixture();
        let mut api = open(library, data);

        let scanned = api.scan().unwrap();
        assert_eq!(scanned.sets.len(), 1);
        assert_eq!(api.status().items.len(), 2);

        let part_key = "Section 1 - Test|Set 01 - Medley|Parts|Set 01a - March line 1";
        api.start_session(part_key, Some("snare")).unwrap();
        api.record_success(part_key).unwrap();
        api.record_success(part_key).unwrap();

        let item = api.status().item(part_key).unwrap();
        assert_eq!(item.streak, 2);
        assert_eq!(item.score, 20.0);
        assert_eq!(item.kind, ItemKind::Part);
        assert_eq!(
            api.status()
                .instrument_for_set("Section 1 - Test|Set 01 - Medley"),
            "snare"
        );
    }

    #[test]
    fn second_scan_adds_nothing() {
        let (_tmp, library, data) = library_fixture();
        let mut api = open(library, data);

        api.scan().unwrap();
        let before = api.status().items.len();
        let second = api.scan().unwrap();
        assert!(!second.changed);
        assert_eq!(api.status().items.len(), before);
    }

    #[test]
    fn config_roundtrip_through_api() {
        let (_tmp, library, data) = library_fixture();
        let mut api = open(library, data);

        api.set_config("decay-rate", "2.0").unwrap();
        assert_eq!(api.status().decay_rate_percent_per_day, 2.0);

        let shown = api.get_config(Some("decay-rate")).unwrap();
        assert!(shown.messages[0].content.contains("2"));
    }
}
