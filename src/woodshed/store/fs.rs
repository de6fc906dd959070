use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use tracing::{error, warn};

use super::StatusStore;
use crate::error::Result;
use crate::model::{PracticeStatus, SCHEMA_VERSION};

pub const STATUS_FILE: &str = "practice_status.json";
const BACKUP_DIR: &str = "backups";

/// File-based status store rooted at the library's data directory.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn status_path(&self) -> PathBuf {
        self.data_dir.join(STATUS_FILE)
    }

    /// Copy the current document into `backups/` with a timestamp before
    /// it gets overwritten. Failure to back up is a warning, not an
    /// error: losing a backup must not block saving current state.
    fn backup_existing(&self) {
        let path = self.status_path();
        if !path.exists() {
            return;
        }
        let backup_dir = self.data_dir.join(BACKUP_DIR);
        let stamp = Utc::now().format("%Y%m%d_%H%M%S");
        let backup_path = backup_dir.join(format!("practice_status_{}.json", stamp));
        let copied = fs::create_dir_all(&backup_dir).and_then(|_| fs::copy(&path, &backup_path));
        if let Err(e) = copied {
            warn!("failed to create backup {}: {}", backup_path.display(), e);
        }
    }
}

impl StatusStore for FileStore {
    fn load(&self) -> Result<PracticeStatus> {
        let path = self.status_path();
        if !path.exists() {
            return Ok(PracticeStatus::default());
        }
        let content = fs::read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(status) => Ok(status),
            Err(e) => {
                error!("invalid JSON in {}: {}", path.display(), e);
                Ok(PracticeStatus::default())
            }
        }
    }

    fn save(&mut self, status: &mut PracticeStatus) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        status.last_updated = Some(Utc::now());
        status.schema_version = SCHEMA_VERSION;

        self.backup_existing();

        let content = serde_json::to_string_pretty(status)?;
        fs::write(self.status_path(), content)?;
        Ok(())
    }
}
