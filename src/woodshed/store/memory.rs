use chrono::Utc;

use super::StatusStore;
use crate::error::Result;
use crate::model::{PracticeStatus, SCHEMA_VERSION};

/// In-memory status store for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    status: PracticeStatus,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(status: PracticeStatus) -> Self {
        Self { status }
    }
}

impl StatusStore for InMemoryStore {
    fn load(&self) -> Result<PracticeStatus> {
        Ok(self.status.clone())
    }

    fn save(&mut self, status: &mut PracticeStatus) -> Result<()> {
        status.last_updated = Some(Utc::now());
        status.schema_version = SCHEMA_VERSION;
        self.status = status.clone();
        Ok(())
    }
}
