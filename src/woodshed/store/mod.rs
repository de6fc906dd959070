//! # Status Storage
//!
//! The [`StatusStore`] trait abstracts persistence of the practice-status
//! document so the command layer never touches the filesystem directly.
//!
//! - [`fs::FileStore`]: production storage — `practice_status.json` in
//!   the library's data directory, with a timestamped backup written to
//!   `backups/` before every overwrite.
//! - [`memory::InMemoryStore`]: in-memory storage for tests and embedding.

use crate::error::Result;
use crate::model::PracticeStatus;

pub mod fs;
pub mod memory;

/// Abstract interface for loading and saving practice status.
pub trait StatusStore {
    /// Load the status document. A missing or unreadable document yields
    /// a fresh default, never an error.
    fn load(&self) -> Result<PracticeStatus>;

    /// Persist the document, stamping `last_updated` and the schema
    /// version on it.
    fn save(&mut self, status: &mut PracticeStatus) -> Result<()>;
}
