//! Command layer: pure business logic, one module per command.
//!
//! Commands operate on plain Rust types and return a [`CmdResult`]; they
//! never print, never exit, and never touch stdout. The CLI renders the
//! result, which keeps every command testable without a terminal.

use std::path::PathBuf;

use crate::model::{PracticeItem, SetRecord};

pub mod assets;
pub mod config;
pub mod decay;
pub mod list;
pub mod scan;
pub mod session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result of one command: discovered sets, affected items,
/// resolved asset paths, and user-facing messages.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub sets: Vec<SetRecord>,
    pub items: Vec<(String, PracticeItem)>,
    pub asset_paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
    /// Whether the status document was mutated and should be persisted.
    pub changed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_sets(mut self, sets: Vec<SetRecord>) -> Self {
        self.sets = sets;
        self
    }

    pub fn with_items(mut self, items: Vec<(String, PracticeItem)>) -> Self {
        self.items = items;
        self
    }

    pub fn with_asset_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.asset_paths = paths;
        self
    }

    pub fn with_changed(mut self) -> Self {
        self.changed = true;
        self
    }
}
