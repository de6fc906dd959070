//! # Woodshed Architecture
//!
//! Woodshed is a **UI-agnostic practice-tracking library**. The binary is
//! a thin CLI client; nothing in the library assumes a terminal, so a
//! desktop shell could embed the same core unchanged.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, renders output, owns exit codes        │
//! │  - The ONLY place that touches stdout/stderr                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Loads the status document, persists after mutations      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic returning CmdResult                  │
//! │  - No I/O assumptions beyond reading the library tree       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StatusStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discovery
//!
//! The heart of the library is read-only interpretation of a loosely
//! structured folder tree: [`discovery`] walks sections and sets,
//! [`tunes`] resolves each set's tune list through an ordered source
//! chain, [`pairing`] pairs each part's PDF with its recording, and
//! [`assign`] maps parts onto tunes by longest-prefix match. The
//! resulting records carry stable composite ids derived purely from
//! folder and file names, so re-scanning an unchanged library reproduces
//! the same ids and [`merge`] has nothing to add.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`discovery`]: Library tree walking and record assembly
//! - [`pairing`]: PDF/WAV pairing inside Parts folders
//! - [`assign`]: Longest-prefix tune assignment
//! - [`tunes`]: Tune-source chain (structure map, inference, fallback)
//! - [`naming`]: Naming-convention helpers and constants
//! - [`merge`]: Additive reconciliation into the status document
//! - [`decay`]: On-launch score decay
//! - [`assets`]: PDF/WAV resolution for sessions
//! - [`model`]: Core data types and composite identifiers
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Library-root discovery and well-known paths
//! - [`error`]: Error types

pub mod api;
pub mod assets;
pub mod assign;
pub mod commands;
pub mod config;
pub mod decay;
pub mod discovery;
pub mod error;
pub mod merge;
pub mod model;
pub mod naming;
pub mod pairing;
pub mod store;
pub mod tunes;
