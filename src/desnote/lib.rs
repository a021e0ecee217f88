//! # Desnote Architecture
//!
//! Desnote is a **UI-agnostic note-organizing library**. The terminal client
//! shipped in this repository is just one consumer; nothing below the CLI
//! layer knows about stdout, stderr, or exit codes.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, resolves selectors, renders output     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Workspace, Selection, and storage backend       │
//! │  - Applies a command, then mirrors state to storage         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure state transitions over the Workspace                │
//! │  - Returns structured CmdResult, never prints               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait over string-keyed storage           │
//! │  - FileBackend (production), MemoryBackend (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State model
//!
//! All user data is two collections: folders (each owning its notes) and
//! root-level notes. A note lives in exactly one container at a time; moves
//! are remove-then-append, never copy. Deleting a folder cascades to its
//! notes. Every mutation is followed by a best-effort write of both
//! collections to storage; a failed write is logged, not fatal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: State transitions for each user action
//! - [`state`]: The Workspace container and lookups
//! - [`selection`]: Bulk-mode selection set and its legality rules
//! - [`store`]: Storage abstraction, file/memory backends, seed data
//! - [`backup`]: Versioned JSON export/import envelope
//! - [`model`]: Core data types (`Note`, `Folder`, `Location`)
//! - [`peek`]: Inline content preview formatting
//! - [`error`]: Error types

pub mod api;
pub mod backup;
pub mod commands;
pub mod error;
pub mod model;
pub mod peek;
pub mod selection;
pub mod state;
pub mod store;
