// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. document::DocumentError)
    clippy::module_name_repetitions
)]

//! # Linewise
//!
//! An interactive line-oriented text editor.
//!
//! Linewise keeps a document as an ordered list of lines and edits it
//! through a numbered menu:
//! - Insert, delete, copy and paste lines by 1-based position
//! - Move lines and reverse the document
//! - Pop lines onto an undo stack
//! - Save to and load from plain text files
//!
//! ## Architecture
//!
//! The driver uses The Elm Architecture (TEA) pattern:
//! - **Model**: Session state around a [`document::Document`]
//! - **Message**: One variant per menu command
//! - **Update**: Pure state transitions
//! - **View**: Plain-text notices and listings
//!
//! ## Modules
//!
//! - [`document`]: The line document, clipboard and undo stack
//! - [`storage`]: Newline-delimited file format
//! - [`app`]: Menu driver and event loop
//! - [`ui`]: Text rendering
//! - [`config`]: Saved command-line defaults
//! - [`perf`]: Timing and session debug log

pub mod app;
pub mod config;
pub mod document;
pub mod perf;
pub mod storage;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::{Document, DocumentError};
    pub use crate::storage::StorageError;
}
