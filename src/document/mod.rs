//! In-memory line document.
//!
//! Provides an ordered, 1-indexed sequence of lines with positional edits,
//! a single-slot clipboard and a stack that collects lines popped from the
//! front of the document.

mod buffer;
mod error;

pub use buffer::Document;
pub use error::{DocumentError, DocumentResult};
