/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Why a document operation was refused.
///
/// Every variant is reported before any mutation happens, so a failed
/// operation never leaves the document half-edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Position outside the addressable range for the operation.
    #[error("Invalid position.")]
    InvalidPosition,

    /// Position is past the last line.
    #[error("Line not found.")]
    LineNotFound,

    /// Move source is past the last line.
    #[error("Source position not found.")]
    SourceNotFound,

    /// Move target is past the append position once the source is removed.
    #[error("Target position not found.")]
    TargetNotFound,

    #[error("Nothing to paste.")]
    EmptyClipboard,

    #[error("Nothing to undo.")]
    EmptyDocument,
}
