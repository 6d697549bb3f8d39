use std::path::PathBuf;

/// Errors raised by document persistence and gated actions.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("reading {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("writing {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// `save()` was called on a document that was never loaded or saved.
    #[error("no file is associated with this profile")]
    NoPathBound,
    /// The user chose Cancel (or a save step failed) in the discard confirmation.
    #[error("cancelled")]
    Cancelled,
}

/// Outcome of the heuristic structure check. Not a JSON parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Document is empty")]
    Empty,
    #[error("Invalid structure: expected \"_meta\" and \"_input\" sections or a legacy profile")]
    InvalidStructure,
    #[error("Missing required field: \"modifications\"")]
    MissingModifications,
    #[error("Unbalanced braces {{ }}")]
    UnbalancedBraces,
    #[error("Unbalanced brackets [ ]")]
    UnbalancedBrackets,
}

impl ValidationError {
    /// Empty documents render as a neutral warning rather than an error dialog.
    pub fn is_warning(self) -> bool {
        matches!(self, Self::Empty)
    }
}
