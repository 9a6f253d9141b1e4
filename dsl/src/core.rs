//! Common items for tracking where text came from.
use core::fmt;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::{Serialize, Serializer};

static EMPTY_FILE_ID: LazyLock<Arc<str>> = LazyLock::new(|| Arc::from(""));

/// FileId identifies the origin of instruction list text.
///
/// The identifier is normally the path of the file that the text was
/// read from. Text that did not come from a file (for example text
/// passed directly to the translator) uses the default (empty) identifier.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FileId(Arc<str>);

impl FileId {
    /// Creates an empty file identifier.
    pub fn new() -> Self {
        FileId::default()
    }

    /// Creates a file identifier from the path.
    pub fn from_path(path: &Path) -> Self {
        FileId(Arc::from(path.to_string_lossy().as_ref()))
    }

    /// Creates a file identifier from the slice. The slice
    /// is normally the file path.
    pub fn from_string(path: &str) -> Self {
        FileId(Arc::from(path))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FileId {
    fn default() -> Self {
        FileId(EMPTY_FILE_ID.clone())
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for FileId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Location of text in a source.
///
/// The location is defined by byte indices in the source text.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SourceSpan {
    /// The byte offset of the first character (0-indexed).
    pub start: usize,
    /// The byte offset one past the last character (0-indexed).
    pub end: usize,
    #[serde(skip)]
    pub file_id: FileId,
}

impl SourceSpan {
    pub fn range(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            file_id: FileId::default(),
        }
    }

    pub fn with_file_id(&self, file_id: &FileId) -> Self {
        Self {
            start: self.start,
            end: self.end,
            file_id: file_id.clone(),
        }
    }

    /// Creates a span that covers from the start of `start` to the end
    /// of `end`. The spans must be in the same file.
    pub fn join(start: &SourceSpan, end: &SourceSpan) -> Self {
        Self {
            start: start.start,
            end: end.end,
            file_id: start.file_id.clone(),
        }
    }
}

/// Items that have a location in a source.
pub trait Located {
    fn span(&self) -> SourceSpan;
}
