//! Provides definition for diagnostics, which are problems found while
//! reading or translating instruction list text.
//!
//! The translator itself never fails. Diagnostics describe what the
//! translator could not express so that a person can review the output.

use ladderst_problems::Problem;

use crate::core::{FileId, SourceSpan};

/// A label that refers to some range in a file and possibly associated
/// with a message related to that range.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// The position of the label.
    pub span: SourceSpan,

    /// A message describing this label.
    pub message: String,
}

impl Label {
    pub fn span(span: SourceSpan, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// A "position" that is a file in its entirety rather than a
    /// particular location.
    pub fn file(file_id: FileId, message: impl Into<String>) -> Self {
        Self {
            span: SourceSpan::range(0, 0).with_file_id(&file_id),
            message: message.into(),
        }
    }
}

/// A diagnostic. Diagnostics have a code that is indicative of the category,
/// a primary location and possibly a non-empty set of secondary locations.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// A normally unique value describing the type of diagnostic.
    pub code: String,

    description: String,

    /// The primary or first location.
    pub primary: Label,

    /// Additional descriptions to the constant description.
    pub described: Vec<String>,

    /// Additional locations related to the diagnostic.
    pub secondary: Vec<Label>,
}

impl Diagnostic {
    /// Creates a diagnostic from the problem code and with the specified label.
    pub fn problem(problem: Problem, primary: Label) -> Self {
        Self {
            code: problem.code().to_string(),
            description: problem.message().to_string(),
            primary,
            described: vec![],
            secondary: vec![],
        }
    }

    /// Adds to the problem description additional context about the problem.
    pub fn with_context(mut self, description: &str, item: &str) -> Self {
        self.described.push(format!("{}={}", description, item));
        self
    }

    /// Adds a label that points to another location related to the problem.
    pub fn with_secondary(mut self, label: Label) -> Self {
        self.secondary.push(label);
        self
    }

    /// Returns the description for the diagnostic including any context.
    pub fn description(&self) -> String {
        if self.described.is_empty() {
            self.description.clone()
        } else {
            format!("{} ({})", self.description, self.described.join(", "))
        }
    }

    /// Returns the identifiers of the files referenced by the diagnostic.
    pub fn file_ids(&self) -> Vec<&FileId> {
        let mut ids = vec![&self.primary.span.file_id];
        for label in &self.secondary {
            if !ids.contains(&&label.span.file_id) {
                ids.push(&label.span.file_id);
            }
        }
        ids
    }
}
