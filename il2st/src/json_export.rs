//! JSON export of translations.
//!
//! The export carries the same information as the Structured Text output
//! but in a form that other tools can consume, including the warnings and
//! optionally where each rung came from.

use std::io::Write;

use dsl::core::SourceSpan;
use dsl::il::Expression;
use dsl::st::{BlockBody, StBlock, Warning, WarningKind};
use serde::Serialize;
use thiserror::Error;

use crate::document::Translation;

const SCHEMA_VERSION: &str = "1.0.0";

/// Errors that can occur during JSON export operations.
///
/// Failures of the writer given to [`JsonExporter::export_to_writer`] are
/// reported by `serde_json` as I/O category errors.
#[derive(Debug, Error)]
pub enum JsonExportError {
    #[error("Serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Configuration options for JSON export.
#[derive(Debug, Clone)]
pub struct JsonExportOptions {
    /// Include source location information
    pub include_locations: bool,
    /// Pretty-print the JSON output
    pub pretty_print: bool,
}

impl Default for JsonExportOptions {
    fn default() -> Self {
        Self {
            include_locations: true,
            pretty_print: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct JsonExporter {
    options: JsonExportOptions,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: JsonExportOptions) -> Self {
        Self { options }
    }

    /// Export the translation to a JSON string.
    pub fn export_translation(&self, translation: &Translation) -> Result<String, JsonExportError> {
        let wrapper = JsonWrapper::new(translation, &self.options);
        if self.options.pretty_print {
            serde_json::to_string_pretty(&wrapper).map_err(JsonExportError::from)
        } else {
            serde_json::to_string(&wrapper).map_err(JsonExportError::from)
        }
    }

    /// Export the translation to a writer.
    pub fn export_to_writer<W: Write>(
        &self,
        translation: &Translation,
        writer: W,
    ) -> Result<(), JsonExportError> {
        let wrapper = JsonWrapper::new(translation, &self.options);
        if self.options.pretty_print {
            serde_json::to_writer_pretty(writer, &wrapper).map_err(JsonExportError::from)
        } else {
            serde_json::to_writer(writer, &wrapper).map_err(JsonExportError::from)
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonWrapper<'a> {
    schema_version: &'static str,
    source_files: Vec<String>,
    blocks: Vec<JsonBlock<'a>>,
}

impl<'a> JsonWrapper<'a> {
    fn new(translation: &'a Translation, options: &JsonExportOptions) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            source_files: translation
                .sources
                .iter()
                .map(|file_id| file_id.to_string())
                .collect(),
            blocks: translation
                .blocks
                .iter()
                .map(|block| JsonBlock::new(block, options))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum JsonBlockKind {
    Statement,
    UnsupportedCoil,
    NoCoil,
}

#[derive(Debug, Serialize)]
struct JsonBlock<'a> {
    index: usize,
    kind: JsonBlockKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expression: Option<&'a Expression>,
    /// The generated statement as Structured Text.
    statement: Option<String>,
    warnings: Vec<JsonWarning<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<JsonLocation<'a>>,
}

impl<'a> JsonBlock<'a> {
    fn new(block: &'a StBlock, options: &JsonExportOptions) -> Self {
        let (kind, statement) = match &block.body {
            BlockBody::Statement(statement) => (JsonBlockKind::Statement, Some(statement)),
            BlockBody::UnsupportedCoil { .. } => (JsonBlockKind::UnsupportedCoil, None),
            BlockBody::NoCoil => (JsonBlockKind::NoCoil, None),
        };
        let expression = statement.map(|statement| match statement {
            dsl::st::Statement::Assign { expression, .. }
            | dsl::st::Statement::AssignNot { expression, .. } => expression,
            dsl::st::Statement::Set { condition, .. }
            | dsl::st::Statement::Reset { condition, .. } => condition,
        });

        Self {
            index: block.index,
            kind,
            target: statement.map(|statement| statement.target()),
            expression,
            statement: statement.map(|statement| statement.to_string()),
            warnings: block.warnings.iter().map(JsonWarning::new).collect(),
            location: options
                .include_locations
                .then(|| JsonLocation::new(&block.span)),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonWarning<'a> {
    code: &'static str,
    message: &'static str,
    kind: &'a WarningKind,
}

impl<'a> JsonWarning<'a> {
    fn new(warning: &'a Warning) -> Self {
        let problem = warning.kind.problem();
        Self {
            code: problem.code(),
            message: problem.message(),
            kind: &warning.kind,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonLocation<'a> {
    file: String,
    #[serde(flatten)]
    span: &'a SourceSpan,
}

impl<'a> JsonLocation<'a> {
    fn new(span: &'a SourceSpan) -> Self {
        Self {
            file: span.file_id.to_string(),
            span,
        }
    }
}

#[cfg(test)]
mod test {
    use dsl::core::FileId;
    use serde_json::Value;

    use super::*;
    use crate::document::translate_program;

    fn export(source: &str, options: JsonExportOptions) -> Value {
        let translation = translate_program(source, &FileId::from_string("main.il"));
        let json = JsonExporter::with_options(options)
            .export_translation(&translation)
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn export_translation_when_statement_then_has_statement_and_target() {
        let value = export("LD X0\nAND X1\nOUT Y0", JsonExportOptions::default());

        assert_eq!(value["schema_version"], "1.0.0");
        assert_eq!(value["source_files"][0], "main.il");
        let block = &value["blocks"][0];
        assert_eq!(block["index"], 1);
        assert_eq!(block["kind"], "statement");
        assert_eq!(block["target"], "Y0");
        assert_eq!(block["statement"], "Y0 := X0 AND X1;");
        assert_eq!(block["expression"]["fragments"][1]["combinator"], "And");
        assert_eq!(block["location"]["file"], "main.il");
        assert_eq!(block["location"]["start"], 0);
    }

    #[test]
    fn export_translation_when_no_coil_then_warning_code() {
        let value = export("LD X0", JsonExportOptions::default());

        let block = &value["blocks"][0];
        assert_eq!(block["kind"], "no_coil");
        assert!(block["statement"].is_null());
        assert_eq!(block["warnings"][0]["code"], "P0004");
        assert_eq!(block["warnings"][0]["kind"], "NoCoilFound");
    }

    #[test]
    fn export_translation_when_locations_excluded_then_no_location() {
        let options = JsonExportOptions {
            include_locations: false,
            pretty_print: true,
        };
        let value = export("LD X0\nOUT Y0", options);

        assert!(value["blocks"][0].get("location").is_none());
    }

    #[test]
    fn export_to_writer_then_writes_json() {
        let translation = translate_program("LD X0\nOUT Y0", &FileId::default());
        let mut out = Vec::new();

        JsonExporter::new()
            .export_to_writer(&translation, &mut out)
            .unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["blocks"].as_array().map(Vec::len), Some(1));
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn export_to_writer_when_writer_fails_then_io_category_error() {
        let translation = translate_program("LD X0\nOUT Y0", &FileId::default());

        let result = JsonExporter::new().export_to_writer(&translation, BrokenWriter);

        let Err(JsonExportError::SerializationError(err)) = result else {
            panic!("expected the writer failure to be reported");
        };
        assert!(err.is_io());
    }
}
