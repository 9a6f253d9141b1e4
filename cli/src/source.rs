//! Reads instruction list text from files.
//!
//! Instruction list text normally comes from a tool that exports a PLC
//! project as text. Those exports are either UTF-8 or a Windows code page,
//! so both are accepted.
use std::{
    fs::{metadata, read_dir},
    path::{Path, PathBuf},
};

use dsl::{
    core::FileId,
    diagnostic::{Diagnostic, Label},
};
use ladderst_parser::SourceText;
use ladderst_problems::Problem;
use log::{debug, trace};

/// The text of a file.
#[derive(Debug)]
pub struct SourceFile {
    pub file_id: FileId,
    pub text: String,
}

impl SourceFile {
    pub fn new(text: impl Into<String>, file_id: &FileId) -> Self {
        Self {
            file_id: file_id.clone(),
            text: text.into(),
        }
    }

    /// Reads the file at the path.
    pub fn try_from_path(path: &Path) -> Result<Self, Diagnostic> {
        let text = read_file_content(path)?;
        Ok(Self::new(text, &FileId::from_path(path)))
    }

    pub fn as_source_text(&self) -> SourceText<'_> {
        SourceText::new(&self.text, &self.file_id)
    }
}

/// Expands the path into files. A directory expands into the files that it
/// directly contains, in name order.
pub fn enumerate_files(path: &Path) -> Result<Vec<PathBuf>, Diagnostic> {
    let metadata =
        metadata(path).map_err(|e| diagnostic(Problem::CannotReadFile, path, e.to_string()))?;

    if metadata.is_dir() {
        let entries =
            read_dir(path).map_err(|e| diagnostic(Problem::CannotReadFile, path, e.to_string()))?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        return Ok(paths);
    }

    Ok(vec![path.to_path_buf()])
}

/// Read file content with encoding detection.
fn read_file_content(path: &Path) -> Result<String, Diagnostic> {
    debug!("Reading file {}", path.display());

    let bytes = std::fs::read(path)
        .map_err(|e| diagnostic(Problem::CannotReadFile, path, e.to_string()))?;

    let decoders: [&'static encoding_rs::Encoding; 2] =
        [encoding_rs::UTF_8, encoding_rs::WINDOWS_1252];

    let result = decoders.into_iter().find_map(|d| {
        let (res, encoding_used, had_errors) = d.decode(&bytes);
        if had_errors {
            trace!(
                "Path {} did not match encoding {}",
                path.display(),
                encoding_used.name()
            );
            return None;
        }
        trace!(
            "Path {} matched encoding {}",
            path.display(),
            encoding_used.name()
        );
        Some(res.to_string())
    });

    result.ok_or_else(|| {
        diagnostic(
            Problem::UnsupportedEncoding,
            path,
            String::from("The file is not UTF-8 or Windows-1252"),
        )
    })
}

fn diagnostic(problem: Problem, path: &Path, message: String) -> Diagnostic {
    Diagnostic::problem(problem, Label::file(FileId::from_path(path), message))
}
