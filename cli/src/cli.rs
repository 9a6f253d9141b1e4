//! Implements the command line behavior.

use codespan_reporting::{
    diagnostic::{Diagnostic, Label, LabelStyle, Severity},
    files::SimpleFiles,
    term::{
        self,
        termcolor::{ColorChoice, StandardStream},
    },
};
use dsl::core::FileId;
use ladderst_il2st::{
    json_export::{JsonExportOptions, JsonExporter},
    render_st, translate_sources, Translation,
};
use ladderst_parser::SourceText;
use ladderst_problems::Problem;
use log::debug;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::source::{enumerate_files, SourceFile};

/// The format of the translated output.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Structured Text
    #[default]
    St,
    /// JSON description of each translated rung
    Json,
}

/// Translates the files and writes the result to the output path.
pub fn convert(
    paths: Vec<PathBuf>,
    output: &Path,
    format: OutputFormat,
    suppress_output: bool,
) -> Result<(), String> {
    let text = translate_paths(paths, format, suppress_output)?;

    fs::write(output, text).map_err(|e| {
        let diagnostic = dsl::diagnostic::Diagnostic::problem(
            Problem::CannotWriteFile,
            dsl::diagnostic::Label::file(FileId::from_path(output), e.to_string()),
        );
        handle_diagnostics(&[diagnostic], Severity::Error, &[], suppress_output);
        format!("Unable to write {}", output.display())
    })?;

    println!("Wrote {}", output.display());
    Ok(())
}

/// Translates the files and writes the result to standard output.
pub fn echo(paths: Vec<PathBuf>, format: OutputFormat, suppress_output: bool) -> Result<(), String> {
    let text = translate_paths(paths, format, suppress_output)?;
    print!("{}", text);
    Ok(())
}

fn translate_paths(
    paths: Vec<PathBuf>,
    format: OutputFormat,
    suppress_output: bool,
) -> Result<String, String> {
    let sources = read_sources(paths).map_err(|diagnostic| {
        handle_diagnostics(&[diagnostic], Severity::Error, &[], suppress_output);
        String::from("Error reading sources")
    })?;

    let source_texts: Vec<SourceText> = sources.iter().map(SourceFile::as_source_text).collect();
    let translation = translate_sources(&source_texts);
    debug!("Translated {} rungs", translation.blocks.len());

    handle_diagnostics(
        &translation.diagnostics(),
        Severity::Warning,
        &sources,
        suppress_output,
    );

    format_translation(&translation, format)
}

fn read_sources(paths: Vec<PathBuf>) -> Result<Vec<SourceFile>, dsl::diagnostic::Diagnostic> {
    let mut files: Vec<PathBuf> = vec![];
    for path in paths {
        files.append(&mut enumerate_files(&path)?);
    }

    if files.is_empty() {
        return Err(dsl::diagnostic::Diagnostic::problem(
            Problem::NoInputFiles,
            dsl::diagnostic::Label::file(FileId::default(), "No files found in the paths"),
        ));
    }

    files
        .iter()
        .map(|path| SourceFile::try_from_path(path))
        .collect()
}

fn format_translation(translation: &Translation, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::St => Ok(render_st(translation)),
        OutputFormat::Json => JsonExporter::with_options(JsonExportOptions {
            include_locations: true,
            pretty_print: true,
        })
        .export_translation(translation)
        .map_err(|e| e.to_string()),
    }
}

fn handle_diagnostics(
    diagnostics: &[dsl::diagnostic::Diagnostic],
    severity: Severity,
    sources: &[SourceFile],
    suppress_output: bool,
) {
    if suppress_output || diagnostics.is_empty() {
        return;
    }

    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = codespan_reporting::term::Config::default();

    let mut files: SimpleFiles<String, &str> = SimpleFiles::new();
    let mut file_ids: HashMap<&FileId, usize> = HashMap::new();
    for source in sources {
        let id = files.add(source.file_id.to_string(), source.text.as_str());
        file_ids.insert(&source.file_id, id);
    }

    for diagnostic in diagnostics {
        // Diagnostics about whole files have no text to point into.
        for file_id in diagnostic.file_ids() {
            if !file_ids.contains_key(file_id) {
                let id = files.add(file_id.to_string(), "");
                file_ids.insert(file_id, id);
            }
        }

        let diagnostic = map_diagnostic(diagnostic, severity, &file_ids);
        let _ = term::emit(&mut writer.lock(), &config, &files, &diagnostic).map_err(|err| {
            println!("Failed writing to terminal: {}", err);
        });
    }
}

fn map_label(
    label: &dsl::diagnostic::Label,
    style: LabelStyle,
    file_ids: &HashMap<&FileId, usize>,
) -> Label<usize> {
    let file_id = file_ids.get(&label.span.file_id).copied().unwrap_or(0);
    Label::new(style, file_id, label.span.start..label.span.end).with_message(&label.message)
}

fn map_diagnostic(
    diagnostic: &dsl::diagnostic::Diagnostic,
    severity: Severity,
    file_ids: &HashMap<&FileId, usize>,
) -> Diagnostic<usize> {
    let mut labels = vec![map_label(&diagnostic.primary, LabelStyle::Primary, file_ids)];

    labels.extend(
        diagnostic
            .secondary
            .iter()
            .map(|lbl| map_label(lbl, LabelStyle::Secondary, file_ids)),
    );

    Diagnostic::new(severity)
        .with_code(&diagnostic.code)
        .with_message(diagnostic.description())
        .with_labels(labels)
}
