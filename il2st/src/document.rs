//! Translates complete instruction list documents.
use dsl::core::FileId;
use dsl::diagnostic::Diagnostic;
use dsl::st::{StBlock, Warning};
use ladderst_parser::{segment_sources, SourceText};
use log::debug;

use crate::rung::translate_rung;

/// The translation of all rungs in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Translation {
    /// Identifiers of the sources, in the order they were read.
    pub sources: Vec<FileId>,
    pub blocks: Vec<StBlock>,
}

impl Translation {
    /// Returns each warning with the index of the rung that it belongs to.
    pub fn warnings(&self) -> impl Iterator<Item = (usize, &Warning)> {
        self.blocks
            .iter()
            .flat_map(|block| block.warnings.iter().map(move |w| (block.index, w)))
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.warnings()
            .map(|(index, warning)| warning.to_diagnostic(index))
            .collect()
    }
}

/// Translates the sources as one stream of rungs.
pub fn translate_sources(sources: &[SourceText]) -> Translation {
    let rungs = segment_sources(sources);
    debug!("Translating {} rungs from {} sources", rungs.len(), sources.len());

    let blocks = rungs
        .iter()
        .enumerate()
        .map(|(idx, rung)| translate_rung(rung, idx + 1))
        .collect();

    Translation {
        sources: sources.iter().map(|s| s.file_id.clone()).collect(),
        blocks,
    }
}

/// Translates the text of a single source.
pub fn translate_program(source: &str, file_id: &FileId) -> Translation {
    translate_sources(&[SourceText::new(source, file_id)])
}
