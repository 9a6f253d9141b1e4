//! Translates a single rung into a Structured Text block.
use dsl::il::Rung;
use dsl::st::{BlockBody, StBlock, Warning, WarningKind};
use ladderst_parser::parse_rung;
use log::debug;

use crate::coil::{translate_coil, CoilOutcome};
use crate::expression::build_expression;

/// Translates the rung at the 1-based `index`.
///
/// Translation always succeeds. A rung without a coil instruction or with
/// a coil that cannot be expressed produces a block with a warning.
pub fn translate_rung(rung: &Rung, index: usize) -> StBlock {
    let instructions = parse_rung(rung);
    let state = build_expression(&instructions);
    let mut spans = rung.file_spans().into_iter();
    let span = spans.next().unwrap_or_default();

    let Some(coil) = state.coil else {
        debug!("Rung {} has no coil", index);
        return StBlock {
            index,
            span: span.clone(),
            body: BlockBody::NoCoil,
            warnings: vec![Warning::new(WarningKind::NoCoilFound, span).with_related(spans)],
        };
    };

    match translate_coil(&coil.opcode, &coil.operand, state.expression) {
        CoilOutcome::Statement(statement) => StBlock {
            index,
            span,
            body: BlockBody::Statement(statement),
            warnings: vec![],
        },
        CoilOutcome::Unsupported { opcode } => StBlock {
            index,
            span,
            warnings: vec![Warning::new(
                WarningKind::UnsupportedCoilOpcode {
                    opcode: opcode.to_string(),
                },
                coil.span,
            )],
            body: BlockBody::UnsupportedCoil { opcode },
        },
    }
}
