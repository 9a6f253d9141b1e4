//! Translates instruction list (IL) ladder logic into Structured Text (ST).
//!
//! Each rung is translated on its own: the logic instructions form a
//! boolean expression and the coil instruction decides the statement that
//! assigns it. Translation never fails; constructs without an ST
//! equivalent become comments in the output.

extern crate ladderst_dsl as dsl;

mod coil;
mod document;
mod expression;
pub mod json_export;
mod renderer;
mod rung;

#[cfg(test)]
mod tests;

pub use coil::{translate_coil, CoilOutcome};
pub use document::{translate_program, translate_sources, Translation};
pub use expression::{build_expression, step, ExpressionState};
pub use renderer::{render_block, render_st};
pub use rung::translate_rung;

use dsl::core::FileId;

/// Translates instruction list text into Structured Text.
pub fn translate_text(source: &str) -> String {
    render_st(&translate_program(source, &FileId::default()))
}
