//! Parser for instruction list (IL) text. The parser splits text into
//! rungs and rungs into instructions.
//!
//! Parsing never fails. Lines that are not recognized instructions are
//! retained with an unknown opcode so that later stages decide what to do
//! with them.

extern crate ladderst_dsl as dsl;

mod classifier;
mod instruction;
mod segmenter;


pub use classifier::{classify, LineKind};
pub use instruction::{opcode, parse_instruction, split_instruction};
pub use segmenter::{segment, segment_sources, Segmenter, SourceText};

use dsl::core::FileId;
use dsl::il::{Instruction, Rung};

/// Splits the text into rungs.
pub fn parse_program(source: &str, file_id: &FileId) -> Vec<Rung> {
    segment(source, file_id)
}

/// Parses every line of the rung into an instruction, in order.
pub fn parse_rung(rung: &Rung) -> Vec<Instruction> {
    rung.lines.iter().map(parse_instruction).collect()
}
