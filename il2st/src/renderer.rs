//! Output writer for translated rungs. The writer transforms a translation
//! into Structured Text.
//!
//! Each rung becomes a block that starts with a comment naming the rung.
//! Anything that could not be translated is written as a comment so that
//! the output always remains valid Structured Text.

use dsl::st::{BlockBody, StBlock};

use crate::document::Translation;

/// Renders the translation. Blocks are separated by a blank line and the
/// output ends with a newline unless there are no blocks.
pub fn render_st(translation: &Translation) -> String {
    let mut renderer = StRenderer::new();
    for (idx, block) in translation.blocks.iter().enumerate() {
        if idx > 0 {
            renderer.newline();
        }
        renderer.block(block);
        renderer.newline();
    }
    renderer.buffer
}

/// Renders a single block without a trailing newline.
pub fn render_block(block: &StBlock) -> String {
    let mut renderer = StRenderer::new();
    renderer.block(block);
    renderer.buffer
}

struct StRenderer {
    buffer: String,
}

impl StRenderer {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn write(&mut self, val: &str) {
        self.buffer.push_str(val);
    }

    fn newline(&mut self) {
        self.buffer.push('\n');
    }

    fn comment(&mut self, val: &str) {
        self.write("(* ");
        self.write(val);
        self.write(" *)");
    }

    fn block(&mut self, block: &StBlock) {
        match &block.body {
            BlockBody::NoCoil => {
                self.comment(&format!("Rung {}: no coil found", block.index));
            }
            BlockBody::Statement(statement) => {
                self.comment(&format!("Rung {}", block.index));
                self.newline();
                self.write(&statement.to_string());
            }
            BlockBody::UnsupportedCoil { opcode } => {
                self.comment(&format!("Rung {}", block.index));
                self.newline();
                self.comment(&format!("Unsupported coil opcode {}", opcode));
            }
        }
    }
}
