//! Groups lines of instruction list text into rungs.
//!
//! The segmenter is a two state machine. It is idle until it sees an
//! instruction line and then accumulates instruction lines until a blank
//! line, a boundary marker or the end of the input closes the rung.
//! Consecutive blanks and boundaries collapse into a single break.
use std::mem;

use dsl::core::{FileId, SourceSpan};
use dsl::il::{Line, Rung};
use log::trace;

use crate::classifier::{classify, LineKind};

/// Instruction list text and the identifier of where it came from.
#[derive(Clone, Debug)]
pub struct SourceText<'a> {
    pub file_id: FileId,
    pub text: &'a str,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str, file_id: &FileId) -> Self {
        Self {
            file_id: file_id.clone(),
            text,
        }
    }
}

enum State {
    Idle,
    Accumulating(Vec<Line>),
}

pub struct Segmenter {
    state: State,
    rungs: Vec<Rung>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            rungs: vec![],
        }
    }

    /// Consumes one raw line that starts at byte `offset` of the source.
    pub fn push(&mut self, raw: &str, offset: usize, file_id: &FileId) {
        match classify(raw) {
            LineKind::Content(text) => {
                let start = offset + (raw.len() - raw.trim_start().len());
                let span = SourceSpan::range(start, start + text.len()).with_file_id(file_id);
                let line = Line::new(text, span);
                self.state = match mem::replace(&mut self.state, State::Idle) {
                    State::Idle => State::Accumulating(vec![line]),
                    State::Accumulating(mut lines) => {
                        lines.push(line);
                        State::Accumulating(lines)
                    }
                };
            }
            LineKind::Blank | LineKind::Boundary => self.close(),
        }
    }

    /// Closes the rung being accumulated, if any.
    pub fn close(&mut self) {
        if let State::Accumulating(lines) = mem::replace(&mut self.state, State::Idle) {
            trace!("Rung {} has {} lines", self.rungs.len() + 1, lines.len());
            self.rungs.push(Rung { lines });
        }
    }

    /// Finishes the input and returns the rungs in order.
    pub fn finish(mut self) -> Vec<Rung> {
        self.close();
        self.rungs
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true if the character ends a line. These are the line
/// boundaries of Unicode text, including the form feed that text exported
/// from documents places at page breaks.
fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Iterates over the lines of the text, yielding the starting byte offset
/// of each line and the line without its terminator.
///
/// `\r\n` is a single terminator. A terminator at the very end of the
/// text does not start another line.
pub(crate) fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut pos = 0;
    std::iter::from_fn(move || {
        if pos >= text.len() {
            return None;
        }
        let start = pos;
        let rest = &text[start..];
        match rest.char_indices().find(|(_, c)| is_line_terminator(*c)) {
            Some((idx, c)) => {
                let terminator = if rest[idx..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                pos = start + idx + terminator;
                Some((start, &rest[..idx]))
            }
            None => {
                pos = text.len();
                Some((start, rest))
            }
        }
    })
}

/// Returns true if joining the text to more text with a newline produces
/// a blank line between them. A trailing `\r` pairs with the newline into
/// a single `\r\n` terminator.
fn joins_with_blank(text: &str) -> bool {
    match text.chars().last() {
        None => true,
        Some('\r') => false,
        Some(c) => is_line_terminator(c),
    }
}

/// Splits the text into rungs.
pub fn segment(source: &str, file_id: &FileId) -> Vec<Rung> {
    segment_sources(&[SourceText::new(source, file_id)])
}

/// Splits the sources into rungs as though the sources were joined
/// together with a newline between each. Rungs can therefore continue
/// from one source into the next.
pub fn segment_sources(sources: &[SourceText]) -> Vec<Rung> {
    let mut segmenter = Segmenter::new();
    for (idx, source) in sources.iter().enumerate() {
        for (offset, raw) in lines(source.text) {
            segmenter.push(raw, offset, &source.file_id);
        }

        let is_last = idx + 1 == sources.len();
        if !is_last && joins_with_blank(source.text) {
            segmenter.close();
        }
    }
    segmenter.finish()
}
