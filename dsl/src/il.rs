//! Instruction list (IL) language elements.
//!
//! Instruction list text is a sequence of rungs. Each rung is a sequence of
//! lines and each line holds one instruction: an opcode optionally followed
//! by an operand.
use core::fmt;

use serde::Serialize;

use crate::core::{Located, SourceSpan};

/// A trimmed, non-empty line of instruction list text.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub text: String,
    pub span: SourceSpan,
}

impl Line {
    pub fn new(text: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

impl Located for Line {
    fn span(&self) -> SourceSpan {
        self.span.clone()
    }
}

/// An ordered sequence of instruction lines between rung boundaries.
///
/// A rung always has at least one line.
#[derive(Clone, Debug, PartialEq)]
pub struct Rung {
    pub lines: Vec<Line>,
}

impl Rung {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// Spans of the rung, one for each run of consecutive lines in the same
    /// file. A rung that continues from one file into the next has more
    /// than one span.
    pub fn file_spans(&self) -> Vec<SourceSpan> {
        let mut spans: Vec<SourceSpan> = vec![];
        for line in &self.lines {
            match spans.last_mut() {
                Some(last) if last.file_id == line.span.file_id => {
                    *last = SourceSpan::join(last, &line.span);
                }
                _ => spans.push(line.span.clone()),
            }
        }
        spans
    }
}

impl Located for Rung {
    fn span(&self) -> SourceSpan {
        self.file_spans().into_iter().next().unwrap_or_default()
    }
}

/// The recognized instruction list opcodes.
///
/// Opcodes outside of the recognized set are retained as `Unknown` with
/// the (upper case) token so that they can be reported.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Opcode {
    /// Load
    Ld,
    /// Load pulse (rising edge)
    Ldp,
    /// Load inverse
    Ldn,
    And,
    Andp,
    Andn,
    Or,
    Orp,
    Orn,
    /// Output coil
    Out,
    /// Inverted output coil
    OutNot,
    /// Set (latch) coil
    Set,
    /// Reset (unlatch) coil
    Rst,
    Unknown(String),
}

impl Opcode {
    pub fn as_str(&self) -> &str {
        match self {
            Opcode::Ld => "LD",
            Opcode::Ldp => "LDP",
            Opcode::Ldn => "LDN",
            Opcode::And => "AND",
            Opcode::Andp => "ANDP",
            Opcode::Andn => "ANDN",
            Opcode::Or => "OR",
            Opcode::Orp => "ORP",
            Opcode::Orn => "ORN",
            Opcode::Out => "OUT",
            Opcode::OutNot => "OUTNOT",
            Opcode::Set => "SET",
            Opcode::Rst => "RST",
            Opcode::Unknown(token) => token.as_str(),
        }
    }

    /// Returns true if the opcode produces a coil assignment.
    pub fn is_coil(&self) -> bool {
        matches!(self, Opcode::Out | Opcode::OutNot | Opcode::Set | Opcode::Rst)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Opcode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single instruction decomposed into opcode and operand.
#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    pub opcode: Opcode,
    /// The remaining text after the opcode, trimmed. Empty when the
    /// instruction has no operand.
    pub operand: String,
    pub span: SourceSpan,
}

impl Located for Instruction {
    fn span(&self) -> SourceSpan {
        self.span.clone()
    }
}

/// How a fragment combines with the fragments before it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Combinator {
    And,
    Or,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => f.write_str("AND"),
            Combinator::Or => f.write_str("OR"),
        }
    }
}

/// One term of a boolean expression.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Fragment {
    /// None for the base condition.
    pub combinator: Option<Combinator>,
    pub negated: bool,
    pub operand: String,
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(combinator) = self.combinator {
            write!(f, "{} ", combinator)?;
        }
        if self.negated {
            f.write_str("NOT ")?;
        }
        f.write_str(&self.operand)
    }
}

/// A boolean expression read left to right without precedence or
/// grouping. Each fragment after the first is expected to carry a
/// combinator.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Expression {
    pub fragments: Vec<Fragment>,
}

impl Expression {
    /// Creates an expression containing only the base condition.
    pub fn base(operand: impl Into<String>, negated: bool) -> Self {
        Self {
            fragments: vec![Fragment {
                combinator: None,
                negated,
                operand: operand.into(),
            }],
        }
    }

    /// Returns a new expression with the fragment appended.
    pub fn combine(mut self, combinator: Combinator, operand: impl Into<String>, negated: bool) -> Self {
        self.fragments.push(Fragment {
            combinator: Some(combinator),
            negated,
            operand: operand.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// True if the expression lacks a base condition but has combined terms.
    pub fn is_missing_base(&self) -> bool {
        self.fragments
            .first()
            .is_some_and(|fragment| fragment.combinator.is_some())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.fragments.iter().peekable();
        while let Some(fragment) = it.next() {
            write!(f, "{}", fragment)?;
            if it.peek().is_some() {
                f.write_str(" ")?;
            }
        }
        Ok(())
    }
}

/// The coil instruction of a rung.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoilAssignment {
    pub opcode: Opcode,
    pub operand: String,
    #[serde(skip)]
    pub span: SourceSpan,
}
