//! Structured Text (ST) elements generated from instruction list rungs.
use core::fmt;

use ladderst_problems::Problem;
use serde::Serialize;

use crate::core::SourceSpan;
use crate::diagnostic::{Diagnostic, Label};
use crate::il::{Expression, Opcode};

/// A single ST statement that assigns a coil.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// `target := expression;`
    Assign { target: String, expression: Expression },
    /// `target := NOT (expression);`
    AssignNot { target: String, expression: Expression },
    /// `IF condition THEN target := TRUE; END_IF;`
    Set { target: String, condition: Expression },
    /// `IF condition THEN target := FALSE; END_IF;`
    Reset { target: String, condition: Expression },
}

impl Statement {
    pub fn target(&self) -> &str {
        match self {
            Statement::Assign { target, .. }
            | Statement::AssignNot { target, .. }
            | Statement::Set { target, .. }
            | Statement::Reset { target, .. } => target,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign { target, expression } => write!(f, "{} := {};", target, expression),
            Statement::AssignNot { target, expression } => {
                write!(f, "{} := NOT ({});", target, expression)
            }
            Statement::Set { target, condition } => {
                write!(f, "IF {} THEN {} := TRUE; END_IF;", condition, target)
            }
            Statement::Reset { target, condition } => {
                write!(f, "IF {} THEN {} := FALSE; END_IF;", condition, target)
            }
        }
    }
}

/// The translated content of a rung.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockBody {
    Statement(Statement),
    /// The rung's coil instruction has no ST equivalent.
    UnsupportedCoil { opcode: Opcode },
    /// The rung has no coil instruction.
    NoCoil,
}

/// The kinds of problems that translation resolves by emitting a comment
/// instead of a statement.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum WarningKind {
    NoCoilFound,
    UnsupportedCoilOpcode { opcode: String },
}

impl WarningKind {
    pub fn problem(&self) -> Problem {
        match self {
            WarningKind::NoCoilFound => Problem::NoCoilFound,
            WarningKind::UnsupportedCoilOpcode { .. } => Problem::UnsupportedCoilOpcode,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Warning {
    pub kind: WarningKind,
    pub span: SourceSpan,
    /// Other parts of the rung, such as lines that continue in another file.
    pub related: Vec<SourceSpan>,
}

impl Warning {
    pub fn new(kind: WarningKind, span: SourceSpan) -> Self {
        Self {
            kind,
            span,
            related: vec![],
        }
    }

    pub fn with_related(mut self, spans: impl IntoIterator<Item = SourceSpan>) -> Self {
        self.related.extend(spans);
        self
    }

    /// Converts the warning into a diagnostic for the rung with the index.
    pub fn to_diagnostic(&self, index: usize) -> Diagnostic {
        let label = Label::span(self.span.clone(), format!("Rung {}", index));
        let diagnostic = self.related.iter().fold(
            Diagnostic::problem(self.kind.problem(), label),
            |diagnostic, span| {
                diagnostic.with_secondary(Label::span(
                    span.clone(),
                    format!("Rung {} continues here", index),
                ))
            },
        );
        match &self.kind {
            WarningKind::NoCoilFound => diagnostic,
            WarningKind::UnsupportedCoilOpcode { opcode } => {
                diagnostic.with_context("opcode", opcode)
            }
        }
    }
}

/// The translation of one rung.
#[derive(Clone, Debug, PartialEq)]
pub struct StBlock {
    /// The 1-based position of the rung.
    pub index: usize,
    pub span: SourceSpan,
    pub body: BlockBody,
    pub warnings: Vec<Warning>,
}

impl StBlock {
    pub fn statement(&self) -> Option<&Statement> {
        match &self.body {
            BlockBody::Statement(statement) => Some(statement),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::core::FileId;

    use super::*;

    fn expr() -> Expression {
        Expression::base("X0", false).combine(crate::il::Combinator::And, "X1", false)
    }

    #[test]
    fn display_when_assign_then_assignment() {
        let stmt = Statement::Assign {
            target: "Y0".to_string(),
            expression: expr(),
        };
        assert_eq!(stmt.to_string(), "Y0 := X0 AND X1;");
    }

    #[test]
    fn display_when_assign_not_then_negated_group() {
        let stmt = Statement::AssignNot {
            target: "Y1".to_string(),
            expression: Expression::base("X1", false),
        };
        assert_eq!(stmt.to_string(), "Y1 := NOT (X1);");
    }

    #[test]
    fn display_when_set_and_reset_then_conditionals() {
        let set = Statement::Set {
            target: "M0".to_string(),
            condition: expr(),
        };
        let reset = Statement::Reset {
            target: "M0".to_string(),
            condition: expr(),
        };
        assert_eq!(set.to_string(), "IF X0 AND X1 THEN M0 := TRUE; END_IF;");
        assert_eq!(reset.to_string(), "IF X0 AND X1 THEN M0 := FALSE; END_IF;");
        assert_eq!(reset.target(), "M0");
    }

    #[test]
    fn to_diagnostic_when_unsupported_coil_then_has_opcode_context() {
        let warning = Warning::new(
            WarningKind::UnsupportedCoilOpcode {
                opcode: "MOV".to_string(),
            },
            SourceSpan::range(0, 4),
        );

        let diagnostic = warning.to_diagnostic(3);

        assert_eq!(diagnostic.code, Problem::UnsupportedCoilOpcode.code());
        assert_eq!(diagnostic.primary.message, "Rung 3");
        assert_eq!(diagnostic.described, vec!["opcode=MOV".to_string()]);
    }

    #[test]
    fn to_diagnostic_when_related_spans_then_secondary_labels() {
        let first = FileId::from_string("a.il");
        let second = FileId::from_string("b.il");
        let warning = Warning::new(
            WarningKind::NoCoilFound,
            SourceSpan::range(10, 22).with_file_id(&first),
        )
        .with_related([SourceSpan::range(0, 6).with_file_id(&second)]);

        let diagnostic = warning.to_diagnostic(2);

        assert_eq!(diagnostic.secondary.len(), 1);
        assert_eq!(diagnostic.secondary[0].message, "Rung 2 continues here");
        assert_eq!(diagnostic.file_ids(), vec![&first, &second]);
    }
}
