//! Maps coil instructions to Structured Text statements.
use dsl::il::{Expression, Opcode};
use dsl::st::Statement;

/// The result of translating a coil instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum CoilOutcome {
    Statement(Statement),
    Unsupported { opcode: Opcode },
}

/// Translates the coil instruction given the expression that drives it.
///
/// The operand is used verbatim as the assignment target.
pub fn translate_coil(opcode: &Opcode, operand: &str, expression: Expression) -> CoilOutcome {
    let target = operand.to_string();
    let statement = match opcode {
        Opcode::Out => Statement::Assign { target, expression },
        Opcode::OutNot => Statement::AssignNot { target, expression },
        Opcode::Set => Statement::Set {
            target,
            condition: expression,
        },
        Opcode::Rst => Statement::Reset {
            target,
            condition: expression,
        },
        _ => {
            return CoilOutcome::Unsupported {
                opcode: opcode.clone(),
            }
        }
    };
    CoilOutcome::Statement(statement)
}
