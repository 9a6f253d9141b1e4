//! Builds the boolean expression of a rung from its logic instructions.
//!
//! The expression is read strictly left to right. A load instruction
//! starts a new base condition (discarding anything before it) and each
//! AND/OR instruction appends a term. Pulse variants (LDP, ANDP, ORP) are
//! treated as their plain counterparts; edge detection is not modeled.
//!
//! The same pass records the coil instruction of the rung. When a rung has
//! more than one coil instruction, the last one wins.
use dsl::il::{CoilAssignment, Combinator, Expression, Instruction, Opcode};
use log::debug;

/// The accumulated result of folding over the instructions of a rung.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpressionState {
    pub expression: Expression,
    pub coil: Option<CoilAssignment>,
}

fn combine(
    state: ExpressionState,
    combinator: Combinator,
    operand: &str,
    negated: bool,
) -> ExpressionState {
    let expression = state.expression.combine(combinator, operand, negated);
    if expression.is_missing_base() {
        debug!("{} {} has no base condition", combinator, operand);
    }
    ExpressionState {
        expression,
        coil: state.coil,
    }
}

fn load(state: ExpressionState, operand: &str, negated: bool) -> ExpressionState {
    ExpressionState {
        expression: Expression::base(operand, negated),
        coil: state.coil,
    }
}

/// Applies one instruction to the state, returning the next state.
pub fn step(state: ExpressionState, instruction: &Instruction) -> ExpressionState {
    let operand = instruction.operand.as_str();
    match &instruction.opcode {
        Opcode::Ld | Opcode::Ldp => load(state, operand, false),
        Opcode::Ldn => load(state, operand, true),
        Opcode::And | Opcode::Andp => combine(state, Combinator::And, operand, false),
        Opcode::Andn => combine(state, Combinator::And, operand, true),
        Opcode::Or | Opcode::Orp => combine(state, Combinator::Or, operand, false),
        Opcode::Orn => combine(state, Combinator::Or, operand, true),
        Opcode::Out | Opcode::OutNot | Opcode::Set | Opcode::Rst => {
            if let Some(previous) = &state.coil {
                debug!(
                    "Coil {} {} replaced by {} {}",
                    previous.opcode, previous.operand, instruction.opcode, operand
                );
            }
            ExpressionState {
                expression: state.expression,
                coil: Some(CoilAssignment {
                    opcode: instruction.opcode.clone(),
                    operand: operand.to_string(),
                    span: instruction.span.clone(),
                }),
            }
        }
        Opcode::Unknown(token) => {
            debug!("Ignoring instruction {} {}", token, operand);
            state
        }
    }
}

/// Builds the expression and finds the coil assignment of the instructions.
pub fn build_expression(instructions: &[Instruction]) -> ExpressionState {
    instructions
        .iter()
        .fold(ExpressionState::default(), step)
}
