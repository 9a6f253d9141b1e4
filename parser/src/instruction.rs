//! Decomposes instruction lines into opcode and operand.
use dsl::il::{Instruction, Line, Opcode};
use phf::{phf_map, Map};

static OPCODES: Map<&'static str, Opcode> = phf_map! {
    "LD" => Opcode::Ld,
    "LDP" => Opcode::Ldp,
    "LDN" => Opcode::Ldn,
    "AND" => Opcode::And,
    "ANDP" => Opcode::Andp,
    "ANDN" => Opcode::Andn,
    "OR" => Opcode::Or,
    "ORP" => Opcode::Orp,
    "ORN" => Opcode::Orn,
    "OUT" => Opcode::Out,
    "OUTNOT" => Opcode::OutNot,
    "SET" => Opcode::Set,
    "RST" => Opcode::Rst,
};

/// Returns the opcode for the token. Matching ignores case.
pub fn opcode(token: &str) -> Opcode {
    let token = token.to_uppercase();
    match OPCODES.get(token.as_str()) {
        Some(opcode) => opcode.clone(),
        None => Opcode::Unknown(token),
    }
}

/// Splits the text at the first run of whitespace. The first part is the
/// opcode token (upper case) and the remainder, trimmed, is the operand.
pub fn split_instruction(text: &str) -> (String, String) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(idx) => (
            text[..idx].to_uppercase(),
            text[idx..].trim().to_string(),
        ),
        None => (text.to_uppercase(), String::new()),
    }
}

/// Parses the instruction held by the line.
pub fn parse_instruction(line: &Line) -> Instruction {
    let (token, operand) = split_instruction(&line.text);
    Instruction {
        opcode: opcode(&token),
        operand,
        span: line.span.clone(),
    }
}

#[cfg(test)]
mod test {
    use dsl::core::SourceSpan;

    use super::*;

    #[test]
    fn split_instruction_when_operand_then_opcode_and_operand() {
        assert_eq!(
            split_instruction("ld   X0"),
            ("LD".to_string(), "X0".to_string())
        );
    }

    #[test]
    fn split_instruction_when_operand_has_spaces_then_keeps_inner_spaces() {
        assert_eq!(
            split_instruction("OUT  T0  K10 "),
            ("OUT".to_string(), "T0  K10".to_string())
        );
    }

    #[test]
    fn split_instruction_when_no_whitespace_then_empty_operand() {
        assert_eq!(split_instruction("MPS"), ("MPS".to_string(), String::new()));
        assert_eq!(split_instruction("LD\t"), ("LD".to_string(), String::new()));
    }

    #[test]
    fn split_instruction_when_empty_then_both_empty() {
        assert_eq!(split_instruction(""), (String::new(), String::new()));
    }

    #[test]
    fn opcode_when_any_case_then_same_opcode() {
        assert_eq!(opcode("ld"), Opcode::Ld);
        assert_eq!(opcode("Ld"), Opcode::Ld);
        assert_eq!(opcode("outnot"), Opcode::OutNot);
    }

    #[test]
    fn opcode_when_not_recognized_then_unknown_upper_case() {
        assert_eq!(opcode("xyz"), Opcode::Unknown("XYZ".to_string()));
    }

    #[test]
    fn parse_instruction_then_keeps_line_span() {
        let line = Line::new("andn M3", SourceSpan::range(4, 11));

        let instruction = parse_instruction(&line);

        assert_eq!(instruction.opcode, Opcode::Andn);
        assert_eq!(instruction.operand, "M3");
        assert_eq!(instruction.span, SourceSpan::range(4, 11));
    }
}
