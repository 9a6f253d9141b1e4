//! End to end tests of translation.
#[cfg(test)]
mod test {
    use dsl::core::FileId;
    use ladderst_parser::SourceText;
    use ladderst_test::{fixture_names, read_fixture_pair, read_il};
    use proptest::prelude::*;

    use crate::{render_st, translate_sources, translate_text};

    #[test]
    fn translate_text_and_chain_with_out() {
        assert_eq!(
            translate_text("LD X0\nAND X1\nOUT Y0"),
            "(* Rung 1 *)\nY0 := X0 AND X1;\n"
        );
    }

    #[test]
    fn translate_text_inverse_load_or_with_set() {
        assert_eq!(
            translate_text("LDN X0\nOR X1\nSET Y1"),
            "(* Rung 1 *)\nIF NOT X0 OR X1 THEN Y1 := TRUE; END_IF;\n"
        );
    }

    #[test]
    fn translate_text_two_rungs_with_marker() {
        assert_eq!(
            translate_text("LD X0\nOUT Y0\nRung 2\nLD X1\nOUTNOT Y1"),
            "(* Rung 1 *)\nY0 := X0;\n\n(* Rung 2 *)\nY1 := NOT (X1);\n"
        );
    }

    #[test]
    fn translate_text_unknown_opcode_is_ignored() {
        assert_eq!(
            translate_text("LD X0\nXYZ X1\nOUT Y0"),
            "(* Rung 1 *)\nY0 := X0;\n"
        );
    }

    #[test]
    fn translate_text_empty_input() {
        assert_eq!(translate_text(""), "");
        assert_eq!(translate_text("Rung 1\n\n   \nNetwork 2\n"), "");
    }

    #[test]
    fn translate_text_no_coil_is_single_comment() {
        assert_eq!(
            translate_text("LD X0\nAND X1"),
            "(* Rung 1: no coil found *)\n"
        );
    }

    #[test]
    fn translate_text_second_coil_wins() {
        assert_eq!(
            translate_text("LD X0\nOUT Y0\nSET Y1"),
            "(* Rung 1 *)\nIF X0 THEN Y1 := TRUE; END_IF;\n"
        );
    }

    #[test]
    fn translate_text_page_break_between_rungs() {
        assert_eq!(
            translate_text("LD X0\nOUT Y0\n\x0cLD X1\nOUT Y1\n"),
            "(* Rung 1 *)\nY0 := X0;\n\n(* Rung 2 *)\nY1 := X1;\n"
        );
    }

    #[test]
    fn translate_text_form_feed_inside_rung_ends_line() {
        assert_eq!(
            translate_text("LD X0\nOUT Y0\x0cLD X1\nOUT Y1"),
            "(* Rung 1 *)\nY1 := X1;\n"
        );
    }

    #[test]
    fn translate_text_first_steps_fixture() {
        let (source, expected) = read_fixture_pair("first_steps");
        assert_eq!(translate_text(&source), expected);
    }

    #[test]
    fn translate_text_fail_soft_fixture() {
        let (source, expected) = read_fixture_pair("fail_soft");
        assert_eq!(translate_text(&source), expected);
    }

    #[test]
    fn translate_text_every_fixture() {
        for name in fixture_names() {
            let (source, expected) = read_fixture_pair(&name);
            assert_eq!(translate_text(&source), expected, "fixture {}", name);
        }
    }

    #[test]
    fn translate_sources_same_as_joined_text() {
        let first = read_il("first_steps");
        let second = read_il("fail_soft");
        let a = FileId::from_string("first_steps.il");
        let b = FileId::from_string("fail_soft.il");

        let translation = translate_sources(&[
            SourceText::new(&first, &a),
            SourceText::new(&second, &b),
        ]);

        let joined = format!("{}\n{}", first, second);
        assert_eq!(render_st(&translation), translate_text(&joined));
        assert_eq!(translation.blocks.len(), 6);
    }

    fn operand() -> impl Strategy<Value = String> {
        "[XYM][0-9]{1,3}"
    }

    proptest! {
        #[test]
        fn property_rungs_translate_independently(
            first in prop::collection::vec(operand(), 1..5),
            second in prop::collection::vec(operand(), 1..5),
        ) {
            let rung = |inputs: &[String]| {
                let mut lines = vec![format!("LD {}", inputs[0])];
                lines.extend(inputs[1..].iter().map(|input| format!("AND {}", input)));
                lines.push("OUT Y0".to_string());
                lines.join("\n")
            };

            let alone = translate_text(&rung(&second[..]));
            let together = translate_text(&format!("{}\n\n{}", rung(&first[..]), rung(&second[..])));

            let alone_body = alone.trim_start_matches("(* Rung 1 *)\n");
            let expected_suffix = format!("(* Rung 2 *)\n{}", alone_body);
            prop_assert!(together.ends_with(&expected_suffix));
        }
    }
}
