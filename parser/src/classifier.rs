//! Classifies lines of instruction list text.

/// The kind of a single line of text.
#[derive(Debug, Eq, PartialEq)]
pub enum LineKind<'a> {
    /// Nothing but whitespace.
    Blank,
    /// A rung or network marker. The remainder of the marker is not examined.
    Boundary,
    /// An instruction line; the text is trimmed and never empty.
    Content(&'a str),
}

const BOUNDARY_PREFIXES: [&str; 2] = ["rung", "network"];

/// Classifies the raw line.
pub fn classify(raw: &str) -> LineKind<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    let lower = line.to_lowercase();
    if BOUNDARY_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
    {
        return LineKind::Boundary;
    }

    LineKind::Content(line)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classify_when_whitespace_then_blank() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify(" \t "), LineKind::Blank);
    }

    #[test]
    fn classify_when_marker_any_case_then_boundary() {
        assert_eq!(classify("Rung 2"), LineKind::Boundary);
        assert_eq!(classify("  NETWORK 10: Start"), LineKind::Boundary);
        assert_eq!(classify("rungs are not validated"), LineKind::Boundary);
    }

    #[test]
    fn classify_when_instruction_then_trimmed_content() {
        assert_eq!(classify("  LD X0  "), LineKind::Content("LD X0"));
    }

    #[test]
    fn classify_when_marker_not_at_start_then_content() {
        assert_eq!(classify("LD rung_ok"), LineKind::Content("LD rung_ok"));
    }
}
