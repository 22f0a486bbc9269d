//! Block composer: wrap multi-statement bodies, leave single statements
//! inline.

use crate::{Fragment, indent};

/// Opening delimiter emitted around multi-statement bodies.
pub const BLOCK_OPEN: &str = "begin";

/// Closing delimiter emitted around multi-statement bodies.
pub const BLOCK_CLOSE: &str = "end";

/// Compose a body fragment into an indented, delimiter-correct text block.
///
/// Callers pass either one statement or many without deciding whether a
/// `begin`/`end` pair is syntactically required:
///
/// - a `Single` with no embedded newline renders as one indented line with
///   no delimiters (one trailing newline is insignificant and stripped);
/// - a `Single` spanning two or more lines, or a `Sequence` with more than
///   one element, is wrapped in `begin`/`end` with the body indented one
///   level;
/// - a `Sequence` with exactly one element composes that element, so
///   `block(&[e].into()) == block(&e)`;
/// - the empty sequence renders as the empty string.
///
/// No shape validation is performed; malformed nesting renders as given.
pub fn block(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Single(text) => {
            let text = text.strip_suffix('\n').unwrap_or(text);
            if text.contains('\n') {
                wrap(&Fragment::single(text))
            } else {
                indent(&Fragment::single(text))
            }
        }
        Fragment::Sequence(items) => match items.as_slice() {
            [] => String::new(),
            [only] => block(only),
            _ => wrap(fragment),
        },
    }
}

fn wrap(body: &Fragment) -> String {
    format!("{BLOCK_OPEN}\n{}\n{BLOCK_CLOSE}", indent(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IndentSpec;

    #[test]
    fn test_single_statement_is_inline() {
        assert_eq!(block(&"a = 1;".into()), "   a = 1;");
    }

    #[test]
    fn test_single_statement_matches_plain_indent() {
        let f = Fragment::single("a = 1;");
        assert_eq!(block(&f), crate::indent_with(&f, &IndentSpec::default()));
    }

    #[test]
    fn test_multi_line_string_is_wrapped() {
        assert_eq!(
            block(&"a = 1;\nb = 2;".into()),
            "begin\n   a = 1;\n   b = 2;\nend"
        );
    }

    #[test]
    fn test_list_is_wrapped() {
        let f = Fragment::sequence(["a = 1;", "b = 2;"]);
        assert_eq!(block(&f), "begin\n   a = 1;\n   b = 2;\nend");
    }

    #[test]
    fn test_wrapped_output_is_delimited() {
        let out = block(&Fragment::sequence(["a;", "b;", "c;"]));
        assert!(out.starts_with(BLOCK_OPEN));
        assert!(out.ends_with(&format!("\n{BLOCK_CLOSE}")));
    }

    #[test]
    fn test_trailing_newline_is_insignificant() {
        assert_eq!(block(&"a = 1;\n".into()), block(&"a = 1;".into()));
        assert_eq!(block(&"a = 1;\nb = 2;\n".into()), block(&"a = 1;\nb = 2;".into()));
    }

    #[test]
    fn test_singleton_sequence_unwraps() {
        let e = Fragment::single("a = 1;");
        assert_eq!(block(&Fragment::Sequence(vec![e.clone()])), block(&e));
    }

    #[test]
    fn test_singleton_unwraps_recursively() {
        let e = Fragment::single("a = 1;\nb = 2;");
        assert_eq!(block(&Fragment::Sequence(vec![e.clone()])), block(&e));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(block(&Fragment::empty()), "");
    }

    #[test]
    fn test_composed_block_nests_one_level() {
        let inner = block(&Fragment::sequence(["a = 1;", "b = 2;"]));
        let outer = block(&Fragment::single(inner));
        assert_eq!(
            outer,
            "begin\n   begin\n      a = 1;\n      b = 2;\n   end\nend"
        );
    }
}
