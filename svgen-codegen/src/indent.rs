//! Indentation engine: re-render a fragment with explicit indent strings.

use crate::Fragment;

/// Indentation width in spaces for all svgen templates.
pub const INDENT_WIDTH: usize = 3;

/// One standard indent level. `INDENT_WIDTH` spaces.
pub const INDENT: &str = "   ";

/// A pair of indentation strings: one for the first emitted line, one for
/// every subsequent line.
///
/// The first-line indent is overridden by callers that frame a list with a
/// distinct prefix, e.g. the `  ( ` opening a module port list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentSpec {
    pub first: String,
    pub continuation: String,
}

impl IndentSpec {
    /// Same indent for the first and all continuation lines.
    pub fn uniform(indent: impl Into<String>) -> Self {
        let indent = indent.into();
        Self {
            first: indent.clone(),
            continuation: indent,
        }
    }

    /// Distinct first-line and continuation indents.
    pub fn new(first: impl Into<String>, continuation: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            continuation: continuation.into(),
        }
    }
}

impl Default for IndentSpec {
    fn default() -> Self {
        Self::uniform(INDENT)
    }
}

/// Render a fragment with one standard indent level on every line.
pub fn indent(fragment: &Fragment) -> String {
    indent_with(fragment, &IndentSpec::default())
}

/// Render a fragment with the given indentation.
///
/// The fragment is flattened to physical lines; `spec.first` is prepended
/// to line 0 and `spec.continuation` to every later line, and the result is
/// joined with single newlines. An empty fragment renders as the empty
/// string. Nested calls return content, so indentation is applied exactly
/// once per render call.
pub fn indent_with(fragment: &Fragment, spec: &IndentSpec) -> String {
    let mut out = String::new();
    for (i, line) in fragment.lines().iter().enumerate() {
        if i == 0 {
            out.push_str(&spec.first);
        } else {
            out.push('\n');
            out.push_str(&spec.continuation);
        }
        out.push_str(line);
    }
    out
}
