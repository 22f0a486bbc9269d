//! Fragment model for composable text generation.

/// A piece of emittable text.
///
/// A fragment is either a single string (which may itself contain embedded
/// newlines) or an ordered sequence of sub-fragments. Flattening to physical
/// lines is the indentation engine's job; callers compose fragments without
/// tracking line structure themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A single, possibly multi-line, piece of text.
    Single(String),
    /// An ordered sequence of fragments.
    Sequence(Vec<Fragment>),
}

impl Fragment {
    /// Create a single-text fragment.
    pub fn single(text: impl Into<String>) -> Self {
        Self::Single(text.into())
    }

    /// Create a sequence fragment.
    pub fn sequence(fragments: impl IntoIterator<Item = impl Into<Fragment>>) -> Self {
        Self::Sequence(fragments.into_iter().map(Into::into).collect())
    }

    /// The empty fragment: a sequence with no elements, which flattens to
    /// zero lines and renders as the empty string.
    pub fn empty() -> Self {
        Self::Sequence(Vec::new())
    }

    /// Flatten to physical lines.
    ///
    /// Every `Single` is split on `'\n'`; a `Sequence` concatenates its
    /// elements' lines in order. Rejoining the result with `'\n'`
    /// reconstructs the original text exactly: no line is created or
    /// dropped. Note that `Single("")` flattens to one empty line while the
    /// empty sequence flattens to none.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Single(text) => text.split('\n').collect(),
            Self::Sequence(items) => items.iter().flat_map(Fragment::lines).collect(),
        }
    }

    /// The newline-join of [`Fragment::lines`], with no indentation applied.
    pub fn join(&self) -> String {
        self.lines().join("\n")
    }

    /// Whether the fragment flattens to zero lines.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(_) => false,
            Self::Sequence(items) => items.iter().all(Fragment::is_empty),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::Single(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::Single(text)
    }
}

impl From<&String> for Fragment {
    fn from(text: &String) -> Self {
        Self::Single(text.clone())
    }
}

impl From<Vec<Fragment>> for Fragment {
    fn from(items: Vec<Fragment>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Vec<String>> for Fragment {
    fn from(items: Vec<String>) -> Self {
        Self::Sequence(items.into_iter().map(Fragment::Single).collect())
    }
}

impl From<Vec<&str>> for Fragment {
    fn from(items: Vec<&str>) -> Self {
        Self::Sequence(items.into_iter().map(Fragment::from).collect())
    }
}

impl<T: Into<Fragment>> FromIterator<T> for Fragment {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_lines() {
        let f = Fragment::single("a\nb\nc");
        assert_eq!(f.lines(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_preserves_trailing_newline() {
        let f = Fragment::single("a\nb\n");
        assert_eq!(f.lines(), vec!["a", "b", ""]);
        assert_eq!(f.join(), "a\nb\n");
    }

    #[test]
    fn test_sequence_concatenates_in_order() {
        let f = Fragment::sequence(["a\nb", "c"]);
        assert_eq!(f.lines(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_nested_sequence() {
        let f = Fragment::Sequence(vec![
            Fragment::sequence(["a", "b"]),
            Fragment::single("c"),
        ]);
        assert_eq!(f.lines(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_sequence_has_no_lines() {
        assert!(Fragment::empty().lines().is_empty());
        assert_eq!(Fragment::empty().join(), "");
        assert!(Fragment::empty().is_empty());
    }

    #[test]
    fn test_empty_string_is_one_line() {
        let f = Fragment::single("");
        assert_eq!(f.lines(), vec![""]);
        assert!(!f.is_empty());
    }

    #[test]
    fn test_join_reconstructs_original() {
        let text = "first\n\nthird\n";
        assert_eq!(Fragment::single(text).join(), text);
    }

    #[test]
    fn test_from_iterator() {
        let f: Fragment = ["x", "y"].into_iter().collect();
        assert_eq!(f.lines(), vec!["x", "y"]);
    }
}
