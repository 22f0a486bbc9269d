//! Statement and comment leaf helpers.

/// A continuous assignment: `assign lhs = rhs;`.
pub fn assign(lhs: &str, rhs: &str) -> String {
    format!("assign {lhs} = {rhs};")
}

/// A non-blocking assignment: `lhs <= rhs;`.
pub fn nonblocking(lhs: &str, rhs: &str) -> String {
    format!("{lhs} <= {rhs};")
}

/// A blocking assignment: `lhs = rhs;`.
pub fn blocking(lhs: &str, rhs: &str) -> String {
    format!("{lhs} = {rhs};")
}

/// A concatenation expression: `{a, b, c}`.
pub fn concat(items: impl IntoIterator<Item = impl Into<String>>) -> String {
    let items: Vec<String> = items.into_iter().map(Into::into).collect();
    format!("{{{}}}", items.join(", "))
}

/// A single-line comment, or the empty string for empty text.
pub fn comment(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("// {text}")
    }
}

/// A banner comment framing `text` between 78-dash rules.
pub fn comment_header(text: &str) -> String {
    let rule = "-".repeat(78);
    format!("//{rule}\n// {text}\n//{rule}")
}

/// Append a trailing comment to a statement; the statement is returned
/// unchanged for empty comment text.
pub fn commented(statement: impl Into<String>, text: &str) -> String {
    let statement = statement.into();
    if text.is_empty() {
        statement
    } else {
        format!("{statement} {}", comment(text))
    }
}
