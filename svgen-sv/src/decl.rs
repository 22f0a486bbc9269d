//! Signal, parameter, and import declaration helpers.
//!
//! Declarations validate their identifier at construction; every other
//! argument is rendered as given. Use [`crate::stmt::commented`] to attach
//! a trailing comment to any of these.

use std::fmt::Display;

use crate::{Result, TemplateError};

/// A scalar logic declaration: `logic name;`.
pub fn logic(name: &str) -> Result<String> {
    declare("logic", name)
}

/// A packed logic vector declaration: `logic [msb:lsb] name;`.
///
/// Bounds render as given so parameter expressions work:
///
/// ```
/// # use svgen_sv::decl;
/// assert_eq!(decl::logic_vec("data", "WIDTH - 1", 0).unwrap(),
///            "logic [WIDTH - 1:0] data;");
/// ```
pub fn logic_vec(name: &str, msb: impl Display, lsb: impl Display) -> Result<String> {
    if name.is_empty() {
        return Err(TemplateError::EmptyName {
            context: "declaration",
        });
    }
    Ok(format!("logic [{msb}:{lsb}] {name};"))
}

/// A typed signal declaration: `ty name;`.
pub fn declare(ty: &str, name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(TemplateError::EmptyName {
            context: "declaration",
        });
    }
    Ok(format!("{ty} {name};"))
}

/// A parameter declaration: `parameter name = value;`.
pub fn parameter(name: &str, value: impl Display) -> String {
    format!("parameter {name} = {value};")
}

/// A localparam declaration: `localparam name = value;`.
pub fn localparam(name: &str, value: impl Display) -> String {
    format!("localparam {name} = {value};")
}

/// A constant declaration: `const ty name = value;`.
pub fn constant(ty: &str, name: &str, value: impl Display) -> String {
    format!("const {ty} {name} = {value};")
}

/// A wildcard package import: `import pkg::*;`.
pub fn import_pkg(pkg: &str) -> String {
    format!("import {pkg}::*;")
}
