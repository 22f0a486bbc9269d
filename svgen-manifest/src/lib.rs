//! Manifest types and parsing for svgen.toml files.
//!
//! A manifest describes one SystemVerilog module skeleton: metadata, an
//! ordered port list, parameters, package imports, and raw body
//! statements. Parsing and validation report miette diagnostics against
//! the manifest source.

mod error;
mod file;
mod manifest;

pub use error::{Error, Result};
pub use file::SvgenToml;
pub use manifest::{Bound, Manifest, ModuleConfig, ParameterSpec, PortDirection, PortSpec};
