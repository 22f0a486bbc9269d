//! SystemVerilog template emitters.
//!
//! Small, independently callable templating primitives that compose with
//! each other in terms of indentation, so generator code never tracks
//! indent state by hand. Leaf helpers ([`decl`], [`stmt`], [`literals`],
//! [`ports`]) produce statement strings; control templates ([`control`])
//! wrap them in `if`/`else`, `case`, and process blocks; container
//! templates ([`container`]) frame a whole body as a module, package, or
//! struct typedef; [`SvFile`] accumulates a document and writes it out.

mod error;
mod sv_file;

pub mod container;
pub mod control;
pub mod decl;
pub mod directives;
pub mod header;
pub mod literals;
pub mod ports;
pub mod stmt;

pub use container::{Module, StructDef, package};
pub use control::{CaseItem, ClockSpec, Edge, always_comb, always_ff, case, if_else, if_stmt};
pub use error::{Result, TemplateError};
pub use header::{HeaderInfo, header};
pub use ports::{DEFAULT_NET_TYPE, Direction, Port, Range, inputs, outputs};
pub use sv_file::SvFile;
pub use svgen_codegen::{EmitError, Fragment, IndentSpec, block, indent, indent_with};
