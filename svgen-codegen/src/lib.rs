//! Indentation and block composition engine for the svgen workspace.
//!
//! This crate provides the language-agnostic primitives the SystemVerilog
//! emitters are built on:
//!
//! - [`Fragment`] - a piece of emittable text, atomic or composed of
//!   ordered sub-fragments
//! - [`IndentSpec`], [`indent`], [`indent_with`] - re-render a fragment
//!   with a first-line and a continuation indent
//! - [`block`] - wrap multi-statement bodies in `begin`/`end`, leave
//!   single statements inline
//! - [`write_source`] - write rendered text to disk with typed errors

mod block;
mod file;
mod fragment;
mod indent;

pub use block::{BLOCK_CLOSE, BLOCK_OPEN, block};
pub use file::{EmitError, write_source};
pub use fragment::Fragment;
pub use indent::{INDENT, INDENT_WIDTH, IndentSpec, indent, indent_with};
