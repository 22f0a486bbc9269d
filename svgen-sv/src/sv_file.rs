//! Accumulating SystemVerilog source document.

use std::path::{Path, PathBuf};

use svgen_codegen::{EmitError, Fragment, write_source};
use tracing::debug;

use crate::container::{Module, package};
use crate::directives;
use crate::header::{HeaderInfo, header};

/// A SystemVerilog source file under construction.
///
/// Statements accumulate in a caller-owned buffer; the buffer can then be
/// wrapped into a module or package and written out as a `.sv` source file
/// or a `.svh` include file. The buffer is plain text, so anything the
/// template primitives render can be pushed.
#[derive(Debug, Clone, Default)]
pub struct SvFile {
    text: String,
}

impl SvFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment followed by a newline.
    pub fn push(&mut self, fragment: impl Into<Fragment>) -> &mut Self {
        self.text.push_str(&fragment.into().join());
        self.text.push('\n');
        self
    }

    /// Append a fragment followed by a blank line.
    pub fn push_spaced(&mut self, fragment: impl Into<Fragment>) -> &mut Self {
        self.text.push_str(&fragment.into().join());
        self.text.push_str("\n\n");
        self
    }

    /// Append `n` blank lines.
    pub fn separator(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            self.text.push('\n');
        }
        self
    }

    /// The accumulated text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Wrap the accumulated text in a module.
    pub fn wrap_module(&mut self, module: &Module) -> &mut Self {
        let body = std::mem::take(&mut self.text);
        self.text = module.render(body);
        self
    }

    /// Wrap the accumulated text in a package.
    pub fn wrap_package(&mut self, name: &str) -> &mut Self {
        let body = std::mem::take(&mut self.text);
        self.text = package(name, body);
        self
    }

    /// The complete file content: optional header banner, then the
    /// accumulated text, ending in exactly one newline.
    pub fn render(&self, info: Option<&HeaderInfo>) -> String {
        let mut out = match info {
            Some(info) => format!("{}\n", header(info)),
            None => String::new(),
        };
        out.push_str(&self.text);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    /// The content of a `.svh` include file: the accumulated text (plus
    /// optional header) inside an `ifndef`/`define`/`endif` guard.
    pub fn render_svh(&self, name: &str, info: Option<&HeaderInfo>) -> String {
        let guard = directives::guard(name);
        let mut out = format!(
            "{}\n{}\n\n",
            directives::ifndef(&guard),
            directives::define(&guard)
        );
        if let Some(info) = info {
            out.push_str(&header(info));
            out.push('\n');
        }
        out.push_str(&self.text);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&directives::endif());
        out.push('\n');
        out
    }

    /// Write `<name>.sv` into `dir`, returning the written path.
    pub fn write_sv(
        &self,
        dir: impl AsRef<Path>,
        name: &str,
        info: Option<&HeaderInfo>,
    ) -> Result<PathBuf, EmitError> {
        let path = dir.as_ref().join(format!("{name}.sv"));
        debug!(path = %path.display(), "writing SystemVerilog source");
        write_source(&path, &self.render(info))?;
        Ok(path)
    }

    /// Write `<name>.svh` into `dir` with an include guard, returning the
    /// written path.
    pub fn write_svh(
        &self,
        dir: impl AsRef<Path>,
        name: &str,
        info: Option<&HeaderInfo>,
    ) -> Result<PathBuf, EmitError> {
        let path = dir.as_ref().join(format!("{name}.svh"));
        debug!(path = %path.display(), "writing SystemVerilog header");
        write_source(&path, &self.render_svh(name, info))?;
        Ok(path)
    }
}
