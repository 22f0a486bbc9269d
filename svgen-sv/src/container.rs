//! Container templates: module, package, and struct typedef wrappers.

use svgen_codegen::{Fragment, IndentSpec, indent, indent_with};
use tracing::debug;

use crate::{Port, Result, TemplateError, decl};

/// A module wrapper: name plus ordered port, parameter, and import lists.
///
/// The body is supplied at render time, so one `Module` can frame any
/// accumulated text. Ports are validated [`Port`] values; parameters and
/// imports are formatted by the builder itself.
///
/// ```
/// # use svgen_sv::{Module, Port};
/// let m = Module::new("dff")
///     .port(Port::input("clk_i").unwrap())
///     .port(Port::output("q_o").unwrap());
/// let text = m.render("always_ff ...");
/// assert!(text.starts_with("module dff\n  ( input logic clk_i,\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Module {
    name: String,
    ports: Vec<Port>,
    parameters: Vec<String>,
    imports: Vec<String>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }

    pub fn ports(mut self, ports: impl IntoIterator<Item = Port>) -> Self {
        self.ports.extend(ports);
        self
    }

    /// Add a parameter to the `#( ... )` list. The value renders as given,
    /// without the trailing semicolon a standalone [`decl::parameter`]
    /// declaration would carry.
    pub fn parameter(mut self, name: &str, value: impl std::fmt::Display) -> Self {
        self.parameters.push(format!("parameter {name} = {value}"));
        self
    }

    /// Add a wildcard package import.
    pub fn import_pkg(mut self, pkg: &str) -> Self {
        self.imports.push(decl::import_pkg(pkg));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the module around `body`.
    ///
    /// With ports, the header is `module <name>` and the port list is a
    /// comma-joined block framed by `  ( ` and `   );`. With an empty port
    /// list the header is `module <name>;` and the port-list delimiter is
    /// omitted entirely.
    pub fn render(&self, body: impl Into<Fragment>) -> String {
        debug!(module = %self.name, ports = self.ports.len(), "rendering module");

        let has_ports = !self.ports.is_empty();
        let has_params = !self.parameters.is_empty();

        let mut out = if has_ports || has_params {
            format!("module {}\n", self.name)
        } else {
            format!("module {};\n", self.name)
        };

        if !self.imports.is_empty() {
            out.push_str(&indent(&Fragment::from(self.imports.clone())));
            out.push('\n');
        }

        if has_params {
            let list = Fragment::single(self.parameters.join(",\n"));
            out.push_str(&indent_with(&list, &IndentSpec::new("  #( ", "     ")));
            if has_ports {
                out.push_str("\n     )\n");
            } else {
                out.push_str("\n     );\n\n");
            }
        }

        if has_ports {
            let joined = self
                .ports
                .iter()
                .map(Port::to_string)
                .collect::<Vec<_>>()
                .join(",\n");
            let list = Fragment::single(joined);
            out.push_str(&indent_with(&list, &IndentSpec::new("  ( ", "    ")));
            out.push_str("\n   );\n\n");
        } else if !has_params {
            out.push('\n');
        }

        out.push_str(&indent(&body.into()));
        out.push_str("\nendmodule\n");
        out
    }
}

/// A package wrapper: `package <name>;`, indented body, and a closing
/// keyword annotated with the package name.
pub fn package(name: &str, body: impl Into<Fragment>) -> String {
    format!(
        "package {name};\n{}\nendpackage: {name}",
        indent(&body.into())
    )
}

/// A struct typedef wrapper.
///
/// Construction rejects an empty field list; a struct with zero fields is
/// meaningless. Fields may be an ordered list of declarations or one
/// pre-joined multi-line string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    name: String,
    fields: Fragment,
    packed: bool,
}

impl StructDef {
    pub fn new(name: impl Into<String>, fields: impl Into<Fragment>) -> Result<Self> {
        let name = name.into();
        let fields = fields.into();
        if fields.is_empty() || fields.join().is_empty() {
            return Err(TemplateError::EmptyStruct { name });
        }
        Ok(Self {
            name,
            fields,
            packed: true,
        })
    }

    /// Drop the `packed` keyword.
    pub fn unpacked(mut self) -> Self {
        self.packed = false;
        self
    }

    pub fn render(&self) -> String {
        let packed = if self.packed { "packed " } else { "" };
        format!(
            "typedef struct {packed}{{\n{}\n}} {};",
            indent(&self.fields),
            self.name
        )
    }
}
