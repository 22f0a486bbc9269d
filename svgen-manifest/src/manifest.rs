//! Manifest types and parsing for svgen.toml files.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::{Error, Result};

/// Root manifest for svgen.toml: one module skeleton.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Module metadata
    pub module: ModuleConfig,

    /// Ordered port list
    #[serde(default)]
    pub ports: Vec<PortSpec>,

    /// Ordered parameter list
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,

    /// Packages imported into the module
    #[serde(default)]
    pub imports: Vec<String>,

    /// Raw statement lines forming the module body
    #[serde(default)]
    pub body: Vec<String>,
}

impl Manifest {
    /// Parse and validate manifest content, reporting diagnostics against
    /// `filename`.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.module.name.is_empty() {
            return Err(Error::validation("module name cannot be empty", src, filename));
        }
        for port in &self.ports {
            if port.name.is_empty() {
                return Err(Error::validation("a port requires a non-empty name", src, filename));
            }
            if port.msb.is_some() != port.lsb.is_some() {
                return Err(Error::validation(
                    format!("port '{}' must set both msb and lsb, or neither", port.name),
                    src,
                    filename,
                ));
            }
        }
        for parameter in &self.parameters {
            if parameter.name.is_empty() {
                return Err(Error::validation(
                    "a parameter requires a non-empty name",
                    src,
                    filename,
                ));
            }
        }
        Ok(())
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "svgen.toml")
    }
}

/// Module metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleConfig {
    /// Module name, also the output file stem
    pub name: String,

    /// Description rendered into the file header
    #[serde(default)]
    pub description: String,

    /// Project name for the file header
    pub project: Option<String>,
}

/// Port direction in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    Input,
    Output,
}

/// One entry of the `[[ports]]` array.
#[derive(Debug, Clone, Deserialize)]
pub struct PortSpec {
    pub direction: PortDirection,
    pub name: String,

    /// Net type; defaults to `logic` downstream when absent
    #[serde(default, rename = "type")]
    pub ty: Option<String>,

    /// Packed range bounds; both or neither
    pub msb: Option<Bound>,
    pub lsb: Option<Bound>,
}

/// A range bound: a plain integer or a parameter expression string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Int(i64),
    Expr(String),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

/// One entry of the `[[parameters]]` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub value: Bound,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLIP_FLOP: &str = r#"
        body = ["always_ff ..."]

        [module]
        name = "dff"
        description = "Flip Flop implementation"

        [[ports]]
        direction = "input"
        name = "clk_i"

        [[ports]]
        direction = "input"
        name = "di"

        [[ports]]
        direction = "output"
        name = "do"
    "#;

    #[test]
    fn test_parse_basic_manifest() {
        let manifest = Manifest::from_str(FLIP_FLOP).unwrap();
        assert_eq!(manifest.module.name, "dff");
        assert_eq!(manifest.ports.len(), 3);
        assert_eq!(manifest.ports[0].direction, PortDirection::Input);
        assert_eq!(manifest.ports[2].direction, PortDirection::Output);
        assert_eq!(manifest.body, vec!["always_ff ..."]);
    }

    #[test]
    fn test_port_order_is_preserved() {
        let manifest = Manifest::from_str(FLIP_FLOP).unwrap();
        let names: Vec<&str> = manifest.ports.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["clk_i", "di", "do"]);
    }

    #[test]
    fn test_vector_port_bounds() {
        let manifest = Manifest::from_str(
            r#"
            [module]
            name = "m"

            [[ports]]
            direction = "input"
            name = "sel_i"
            msb = 3
            lsb = 0

            [[ports]]
            direction = "output"
            name = "data_o"
            type = "data_t"
            msb = "WIDTH-1"
            lsb = 0
            "#,
        )
        .unwrap();

        assert_eq!(manifest.ports[0].msb, Some(Bound::Int(3)));
        assert_eq!(
            manifest.ports[1].msb,
            Some(Bound::Expr("WIDTH-1".to_string()))
        );
        assert_eq!(manifest.ports[1].ty.as_deref(), Some("data_t"));
    }

    #[test]
    fn test_parameters() {
        let manifest = Manifest::from_str(
            r#"
            [module]
            name = "counter"

            [[parameters]]
            name = "WIDTH"
            value = 8
            "#,
        )
        .unwrap();
        assert_eq!(manifest.parameters[0].name, "WIDTH");
        assert_eq!(manifest.parameters[0].value, Bound::Int(8));
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let err = Manifest::from_str("this is not toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_rejects_empty_module_name() {
        let err = Manifest::from_str("[module]\nname = \"\"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_rejects_empty_port_name() {
        let err = Manifest::from_str(
            r#"
            [module]
            name = "m"

            [[ports]]
            direction = "input"
            name = ""
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_rejects_unpaired_bounds() {
        let err = Manifest::from_str(
            r#"
            [module]
            name = "m"

            [[ports]]
            direction = "input"
            name = "sel_i"
            msb = 3
            "#,
        )
        .unwrap_err();
        match *err {
            Error::Validation { ref message, .. } => {
                assert!(message.contains("sel_i"));
            }
            ref other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_direction() {
        let err = Manifest::from_str(
            r#"
            [module]
            name = "m"

            [[ports]]
            direction = "inout"
            name = "pad"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
