//! Module port declarations.

use std::fmt;

use crate::{Result, TemplateError};

/// Net type used when a port or declaration does not name one.
pub const DEFAULT_NET_TYPE: &str = "logic";

/// Port direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

/// Packed vector bounds.
///
/// Bounds are kept as strings so a parameter expression such as
/// `DATA_WIDTH-1` is as valid as a numeric literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub msb: String,
    pub lsb: String,
}

impl Range {
    pub fn new(msb: impl ToString, lsb: impl ToString) -> Self {
        Self {
            msb: msb.to_string(),
            lsb: lsb.to_string(),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.msb, self.lsb)
    }
}

/// A module port: direction, optional packed range, net type, and name.
///
/// Construction rejects an empty name; rendering is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    direction: Direction,
    name: String,
    ty: String,
    range: Option<Range>,
}

impl Port {
    /// A scalar input port.
    pub fn input(name: impl Into<String>) -> Result<Self> {
        Self::new(Direction::Input, name, None)
    }

    /// A scalar output port.
    pub fn output(name: impl Into<String>) -> Result<Self> {
        Self::new(Direction::Output, name, None)
    }

    /// A packed vector input port.
    pub fn input_vec(name: impl Into<String>, msb: impl ToString, lsb: impl ToString) -> Result<Self> {
        Self::new(Direction::Input, name, Some(Range::new(msb, lsb)))
    }

    /// A packed vector output port.
    pub fn output_vec(name: impl Into<String>, msb: impl ToString, lsb: impl ToString) -> Result<Self> {
        Self::new(Direction::Output, name, Some(Range::new(msb, lsb)))
    }

    fn new(direction: Direction, name: impl Into<String>, range: Option<Range>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(TemplateError::EmptyName { context: "port" });
        }
        Ok(Self {
            direction,
            name,
            ty: DEFAULT_NET_TYPE.to_string(),
            range,
        })
    }

    /// Override the net type, e.g. a user-defined struct type.
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = ty.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.range {
            Some(range) => write!(
                f,
                "{} {} {} {}",
                self.direction.keyword(),
                self.ty,
                range,
                self.name
            ),
            None => write!(f, "{} {} {}", self.direction.keyword(), self.ty, self.name),
        }
    }
}

/// Scalar logic input ports from a list of names.
pub fn inputs(names: impl IntoIterator<Item = impl Into<String>>) -> Result<Vec<Port>> {
    names.into_iter().map(Port::input).collect()
}

/// Scalar logic output ports from a list of names.
pub fn outputs(names: impl IntoIterator<Item = impl Into<String>>) -> Result<Vec<Port>> {
    names.into_iter().map(Port::output).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_ports() {
        assert_eq!(Port::input("data_i").unwrap().to_string(), "input logic data_i");
        assert_eq!(
            Port::output("data_o").unwrap().to_string(),
            "output logic data_o"
        );
    }

    #[test]
    fn test_typed_port() {
        assert_eq!(
            Port::input("data_i").unwrap().with_type("memory_t").to_string(),
            "input memory_t data_i"
        );
    }

    #[test]
    fn test_vector_ports() {
        assert_eq!(
            Port::input_vec("data_i", 7, 0).unwrap().to_string(),
            "input logic [7:0] data_i"
        );
        assert_eq!(
            Port::input_vec("data_i", "DATA_WIDTH-1", 0).unwrap().to_string(),
            "input logic [DATA_WIDTH-1:0] data_i"
        );
        assert_eq!(
            Port::input_vec("data_i", 0, 0).unwrap().to_string(),
            "input logic [0:0] data_i"
        );
        assert_eq!(
            Port::output_vec("register", 3, 0)
                .unwrap()
                .with_type("memory_t")
                .to_string(),
            "output memory_t [3:0] register"
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert_eq!(
            Port::input(""),
            Err(TemplateError::EmptyName { context: "port" })
        );
        assert!(Port::output("").is_err());
        assert!(Port::input_vec("", 0, 0).is_err());
        assert!(Port::output_vec("", 0, 0).is_err());
    }

    #[test]
    fn test_bulk_helpers() {
        let ins = inputs(["d1", "d2", "d3"]).unwrap();
        let rendered: Vec<String> = ins.iter().map(Port::to_string).collect();
        assert_eq!(
            rendered,
            vec!["input logic d1", "input logic d2", "input logic d3"]
        );

        let outs = outputs(["d1", "d2"]).unwrap();
        assert_eq!(outs.len(), 2);
        assert!(outputs(Vec::<String>::new()).unwrap().is_empty());
        assert!(inputs(["ok", ""]).is_err());
    }
}
