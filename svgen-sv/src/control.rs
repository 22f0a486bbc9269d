//! Control-flow and process templates.
//!
//! Every template takes its body as `impl Into<Fragment>`, so a single
//! statement string, a multi-line string, or a list of statements all
//! compose the same way. Bodies are not validated; condition and selector
//! strings render as given.

use std::fmt;

use svgen_codegen::{Fragment, block, indent};
use tracing::trace;

/// An `if` statement with a block-composed body.
pub fn if_stmt(cond: &str, body: impl Into<Fragment>) -> String {
    format!("if ({cond})\n{}", block(&body.into()))
}

/// An `if`/`else` statement. The two branches are composed independently.
pub fn if_else(cond: &str, then_body: impl Into<Fragment>, else_body: impl Into<Fragment>) -> String {
    format!(
        "if ({cond})\n{}\nelse\n{}",
        block(&then_body.into()),
        block(&else_body.into())
    )
}

/// An `always_comb` process wrapping a block-composed body.
pub fn always_comb(body: impl Into<Fragment>) -> String {
    format!("always_comb\n{}", block(&body.into()))
}

/// A clock edge in a sensitivity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Pos,
    Neg,
}

impl Edge {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Pos => "posedge",
            Self::Neg => "negedge",
        }
    }
}

/// Clock and reset configuration for [`always_ff`].
///
/// An explicit, immutable value: the default instance covers the common
/// case (`clk_i` sampled on the positive edge, asynchronous active-low
/// `reset_n_i`), and call sites that differ say so in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSpec {
    pub clock: String,
    pub reset: String,
    pub clock_edge: Edge,
    /// Active level of the reset. The reset sensitivity edge and the reset
    /// branch condition both follow from it: an active-high reset triggers
    /// on `posedge reset` and branches on the raw signal, an active-low
    /// reset triggers on `negedge reset` and branches on its negation.
    pub reset_active_high: bool,
}

impl ClockSpec {
    pub fn new(clock: impl Into<String>, reset: impl Into<String>) -> Self {
        Self {
            clock: clock.into(),
            reset: reset.into(),
            ..Self::default()
        }
    }

    pub fn clock_edge(mut self, edge: Edge) -> Self {
        self.clock_edge = edge;
        self
    }

    pub fn active_high_reset(mut self) -> Self {
        self.reset_active_high = true;
        self
    }

    fn reset_edge(&self) -> Edge {
        if self.reset_active_high { Edge::Pos } else { Edge::Neg }
    }

    fn reset_condition(&self) -> String {
        if self.reset_active_high {
            self.reset.clone()
        } else {
            format!("!{}", self.reset)
        }
    }
}

impl Default for ClockSpec {
    fn default() -> Self {
        Self {
            clock: "clk_i".to_string(),
            reset: "reset_n_i".to_string(),
            clock_edge: Edge::Pos,
            reset_active_high: false,
        }
    }
}

/// An `always_ff` process: sensitivity list from `spec`, then a
/// `begin`/`end` pair wrapping the reset conditional, reset branch first.
pub fn always_ff(
    spec: &ClockSpec,
    reset_body: impl Into<Fragment>,
    body: impl Into<Fragment>,
) -> String {
    trace!(clock = %spec.clock, reset = %spec.reset, "rendering always_ff");
    let conditional = if_else(&spec.reset_condition(), reset_body, body);
    format!(
        "always_ff @({} {},{} {})\nbegin\n{}\nend",
        spec.clock_edge.keyword(),
        spec.clock,
        spec.reset_edge().keyword(),
        spec.reset,
        indent(&Fragment::single(conditional))
    )
}

/// One condition/body pair inside a [`case`] statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseItem {
    pub cond: String,
    pub body: Fragment,
}

impl CaseItem {
    pub fn new(cond: impl Into<String>, body: impl Into<Fragment>) -> Self {
        Self {
            cond: cond.into(),
            body: body.into(),
        }
    }
}

impl fmt::Display for CaseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.cond, block(&self.body))
    }
}

/// A `case` statement over `selector`.
///
/// Items render in input order; order determines the first-match semantics
/// of the emitted code, and no uniqueness or exhaustiveness check is
/// performed.
pub fn case(selector: &str, items: &[CaseItem]) -> String {
    let rendered: Fragment = items.iter().map(CaseItem::to_string).collect();
    format!("case({selector})\n{}\nendcase", indent(&rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::nonblocking;

    #[test]
    fn test_if_single_statement() {
        assert_eq!(if_stmt("enable", "a <= b;"), "if (enable)\n   a <= b;");
    }

    #[test]
    fn test_if_multi_statement() {
        assert_eq!(
            if_stmt("enable", vec!["a <= b;", "c <= d;"]),
            "if (enable)\nbegin\n   a <= b;\n   c <= d;\nend"
        );
    }

    #[test]
    fn test_if_else() {
        assert_eq!(
            if_else("sel", "a <= b;", "a <= c;"),
            "if (sel)\n   a <= b;\nelse\n   a <= c;"
        );
    }

    #[test]
    fn test_always_comb() {
        assert_eq!(always_comb("y = a & b;"), "always_comb\n   y = a & b;");
    }

    #[test]
    fn test_clock_spec_default() {
        let spec = ClockSpec::default();
        assert_eq!(spec.clock, "clk_i");
        assert_eq!(spec.reset, "reset_n_i");
        assert_eq!(spec.clock_edge, Edge::Pos);
        assert!(!spec.reset_active_high);
        assert_eq!(spec.reset_condition(), "!reset_n_i");
        assert_eq!(spec.reset_edge(), Edge::Neg);
    }

    #[test]
    fn test_clock_spec_active_high() {
        let spec = ClockSpec::new("ck", "rst").active_high_reset();
        assert_eq!(spec.reset_condition(), "rst");
        assert_eq!(spec.reset_edge(), Edge::Pos);
    }

    #[test]
    fn test_always_ff_default() {
        let out = always_ff(
            &ClockSpec::default(),
            nonblocking("do", "1'b0"),
            nonblocking("do", "di"),
        );
        assert_eq!(
            out,
            "always_ff @(posedge clk_i,negedge reset_n_i)\n\
             begin\n\
             \x20  if (!reset_n_i)\n\
             \x20     do <= 1'b0;\n\
             \x20  else\n\
             \x20     do <= di;\n\
             end"
        );
    }

    #[test]
    fn test_always_ff_is_deterministic() {
        let spec = ClockSpec::default();
        let a = always_ff(&spec, "q <= 0;", "q <= d;");
        let b = always_ff(&spec, "q <= 0;", "q <= d;");
        assert_eq!(a, b);
    }

    #[test]
    fn test_always_ff_custom_spec() {
        let spec = ClockSpec::new("clock", "rst").clock_edge(Edge::Neg).active_high_reset();
        let out = always_ff(&spec, "q <= 0;", "q <= d;");
        assert!(out.starts_with("always_ff @(negedge clock,posedge rst)\n"));
        assert!(out.contains("if (rst)\n"));
    }

    #[test]
    fn test_case_item_inline_body() {
        let item = CaseItem::new("4'h0", nonblocking("th_o", "16'h0001"));
        assert_eq!(item.to_string(), "4'h0:    th_o <= 16'h0001;");
    }

    #[test]
    fn test_case_item_wrapped_body() {
        let item = CaseItem::new("default", vec!["a <= 0;", "b <= 0;"]);
        assert_eq!(
            item.to_string(),
            "default: begin\n   a <= 0;\n   b <= 0;\nend"
        );
    }

    #[test]
    fn test_case_preserves_item_order() {
        let items = vec![
            CaseItem::new("2'b10", "y <= 2;"),
            CaseItem::new("2'b00", "y <= 0;"),
            CaseItem::new("2'b11", "y <= 3;"),
            CaseItem::new("2'b01", "y <= 1;"),
        ];
        let out = case("sel", &items);
        let p = |needle: &str| out.find(needle).unwrap();
        assert!(p("2'b10") < p("2'b00"));
        assert!(p("2'b00") < p("2'b11"));
        assert!(p("2'b11") < p("2'b01"));
    }

    #[test]
    fn test_case_shape() {
        let items = vec![
            CaseItem::new("1'b0", "y <= a;"),
            CaseItem::new("1'b1", "y <= b;"),
        ];
        assert_eq!(
            case("sel", &items),
            "case(sel)\n   1'b0:    y <= a;\n   1'b1:    y <= b;\nendcase"
        );
    }
}
