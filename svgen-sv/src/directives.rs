//! Preprocessor directive helpers.

/// `` `ifdef name ``
pub fn ifdef(name: &str) -> String {
    format!("`ifdef {name}")
}

/// `` `ifndef name ``
pub fn ifndef(name: &str) -> String {
    format!("`ifndef {name}")
}

/// `` `define name ``
pub fn define(name: &str) -> String {
    format!("`define {name}")
}

/// `` `endif ``
pub fn endif() -> String {
    "`endif".to_string()
}

/// The include-guard macro name for a header file: `_NAME_SVH_`.
pub fn guard(name: &str) -> String {
    format!("_{}_SVH_", name.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives() {
        assert_eq!(ifdef("SIMULATION"), "`ifdef SIMULATION");
        assert_eq!(ifndef("_DFF_SVH_"), "`ifndef _DFF_SVH_");
        assert_eq!(define("_DFF_SVH_"), "`define _DFF_SVH_");
        assert_eq!(endif(), "`endif");
    }

    #[test]
    fn test_guard() {
        assert_eq!(guard("dff"), "_DFF_SVH_");
        assert_eq!(guard("th_enc"), "_TH_ENC_SVH_");
    }
}
