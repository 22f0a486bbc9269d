//! Sized SystemVerilog literal formatting.
//!
//! Values are unsigned and validated against the requested bit width at
//! construction; the rendered literal is an opaque leaf string to the rest
//! of the engine.

use crate::{Result, TemplateError};

/// Render an unsigned value as a sized binary literal.
///
/// ```
/// # use svgen_sv::literals;
/// assert_eq!(literals::bin(63, 8).unwrap(), "8'b00111111");
/// ```
pub fn bin(value: u128, width: u32) -> Result<String> {
    check_width(value, width)?;
    Ok(format!("{width}'b{value:0digits$b}", digits = width as usize))
}

/// Render an unsigned value as a sized hex literal, zero-padded to the
/// number of hex digits the width occupies.
///
/// ```
/// # use svgen_sv::literals;
/// assert_eq!(literals::hex(16, 5).unwrap(), "5'h10");
/// ```
pub fn hex(value: u128, width: u32) -> Result<String> {
    check_width(value, width)?;
    let digits = width.div_ceil(4) as usize;
    Ok(format!("{width}'h{value:0digits$X}"))
}

/// [`bin`] for a decimal string input.
pub fn bin_from_str(text: &str, width: u32) -> Result<String> {
    bin(parse_unsigned(text)?, width)
}

/// [`hex`] for a decimal string input.
pub fn hex_from_str(text: &str, width: u32) -> Result<String> {
    hex(parse_unsigned(text)?, width)
}

fn parse_unsigned(text: &str) -> Result<u128> {
    text.trim()
        .parse()
        .map_err(|_| TemplateError::InvalidInteger {
            text: text.to_string(),
        })
}

fn check_width(value: u128, width: u32) -> Result<()> {
    if width == 0 {
        return Err(TemplateError::ZeroWidth);
    }
    let fits = match 1u128.checked_shl(width) {
        Some(limit) => value < limit,
        None => true,
    };
    if fits {
        Ok(())
    } else {
        Err(TemplateError::WidthOverflow { value, width })
    }
}
