//! Identifier and keyword-level parsing.
//!
//! The keyword-to-type mapping lives in [`crate::parser`]; this module only
//! knows how to cut tokens out of the input.

use nom::{IResult, bytes::complete::take_while1};

use crate::types::Color;

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parse the six hex digits after a `#` into a color.
///
/// Only the `#rrggbb` form is supported; the playground never needs alpha
/// or the shorthand form.
pub fn parse_hex_rgb(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::rgb(r, g, b))
}
