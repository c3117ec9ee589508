//! Validation parsers for raw control input.
//!
//! Control values arrive as strings; these functions are the gate between
//! "whatever the user typed" and the typed values in [`crate::types`]:
//!
//! - [`parse_px`]: Pixel lengths for the size-like properties
//! - [`parse_box_sizing`]: The `box-sizing` keyword pair
//! - [`parse_line_style`]: Border line-style keywords
//! - [`parse_color`]: Named or hex colors
//! - [`parse_border`]: The canonical border shorthand, for reading styles back
//!
//! The nom combinators live in the submodules; the functions here wrap them
//! into `Result` and enforce that the whole input was consumed, so trailing
//! garbage (`"12px3"`) is rejected rather than silently truncated.
//!
//! ## Submodules
//!
//! - [`units`]: Numeric length parsing
//! - [`values`]: Identifier and keyword parsing

pub mod units;
pub mod values;

use crate::BmcssError;
use crate::types::{BorderShorthand, BoxSizing, Color, LineStyle, Px};

/// Validate a raw control value as a pixel length.
///
/// Accepts a decimal number with an optional `px` suffix. Empty input,
/// trailing garbage, negative, and non-finite values are rejected.
///
/// # Examples
///
/// ```rust
/// use bmcss::parser::parse_px;
///
/// assert_eq!(parse_px("200").unwrap().to_string(), "200px");
/// assert_eq!(parse_px("12.5px").unwrap().to_string(), "12.5px");
/// assert!(parse_px("12px3").is_err());
/// ```
pub fn parse_px(input: &str) -> Result<Px, BmcssError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BmcssError::EmptyValue);
    }

    let (remaining, value) = units::parse_px_value(trimmed)
        .map_err(|_| BmcssError::InvalidLength(trimmed.to_string()))?;
    if !remaining.trim().is_empty() {
        return Err(BmcssError::InvalidLength(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(BmcssError::NegativeLength(trimmed.to_string()));
    }
    if !value.is_finite() {
        return Err(BmcssError::InvalidLength(trimmed.to_string()));
    }

    Ok(Px::new(value))
}

/// Validate a raw control value as a `box-sizing` keyword.
pub fn parse_box_sizing(input: &str) -> Result<BoxSizing, BmcssError> {
    match keyword(input)?.as_str() {
        "content-box" => Ok(BoxSizing::ContentBox),
        "border-box" => Ok(BoxSizing::BorderBox),
        other => Err(BmcssError::UnknownKeyword(other.to_string())),
    }
}

/// Validate a raw value as a border line-style keyword.
pub fn parse_line_style(input: &str) -> Result<LineStyle, BmcssError> {
    match keyword(input)?.as_str() {
        "none" => Ok(LineStyle::None),
        "solid" => Ok(LineStyle::Solid),
        "dashed" => Ok(LineStyle::Dashed),
        "dotted" => Ok(LineStyle::Dotted),
        "double" => Ok(LineStyle::Double),
        other => Err(BmcssError::UnknownKeyword(other.to_string())),
    }
}

/// Parse a border shorthand in the canonical `<width> <style> <color>`
/// order this crate serializes (`"5px solid black"`).
///
/// The color may be omitted and defaults to black. Anything past the third
/// token is rejected.
pub fn parse_border(input: &str) -> Result<BorderShorthand, BmcssError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BmcssError::EmptyValue);
    }

    let mut tokens = trimmed.split_whitespace();
    let width = parse_px(tokens.next().unwrap_or_default())?;
    let style = match tokens.next() {
        Some(token) => parse_line_style(token)?,
        None => return Err(BmcssError::UnknownKeyword(trimmed.to_string())),
    };
    let color = match tokens.next() {
        Some(token) => parse_color(token)?,
        None => Color::BLACK,
    };
    if tokens.next().is_some() {
        return Err(BmcssError::UnknownKeyword(trimmed.to_string()));
    }

    Ok(BorderShorthand {
        width,
        style,
        color,
    })
}

/// Validate a raw value as a color: a CSS name or `#rrggbb` hex.
pub fn parse_color(input: &str) -> Result<Color, BmcssError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BmcssError::EmptyValue);
    }

    if let Some(hex) = trimmed.strip_prefix('#') {
        return values::parse_hex_rgb(hex)
            .ok_or_else(|| BmcssError::UnknownKeyword(trimmed.to_string()));
    }

    let (remaining, ident) = values::parse_ident(trimmed)
        .map_err(|_| BmcssError::UnknownKeyword(trimmed.to_string()))?;
    if !remaining.trim().is_empty() {
        return Err(BmcssError::UnknownKeyword(trimmed.to_string()));
    }

    Color::from_name(ident).ok_or_else(|| BmcssError::UnknownKeyword(trimmed.to_string()))
}

/// Extract a single lowercased keyword from the input.
///
/// Shared by the keyword parsers: trims, takes one identifier, rejects
/// anything left over.
fn keyword(input: &str) -> Result<String, BmcssError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BmcssError::EmptyValue);
    }

    let (remaining, ident) = values::parse_ident(trimmed)
        .map_err(|_| BmcssError::UnknownKeyword(trimmed.to_string()))?;
    if !remaining.trim().is_empty() {
        return Err(BmcssError::UnknownKeyword(trimmed.to_string()));
    }

    Ok(ident.to_ascii_lowercase())
}
