//! Selector parsing and matching.
//!
//! The playground addresses elements the way the original page does: by a
//! single class (`.width`) or id (`#box`). The grammar is a compound of
//! simple selectors (`input.width`, `div#box.highlight`) with no
//! combinators; nothing here queries by hierarchy.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::map,
    multi::many0,
    sequence::preceded,
};
use thiserror::Error;

/// Errors produced when parsing a selector string.
#[derive(Error, Debug, PartialEq)]
pub enum SelectorError {
    /// The selector is empty or contains syntax the grammar does not know.
    #[error("selector syntax error: {0:?}")]
    InvalidSyntax(String),
}

/// A single simple selector.
#[derive(Debug, Clone, PartialEq)]
pub enum SimpleSelector {
    /// Tag name selector (`input`).
    Type(String),
    /// Class selector (`.width`).
    Class(String),
    /// Id selector (`#box`).
    Id(String),
    /// Universal selector (`*`).
    Universal,
}

/// A compound selector: all parts must match the same element.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundSelector {
    parts: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// Check this selector against one element's metadata.
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        self.parts.iter().all(|part| match part {
            SimpleSelector::Type(name) => name == tag,
            SimpleSelector::Class(name) => classes.iter().any(|c| c == name),
            SimpleSelector::Id(name) => id == Some(name.as_str()),
            SimpleSelector::Universal => true,
        })
    }
}

/// Parses an identifier (alphanumeric characters, dashes, and underscores).
fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parses a simple selector: Type, .class, #id, or *.
fn parse_simple_selector(input: &str) -> IResult<&str, SimpleSelector> {
    alt((
        map(preceded(char('#'), parse_ident), |s| {
            SimpleSelector::Id(s.to_string())
        }),
        map(preceded(char('.'), parse_ident), |s| {
            SimpleSelector::Class(s.to_string())
        }),
        map(char('*'), |_| SimpleSelector::Universal),
        map(parse_ident, |s| SimpleSelector::Type(s.to_string())),
    ))(input)
}

/// Parses a compound selector (e.g., `input.width`, `div#box`).
fn parse_compound_selector(input: &str) -> IResult<&str, CompoundSelector> {
    let (input, first) = parse_simple_selector(input)?;
    let (input, rest) = many0(parse_simple_selector)(input)?;

    let mut parts = vec![first];
    parts.extend(rest);
    Ok((input, CompoundSelector { parts }))
}

/// Parse a full selector string.
///
/// The whole input must be consumed; leftover text (which would be a
/// combinator in full CSS) is a syntax error.
pub fn parse_selector(input: &str) -> Result<CompoundSelector, SelectorError> {
    let trimmed = input.trim();
    let (remaining, compound) = parse_compound_selector(trimmed)
        .map_err(|_| SelectorError::InvalidSyntax(input.to_string()))?;

    if !remaining.is_empty() {
        return Err(SelectorError::InvalidSyntax(input.to_string()));
    }

    Ok(compound)
}
