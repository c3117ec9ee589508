//! # bmcss - Box-Model CSS Value Layer
//!
//! Typed values, validation, and canonical serialization for the CSS
//! box-model properties the playground binds: `width`, `height`, `padding`,
//! `margin`, `border`, `border-radius`, and `box-sizing`.
//!
//! Raw control input is always a string. This crate decides whether that
//! string is acceptable for a given property and, if so, what exactly gets
//! written to the target element's style:
//!
//! - **Parsing**: Turn raw input into typed values ([`parser`])
//! - **Types**: Pixel lengths, border shorthands, keywords ([`types`])
//!
//! ## Quick Start
//!
//! ```rust
//! use bmcss::parser::{parse_px, parse_box_sizing};
//! use bmcss::types::BoxSizing;
//!
//! let width = parse_px("200").expect("valid length");
//! assert_eq!(width.to_string(), "200px");
//!
//! let sizing = parse_box_sizing("border-box").expect("valid keyword");
//! assert_eq!(sizing, BoxSizing::BorderBox);
//! ```
//!
//! ## Accepted Input
//!
//! - Lengths: decimal numbers with an optional `px` suffix (`200`, `12.5px`).
//!   Negative and non-finite values are rejected.
//! - `box-sizing`: `content-box` or `border-box`.
//! - Border line styles: `none`, `solid`, `dashed`, `dotted`, `double`.
//! - Colors: common CSS names or `#rrggbb` hex.
//!
//! Keywords match ASCII case-insensitively; serialization is always the
//! lowercase canonical form, so parsing a serialized value round-trips.
//!
//! ## Modules
//!
//! - [`parser`]: Validation parsers for raw control input
//! - [`types`]: Value types with canonical `Display` impls
//! - [`error`]: Error types for rejected input

pub mod error;
pub mod parser;
pub mod types;

pub use error::BmcssError;
pub use types::{BorderShorthand, BoxSizing, Color, LineStyle, Property, Px};
