//! Border values for the `border` shorthand.
//!
//! This module provides:
//!
//! - [`LineStyle`]: The visual line style of the border
//! - [`BorderShorthand`]: Width, style, and color together
//!
//! The shorthand serializes exactly the way a browser would echo it back:
//!
//! ```text
//! border: 5px solid black;
//! ```
//!
//! The playground's border control only supplies the width; the style and
//! color come from the binding configuration.

use crate::types::color::Color;
use crate::types::geometry::Px;

/// The visual line style of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// No border (default).
    #[default]
    None,
    /// A single solid line.
    Solid,
    /// A dashed line.
    Dashed,
    /// A dotted line.
    Dotted,
    /// Two parallel lines.
    Double,
}

impl LineStyle {
    /// The CSS keyword for this line style.
    pub fn as_str(self) -> &'static str {
        match self {
            LineStyle::None => "none",
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::Double => "double",
        }
    }
}

impl std::fmt::Display for LineStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full border shorthand: width, line style, and color.
///
/// # Examples
///
/// ```
/// use bmcss::types::{BorderShorthand, Color, LineStyle, Px};
///
/// let border = BorderShorthand {
///     width: Px::new(5.0),
///     style: LineStyle::Solid,
///     color: Color::BLACK,
/// };
/// assert_eq!(border.to_string(), "5px solid black");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderShorthand {
    /// Border width on all four sides.
    pub width: Px,
    /// Line style on all four sides.
    pub style: LineStyle,
    /// Border color.
    pub color: Color,
}

impl BorderShorthand {
    /// A solid black border of the given width.
    pub fn solid_black(width: Px) -> Self {
        Self {
            width,
            style: LineStyle::Solid,
            color: Color::BLACK,
        }
    }
}

impl std::fmt::Display for BorderShorthand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.width, self.style, self.color)
    }
}
