//! The `box-sizing` sizing models.
//!
//! `box-sizing` decides what a declared width or height measures:
//!
//! - `content-box`: the content area only; border and padding grow the box
//! - `border-box`: the border edge; border and padding eat into the content
//!
//! Unlike the length properties, this value is written to the style without
//! any unit suffix.

/// Controls what the declared width/height of an element measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxSizing {
    /// Width/height size the content area (default).
    #[default]
    ContentBox,
    /// Width/height size the border edge.
    BorderBox,
}

impl BoxSizing {
    /// The CSS keyword for this sizing model.
    pub fn as_str(self) -> &'static str {
        match self {
            BoxSizing::ContentBox => "content-box",
            BoxSizing::BorderBox => "border-box",
        }
    }
}

impl std::fmt::Display for BoxSizing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
