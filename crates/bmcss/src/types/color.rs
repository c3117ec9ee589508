//! Color values for border shorthands.
//!
//! The playground only ever writes colors as part of a border shorthand
//! (`5px solid black`), so this stays deliberately small: common CSS names
//! plus 6-digit hex. A color parsed from a name remembers that name and
//! serializes with it; hex input serializes back as hex.

use phf::phf_map;

/// Common CSS named colors.
static NAMED_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf_map! {
    "black" => (0, 0, 0),
    "white" => (255, 255, 255),
    "red" => (255, 0, 0),
    "green" => (0, 128, 0),
    "blue" => (0, 0, 255),
    "yellow" => (255, 255, 0),
    "cyan" => (0, 255, 255),
    "magenta" => (255, 0, 255),
    "gray" => (128, 128, 128),
    "grey" => (128, 128, 128),
    "orange" => (255, 165, 0),
    "purple" => (128, 0, 128),
    "brown" => (165, 42, 42),
    "pink" => (255, 192, 203),
    "coral" => (255, 127, 80),
    "crimson" => (220, 20, 60),
    "navy" => (0, 0, 128),
    "teal" => (0, 128, 128),
    "olive" => (128, 128, 0),
    "maroon" => (128, 0, 0),
    "silver" => (192, 192, 192),
    "lime" => (0, 255, 0),
};

/// An RGB color, optionally carrying the CSS name it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Canonical CSS name, when the color came from one.
    name: Option<&'static str>,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        name: Some("black"),
    };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            name: None,
        }
    }

    /// Look up a named CSS color. The match is ASCII case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let (&key, &(r, g, b)) = NAMED_COLORS.get_entry(lower.as_str())?;
        Some(Self {
            r,
            g,
            b,
            name: Some(key),
        })
    }

}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_lookup() {
        let color = Color::from_name("black").unwrap();
        assert_eq!((color.r, color.g, color.b), (0, 0, 0));
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_named_lookup_case_insensitive() {
        let color = Color::from_name("Coral").unwrap();
        assert_eq!(color.to_string(), "coral");
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(Color::rgb(255, 127, 80).to_string(), "#ff7f50");
    }

    #[test]
    fn test_unknown_name() {
        assert!(Color::from_name("blurple").is_none());
    }
}
