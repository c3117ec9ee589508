//! The style properties a control can be bound to.
//!
//! The playground binds exactly the box-model surface: the two dimensions,
//! the three spacing rings, corner rounding, and the sizing model. Each
//! variant maps to exactly one CSS property name.

use phf::phf_map;

/// A bindable box-model style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Content width (`width`).
    Width,
    /// Content height (`height`).
    Height,
    /// Inner spacing on all four sides (`padding`).
    Padding,
    /// Outer spacing on all four sides (`margin`).
    Margin,
    /// Border shorthand on all four sides (`border`).
    Border,
    /// Corner rounding (`border-radius`).
    BorderRadius,
    /// Sizing model (`box-sizing`).
    BoxSizing,
}

/// CSS name to property lookup table.
static PROPERTY_NAMES: phf::Map<&'static str, Property> = phf_map! {
    "width" => Property::Width,
    "height" => Property::Height,
    "padding" => Property::Padding,
    "margin" => Property::Margin,
    "border" => Property::Border,
    "border-radius" => Property::BorderRadius,
    "box-sizing" => Property::BoxSizing,
};

impl Property {
    /// The CSS property name written into the element's style.
    pub fn css_name(self) -> &'static str {
        match self {
            Property::Width => "width",
            Property::Height => "height",
            Property::Padding => "padding",
            Property::Margin => "margin",
            Property::Border => "border",
            Property::BorderRadius => "border-radius",
            Property::BoxSizing => "box-sizing",
        }
    }

    /// Look up a property from its CSS name.
    pub fn from_css_name(name: &str) -> Option<Property> {
        PROPERTY_NAMES.get(name).copied()
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_name())
    }
}
