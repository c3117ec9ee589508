//! Binding records: which control drives which style property, and how.
//!
//! A [`Binding`] is plain data: control selector, target property,
//! formatting rule, annotation flag. The whole playground configuration is
//! one table of them, passed explicitly into
//! [`StyleBinder::initialize`](crate::binder::StyleBinder::initialize);
//! nothing is wired up through globals.

use once_cell::sync::Lazy;

use bmcss::{BmcssError, BorderShorthand, Color, LineStyle, Property, parser};

/// How a binding turns raw control input into a style value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueFormat {
    /// Validate as a pixel length; write `"<v>px"`.
    Px,
    /// Validate as a pixel length; write a full border shorthand
    /// (`"<v>px solid black"` with the stock style and color).
    Border { style: LineStyle, color: Color },
    /// Validate against the `box-sizing` keywords; write the keyword bare.
    BoxSizing,
}

impl ValueFormat {
    /// Validate `raw` and produce the style text to write.
    ///
    /// `Err` means the event is dropped: no style write, no annotation.
    pub fn apply(&self, raw: &str) -> Result<String, BmcssError> {
        match self {
            ValueFormat::Px => parser::parse_px(raw).map(|px| px.to_string()),
            ValueFormat::Border { style, color } => parser::parse_px(raw).map(|width| {
                BorderShorthand {
                    width,
                    style: *style,
                    color: *color,
                }
                .to_string()
            }),
            ValueFormat::BoxSizing => parser::parse_box_sizing(raw).map(|s| s.to_string()),
        }
    }
}

/// One control-to-property binding.
///
/// Bindings are created once at initialization and never rebound; each
/// control maps to exactly one style property.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Selector for the control element.
    pub control: String,
    /// The style property this control drives.
    pub property: Property,
    /// The formatting rule for the control's raw value.
    pub format: ValueFormat,
    /// Append a `<p>` with the applied value to the control's container.
    pub annotate: bool,
}

impl Binding {
    /// A pixel-length binding with annotation on.
    pub fn px(control: impl Into<String>, property: Property) -> Self {
        Self {
            control: control.into(),
            property,
            format: ValueFormat::Px,
            annotate: true,
        }
    }

    /// The border-width binding: solid black shorthand, annotation on.
    pub fn border(control: impl Into<String>) -> Self {
        Self {
            control: control.into(),
            property: Property::Border,
            format: ValueFormat::Border {
                style: LineStyle::Solid,
                color: Color::BLACK,
            },
            annotate: true,
        }
    }

    /// The `box-sizing` binding: keyword passthrough, no annotation.
    pub fn box_sizing(control: impl Into<String>) -> Self {
        Self {
            control: control.into(),
            property: Property::BoxSizing,
            format: ValueFormat::BoxSizing,
            annotate: false,
        }
    }

    pub fn with_annotation(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }
}

static DEFAULT_BINDINGS: Lazy<Vec<Binding>> = Lazy::new(|| {
    vec![
        Binding::px(".width", Property::Width),
        Binding::px(".height", Property::Height),
        Binding::px(".padding", Property::Padding),
        Binding::px(".margin", Property::Margin),
        Binding::border(".border"),
        Binding::px(".border-radius", Property::BorderRadius),
        Binding::box_sizing(".box-sizing"),
    ]
});

/// The stock playground table: one binding per box-model control.
///
/// Controls are addressed by class, the way the original page lays them
/// out; the target element is addressed separately at initialization.
pub fn default_bindings() -> &'static [Binding] {
    &DEFAULT_BINDINGS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_format() {
        assert_eq!(ValueFormat::Px.apply("200").unwrap(), "200px");
    }

    #[test]
    fn test_border_format() {
        let format = ValueFormat::Border {
            style: LineStyle::Solid,
            color: Color::BLACK,
        };
        assert_eq!(format.apply("5").unwrap(), "5px solid black");
    }

    #[test]
    fn test_box_sizing_format() {
        assert_eq!(
            ValueFormat::BoxSizing.apply("border-box").unwrap(),
            "border-box"
        );
    }

    #[test]
    fn test_invalid_input_propagates() {
        assert!(ValueFormat::Px.apply("wide").is_err());
        assert!(ValueFormat::BoxSizing.apply("5").is_err());
    }

    #[test]
    fn test_default_table_covers_every_property() {
        let table = default_bindings();
        assert_eq!(table.len(), 7);

        for property in [
            Property::Width,
            Property::Height,
            Property::Padding,
            Property::Margin,
            Property::Border,
            Property::BorderRadius,
            Property::BoxSizing,
        ] {
            assert!(table.iter().any(|b| b.property == property));
        }
    }

    #[test]
    fn test_only_box_sizing_skips_annotation() {
        for binding in default_bindings() {
            let expected = binding.property != Property::BoxSizing;
            assert_eq!(binding.annotate, expected, "{}", binding.property);
        }
    }
}
