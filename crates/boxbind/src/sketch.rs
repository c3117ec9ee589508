//! Terminal sketch of the target element's box model.
//!
//! The playground's visual feedback: the target element drawn as nested
//! rings, devtools-style.
//!
//! ```text
//! ·····························  <- margin edge
//! ·                           ·
//! ·  ╭──────────────────────╮ ·  <- border (rounded: border-radius > 0)
//! ·  │                      │ ·
//! ·  │         box          │ ·  <- content, label centered
//! ·  │                      │ ·
//! ·  ╰──────────────────────╯ ·
//! ·                           ·
//! ·····························
//! ```
//!
//! Pixel values scale to cells at 8 px per column and 16 px per row;
//! nonzero values are clamped to one cell so a thin ring stays visible.
//! `box-sizing` is honored: `border-box` keeps the declared width/height as
//! the border-edge size, `content-box` grows the box by border and padding.
//!
//! Styles are read back through the bmcss parsers. An absent declaration
//! falls back to a default; one the parsers reject is logged and treated as
//! absent. The sketch never panics on document contents.

use phf::phf_map;

use bmcss::{BorderShorthand, BoxSizing, LineStyle, Px, parser};

use crate::dom::{Document, NodeId};

/// Horizontal scale: pixels per terminal column.
const PX_PER_COL: f64 = 8.0;
/// Vertical scale: pixels per terminal row.
const PX_PER_ROW: f64 = 16.0;

/// Edge/corner glyphs per line style:
/// `[horizontal, vertical, top-left, top-right, bottom-left, bottom-right]`.
static BORDER_GLYPHS: phf::Map<&'static str, [char; 6]> = phf_map! {
    "solid" => ['─', '│', '┌', '┐', '└', '┘'],
    "dashed" => ['╌', '╎', '┌', '┐', '└', '┘'],
    "dotted" => ['┈', '┊', '┌', '┐', '└', '┘'],
    "double" => ['═', '║', '╔', '╗', '╚', '╝'],
};

/// Corner glyphs used when `border-radius` is nonzero.
const ROUND_CORNERS: [char; 4] = ['╭', '╮', '╰', '╯'];

/// Glyph for the margin-edge ring.
const MARGIN_DOT: char = '·';

/// The target element's box-model values, parsed back out of its style.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBox {
    pub width: Px,
    pub height: Px,
    pub padding: Px,
    pub margin: Px,
    pub border: Option<BorderShorthand>,
    pub border_radius: Px,
    pub box_sizing: BoxSizing,
}

impl Default for ResolvedBox {
    fn default() -> Self {
        Self {
            width: Px::new(160.0),
            height: Px::new(48.0),
            padding: Px::ZERO,
            margin: Px::ZERO,
            border: None,
            border_radius: Px::ZERO,
            box_sizing: BoxSizing::default(),
        }
    }
}

impl ResolvedBox {
    /// Read an element's style declarations back into box-model values.
    pub fn from_element(doc: &Document, node: NodeId) -> Self {
        let mut resolved = Self::default();

        if let Some(px) = read_px(doc, node, "width") {
            resolved.width = px;
        }
        if let Some(px) = read_px(doc, node, "height") {
            resolved.height = px;
        }
        if let Some(px) = read_px(doc, node, "padding") {
            resolved.padding = px;
        }
        if let Some(px) = read_px(doc, node, "margin") {
            resolved.margin = px;
        }
        if let Some(px) = read_px(doc, node, "border-radius") {
            resolved.border_radius = px;
        }
        if let Some(raw) = doc.style_property(node, "border") {
            match parser::parse_border(raw) {
                Ok(border) => resolved.border = Some(border),
                Err(err) => log::warn!("sketch: ignoring border {raw:?} ({err})"),
            }
        }
        if let Some(raw) = doc.style_property(node, "box-sizing") {
            match parser::parse_box_sizing(raw) {
                Ok(sizing) => resolved.box_sizing = sizing,
                Err(err) => log::warn!("sketch: ignoring box-sizing {raw:?} ({err})"),
            }
        }

        resolved
    }

    /// True when a visible border ring should be drawn.
    pub fn has_border(&self) -> bool {
        self.border
            .as_ref()
            .is_some_and(|b| b.style != LineStyle::None && !b.width.is_zero())
    }

    /// Render the box as text lines, with `label` centered in the content
    /// area.
    pub fn render(&self, label: &str) -> Vec<String> {
        let border_cells = usize::from(self.has_border());
        let pad_cols = cols(self.padding);
        let pad_rows = rows(self.padding);
        let margin_cols = cols(self.margin);
        let margin_rows = rows(self.margin);

        // border-box: the declared size is the border edge; what is left
        // after border and padding is the content area.
        let (content_cols, content_rows) = match self.box_sizing {
            BoxSizing::ContentBox => (cols(self.width), rows(self.height)),
            BoxSizing::BorderBox => (
                cols(self.width).saturating_sub(2 * (border_cells + pad_cols)),
                rows(self.height).saturating_sub(2 * (border_cells + pad_rows)),
            ),
        };

        let box_cols = content_cols + 2 * (pad_cols + border_cells);
        let box_rows = content_rows + 2 * (pad_rows + border_cells);
        let outer_cols = box_cols + 2 * margin_cols;
        let outer_rows = box_rows + 2 * margin_rows;

        if outer_cols == 0 || outer_rows == 0 {
            return Vec::new();
        }

        let mut grid = vec![vec![' '; outer_cols]; outer_rows];

        if margin_cols > 0 && margin_rows > 0 {
            let dots = [MARGIN_DOT; 6];
            draw_rect(&mut grid, 0, 0, outer_rows, outer_cols, dots);
        }

        if border_cells > 0 {
            if let Some(border) = self.border.as_ref() {
                if let Some(mut glyphs) = BORDER_GLYPHS.get(border.style.as_str()).copied() {
                    // Double-line corners have no rounded form; radius only
                    // swaps in the light corner set for the light styles.
                    if !self.border_radius.is_zero() && border.style != LineStyle::Double {
                        glyphs[2..6].copy_from_slice(&ROUND_CORNERS);
                    }
                    draw_rect(&mut grid, margin_rows, margin_cols, box_rows, box_cols, glyphs);
                }
            }
        }

        if content_rows > 0 && content_cols > 0 && !label.is_empty() {
            let fitted = fit_label(label, content_cols);
            let label_cols = display_width(&fitted);
            let row = margin_rows + border_cells + pad_rows + content_rows / 2;
            let col =
                margin_cols + border_cells + pad_cols + (content_cols - label_cols.min(content_cols)) / 2;
            for (i, ch) in fitted.chars().enumerate() {
                grid[row][col + i] = ch;
            }
        }

        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

/// Read a pixel-valued declaration back out of an element's style.
///
/// An absent declaration yields `None`; one the parser rejects is logged
/// and treated as absent.
fn read_px(doc: &Document, node: NodeId, name: &str) -> Option<Px> {
    let raw = doc.style_property(node, name)?;
    match parser::parse_px(raw) {
        Ok(px) => Some(px),
        Err(err) => {
            log::warn!("sketch: ignoring {name} {raw:?} ({err})");
            None
        }
    }
}

/// Scale a pixel length to columns; nonzero lengths occupy at least one.
fn cols(px: Px) -> usize {
    scale(px, PX_PER_COL)
}

/// Scale a pixel length to rows; nonzero lengths occupy at least one.
fn rows(px: Px) -> usize {
    scale(px, PX_PER_ROW)
}

fn scale(px: Px, per_cell: f64) -> usize {
    if px.value <= 0.0 {
        0
    } else {
        ((px.value / per_cell).round() as usize).max(1)
    }
}

fn display_width(text: &str) -> usize {
    unicode_display_width::width(text) as usize
}

/// Truncate `label` so its display width fits in `max_cols`.
fn fit_label(label: &str, max_cols: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in label.chars() {
        let mut buf = [0u8; 4];
        let w = display_width(ch.encode_utf8(&mut buf));
        if used + w > max_cols {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

/// Draw a rectangle ring into the grid.
///
/// Degenerate sizes collapse sensibly: a 1-row rect is a horizontal run,
/// a 1-col rect a vertical one.
fn draw_rect(
    grid: &mut [Vec<char>],
    top: usize,
    left: usize,
    rect_rows: usize,
    rect_cols: usize,
    glyphs: [char; 6],
) {
    if rect_rows == 0 || rect_cols == 0 {
        return;
    }
    let [horizontal, vertical, tl, tr, bl, br] = glyphs;
    let bottom = top + rect_rows - 1;
    let right = left + rect_cols - 1;

    for col in left..=right {
        grid[top][col] = horizontal;
        grid[bottom][col] = horizontal;
    }
    for row in top..=bottom {
        grid[row][left] = vertical;
        grid[row][right] = vertical;
    }
    grid[top][left] = tl;
    grid[top][right] = tr;
    grid[bottom][left] = bl;
    grid[bottom][right] = br;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_clamps_to_one_cell() {
        assert_eq!(cols(Px::new(1.0)), 1);
        assert_eq!(cols(Px::ZERO), 0);
        assert_eq!(cols(Px::new(80.0)), 10);
        assert_eq!(rows(Px::new(48.0)), 3);
    }

    #[test]
    fn test_fit_label_truncates() {
        assert_eq!(fit_label("playground", 4), "play");
        assert_eq!(fit_label("box", 20), "box");
    }
}
