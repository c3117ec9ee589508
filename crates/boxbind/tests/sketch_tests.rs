//! Integration tests for the box sketch renderer.
//!
//! Small boxes, exact expected output. Scale is 8 px per column and
//! 16 px per row, so a 32px-wide box is 4 columns of content.

use boxbind::testing::{TARGET_SELECTOR, change, demo_binder, demo_page};
use boxbind::{Document, ResolvedBox};

use bmcss::{BoxSizing, LineStyle, Px};

fn styled_box(styles: &[(&str, &str)]) -> (Document, boxbind::NodeId) {
    let mut doc = Document::new();
    let root = doc.root();
    let div = doc.create_element("div");
    doc.set_id(div, "box");
    doc.append_child(root, div);
    for (name, value) in styles {
        doc.set_style_property(div, name, value);
    }
    (doc, div)
}

// ============================================================================
// STYLE READBACK
// ============================================================================

#[test]
fn test_resolved_box_defaults() {
    let (doc, div) = styled_box(&[]);
    let resolved = ResolvedBox::from_element(&doc, div);

    assert_eq!(resolved, ResolvedBox::default());
    assert_eq!(resolved.box_sizing, BoxSizing::ContentBox);
    assert!(!resolved.has_border());
}

#[test]
fn test_resolved_box_reads_styles_back() {
    let (doc, div) = styled_box(&[
        ("width", "200px"),
        ("height", "64px"),
        ("padding", "8px"),
        ("margin", "16px"),
        ("border", "5px solid black"),
        ("border-radius", "8px"),
        ("box-sizing", "border-box"),
    ]);
    let resolved = ResolvedBox::from_element(&doc, div);

    assert_eq!(resolved.width, Px::new(200.0));
    assert_eq!(resolved.height, Px::new(64.0));
    assert_eq!(resolved.padding, Px::new(8.0));
    assert_eq!(resolved.margin, Px::new(16.0));
    assert_eq!(resolved.border_radius, Px::new(8.0));
    assert_eq!(resolved.box_sizing, BoxSizing::BorderBox);

    assert!(resolved.has_border());
    let border = resolved.border.unwrap();
    assert_eq!(border.width, Px::new(5.0));
    assert_eq!(border.style, LineStyle::Solid);
}

#[test]
fn test_unparseable_style_falls_back_to_default() {
    let (doc, div) = styled_box(&[("width", "banana"), ("height", "32px")]);
    let resolved = ResolvedBox::from_element(&doc, div);

    assert_eq!(resolved.width, ResolvedBox::default().width);
    assert_eq!(resolved.height, Px::new(32.0));
}

#[test]
fn test_border_none_is_not_visible() {
    let (doc, div) = styled_box(&[("border", "5px none black")]);
    let resolved = ResolvedBox::from_element(&doc, div);
    assert!(!resolved.has_border());
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_solid_border_ring() {
    let (doc, div) = styled_box(&[
        ("width", "32px"),
        ("height", "32px"),
        ("border", "8px solid black"),
    ]);
    let lines = ResolvedBox::from_element(&doc, div).render("");

    assert_eq!(lines, vec!["┌────┐", "│    │", "│    │", "└────┘"]);
}

#[test]
fn test_label_centered_in_content_area() {
    let (doc, div) = styled_box(&[
        ("width", "32px"),
        ("height", "32px"),
        ("border", "8px solid black"),
    ]);
    let lines = ResolvedBox::from_element(&doc, div).render("box");

    assert_eq!(lines, vec!["┌────┐", "│    │", "│box │", "└────┘"]);
}

#[test]
fn test_border_radius_rounds_corners() {
    let (doc, div) = styled_box(&[
        ("width", "32px"),
        ("height", "32px"),
        ("border", "8px solid black"),
        ("border-radius", "8px"),
    ]);
    let lines = ResolvedBox::from_element(&doc, div).render("");

    assert_eq!(lines, vec!["╭────╮", "│    │", "│    │", "╰────╯"]);
}

#[test]
fn test_dashed_border_uses_dashed_glyphs() {
    let (doc, div) = styled_box(&[
        ("width", "32px"),
        ("height", "32px"),
        ("border", "5px dashed black"),
    ]);
    let lines = ResolvedBox::from_element(&doc, div).render("");

    assert_eq!(lines, vec!["┌╌╌╌╌┐", "╎    ╎", "╎    ╎", "└╌╌╌╌┘"]);
}

#[test]
fn test_margin_draws_dotted_ring() {
    let (doc, div) = styled_box(&[
        ("width", "16px"),
        ("height", "16px"),
        ("margin", "16px"),
    ]);
    let lines = ResolvedBox::from_element(&doc, div).render("");

    assert_eq!(lines, vec!["······", "·    ·", "······"]);
}

#[test]
fn test_border_box_keeps_declared_outer_size() {
    let border_box = styled_box(&[
        ("width", "48px"),
        ("height", "64px"),
        ("border", "8px solid black"),
        ("box-sizing", "border-box"),
    ]);
    let lines = ResolvedBox::from_element(&border_box.0, border_box.1).render("");

    // 48px/8 = 6 columns, 64px/16 = 4 rows: the border edge is the declared
    // size, so the whole sketch is 6x4.
    assert_eq!(lines, vec!["┌────┐", "│    │", "│    │", "└────┘"]);
}

#[test]
fn test_content_box_grows_by_border() {
    let content_box = styled_box(&[
        ("width", "48px"),
        ("height", "64px"),
        ("border", "8px solid black"),
    ]);
    let lines = ResolvedBox::from_element(&content_box.0, content_box.1).render("");

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "┌──────┐");
}

#[test]
fn test_padding_inflates_the_box() {
    let (doc, div) = styled_box(&[
        ("width", "16px"),
        ("height", "16px"),
        ("padding", "8px"),
        ("border", "8px solid black"),
    ]);
    let lines = ResolvedBox::from_element(&doc, div).render("");

    // content 2x1, padding ring 1 cell, border ring 1 cell: 6x5.
    assert_eq!(
        lines,
        vec!["┌────┐", "│    │", "│    │", "│    │", "└────┘"]
    );
}

// ============================================================================
// END TO END WITH THE BINDER
// ============================================================================

#[test]
fn test_sketch_follows_binder_changes() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "32");
    change(&mut doc, &binder, ".height", "32");
    change(&mut doc, &binder, ".border", "8");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    let lines = ResolvedBox::from_element(&doc, target).render("");

    assert_eq!(lines, vec!["┌────┐", "│    │", "│    │", "└────┘"]);
}
