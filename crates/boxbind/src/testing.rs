//! Test utilities for driving a playground document.
//!
//! Builds the stock page the way the original demo lays it out (one field
//! container per control, a `div#box` target) and provides helpers to push
//! changes through a binder and read the results back.
//!
//! # Examples
//!
//! ```rust
//! use boxbind::testing::{annotations, change, demo_binder, demo_page};
//!
//! let mut doc = demo_page();
//! let binder = demo_binder(&doc);
//!
//! change(&mut doc, &binder, ".width", "200");
//!
//! let target = doc.query_selector("#box").unwrap();
//! assert_eq!(doc.style_property(target, "width"), Some("200px"));
//! assert_eq!(annotations(&doc, ".width"), vec!["200px"]);
//! ```

use crate::binder::StyleBinder;
use crate::binding::default_bindings;
use crate::dom::{Document, NodeId};
use crate::event::{ChangeEvent, EventQueue};

/// Selector for the stock page's target element.
pub const TARGET_SELECTOR: &str = "#box";

/// Class names of the stock page's controls, in form order.
pub const CONTROL_CLASSES: [&str; 7] = [
    "width",
    "height",
    "padding",
    "margin",
    "border",
    "border-radius",
    "box-sizing",
];

/// Build the stock playground document.
///
/// Layout mirrors the original page: a form of field containers, each
/// holding one control (an `input`, or a `select` for `box-sizing`), and a
/// `div#box` target carrying a "box" label.
pub fn demo_page() -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    let form = doc.create_element("form");
    doc.append_child(root, form);

    for class in CONTROL_CLASSES {
        let field = doc.create_element("div");
        doc.add_class(field, "field");

        let tag = if class == "box-sizing" { "select" } else { "input" };
        let control = doc.create_element(tag);
        doc.add_class(control, class);

        doc.append_child(field, control);
        doc.append_child(form, field);
    }

    let target = doc.create_element("div");
    doc.set_id(target, "box");
    let label = doc.create_text_node("box");
    doc.append_child(target, label);
    doc.append_child(root, target);

    doc
}

/// Initialize a binder over the stock page with the stock binding table.
pub fn demo_binder(doc: &Document) -> StyleBinder {
    StyleBinder::initialize(doc, TARGET_SELECTOR, default_bindings().iter().cloned())
}

/// Push one change for the control at `control_selector` and pump it.
///
/// A selector that matches nothing simply delivers no event, matching how a
/// page without that control would behave.
pub fn change(doc: &mut Document, binder: &StyleBinder, control_selector: &str, value: &str) {
    let Some(source) = doc.query_selector(control_selector) else {
        return;
    };

    let mut queue = EventQueue::new();
    queue.push(ChangeEvent::new(source, value));
    binder.pump(doc, &mut queue);
}

/// The annotation texts under a control's container, oldest first.
pub fn annotations(doc: &Document, control_selector: &str) -> Vec<String> {
    let Some(control) = doc.query_selector(control_selector) else {
        return Vec::new();
    };
    let Some(container) = doc.parent(control) else {
        return Vec::new();
    };

    doc.children(container)
        .iter()
        .filter(|&&child| doc.tag(child) == Some("p"))
        .map(|&child| doc.text_content(child))
        .collect()
}

/// The annotation container for a control, when it has one.
pub fn container_of(doc: &Document, control_selector: &str) -> Option<NodeId> {
    let control = doc.query_selector(control_selector)?;
    doc.parent(control)
}
