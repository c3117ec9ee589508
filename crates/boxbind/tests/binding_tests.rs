//! Integration tests for the binding engine.
//!
//! Drives the stock playground page through change events and checks the
//! observable contract:
//! - Valid input writes the formatted value to the target's style
//! - Annotations accumulate, append-only, in chronological order
//! - Invalid input changes nothing and stays local to one event
//! - Missing elements disable one binding, never the rest

use boxbind::testing::{TARGET_SELECTOR, annotations, change, container_of, demo_binder, demo_page};
use boxbind::{Binding, Property, StyleBinder};

// ============================================================================
// FORMATTED STYLE WRITES
// ============================================================================

#[test]
fn test_width_change_writes_px() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "200");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "width"), Some("200px"));
}

#[test]
fn test_every_size_control_writes_its_own_property() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "200");
    change(&mut doc, &binder, ".height", "120");
    change(&mut doc, &binder, ".padding", "16");
    change(&mut doc, &binder, ".margin", "24");
    change(&mut doc, &binder, ".border-radius", "8");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "width"), Some("200px"));
    assert_eq!(doc.style_property(target, "height"), Some("120px"));
    assert_eq!(doc.style_property(target, "padding"), Some("16px"));
    assert_eq!(doc.style_property(target, "margin"), Some("24px"));
    assert_eq!(doc.style_property(target, "border-radius"), Some("8px"));
}

#[test]
fn test_border_change_writes_shorthand() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".border", "5");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "border"), Some("5px solid black"));
}

#[test]
fn test_box_sizing_writes_keyword_without_suffix() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".box-sizing", "border-box");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "box-sizing"), Some("border-box"));
}

#[test]
fn test_repeated_changes_overwrite_the_property() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "100");
    change(&mut doc, &binder, ".width", "250");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "width"), Some("250px"));
}

#[test]
fn test_width_does_not_touch_height() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "200");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "height"), None);
}

// ============================================================================
// ANNOTATIONS
// ============================================================================

#[test]
fn test_width_change_appends_annotation_paragraph() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "200");

    assert_eq!(annotations(&doc, ".width"), vec!["200px"]);

    // The container gained exactly one <p>200px</p>.
    let container = container_of(&doc, ".width").unwrap();
    let html = doc.html_of(container);
    assert!(html.contains("<p>200px</p>"), "html was: {html}");
}

#[test]
fn test_annotations_accumulate_in_chronological_order() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "100");
    change(&mut doc, &binder, ".width", "150");
    change(&mut doc, &binder, ".width", "200");

    assert_eq!(annotations(&doc, ".width"), vec!["100px", "150px", "200px"]);
}

#[test]
fn test_annotation_records_formatted_border_value() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".border", "5");

    assert_eq!(annotations(&doc, ".border"), vec!["5px solid black"]);
}

#[test]
fn test_box_sizing_has_no_annotation_policy() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".box-sizing", "border-box");
    change(&mut doc, &binder, ".box-sizing", "content-box");

    assert_eq!(annotations(&doc, ".box-sizing"), Vec::<String>::new());
}

#[test]
fn test_annotation_policy_can_be_turned_off() {
    let mut doc = demo_page();
    let bindings = vec![Binding::px(".width", Property::Width).with_annotation(false)];
    let binder = StyleBinder::initialize(&doc, TARGET_SELECTOR, bindings);

    change(&mut doc, &binder, ".width", "200");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "width"), Some("200px"));
    assert_eq!(annotations(&doc, ".width"), Vec::<String>::new());
}

#[test]
fn test_annotations_per_control_stay_separate() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "200");
    change(&mut doc, &binder, ".height", "50");

    assert_eq!(annotations(&doc, ".width"), vec!["200px"]);
    assert_eq!(annotations(&doc, ".height"), vec!["50px"]);
}

// ============================================================================
// INVALID INPUT
// ============================================================================

#[test]
fn test_empty_input_changes_nothing() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "width"), None);
    assert_eq!(annotations(&doc, ".width"), Vec::<String>::new());
}

#[test]
fn test_non_numeric_input_changes_nothing() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "wide");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "width"), None);
    assert_eq!(annotations(&doc, ".width"), Vec::<String>::new());
}

#[test]
fn test_invalid_input_keeps_prior_value() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "200");
    change(&mut doc, &binder, ".width", "-4");
    change(&mut doc, &binder, ".width", "12px3");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "width"), Some("200px"));
    assert_eq!(annotations(&doc, ".width"), vec!["200px"]);
}

#[test]
fn test_invalid_keyword_keeps_prior_value() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".box-sizing", "border-box");
    change(&mut doc, &binder, ".box-sizing", "padding-box");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "box-sizing"), Some("border-box"));
}

#[test]
fn test_control_stays_interactive_after_rejection() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    change(&mut doc, &binder, ".width", "oops");
    change(&mut doc, &binder, ".width", "320");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "width"), Some("320px"));
    assert_eq!(annotations(&doc, ".width"), vec!["320px"]);
}

// ============================================================================
// MISSING ELEMENTS
// ============================================================================

#[test]
fn test_missing_control_skips_only_that_binding() {
    let doc = demo_page();
    let bindings = vec![
        Binding::px(".no-such-control", Property::Width),
        Binding::px(".height", Property::Height),
    ];
    let binder = StyleBinder::initialize(&doc, TARGET_SELECTOR, bindings);

    assert_eq!(binder.bound_count(), 1);
}

#[test]
fn test_remaining_bindings_work_after_a_missing_control() {
    let mut doc = demo_page();
    let bindings = vec![
        Binding::px(".no-such-control", Property::Width),
        Binding::px(".height", Property::Height),
    ];
    let binder = StyleBinder::initialize(&doc, TARGET_SELECTOR, bindings);

    change(&mut doc, &binder, ".height", "50");

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "height"), Some("50px"));
}

#[test]
fn test_missing_target_disables_bindings_without_panicking() {
    let mut doc = demo_page();
    let binder = StyleBinder::initialize(
        &doc,
        "#no-such-target",
        boxbind::default_bindings().iter().cloned(),
    );

    assert_eq!(binder.target(), None);
    change(&mut doc, &binder, ".width", "200");

    assert_eq!(annotations(&doc, ".width"), Vec::<String>::new());
}

#[test]
fn test_change_from_unbound_node_is_ignored() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);

    let stray = doc.create_element("input");
    let mut queue = boxbind::EventQueue::new();
    queue.push(boxbind::ChangeEvent::new(stray, "200"));
    binder.pump(&mut doc, &mut queue);

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "width"), None);
}

// ============================================================================
// SERIAL DELIVERY
// ============================================================================

#[test]
fn test_pump_applies_events_in_fifo_order() {
    let mut doc = demo_page();
    let binder = demo_binder(&doc);
    let width = doc.query_selector(".width").unwrap();

    let mut queue = boxbind::EventQueue::new();
    queue.push(boxbind::ChangeEvent::new(width, "100"));
    queue.push(boxbind::ChangeEvent::new(width, "200"));
    binder.pump(&mut doc, &mut queue);

    let target = doc.query_selector(TARGET_SELECTOR).unwrap();
    assert_eq!(doc.style_property(target, "width"), Some("200px"));
    assert_eq!(annotations(&doc, ".width"), vec!["100px", "200px"]);
    assert!(queue.is_empty());
}

#[test]
fn test_stock_page_binds_all_seven_controls() {
    let doc = demo_page();
    let binder = demo_binder(&doc);
    assert_eq!(binder.bound_count(), 7);
}
