//! The binding engine.
//!
//! `StyleBinder` resolves a binding table against a document once, then
//! applies change events to the target element's style. All failure modes
//! are local: a selector that resolves to nothing disables that one binding,
//! an invalid value drops that one event. Nothing here panics or propagates
//! errors; a malfunctioning binding must never take the others down.

use crate::binding::Binding;
use crate::dom::{Document, NodeId};
use crate::event::{ChangeEvent, EventQueue};

/// One binding resolved against the document.
#[derive(Debug)]
struct BoundControl {
    control: NodeId,
    /// Where annotations go: the control's parent at bind time.
    container: Option<NodeId>,
    binding: Binding,
}

/// Applies control changes to the target element per a fixed binding table.
///
/// Bindings are resolved once at initialization and never rebound. The
/// binder itself is stateless between events; the only persistent state is
/// the document (the target's style and the accumulated annotations).
#[derive(Debug)]
pub struct StyleBinder {
    target: Option<NodeId>,
    bound: Vec<BoundControl>,
}

impl StyleBinder {
    /// Resolve `bindings` against `doc`.
    ///
    /// Missing elements are configuration errors, not runtime faults: a
    /// control selector that matches nothing is logged and skipped, and a
    /// missing target disables everything. Initialization itself never
    /// fails.
    pub fn initialize(
        doc: &Document,
        target_selector: &str,
        bindings: impl IntoIterator<Item = Binding>,
    ) -> Self {
        let target = doc.query_selector(target_selector);
        if target.is_none() {
            log::error!("target element {target_selector:?} not found; all bindings disabled");
        }

        let mut bound = Vec::new();
        for binding in bindings {
            let Some(control) = doc.query_selector(&binding.control) else {
                log::warn!(
                    "control {:?} not found; binding for {} skipped",
                    binding.control,
                    binding.property
                );
                continue;
            };

            let container = doc.parent(control);
            if binding.annotate && container.is_none() {
                log::warn!(
                    "control {:?} has no container; its annotations will be dropped",
                    binding.control
                );
            }

            bound.push(BoundControl {
                control,
                container,
                binding,
            });
        }

        Self { target, bound }
    }

    /// The resolved target element, if the selector matched at bind time.
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// Number of bindings that resolved to a control.
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    /// Handle one change event.
    ///
    /// Validates the raw value, writes the formatted style text to the
    /// target, and (for annotated bindings) appends a `<p>` with the
    /// applied value to the control's container. Invalid values leave the
    /// document untouched; the control stays interactive for the next event.
    pub fn on_change(&self, doc: &mut Document, event: &ChangeEvent) {
        let Some(target) = self.target else {
            return;
        };
        let Some(bound) = self.bound.iter().find(|b| b.control == event.source) else {
            log::debug!("change from unbound node {:?} ignored", event.source);
            return;
        };

        let formatted = match bound.binding.format.apply(&event.value) {
            Ok(formatted) => formatted,
            Err(err) => {
                log::warn!(
                    "value {:?} rejected for {}: {err}",
                    event.value,
                    bound.binding.property
                );
                return;
            }
        };

        doc.set_style_property(target, bound.binding.property.css_name(), &formatted);
        log::debug!("{}: {formatted}", bound.binding.property);

        if bound.binding.annotate {
            if let Some(container) = bound.container {
                let note = doc.create_element("p");
                let text = doc.create_text_node(&formatted);
                doc.append_child(note, text);
                doc.append_child(container, note);
            }
        }
    }

    /// Drain `queue` through [`Self::on_change`], oldest event first.
    pub fn pump(&self, doc: &mut Document, queue: &mut EventQueue) {
        while let Some(event) = queue.pop() {
            self.on_change(doc, &event);
        }
    }
}
