//! # boxbind - Box-Model Playground Engine
//!
//! The runtime half of the playground: an in-memory element tree, change
//! events, and the binding engine that maps control input onto the target
//! element's style.
//!
//! The flow is the one a browser page would have, minus the browser:
//!
//! 1. Build a [`dom::Document`] holding the controls and the target element
//! 2. Describe the bindings as data ([`binding::Binding`])
//! 3. Resolve them once with [`binder::StyleBinder::initialize`]
//! 4. Feed control changes through an [`event::EventQueue`]
//!
//! Every valid change writes one style property on the target and (for
//! annotated bindings) appends a `<p>` with the applied value to the
//! control's container. Invalid values and missing elements are logged and
//! contained; one broken binding never takes the others down.
//!
//! Delivery is strictly serial: events are handled to completion, in FIFO
//! order, on the caller's thread.
//!
//! ## Modules
//!
//! - [`dom`]: Arena-backed element tree with selector lookup
//! - [`selector`]: Compound selector parsing and matching
//! - [`event`]: Change events and the FIFO queue
//! - [`binding`]: Binding records, value formatting, the stock table
//! - [`binder`]: The `StyleBinder` itself
//! - [`sketch`]: Terminal rendering of the target's box model
//! - [`testing`]: Stock playground page and drive/inspect helpers

pub mod binder;
pub mod binding;
pub mod dom;
pub mod event;
mod log_init;
pub mod selector;
pub mod sketch;
pub mod testing;

pub use binder::StyleBinder;
pub use binding::{Binding, ValueFormat, default_bindings};
pub use dom::{Document, NodeId};
pub use event::{ChangeEvent, EventQueue};
pub use log_init::init_logger;
pub use sketch::ResolvedBox;

// Re-export the log crate so binaries can use boxbind::log::info!, etc.
pub use log;
// Re-export the value layer; binding tables are written in its terms.
pub use bmcss;
pub use bmcss::Property;
