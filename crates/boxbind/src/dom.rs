//! Arena-backed element tree.
//!
//! `Document` owns every node; the rest of the crate holds copyable
//! [`NodeId`] handles into it. The surface is the small slice of a real DOM
//! the playground needs: selector lookup, child appending, text nodes, and
//! ordered style declarations.
//!
//! Invariants:
//!
//! - A node has at most one parent; appending an attached node moves it.
//! - Text nodes never have children.
//! - Style declarations never contain duplicate property names; setting an
//!   existing property overwrites in place, preserving first-set order.

use crate::selector::parse_selector;

/// Handle to a node owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    style: Vec<(String, String)>,
}

#[derive(Debug)]
enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An in-memory document tree with a `body` root element.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    pub fn new() -> Self {
        let root_node = Node {
            data: NodeData::Element(ElementData {
                tag: "body".to_string(),
                id: None,
                classes: Vec::new(),
                style: Vec::new(),
            }),
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root_node],
            root: NodeId(0),
        }
    }

    /// The `body` root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push_node(NodeData::Element(ElementData {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            style: Vec::new(),
        }))
    }

    /// Create a detached text node.
    pub fn create_text_node(&mut self, text: impl Into<String>) -> NodeId {
        self.push_node(NodeData::Text(text.into()))
    }

    fn push_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Set an element's id attribute.
    pub fn set_id(&mut self, node: NodeId, id: impl Into<String>) {
        if let NodeData::Element(element) = &mut self.nodes[node.0].data {
            element.id = Some(id.into());
        }
    }

    /// Add a class to an element. Duplicates are ignored.
    pub fn add_class(&mut self, node: NodeId, class: impl Into<String>) {
        let class = class.into();
        if let NodeData::Element(element) = &mut self.nodes[node.0].data {
            if !element.classes.contains(&class) {
                element.classes.push(class);
            }
        }
    }

    /// Append `child` to `parent`'s children, last.
    ///
    /// An already-attached child is detached from its old parent first.
    /// Appending a node to itself, to one of its own descendants, or to a
    /// text node is refused (logged, no change).
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if matches!(self.nodes[parent.0].data, NodeData::Text(_)) {
            log::warn!("append_child: text nodes cannot have children");
            return;
        }
        if parent == child || self.is_ancestor(child, parent) {
            log::warn!("append_child: refusing to create a cycle");
            return;
        }

        if let Some(old_parent) = self.nodes[child.0].parent {
            let siblings = &mut self.nodes[old_parent.0].children;
            siblings.retain(|&c| c != child);
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// True when `ancestor` is on `node`'s parent chain.
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.nodes[node.0].parent;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    /// An element's tag name; `None` for text nodes.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].data {
            NodeData::Element(element) => Some(&element.tag),
            NodeData::Text(_) => None,
        }
    }

    /// An element's id attribute.
    pub fn id(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].data {
            NodeData::Element(element) => element.id.as_deref(),
            NodeData::Text(_) => None,
        }
    }

    /// A text node's content; `None` for elements.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].data {
            NodeData::Element(_) => None,
            NodeData::Text(text) => Some(text),
        }
    }

    /// Concatenated text of the node and all its descendants, in order.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].data {
            NodeData::Text(text) => out.push_str(text),
            NodeData::Element(_) => {
                for &child in &self.nodes[node.0].children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Set a style declaration on an element.
    ///
    /// Overwrites an existing declaration for the same property in place;
    /// otherwise appends. Ignored (with a log) on text nodes.
    pub fn set_style_property(&mut self, node: NodeId, name: &str, value: &str) {
        match &mut self.nodes[node.0].data {
            NodeData::Element(element) => {
                match element.style.iter_mut().find(|(n, _)| n == name) {
                    Some((_, v)) => *v = value.to_string(),
                    None => element.style.push((name.to_string(), value.to_string())),
                }
            }
            NodeData::Text(_) => {
                log::warn!("set_style_property: text nodes have no style");
            }
        }
    }

    /// Read back a style declaration.
    pub fn style_property(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[node.0].data {
            NodeData::Element(element) => element
                .style
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeData::Text(_) => None,
        }
    }

    /// First element matching `selector`, depth-first from the root.
    ///
    /// An unparseable selector matches nothing (logged at debug level).
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    /// All elements matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let compound = match parse_selector(selector) {
            Ok(compound) => compound,
            Err(err) => {
                log::debug!("query_selector: {err}");
                return Vec::new();
            }
        };

        let mut matches = Vec::new();
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            if let NodeData::Element(element) = &self.nodes[node.0].data {
                if compound.matches(&element.tag, element.id.as_deref(), &element.classes) {
                    matches.push(node);
                }
            }
            for &child in self.nodes[node.0].children.iter().rev() {
                stack.push(child);
            }
        }
        matches
    }

    /// Compact HTML-ish serialization of a subtree, for tests and debugging.
    pub fn html_of(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    /// Serialization of the whole document.
    pub fn html(&self) -> String {
        self.html_of(self.root)
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].data {
            NodeData::Text(text) => out.push_str(text),
            NodeData::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                if let Some(id) = &element.id {
                    out.push_str(&format!(" id=\"{id}\""));
                }
                if !element.classes.is_empty() {
                    out.push_str(&format!(" class=\"{}\"", element.classes.join(" ")));
                }
                if !element.style.is_empty() {
                    let style = element
                        .style
                        .iter()
                        .map(|(n, v)| format!("{n}: {v}"))
                        .collect::<Vec<_>>()
                        .join("; ");
                    out.push_str(&format!(" style=\"{style}\""));
                }
                out.push('>');
                for &child in &self.nodes[node.0].children {
                    self.write_html(child, out);
                }
                out.push_str(&format!("</{}>", element.tag));
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
