//! Vector scene graph and node factory.
//!
//! Nodes form a small SVG-shaped tree: an element kind, ordered attributes,
//! class tags, optional text content and children. Output goes through the
//! `svg` crate's element types.

use std::fmt;
use svg::node::element::Element;
use svg::node::Text as TextNode;
use svg::{Document, Node as SvgNode};

/// SVG namespace set on every `svg` element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Identity of a node, unique among nodes created by one factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Kinds of vector elements the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Svg,
    Group,
    Path,
    Circle,
    Text,
}

impl NodeKind {
    /// SVG tag name.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Svg => "svg",
            NodeKind::Group => "g",
            NodeKind::Path => "path",
            NodeKind::Circle => "circle",
            NodeKind::Text => "text",
        }
    }
}

/// A node of the scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    text: Option<String>,
    children: Vec<Node>,
}

impl Node {
    fn new(id: NodeId, kind: NodeKind) -> Self {
        let mut node = Self {
            id,
            kind,
            attributes: Vec::new(),
            classes: Vec::new(),
            text: None,
            children: Vec::new(),
        };
        if kind == NodeKind::Svg {
            node.set_attribute("xmlns", SVG_NAMESPACE);
        }
        node
    }

    /// Factory-assigned identity.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Element kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Set an attribute, replacing any previous value in place.
    pub fn set_attribute(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Add a class tag. Adding an existing tag is a no-op.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Check whether the node carries a class tag.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Class tags in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Append `child` after the existing children.
    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Children in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Replace all children with `child`.
    pub(crate) fn replace_children(&mut self, child: Node) {
        self.children.clear();
        self.children.push(child);
    }

    pub(crate) fn last_child_mut(&mut self) -> Option<&mut Node> {
        self.children.last_mut()
    }

    /// Find the first child with the given class.
    pub fn child_with_class(&self, class: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.has_class(class))
    }
}

impl Node {
    /// Copy classes, attributes, text and children onto an `svg` node.
    fn write_into<N: SvgNode>(&self, target: &mut N) {
        if !self.classes.is_empty() {
            target.assign("class", self.classes.join(" "));
        }
        for (name, value) in &self.attributes {
            target.assign(name.as_str(), value.as_str());
        }
        if let Some(text) = &self.text {
            target.append(TextNode::new(text.as_str()));
        }
        for child in &self.children {
            target.append(child.to_element());
        }
    }

    /// Convert the subtree into an `svg` element for output.
    pub fn to_element(&self) -> Element {
        let mut element = Element::new(self.kind.tag());
        self.write_into(&mut element);
        element
    }

    /// Convert the subtree into a standalone `svg` document.
    ///
    /// Nodes that are not `svg` elements are wrapped in one.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        if self.kind == NodeKind::Svg {
            self.write_into(&mut document);
        } else {
            document.append(self.to_element());
        }
        document
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_element(), f)
    }
}

/// Creates scene nodes.
///
/// Renderers own a factory so geometry and glyph code can be exercised
/// without a live rendering surface.
pub trait NodeFactory {
    /// Allocate the identity for the next node.
    fn next_id(&mut self) -> NodeId;

    /// Create an empty node of the given kind.
    fn create_node(&mut self, kind: NodeKind) -> Node {
        Node::new(self.next_id(), kind)
    }
}

/// Factory handing out increasing node IDs.
#[derive(Debug, Default)]
pub struct SequentialNodeFactory {
    next: u64,
}

impl SequentialNodeFactory {
    /// Create a factory starting at ID 0.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NodeFactory for SequentialNodeFactory {
    fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}
