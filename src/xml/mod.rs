//! In-memory XML tree
//!
//! Nodes live in a per-document arena and are addressed by [`NodeId`].
//! Moving a subtree between documents is a deep copy ([`Document::import`]),
//! so the source and destination never share nodes.

mod parse;
mod write;

pub use parse::{MAX_DEPTH, ParseError};

/// Handle to a node inside one [`Document`]
///
/// Ids are only meaningful for the document that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// An element: tag name plus attributes in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, prefix included
    pub name: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    /// Create an element with no attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Look up an attribute value
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.attributes.push((key.to_string(), value));
        }
    }

    /// Attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Payload of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// `<name ...>`
    Element(Element),
    /// Character data, unescaped
    Text(String),
    /// `<![CDATA[...]]>` content
    CData(String),
    /// `<!--...-->` content
    Comment(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    children: Vec<NodeId>,
}

/// An XML document with a single root element
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document whose root is a fresh element named `name`
    pub fn with_root(name: &str) -> Self {
        let mut doc = Self::new();
        let root = doc.create_element(name);
        doc.root = Some(root);
        doc
    }

    /// Parse UTF-8 XML text
    pub fn parse_str(text: &str) -> Result<Self, ParseError> {
        parse::parse_str(text)
    }

    /// The root element, if one has been set
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) const fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Allocate a detached node
    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
        });
        id
    }

    /// Allocate a detached element
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.create_node(NodeKind::Element(Element::new(name)))
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
    }

    /// Children of a node, in order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Payload of a node
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    /// The element behind `id`, or `None` for text-like nodes
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Mutable access to the element behind `id`
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Direct child elements of `parent` named `name`
    pub fn child_elements<'a>(
        &'a self,
        parent: NodeId,
        name: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(parent)
            .iter()
            .copied()
            .filter(move |&id| self.element(id).is_some_and(|e| e.name == name))
    }

    /// Deep-copy the subtree at `source_id` of `source` into this document.
    ///
    /// The copy is detached; attach it with [`Document::append_child`].
    pub fn import(&mut self, source: &Self, source_id: NodeId) -> NodeId {
        let id = self.create_node(source.kind(source_id).clone());
        for &child in source.children(source_id) {
            let copied = self.import(source, child);
            self.append_child(id, copied);
        }
        id
    }
}
