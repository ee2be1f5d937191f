//! Generic syntax tree shared by the source and target dialects.
//!
//! A [`SyntaxNode`] is a label drawn from one grammar's node-kind vocabulary,
//! a set of string attributes and an ordered list of children. Each node is
//! owned by its parent, so a tree is acyclic by construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// A labelled node with attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    kind: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a detached node with no attributes or children.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns true if this node carries the given kind label.
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Creates a new node of `kind` as the last child and returns it.
    pub fn add_child(&mut self, kind: impl Into<String>) -> &mut SyntaxNode {
        self.children.push(SyntaxNode::new(kind));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Appends an already built subtree as the last child.
    pub fn push_child(&mut self, child: SyntaxNode) -> &mut SyntaxNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Iterates over all attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    pub fn first_child(&self) -> Option<&SyntaxNode> {
        self.children.first()
    }

    /// Finds the first descendant of `kind` in depth-first pre-order.
    ///
    /// The node itself is not considered.
    pub fn find_descendant(&self, kind: &str) -> Option<&SyntaxNode> {
        for child in &self.children {
            if child.is(kind) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(kind) {
                return Some(found);
            }
        }
        None
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style child appender.
    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    /// Renders the subtree as an indented outline, one node per line.
    ///
    /// Attributes follow the kind as `name=value` pairs in name order:
    ///
    /// ```text
    /// over-expression
    ///   simple-identifier text=FIRST_VALUE value=FIRST_VALUE
    /// ```
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        if depth > 0 {
            out.push('\n');
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&self.kind);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}={value}");
        }
        for child in &self.children {
            child.write_outline(out, depth + 1);
        }
    }
}
