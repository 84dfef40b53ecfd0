use std::collections::BTreeMap;
use std::fmt;

use ego_tree::NodeRef;

use crate::tokenizer::Sentence;

/// Name of the root node.
pub const ROOT_NAME: &str = "#root";
/// Name of text nodes.
pub const TEXT_NAME: &str = "#text";

/// Data held by each node of a [`Tree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct TreeNode {
    /// Lowercase tag name, [`ROOT_NAME`] or [`TEXT_NAME`].
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    /// Content of a text node; empty for elements.
    pub text: String,
    /// Sentences of a paragraph-level node; empty elsewhere.
    pub sentences: Vec<Sentence>,
    /// True for paragraphs synthesized around loose inline content.
    pub is_implicit: bool,
}

impl TreeNode {
    pub(crate) fn root() -> Self {
        Self {
            name: ROOT_NAME.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn element(name: &str, attributes: BTreeMap<String, String>) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attributes,
            ..Default::default()
        }
    }

    pub(crate) fn text(text: &str) -> Self {
        Self {
            name: TEXT_NAME.to_string(),
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn implicit_paragraph() -> Self {
        Self {
            name: "p".to_string(),
            is_implicit: true,
            ..Default::default()
        }
    }
}

/// Structural view of an HTML document: an arena of [`TreeNode`]s.
///
/// Parent links are arena indices, so nodes can be walked both ways
/// without reference cycles. Build one with
/// [`build_tree`](crate::tree_builder::build_tree).
pub struct Tree {
    inner: ego_tree::Tree<TreeNode>,
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.inner.values().count())
            .finish()
    }
}

impl Tree {
    pub(crate) fn from_arena(inner: ego_tree::Tree<TreeNode>) -> Self {
        Self { inner }
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            inner: self.inner.root(),
        }
    }

    /// All nodes matching `predicate`, in document (pre-order) order.
    pub fn find_all(&self, predicate: impl Fn(&Node<'_>) -> bool) -> Vec<Node<'_>> {
        self.root().find_all(predicate)
    }

    /// Paragraph nodes, explicit and implicit.
    pub fn paragraphs(&self) -> Vec<Node<'_>> {
        self.find_all(|n| n.name() == "p")
    }

    /// Heading nodes `h1` to `h6`.
    pub fn headings(&self) -> Vec<Node<'_>> {
        self.find_all(|n| n.heading_level().is_some())
    }

    /// Every sentence in the document, in document order.
    pub fn sentences(&self) -> Vec<&Sentence> {
        self.root()
            .descendants()
            .flat_map(|n| n.sentences().iter())
            .collect()
    }
}

/// A borrowed handle to one node of a [`Tree`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    inner: NodeRef<'a, TreeNode>,
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name())
            .field("attributes", self.attributes())
            .finish()
    }
}

impl<'a> Node<'a> {
    pub fn value(&self) -> &'a TreeNode {
        self.inner.value()
    }

    pub fn name(&self) -> &'a str {
        &self.value().name
    }

    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.value().attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> &'a BTreeMap<String, String> {
        &self.value().attributes
    }

    pub fn sentences(&self) -> &'a [Sentence] {
        &self.value().sentences
    }

    pub fn is_implicit(&self) -> bool {
        self.value().is_implicit
    }

    pub fn is_text(&self) -> bool {
        self.name() == TEXT_NAME
    }

    /// Returns true for elements that hold sentences.
    pub fn is_block(&self) -> bool {
        !self.sentences().is_empty()
            || self.is_implicit()
            || crate::tree_builder::is_paragraph_tag(self.name())
    }

    /// Level of a heading element (`h2` is 2), or `None`.
    pub fn heading_level(&self) -> Option<u8> {
        match self.name().as_bytes() {
            [b'h', d @ b'1'..=b'6'] => Some(d - b'0'),
            _ => None,
        }
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.inner.parent().map(|inner| Node { inner })
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.inner.children().map(|inner| Node { inner })
    }

    /// This node and all nodes below it, pre-order.
    pub fn descendants(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.inner.descendants().map(|inner| Node { inner })
    }

    pub fn find_all(&self, predicate: impl Fn(&Node<'a>) -> bool) -> Vec<Node<'a>> {
        self.descendants().filter(|n| predicate(n)).collect()
    }

    /// Concatenated text of all text nodes below this one. `br` yields a newline.
    pub fn inner_text(&self) -> String {
        inner_text_of(self.inner)
    }
}

pub(crate) fn inner_text_of(node: NodeRef<'_, TreeNode>) -> String {
    let mut out = String::new();
    for node in node.descendants() {
        let value = node.value();
        if value.name == TEXT_NAME {
            out.push_str(&value.text);
        } else if value.name == "br" {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree_builder::build_tree;

    #[test]
    fn test_heading_level() {
        let tree = build_tree("<h2>Title</h2><h7>no</h7><p>text</p>");
        let headings = tree.headings();
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].heading_level(), Some(2));
    }

    #[test]
    fn test_parent_links() {
        let tree = build_tree("<div><p>One <a href='x'>link</a></p></div>");
        let anchors = tree.find_all(|n| n.name() == "a");
        assert_eq!(anchors.len(), 1);
        let parent = anchors[0].parent().unwrap();
        assert_eq!(parent.name(), "p");
        assert_eq!(parent.parent().unwrap().name(), "div");
        assert_eq!(anchors[0].attribute("href"), Some("x"));
    }

    #[test]
    fn test_inner_text() {
        let tree = build_tree("<p>One<br>two <b>three</b></p>");
        assert_eq!(tree.paragraphs()[0].inner_text(), "One\ntwo three");
    }

    #[test]
    fn test_sentences_in_document_order() {
        let tree = build_tree("<h1>Head.</h1><p>First. Second.</p><ul><li>Item.</li></ul>");
        let texts: Vec<&str> = tree.sentences().iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Head.", "First.", " Second.", "Item."]);
    }
}
