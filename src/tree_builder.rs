use std::collections::BTreeMap;

use ego_tree::{NodeId, NodeRef};
use scraper::node::{Element, Node};
use scraper::Html;

use crate::tokenizer::split_into_sentences;
use crate::tree::{inner_text_of, Tree, TreeNode};

/// Elements dropped together with their content.
const FILTERED_TAGS: &[&str] = &[
    "applet", "button", "code", "embed", "head", "iframe", "input", "math", "noscript", "object",
    "pre", "script", "select", "style", "svg", "template", "textarea",
];

/// Elements dropped together with their content when they carry one of these classes.
const FILTERED_CLASSES: &[&str] = &["yoast-reading-time__wrapper"];

/// Elements that are walked through as if their children belonged to the parent.
const TRANSPARENT_TAGS: &[&str] = &["html", "body", "form"];

/// Blocks that hold sentences when all of their content is inline.
const PARAGRAPH_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "dt", "dd", "blockquote", "figcaption",
    "caption", "td", "th",
];

/// Inline (phrasing) elements.
const PHRASING_TAGS: &[&str] = &[
    "a", "abbr", "area", "audio", "b", "bdi", "bdo", "big", "br", "cite", "data", "del", "dfn",
    "em", "font", "i", "img", "ins", "kbd", "label", "map", "mark", "meter", "output", "picture",
    "progress", "q", "s", "samp", "small", "source", "span", "strike", "strong", "sub", "sup",
    "time", "tt", "u", "var", "video", "wbr",
];

enum Kind {
    Skip,
    Transparent,
    Phrasing,
    Block,
}

fn classify(node: NodeRef<Node>) -> Kind {
    match node.value() {
        Node::Text(_) => Kind::Phrasing,
        Node::Element(el) => {
            let tag = el.name();
            if is_filtered(el) {
                Kind::Skip
            } else if TRANSPARENT_TAGS.contains(&tag) {
                Kind::Transparent
            } else if PHRASING_TAGS.contains(&tag) {
                Kind::Phrasing
            } else {
                Kind::Block
            }
        }
        Node::Document | Node::Fragment => Kind::Transparent,
        // Comments, doctypes, processing instructions
        _ => Kind::Skip,
    }
}

pub(crate) fn is_paragraph_tag(tag: &str) -> bool {
    PARAGRAPH_TAGS.contains(&tag)
}

fn is_filtered(el: &Element) -> bool {
    FILTERED_TAGS.contains(&el.name())
        || el.attr("class").is_some_and(|classes| {
            classes
                .split_whitespace()
                .any(|c| FILTERED_CLASSES.contains(&c))
        })
}

fn is_blank_text(node: NodeRef<Node>) -> bool {
    matches!(node.value(), Node::Text(t) if t.text.trim().is_empty())
}

fn attributes_of(el: &Element) -> BTreeMap<String, String> {
    el.attrs()
        .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
        .collect()
}

/// Walk state: the arena being filled.
struct Builder {
    tree: ego_tree::Tree<TreeNode>,
}

impl Builder {
    fn new() -> Self {
        Self {
            tree: ego_tree::Tree::new(TreeNode::root()),
        }
    }

    fn append(&mut self, parent: NodeId, value: TreeNode) -> Option<NodeId> {
        self.tree
            .get_mut(parent)
            .map(|mut node| node.append(value).id())
    }

    /// Append the children of a container, wrapping runs of inline content
    /// in implicit paragraphs.
    fn append_container_children(&mut self, source: NodeRef<Node>, parent: NodeId) {
        let mut run = Vec::new();
        for child in source.children() {
            match classify(child) {
                Kind::Skip => {}
                Kind::Phrasing => run.push(child),
                Kind::Transparent => {
                    self.flush_run(&mut run, parent);
                    self.append_container_children(child, parent);
                }
                Kind::Block => {
                    self.flush_run(&mut run, parent);
                    self.append_block(child, parent);
                }
            }
        }
        self.flush_run(&mut run, parent);
    }

    fn flush_run(&mut self, run: &mut Vec<NodeRef<Node>>, parent: NodeId) {
        let nodes = std::mem::take(run);
        if nodes.iter().all(|n| is_blank_text(*n)) {
            return;
        }
        let Some(id) = self.append(parent, TreeNode::implicit_paragraph()) else {
            return;
        };
        for node in nodes {
            self.append_inline(node, id);
        }
        self.attach_sentences(id);
    }

    fn append_block(&mut self, source: NodeRef<Node>, parent: NodeId) {
        let Node::Element(el) = source.value() else {
            return;
        };
        let Some(id) = self.append(parent, TreeNode::element(el.name(), attributes_of(el))) else {
            return;
        };
        let inline_only = source
            .children()
            .all(|c| matches!(classify(c), Kind::Phrasing | Kind::Skip));
        if is_paragraph_tag(el.name()) && inline_only {
            for child in source.children() {
                self.append_inline(child, id);
            }
            self.attach_sentences(id);
        } else {
            self.append_container_children(source, id);
        }
    }

    /// Copy an inline subtree as-is, minus filtered elements.
    fn append_inline(&mut self, source: NodeRef<Node>, parent: NodeId) {
        match source.value() {
            Node::Text(text) => {
                self.append(parent, TreeNode::text(text.text.as_ref()));
            }
            Node::Element(el) if !is_filtered(el) => {
                let Some(id) = self.append(parent, TreeNode::element(el.name(), attributes_of(el)))
                else {
                    return;
                };
                for child in source.children() {
                    self.append_inline(child, id);
                }
            }
            _ => {}
        }
    }

    fn attach_sentences(&mut self, id: NodeId) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        let text = inner_text_of(node);
        let sentences = split_into_sentences(&text);
        if let Some(mut node) = self.tree.get_mut(id) {
            node.value().sentences = sentences;
        }
    }
}

/// Parse an HTML fragment into a [`Tree`].
///
/// Filtered elements (scripts, styles, code, the reading time block and
/// similar) are dropped with their content. Inline content that sits
/// directly in a container is wrapped in an implicit `p` node, so every
/// piece of visible text belongs to exactly one sentence-bearing node.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(len = html.len())))]
pub fn build_tree(html: &str) -> Tree {
    let doc = Html::parse_fragment(html);
    let mut builder = Builder::new();
    let root = builder.tree.root().id();
    builder.append_container_children(doc.tree.root(), root);
    Tree::from_arena(builder.tree)
}
