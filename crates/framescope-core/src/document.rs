//! Meta-tag query layer over a tree-sitter HTML parse.
//!
//! The document is parsed once, every `<meta>` element is collected in
//! document order, and queries then run against the collected tags. Both the
//! `property` and `name` attribute conventions are folded into a single notion
//! of a declaration *key* here so nothing downstream has to care which one a
//! page used.
//!
//! Parsing never fails: tree-sitter recovers from malformed markup and tags
//! found inside error nodes are still collected. Markup inside `<title>` and
//! `<textarea>` is text, as in an HTML5 tokenizer, and is never searched.
//! Attribute values are unescaped with the full HTML5 named reference table.

use tracing::{debug, warn};
use tree_sitter::{Node, Parser};

/// Attributes that carry a declaration key.
const KEY_ATTRIBUTES: [&str; 2] = ["property", "name"];

/// Elements whose content is text only.
const TEXT_ONLY_ELEMENTS: [&str; 2] = ["title", "textarea"];

/// A single `<meta>` element and its attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTag {
    attributes: Vec<(String, String)>,
}

impl MetaTag {
    /// Build a tag from attribute pairs. Names are lowercased and the first
    /// occurrence of a repeated attribute wins, as in HTML.
    pub fn from_attributes<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut tag = Self::default();
        for (name, value) in attributes {
            let name = name.as_ref().to_ascii_lowercase();
            if tag.attributes.iter().all(|(existing, _)| *existing != name) {
                tag.attributes.push((name, value.into()));
            }
        }
        tag
    }

    /// Look up an attribute value by (case-insensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in source order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn content(&self) -> Option<&str> {
        self.attr("content")
    }

    /// Values of the key-bearing attributes present on this tag.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        KEY_ATTRIBUTES.into_iter().filter_map(move |attr| self.attr(attr))
    }

    /// The key this tag declares: `name` when non-empty, otherwise `property`.
    pub fn declared_key(&self) -> Option<&str> {
        self.attr("name")
            .filter(|name| !name.is_empty())
            .or_else(|| self.attr("property"))
    }
}

/// Predicate over declaration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern<'a> {
    Exact(&'a str),
    Prefix(&'a str),
    PrefixWithoutSuffix { prefix: &'a str, suffix: &'a str },
    PrefixAndSuffix { prefix: &'a str, suffix: &'a str },
}

impl KeyPattern<'_> {
    pub fn matches(&self, key: &str) -> bool {
        match *self {
            Self::Exact(expected) => key == expected,
            Self::Prefix(prefix) => key.starts_with(prefix),
            Self::PrefixWithoutSuffix { prefix, suffix } => {
                key.starts_with(prefix) && !key.ends_with(suffix)
            }
            Self::PrefixAndSuffix { prefix, suffix } => {
                key.starts_with(prefix) && key.ends_with(suffix)
            }
        }
    }
}

/// All `<meta>` elements of an HTML document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaDocument {
    tags: Vec<MetaTag>,
}

impl MetaDocument {
    /// Parse markup and collect its meta tags.
    pub fn parse(html: &str) -> Self {
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&tree_sitter_html::LANGUAGE.into()) {
            warn!("Failed to load HTML grammar: {}", e);
            return Self::default();
        }

        let Some(tree) = parser.parse(html, None) else {
            warn!("HTML parser returned no tree");
            return Self::default();
        };

        let source = html.as_bytes();
        let mut tags = Vec::new();
        let mut cursor = tree.walk();

        // Pre-order walk without recursion so deep nesting cannot blow the stack.
        'walk: loop {
            let node = cursor.node();
            let descend = match node.kind() {
                "start_tag" | "self_closing_tag" => {
                    if let Some(tag) = meta_tag_from_node(node, source) {
                        tags.push(tag);
                    }
                    false
                }
                "element" => !is_text_only_element(node, source),
                _ => true,
            };
            if descend && cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    continue 'walk;
                }
                if !cursor.goto_parent() {
                    break 'walk;
                }
            }
        }

        debug!(count = tags.len(), has_error = tree.root_node().has_error(), "Collected meta tags");
        Self { tags }
    }

    pub fn from_tags(tags: Vec<MetaTag>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[MetaTag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags with at least one key matching `pattern`, in document order.
    /// A tag matching through both `property` and `name` is yielded once.
    pub fn select<'p>(&self, pattern: KeyPattern<'p>) -> impl Iterator<Item = &MetaTag> {
        self.tags
            .iter()
            .filter(move |tag| tag.keys().any(|key| pattern.matches(key)))
    }
}

fn is_text_only_element(node: Node<'_>, source: &[u8]) -> bool {
    let mut cursor = node.walk();
    let Some(start) = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "start_tag")
    else {
        return false;
    };

    let mut inner = start.walk();
    let is_text_only = start
        .named_children(&mut inner)
        .find(|child| child.kind() == "tag_name")
        .is_some_and(|name| {
            let name = node_text(name, source);
            TEXT_ONLY_ELEMENTS.iter().any(|t| name.eq_ignore_ascii_case(t))
        });
    is_text_only
}

fn meta_tag_from_node(node: Node<'_>, source: &[u8]) -> Option<MetaTag> {
    let mut is_meta = false;
    let mut attributes = Vec::new();

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "tag_name" => is_meta = node_text(child, source).eq_ignore_ascii_case("meta"),
            "attribute" => attributes.extend(attribute_pair(child, source)),
            _ => {}
        }
    }

    is_meta.then(|| MetaTag::from_attributes(attributes))
}

fn attribute_pair(node: Node<'_>, source: &[u8]) -> Option<(String, String)> {
    let mut name = None;
    let mut value = String::new();

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "attribute_name" => name = Some(node_text(child, source)),
            "attribute_value" => value = unescape_value(node_text(child, source)),
            "quoted_attribute_value" => {
                // `content=""` has no inner value node at all.
                let mut inner = child.walk();
                value = child
                    .named_children(&mut inner)
                    .find(|n| n.kind() == "attribute_value")
                    .map(|n| unescape_value(node_text(n, source)))
                    .unwrap_or_default();
            }
            _ => {}
        }
    }

    Some((name?.to_string(), value))
}

fn unescape_value(raw: &str) -> String {
    htmlize::unescape_attribute(raw).into_owned()
}

fn node_text<'s>(node: Node<'_>, source: &'s [u8]) -> &'s str {
    node.utf8_text(source).unwrap_or_default()
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
