//! # Document Tree
//!
//! An mdast-shaped syntax tree: the markdown front end produces it, the insert
//! transform rewrites it in place and the HTML renderer consumes it.
//!
//! ## Modules
//!
//! - **`walk`**: `visit()` over nodes matching a predicate, with revisit support,
//!   plus sibling helpers (`find_after`, `find_before`, `split_around`)
//!
//! ## Shape
//!
//! Container variants own their `children`; leaves carry a `value`. Only the
//! insert transform introduces [`Node::Insert`], which carries a [`RenderHint`]
//! the renderer reads without knowing where it came from.

pub mod walk;

use serde::Serialize;

/// Column alignment of a table, one entry per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnAlign {
    None,
    Left,
    Center,
    Right,
}

/// Renderer hint attached to an insertion node: target element and classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderHint {
    pub tag_name: String,
    pub class_names: Vec<String>,
}

/// An inserted-text span, the node produced from `++text++`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insert {
    pub children: Vec<Node>,
    pub hint: RenderHint,
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Root {
        children: Vec<Node>,
    },
    Paragraph {
        children: Vec<Node>,
    },
    Heading {
        depth: u8,
        children: Vec<Node>,
    },
    Blockquote {
        children: Vec<Node>,
    },
    List {
        ordered: bool,
        start: Option<u64>,
        children: Vec<Node>,
    },
    ListItem {
        children: Vec<Node>,
    },
    /// The first row is the header row.
    Table {
        align: Vec<ColumnAlign>,
        children: Vec<Node>,
    },
    TableRow {
        children: Vec<Node>,
    },
    TableCell {
        children: Vec<Node>,
    },
    Code {
        lang: Option<String>,
        value: String,
    },
    Html {
        value: String,
    },
    ThematicBreak,
    Text {
        value: String,
    },
    Emphasis {
        children: Vec<Node>,
    },
    Strong {
        children: Vec<Node>,
    },
    Delete {
        children: Vec<Node>,
    },
    Link {
        url: String,
        title: Option<String>,
        children: Vec<Node>,
    },
    Image {
        url: String,
        title: Option<String>,
        alt: String,
    },
    InlineCode {
        value: String,
    },
    Break,
    Insert(Insert),
}

/// Builds a plain text leaf.
pub fn text(value: impl Into<String>) -> Node {
    Node::Text {
        value: value.into(),
    }
}

impl Node {
    /// Child nodes of a container, `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Blockquote { children }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Table { children, .. }
            | Node::TableRow { children }
            | Node::TableCell { children }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::Link { children, .. }
            | Node::Insert(Insert { children, .. }) => Some(children),
            Node::Code { .. }
            | Node::Html { .. }
            | Node::ThematicBreak
            | Node::Text { .. }
            | Node::Image { .. }
            | Node::InlineCode { .. }
            | Node::Break => None,
        }
    }

    /// Mutable child vector of a container, `None` for leaves.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Blockquote { children }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Table { children, .. }
            | Node::TableRow { children }
            | Node::TableCell { children }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::Link { children, .. }
            | Node::Insert(Insert { children, .. }) => Some(children),
            Node::Code { .. }
            | Node::Html { .. }
            | Node::ThematicBreak
            | Node::Text { .. }
            | Node::Image { .. }
            | Node::InlineCode { .. }
            | Node::Break => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text { .. })
    }

    /// The value of a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text { value } => Some(value),
            _ => None,
        }
    }

    /// Consumes a text leaf and returns its value.
    pub fn into_text(self) -> Option<String> {
        match self {
            Node::Text { value } => Some(value),
            _ => None,
        }
    }

    pub fn as_insert(&self) -> Option<&Insert> {
        match self {
            Node::Insert(insert) => Some(insert),
            _ => None,
        }
    }

    /// Concatenated literal content of the subtree, in document order.
    ///
    /// Text, inline code, code and image alt text contribute; markup does not.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { value } | Node::InlineCode { value } | Node::Code { value, .. } => {
                out.push_str(value)
            }
            Node::Image { alt, .. } => out.push_str(alt),
            _ => {
                for child in self.children().unwrap_or_default() {
                    child.collect_text(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint() -> RenderHint {
        RenderHint {
            tag_name: "ins".into(),
            class_names: vec!["remark-ins".into()],
        }
    }

    #[test]
    fn text_builder_makes_leaf() {
        let node = text("hello");
        assert!(node.is_text());
        assert_eq!(node.as_text(), Some("hello"));
        assert!(node.children().is_none());
    }

    #[test]
    fn containers_expose_children() {
        let mut node = Node::Strong {
            children: vec![text("a")],
        };
        assert_eq!(node.children().map(<[Node]>::len), Some(1));

        node.children_mut().unwrap().push(text("b"));
        assert_eq!(node.text_content(), "ab");
    }

    #[test]
    fn insert_is_a_container() {
        let node = Node::Insert(Insert {
            children: vec![text("x")],
            hint: hint(),
        });
        assert_eq!(node.children().map(<[Node]>::len), Some(1));
        assert!(node.as_insert().is_some());
        assert!(!node.is_text());
    }

    #[test]
    fn text_content_walks_nested_markup() {
        let node = Node::Paragraph {
            children: vec![
                text("a "),
                Node::Emphasis {
                    children: vec![text("b")],
                },
                Node::InlineCode { value: "c".into() },
                Node::Image {
                    url: "u".into(),
                    title: None,
                    alt: "d".into(),
                },
            ],
        };
        assert_eq!(node.text_content(), "a bcd");
    }

    #[test]
    fn into_text_only_for_text() {
        assert_eq!(text("v").into_text(), Some("v".to_string()));
        assert_eq!(Node::Break.into_text(), None);
    }
}
