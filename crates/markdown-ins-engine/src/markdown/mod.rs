//! # Markdown Front End
//!
//! Builds a [`Node`] tree from markdown source using `pulldown-cmark`'s event
//! stream (CommonMark plus GFM tables and strikethrough).
//!
//! Adjacent text events and soft breaks are merged into one text leaf, so a
//! paragraph's plain text reaches the transform as a single value the way an
//! mdast parser would hand it over. Constructs without a tree variant
//! (footnotes, metadata blocks, ...) are unwrapped into their parent.

use log::trace;
use pulldown_cmark::{Alignment, CodeBlockKind, CowStr, Event, Options, Parser, Tag};

use crate::tree::{ColumnAlign, Node, text};

/// Parses `source` into a `Root` node.
pub fn parse(source: &str) -> Node {
    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(source, options()) {
        builder.push(event);
    }
    builder.finish()
}

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

/// A container waiting for its end event.
#[derive(Debug)]
enum Frame {
    Paragraph,
    Heading(u8),
    Blockquote,
    List(Option<u64>),
    Item,
    Table(Vec<ColumnAlign>),
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Delete,
    Link { url: String, title: Option<String> },
    Image { url: String, title: Option<String> },
    CodeBlock(Option<String>),
    HtmlBlock,
    Unwrapped,
}

impl Frame {
    fn from_tag(tag: Tag<'_>) -> Self {
        match tag {
            Tag::Paragraph => Frame::Paragraph,
            Tag::Heading { level, .. } => Frame::Heading(level as u8),
            Tag::BlockQuote(_) => Frame::Blockquote,
            Tag::CodeBlock(CodeBlockKind::Fenced(info)) => {
                Frame::CodeBlock(info.split_whitespace().next().map(str::to_string))
            }
            Tag::CodeBlock(CodeBlockKind::Indented) => Frame::CodeBlock(None),
            Tag::HtmlBlock => Frame::HtmlBlock,
            Tag::List(start) => Frame::List(start),
            Tag::Item => Frame::Item,
            Tag::Table(alignments) => {
                Frame::Table(alignments.into_iter().map(column_align).collect())
            }
            Tag::TableHead | Tag::TableRow => Frame::TableRow,
            Tag::TableCell => Frame::TableCell,
            Tag::Emphasis => Frame::Emphasis,
            Tag::Strong => Frame::Strong,
            Tag::Strikethrough => Frame::Delete,
            Tag::Link {
                dest_url, title, ..
            } => Frame::Link {
                url: dest_url.into_string(),
                title: non_empty(title),
            },
            Tag::Image {
                dest_url, title, ..
            } => Frame::Image {
                url: dest_url.into_string(),
                title: non_empty(title),
            },
            other => {
                trace!("unwrapping unsupported tag {other:?}");
                Frame::Unwrapped
            }
        }
    }

    fn into_node(self, children: Vec<Node>) -> Node {
        match self {
            Frame::Paragraph => Node::Paragraph { children },
            Frame::Heading(depth) => Node::Heading { depth, children },
            Frame::Blockquote => Node::Blockquote { children },
            Frame::List(start) => Node::List {
                ordered: start.is_some(),
                start,
                children,
            },
            Frame::Item => Node::ListItem { children },
            Frame::Table(align) => Node::Table { align, children },
            Frame::TableRow => Node::TableRow { children },
            Frame::TableCell => Node::TableCell { children },
            Frame::Emphasis => Node::Emphasis { children },
            Frame::Strong => Node::Strong { children },
            Frame::Delete => Node::Delete { children },
            Frame::Link { url, title } => Node::Link {
                url,
                title,
                children,
            },
            Frame::Image { url, title } => Node::Image {
                url,
                title,
                alt: Node::Paragraph { children }.text_content(),
            },
            Frame::CodeBlock(lang) => Node::Code {
                lang,
                value: concat_values(&children),
            },
            Frame::HtmlBlock => Node::Html {
                value: concat_values(&children),
            },
            // Handled by the builder, which splices the children into the parent.
            Frame::Unwrapped => Node::Root { children },
        }
    }
}

fn column_align(alignment: Alignment) -> ColumnAlign {
    match alignment {
        Alignment::None => ColumnAlign::None,
        Alignment::Left => ColumnAlign::Left,
        Alignment::Center => ColumnAlign::Center,
        Alignment::Right => ColumnAlign::Right,
    }
}

fn non_empty(value: CowStr<'_>) -> Option<String> {
    (!value.is_empty()).then(|| value.into_string())
}

fn concat_values(children: &[Node]) -> String {
    children
        .iter()
        .filter_map(|child| match child {
            Node::Text { value } | Node::Html { value } => Some(value.as_str()),
            _ => None,
        })
        .collect()
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    stack: Vec<(Frame, Vec<Node>)>,
}

impl TreeBuilder {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.stack.push((Frame::from_tag(tag), vec![])),
            Event::End(_) => self.close(),
            Event::Text(value) => self.push_text(&value),
            Event::SoftBreak => self.push_text("\n"),
            Event::HardBreak => self.push_node(Node::Break),
            Event::Code(value) => self.push_node(Node::InlineCode {
                value: value.into_string(),
            }),
            Event::Html(value) | Event::InlineHtml(value) => self.push_node(Node::Html {
                value: value.into_string(),
            }),
            Event::Rule => self.push_node(Node::ThematicBreak),
            other => trace!("skipping unsupported event {other:?}"),
        }
    }

    fn finish(mut self) -> Node {
        // Unbalanced input cannot come out of pulldown-cmark, but close anything left.
        while !self.stack.is_empty() {
            self.close();
        }
        Node::Root {
            children: self.root,
        }
    }

    fn current(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some((_, children)) => children,
            None => &mut self.root,
        }
    }

    fn close(&mut self) {
        let Some((frame, children)) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Unwrapped => {
                for child in children {
                    self.push_node(child);
                }
            }
            frame => {
                let node = frame.into_node(children);
                self.push_node(node);
            }
        }
    }

    fn push_text(&mut self, value: &str) {
        let children = self.current();
        if let Some(Node::Text { value: last }) = children.last_mut() {
            last.push_str(value);
        } else {
            children.push(text(value));
        }
    }

    fn push_node(&mut self, node: Node) {
        match node {
            Node::Text { value } => self.push_text(&value),
            node => self.current().push(node),
        }
    }
}
