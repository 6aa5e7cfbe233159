//! # HTML Rendering
//!
//! Serializes a [`Node`] tree to HTML. Text and attribute values go through
//! `html-escape`; raw `Html` nodes are written verbatim.
//!
//! Insertion nodes are rendered from their [`RenderHint`] alone, so the
//! renderer has no knowledge of the `++` syntax.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::tree::{ColumnAlign, Insert, Node, RenderHint};

/// Renders `tree` to an HTML string, one block element per line.
pub fn render(tree: &Node) -> String {
    let mut out = String::new();
    Renderer::default().node(tree, &mut out);
    out
}

#[derive(Default)]
struct Renderer {
    /// Column alignments of the table being rendered.
    align: Vec<ColumnAlign>,
    /// Whether the row being rendered is the header row.
    header_row: bool,
    /// Column of the next cell.
    cell: usize,
}

impl Renderer {
    fn children(&mut self, children: &[Node], out: &mut String) {
        for child in children {
            self.node(child, out);
        }
    }

    fn wrap(&mut self, tag: &str, children: &[Node], out: &mut String) {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        self.children(children, out);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    fn node(&mut self, node: &Node, out: &mut String) {
        match node {
            Node::Root { children } => self.children(children, out),
            Node::Paragraph { children } => {
                self.wrap("p", children, out);
                out.push('\n');
            }
            Node::Heading { depth, children } => {
                self.wrap(&format!("h{depth}"), children, out);
                out.push('\n');
            }
            Node::Blockquote { children } => {
                out.push_str("<blockquote>\n");
                self.children(children, out);
                out.push_str("</blockquote>\n");
            }
            Node::List {
                ordered,
                start,
                children,
            } => {
                let tag = if *ordered { "ol" } else { "ul" };
                match start {
                    Some(n) if *ordered && *n != 1 => out.push_str(&format!("<ol start=\"{n}\">\n")),
                    _ => out.push_str(&format!("<{tag}>\n")),
                }
                self.children(children, out);
                out.push_str(&format!("</{tag}>\n"));
            }
            Node::ListItem { children } => {
                self.wrap("li", children, out);
                out.push('\n');
            }
            Node::Table { align, children } => self.table(align, children, out),
            Node::TableRow { children } => {
                out.push_str("<tr>\n");
                self.cell = 0;
                self.children(children, out);
                out.push_str("</tr>\n");
            }
            Node::TableCell { children } => {
                let tag = if self.header_row { "th" } else { "td" };
                out.push('<');
                out.push_str(tag);
                match self.align.get(self.cell) {
                    Some(ColumnAlign::Left) => out.push_str(" style=\"text-align: left\""),
                    Some(ColumnAlign::Center) => out.push_str(" style=\"text-align: center\""),
                    Some(ColumnAlign::Right) => out.push_str(" style=\"text-align: right\""),
                    Some(ColumnAlign::None) | None => {}
                }
                out.push('>');
                self.children(children, out);
                out.push_str(&format!("</{tag}>\n"));
                self.cell += 1;
            }
            Node::Code { lang, value } => {
                match lang {
                    Some(lang) => out.push_str(&format!(
                        "<pre><code class=\"language-{}\">",
                        encode_double_quoted_attribute(lang)
                    )),
                    None => out.push_str("<pre><code>"),
                }
                out.push_str(&encode_text(value));
                out.push_str("</code></pre>\n");
            }
            Node::Html { value } => out.push_str(value),
            Node::ThematicBreak => out.push_str("<hr />\n"),
            Node::Text { value } => out.push_str(&encode_text(value)),
            Node::Emphasis { children } => self.wrap("em", children, out),
            Node::Strong { children } => self.wrap("strong", children, out),
            Node::Delete { children } => self.wrap("del", children, out),
            Node::Link {
                url,
                title,
                children,
            } => {
                out.push_str("<a href=\"");
                out.push_str(&encode_double_quoted_attribute(url));
                out.push('"');
                if let Some(title) = title {
                    out.push_str(" title=\"");
                    out.push_str(&encode_double_quoted_attribute(title));
                    out.push('"');
                }
                out.push('>');
                self.children(children, out);
                out.push_str("</a>");
            }
            Node::Image { url, title, alt } => {
                out.push_str("<img src=\"");
                out.push_str(&encode_double_quoted_attribute(url));
                out.push_str("\" alt=\"");
                out.push_str(&encode_double_quoted_attribute(alt));
                out.push('"');
                if let Some(title) = title {
                    out.push_str(" title=\"");
                    out.push_str(&encode_double_quoted_attribute(title));
                    out.push('"');
                }
                out.push_str(" />");
            }
            Node::InlineCode { value } => {
                out.push_str("<code>");
                out.push_str(&encode_text(value));
                out.push_str("</code>");
            }
            Node::Break => out.push_str("<br />\n"),
            Node::Insert(insert) => self.insert(insert, out),
        }
    }

    fn table(&mut self, align: &[ColumnAlign], rows: &[Node], out: &mut String) {
        let outer = std::mem::replace(&mut self.align, align.to_vec());
        out.push_str("<table>\n");

        if let Some((head, body)) = rows.split_first() {
            out.push_str("<thead>\n");
            self.header_row = true;
            self.node(head, out);
            self.header_row = false;
            out.push_str("</thead>\n");

            if !body.is_empty() {
                out.push_str("<tbody>\n");
                self.children(body, out);
                out.push_str("</tbody>\n");
            }
        }

        out.push_str("</table>\n");
        self.align = outer;
    }

    fn insert(&mut self, insert: &Insert, out: &mut String) {
        let RenderHint {
            tag_name,
            class_names,
        } = &insert.hint;

        out.push('<');
        out.push_str(tag_name);
        if !class_names.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&encode_double_quoted_attribute(&class_names.join(" ")));
            out.push('"');
        }
        out.push('>');
        self.children(&insert.children, out);
        out.push_str("</");
        out.push_str(tag_name);
        out.push('>');
    }
}
