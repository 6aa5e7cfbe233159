//! Pass 3: empty markers such as `++++` and `++ ++`.

use log::debug;

use super::{InsertOptions, delimiter};
use crate::tree::{
    Node, text,
    walk::{self, Step},
};

pub fn run(tree: &mut Node, options: &InsertOptions) {
    walk::visit(tree, Node::is_text, |siblings, index| {
        split_empty_pairs(siblings, index, options);
        Step::Continue
    });
}

fn split_empty_pairs(siblings: &mut Vec<Node>, index: usize, options: &InsertOptions) {
    let Some(value) = siblings[index].as_text() else {
        return;
    };
    if !delimiter::has_empty_pair(value) {
        return;
    }

    let mut segments = vec![];
    let mut text_start = 0;
    for pair in delimiter::empty_pairs(value) {
        if pair.start() > text_start {
            segments.push(text(&value[text_start..pair.start()]));
        }
        segments.push(options.empty_marker());
        text_start = pair.end();
    }
    if text_start < value.len() {
        segments.push(text(&value[text_start..]));
    }

    debug!(
        "split text leaf at {index} into {} segments around empty markers",
        segments.len()
    );
    siblings.splice(index..=index, segments);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_on(value: &str) -> Vec<Node> {
        let mut tree = Node::Paragraph {
            children: vec![text(value)],
        };
        run(&mut tree, &InsertOptions::default());
        tree.children().unwrap_or_default().to_vec()
    }

    fn marker() -> Node {
        InsertOptions::default().empty_marker()
    }

    #[test]
    fn bare_markers() {
        assert_eq!(run_on("++++"), vec![marker()]);
    }

    #[test]
    fn whitespace_only_content() {
        assert_eq!(run_on("++ ++"), vec![marker()]);
        assert_eq!(run_on("++   ++"), vec![marker()]);
    }

    #[test]
    fn markers_between_text() {
        assert_eq!(
            run_on("a++ ++a"),
            vec![text("a"), marker(), text("a")]
        );
    }

    #[test]
    fn several_markers() {
        assert_eq!(
            run_on("x ++++ y ++ ++"),
            vec![text("x "), marker(), text(" y "), marker()]
        );
    }

    #[test]
    fn content_is_not_an_empty_marker() {
        assert_eq!(run_on("++x++"), vec![text("++x++")]);
    }
}
