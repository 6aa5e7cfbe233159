//! Pass 1: pairs contained in a single text leaf.

use log::debug;

use super::{InsertOptions, delimiter};
use crate::tree::{
    Node, text,
    walk::{self, Step},
};

pub fn run(tree: &mut Node, options: &InsertOptions) {
    walk::visit(tree, Node::is_text, |siblings, index| {
        split_pairs(siblings, index, options);
        Step::Continue
    });
}

/// Replaces the text leaf at `index` with its text and insertion segments.
///
/// Leaves the leaf untouched when it holds no pair.
fn split_pairs(siblings: &mut Vec<Node>, index: usize, options: &InsertOptions) {
    let Some(value) = siblings[index].as_text() else {
        return;
    };

    let mut segments = vec![];
    let mut text_start = 0;

    for pair in delimiter::pairs(value) {
        if pair.start() > text_start {
            segments.push(text(&value[text_start..pair.start()]));
        }
        let inner = pair.inner_text(value).unwrap_or_default().trim();
        segments.push(if inner.is_empty() {
            options.empty_marker()
        } else {
            options.insert(vec![text(inner)])
        });
        text_start = pair.end();
    }

    if segments.is_empty() {
        return;
    }
    if text_start < value.len() {
        segments.push(text(&value[text_start..]));
    }

    debug!(
        "split text leaf at {index} into {} segments",
        segments.len()
    );
    siblings.splice(index..=index, segments);
}
