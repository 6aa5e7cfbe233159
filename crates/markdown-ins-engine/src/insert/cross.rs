//! Pass 2: an opening marker closed in a later text sibling.
//!
//! Given `++a **b** c++` as three siblings, the opening text, the closing text
//! and everything between them collapse into one insertion:
//!
//! ```text
//! [text "++a ", strong, text " c++"]  ->  [insert [text "a ", strong, text " c"]]
//! ```
//!
//! After each rewrite the walker revisits the same index, so insertions built
//! here are walked again and can resolve markers nested inside them.

use std::mem;

use log::{debug, trace};

use super::{InsertOptions, delimiter};
use crate::tree::{
    Node, text,
    walk::{self, Segments, Step},
};

pub fn run(tree: &mut Node, options: &InsertOptions) {
    walk::visit(tree, Node::is_text, |siblings, index| {
        if absorb_until_closing(siblings, index, options) {
            Step::Revisit(index)
        } else {
            Step::Continue
        }
    });
}

fn has_closing(node: &Node) -> bool {
    node.as_text()
        .is_some_and(|value| delimiter::find_closing(value).is_some())
}

/// Rewrites `siblings` around the opening text at `index`.
///
/// Returns false, leaving `siblings` as they were, when the leaf has no opening
/// marker or no later text sibling closes it.
fn absorb_until_closing(siblings: &mut Vec<Node>, index: usize, options: &InsertOptions) -> bool {
    let Some(opening) = siblings[index].as_text().and_then(delimiter::find_opening) else {
        return false;
    };
    let Some(close_index) = walk::find_after(siblings, index, has_closing) else {
        trace!("opening marker at sibling {index} never closes");
        return false;
    };
    let Some(Segments {
        mut before,
        opening: opening_node,
        between: mut main,
        closing: closing_node,
        mut after,
    }) = walk::split_around(mem::take(siblings), index, close_index)
    else {
        return false;
    };

    let opening_value = opening_node.into_text().unwrap_or_default();
    if opening.start() > 0 {
        before.push(text(&opening_value[..opening.start()]));
    }
    if opening.end() < opening_value.len() {
        main.insert(0, text(&opening_value[opening.end()..]));
    }

    let closing_value = closing_node.into_text().unwrap_or_default();
    if let Some(closing) = delimiter::find_closing(&closing_value) {
        if closing.start() > 0 {
            main.push(text(&closing_value[..closing.start()]));
        }
        if closing.end() < closing_value.len() {
            after.insert(0, text(&closing_value[closing.end()..]));
        }
    }

    debug!(
        "absorbed siblings {index}..={close_index} into an insertion of {} nodes",
        main.len()
    );

    before.push(options.insert(main));
    before.append(&mut after);
    *siblings = before;
    true
}
