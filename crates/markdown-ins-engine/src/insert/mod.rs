//! # Inserted Text
//!
//! Rewrites `++text++` in a document tree into [`Node::Insert`] nodes.
//!
//! ## Passes
//!
//! The transform runs three passes, strictly in order, each over the whole tree:
//!
//! 1. **`local`**: pairs fully contained in one text leaf
//! 2. **`cross`**: an opening marker in one text leaf closed in a later text
//!    sibling, absorbing the rich inline nodes in between
//! 3. **`empty`**: `++++` and `++ ++` become empty markers (optional)
//!
//! ## Modules
//!
//! - **`delimiter`**: the marker grammar and its scanner
//! - **`cursor`**: byte cursor used by the scanner
//!
//! Malformed or unclosed delimiters are never an error; they stay literal text.

pub mod cross;
pub mod cursor;
pub mod delimiter;
pub mod empty;
pub mod local;

use serde::{Deserialize, Serialize};

use crate::tree::{Insert, Node, RenderHint};

/// How insertion nodes are built and which passes run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsertOptions {
    /// Element the renderer emits for an insertion.
    pub tag_name: String,
    /// Class of an insertion with content.
    pub class_name: String,
    /// Class of an empty marker.
    pub empty_class_name: String,
    /// Whether the empty-marker pass runs.
    pub empty_markers: bool,
}

impl Default for InsertOptions {
    fn default() -> Self {
        Self {
            tag_name: "ins".to_string(),
            class_name: "remark-ins".to_string(),
            empty_class_name: "remark-ins-empty".to_string(),
            empty_markers: true,
        }
    }
}

impl InsertOptions {
    /// Builds an insertion wrapping `children`.
    pub fn insert(&self, children: Vec<Node>) -> Node {
        Node::Insert(Insert {
            children,
            hint: self.hint(&self.class_name),
        })
    }

    /// Builds a childless insertion styled as an empty marker.
    pub fn empty_marker(&self) -> Node {
        Node::Insert(Insert {
            children: vec![],
            hint: self.hint(&self.empty_class_name),
        })
    }

    fn hint(&self, class_name: &str) -> RenderHint {
        RenderHint {
            tag_name: self.tag_name.clone(),
            class_names: vec![class_name.to_string()],
        }
    }
}

/// A tree-to-tree stage of a processing pipeline.
pub trait Transformer {
    fn transform(&self, tree: &mut Node);
}

/// The insert transform as a pipeline stage.
#[derive(Debug, Clone, Default)]
pub struct InsertPlugin {
    pub options: InsertOptions,
}

impl InsertPlugin {
    pub fn new(options: InsertOptions) -> Self {
        Self { options }
    }
}

impl Transformer for InsertPlugin {
    fn transform(&self, tree: &mut Node) {
        transform(tree, &self.options);
    }
}

/// Runs all passes over `tree`.
pub fn transform(tree: &mut Node, options: &InsertOptions) {
    local::run(tree, options);
    cross::run(tree, options);
    if options.empty_markers {
        empty::run(tree, options);
    }
}
