pub mod html;
pub mod insert;
pub mod markdown;
pub mod tree;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use insert::{InsertOptions, InsertPlugin, Transformer, transform};
pub use tree::{Insert, Node, RenderHint, text};

/// Runs the full pipeline: markdown source to HTML with `++text++` as insertions.
pub fn process(source: &str, options: &InsertOptions) -> String {
    let mut tree = markdown::parse(source);
    transform(&mut tree, options);
    html::render(&tree)
}
