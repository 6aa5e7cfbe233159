//! Whole-transform checks over parsed markdown.


use rstest::rstest;

use crate::{InsertOptions, Node, markdown, transform};

/// Installs `env_logger` once so `RUST_LOG=debug` shows the passes at work.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn transformed(source: &str) -> (Node, Node) {
    init_logging();
    let before = markdown::parse(source);
    let mut after = before.clone();
    transform(&mut after, &InsertOptions::default());
    (before, after)
}

#[rstest]
#[case("++inserted++")]
#[case("++inserted++ ++another inserted++ ")]
#[case("**++bold inserted++**")]
#[case("++**bold inserted**++")]
#[case("++**xxx++_yyy_++zzz**++")]
#[case("++Google is [++another inserted++](https://www.google.com) in inserted++")]
#[case("++outer ++inner++ inserted++")]
#[case("++inserted++inner++inserted++")]
#[case("++++\n\n++  ++\n\na++ ++a")]
#[case("++a **b** c++ and ++d *e* f++")]
#[case("+ ++inserted++ in a list item\n+ list item with ++inserted++")]
#[case("|Abc|Xyz|\n|---|---|\n|normal|++inserted++|")]
#[case("> Here is ++inserted++ in blockquote")]
#[case("++é and ü++ ++ü++")]
#[case("+++a++ and +inserted++")]
#[case("+++a **b** c++ +")]
#[case("x ++++++ y")]
fn content_is_preserved(#[case] source: &str) {
    let (before, after) = transformed(source);
    invariants::check(&before, &after);
}

#[rstest]
#[case("no markers at all")]
#[case("# heading\n\n- list\n\n> quote with **bold** and [link](x)")]
#[case("a + b = c, c +d")]
fn trees_without_double_plus_are_unchanged(#[case] source: &str) {
    let (before, after) = transformed(source);
    assert_eq!(before, after);
}

#[rstest]
#[case("++ unwanted space++")]
#[case("++inserted text with unwanted space ++")]
#[case("+inserted text with bad wrapped++")]
#[case("++inserted text with bad wrapped+")]
fn unconverted_text_is_stable(#[case] source: &str) {
    let (before, once) = transformed(source);
    assert_eq!(before, once);

    let mut twice = once.clone();
    transform(&mut twice, &InsertOptions::default());
    assert_eq!(once, twice);
}
