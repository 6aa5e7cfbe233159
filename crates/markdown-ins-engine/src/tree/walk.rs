use super::Node;

/// What the walker does after a visitor returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move on to the next sibling.
    Continue,
    /// Resume the sibling loop at this index of the (possibly rewritten) parent.
    Revisit(usize),
}

/// Walks `tree` in document order, calling `visitor` for every node matching `test`.
///
/// The visitor receives the parent's child vector and the index of the matched
/// node, so it may splice or replace siblings freely. The loop re-reads the
/// vector's length on every iteration, so the walk follows whatever the visitor
/// left behind. Matched nodes are not descended into; non-matching containers are.
pub fn visit<T, V>(tree: &mut Node, test: T, mut visitor: V)
where
    T: Fn(&Node) -> bool,
    V: FnMut(&mut Vec<Node>, usize) -> Step,
{
    if let Some(children) = tree.children_mut() {
        visit_children(children, &test, &mut visitor);
    }
}

fn visit_children<T, V>(siblings: &mut Vec<Node>, test: &T, visitor: &mut V)
where
    T: Fn(&Node) -> bool,
    V: FnMut(&mut Vec<Node>, usize) -> Step,
{
    let mut index = 0;
    while index < siblings.len() {
        if test(&siblings[index]) {
            index = match visitor(siblings, index) {
                Step::Continue => index + 1,
                Step::Revisit(at) => at,
            };
            continue;
        }

        if let Some(children) = siblings[index].children_mut() {
            visit_children(children, test, visitor);
        }
        index += 1;
    }
}

/// Index of the nearest sibling after `index` matching `test`.
pub fn find_after<T>(siblings: &[Node], index: usize, test: T) -> Option<usize>
where
    T: Fn(&Node) -> bool,
{
    siblings
        .get(index + 1..)?
        .iter()
        .position(test)
        .map(|offset| index + 1 + offset)
}

/// Index of the nearest sibling before `index` matching `test`.
pub fn find_before<T>(siblings: &[Node], index: usize, test: T) -> Option<usize>
where
    T: Fn(&Node) -> bool,
{
    siblings.get(..index)?.iter().rposition(test)
}

/// A child vector cut into five owned pieces around two reference nodes.
#[derive(Debug)]
pub struct Segments {
    pub before: Vec<Node>,
    pub opening: Node,
    pub between: Vec<Node>,
    pub closing: Node,
    pub after: Vec<Node>,
}

/// Moves `siblings` apart around the nodes at `open` and `close`.
///
/// Nothing is cloned: every node ends up in exactly one segment. Returns `None`
/// unless `open < close < siblings.len()`.
pub fn split_around(siblings: Vec<Node>, open: usize, close: usize) -> Option<Segments> {
    if open >= close || close >= siblings.len() {
        return None;
    }

    let mut before = siblings;
    let after = before.split_off(close + 1);
    let closing = before.pop()?;
    let between = before.split_off(open + 1);
    let opening = before.pop()?;

    Some(Segments {
        before,
        opening,
        between,
        closing,
        after,
    })
}
