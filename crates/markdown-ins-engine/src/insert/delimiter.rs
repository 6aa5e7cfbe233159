//! The `++` delimiter grammar.
//!
//! Four shapes are recognised inside a single text value:
//!
//! - **pair**: `++`, content, `++`. The content is non-empty, its first and
//!   last chars are neither whitespace nor `+`, and it is the shortest run that
//!   reaches a valid closing marker. Scanning is leftmost-first.
//! - **opening**: a `++` not followed by whitespace, nor by more `+` and then
//!   whitespace. A `++` at the end of the value counts.
//! - **closing**: a `++` not preceded by whitespace, nor by whitespace and a
//!   single `+`. A `++` at the start of the value counts.
//! - **empty pair**: `++`, optional whitespace, `++`.
//!
//! Nested pairs are not balanced: `++outer ++inner++` captures `outer ++inner`.

use std::sync::OnceLock;

use regex::Regex;

use super::cursor::Cursor;

/// The insert marker, owned here so the passes never spell it out.
pub struct Marker;

impl Marker {
    pub const DOUBLE: &'static str = "++";
    pub const PLUS: char = '+';

    /// Chars that may not sit directly inside a pair's markers.
    ///
    /// Whitespace is Unicode `White_Space` (`char::is_whitespace`, and `\s` in
    /// the empty-pair regex): U+0085 counts, U+FEFF does not.
    fn blocks_boundary(c: char) -> bool {
        c.is_whitespace() || c == Self::PLUS
    }
}

/// A byte range `[start, end)` into a text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// One match of the grammar inside a text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterSpan {
    /// Everything the match covers, markers included.
    pub full: Span,
    /// The captured content between the markers, for pairs.
    pub inner: Option<Span>,
}

impl DelimiterSpan {
    fn marker(start: usize) -> Self {
        Self {
            full: Span {
                start,
                end: start + Marker::DOUBLE.len(),
            },
            inner: None,
        }
    }

    fn pair(start: usize, end: usize) -> Self {
        Self {
            full: Span { start, end },
            inner: Some(Span {
                start: start + Marker::DOUBLE.len(),
                end: end - Marker::DOUBLE.len(),
            }),
        }
    }

    pub fn start(&self) -> usize {
        self.full.start
    }

    pub fn end(&self) -> usize {
        self.full.end
    }

    pub fn len(&self) -> usize {
        self.full.len()
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// The captured content, sliced out of the value the span was found in.
    pub fn inner_text<'a>(&self, value: &'a str) -> Option<&'a str> {
        let inner = self.inner?;
        value.get(inner.start..inner.end)
    }
}

/// Finds the first fully-contained pair starting at or after byte `from`.
pub fn find_pair(value: &str, from: usize) -> Option<DelimiterSpan> {
    let mut cur = Cursor::at(value, from);

    while cur.seek(Marker::DOUBLE) {
        let start = cur.pos();
        cur.bump_n(Marker::DOUBLE.len());

        if !cur.peek_char().is_some_and(|c| !Marker::blocks_boundary(c)) {
            cur = Cursor::at(value, start + 1);
            continue;
        }

        // The content holds at least its first char.
        cur.bump_char();
        while cur.seek(Marker::DOUBLE) {
            if cur.char_behind(1).is_some_and(|c| !Marker::blocks_boundary(c)) {
                return Some(DelimiterSpan::pair(start, cur.pos() + Marker::DOUBLE.len()));
            }
            cur.bump_n(1);
        }

        // Any later opening would need a closing marker from this same tail.
        return None;
    }

    None
}

/// Iterates over the non-overlapping fully-contained pairs of `value`.
pub fn pairs(value: &str) -> Pairs<'_> {
    Pairs { value, from: 0 }
}

pub struct Pairs<'a> {
    value: &'a str,
    from: usize,
}

impl Iterator for Pairs<'_> {
    type Item = DelimiterSpan;

    fn next(&mut self) -> Option<Self::Item> {
        let found = find_pair(self.value, self.from)?;
        self.from = found.end();
        Some(found)
    }
}

/// Finds the leftmost opening-only marker.
pub fn find_opening(value: &str) -> Option<DelimiterSpan> {
    let mut cur = Cursor::at(value, 0);

    while cur.seek(Marker::DOUBLE) {
        let start = cur.pos();
        cur.bump_n(Marker::DOUBLE.len());

        match cur.peek_char() {
            Some(c) if c.is_whitespace() => cur = Cursor::at(value, start + 1),
            Some(Marker::PLUS) => {
                let mut ahead = cur.clone();
                while ahead.peek_char() == Some(Marker::PLUS) {
                    ahead.bump_char();
                }
                if !ahead.peek_char().is_some_and(char::is_whitespace) {
                    return Some(DelimiterSpan::marker(start));
                }
                // Every later `++` in this run reaches the same whitespace.
                cur = ahead;
            }
            _ => return Some(DelimiterSpan::marker(start)),
        }
    }

    None
}

/// Finds the leftmost closing-only marker.
pub fn find_closing(value: &str) -> Option<DelimiterSpan> {
    let mut cur = Cursor::at(value, 0);

    while cur.seek(Marker::DOUBLE) {
        let blocked = match cur.char_behind(1) {
            Some(c) if c.is_whitespace() => true,
            Some(Marker::PLUS) => cur.char_behind(2).is_some_and(char::is_whitespace),
            _ => false,
        };

        if !blocked {
            return Some(DelimiterSpan::marker(cur.pos()));
        }
        cur.bump_n(1);
    }

    None
}

fn empty_pair_regex() -> &'static Regex {
    static EMPTY_PAIR: OnceLock<Regex> = OnceLock::new();
    EMPTY_PAIR.get_or_init(|| Regex::new(r"\+\+\s*\+\+").expect("Invalid empty pair regex"))
}

/// Iterates over the non-overlapping empty pairs (`++++`, `++ ++`) of `value`.
pub fn empty_pairs(value: &str) -> impl Iterator<Item = DelimiterSpan> + '_ {
    empty_pair_regex()
        .find_iter(value)
        .map(|m| DelimiterSpan::pair(m.start(), m.end()))
}

pub fn has_empty_pair(value: &str) -> bool {
    empty_pair_regex().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn first_pair(value: &str) -> Option<&str> {
        find_pair(value, 0).and_then(|m| m.inner_text(value))
    }

    #[rstest]
    #[case("++")]
    #[case("+++")]
    #[case("+ ++")]
    #[case("++  +")]
    #[case("+ +inserted++")]
    #[case("+a+inserted++")]
    #[case("++++")]
    #[case("++ ++")]
    #[case("++  ++")]
    #[case("++ inserted++")]
    #[case("++inserted ++")]
    #[case("++inserted+")]
    #[case("plain text")]
    fn no_pair(#[case] input: &str) {
        assert_eq!(find_pair(input, 0), None);
    }

    #[rstest]
    #[case("++inserted++", "inserted")]
    #[case("++a++", "a")]
    #[case("++inserted text++", "inserted text")]
    #[case("x ++inserted++ y", "inserted")]
    #[case("++inserted++ outer++", "inserted")]
    #[case("++outer ++inner++ inserted++", "outer ++inner")]
    #[case("+++a++", "a")]
    #[case("++é++", "é")]
    #[case("++a\nb++", "a\nb")]
    fn captures_shortest_content(#[case] input: &str, #[case] inner: &str) {
        assert_eq!(first_pair(input), Some(inner));
    }

    #[test]
    fn pair_span_covers_markers() {
        let m = find_pair("ab++cd++ef", 0).unwrap();
        assert_eq!(m.start(), 2);
        assert_eq!(m.end(), 8);
        assert_eq!(m.len(), 6);
        assert_eq!(m.inner, Some(Span { start: 4, end: 6 }));
    }

    #[test]
    fn leading_plus_stays_outside_the_pair() {
        let m = find_pair("+++a++", 0).unwrap();
        assert_eq!(m.start(), 1);
        assert_eq!(m.end(), 6);
    }

    #[test]
    fn pairs_scan_left_to_right() {
        let value = "++inserted++inner++inserted++";
        let found: Vec<_> = pairs(value).filter_map(|m| m.inner_text(value)).collect();
        assert_eq!(found, vec!["inserted", "inserted"]);
    }

    #[test]
    fn pairs_skip_invalid_openings() {
        let value = "++ no ++yes++ ++ no";
        let found: Vec<_> = pairs(value).filter_map(|m| m.inner_text(value)).collect();
        assert_eq!(found, vec!["yes"]);
    }

    #[test]
    fn find_pair_resumes_from_offset() {
        let value = "++a++ ++b++";
        let m = find_pair(value, 5).unwrap();
        assert_eq!(m.inner_text(value), Some("b"));
    }

    #[test]
    fn long_plus_runs_stay_linear() {
        let value = "+".repeat(50_000);
        assert_eq!(pairs(&value).count(), 0);

        let value = "++a ".repeat(20_000);
        assert_eq!(pairs(&value).count(), 0);
    }

    #[test]
    fn plus_run_before_whitespace_stays_linear() {
        let value = "+".repeat(50_000) + " x";
        assert_eq!(find_opening(&value), None);

        let value = "+".repeat(50_000) + " ++x";
        assert_eq!(find_opening(&value).map(|m| m.start()), Some(50_001));
    }

    #[rstest]
    #[case("++\u{85}x++", None)]
    #[case("++\u{feff}x++", Some("\u{feff}x"))]
    fn unicode_whitespace_blocks_content(#[case] input: &str, #[case] inner: Option<&str>) {
        assert_eq!(first_pair(input), inner);
    }

    #[rstest]
    #[case("++text", Some(0))]
    #[case("text++", Some(4))]
    #[case("++", Some(0))]
    #[case("++ text", None)]
    #[case("a ++ b ++c", Some(7))]
    #[case("+++ text", None)]
    #[case("+++text", Some(0))]
    #[case("++++", Some(0))]
    #[case("no markers", None)]
    fn opening_marker(#[case] input: &str, #[case] at: Option<usize>) {
        assert_eq!(find_opening(input).map(|m| m.start()), at);
    }

    #[rstest]
    #[case("++text", Some(0))]
    #[case("text++", Some(4))]
    #[case("text ++", None)]
    #[case("text +++", None)]
    #[case("a ++ b++", Some(6))]
    #[case("zzz**++", Some(5))]
    #[case("no markers", None)]
    fn closing_marker(#[case] input: &str, #[case] at: Option<usize>) {
        assert_eq!(find_closing(input).map(|m| m.start()), at);
    }

    #[test]
    fn markers_span_two_bytes() {
        let m = find_opening("x++y").unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.inner, None);
        assert_eq!(m.inner_text("x++y"), None);
    }

    #[rstest]
    #[case("++++", 1)]
    #[case("++ ++", 1)]
    #[case("++   ++", 1)]
    #[case("a++ ++a", 1)]
    #[case("++++ ++ ++", 2)]
    #[case("++x++", 0)]
    #[case("+ +", 0)]
    fn empty_pair_count(#[case] input: &str, #[case] count: usize) {
        assert_eq!(empty_pairs(input).count(), count);
        assert_eq!(has_empty_pair(input), count > 0);
    }

    #[test]
    fn empty_pair_inner_is_whitespace() {
        let value = "a++  ++b";
        let m = empty_pairs(value).next().unwrap();
        assert_eq!(m.start(), 1);
        assert_eq!(m.end(), 7);
        assert_eq!(m.inner_text(value), Some("  "));
    }
}
