/// A byte cursor over one text value, used by the delimiter scanner.
///
/// Positions only ever land on char boundaries: the scanner moves either by
/// whole chars or across the ASCII `+` of a marker.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The text being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at byte `i` of `s`.
    pub fn at(s: &'a str, i: usize) -> Self {
        Self { s, i }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    /// The char at the cursor, without advancing.
    pub fn peek_char(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// The char `back` chars behind the cursor (`1` is the one just before it).
    pub fn char_behind(&self, back: usize) -> Option<char> {
        let before = self.s.get(..self.i)?;
        before.chars().rev().nth(back.checked_sub(1)?)
    }

    /// Advances past the current char.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to the next occurrence of `pat` at or after the cursor.
    ///
    /// Returns false and parks the cursor at EOF when there is none.
    pub fn seek(&mut self, pat: &str) -> bool {
        match self.s.get(self.i..).and_then(|rest| rest.find(pat)) {
            Some(offset) => {
                self.i += offset;
                true
            }
            None => {
                self.i = self.s.len();
                false
            }
        }
    }
}
