//! Immutable windows over a borrowed text buffer.
//!
//! A [`TextView`] never copies buffer content. It stores the base buffer
//! and a `[start, end)` range of absolute [`Position`]s; [`value()`]
//! borrows the denoted slice on demand.
//!
//! # Stepping
//!
//! Two flavors of "next position" exist:
//!
//! - [`TextView::next_position`] returns `None` once `p` is the buffer's
//!   last character. This is what scanning code uses.
//! - [`TextView::advance`] saturates instead: it returns `p` unchanged at
//!   the last character. Callers using it must check for no-progress to
//!   detect the end of data.
//!
//! Sequential iteration ([`ViewIter`]) does not saturate. It yields every
//! character of the view once and then returns `None` forever.
//!
//! [`value()`]: TextView::value

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use crate::Position;

/// A window `[start, end)` over a base text buffer.
///
/// # Invariant
///
/// `start <= end <= text.len()`, and both bounds fall on character
/// boundaries of `text`. Every constructor checks this and returns
/// `None` rather than building a view that breaks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextView<'a> {
    /// The base buffer. Positions are offsets into this, not into the window.
    text: &'a str,
    start: Position,
    end: Position,
}

/// Size assertion: a view is a fat pointer plus two offsets.
const _: () = assert!(std::mem::size_of::<TextView<'static>>() <= 32);

impl<'a> TextView<'a> {
    /// Create a view over `range` of `text`.
    ///
    /// Returns `None` if the range is inverted, extends past the end of
    /// the buffer, or either bound splits a character.
    pub fn new(text: &'a str, range: Range<Position>) -> Option<Self> {
        let Range { start, end } = range;
        if start > end
            || end.offset() > text.len()
            || !text.is_char_boundary(start.offset())
            || !text.is_char_boundary(end.offset())
        {
            return None;
        }
        Some(Self { text, start, end })
    }

    /// A view spanning the whole buffer.
    pub fn full(text: &'a str) -> Self {
        Self {
            text,
            start: Position::ZERO,
            end: Position::new(text.len()),
        }
    }

    /// A view from `start` to the end of the buffer.
    pub fn from_position(text: &'a str, start: Position) -> Option<Self> {
        Self::new(text, start..Position::new(text.len()))
    }

    /// A narrower view over `range`, which must lie within this view.
    pub fn slice(&self, range: Range<Position>) -> Option<Self> {
        if range.start < self.start || range.end > self.end {
            return None;
        }
        Self::new(self.text, range)
    }

    /// The base buffer this view was drawn from.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// First position of the view.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// One past the last position of the view (exclusive).
    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    /// The view's bounds as a range of absolute positions.
    #[inline]
    pub fn range(&self) -> Range<Position> {
        self.start..self.end
    }

    /// Number of code units spanned by the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.distance_from(self.start)
    }

    /// Returns `true` if the view spans no code units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The slice of the base buffer denoted by this view.
    #[inline]
    pub fn value(&self) -> &'a str {
        &self.text[self.start.offset()..self.end.offset()]
    }

    /// Materialize the denoted slice as an owned string.
    pub fn to_owned_value(&self) -> String {
        self.value().to_owned()
    }

    /// Returns `true` if `pos` lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }

    /// The one-past-the-end position of the base buffer.
    ///
    /// Only valid as an exclusive upper bound; never dereference it.
    #[inline]
    pub fn count_position(&self) -> Position {
        Position::new(self.text.len())
    }

    /// First position of the base buffer, or `None` if it is empty.
    pub fn first_position(&self) -> Option<Position> {
        (!self.text.is_empty()).then_some(Position::ZERO)
    }

    /// Position of the base buffer's final character, or `None` if it is empty.
    pub fn last_position(&self) -> Option<Position> {
        self.text
            .char_indices()
            .next_back()
            .map(|(offset, _)| Position::new(offset))
    }

    /// The position immediately after `pos`.
    ///
    /// Returns `None` when `pos` is the buffer's last character (there is
    /// no following character position), when `pos` is at or past the end
    /// of the buffer, or when `pos` does not start a character.
    pub fn next_position(&self, pos: Position) -> Option<Position> {
        let ch = self.get(pos)?;
        let next = pos.offset() + ch.len_utf8();
        (next < self.text.len()).then_some(Position::new(next))
    }

    /// The position immediately after `pos`, saturating at the last character.
    ///
    /// Returns `pos` unchanged when no following position exists. This is
    /// not an error: callers detect end-of-data by comparing the result
    /// with `pos`.
    #[inline]
    pub fn advance(&self, pos: Position) -> Position {
        self.next_position(pos).unwrap_or(pos)
    }

    /// Add a fixed number of code units to `pos`.
    ///
    /// The result may equal [`count_position`](Self::count_position) (it is
    /// a valid exclusive bound) but not exceed it, and it must land on a
    /// character boundary. Returns `None` otherwise.
    pub fn offset(&self, pos: Position, amount: usize) -> Option<Position> {
        let target = pos.checked_add(amount)?;
        (target.offset() <= self.text.len() && self.text.is_char_boundary(target.offset()))
            .then_some(target)
    }

    /// Position of the zero-based `n`th character of this view.
    ///
    /// `n` equal to the view's character count maps to [`end`](Self::end);
    /// anything beyond returns `None`.
    pub fn position_at_char(&self, n: usize) -> Option<Position> {
        self.indexed()
            .map(|(pos, _)| pos)
            .chain(std::iter::once(self.end))
            .nth(n)
    }

    /// The character starting at `pos`, or `None` if `pos` is out of range
    /// or not on a character boundary.
    pub fn get(&self, pos: Position) -> Option<char> {
        self.text.get(pos.offset()..)?.chars().next()
    }

    /// The character starting at `pos`.
    ///
    /// # Contract
    ///
    /// `pos` must be a character position strictly before
    /// [`count_position`](Self::count_position), such as one returned by
    /// this view's own searches. Anything else is a caller bug and panics;
    /// use [`get`](Self::get) for a checked lookup.
    pub fn element_at(&self, pos: Position) -> char {
        match self.get(pos) {
            Some(ch) => ch,
            None => panic!(
                "position {pos} is not a character position in a buffer of {} bytes",
                self.text.len()
            ),
        }
    }

    /// First position in `[start, end)` whose character satisfies `pred`.
    ///
    /// Scans strictly left to right and reports absolute positions.
    pub fn first_position_where(&self, mut pred: impl FnMut(char) -> bool) -> Option<Position> {
        self.indexed()
            .find(|&(_, ch)| pred(ch))
            .map(|(pos, _)| pos)
    }

    /// First position in `[start, end)` holding any of `needles`.
    ///
    /// Uses `memchr` for SIMD-accelerated search when given one to three
    /// needles, and a byte loop otherwise.
    ///
    /// # Contract
    ///
    /// Every needle must be ASCII. A non-ASCII byte could match inside a
    /// multi-byte character and yield a position that splits it.
    pub fn first_byte_position(&self, needles: &[u8]) -> Option<Position> {
        debug_assert!(
            needles.iter().all(u8::is_ascii),
            "byte search needles must be ASCII: {needles:?}"
        );
        let haystack = self.value().as_bytes();
        let found = match needles {
            &[a] => memchr::memchr(a, haystack),
            &[a, b] => memchr::memchr2(a, b, haystack),
            &[a, b, c] => memchr::memchr3(a, b, c, haystack),
            _ => haystack.iter().position(|byte| needles.contains(byte)),
        }?;
        Some(Position::new(self.start.offset() + found))
    }

    /// Lazily pair each character of the view with its absolute position.
    pub fn indexed(&self) -> impl DoubleEndedIterator<Item = (Position, char)> + 'a {
        let base = self.start.offset();
        self.value()
            .char_indices()
            .map(move |(offset, ch)| (Position::new(base + offset), ch))
    }

    /// A single-pass iterator over the view's characters.
    pub fn iter(&self) -> ViewIter<'a> {
        ViewIter {
            view: *self,
            cursor: self.start,
        }
    }
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl<'a> IntoIterator for TextView<'a> {
    type Item = char;
    type IntoIter = ViewIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Single-pass, left-to-right iterator over a [`TextView`].
///
/// Holds its own cursor. Once the cursor reaches the view's end the
/// iterator returns `None` on every call; [`reset`](Self::reset) rewinds
/// it to the view's start for another pass.
#[derive(Clone, Debug)]
pub struct ViewIter<'a> {
    view: TextView<'a>,
    cursor: Position,
}

impl<'a> ViewIter<'a> {
    /// Position of the next character to be yielded.
    ///
    /// Equal to the view's end once the iterator is exhausted.
    #[inline]
    pub fn position(&self) -> Position {
        self.cursor
    }

    /// The view being iterated.
    #[inline]
    pub fn view(&self) -> TextView<'a> {
        self.view
    }

    /// Rewind the cursor to the start of the view.
    pub fn reset(&mut self) {
        self.cursor = self.view.start;
    }
}

impl Iterator for ViewIter<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.cursor >= self.view.end {
            return None;
        }
        let ch = self.view.get(self.cursor)?;
        self.cursor = Position::new(self.cursor.offset() + ch.len_utf8());
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.end.distance_from(self.cursor);
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for ViewIter<'_> {}

#[cfg(test)]
mod tests;
