//! Absolute positions into a text buffer.

use std::fmt;

/// Byte offset into a text buffer.
///
/// Positions are totally ordered and only meaningful against the buffer
/// they were derived from. A valid position is either the start of a
/// character in `[0, len)` or the one-past-the-end sentinel returned by
/// [`TextView::count_position`](crate::TextView::count_position), which
/// is only ever used as an exclusive upper bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// The first position of every buffer.
    pub const ZERO: Self = Self(0);

    /// Create a position from a raw byte offset.
    ///
    /// No validation happens here; views check alignment and bounds when
    /// a position is used to build or index them.
    #[inline]
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Byte offset of this position in its buffer.
    #[inline]
    pub const fn offset(self) -> usize {
        self.0
    }

    /// Add `amount` code units, returning `None` on arithmetic overflow.
    #[inline]
    pub const fn checked_add(self, amount: usize) -> Option<Self> {
        match self.0.checked_add(amount) {
            Some(offset) => Some(Self(offset)),
            None => None,
        }
    }

    /// Number of code units from `earlier` to `self`, saturating at zero.
    #[inline]
    pub const fn distance_from(self, earlier: Self) -> usize {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

/// Size assertion: a position is a single machine word.
const _: () = assert!(std::mem::size_of::<Position>() == std::mem::size_of::<usize>());
