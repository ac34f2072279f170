//! Sets of interchangeable delimiter characters.

use smallvec::SmallVec;

use sift_view::{Position, TextView};

/// A set of characters treated as interchangeable openers or closers.
///
/// A single-character delimiter is the one-element case. Members are kept
/// sorted and deduplicated inline; delimiter sets are small, so membership
/// is a linear scan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DelimiterSet {
    chars: SmallVec<[char; 4]>,
}

impl DelimiterSet {
    /// An empty set. Matches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set containing only `ch`.
    pub fn single(ch: char) -> Self {
        let mut chars = SmallVec::new();
        chars.push(ch);
        Self { chars }
    }

    /// Add `ch` to the set. Returns `false` if it was already present.
    pub fn insert(&mut self, ch: char) -> bool {
        match self.chars.binary_search(&ch) {
            Ok(_) => false,
            Err(index) => {
                self.chars.insert(index, ch);
                true
            }
        }
    }

    /// Returns `true` if `ch` is a member.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Returns `true` if any character is a member of both sets.
    pub fn intersects(&self, other: &Self) -> bool {
        self.iter().any(|ch| other.contains(ch))
    }

    /// Members of either set.
    pub fn union(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).collect()
    }

    /// First position in `view` holding a member of this set.
    ///
    /// Sets of up to three ASCII characters go through `memchr`; anything
    /// else falls back to a per-character scan.
    pub fn first_in(&self, view: &TextView<'_>) -> Option<Position> {
        match self.ascii_needles() {
            Some(needles) => view.first_byte_position(&needles),
            None => view.first_position_where(|ch| self.contains(ch)),
        }
    }

    /// Members as bytes, when there are one to three of them and all are ASCII.
    fn ascii_needles(&self) -> Option<SmallVec<[u8; 3]>> {
        if self.chars.is_empty() || self.chars.len() > 3 {
            return None;
        }
        self.iter()
            .map(|ch| u8::try_from(ch).ok().filter(u8::is_ascii))
            .collect()
    }
}

impl From<char> for DelimiterSet {
    fn from(ch: char) -> Self {
        Self::single(ch)
    }
}

impl From<&str> for DelimiterSet {
    /// Every character of the string becomes a member.
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

impl From<&[char]> for DelimiterSet {
    fn from(chars: &[char]) -> Self {
        chars.iter().copied().collect()
    }
}

impl<const N: usize> From<[char; N]> for DelimiterSet {
    fn from(chars: [char; N]) -> Self {
        chars.into_iter().collect()
    }
}

impl FromIterator<char> for DelimiterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for ch in iter {
            set.insert(ch);
        }
        set
    }
}
