//! Chained scanning over one buffer.
//!
//! [`Scanner`] binds a buffer so repeated searches do not have to pass it
//! around, and [`Scanner::matches`] walks successive matches: each search
//! resumes strictly after the previous match, so "the next `{...}` after
//! the one just found" is one iterator step.

use std::iter::FusedIterator;

use sift_view::{Position, TextView};

use crate::{find_balanced, find_between, find_word, DelimiterSet};

/// Which search a [`Scanner`] runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Leftmost exact occurrence of a word.
    Word(String),
    /// First opener to the first following closer, no nesting.
    Between {
        openers: DelimiterSet,
        closers: DelimiterSet,
    },
    /// First opener to its balancing closer.
    Balanced {
        openers: DelimiterSet,
        closers: DelimiterSet,
    },
}

impl Policy {
    /// A word search.
    pub fn word(word: impl Into<String>) -> Self {
        Self::Word(word.into())
    }

    /// An unbalanced delimiter-pair search.
    pub fn between(openers: impl Into<DelimiterSet>, closers: impl Into<DelimiterSet>) -> Self {
        Self::Between {
            openers: openers.into(),
            closers: closers.into(),
        }
    }

    /// A balanced delimiter-pair search.
    pub fn balanced(openers: impl Into<DelimiterSet>, closers: impl Into<DelimiterSet>) -> Self {
        Self::Balanced {
            openers: openers.into(),
            closers: closers.into(),
        }
    }

    /// Position after which the search following `found` must start.
    ///
    /// Delimited matches end at their closer, so the next search starts
    /// past it. Word matches resume after their own last character, which
    /// keeps successive word matches from overlapping.
    fn resume_after(&self, found: &TextView<'_>) -> Position {
        match self {
            Self::Word(_) => found
                .indexed()
                .next_back()
                .map_or(found.start(), |(pos, _)| pos),
            Self::Between { .. } | Self::Balanced { .. } => found.end(),
        }
    }
}

/// Searches over a single borrowed buffer.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'a> {
    text: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The buffer being scanned.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Run `policy`, resuming strictly after `after` when given.
    pub fn find(&self, policy: &Policy, after: Option<Position>) -> Option<TextView<'a>> {
        match policy {
            Policy::Word(word) => find_word(self.text, word, after),
            Policy::Between { openers, closers } => find_between(self.text, openers, closers, after),
            Policy::Balanced { openers, closers } => {
                find_balanced(self.text, openers, closers, after)
            }
        }
    }

    pub fn word(&self, word: &str) -> Option<TextView<'a>> {
        find_word(self.text, word, None)
    }

    pub fn between(
        &self,
        openers: impl Into<DelimiterSet>,
        closers: impl Into<DelimiterSet>,
    ) -> Option<TextView<'a>> {
        find_between(self.text, &openers.into(), &closers.into(), None)
    }

    pub fn balanced(
        &self,
        openers: impl Into<DelimiterSet>,
        closers: impl Into<DelimiterSet>,
    ) -> Option<TextView<'a>> {
        find_balanced(self.text, &openers.into(), &closers.into(), None)
    }

    /// Every successive match of `policy`, left to right.
    pub fn matches<'p>(&self, policy: &'p Policy) -> Matches<'a, 'p> {
        self.matches_after(policy, None)
    }

    /// Successive matches of `policy` starting strictly after `after`.
    pub fn matches_after<'p>(&self, policy: &'p Policy, after: Option<Position>) -> Matches<'a, 'p> {
        Matches {
            scanner: *self,
            policy,
            after,
            done: false,
        }
    }
}

/// Iterator over successive matches. Created by [`Scanner::matches`].
///
/// Stops at the first search that finds nothing. Match start positions
/// strictly increase, so the iterator always terminates.
#[derive(Clone, Debug)]
pub struct Matches<'a, 'p> {
    scanner: Scanner<'a>,
    policy: &'p Policy,
    after: Option<Position>,
    done: bool,
}

impl<'a> Iterator for Matches<'a, '_> {
    type Item = TextView<'a>;

    fn next(&mut self) -> Option<TextView<'a>> {
        if self.done {
            return None;
        }
        let Some(found) = self.scanner.find(self.policy, self.after) else {
            self.done = true;
            return None;
        };
        self.after = Some(self.policy.resume_after(&found));
        Some(found)
    }
}

impl FusedIterator for Matches<'_, '_> {}
