//! Position-indexed views over borrowed text.
//!
//! A [`TextView`] is a window `[start, end)` over a caller-owned `&str`.
//! Every position it hands out is a [`Position`] measured against the
//! *base* buffer, never renumbered to the view, so the result of one
//! search can be fed straight back into the next one over the same text.
//!
//! # Code Units
//!
//! Positions are UTF-8 byte offsets. Stepping from one position to the
//! next moves over a whole `char` (1-4 bytes), so every position a view
//! produces sits on a character boundary and slicing never splits a
//! character. Callers that need character counts convert at the boundary
//! with [`TextView::position_at_char`].

mod position;
mod view;

pub use position::Position;
pub use view::{TextView, ViewIter};
