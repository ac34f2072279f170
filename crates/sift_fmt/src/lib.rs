//! Indentation and block layout for generated text.
//!
//! Companion to the scanner: where `sift_scan` pulls `{ ... }` regions out
//! of text, this crate puts them back together. All operations are pure
//! string transformations driven by an [`Indenter`]'s indent unit.

mod indenter;

pub use indenter::{join_with_newlines, Indenter, DEFAULT_UNIT};
