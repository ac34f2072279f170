//! Delimiter scanning over position-indexed text views.
//!
//! Three search policies, each resumable from a position:
//!
//! - [`find_word`]: leftmost exact occurrence of a word.
//! - [`find_between`]: text between the first opener and the first
//!   following closer, with no nesting semantics.
//! - [`find_balanced`]: text between the first opener and the closer that
//!   brings the nesting depth back to zero.
//!
//! Delimiters are always [`DelimiterSet`]s; a single character converts
//! into a one-element set, so there is one implementation of each policy.
//!
//! Every operation returns `Option<TextView>`. Absence is the only
//! failure: a missing opener, an opener with nothing after it, and an
//! unbalanced region all come back as `None`. The reasons are visible at
//! `trace` level through `tracing`.
//!
//! Match views keep buffer-absolute positions, so searches chain:
//!
//! ```text
//! let first = find_balanced(text, &'{'.into(), &'}'.into(), None)?;
//! let next = find_balanced(text, &'{'.into(), &'}'.into(), Some(first.end()))?;
//! ```
//!
//! [`Scanner`] wraps this pattern into an iterator of successive matches.

mod delimiter_set;
mod scan;
mod scanner;

pub use delimiter_set::DelimiterSet;
pub use scan::{find_balanced, find_between, find_word, locate_start_candidates};
pub use scanner::{Matches, Policy, Scanner};
pub use sift_view::{Position, TextView};
