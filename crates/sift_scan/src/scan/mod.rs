//! The three delimiter search policies.
//!
//! All policies share one setup step, [`locate_start_candidates`]: pick
//! the search window (the whole buffer, or everything strictly after a
//! resume position), find the first opener in it, and hand back the view
//! from just after that opener to the end of the buffer.
//!
//! Scans are greedy and single-pass: leftmost opener, then the first
//! closer that satisfies the policy. There is no backtracking.

use sift_view::{Position, TextView};
use tracing::trace;

use crate::DelimiterSet;

/// The window a search examines.
///
/// With a resume position the window starts strictly after it; a resume
/// position at or beyond the buffer's last character leaves nothing to
/// search.
fn search_window(text: &str, after: Option<Position>) -> Option<TextView<'_>> {
    let full = TextView::full(text);
    match after {
        None => (!full.is_empty()).then_some(full),
        Some(after) => {
            let first = full.next_position(after)?;
            TextView::from_position(text, first)
        }
    }
}

/// Find the first opener and return the view of everything after it.
///
/// The returned view runs from the position after the opener to the end
/// of the buffer. Returns `None` if the window holds no opener, or if the
/// first opener is the buffer's final character (a delimiter with nothing
/// after it cannot bound a substring).
pub fn locate_start_candidates<'a>(
    text: &'a str,
    openers: &DelimiterSet,
    after: Option<Position>,
) -> Option<TextView<'a>> {
    let window = search_window(text, after)?;
    let Some(opener) = openers.first_in(&window) else {
        trace!(window_start = %window.start(), "no opener in window");
        return None;
    };
    let Some(content_start) = window.next_position(opener) else {
        trace!(%opener, "opener is the final character");
        return None;
    };
    TextView::from_position(text, content_start)
}

/// Find the leftmost exact occurrence of `word`.
///
/// Searches the whole buffer, or strictly after `after` when given. An
/// occurrence may end exactly at the end of the buffer. An empty `word`
/// never matches.
#[tracing::instrument(level = "trace", skip_all, fields(word_len = word.len(), resume = ?after))]
pub fn find_word<'a>(text: &'a str, word: &str, after: Option<Position>) -> Option<TextView<'a>> {
    if word.is_empty() {
        return None;
    }
    let window = search_window(text, after)?;
    // A UTF-8 needle can only match at character boundaries of UTF-8 text.
    let offset = memchr::memmem::find(window.value().as_bytes(), word.as_bytes())?;
    let start = Position::new(window.start().offset() + offset);
    let end = window.offset(start, word.len())?;
    window.slice(start..end)
}

/// Find the text between the first opener and the first following closer.
///
/// No nesting semantics: any closer ends the match. The closer itself is
/// excluded. Returns `None` if there is no opener, no closer after it, or
/// the closer immediately follows the opener (an empty match).
#[tracing::instrument(level = "trace", skip_all, fields(resume = ?after))]
pub fn find_between<'a>(
    text: &'a str,
    openers: &DelimiterSet,
    closers: &DelimiterSet,
    after: Option<Position>,
) -> Option<TextView<'a>> {
    let candidates = locate_start_candidates(text, openers, after)?;
    let Some(closer) = closers.first_in(&candidates) else {
        trace!(content_start = %candidates.start(), "no closer after opener");
        return None;
    };
    if closer <= candidates.start() {
        trace!(%closer, "closer immediately follows opener");
        return None;
    }
    candidates.slice(candidates.start()..closer)
}

/// Find the text between the first opener and its balancing closer.
///
/// Depth starts at one for the opener that begins the match. Each later
/// opener adds one and each closer subtracts one; the match ends before
/// the closer that brings depth to zero. A character in both sets counts
/// as an opener. The match may be empty (`{}`).
///
/// Returns `None` if there is no usable opener or the buffer ends before
/// depth returns to zero.
#[tracing::instrument(level = "trace", skip_all, fields(resume = ?after))]
pub fn find_balanced<'a>(
    text: &'a str,
    openers: &DelimiterSet,
    closers: &DelimiterSet,
    after: Option<Position>,
) -> Option<TextView<'a>> {
    let candidates = locate_start_candidates(text, openers, after)?;
    let delimiters = openers.union(closers);
    let mut depth: usize = 1;
    let mut rest = candidates;
    while let Some(pos) = delimiters.first_in(&rest) {
        let ch = rest.element_at(pos);
        if openers.contains(ch) {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return candidates.slice(candidates.start()..pos);
            }
        }
        let resume = rest.offset(pos, ch.len_utf8())?;
        rest = rest.slice(resume..rest.end())?;
    }
    trace!(depth, "buffer ended before delimiters balanced");
    None
}
