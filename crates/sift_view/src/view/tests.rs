#![allow(clippy::unwrap_used, reason = "tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

const SAMPLE: &str = "abc$123}{d{ef}g}hi";

fn pos(offset: usize) -> Position {
    Position::new(offset)
}

// === Construction ===

#[test]
fn full_view_spans_buffer() {
    let view = TextView::full(SAMPLE);
    assert_eq!(view.start(), pos(0));
    assert_eq!(view.end(), pos(SAMPLE.len()));
    assert_eq!(view.len(), SAMPLE.len());
    assert_eq!(view.value(), SAMPLE);
}

#[test]
fn empty_range_has_zero_length() {
    let view = TextView::new(SAMPLE, pos(5)..pos(5)).unwrap();
    assert_eq!(view.len(), 0);
    assert!(view.is_empty());
    assert_eq!(view.value(), "");
}

#[test]
fn new_rejects_inverted_range() {
    assert_eq!(TextView::new(SAMPLE, pos(6)..pos(5)), None);
}

#[test]
fn new_rejects_range_past_end() {
    assert_eq!(TextView::new(SAMPLE, pos(0)..pos(SAMPLE.len() + 1)), None);
}

#[test]
fn new_rejects_split_character() {
    // 'é' occupies bytes 1..3
    let text = "héllo";
    assert_eq!(TextView::new(text, pos(2)..pos(4)), None);
    assert_eq!(TextView::new(text, pos(1)..pos(3)).unwrap().value(), "é");
}

#[test]
fn slice_must_stay_inside_view() {
    let outer = TextView::new(SAMPLE, pos(4)..pos(7)).unwrap();
    assert_eq!(outer.slice(pos(4)..pos(6)).unwrap().value(), "12");
    assert_eq!(outer.slice(pos(3)..pos(6)), None);
    assert_eq!(outer.slice(pos(4)..pos(8)), None);
}

#[test]
fn from_position_extends_to_count_position() {
    let view = TextView::from_position(SAMPLE, pos(16)).unwrap();
    assert_eq!(view.value(), "hi");
    assert_eq!(view.end(), view.count_position());
}

// === Absolute positions ===

#[test]
fn positions_stay_absolute_in_sub_views() {
    let view = TextView::new(SAMPLE, pos(8)..pos(16)).unwrap();
    assert_eq!(view.first_position_where(|c| c == 'd'), Some(pos(9)));
    assert_eq!(view.element_at(pos(9)), 'd');
}

#[test]
fn first_position_where_ignores_matches_outside_view() {
    let view = TextView::new(SAMPLE, pos(4)..pos(7)).unwrap();
    assert_eq!(view.first_position_where(|c| c == 'a'), None);
    assert_eq!(view.first_position_where(|c| c == '}'), None);
    assert_eq!(view.first_position_where(|c| c == '2'), Some(pos(5)));
}

#[test]
fn first_byte_position_matches_predicate_search() {
    let view = TextView::new(SAMPLE, pos(8)..pos(18)).unwrap();
    assert_eq!(view.first_byte_position(b"}"), Some(pos(13)));
    assert_eq!(view.first_byte_position(b"g}"), Some(pos(13)));
    assert_eq!(view.first_byte_position(b"ig{"), Some(pos(8)));
    assert_eq!(view.first_byte_position(b"hig{"), Some(pos(8)));
    assert_eq!(view.first_byte_position(b"$"), None);
}

#[test]
fn first_byte_position_skips_multibyte_characters() {
    let text = "αβ{γ}";
    let view = TextView::full(text);
    assert_eq!(view.first_byte_position(b"{"), Some(pos(4)));
    assert_eq!(view.element_at(pos(4)), '{');
}

#[test]
fn count_first_and_last_positions() {
    let view = TextView::new(SAMPLE, pos(2)..pos(4)).unwrap();
    assert_eq!(view.count_position(), pos(18));
    assert_eq!(view.first_position(), Some(pos(0)));
    assert_eq!(view.last_position(), Some(pos(17)));

    let empty = TextView::full("");
    assert_eq!(empty.first_position(), None);
    assert_eq!(empty.last_position(), None);
}

#[test]
fn last_position_starts_final_character() {
    let view = TextView::full("ab€");
    assert_eq!(view.last_position(), Some(pos(2)));
}

// === Stepping ===

#[test]
fn next_position_moves_one_character() {
    let view = TextView::full("a€b");
    assert_eq!(view.next_position(pos(0)), Some(pos(1)));
    assert_eq!(view.next_position(pos(1)), Some(pos(4)));
    assert_eq!(view.next_position(pos(4)), None);
}

#[test]
fn next_position_rejects_invalid_positions() {
    let view = TextView::full("a€b");
    assert_eq!(view.next_position(pos(2)), None);
    assert_eq!(view.next_position(pos(5)), None);
    assert_eq!(view.next_position(pos(99)), None);
}

#[test]
fn advance_saturates_at_last_position() {
    let view = TextView::full(SAMPLE);
    let last = view.last_position().unwrap();
    assert_eq!(view.advance(pos(0)), pos(1));
    assert_eq!(view.advance(last), last);
    assert_eq!(view.advance(view.advance(last)), last);
}

#[test]
fn offset_allows_count_position_but_not_beyond() {
    let view = TextView::full(SAMPLE);
    assert_eq!(view.offset(pos(0), 3), Some(pos(3)));
    assert_eq!(view.offset(pos(15), 3), Some(pos(18)));
    assert_eq!(view.offset(pos(15), 4), None);
    assert_eq!(view.offset(pos(1), usize::MAX), None);
}

#[test]
fn offset_rejects_split_character() {
    let view = TextView::full("x€y");
    assert_eq!(view.offset(pos(0), 2), None);
    assert_eq!(view.offset(pos(0), 4), Some(pos(4)));
}

#[test]
fn position_at_char_counts_characters() {
    let text = "aé€z";
    let view = TextView::full(text);
    assert_eq!(view.position_at_char(0), Some(pos(0)));
    assert_eq!(view.position_at_char(1), Some(pos(1)));
    assert_eq!(view.position_at_char(2), Some(pos(3)));
    assert_eq!(view.position_at_char(3), Some(pos(6)));
    assert_eq!(view.position_at_char(4), Some(pos(7)));
    assert_eq!(view.position_at_char(5), None);
}

#[test]
fn position_at_char_is_relative_to_view_start() {
    let view = TextView::new(SAMPLE, pos(4)..pos(7)).unwrap();
    assert_eq!(view.position_at_char(0), Some(pos(4)));
    assert_eq!(view.position_at_char(3), Some(pos(7)));
    assert_eq!(view.position_at_char(4), None);
}

// === Element access ===

#[test]
fn get_checks_bounds_and_boundaries() {
    let view = TextView::full("a€");
    assert_eq!(view.get(pos(0)), Some('a'));
    assert_eq!(view.get(pos(1)), Some('€'));
    assert_eq!(view.get(pos(2)), None);
    assert_eq!(view.get(pos(4)), None);
}

#[test]
#[should_panic(expected = "not a character position")]
fn element_at_count_position_panics() {
    let view = TextView::full("abc");
    let _ = view.element_at(view.count_position());
}

// === Iteration ===

#[test]
fn iteration_yields_view_characters_once() {
    let view = TextView::new(SAMPLE, pos(9)..pos(15)).unwrap();
    let collected: String = view.iter().collect();
    assert_eq!(collected, "d{ef}g");
}

#[test]
fn exhausted_iterator_keeps_returning_none() {
    let view = TextView::full("xy");
    let mut iter = view.iter();
    assert_eq!(iter.next(), Some('x'));
    assert_eq!(iter.next(), Some('y'));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.position(), view.end());
}

#[test]
fn reset_rewinds_to_start() {
    let view = TextView::new(SAMPLE, pos(4)..pos(7)).unwrap();
    let mut iter = view.iter();
    assert_eq!(iter.by_ref().count(), 3);
    assert_eq!(iter.next(), None);
    iter.reset();
    assert_eq!(iter.position(), pos(4));
    assert_eq!(iter.next(), Some('1'));
}

#[test]
fn iteration_steps_over_multibyte_characters() {
    let view = TextView::full("a€😀b");
    let mut iter = view.iter();
    assert_eq!(iter.next(), Some('a'));
    assert_eq!(iter.position(), pos(1));
    assert_eq!(iter.next(), Some('€'));
    assert_eq!(iter.position(), pos(4));
    assert_eq!(iter.next(), Some('😀'));
    assert_eq!(iter.position(), pos(8));
    assert_eq!(iter.next(), Some('b'));
    assert_eq!(iter.next(), None);
}

#[test]
fn size_hint_bounds_remaining_characters() {
    let view = TextView::full("a€😀b");
    let iter = view.iter();
    let (lower, upper) = iter.size_hint();
    let actual = iter.count();
    assert!(lower <= actual);
    assert!(upper.is_some_and(|upper| actual <= upper));
}

#[test]
fn indexed_pairs_absolute_positions() {
    let view = TextView::new("x€yz", pos(1)..pos(5)).unwrap();
    let pairs: Vec<_> = view.indexed().collect();
    assert_eq!(pairs, vec![(pos(1), '€'), (pos(4), 'y')]);
}

#[test]
fn display_and_into_iter() {
    let view = TextView::new(SAMPLE, pos(4)..pos(7)).unwrap();
    assert_eq!(view.to_string(), "123");
    assert_eq!(view.to_owned_value(), "123");
    let chars: Vec<char> = view.into_iter().collect();
    assert_eq!(chars, vec!['1', '2', '3']);
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_view {
    use super::super::TextView;
    use crate::Position;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn iteration_reproduces_value(text in "\\PC{0,40}") {
            let view = TextView::full(&text);
            let collected: String = view.iter().collect();
            prop_assert_eq!(collected, text.clone());
        }

        #[test]
        fn advance_never_moves_backwards_or_off_boundaries(text in "\\PC{1,40}") {
            let view = TextView::full(&text);
            for (pos, _) in view.indexed() {
                let next = view.advance(pos);
                prop_assert!(next >= pos);
                prop_assert!(text.is_char_boundary(next.offset()));
                prop_assert!(next < view.count_position());
                prop_assert_eq!(next == pos, Some(pos) == view.last_position());
            }
        }

        #[test]
        fn first_position_where_agrees_with_str_find(
            text in "[a-c{}é]{0,30}",
            start in 0usize..30,
        ) {
            let start = start.min(text.len());
            prop_assume!(text.is_char_boundary(start));
            let Some(view) = TextView::from_position(&text, Position::new(start)) else {
                return Err(TestCaseError::fail("boundary-aligned tail view must exist"));
            };
            let expected = text[start..].find('{').map(|i| Position::new(start + i));
            prop_assert_eq!(view.first_position_where(|c| c == '{'), expected);
            prop_assert_eq!(view.first_byte_position(b"{"), expected);
        }
    }
}
