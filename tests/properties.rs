//! Property tests for the algebraic laws the transformations promise

use proptest::prelude::*;
use stringkit::{
    camel_case, finish, length, limit, limit_exact, lower, random, segments, slug, snake_case,
    title_case, upper, word_wrap,
};

proptest! {
    #[test]
    fn lower_is_idempotent(s in "\\PC*") {
        let once = lower(&s);
        prop_assert_eq!(lower(&once), once);
    }

    #[test]
    fn upper_is_idempotent(s in "\\PC*") {
        let once = upper(&s);
        prop_assert_eq!(upper(&once), once);
    }

    // Restricted to scripts whose uppercase forms are single codepoints;
    // expanding mappings like the German eszett break strict idempotence
    #[test]
    fn title_case_is_idempotent(s in "[a-zA-Z αβγΑΒΓάέ]{0,40}") {
        let once = title_case(&s);
        prop_assert_eq!(title_case(&once), once);
    }

    #[test]
    fn limit_obeys_the_length_law(s in "\\PC*", n in 0usize..24) {
        let out = limit(&s, n);
        if length(&s) > n {
            prop_assert_eq!(length(&out), n + 3);
        } else {
            prop_assert_eq!(out, s);
        }
    }

    #[test]
    fn limit_exact_output_is_exactly_n(s in "\\PC*", n in 3usize..24) {
        let out = limit_exact(&s, n);
        if length(&s) > n {
            prop_assert_eq!(length(&out), n);
        } else {
            prop_assert_eq!(out, s);
        }
    }

    #[test]
    fn slug_alphabet_is_closed(s in "\\PC*") {
        prop_assert!(
            slug(&s)
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        );
    }

    #[test]
    fn finish_ends_with_exactly_one_cap(s in "\\PC*", cap in "[a-z/]{1,3}") {
        let out = finish(&s, &cap);
        prop_assert!(out.ends_with(&cap));
        let stripped = out.strip_suffix(&cap).unwrap();
        prop_assert!(!stripped.ends_with(&cap));
    }

    #[test]
    fn word_wrap_pieces_never_exceed_width(s in "\\PC*", width in 1usize..12) {
        for piece in word_wrap(&s, width).split_whitespace() {
            prop_assert!(piece.chars().count() <= width);
        }
    }

    #[test]
    fn segments_are_never_empty(path in "[ab/]{0,24}") {
        prop_assert!(segments(&path).iter().all(|segment| !segment.is_empty()));
    }

    // Segments need two or more letters: a single-letter segment
    // capitalizes into a run of uppercase, which has no
    // lowercase-to-uppercase boundary for snake_case to split on
    #[test]
    fn camel_then_snake_round_trips(s in "[a-z]{2,6}(_[a-z]{2,6}){0,3}") {
        prop_assert_eq!(snake_case(&camel_case(&s, true)), s);
    }

    #[test]
    fn random_has_requested_length(n in 0usize..64) {
        let out = random(n);
        prop_assert_eq!(out.chars().count(), n);
        prop_assert!(out.chars().all(|ch| ch.is_ascii_alphanumeric()));
    }
}

#[test]
fn consecutive_random_draws_differ() {
    // 62^40 outcomes make a collision effectively impossible
    assert_ne!(random(40), random(40));
}
