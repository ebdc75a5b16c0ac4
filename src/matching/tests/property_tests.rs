// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests: every matcher against the naive oracle.

use proptest::prelude::*;

use crate::matching::{
    build_good_suffix_table, search_boyer_moore, search_kmp, search_naive, Alphabet,
    BoyerMooreMatcher,
};

// Small alphabets make repeated prefixes and near misses common
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB]{0,200}").unwrap()
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB]{1,8}").unwrap()
}

// Text with punctuation the Latin alphabet cannot map
fn noisy_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab.,!A ]{0,200}").unwrap()
}

proptest! {
    #[test]
    fn prop_kmp_matches_oracle(text in text_strategy(), pattern in "[abAB]{0,8}") {
        prop_assert_eq!(search_kmp(&text, &pattern), search_naive(&text, &pattern));
    }

    #[test]
    fn prop_boyer_moore_matches_oracle(text in text_strategy(), pattern in pattern_strategy()) {
        let found = search_boyer_moore(&text, &pattern, &Alphabet::latin()).unwrap();
        prop_assert_eq!(found, search_naive(&text, &pattern));
    }

    // Property: a planted pattern with no earlier occurrence is found at its offset
    #[test]
    fn prop_planted_pattern_found(
        prefix in text_strategy(),
        pattern in pattern_strategy(),
        suffix in text_strategy(),
    ) {
        let text = format!("{prefix}{pattern}{suffix}");
        let expected = search_naive(&text, &pattern);
        prop_assert!(expected.is_some());
        prop_assert!(expected.unwrap() <= prefix.chars().count());

        prop_assert_eq!(search_boyer_moore(&text, &pattern, &Alphabet::latin()).unwrap(), expected);
        prop_assert_eq!(search_kmp(&text, &pattern), expected);
    }

    // Property: aliasing unmapped symbols weakens shifts but never loses a match
    #[test]
    fn prop_aliasing_never_misses(text in noisy_text_strategy(), pattern in "[ab.,!A ]{1,6}") {
        let found = search_boyer_moore(&text, &pattern, &Alphabet::latin_aliasing()).unwrap();
        prop_assert_eq!(found, search_naive(&text, &pattern));
    }

    // Property: the unvalidated scan is exact even over symbols the alphabet rejects
    #[test]
    fn prop_scan_matches_oracle_on_unmapped_text(text in noisy_text_strategy(), pattern in "[abA]{1,6}") {
        let matcher = BoyerMooreMatcher::new(&pattern, &Alphabet::latin()).unwrap();
        let symbols: Vec<char> = text.chars().collect();
        prop_assert_eq!(matcher.scan(&symbols), search_naive(&text, &pattern));
    }

    #[test]
    fn prop_ascii_alphabet_matches_oracle(text in noisy_text_strategy(), pattern in "[ab.,!A ]{1,6}") {
        let found = search_boyer_moore(&text, &pattern, &Alphabet::ascii()).unwrap();
        prop_assert_eq!(found, search_naive(&text, &pattern));
    }

    #[test]
    fn prop_good_suffix_shifts_advance(pattern in "[abc]{1,30}") {
        let table = build_good_suffix_table(&pattern);
        prop_assert_eq!(table.as_slice().len(), pattern.len() + 1);
        prop_assert!(table.as_slice().iter().all(|&shift| shift >= 1));
    }

    #[test]
    fn prop_longer_pattern_never_found(text in "[ab]{0,20}", extra in "[ab]{1,5}") {
        let pattern = format!("{text}{extra}");
        prop_assert_eq!(search_boyer_moore(&text, &pattern, &Alphabet::latin()).unwrap(), None);
        prop_assert_eq!(search_kmp(&text, &pattern), None);
        prop_assert_eq!(search_naive(&text, &pattern), None);
    }

    #[test]
    fn prop_repeated_calls_identical(text in text_strategy(), pattern in pattern_strategy()) {
        let alphabet = Alphabet::latin();
        prop_assert_eq!(
            search_boyer_moore(&text, &pattern, &alphabet),
            search_boyer_moore(&text, &pattern, &alphabet)
        );
        prop_assert_eq!(search_kmp(&text, &pattern), search_kmp(&text, &pattern));
    }
}
