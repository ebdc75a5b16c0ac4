// Copyright (c) 2025 Strsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Brute-force matcher used as a correctness oracle and experiment baseline.

/// Leftmost occurrence of `pattern` in `text` by direct comparison, O(n*m).
///
/// On a mismatch the pattern restarts against the next text offset. An empty
/// pattern matches at offset 0.
pub fn naive_find<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    let (n, m) = (text.len(), pattern.len());
    let (mut start, mut i, mut j) = (0, 0, 0);

    while i < n && j < m {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
        } else {
            j = 0;
            start += 1;
            i = start;
        }
    }

    (j == m).then_some(start)
}

/// Whether `pattern` occurs anywhere in `text`.
pub fn has_substring<T: PartialEq>(text: &[T], pattern: &[T]) -> bool {
    naive_find(text, pattern).is_some()
}

/// Searches `text` for the leftmost occurrence of `pattern`.
pub fn search_naive(text: &str, pattern: &str) -> Option<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    naive_find(&text, &pattern)
}
