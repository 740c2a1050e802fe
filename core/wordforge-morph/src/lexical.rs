//! String helpers shared by every rule group.
//!
//! Rules read words through their consonant-vowel sequence: `word` becomes
//! `cvcc`. A final `y` after a consonant is vocalic (`try` is `ccv`).

use alloc::string::String;

const VOWELS: &str = "aeiou";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Consonant-vowel sequence of `s`, one symbol per character.
pub fn sequence(s: &str) -> String {
    let mut seq = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        let last = chars.peek().is_none();
        let vocalic_y = last && c == 'y' && prev.is_some_and(|p| !is_vowel(p));

        seq.push(if vocalic_y || is_vowel(c) { 'v' } else { 'c' });
        prev = Some(c);
    }

    seq
}

/// Pragmatic syllable count of `s` given its sequence.
///
/// Accuracy is low for borrowed words (cafe); the count only steers the
/// consonant doubling rules.
pub fn syllable_count(s: &str, seq: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    let mut count = 0usize;
    let mut prev_vowel = false;

    for sc in seq.chars() {
        if sc == 'v' {
            // Diphthongs and long vowels form one syllable
            if !prev_vowel {
                count += 1;
            }
            prev_vowel = true;
        } else {
            prev_vowel = false;
        }
    }

    // Apparent diphthongs that are separate syllables (cre-ate)
    if count > 1 && ends_with_any(s, &["eat", "eate", "iate", "uate"]) {
        count += 1;
    }

    // Silent final 'e'
    if s.ends_with('e') && seq.ends_with("cv") {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

/// True if `s` ends with any of `suffixes`.
pub fn ends_with_any(s: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suf| s.ends_with(suf))
}

/// `s` with its final character doubled, followed by `tail`.
pub fn double_final(s: &str, tail: &str) -> String {
    let mut out = String::with_capacity(s.len() + 1 + tail.len());
    out.push_str(s);
    if let Some(last) = s.chars().next_back() {
        out.push(last);
    }
    out.push_str(tail);
    out
}

/// `s` without its last `n` bytes. Callers only strip ASCII suffixes they
/// have already matched.
pub(crate) fn strip(s: &str, n: usize) -> &str {
    &s[..s.len() - n]
}

/// Last byte of a non-empty word, `0` for the empty string.
pub(crate) fn last_byte(s: &str) -> u8 {
    s.as_bytes().last().copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sequence() {
        let cases = [
            ("word", "cvcc"),
            ("try", "ccv"),
            ("play", "ccvc"),
            ("queue", "cvvvv"),
            ("rhythm", "cccccc"),
            ("y", "c"),
            ("fly", "ccv"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(sequence(input), expected, "{input}");
        }
    }

    #[test]
    fn test_syllable_count() {
        let cases = [
            ("", 0),
            ("cat", 1),
            ("make", 1),
            ("begin", 2),
            ("visit", 2),
            ("create", 2),
            ("repeat", 3),
            ("abbreviate", 4),
            ("rhythm", 1),
            ("happy", 2),
            ("be", 1),
        ];
        for (input, expected) in cases {
            assert_eq!(syllable_count(input, &sequence(input)), expected, "{input}");
        }
    }

    #[test]
    fn test_ends_with_any() {
        assert!(ends_with_any("datum", &["um", "us"]));
        assert!(!ends_with_any("data", &["um", "us"]));
        assert!(!ends_with_any("data", &[]));
    }

    #[test]
    fn test_double_final() {
        assert_eq!(double_final("quiz", "ed"), "quizzed");
        assert_eq!(double_final("up", "ing"), "upping");
        assert_eq!(double_final("", "ing"), "ing");
    }

    proptest! {
        #[test]
        fn sequence_is_parallel(word in "[a-z]{0,16}") {
            let seq = sequence(&word);
            prop_assert_eq!(seq.chars().count(), word.chars().count());
            prop_assert!(seq.chars().all(|c| c == 'c' || c == 'v'));
        }

        #[test]
        fn syllables_at_least_one(word in "[a-z]{1,16}") {
            prop_assert!(syllable_count(&word, &sequence(&word)) >= 1);
        }
    }
}
