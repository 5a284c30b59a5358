//! Locale-style name ordering for the final tie-break.
//!
//! Approximates root-locale collation in three levels, then falls back to
//! byte order so the result is always total:
//!
//! 1. primary: base letters, case- and accent-insensitive; whitespace and
//!    punctuation sort before digits, digits before letters
//! 2. secondary: accents (unaccented first)
//! 3. tertiary: case (lowercase first)

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two display names the way a locale-aware `compare` would.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (class(c), c))
}

fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

fn class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_does_not_outrank_letters() {
        assert_eq!(compare_names("Saint Louis University", "SUNY Albany"), Ordering::Less);
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn accents_fold_at_primary_level() {
        assert_eq!(compare_names("université x", "Utah"), Ordering::Less);
        assert_eq!(compare_names("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn lowercase_before_uppercase_on_otherwise_equal_names() {
        assert_eq!(compare_names("a", "A"), Ordering::Less);
        assert_eq!(compare_names("A", "a"), Ordering::Greater);
    }

    #[test]
    fn punctuation_and_digits_before_letters() {
        assert_eq!(compare_names("Texas A&M", "Texas AM"), Ordering::Less);
        assert_eq!(compare_names("School 2", "School B"), Ordering::Less);
        assert_eq!(compare_names("St. Olaf", "St Olaf"), Ordering::Greater);
    }

    #[test]
    fn identical_names_are_equal() {
        assert_eq!(compare_names("MIT", "MIT"), Ordering::Equal);
    }
}
