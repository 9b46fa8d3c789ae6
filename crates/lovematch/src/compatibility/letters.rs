use std::collections::BTreeSet;

/// Lowercases `name` and strips every U+0020 space.
///
/// Only the plain space is removed. Tabs, newlines and other separators stay in
/// the normalized name and take part in the character overlap.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

/// Sums `a = 1 .. z = 26` over the ASCII lowercase letters of a normalized name.
///
/// Anything outside `'a'..='z'` adds nothing, including accented letters.
pub fn letter_score(normalized: &str) -> u64 {
    normalized
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .map(|c| u64::from(c as u8 - b'a' + 1))
        .sum()
}

/// Distinct characters of a normalized name.
///
/// Unlike [`letter_score`] this is not restricted to letters: digits,
/// punctuation and non-ASCII characters all count towards the overlap.
pub fn letter_set(normalized: &str) -> BTreeSet<char> {
    normalized.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_drops_spaces_only() {
        assert_eq!(normalize_name("Jo Han"), "johan");
        assert_eq!(normalize_name("  MARY  ANN "), "maryann");
        assert_eq!(normalize_name("a\tB"), "a\tb");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn letter_score_counts_ascii_letters() {
        assert_eq!(letter_score("alice"), 30);
        assert_eq!(letter_score("bob"), 19);
        assert_eq!(letter_score("z"), 26);
        assert_eq!(letter_score(""), 0);
    }

    #[test]
    fn letter_score_ignores_everything_else() {
        assert_eq!(letter_score("a1-b!"), 3);
        assert_eq!(letter_score("jön@"), 24);
        assert_eq!(letter_score("123"), 0);
    }

    #[test]
    fn letter_set_keeps_non_letters() {
        let set = letter_set("a1a!");
        assert_eq!(set.len(), 3);
        assert!(set.contains(&'1'));
        assert!(set.contains(&'!'));
        assert!(letter_set("").is_empty());
    }
}
