//! Leet-speak substitution table

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Lowercase letter -> visually similar replacements, in emission order
static TRANSFORMATIONS: Lazy<HashMap<char, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert('a', vec!["@", "4"]);
    m.insert('b', vec!["8"]);
    m.insert('c', vec!["(", "{"]);
    m.insert('e', vec!["3"]);
    m.insert('g', vec!["9", "6"]);
    m.insert('h', vec!["4", "#"]);
    m.insert('i', vec!["1", "!", "|"]);
    m.insert('l', vec!["1", "|"]);
    m.insert('o', vec!["0"]);
    m.insert('s', vec!["$", "5", "z"]);
    m.insert('t', vec!["7", "+"]);
    m.insert('v', vec![r"\/"]);
    m.insert('w', vec!["vv", "uu"]);
    m.insert('x', vec!["><"]);
    m.insert('z', vec!["2"]);
    m
});

/// Replacements for `c`, or `None` when the character has no entry.
///
/// Keys are lowercase ASCII only, so uppercase letters, digits and
/// non-ASCII characters never match.
pub fn substitutions(c: char) -> Option<&'static [&'static str]> {
    TRANSFORMATIONS.get(&c).map(Vec::as_slice)
}

/// Number of leet variants `word` expands to, the unmodified word included.
pub fn variation_count(word: &str) -> usize {
    word.chars()
        .filter_map(substitutions)
        .fold(1usize, |acc, subs| acc.saturating_mul(subs.len() + 1))
}
