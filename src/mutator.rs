//! Mutation engine
//!
//! Expands one seed word into its password candidates. Stages run in a
//! fixed order and each appends to the caller's accumulator:
//!
//! 1. the word itself
//! 2. upper and lower case forms
//! 3. leet variations (unmodified word included), only when the word
//!    has at least one substitutable letter
//! 4. numbering/year suffixes over stages 1-3
//! 5. padding over everything this word produced in stages 1-4
//!
//! Nothing is deduplicated. Output size is the product of the leet
//! fan-out, the affix count and the padding count, with no upper bound;
//! [`MutationEngine::expected_len`] reports it up front.

use crate::affixes::Affixes;
use crate::leet;
use crate::padding::{PaddingList, Placement};
use tracing::{debug, warn};

/// Per-word output size above which a warning is logged.
pub const LARGE_OUTPUT_WARNING: usize = 1_000_000;

#[derive(Debug, Clone, Default)]
pub struct MutationEngine {
    paddings: PaddingList,
    placement: Placement,
    affixes: Affixes,
}

impl MutationEngine {
    pub fn new(paddings: PaddingList) -> Self {
        Self {
            paddings,
            ..Self::default()
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_affixes(mut self, affixes: Affixes) -> Self {
        self.affixes = affixes;
        self
    }

    pub fn paddings(&self) -> &PaddingList {
        &self.paddings
    }

    /// All mutations of `word`, in emission order.
    pub fn generate(&self, word: &str) -> Vec<String> {
        self.generate_into(word, Vec::new())
    }

    /// Append the mutations of `word` to `acc` and hand it back.
    ///
    /// Padding only applies to entries produced for this word; anything
    /// already in `acc` is left alone.
    pub fn generate_into(&self, word: &str, mut acc: Vec<String>) -> Vec<String> {
        let expected = self.expected_len(word);
        if expected > LARGE_OUTPUT_WARNING {
            warn!(word, expected, "mutation output for word is very large");
        }
        acc.reserve(expected.min(LARGE_OUTPUT_WARNING));
        let start = acc.len();

        acc.push(word.to_string());
        acc.push(simple_uppercase(word));
        acc.push(simple_lowercase(word));
        if leet::variation_count(word) > 1 {
            acc.extend(leet_variations(word));
        }

        let base_end = acc.len();
        if !self.affixes.is_empty() {
            for i in start..base_end {
                for affix in self.affixes.iter() {
                    let suffixed = format!("{}{}", acc[i], affix);
                    acc.push(suffixed);
                }
            }
        }

        let padded_end = acc.len();
        if !self.paddings.is_empty() {
            for i in start..padded_end {
                for pad in self.paddings.values() {
                    if self.placement != Placement::Before {
                        let suffixed = format!("{}{}", acc[i], pad);
                        acc.push(suffixed);
                    }
                    if self.placement != Placement::After {
                        let prefixed = format!("{}{}", pad, acc[i]);
                        acc.push(prefixed);
                    }
                }
            }
        }

        debug!(word, generated = acc.len() - start, "generated mutations");
        acc
    }

    /// Number of entries [`generate`](Self::generate) will produce for `word`.
    pub fn expected_len(&self, word: &str) -> usize {
        let leet = match leet::variation_count(word) {
            1 => 0,
            n => n,
        };
        let base = leet.saturating_add(3);
        let affixed = base.saturating_mul(self.affixes.len() + 1);
        let pad_factor = self
            .paddings
            .len()
            .saturating_mul(self.placement.fan_out())
            .saturating_add(1);
        affixed.saturating_mul(pad_factor)
    }
}

/// Leet variations of `word`, the unmodified word first.
///
/// Positions of the original word are visited left to right; each
/// substitutable position multiplies the working set by one plus its
/// replacement count, keeping the variants that leave it untouched.
pub fn leet_variations(word: &str) -> Vec<String> {
    let mut variants = vec![word.to_string()];
    for (idx, c) in word.char_indices() {
        if let Some(subs) = leet::substitutions(c) {
            // bytes from this position to the end are still original in every variant
            let tail_len = word.len() - idx;
            let rest = &word[idx + c.len_utf8()..];
            let mut added = Vec::with_capacity(variants.len() * subs.len());
            for variant in &variants {
                let head = &variant[..variant.len() - tail_len];
                for sub in subs {
                    added.push(format!("{}{}{}", head, sub, rest));
                }
            }
            variants.extend(added);
        }
    }
    variants
}

/// Per-character simple uppercase mapping.
///
/// Where the full mapping expands to several characters the simple
/// mapping is used instead, and characters without one are kept.
pub fn simple_uppercase(word: &str) -> String {
    word.chars()
        .map(|c| single(c.to_uppercase()).or_else(|| expanded_upper(c)).unwrap_or(c))
        .collect()
}

/// Per-character simple lowercase mapping, same rules as [`simple_uppercase`].
pub fn simple_lowercase(word: &str) -> String {
    word.chars()
        .map(|c| single(c.to_lowercase()).or_else(|| expanded_lower(c)).unwrap_or(c))
        .collect()
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Simple uppercase of characters whose full uppercase is multi-character.
/// Greek letters with ypogegrammeni map to their prosgegrammeni capital.
fn expanded_upper(c: char) -> Option<char> {
    let cp = c as u32;
    let mapped = match cp {
        0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7 => cp + 8,
        0x1FB3 | 0x1FC3 | 0x1FF3 => cp + 9,
        _ => return None,
    };
    char::from_u32(mapped)
}

/// Simple lowercase of characters whose full lowercase is multi-character.
fn expanded_lower(c: char) -> Option<char> {
    match c {
        '\u{130}' => Some('i'),
        _ => None,
    }
}
