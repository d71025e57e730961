//! Code-point filter for extracting kanji from arbitrary text.

use std::collections::HashSet;

use crate::constants::{KANJI_RANGE_HIGH, KANJI_RANGE_LOW};

/// Check if the given character is a kanji.
///
/// True iff the scalar value lies strictly between U+4E00 and U+9FFF
/// (CJK Unified Ideographs, exclusive on both ends).
pub fn is_kanji(c: char) -> bool {
    let cp = c as u32;
    KANJI_RANGE_LOW < cp && cp < KANJI_RANGE_HIGH
}

/// Return all distinct kanji in a string, in order of first appearance.
///
/// Pure function with no error conditions; input with no qualifying
/// characters yields an empty vec.
pub fn filter_kanji(text: &str) -> Vec<char> {
    let mut seen = HashSet::new();
    text.chars()
        .filter(|&c| is_kanji(c) && seen.insert(c))
        .collect()
}
