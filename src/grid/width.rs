//! Display width of cell text in terminal columns.
//!
//! Text is measured per grapheme cluster with Unicode East Asian Width
//! rules, so a decoded key with multi-byte characters or emoji sequences
//! measures by what the terminal shows, not by its UTF-8 length.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Terminal columns taken by one codepoint; 0 for control and combining
/// characters.
#[inline]
pub fn char_width(c: char) -> usize {
    match c as u32 {
        // pictographs terminals draw wide
        0x1F300..=0x1F64F | 0x1F680..=0x1F6FF | 0x1F900..=0x1F9FF | 0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Terminal columns taken by one user-perceived character.
///
/// Flags, ZWJ sequences, skin tones, VS16 and keycaps all draw as one wide
/// glyph. A base character with combining marks takes the base's width.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };
    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    // regional indicator pair
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }
    if chars.any(|c| matches!(c as u32, 0x200D | 0xFE0F | 0x20E3 | 0x1F3FB..=0x1F3FF)) {
        return 2;
    }
    char_width(first)
}

pub fn display_width(s: &str) -> usize {
    if s.is_ascii() {
        return s.bytes().filter(|b| !b.is_ascii_control()).count();
    }
    s.graphemes(true).map(grapheme_width).sum()
}

/// Longest prefix of `s` that fits in `max` columns, with its width.
///
/// Cuts only between grapheme clusters. A wide glyph that would straddle
/// the limit is left out, so the returned width can be one short of `max`.
pub fn truncate(s: &str, max: usize) -> (&str, usize) {
    let mut used = 0;
    for (idx, g) in s.grapheme_indices(true) {
        let w = grapheme_width(g);
        if used + w > max {
            return (&s[..idx], used);
        }
        used += w;
    }
    (s, used)
}
