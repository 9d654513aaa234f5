//! Character-level Unicode classification for the width and kana passes.
//!
//! The ranges here are the ones the conversion rules key off. They are
//! deliberately narrower than the Unicode blocks they live in: a character
//! outside every range below is never touched by a direction flag.

/// Distance between a fullwidth ASCII variant (U+FF01..U+FF5E) and its ASCII
/// counterpart (U+0021..U+007E).
pub const FULLWIDTH_ASCII_OFFSET: u32 = 0xFF00 - 0x20;

/// Distance between a katakana letter and the hiragana letter it pairs with.
pub const KANA_OFFSET: u32 = 0x30A0 - 0x3040;

pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';
pub const HALFWIDTH_VOICED_MARK: char = '\u{FF9E}';
pub const HALFWIDTH_SEMI_VOICED_MARK: char = '\u{FF9F}';
pub const COMBINING_VOICED_MARK: char = '\u{3099}';

/// FULLWIDTH EXCLAMATION MARK through FULLWIDTH TILDE: the part of the
/// fullwidth block that shifts linearly onto printable ASCII.
pub fn is_fullwidth_ascii(c: char) -> bool {
    ('\u{FF01}'..='\u{FF5E}').contains(&c)
}

/// Halfwidth katakana, Hangul and symbol forms (U+FF61..U+FFEF).
pub fn is_halfwidth_form(c: char) -> bool {
    ('\u{FF61}'..='\u{FFEF}').contains(&c)
}

/// HALFWIDTH HANGUL FILLER through HALFWIDTH HANGUL LETTER I.
pub fn is_halfwidth_hangul(c: char) -> bool {
    ('\u{FFA0}'..='\u{FFDC}').contains(&c)
}

/// The halfwidth symbol tail of the block, arrows and box drawing included.
pub fn is_halfwidth_symbol(c: char) -> bool {
    ('\u{FFE0}'..='\u{FFEF}').contains(&c)
}

/// KATAKANA LETTER SMALL A through KATAKANA LETTER VU.
pub fn is_core_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30F4}').contains(&c)
}

/// KATAKANA LETTER SMALL KA and SMALL KE.
pub fn is_small_katakana_ka_ke(c: char) -> bool {
    ('\u{30F5}'..='\u{30F6}').contains(&c)
}

/// KATAKANA ITERATION MARK and its voiced form.
pub fn is_katakana_iteration_mark(c: char) -> bool {
    ('\u{30FD}'..='\u{30FE}').contains(&c)
}

/// HIRAGANA LETTER SMALL A through HIRAGANA LETTER VU.
pub fn is_core_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3094}').contains(&c)
}

/// HIRAGANA LETTER SMALL KA and SMALL KE.
pub fn is_small_hiragana_ka_ke(c: char) -> bool {
    ('\u{3095}'..='\u{3096}').contains(&c)
}

/// HIRAGANA ITERATION MARK and its voiced form.
pub fn is_hiragana_iteration_mark(c: char) -> bool {
    ('\u{309D}'..='\u{309E}').contains(&c)
}

/// Shift `c` by `offset` code points, staying within valid scalar values.
///
/// Every caller shifts between two assigned ranges, so the fallback to `c`
/// only guards against misuse.
pub(crate) fn shift_down(c: char, offset: u32) -> char {
    (c as u32)
        .checked_sub(offset)
        .and_then(char::from_u32)
        .unwrap_or(c)
}

pub(crate) fn shift_up(c: char, offset: u32) -> char {
    char::from_u32(c as u32 + offset).unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullwidth_ranges() {
        assert!(is_fullwidth_ascii('！'));
        assert!(is_fullwidth_ascii('～'));
        assert!(!is_fullwidth_ascii('｟'));
        assert!(!is_fullwidth_ascii('!'));
    }

    #[test]
    fn test_halfwidth_ranges() {
        assert!(is_halfwidth_form('｡'));
        assert!(is_halfwidth_form('ﾝ'));
        assert!(is_halfwidth_form('￮'));
        assert!(is_halfwidth_hangul('\u{FFA0}'));
        assert!(is_halfwidth_hangul('ￜ'));
        assert!(!is_halfwidth_hangul('ﾝ'));
        assert!(is_halfwidth_symbol('￦'));
        assert!(is_halfwidth_symbol('￩'));
        assert!(!is_halfwidth_symbol('ￜ'));
    }

    #[test]
    fn test_kana_letter_ranges() {
        assert!(is_core_katakana('ァ'));
        assert!(is_core_katakana('ヴ'));
        assert!(!is_core_katakana('ヵ'));
        assert!(is_small_katakana_ka_ke('ヶ'));
        assert!(is_katakana_iteration_mark('ヾ'));
        assert!(is_core_hiragana('ぁ'));
        assert!(is_core_hiragana('ゔ'));
        assert!(!is_core_hiragana('ゕ'));
        assert!(is_small_hiragana_ka_ke('ゖ'));
        assert!(is_hiragana_iteration_mark('ゝ'));
    }

    #[test]
    fn test_offsets() {
        assert_eq!(shift_down('Ａ', FULLWIDTH_ASCII_OFFSET), 'A');
        assert_eq!(shift_down('カ', KANA_OFFSET), 'か');
        assert_eq!(shift_up('か', KANA_OFFSET), 'カ');
        assert_eq!(shift_down('\0', KANA_OFFSET), '\0');
    }
}
