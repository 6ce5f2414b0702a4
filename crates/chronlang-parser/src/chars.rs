//! Identifier character classification.
//!
//! Chronlang identifiers admit ordinary words, IPA glyphs and phonetic
//! symbols: any character from the allow-listed Unicode ranges below that
//! is not reserved punctuation. The tables are `const` and shared by every
//! parse; nothing is rebuilt per call.

/// Punctuation with grammatical meaning, never part of an identifier.
const RESERVED: [char; 21] = [
    '[', ']', '{', '}', '(', ')', '-', '+', '>', '<', '/', '_', '#', '.', ':', '$', '@', ',',
    '\'', '"', '|',
];

/// Inclusive codepoint ranges admitted in identifiers.
pub(crate) const IDENT_RANGES: [(char, char); 18] = [
    ('\u{0021}', '\u{007E}'), // Basic Latin, printable
    ('\u{00A1}', '\u{00FF}'), // Latin-1 Supplement
    ('\u{0100}', '\u{017F}'), // Latin Extended-A
    ('\u{0180}', '\u{024F}'), // Latin Extended-B
    ('\u{0250}', '\u{0251}'), // IPA Extensions
    ('\u{0370}', '\u{0373}'), // Greek and Coptic, base letters only
    ('\u{0376}', '\u{0377}'),
    ('\u{037B}', '\u{037D}'),
    ('\u{037F}', '\u{037F}'),
    ('\u{0386}', '\u{03FF}'),
    ('\u{1D00}', '\u{1D2B}'), // Phonetic Extensions, excluding superscripts
    ('\u{1D6B}', '\u{1D77}'),
    ('\u{1D79}', '\u{1D7F}'),
    ('\u{1D80}', '\u{1D9A}'), // Phonetic Extensions Supplement
    ('\u{2100}', '\u{214F}'), // Letterlike Symbols
    ('\u{2C60}', '\u{2C7F}'), // Latin Extended-C
    ('\u{A722}', '\u{A7FF}'), // Latin Extended-D
    ('\u{AB30}', '\u{AB68}'), // Latin Extended-E
];

pub(crate) fn is_ident_char(c: char) -> bool {
    !RESERVED.contains(&c) && IDENT_RANGES.iter().any(|&(lo, hi)| lo <= c && c <= hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_letters_and_digits() {
        assert!(is_ident_char('a'));
        assert!(is_ident_char('Z'));
        assert!(is_ident_char('0'));
    }

    #[test]
    fn test_reserved_punctuation_rejected() {
        for c in RESERVED {
            assert!(!is_ident_char(c), "{c:?} should be reserved");
        }
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(!is_ident_char(' '));
        assert!(!is_ident_char('\t'));
        assert!(!is_ident_char('\n'));
    }

    #[test]
    fn test_phonetic_glyphs() {
        assert!(is_ident_char('æ')); // Latin-1 Supplement
        assert!(is_ident_char('ŋ')); // Latin Extended-A
        assert!(is_ident_char('ε')); // Greek
        assert!(is_ident_char('ℂ')); // Letterlike Symbols
        assert!(is_ident_char('ꜧ')); // Latin Extended-D
    }

    #[test]
    fn test_outside_ranges_rejected() {
        assert!(!is_ident_char('ʰ')); // U+02B0, spacing modifier
        assert!(!is_ident_char('一')); // CJK
    }
}
