//! Character-level Unicode classification for Ethiopic text.

/// Check the full Ethiopic block (U+1200..U+137F): syllables, punctuation and numerals.
pub fn is_ethiopic(c: char) -> bool {
    ('\u{1200}'..='\u{137F}').contains(&c)
}

/// Syllabary only (U+1200..U+135A). The block has a few unassigned codepoints
/// inside this range, but none of them are produced by transliteration.
pub fn is_ethiopic_syllable(c: char) -> bool {
    ('\u{1200}'..='\u{135A}').contains(&c)
}

/// Ethiopic punctuation marks (U+1360..U+1368), e.g. ። and ፣.
pub fn is_ethiopic_punctuation(c: char) -> bool {
    ('\u{1360}'..='\u{1368}').contains(&c)
}

/// Ge'ez numeral glyphs: ones ፩..፱, tens ፲..፺, hundred ፻, ten-thousand ፼.
/// The range is contiguous (U+1369..U+137C), so this is exactly the numeral alphabet.
pub fn is_geez_numeral(c: char) -> bool {
    ('\u{1369}'..='\u{137C}').contains(&c)
}

/// Count characters that are neither Ethiopic nor whitespace. Used to report
/// keystrokes that fell through the glyph table unchanged.
pub fn count_non_ethiopic(s: &str) -> usize {
    s.chars()
        .filter(|&c| !is_ethiopic(c) && !c.is_whitespace())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_ethiopic('ሀ'));
        assert!(is_ethiopic('።'));
        assert!(is_ethiopic('፻'));
        assert!(!is_ethiopic('a'));
        assert!(is_ethiopic_syllable('ህ'));
        assert!(is_ethiopic_syllable('ፐ'));
        assert!(!is_ethiopic_syllable('።'));
        assert!(is_ethiopic_punctuation('፣'));
        assert!(!is_ethiopic_punctuation('ሀ'));
    }

    #[test]
    fn test_geez_numeral_range() {
        for c in "፩፪፫፬፭፮፯፰፱፲፳፴፵፶፷፸፹፺፻፼".chars() {
            assert!(is_geez_numeral(c), "{c} should be a numeral");
        }
        assert!(!is_geez_numeral('1'));
        assert!(!is_geez_numeral('።'));
        assert!(!is_geez_numeral('\u{137D}'));
    }

    #[test]
    fn test_count_non_ethiopic() {
        assert_eq!(count_non_ethiopic("ሰላም"), 0);
        assert_eq!(count_non_ethiopic("ሰላም ዓለም"), 0);
        assert_eq!(count_non_ethiopic("ሰ1ላም!"), 2);
        assert_eq!(count_non_ethiopic(""), 0);
    }
}
