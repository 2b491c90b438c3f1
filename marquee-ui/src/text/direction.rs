//! Base direction detection for marquee text

use unicode_bidi::BidiInfo;

use crate::geometry::LayoutDirection;

/// Base direction of a paragraph of text.
///
/// Follows the first strong character; text without one (digits,
/// punctuation, empty) is left-to-right.
pub fn text_direction(text: &str) -> LayoutDirection {
    let info = BidiInfo::new(text, None);
    match info.paragraphs.first() {
        Some(paragraph) if paragraph.level.is_rtl() => LayoutDirection::Rtl,
        _ => LayoutDirection::Ltr,
    }
}

/// Check if the text has a left-to-right base direction
pub fn is_ltr_text(text: &str) -> bool {
    text_direction(text).is_ltr()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_is_ltr() {
        assert!(is_ltr_text("Hello World"));
    }

    #[test]
    fn test_hebrew_and_arabic_are_rtl() {
        assert!(!is_ltr_text("שלום עולם"));
        assert!(!is_ltr_text("مرحبا بالعالم"));
    }

    #[test]
    fn test_first_strong_character_wins() {
        assert!(!is_ltr_text("123 שלום Hello"));
        assert!(is_ltr_text("Hello שלום"));
    }

    #[test]
    fn test_neutral_text_defaults_to_ltr() {
        assert!(is_ltr_text(""));
        assert!(is_ltr_text("   "));
        assert!(is_ltr_text("12345 !?"));
    }
}
