//! Per-byte lexical style tags.
//!
//! One `Style` is persisted for every scanned byte; it is both the color the
//! host paints with and the scanner state the byte was consumed in. The
//! discriminants are grouped into semantic bands so the whitespace-equivalence
//! test stays a single comparison.

/// Lexical classification of a scanned byte.
///
/// # Discriminant layout
///
/// The whitespace-equivalent styles (default text, comments, the HTML
/// `<!--`/`-->` delimiters) occupy the lowest discriminants so that
/// [`is_space_equiv()`](Self::is_space_equiv) is one unsigned comparison.
/// Everything at or below [`Style::HtmlComment`] is invisible to the
/// lookbehind bookkeeping.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    // Whitespace-equivalent: 0-5. Keep this band at the bottom.
    #[default]
    Default = 0,
    CommentBlock = 1,
    CommentBlockDoc = 2,
    CommentLine = 3,
    CommentLineDoc = 4,
    /// `<!--` or `-->` wrapping a style sheet embedded in HTML.
    HtmlComment = 5,

    // Punctuation: 6-7
    Operator = 6,
    /// `+ - * /` inside a math-function argument list.
    MathOperator = 7,

    // Literals: 8-15
    Number = 8,
    /// Number with a unit suffix (`10px`, `1.5em`).
    Dimension = 9,
    StringSingle = 10,
    StringDouble = 11,
    /// Raw (unquoted) `url(...)` body.
    Url = 12,
    EscapeChar = 13,
    UnicodeRange = 14,
    Important = 15,

    // Declarations and values: 16-21
    AtRule = 16,
    Variable = 17,
    Property = 18,
    UnknownProperty = 19,
    Value = 20,
    Function = 21,

    // Selectors: 22-26
    Tag = 22,
    Class = 23,
    Id = 24,
    Attribute = 25,
    /// SCSS `%placeholder` selector.
    Placeholder = 26,

    // Identifier-like scan states, reclassified when the token closes: 27-31
    Identifier = 27,
    PseudoClass = 28,
    UnknownPseudoClass = 29,
    PseudoElement = 30,
    UnknownPseudoElement = 31,
}

impl Style {
    /// Returns `true` for styles the lookbehind bookkeeping skips over:
    /// default text, comments, and the HTML comment delimiters.
    #[inline]
    pub fn is_space_equiv(self) -> bool {
        (self as u8) <= (Style::HtmlComment as u8)
    }

    /// Returns `true` for the two property-name styles. Used to keep a `:`
    /// right after a property name from opening a pseudo-class.
    #[inline]
    pub fn is_property(self) -> bool {
        matches!(self, Style::Property | Style::UnknownProperty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_is_one_byte() {
        assert_eq!(std::mem::size_of::<Style>(), 1);
    }

    #[test]
    fn space_equiv_band_is_at_the_bottom() {
        assert_eq!(Style::Default as u8, 0);
        assert_eq!(Style::HtmlComment as u8, 5);
        for style in [
            Style::Default,
            Style::CommentBlock,
            Style::CommentBlockDoc,
            Style::CommentLine,
            Style::CommentLineDoc,
            Style::HtmlComment,
        ] {
            assert!(style.is_space_equiv(), "{style:?} should be space-equivalent");
        }
        for style in [
            Style::Operator,
            Style::Number,
            Style::Property,
            Style::Value,
            Style::Tag,
            Style::UnknownPseudoElement,
        ] {
            assert!(!style.is_space_equiv(), "{style:?} should not be space-equivalent");
        }
    }

    #[test]
    fn property_styles() {
        assert!(Style::Property.is_property());
        assert!(Style::UnknownProperty.is_property());
        assert!(!Style::Value.is_property());
        assert!(!Style::Default.is_property());
    }
}
