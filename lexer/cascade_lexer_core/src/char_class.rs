//! Byte classification predicates.
//!
//! CSS identifiers admit `-` and any non-ASCII byte, so the continuation
//! test uses a 256-entry lookup table in the manner of a hand-written
//! scanner hot loop. The `0x00` sentinel byte used for out-of-range reads
//! maps to `false` in every table and predicate, so token loops terminate
//! naturally at the end of the scanned range.

/// 256-byte lookup table for CSS identifier bytes.
/// `true` for a-z, A-Z, 0-9, underscore, `-`, and every byte >= 0x80
/// (multi-byte UTF-8 sequences ride along inside identifiers).
static IS_CSS_IDENT_CHAR_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0usize;
    while i < 256 {
        // i is 0..=255, always fits in u8
        #[allow(clippy::cast_possible_truncation)]
        let b = i as u8;
        table[i] = matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-')
            || b >= 0x80;
        i += 1;
    }
    table
};

/// Returns `true` if `b` may appear inside a CSS identifier.
#[inline]
pub fn is_css_ident_char(b: u8) -> bool {
    IS_CSS_IDENT_CHAR_TABLE[b as usize]
}

/// Returns `true` if `b` may start a plain identifier (letter, underscore,
/// or a non-ASCII lead byte). `-`, `@`, and `$` starts are handled by the
/// dialect-aware [`is_css_ident_start_ex`].
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

/// Returns `true` if `b` at the current position, with `next` following,
/// starts an identifier-shaped token (used when a number run turns into a
/// dimension: `10px`, `-2em`).
#[inline]
pub fn is_css_ident_start(b: u8, next: u8) -> bool {
    is_ident_start(b) || (b == b'-' && is_css_ident_char(next))
}

/// Returns `true` if `b` is a digit, or a `.` leading into a digit: the two
/// shapes that can open a numeric literal.
#[inline]
pub fn is_number_start(b: u8, next: u8) -> bool {
    b.is_ascii_digit() || (b == b'.' && next.is_ascii_digit())
}

/// Returns `true` while a numeric run continues.
///
/// Hex digits (not just decimal) are accepted so `#fff` color literals and
/// `1e5` exponents stay inside the number run; the first non-hex letter is
/// where a dimension suffix splits off (`10px` stops at `p`). A `.` continues
/// the run unless it starts a `..`, and a sign continues it only directly
/// after an exponent marker.
#[inline]
pub fn is_decimal_number(prev: u8, b: u8, next: u8) -> bool {
    b.is_ascii_hexdigit()
        || (b == b'.' && next != b'.')
        || ((b == b'+' || b == b'-') && (prev == b'e' || prev == b'E') && next.is_ascii_digit())
}

/// Returns `true` for bytes valid inside a `u+...` unicode-range token:
/// hex digits and the `?` wildcard.
#[inline]
pub fn is_unicode_range_char(b: u8) -> bool {
    b.is_ascii_hexdigit() || b == b'?'
}

/// Printable ASCII other than space: anything that can become a one-byte
/// operator token.
#[inline]
pub fn is_graphic(b: u8) -> bool {
    b > b' ' && b < 0x7F
}

/// Line terminator bytes.
#[inline]
pub fn is_eol(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}
