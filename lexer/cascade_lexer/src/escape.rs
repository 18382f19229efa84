//! Escape and unicode-range sub-scanner state.
//!
//! Entered from string, url, and identifier contexts on a `\`; remembers the
//! state to hand control back to and a remaining-character budget. The byte
//! that misses the budget or the hex test is not part of the escape: the
//! scanner re-dispatches it in the restored outer state without advancing.

use cascade_lexer_core::{char_class::is_unicode_range_char, Style};

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct EscapeSequence {
    /// State to resume once the escape ends.
    pub(crate) outer: Style,
    pub(crate) digits_left: i32,
}

impl EscapeSequence {
    /// Arm for a `\` seen in `outer`. A hex digit next means up to six hex
    /// digits may follow; anything else is a single literally-escaped byte.
    pub(crate) fn reset(&mut self, outer: Style, next: u8) {
        self.outer = outer;
        self.digits_left = if next.is_ascii_hexdigit() { 6 } else { 1 };
    }

    /// Spend one unit of budget on `b`; `true` when the escape is over.
    pub(crate) fn at_escape_end(&mut self, b: u8) -> bool {
        self.digits_left -= 1;
        self.digits_left <= 0 || !b.is_ascii_hexdigit()
    }

    /// Same, for a `u+...` unicode-range token (`?` wildcards allowed).
    pub(crate) fn at_range_end(&mut self, b: u8) -> bool {
        self.digits_left -= 1;
        self.digits_left <= 0 || !is_unicode_range_char(b)
    }
}
