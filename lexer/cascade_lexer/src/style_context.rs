//! Scan cursor over one requested range.
//!
//! Tracks the current position with one byte of lookbehind and one of
//! lookahead, the state the current run opened in, and the line bookkeeping
//! needed to commit per-line records. Styles are flushed as runs: a run is
//! open from the position [`set_state`](StyleContext::set_state) was last
//! called at, and written through the [`Styler`] when the state next changes.
//!
//! Lookahead reads the whole document, not just the requested range; the
//! document does not end where a partial re-scan does, and classification of
//! the last token on a line must see the same bytes a full scan would.
//! Reads past the document end return the `0x00` sentinel.

use cascade_lexer_core::{FoldLevel, SourceText, Style};
use std::ops::Range;

use crate::styler::Styler;

pub(crate) struct StyleContext<'a, 'text, S: Styler> {
    text: &'a SourceText<'text>,
    styler: &'a mut S,
    pos: usize,
    end: usize,
    run_start: usize,
    pub(crate) state: Style,
    pub(crate) line: usize,
    line_start: usize,
    next_line_start: usize,
    pub(crate) ch_prev: u8,
    pub(crate) ch: u8,
    pub(crate) ch_next: u8,
}

impl<'a, 'text, S: Styler> StyleContext<'a, 'text, S> {
    pub(crate) fn new(
        text: &'a SourceText<'text>,
        range: Range<usize>,
        init_style: Style,
        styler: &'a mut S,
    ) -> Self {
        let line = text.line_of(range.start);
        let ch_prev = if range.start > 0 {
            text.byte(range.start - 1)
        } else {
            0
        };
        Self {
            text,
            styler,
            pos: range.start,
            end: range.end,
            run_start: range.start,
            state: init_style,
            line,
            line_start: text.line_start(line),
            next_line_start: text.line_start(line + 1),
            ch_prev,
            ch: text.byte(range.start),
            ch_next: text.byte(range.start + 1),
        }
    }

    /// More bytes left in the requested range.
    #[inline]
    pub(crate) fn more(&self) -> bool {
        self.pos < self.end
    }

    /// The current position is the first byte of its line.
    #[inline]
    pub(crate) fn at_line_start(&self) -> bool {
        self.pos == self.line_start
    }

    /// The current position is the last byte of its line, or of the range.
    #[inline]
    pub(crate) fn at_line_end(&self) -> bool {
        self.pos + 1 == self.next_line_start || self.pos + 1 >= self.end
    }

    /// Advance one byte, rolling the lookbehind/lookahead window and the
    /// line bookkeeping.
    pub(crate) fn forward(&mut self) {
        self.pos += 1;
        if self.pos >= self.next_line_start {
            self.line += 1;
            self.line_start = self.next_line_start;
            self.next_line_start = self.text.line_start(self.line + 1);
        }
        self.ch_prev = self.ch;
        self.ch = self.ch_next;
        self.ch_next = self.text.byte(self.pos + 1);
    }

    /// Advance `n` bytes.
    pub(crate) fn forward_by(&mut self, n: usize) {
        for _ in 0..n {
            self.forward();
        }
    }

    /// Close the open run at the current position and start a new one in
    /// `state`. The current byte belongs to the new run.
    pub(crate) fn set_state(&mut self, state: Style) {
        if self.run_start < self.pos {
            self.styler.style_run(self.run_start, self.pos, self.state);
        }
        self.run_start = self.pos;
        self.state = state;
    }

    /// Advance first, then change state: the current byte stays in the old
    /// run, the new run starts at the next byte.
    pub(crate) fn forward_set_state(&mut self, state: Style) {
        self.forward();
        self.set_state(state);
    }

    /// Retag the open run without closing it.
    #[inline]
    pub(crate) fn change_state(&mut self, state: Style) {
        self.state = state;
    }

    /// Flush the final run. Call once, after the loop.
    ///
    /// A token-closing step may step one byte past the range end before the
    /// loop notices, so the flush is clamped to the range.
    pub(crate) fn complete(&mut self) {
        let stop = self.pos.min(self.end);
        if self.run_start < stop {
            self.styler.style_run(self.run_start, stop, self.state);
        }
    }

    /// Current byte and its successor match the pair.
    #[inline]
    pub(crate) fn matches(&self, a: u8, b: u8) -> bool {
        self.ch == a && self.ch_next == b
    }

    /// Byte `n` positions ahead of the current one.
    #[inline]
    pub(crate) fn relative(&self, n: usize) -> u8 {
        self.text.byte(self.pos + n)
    }

    /// First byte at or after the current position (or its successor when
    /// `from_next`) that is not whitespace.
    pub(crate) fn next_doc_char(&self, from_next: bool) -> u8 {
        let mut pos = if from_next { self.pos + 1 } else { self.pos };
        loop {
            let b = self.text.byte(pos);
            if !matches!(b, b' ' | b'\t' | b'\r' | b'\n') {
                return b;
            }
            pos += 1;
        }
    }

    /// The open run's text, ASCII-lowercased.
    pub(crate) fn token_lowered(&self) -> String {
        String::from_utf8_lossy(&self.text.as_bytes()[self.run_start..self.pos])
            .to_ascii_lowercase()
    }

    /// Commit the fold record for the current line.
    pub(crate) fn commit_fold(&mut self, record: FoldLevel) {
        self.styler.set_fold(self.line, record);
    }

    /// Commit the packed context for the current line.
    pub(crate) fn commit_line_context(&mut self, bits: u32) {
        self.styler.set_line_context(self.line, bits);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::styler::StyleBuffer;

    #[test]
    fn runs_flush_on_state_change() {
        let text = SourceText::new("aaabb");
        let mut buffer = StyleBuffer::for_document(&text);
        let mut sc = StyleContext::new(&text, 0..text.len(), Style::Default, &mut buffer);
        sc.set_state(Style::Tag);
        sc.forward_by(3);
        sc.set_state(Style::Number);
        sc.forward_by(2);
        sc.complete();
        assert_eq!(
            buffer.styles(),
            &[
                Style::Tag,
                Style::Tag,
                Style::Tag,
                Style::Number,
                Style::Number
            ]
        );
    }

    #[test]
    fn forward_set_state_keeps_current_byte_in_old_run() {
        let text = SourceText::new("ab");
        let mut buffer = StyleBuffer::for_document(&text);
        let mut sc = StyleContext::new(&text, 0..text.len(), Style::StringSingle, &mut buffer);
        sc.forward_set_state(Style::Default);
        sc.forward();
        sc.complete();
        assert_eq!(buffer.styles(), &[Style::StringSingle, Style::Default]);
    }

    #[test]
    fn line_window_rolls_across_newlines() {
        let text = SourceText::new("a\nbc");
        let mut buffer = StyleBuffer::for_document(&text);
        let mut sc = StyleContext::new(&text, 0..text.len(), Style::Default, &mut buffer);
        assert!(sc.at_line_start());
        assert!(!sc.at_line_end());
        sc.forward(); // '\n'
        assert!(sc.at_line_end());
        assert_eq!(sc.line, 0);
        sc.forward(); // 'b'
        assert_eq!(sc.line, 1);
        assert!(sc.at_line_start());
        assert_eq!((sc.ch_prev, sc.ch, sc.ch_next), (b'\n', b'b', b'c'));
    }

    #[test]
    fn lookahead_crosses_the_range_end_but_not_the_document_end() {
        let text = SourceText::new("ab\ncd");
        let mut buffer = StyleBuffer::for_document(&text);
        let sc = StyleContext::new(&text, 0..3, Style::Default, &mut buffer);
        // range ends at the line boundary; the document continues
        assert_eq!(sc.relative(3), b'c');
        assert_eq!(sc.relative(4), b'd');
        assert_eq!(sc.relative(9), 0);
    }

    #[test]
    fn resumed_cursor_sees_the_previous_byte() {
        let text = SourceText::new("ab\ncd");
        let mut buffer = StyleBuffer::for_document(&text);
        let sc = StyleContext::new(&text, 3..5, Style::Default, &mut buffer);
        assert_eq!(sc.ch_prev, b'\n');
        assert_eq!(sc.ch, b'c');
        assert_eq!(sc.line, 1);
    }

    #[test]
    fn next_doc_char_skips_whitespace() {
        let text = SourceText::new("a \t\n (");
        let mut buffer = StyleBuffer::for_document(&text);
        let sc = StyleContext::new(&text, 0..text.len(), Style::Default, &mut buffer);
        assert_eq!(sc.next_doc_char(false), b'a');
        assert_eq!(sc.next_doc_char(true), b'(');
    }

    #[test]
    fn next_doc_char_returns_sentinel_at_document_end() {
        let text = SourceText::new("a   ");
        let mut buffer = StyleBuffer::for_document(&text);
        let sc = StyleContext::new(&text, 0..text.len(), Style::Default, &mut buffer);
        assert_eq!(sc.next_doc_char(true), 0);
    }

    #[test]
    fn token_lowered_covers_the_open_run() {
        let text = SourceText::new("COLor:");
        let mut buffer = StyleBuffer::for_document(&text);
        let mut sc = StyleContext::new(&text, 0..text.len(), Style::Default, &mut buffer);
        sc.set_state(Style::Identifier);
        sc.forward_by(5);
        assert_eq!(sc.token_lowered(), "color");
    }
}
