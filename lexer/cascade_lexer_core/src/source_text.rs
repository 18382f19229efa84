//! Document text with a newline index.
//!
//! Wraps the host's document as `&str` and pre-computes line start offsets
//! with a SIMD-accelerated `memchr` pass, so the scanner can answer
//! line-of-position and line-start queries in O(log n) / O(1) during the
//! per-byte loop.

/// Borrowed document text plus its line index.
#[derive(Clone, Debug)]
pub struct SourceText<'a> {
    text: &'a [u8],
    /// Byte offset of each line start. Always begins with 0; a line starts
    /// after every `\n`.
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    /// Build the line index over `text`.
    pub fn new(text: &'a str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        let mut offset = 0;
        while let Some(pos) = memchr::memchr(b'\n', &bytes[offset..]) {
            offset += pos + 1;
            line_starts.push(offset);
        }
        Self {
            text: bytes,
            line_starts,
        }
    }

    /// Length of the document in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the document is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The raw document bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.text
    }

    /// The byte at `pos`, or `0x00` past the end of the document.
    ///
    /// The sentinel return means classification predicates all read "no"
    /// for out-of-range lookahead, so token loops stop at the boundary
    /// without explicit checks at every call site.
    #[inline]
    pub fn byte(&self, pos: usize) -> u8 {
        self.text.get(pos).copied().unwrap_or(0)
    }

    /// Number of lines. An empty document has one (empty) line; a trailing
    /// `\n` opens a final empty line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line index containing byte `pos`. Positions at or past the end of
    /// the document report the last line.
    pub fn line_of(&self, pos: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= pos) - 1
    }

    /// Byte offset where `line` starts. Lines past the end report the
    /// document length, so `line_start(line + 1)` is always a valid
    /// exclusive bound for `line`.
    pub fn line_start(&self, line: usize) -> usize {
        self.line_starts.get(line).copied().unwrap_or(self.text.len())
    }
}
