//! The host-facing storage interface.
//!
//! The scanner never allocates result storage of its own: every style run,
//! fold record, and packed line context is written through a [`Styler`]
//! supplied by the caller. An editing host backs this with its own document
//! store; [`StyleBuffer`] is the plain in-memory implementation used by
//! [`highlight`](crate::highlight) and the test suite.

use cascade_lexer_core::{FoldLevel, SourceText, Style};

/// Per-position style and per-line metadata store the scanner writes into.
///
/// Reads outside the scanned range are only issued for the line immediately
/// before a resumed scan ([`line_context`](Self::line_context) /
/// [`fold_at`](Self::fold_at)) and for the lookbehind seed
/// ([`style_at`](Self::style_at) below the range start). Implementations
/// should return defaults for anything never written.
pub trait Styler {
    /// Record `style` for every position in `start..end`.
    fn style_run(&mut self, start: usize, end: usize, style: Style);

    /// The style previously recorded at `pos`.
    fn style_at(&self, pos: usize) -> Style;

    /// Store the packed scan context at the end of `line`.
    fn set_line_context(&mut self, line: usize, bits: u32);

    /// The packed scan context stored for `line`.
    fn line_context(&self, line: usize) -> u32;

    /// Store the fold record for `line`.
    fn set_fold(&mut self, line: usize, level: FoldLevel);

    /// The fold record stored for `line`.
    fn fold_at(&self, line: usize) -> FoldLevel;
}

/// Vec-backed [`Styler`] covering one whole document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleBuffer {
    styles: Vec<Style>,
    line_contexts: Vec<u32>,
    folds: Vec<FoldLevel>,
}

impl StyleBuffer {
    /// Empty buffer sized for `text`.
    pub fn for_document(text: &SourceText) -> Self {
        Self {
            styles: vec![Style::Default; text.len()],
            line_contexts: vec![0; text.line_count()],
            folds: vec![FoldLevel::default(); text.line_count()],
        }
    }

    /// One style per document byte.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }
}

impl Styler for StyleBuffer {
    fn style_run(&mut self, start: usize, end: usize, style: Style) {
        let end = end.min(self.styles.len());
        let start = start.min(end);
        for slot in &mut self.styles[start..end] {
            *slot = style;
        }
    }

    fn style_at(&self, pos: usize) -> Style {
        self.styles.get(pos).copied().unwrap_or_default()
    }

    fn set_line_context(&mut self, line: usize, bits: u32) {
        if let Some(slot) = self.line_contexts.get_mut(line) {
            *slot = bits;
        }
    }

    fn line_context(&self, line: usize) -> u32 {
        self.line_contexts.get(line).copied().unwrap_or(0)
    }

    fn set_fold(&mut self, line: usize, level: FoldLevel) {
        if let Some(slot) = self.folds.get_mut(line) {
            *slot = level;
        }
    }

    fn fold_at(&self, line: usize) -> FoldLevel {
        self.folds.get(line).copied().unwrap_or_default()
    }
}
