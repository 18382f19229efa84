//! Incremental, restartable lexer for CSS-family source.
//!
//! Classifies every byte of a CSS, SCSS, Less, or HSS document into a
//! [`Style`] and computes a fold level per line, the way an editing host
//! expects: the host may request a re-scan of any range starting at a line
//! boundary, and the scan resumes from one packed context integer per line
//! plus the style persisted for the byte before the range — no rescan from
//! the top of the document.
//!
//! Hosts with their own document store implement [`Styler`] and call
//! [`scan`] over the dirty range. For one-shot use there is [`highlight`]:
//!
//! ```
//! use cascade_lexer::{highlight, KeywordSets, LexOptions, Style};
//!
//! let keywords = KeywordSets::default_lists();
//! let buffer = highlight("a{color:red}", LexOptions::default(), &keywords);
//! assert_eq!(buffer.styles()[0], Style::Tag);
//! assert_eq!(buffer.styles().len(), "a{color:red}".len());
//! ```

pub mod keywords;

mod escape;
mod scanner;
mod style_context;
mod styler;

pub use cascade_lexer_core::{
    Dialect, FoldLevel, FoldTracker, LineContext, SourceText, Style, FOLD_BASE,
};
pub use keywords::{KeywordSets, WordSet};
pub use scanner::{scan, LexOptions};
pub use styler::{StyleBuffer, Styler};

/// Scan a whole document into a fresh [`StyleBuffer`].
pub fn highlight(text: &str, options: LexOptions, keywords: &KeywordSets) -> StyleBuffer {
    let source = SourceText::new(text);
    let mut buffer = StyleBuffer::for_document(&source);
    scan(
        &source,
        0..source.len(),
        Style::Default,
        options,
        keywords,
        &mut buffer,
    );
    buffer
}
