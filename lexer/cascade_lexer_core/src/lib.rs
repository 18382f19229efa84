//! Standalone primitives for the cascade CSS-family lexer.
//!
//! This crate carries everything the scanner needs that is not the scanner
//! itself: the per-byte [`Style`] classification, the [`Dialect`] selector,
//! byte-class predicates, the packed per-line [`LineContext`] codec, the
//! [`FoldTracker`], and the [`SourceText`] line index. It has no dependency
//! on the scanning crate so external tools (theme previews, golden-file
//! printers) can use these types without pulling in the automaton.

pub mod char_class;

mod dialect;
mod fold;
mod line_state;
mod source_text;
mod style;

pub use dialect::Dialect;
pub use fold::{FoldLevel, FoldTracker, FOLD_BASE};
pub use line_state::LineContext;
pub use source_text::SourceText;
pub use style::Style;
