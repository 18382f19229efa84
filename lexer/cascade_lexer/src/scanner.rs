//! The scanning automaton.
//!
//! One pass, one byte at a time. Each iteration first lets the current
//! token's state consume or close itself, then — only if that left the
//! state at [`Style::Default`] — tries to open a new token at the same
//! byte, then records lookbehind and commits per-line state at line ends.
//! A step that restores an earlier state at the current position signals
//! [`Flow::Reenter`] so the byte is re-dispatched without advancing.
//!
//! Restarting: a scan beginning at line N seeds its context from the packed
//! integer committed for line N-1 and its fold depth from line N-1's fold
//! record; the initial state is whatever style the host persisted for the
//! byte before the range. Everything else is re-derived, including the
//! lookbehind byte/style pair, which is read back from styles below the
//! range start when the initial state is whitespace-equivalent.

use std::ops::Range;

use cascade_lexer_core::char_class::{
    is_css_ident_char, is_css_ident_start, is_decimal_number, is_eol, is_graphic, is_ident_start,
    is_number_start, is_unicode_range_char,
};
use cascade_lexer_core::{Dialect, FoldTracker, LineContext, SourceText, Style};

use crate::escape::EscapeSequence;
use crate::keywords::KeywordSets;
use crate::style_context::StyleContext;
use crate::styler::Styler;

/// Host configuration for one scan.
#[derive(Clone, Copy, Debug)]
pub struct LexOptions {
    pub dialect: Dialect,
    /// Commit fold records per line. Context and styles are unaffected.
    pub fold: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::Css,
            fold: true,
        }
    }
}

/// Outcome of one dispatch step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// Fall through to the rest of the iteration.
    Fall,
    /// Re-dispatch the current byte in the new state; skip bookkeeping.
    Reenter,
}

/// Scanner-wide context that lives outside the per-line packed integer.
///
/// None of this survives a line boundary in well-formed input: every field
/// is either re-derived on restart (`ch_prev_non_white`,
/// `style_prev_non_white` via lookbehind) or only meaningful inside a token
/// that closes before end of line.
#[derive(Default)]
struct ScanState {
    ctx: LineContext,
    /// A math-function name was just seen; the next `(` starts a calc level.
    calc_func: bool,
    /// State to restore when the current `#{...}`/`@{...}` span closes.
    interpolation: Option<Style>,
    /// Last significant byte before the token being classified opened.
    ch_before: u8,
    ch_prev_non_white: u8,
    style_prev_non_white: Style,
    esc: EscapeSequence,
}

/// Scan `range`, writing styles, fold records, and packed line contexts
/// through `styler`. `init_style` is the style persisted for the byte just
/// before the range (or `Default` at document start).
pub fn scan<S: Styler>(
    text: &SourceText,
    range: Range<usize>,
    init_style: Style,
    options: LexOptions,
    keywords: &KeywordSets,
    styler: &mut S,
) {
    let first_line = text.line_of(range.start);
    let mut st = ScanState::default();
    let mut fold = FoldTracker::new();
    if first_line > 0 {
        st.ctx = LineContext::unpack(styler.line_context(first_line - 1));
        fold = FoldTracker::resume(styler.fold_at(first_line - 1).next);
    }
    if range.start > 0 && init_style.is_space_equiv() {
        lookback_non_white(text, styler, range.start, &mut st);
    }

    let mut sc = StyleContext::new(text, range, init_style, styler);
    while sc.more() {
        if continue_token(&mut sc, &mut st, options, keywords, &mut fold) == Flow::Reenter {
            continue;
        }
        if sc.state == Style::Default
            && open_token(&mut sc, &mut st, options, &mut fold) == Flow::Reenter
        {
            continue;
        }

        if !sc.state.is_space_equiv() {
            st.ch_prev_non_white = sc.ch;
            st.style_prev_non_white = sc.state;
        }
        if sc.at_line_end() {
            let record = fold.commit_line();
            if options.fold {
                sc.commit_fold(record);
            }
            sc.commit_line_context(st.ctx.pack());
        }
        sc.forward();
    }
    sc.complete();
}

/// Let the current state consume the byte or close its token.
fn continue_token<S: Styler>(
    sc: &mut StyleContext<S>,
    st: &mut ScanState,
    options: LexOptions,
    keywords: &KeywordSets,
    fold: &mut FoldTracker,
) -> Flow {
    match sc.state {
        Style::Operator | Style::MathOperator | Style::HtmlComment => {
            sc.set_state(Style::Default);
        }

        Style::Number => {
            if !is_decimal_number(sc.ch_prev, sc.ch, sc.ch_next) {
                if is_css_ident_start(sc.ch, sc.ch_next) {
                    sc.change_state(Style::Dimension);
                } else {
                    if sc.ch == b'%' {
                        sc.forward();
                    }
                    sc.set_state(Style::Default);
                }
            }
        }

        Style::CommentBlock | Style::CommentBlockDoc => {
            if sc.matches(b'*', b'/') {
                fold.close();
                sc.forward();
                sc.forward_set_state(Style::Default);
            }
        }

        Style::CommentLine | Style::CommentLineDoc => {
            if sc.at_line_start() {
                sc.set_state(Style::Default);
            }
        }

        Style::Dimension
        | Style::Variable
        | Style::AtRule
        | Style::Identifier
        | Style::PseudoClass
        | Style::PseudoElement => {
            return close_identifier(sc, st, options, keywords, fold);
        }

        Style::StringSingle | Style::StringDouble | Style::Url => {
            string_or_url(sc, st, options, fold);
        }

        Style::EscapeChar => {
            if st.esc.at_escape_end(sc.ch) {
                sc.set_state(st.esc.outer);
                return Flow::Reenter;
            }
        }

        Style::UnicodeRange => {
            if sc.ch == b'-' && is_unicode_range_char(sc.ch_next) {
                // second endpoint of a U+XXXX-XXXX range
                st.esc.digits_left = 7;
            } else if st.esc.at_range_end(sc.ch) {
                sc.set_state(Style::Default);
            }
        }

        // Final classifications: change_state retags a run into these, so
        // they are never the live state mid-scan, and a hostile restart
        // style simply persists until the host rescans from a sane line.
        Style::Default
        | Style::Function
        | Style::Tag
        | Style::Class
        | Style::Id
        | Style::Attribute
        | Style::Placeholder
        | Style::Important
        | Style::Property
        | Style::UnknownProperty
        | Style::Value
        | Style::UnknownPseudoClass
        | Style::UnknownPseudoElement => {}
    }
    Flow::Fall
}

/// Close an identifier-shaped token and classify it.
fn close_identifier<S: Styler>(
    sc: &mut StyleContext<S>,
    st: &mut ScanState,
    options: LexOptions,
    keywords: &KeywordSets,
    fold: &mut FoldTracker,
) -> Flow {
    if is_css_ident_char(sc.ch) {
        return Flow::Fall;
    }

    match sc.state {
        Style::Identifier => {
            let token = sc.token_lowered();
            let ch_next = sc.next_doc_char(sc.ch == b'(');
            if sc.ch == b'(' {
                sc.change_state(Style::Function);
                if keywords.math_function.contains_prefixed(&token) {
                    st.calc_func = true;
                } else if (token == "url" || token == "url-prefix")
                    && !matches!(ch_next, b'\'' | b'"' | b')')
                    && (ch_next != b'$' || options.dialect != Dialect::Scss)
                {
                    // raw (unquoted) url body, terminated only by `)`
                    fold.open();
                    st.ctx.paren_count += 1;
                    sc.set_state(Style::Operator);
                    sc.forward_set_state(Style::Url);
                    return Flow::Reenter;
                }
            } else if st.ch_before == b'!' && token == "important" {
                sc.change_state(Style::Important);
            } else if st.interpolation.is_some() {
                if options.dialect == Dialect::Less && st.ch_before == b'{' {
                    sc.change_state(Style::Variable);
                }
            } else if ch_next == b':' && st.ctx.paren_count != 0 {
                // (descriptor: value)
                sc.change_state(Style::Property);
            } else if st.ch_before == b':'
                || st.ch_before == b'='
                || (st.ctx.paren_count == 0 && st.ctx.property_value)
            {
                // declaration value, or the value side of [attr = value]
                sc.change_state(Style::Value);
            } else if !st.ctx.property_value {
                if st.ctx.attribute_selector {
                    sc.change_state(Style::Attribute);
                } else if st.ch_before == b'.' {
                    sc.change_state(Style::Class);
                } else if st.ch_before == b'#' {
                    sc.change_state(Style::Id);
                } else if st.ch_before == b'%' && options.dialect == Dialect::Scss {
                    sc.change_state(Style::Placeholder);
                } else if ch_next == b':' && (st.ch_before == b';' || st.ch_before == b'{') {
                    // {property: value;}
                    st.ctx.property_value = true;
                    if keywords.property.contains(&token) {
                        sc.change_state(Style::Property);
                    } else {
                        sc.change_state(Style::UnknownProperty);
                    }
                } else if st.ctx.paren_count == st.ctx.selector_level && ch_next != b'(' {
                    sc.change_state(Style::Tag);
                }
            }
        }

        Style::AtRule => {
            let token = sc.token_lowered();
            let name = token.strip_prefix('@').unwrap_or(&token);
            if st.ctx.property_value || !keywords.at_rule.contains(name) {
                sc.change_state(Style::Variable);
            }
        }

        Style::PseudoClass => {
            let token = sc.token_lowered();
            let name = token.strip_prefix(':').unwrap_or(&token);
            if !keywords.pseudo_class.contains_prefixed(name) {
                sc.change_state(Style::UnknownPseudoClass);
            } else if sc.ch == b'('
                && matches!(name, "is" | "has" | "not" | "where" | "current")
            {
                // selector-combinator argument list: identifiers inside are
                // selectors again, not function arguments
                st.ctx.selector_level += 1;
            }
        }

        Style::PseudoElement => {
            let token = sc.token_lowered();
            let name = token.strip_prefix("::").unwrap_or(&token);
            if !keywords.pseudo_element.contains_prefixed(name) {
                sc.change_state(Style::UnknownPseudoElement);
            }
        }

        // Dimension and Variable close without reclassification.
        _ => {}
    }

    // Record the final classification before the same byte may open a new
    // token; the opening dispatch needs it (`:` after a property name).
    st.style_prev_non_white = sc.state;
    sc.set_state(Style::Default);
    Flow::Fall
}

/// Consume one byte of a string or raw url body.
fn string_or_url<S: Styler>(
    sc: &mut StyleContext<S>,
    st: &mut ScanState,
    options: LexOptions,
    fold: &mut FoldTracker,
) {
    if sc.ch == b'\\' {
        if !is_eol(sc.ch_next) {
            st.esc.reset(sc.state, sc.ch_next);
            sc.set_state(Style::EscapeChar);
            sc.forward();
        }
    } else if sc.ch == b')' && sc.state == Style::Url {
        sc.set_state(Style::Default);
    } else if (sc.ch == b'\'' && sc.state == Style::StringSingle)
        || (sc.ch == b'"' && sc.state == Style::StringDouble)
    {
        sc.forward_set_state(Style::Default);
    } else if sc.ch_next == b'{' && options.dialect.interpolation_marker() == Some(sc.ch) {
        st.interpolation = Some(sc.state);
        fold.open();
        sc.set_state(Style::Operator);
        sc.forward();
    }
}

/// Try to open a token at the current byte, in priority order.
fn open_token<S: Styler>(
    sc: &mut StyleContext<S>,
    st: &mut ScanState,
    options: LexOptions,
    fold: &mut FoldTracker,
) -> Flow {
    if sc.ch == b'/' && (sc.ch_next == b'*' || (sc.ch_next == b'/' && options.dialect.line_comments()))
    {
        let block = sc.ch_next == b'*';
        if block {
            fold.open();
        }
        sc.set_state(if block {
            Style::CommentBlock
        } else {
            Style::CommentLine
        });
        sc.forward();
        if sc.ch_next == b'!' || sc.ch == sc.ch_next {
            sc.change_state(if block {
                Style::CommentBlockDoc
            } else {
                Style::CommentLineDoc
            });
        }
    } else if sc.ch == b'\'' {
        sc.set_state(Style::StringSingle);
    } else if sc.ch == b'"' {
        sc.set_state(Style::StringDouble);
    } else if is_html_comment_delimiter(sc) {
        sc.set_state(Style::HtmlComment);
        sc.forward_by(if sc.ch == b'<' { 3 } else { 2 });
    } else if is_number_start(sc.ch, sc.ch_next)
        || (sc.ch == b'#'
            && (st.ctx.property_value || st.ctx.paren_count > st.ctx.selector_level)
            && sc.ch_next.is_ascii_hexdigit())
    {
        sc.set_state(Style::Number);
    } else if sc.ch_next == b'+'
        && sc.ch.to_ascii_lowercase() == b'u'
        && st.ctx.property_value
        && (st.ch_prev_non_white == b':' || st.ch_prev_non_white == b',')
        && is_unicode_range_char(sc.relative(2))
    {
        st.esc.digits_left = 7;
        sc.set_state(Style::UnicodeRange);
        sc.forward();
    } else if is_css_ident_start_ex(sc.ch, sc.ch_next, options.dialect) {
        st.ch_before = st.ch_prev_non_white;
        sc.set_state(match sc.ch {
            b'@' => Style::AtRule,
            b'$' => Style::Variable,
            _ => Style::Identifier,
        });
    } else if sc.matches(b':', b':') && is_css_ident_char(sc.relative(2)) {
        sc.set_state(Style::PseudoElement);
        sc.forward_by(2);
    } else if sc.ch == b':'
        && !st.style_prev_non_white.is_property()
        && is_css_ident_char(sc.ch_next)
    {
        sc.set_state(Style::PseudoClass);
        sc.forward();
    } else if is_graphic(sc.ch) {
        sc.set_state(Style::Operator);
        match sc.ch {
            b'{' => {
                fold.open();
                if options.dialect.interpolation_marker() == Some(sc.ch_prev) {
                    if st.interpolation.is_none() {
                        st.interpolation = Some(Style::Default);
                    }
                } else {
                    // entering a rule body
                    st.ctx = LineContext::default();
                }
            }
            b'}' => {
                fold.close();
                if let Some(outer) = st.interpolation.take() {
                    sc.forward_set_state(outer);
                    return Flow::Reenter;
                }
                st.ctx = LineContext::default();
            }
            b'[' => {
                fold.open();
                st.ctx.attribute_selector = true;
            }
            b']' => {
                fold.close();
                st.ctx.attribute_selector = false;
            }
            b'(' => {
                fold.open();
                st.ctx.paren_count += 1;
                if st.ctx.calc_level != 0 || st.calc_func {
                    st.calc_func = false;
                    st.ctx.calc_level += 1;
                }
            }
            b')' => {
                fold.close();
                if st.ctx.paren_count > 0 {
                    st.ctx.paren_count -= 1;
                }
                if st.ctx.calc_level > 0 {
                    st.ctx.calc_level -= 1;
                }
                if st.ctx.selector_level > 0 {
                    st.ctx.selector_level -= 1;
                }
            }
            b':' => {
                if st.ctx.paren_count == 0 && !st.style_prev_non_white.is_property() {
                    st.ctx.property_value = true;
                }
            }
            b';' => {
                if st.ctx.paren_count == 0 && !st.ctx.attribute_selector {
                    st.ctx.property_value = false;
                }
            }
            b'+' | b'-' | b'*' | b'/' => {
                if st.ctx.calc_level != 0
                    && (st.ch_prev_non_white == b')'
                        || matches!(
                            st.style_prev_non_white,
                            Style::Number | Style::Dimension
                        ))
                {
                    sc.change_state(Style::MathOperator);
                }
            }
            _ => {}
        }
    }
    Flow::Fall
}

/// `<!--` or `-->` at the current position.
fn is_html_comment_delimiter<S: Styler>(sc: &StyleContext<S>) -> bool {
    (sc.ch == b'<' && sc.ch_next == b'!' && sc.relative(2) == b'-' && sc.relative(3) == b'-')
        || (sc.ch == b'-' && sc.ch_next == b'-' && sc.relative(2) == b'>')
}

/// Dialect-aware identifier start: a plain start byte, or `-`/`@`/`$`
/// (the latter in dollar-variable dialects) leading into an identifier byte.
fn is_css_ident_start_ex(b: u8, next: u8, dialect: Dialect) -> bool {
    is_ident_start(b)
        || ((b == b'-' || b == b'@' || (dialect.dollar_variables() && b == b'$'))
            && is_css_ident_char(next))
}

/// Re-derive the lookbehind byte/style pair from styles persisted below the
/// range start, skipping whitespace-equivalent spans.
fn lookback_non_white<S: Styler>(
    text: &SourceText,
    styler: &S,
    start: usize,
    st: &mut ScanState,
) {
    let mut pos = start;
    while pos > 0 {
        pos -= 1;
        let style = styler.style_at(pos);
        if !style.is_space_equiv() {
            st.ch_prev_non_white = text.byte(pos);
            st.style_prev_non_white = style;
            return;
        }
    }
}
