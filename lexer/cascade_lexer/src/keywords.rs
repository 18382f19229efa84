//! Keyword sets consulted when an identifier-shaped token closes.
//!
//! A set is built once from a whitespace-separated word list (the format
//! editor configuration files ship keyword lists in) and queried with the
//! lowercased token text. A list entry ending in `(` marks a function-form
//! keyword: `nth-child(` matches the token `nth-child`, whether or not the
//! scanner saw the paren. The `(` marks the entry as function-form, it is
//! not a hard requirement on the token.

use rustc_hash::FxHashSet;

/// One case-insensitive word list.
#[derive(Clone, Debug, Default)]
pub struct WordSet {
    plain: FxHashSet<Box<str>>,
    /// Stems of entries written with a trailing `(`.
    prefixed: FxHashSet<Box<str>>,
}

impl WordSet {
    /// Build from a whitespace-separated list. Entries are lowercased;
    /// a trailing `(` moves the entry into the function-form set.
    pub fn new(list: &str) -> Self {
        let mut plain = FxHashSet::default();
        let mut prefixed = FxHashSet::default();
        for word in list.split_ascii_whitespace() {
            let lowered = word.to_ascii_lowercase();
            if let Some(stem) = lowered.strip_suffix('(') {
                prefixed.insert(Box::from(stem));
            } else {
                plain.insert(lowered.into_boxed_str());
            }
        }
        Self { plain, prefixed }
    }

    /// Exact membership among the plain entries.
    pub fn contains(&self, word: &str) -> bool {
        self.plain.contains(word)
    }

    /// Membership among plain entries or function-form stems.
    pub fn contains_prefixed(&self, word: &str) -> bool {
        self.plain.contains(word) || self.prefixed.contains(word)
    }
}

/// The five keyword categories the scanner classifies against.
#[derive(Clone, Debug, Default)]
pub struct KeywordSets {
    /// Known property names; misses style as `UnknownProperty`.
    pub property: WordSet,
    /// At-rule names, sans the leading `@`.
    pub at_rule: WordSet,
    /// Pseudo-class names, sans the leading `:`.
    pub pseudo_class: WordSet,
    /// Pseudo-element names, sans the leading `::`.
    pub pseudo_element: WordSet,
    /// Functions whose argument lists get arithmetic-operator styling.
    pub math_function: WordSet,
}

impl KeywordSets {
    /// Built-in word lists covering the common modern vocabulary. Hosts
    /// with their own configuration build [`WordSet`]s directly instead.
    pub fn default_lists() -> Self {
        Self {
            property: WordSet::new(PROPERTIES),
            at_rule: WordSet::new(AT_RULES),
            pseudo_class: WordSet::new(PSEUDO_CLASSES),
            pseudo_element: WordSet::new(PSEUDO_ELEMENTS),
            math_function: WordSet::new(MATH_FUNCTIONS),
        }
    }
}

const PROPERTIES: &str = "\
align-content align-items align-self all animation animation-delay \
animation-direction animation-duration animation-fill-mode \
animation-iteration-count animation-name animation-play-state \
animation-timing-function appearance aspect-ratio backdrop-filter \
backface-visibility background background-attachment background-blend-mode \
background-clip background-color background-image background-origin \
background-position background-repeat background-size border border-bottom \
border-bottom-color border-bottom-left-radius border-bottom-right-radius \
border-bottom-style border-bottom-width border-collapse border-color \
border-image border-left border-radius border-right border-spacing \
border-style border-top border-width bottom box-shadow box-sizing \
caption-side caret-color clear clip clip-path color column-count column-gap \
columns contain content counter-increment counter-reset cursor direction \
display empty-cells filter flex flex-basis flex-direction flex-flow \
flex-grow flex-shrink flex-wrap float font font-family \
font-feature-settings font-kerning font-size font-size-adjust font-stretch \
font-style font-variant font-weight gap grid grid-area grid-auto-columns \
grid-auto-flow grid-auto-rows grid-column grid-gap grid-row grid-template \
grid-template-areas grid-template-columns grid-template-rows height hyphens \
inset isolation justify-content justify-items justify-self left \
letter-spacing line-break line-height list-style list-style-image \
list-style-position list-style-type margin margin-bottom margin-left \
margin-right margin-top mask max-height max-width min-height min-width \
mix-blend-mode object-fit object-position opacity order orphans outline \
outline-color outline-offset outline-style outline-width overflow \
overflow-wrap overflow-x overflow-y padding padding-bottom padding-left \
padding-right padding-top page-break-after page-break-before \
page-break-inside perspective perspective-origin place-content place-items \
place-self pointer-events position quotes resize right rotate row-gap scale \
scroll-behavior scroll-margin scroll-padding scroll-snap-align \
scroll-snap-type src tab-size table-layout text-align text-align-last \
text-decoration text-decoration-color text-decoration-line \
text-decoration-style text-indent text-justify text-overflow text-rendering \
text-shadow text-transform top touch-action transform transform-origin \
transform-style transition transition-delay transition-duration \
transition-property transition-timing-function translate unicode-bidi \
unicode-range user-select vertical-align visibility white-space widows \
width will-change word-break word-spacing word-wrap writing-mode z-index";

const AT_RULES: &str = "\
annotation apply at-root character-variant charset container content \
counter-style debug document each else error font-face \
font-feature-values for forward function if import include keyframes \
layer media mixin namespace ornaments page property return scope \
starting-style styleset stylistic supports swash tailwind use viewport \
warn while";

const PSEUDO_CLASSES: &str = "\
active any-link autofill blank checked current( default defined dir( \
disabled empty enabled first first-child first-of-type focus focus-visible \
focus-within fullscreen future has( host host( host-context( hover \
in-range indeterminate invalid is( lang( last-child last-of-type left \
link local-link modal not( nth-child( nth-col( nth-last-child( \
nth-last-col( nth-last-of-type( nth-of-type( only-child only-of-type \
optional out-of-range past paused picture-in-picture placeholder-shown \
playing read-only read-write required right root scope target \
target-within user-invalid user-valid valid visited where(";

const PSEUDO_ELEMENTS: &str = "\
after backdrop before cue cue-region file-selector-button first-letter \
first-line grammar-error highlight( marker part( placeholder selection \
slotted( spelling-error target-text";

const MATH_FUNCTIONS: &str = "\
abs( acos( asin( atan( atan2( calc( clamp( cos( exp( hypot( log( max( \
min( mod( pow( rem( round( sign( sin( sqrt( tan(";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_entries_match_exactly() {
        let set = WordSet::new("color width height");
        assert!(set.contains("color"));
        assert!(!set.contains("colors"));
        assert!(!set.contains("col"));
    }

    #[test]
    fn entries_are_lowercased_at_build_time() {
        let set = WordSet::new("Color WIDTH");
        assert!(set.contains("color"));
        assert!(set.contains("width"));
    }

    #[test]
    fn function_form_entries_match_under_prefixed_lookup_only() {
        let set = WordSet::new("hover nth-child(");
        assert!(set.contains_prefixed("nth-child"));
        assert!(!set.contains("nth-child"));
        // plain entries also satisfy the prefixed lookup
        assert!(set.contains_prefixed("hover"));
    }

    #[test]
    fn default_lists_cover_the_test_vocabulary() {
        let keywords = KeywordSets::default_lists();
        assert!(keywords.property.contains("color"));
        assert!(keywords.property.contains("width"));
        assert!(keywords.at_rule.contains("media"));
        assert!(keywords.pseudo_class.contains_prefixed("hover"));
        assert!(keywords.pseudo_class.contains_prefixed("is"));
        assert!(keywords.pseudo_element.contains_prefixed("before"));
        assert!(keywords.math_function.contains_prefixed("calc"));
        assert!(!keywords.math_function.contains_prefixed("url"));
    }
}
