//! Preprocessor dialect selection.
//!
//! The dialect is fixed for a whole document and read once from a host
//! integer property. It only changes three things: which characters may
//! start an identifier (`$` variables), which marker opens an interpolation
//! span, and whether `//` line comments exist.

/// CSS-family dialect recognized by the scanner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Standard CSS.
    #[default]
    Css,
    /// Sass/SCSS: <https://sass-lang.com/documentation>
    Scss,
    /// Less: <https://lesscss.org/features/>
    Less,
    /// HSS: <https://github.com/ncannasse/hss>
    Hss,
}

impl Dialect {
    /// Map a host integer property to a dialect. Unknown values fall back
    /// to standard CSS.
    pub fn from_property(value: i32) -> Dialect {
        match value {
            1 => Dialect::Scss,
            2 => Dialect::Less,
            3 => Dialect::Hss,
            _ => Dialect::Css,
        }
    }

    /// `$name` starts a variable in SCSS and Less only.
    #[inline]
    pub fn dollar_variables(self) -> bool {
        matches!(self, Dialect::Scss | Dialect::Less)
    }

    /// `//` line comments exist in every preprocessor dialect but not in
    /// standard CSS, where `/` stays an ordinary operator.
    #[inline]
    pub fn line_comments(self) -> bool {
        self != Dialect::Css
    }

    /// The byte that, followed by `{`, opens an interpolation span:
    /// `#{...}` in SCSS, `@{...}` in Less, none elsewhere.
    #[inline]
    pub fn interpolation_marker(self) -> Option<u8> {
        match self {
            Dialect::Scss => Some(b'#'),
            Dialect::Less => Some(b'@'),
            Dialect::Css | Dialect::Hss => None,
        }
    }
}
