//! Packed per-line scan context.
//!
//! The host stores one opaque `u32` per line; it is the only cross-line
//! memory the scanner needs besides the style persisted for the byte before
//! the restart point. The packed layout is:
//!
//! ```text
//! bit  0       property_value
//! bit  1       attribute_selector
//! bits 2-7     calc_level      (saturates at 63)
//! bits 8-15    paren_count     (saturates at 255)
//! bits 16-31   selector_level  (saturates at 65535)
//! ```
//!
//! Saturation clamps a field silently; pathological nesting degrades
//! depth-tracking accuracy for that field but never corrupts its neighbours.
//! Internally the scanner works on this unpacked struct and only packs at
//! the line boundary.

/// Maximum calc-function nesting depth representable in the packed form.
pub const CALC_LEVEL_MAX: u32 = 0x3F;
/// Maximum parenthesis depth representable in the packed form.
pub const PAREN_COUNT_MAX: u32 = 0xFF;
/// Maximum selector nesting depth representable in the packed form.
pub const SELECTOR_LEVEL_MAX: u32 = 0xFFFF;

/// Cross-line scan context, stored packed as one `u32` per line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineContext {
    /// Inside a declaration's value (between `:` and `;`/`}`).
    pub property_value: bool,
    /// Inside a `[...]` attribute selector.
    pub attribute_selector: bool,
    /// Nesting depth of math-function argument lists (`calc()`, `min()`, ...).
    pub calc_level: u32,
    /// Nesting depth of all `(...)` pairs.
    pub paren_count: u32,
    /// Nesting depth opened by selector-combinator pseudo-classes
    /// (`:is()`, `:has()`, `:not()`, `:where()`, `:current()`).
    pub selector_level: u32,
}

impl LineContext {
    /// Pack into the per-line `u32`, clamping each counter to its field width.
    pub fn pack(self) -> u32 {
        u32::from(self.property_value)
            | (u32::from(self.attribute_selector) << 1)
            | (self.calc_level.min(CALC_LEVEL_MAX) << 2)
            | (self.paren_count.min(PAREN_COUNT_MAX) << 8)
            | (self.selector_level.min(SELECTOR_LEVEL_MAX) << 16)
    }

    /// Exact inverse of [`pack`](Self::pack) over in-range values.
    pub fn unpack(bits: u32) -> Self {
        Self {
            property_value: bits & 1 != 0,
            attribute_selector: bits & 2 != 0,
            calc_level: (bits >> 2) & CALC_LEVEL_MAX,
            paren_count: (bits >> 8) & PAREN_COUNT_MAX,
            selector_level: bits >> 16,
        }
    }
}
