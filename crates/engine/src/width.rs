//! Fixed display widths
//!
//! The width of a code point in a terminal, following Markus Kuhn's
//! `wcwidth()`, which most terminal emulators implement in some form:
//! - 0 for NUL, enclosing and nonspacing marks, format controls, default
//!   ignorable code points, code points with a non-zero canonical combining
//!   class, and Hangul medial vowels and final consonants; SOFT HYPHEN is
//!   the one exception and stays visible
//! - -1 for C0 and C1 controls, surrogates and private use
//! - 2 for East Asian Wide and Fullwidth
//! - 1 otherwise

use ucdb_core::{CanonicalCombiningClass, CodePoint, EastAsianWidth, GeneralCategory};

/// Properties of a code point that determine its width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthProperties {
    /// General category
    pub category: GeneralCategory,
    /// East Asian width
    pub east_asian_width: EastAsianWidth,
    /// Canonical combining class
    pub combining_class: CanonicalCombiningClass,
    /// Whether the code point is a default ignorable code point
    pub is_default_ignorable: bool,
}

impl WidthProperties {
    /// Properties of a code point without combining class or ignorability
    pub fn new(category: GeneralCategory, east_asian_width: EastAsianWidth) -> Self {
        WidthProperties {
            category,
            east_asian_width,
            combining_class: CanonicalCombiningClass::NOT_REORDERED,
            is_default_ignorable: false,
        }
    }

    /// Set the canonical combining class
    pub fn combining_class(mut self, combining_class: CanonicalCombiningClass) -> Self {
        self.combining_class = combining_class;
        self
    }

    /// Set whether the code point is default ignorable
    pub fn default_ignorable(mut self, is_default_ignorable: bool) -> Self {
        self.is_default_ignorable = is_default_ignorable;
        self
    }
}

/// Width of a single code point, or -1 if it cannot be displayed
pub fn fixed_width(cp: CodePoint, properties: WidthProperties) -> i8 {
    if is_zero_width(cp, properties) {
        return 0;
    }
    if is_undisplayable(cp, properties.category) {
        return -1;
    }
    if properties.east_asian_width.is_wide() {
        2
    } else {
        1
    }
}

/// Check for a code point that takes up no space
pub fn is_zero_width(cp: CodePoint, properties: WidthProperties) -> bool {
    if cp == CodePoint::SOFT_HYPHEN {
        return false;
    }
    cp == CodePoint::NULL
        || matches!(
            properties.category,
            GeneralCategory::Enclosing_Mark | GeneralCategory::Nonspacing_Mark | GeneralCategory::Format
        )
        || properties.is_default_ignorable
        || properties.combining_class != CanonicalCombiningClass::NOT_REORDERED
        || (CodePoint::HANGUL_JUNGSEONG_FILLER..=CodePoint::HANGUL_JONGSEONG_SSANGNIEUN).contains(&cp)
}

/// Check for a control, surrogate or private use code point
pub fn is_undisplayable(cp: CodePoint, category: GeneralCategory) -> bool {
    matches!(category, GeneralCategory::Surrogate | GeneralCategory::Private_Use)
        || cp.value() < 0x20
        || (CodePoint::DELETE..CodePoint::NO_BREAK_SPACE).contains(&cp)
}

/// Total width of code points with known widths, -1 if any is undisplayable
pub fn total_width<I>(widths: I) -> i8
where
    I: IntoIterator<Item = i8>,
{
    let mut total: i8 = 0;
    for width in widths {
        if width < 0 {
            return -1;
        }
        total = total.saturating_add(width);
    }
    total
}
