//! Per-character summary returned by point lookups

use std::collections::BTreeSet;
use std::fmt;
use ucdb_core::{
    Age, BinaryProperty, Block, CanonicalCombiningClass, CodePoint, EastAsianWidth,
    GeneralCategory,
};

use crate::width::{self, WidthProperties};

/// Everything a renderer needs to know about one code point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterData {
    /// The code point
    pub codepoint: CodePoint,
    /// General category, `Unassigned` for unassigned code points
    pub category: GeneralCategory,
    /// East Asian width
    pub east_asian_width: EastAsianWidth,
    /// Canonical combining class
    pub combining_class: CanonicalCombiningClass,
    /// Version that assigned the code point
    pub age: Option<Age>,
    /// Character name
    pub name: Option<String>,
    /// Containing block
    pub block: Option<Block>,
    /// Binary properties the code point has
    pub flags: BTreeSet<BinaryProperty>,
}

impl CharacterData {
    /// Check whether the code point has the binary property
    pub fn has(&self, property: BinaryProperty) -> bool {
        self.flags.contains(&property)
    }

    fn width_properties(&self) -> WidthProperties {
        WidthProperties::new(self.category, self.east_asian_width)
            .combining_class(self.combining_class)
            .default_ignorable(self.has(BinaryProperty::Default_Ignorable_Code_Point))
    }

    /// Check whether the code point takes up no space
    pub fn is_zero_width(&self) -> bool {
        width::is_zero_width(self.codepoint, self.width_properties())
    }

    /// Check whether the code point is a control, surrogate or private use
    pub fn is_invalid(&self) -> bool {
        width::is_undisplayable(self.codepoint, self.category)
    }

    /// Fixed display width
    pub fn width(&self) -> i8 {
        width::fixed_width(self.codepoint, self.width_properties())
    }
}

impl fmt::Display for CharacterData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.codepoint, self.category.alias())?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        Ok(())
    }
}
