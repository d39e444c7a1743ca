//! Property predicates, the leaves of query expressions

use super::{
    Age, BinaryProperty, Block, CanonicalCombiningClass, ComplexProperty, EastAsianWidth,
    GeneralCategory, GraphemeClusterBreak, IndicConjunctBreak, IndicSyllabicCategory, Script,
};
use crate::error::{Error, FormatError, Result};
use std::fmt;
use std::str::FromStr;

/// A test of one code point property
///
/// A binary property holds for its listed code points. A complex property
/// value holds for the code points that have that value, including the code
/// points that have it by default. General category groups such as `L` hold
/// for every category in the group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Predicate {
    /// Binary property
    Binary(BinaryProperty),
    /// Age
    Age(Age),
    /// Block
    Block(Block),
    /// General_Category, including groups
    Category(GeneralCategory),
    /// Canonical_Combining_Class
    CombiningClass(CanonicalCombiningClass),
    /// East_Asian_Width
    EastAsianWidth(EastAsianWidth),
    /// Grapheme_Cluster_Break
    GraphemeClusterBreak(GraphemeClusterBreak),
    /// Indic_Conjunct_Break
    IndicConjunctBreak(IndicConjunctBreak),
    /// Indic_Syllabic_Category
    IndicSyllabicCategory(IndicSyllabicCategory),
    /// Script
    Script(Script),
}

impl Predicate {
    /// Complex property tested, `None` for binary properties
    pub fn property(&self) -> Option<ComplexProperty> {
        Some(match self {
            Predicate::Binary(_) => return None,
            Predicate::Age(_) => ComplexProperty::Age,
            Predicate::Block(_) => ComplexProperty::Block,
            Predicate::Category(_) => ComplexProperty::GeneralCategory,
            Predicate::CombiningClass(_) => ComplexProperty::CanonicalCombiningClass,
            Predicate::EastAsianWidth(_) => ComplexProperty::EastAsianWidth,
            Predicate::GraphemeClusterBreak(_) => ComplexProperty::GraphemeClusterBreak,
            Predicate::IndicConjunctBreak(_) => ComplexProperty::IndicConjunctBreak,
            Predicate::IndicSyllabicCategory(_) => ComplexProperty::IndicSyllabicCategory,
            Predicate::Script(_) => ComplexProperty::Script,
        })
    }

    /// Check whether this predicate holds for unlisted code points
    pub fn is_default(&self) -> bool {
        match self.property() {
            Some(property) => property.default_predicate() == *self,
            None => false,
        }
    }

    /// Parse `Name` for a binary property or `Property=Value` for a complex one
    pub fn parse(text: &str) -> Result<Self> {
        let unknown = |property: &'static str, value: &str| -> Error {
            FormatError::UnknownValue {
                property,
                value: value.to_string(),
            }
            .into()
        };

        let Some((property, value)) = text.split_once('=') else {
            return BinaryProperty::lookup(text)
                .map(Predicate::Binary)
                .ok_or_else(|| unknown("binary property", text));
        };

        let property =
            ComplexProperty::lookup(property).ok_or_else(|| unknown("property", property))?;
        Ok(match property {
            ComplexProperty::Age => Predicate::Age(value.parse()?),
            ComplexProperty::Block => Predicate::Block(value.parse()?),
            ComplexProperty::CanonicalCombiningClass => {
                Predicate::CombiningClass(CanonicalCombiningClass::parse(value)?)
            }
            ComplexProperty::EastAsianWidth => Predicate::EastAsianWidth(value.parse()?),
            ComplexProperty::GeneralCategory => Predicate::Category(value.parse()?),
            ComplexProperty::GraphemeClusterBreak => {
                Predicate::GraphemeClusterBreak(value.parse()?)
            }
            ComplexProperty::IndicConjunctBreak => Predicate::IndicConjunctBreak(value.parse()?),
            ComplexProperty::IndicSyllabicCategory => {
                Predicate::IndicSyllabicCategory(value.parse()?)
            }
            ComplexProperty::Script => Predicate::Script(value.parse()?),
        })
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Binary(p) => write!(f, "{p}"),
            Predicate::Age(v) => write!(f, "Age={}", v.alias()),
            Predicate::Block(v) => write!(f, "Block={v}"),
            Predicate::Category(v) => write!(f, "General_Category={v}"),
            Predicate::CombiningClass(v) => write!(f, "Canonical_Combining_Class={}", v.0),
            Predicate::EastAsianWidth(v) => write!(f, "East_Asian_Width={v}"),
            Predicate::GraphemeClusterBreak(v) => write!(f, "Grapheme_Cluster_Break={v}"),
            Predicate::IndicConjunctBreak(v) => write!(f, "Indic_Conjunct_Break={v}"),
            Predicate::IndicSyllabicCategory(v) => write!(f, "Indic_Syllabic_Category={v}"),
            Predicate::Script(v) => write!(f, "Script={v}"),
        }
    }
}

impl FromStr for Predicate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Predicate::parse(s)
    }
}

impl From<BinaryProperty> for Predicate {
    fn from(p: BinaryProperty) -> Self {
        Predicate::Binary(p)
    }
}

macro_rules! predicate_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Predicate {
                fn from(v: $ty) -> Self {
                    Predicate::$variant(v)
                }
            }
        )*
    };
}

predicate_from! {
    Age => Age,
    Block => Block,
    GeneralCategory => Category,
    CanonicalCombiningClass => CombiningClass,
    EastAsianWidth => EastAsianWidth,
    GraphemeClusterBreak => GraphemeClusterBreak,
    IndicConjunctBreak => IndicConjunctBreak,
    IndicSyllabicCategory => IndicSyllabicCategory,
    Script => Script,
}
